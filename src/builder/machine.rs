//! Builder for constructing vending machines.

use crate::builder::error::{BuildError, ConfigViolation};
use crate::engine::Machine;
use crate::vending::{Inventory, VendingMachine, VendingRules, VendingState};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Transitions kept when no history limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// How the initial state is chosen for a machine built with no stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitialStatePolicy {
    /// Always start in `Stocked`; an empty machine is discovered on the first
    /// `request_item`, which moves it to `OutOfStock`.
    #[default]
    Lazy,

    /// Start in `OutOfStock` when the initial stock is zero.
    Eager,
}

impl InitialStatePolicy {
    /// The state a machine holding `initial_stock` items starts in.
    pub fn initial_state(self, initial_stock: u32) -> VendingState {
        match self {
            Self::Eager if initial_stock == 0 => VendingState::OutOfStock,
            Self::Lazy | Self::Eager => VendingState::Stocked,
        }
    }
}

/// Builder for constructing vending machines with a fluent API.
///
/// ```
/// use vending_fsm::builder::{InitialStatePolicy, VendingMachineBuilder};
/// use vending_fsm::vending::VendingState;
///
/// let machine = VendingMachineBuilder::new()
///     .unit_price(10)
///     .initial_state_policy(InitialStatePolicy::Eager)
///     .history_limit(64)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), VendingState::OutOfStock);
/// ```
#[derive(Debug, Clone)]
pub struct VendingMachineBuilder {
    initial_stock: u32,
    unit_price: Option<u32>,
    policy: InitialStatePolicy,
    history_limit: Option<usize>,
}

impl Default for VendingMachineBuilder {
    fn default() -> Self {
        Self {
            initial_stock: 0,
            unit_price: None,
            policy: InitialStatePolicy::default(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl VendingMachineBuilder {
    /// Create a builder with no stock and no price.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial stock count (defaults to 0).
    pub fn initial_stock(mut self, count: u32) -> Self {
        self.initial_stock = count;
        self
    }

    /// Set the unit price (required, positive).
    pub fn unit_price(mut self, price: u32) -> Self {
        self.unit_price = Some(price);
        self
    }

    /// Choose how an empty initial stock is handled.
    pub fn initial_state_policy(mut self, policy: InitialStatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Keep only the `limit` most recent transitions
    /// (defaults to [`DEFAULT_HISTORY_LIMIT`]).
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Keep every transition for the life of the machine.
    pub fn unbounded_history(mut self) -> Self {
        self.history_limit = None;
        self
    }

    /// Check the configuration, accumulating every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![
            require(self.unit_price.is_some(), ConfigViolation::MissingUnitPrice),
            require(self.unit_price != Some(0), ConfigViolation::ZeroUnitPrice),
            require(
                self.history_limit != Some(0),
                ConfigViolation::ZeroHistoryLimit,
            ),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the machine.
    /// Returns an error listing every configuration violation.
    pub fn build(self) -> Result<VendingMachine, BuildError> {
        if let Validation::Failure(violations) = self.validate() {
            return Err(BuildError::InvalidConfig(
                violations.iter().copied().collect(),
            ));
        }
        let unit_price = self
            .unit_price
            .ok_or_else(|| BuildError::InvalidConfig(vec![ConfigViolation::MissingUnitPrice]))?;

        let initial = self.policy.initial_state(self.initial_stock);
        debug!(
            initial_stock = self.initial_stock,
            unit_price,
            policy = ?self.policy,
            state = %initial,
            "building vending machine"
        );

        let mut machine =
            Machine::<VendingRules>::new(initial, Inventory::new(self.initial_stock, unit_price));
        if let Some(limit) = self.history_limit {
            machine = machine.with_history_limit(limit);
        }
        Ok(VendingMachine::from_machine(machine))
    }
}

fn require(
    holds: bool,
    violation: ConfigViolation,
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_price() {
        let result = VendingMachineBuilder::new().initial_stock(3).build();

        assert_eq!(
            result.unwrap_err().violations(),
            &[ConfigViolation::MissingUnitPrice]
        );
    }

    #[test]
    fn builder_rejects_zero_price() {
        let result = VendingMachineBuilder::new().unit_price(0).build();

        assert_eq!(
            result.unwrap_err().violations(),
            &[ConfigViolation::ZeroUnitPrice]
        );
    }

    #[test]
    fn builder_accumulates_all_violations() {
        let builder = VendingMachineBuilder::new().unit_price(0).history_limit(0);

        match builder.validate() {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 2);
                assert!(violations
                    .iter()
                    .any(|v| *v == ConfigViolation::ZeroUnitPrice));
                assert!(violations
                    .iter()
                    .any(|v| *v == ConfigViolation::ZeroHistoryLimit));
            }
            Validation::Success(_) => panic!("Expected violations, got success"),
        }
    }

    #[test]
    fn valid_configuration_passes() {
        let builder = VendingMachineBuilder::new().unit_price(10).history_limit(8);
        assert!(builder.validate().is_success());
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = VendingMachineBuilder::new()
            .initial_stock(5)
            .unit_price(25)
            .build()
            .unwrap();

        assert_eq!(machine.state(), VendingState::Stocked);
        assert_eq!(machine.stock_count(), 5);
        assert_eq!(machine.unit_price(), 25);
    }

    #[test]
    fn lazy_policy_starts_stocked_even_when_empty() {
        assert_eq!(InitialStatePolicy::Lazy.initial_state(0), VendingState::Stocked);
        assert_eq!(InitialStatePolicy::default(), InitialStatePolicy::Lazy);
    }

    #[test]
    fn eager_policy_corrects_empty_start() {
        assert_eq!(
            InitialStatePolicy::Eager.initial_state(0),
            VendingState::OutOfStock
        );
        assert_eq!(InitialStatePolicy::Eager.initial_state(1), VendingState::Stocked);
    }

    #[test]
    fn history_limit_is_applied() {
        let mut machine = VendingMachineBuilder::new()
            .initial_stock(3)
            .unit_price(1)
            .history_limit(2)
            .build()
            .unwrap();

        for _ in 0..2 {
            machine.request_item().unwrap();
            machine.insert_payment(1).unwrap();
            machine.dispense().unwrap();
        }

        assert_eq!(machine.history().len(), 2);
    }

    #[test]
    fn thousands_of_sales_stay_within_history_limit() {
        let sales = 5_000;
        let mut machine = VendingMachineBuilder::new()
            .initial_stock(sales)
            .unit_price(1)
            .history_limit(100)
            .build()
            .unwrap();

        for _ in 0..sales {
            machine.request_item().unwrap();
            machine.insert_payment(1).unwrap();
            machine.dispense().unwrap();
        }

        assert_eq!(machine.stock_count(), 0);
        assert_eq!(machine.state(), VendingState::OutOfStock);
        assert_eq!(machine.history().len(), 100);
        let last = machine.history().last().unwrap();
        assert_eq!(last.from, VendingState::Funded);
        assert_eq!(last.to, VendingState::OutOfStock);
    }

    #[test]
    fn default_history_is_bounded() {
        let mut machine = VendingMachineBuilder::new()
            .initial_stock(2_000)
            .unit_price(1)
            .build()
            .unwrap();

        for _ in 0..1_000 {
            machine.request_item().unwrap();
            machine.insert_payment(1).unwrap();
            machine.dispense().unwrap();
        }

        assert_eq!(machine.history().len(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn unbounded_history_keeps_every_transition() {
        let mut machine = VendingMachineBuilder::new()
            .initial_stock(600)
            .unit_price(1)
            .unbounded_history()
            .build()
            .unwrap();

        for _ in 0..600 {
            machine.request_item().unwrap();
            machine.insert_payment(1).unwrap();
            machine.dispense().unwrap();
        }

        assert_eq!(machine.history().len(), 1_800);
        assert!(machine.history().len() > DEFAULT_HISTORY_LIMIT);
    }
}

//! Build errors for the vending machine builder.

use thiserror::Error;

/// A single problem with a machine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("Unit price not specified. Call .unit_price(price) before .build()")]
    MissingUnitPrice,

    #[error("Unit price must be positive")]
    ZeroUnitPrice,

    #[error("History limit must be positive. Call .unbounded_history() to keep every transition")]
    ZeroHistoryLimit,
}

/// Errors that can occur when building a vending machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Every violation found, not just the first.
    #[error("Invalid machine configuration: {}", join(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}

impl BuildError {
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::InvalidConfig(violations) => violations,
        }
    }
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

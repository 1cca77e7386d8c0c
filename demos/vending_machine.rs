//! Vending Machine
//!
//! This example replays a two-sale session against the vending controller,
//! including a rejected underpayment and a restock after selling out.
//!
//! Key concepts:
//! - Every operation is evaluated against the current state
//! - Rejections are ordinary values the caller can recover from
//! - Transitions are logged through `tracing`
//!
//! Run with: RUST_LOG=vending_fsm=debug cargo run --example vending_machine

use tracing_subscriber::EnvFilter;
use vending_fsm::vending::{VendingError, VendingMachine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vending_fsm=info")),
        )
        .init();

    println!("=== Vending Machine Example ===\n");

    let mut machine = VendingMachine::new(1, 10)?;

    machine.request_item()?;
    if let Err(VendingError::InsufficientFunds { received, required }) = machine.insert_payment(5)
    {
        println!("Payment of {received} refused, {required} needed; paying in full");
    }
    machine.insert_payment(10)?;
    machine.dispense()?;
    println!("State after first sale: {}", machine.state());

    if let Err(error) = machine.request_item() {
        println!("Request refused: {error}");
    }

    machine.add_stock(2)?;
    machine.request_item()?;
    machine.insert_payment(10)?;
    machine.dispense()?;

    println!("\nFinal state: {}", machine.state());
    println!("Items left: {}", machine.stock_count());
    println!("Transitions recorded: {}", machine.history().len());
    if let Some(duration) = machine.history().duration() {
        println!("Session length: {duration:?}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

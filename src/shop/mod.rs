//! Day-advance orchestration over a stocked inventory.
//!
//! The `Shop` owns an ordered collection of items, resolves each name
//! to a category once at stocking time, and applies the transition
//! rules to every item on each `advance_day` call.
//!
//! ## Key Types
//!
//! - `Shop`: The inventory and its day-advance loop
//! - `StockedItem`: An item paired with its resolved category

pub mod inventory;

pub use inventory::{Shop, StockedItem};

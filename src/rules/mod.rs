//! Per-category transition rules.
//!
//! One call to `tick` advances a single item's state by one day. Rules
//! are pure functions over `(sell_in, quality)`: total over all integer
//! inputs, deterministic, and free of error paths.
//!
//! The shared quality bounds live here as named constants so no rule
//! branch carries its own copy of 0 or 50.

pub mod tick;

pub use tick::{tick, tick_item, MAX_QUALITY, MIN_QUALITY};

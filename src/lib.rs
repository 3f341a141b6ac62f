//! # gilded-rose
//!
//! An inventory aging engine for the Gilded Rose shop.
//!
//! Items age one day at a time: each tick decrements an item's `sell_in`
//! and moves its `quality` according to the item's category.
//!
//! ## Design Principles
//!
//! 1. **Closed Categories**: Aging behaviors are a fixed enumeration.
//!    Every rule dispatch is an exhaustive match - there is no open-ended
//!    string inspection inside the tick loop.
//!
//! 2. **Classify Once**: Names resolve to categories when items are
//!    stocked, via the `Catalog`. Ticks never re-read the name.
//!
//! 3. **Pure Transitions**: `tick` is a total function over integer
//!    state. No error paths, no I/O, no hidden state.
//!
//! ## Modules
//!
//! - `items`: Item state, categories, and the name catalog
//! - `rules`: Per-category one-day transition rules
//! - `shop`: Day-advance orchestration over a stocked inventory

pub mod items;
pub mod rules;
pub mod shop;

// Re-export commonly used types
pub use crate::items::{
    Catalog, Category, Item,
    AGED_BRIE, BACKSTAGE_PASS, CONJURED, SULFURAS,
};

pub use crate::rules::{tick, tick_item, MAX_QUALITY, MIN_QUALITY};

pub use crate::shop::{Shop, StockedItem};

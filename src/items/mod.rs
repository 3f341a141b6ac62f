//! Item system: runtime state, categories, and the name catalog.
//!
//! ## Key Types
//!
//! - `Item`: Runtime item state (`name`, `sell_in`, `quality`)
//! - `Category`: Closed enumeration of aging behaviors
//! - `Catalog`: Exact-name classification lookup
//!
//! ## Unknown Names
//!
//! Names the catalog has never seen classify as `Category::Ordinary`.
//! That is a policy choice, not an error: classification is total.

pub mod catalog;
pub mod category;
pub mod item;

pub use catalog::Catalog;
pub use category::{Category, AGED_BRIE, BACKSTAGE_PASS, CONJURED, SULFURAS};
pub use item::Item;

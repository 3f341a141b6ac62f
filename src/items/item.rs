//! Item state - the mutable inventory record.
//!
//! `Item` tracks what changes day to day: `sell_in` and `quality`.
//! Which rule governs those changes is decided by classification
//! (see `Catalog`), not stored on the item itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single inventory item.
///
/// Construction performs no validation: an out-of-range `quality` is
/// accepted as-is and pulled back into range by the next transition,
/// not at construction time.
///
/// ## Example
///
/// ```
/// use gilded_rose::Item;
///
/// let item = Item::new("Aged Brie", 5, 30);
/// assert_eq!(item.to_string(), "Aged Brie, 5, 30");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Item name; doubles as the classification key.
    pub name: String,

    /// Days remaining before the sell-by date. Negative once past.
    pub sell_in: i32,

    /// Item value/condition. Bounded [0, 50] for every category except
    /// legendary items, whose quality is never touched.
    pub quality: i32,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

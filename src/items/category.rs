//! Aging categories and the well-known item names.
//!
//! A `Category` decides which transition rule an item follows. The set
//! is closed: adding a behavior means adding a variant, and every rule
//! dispatch stays an exhaustive match.

use serde::{Deserialize, Serialize};

/// Name stocked as `Category::Aged` in the standard catalog.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name stocked as `Category::Legendary` in the standard catalog.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Name stocked as `Category::Backstage` in the standard catalog.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name stocked as `Category::Conjured` in the standard catalog.
pub const CONJURED: &str = "Conjured";

/// How an item's quality moves as it ages.
///
/// `Ordinary` is the fallback for names the catalog does not know
/// (see `Catalog::classify`), hence the `Default` impl.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Quality drops by 1 per day, by 2 once past the sell-by date.
    #[default]
    Ordinary,

    /// Quality rises with age: +1 per day, +2 once past the date.
    Aged,

    /// Immutable: neither `sell_in` nor `quality` ever changes.
    Legendary,

    /// Quality rises as the concert nears, then collapses to 0 once
    /// the concert has passed.
    Backstage,

    /// Degrades twice as fast as `Ordinary`: -2 per day, -4 past the date.
    Conjured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_default_is_ordinary() {
        assert_eq!(Category::default(), Category::Ordinary);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Backstage).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, Category::Backstage);
    }
}

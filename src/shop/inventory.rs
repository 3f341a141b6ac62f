//! The shop inventory and its day-advance loop.
//!
//! Items are classified when stocked, not on every tick. Each stocked
//! entry pairs the resolved `Category` with the `Item`, so the advance
//! loop is a plain exhaustive dispatch with no string inspection.

use serde::{Deserialize, Serialize};

use crate::items::{Catalog, Category, Item};
use crate::rules::tick_item;

/// An item with its category resolved.
///
/// The category is fixed at stocking time; ticks never re-read the
/// name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockedItem {
    category: Category,
    item: Item,
}

impl StockedItem {
    /// Get the resolved category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Get the item state.
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Unwrap into the bare item.
    #[must_use]
    pub fn into_item(self) -> Item {
        self.item
    }
}

/// The shop: an ordered inventory plus the catalog it was stocked
/// against.
///
/// `advance_day` transitions every item independently and in stocking
/// order. Calling it N times simulates N days. The shop holds no locks:
/// callers sharing one shop across threads must serialize access
/// externally.
///
/// ## Example
///
/// ```
/// use gilded_rose::{Item, Shop};
///
/// let mut shop = Shop::new(vec![
///     Item::new("Aged Brie", 5, 30),
///     Item::new("generic item", 8, 8),
/// ]);
///
/// shop.advance_day();
///
/// let qualities: Vec<i32> = shop.items().map(|item| item.quality).collect();
/// assert_eq!(qualities, vec![31, 7]);
/// ```
#[derive(Clone, Debug)]
pub struct Shop {
    catalog: Catalog,
    stock: Vec<StockedItem>,
}

impl Shop {
    /// Stock a shop using the standard catalog.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_catalog(Catalog::standard(), items)
    }

    /// Stock a shop against a caller-supplied catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, items: Vec<Item>) -> Self {
        let stock = items
            .into_iter()
            .map(|item| StockedItem {
                category: catalog.classify(&item.name),
                item,
            })
            .collect();

        Self { catalog, stock }
    }

    /// Stock one more item at the end of the inventory.
    pub fn add_item(&mut self, item: Item) {
        let category = self.catalog.classify(&item.name);
        self.stock.push(StockedItem { category, item });
    }

    /// Advance every item by one day, in stocking order.
    ///
    /// Each item transitions independently: no transition reads any
    /// other item's state. Order and length are preserved. Returns the
    /// stock for inspection.
    pub fn advance_day(&mut self) -> &[StockedItem] {
        for stocked in &mut self.stock {
            tick_item(stocked.category, &mut stocked.item);
        }
        &self.stock
    }

    /// Iterate items in stocking order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.stock.iter().map(|stocked| &stocked.item)
    }

    /// Get the stocked entries, in order.
    #[must_use]
    pub fn stocked(&self) -> &[StockedItem] {
        &self.stock
    }

    /// Get the catalog this shop classifies against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the number of stocked items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    /// Check if the shop is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Recover the items, dropping the category tags.
    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.stock.into_iter().map(StockedItem::into_item).collect()
    }
}

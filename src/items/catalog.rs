//! Name catalog for classification lookup.
//!
//! The `Catalog` maps exact item names to categories. Matching is
//! strict string equality against the registered set; anything
//! unregistered classifies as `Category::Ordinary`. There is no
//! substring or prefix matching, so "Conjured Mana Cake" is ordinary
//! unless a caller registers it.

use rustc_hash::FxHashMap;

use super::category::{Category, AGED_BRIE, BACKSTAGE_PASS, CONJURED, SULFURAS};

/// Registry of name -> category mappings.
///
/// ## Example
///
/// ```
/// use gilded_rose::items::{Catalog, Category};
///
/// let mut catalog = Catalog::new();
/// catalog.register("Aged Brie", Category::Aged);
///
/// assert_eq!(catalog.classify("Aged Brie"), Category::Aged);
/// assert_eq!(catalog.classify("anything else"), Category::Ordinary);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    names: FxHashMap<String, Category>,
}

impl Catalog {
    /// Create a new empty catalog.
    ///
    /// Every name classifies as `Category::Ordinary` until registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-stocked with the four well-known names.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(AGED_BRIE, Category::Aged);
        catalog.register(SULFURAS, Category::Legendary);
        catalog.register(BACKSTAGE_PASS, Category::Backstage);
        catalog.register(CONJURED, Category::Conjured);
        catalog
    }

    /// Register a name -> category mapping.
    ///
    /// Panics if the name is already registered.
    pub fn register(&mut self, name: impl Into<String>, category: Category) {
        let name = name.into();
        if self.names.contains_key(&name) {
            panic!("Name {:?} already registered", name);
        }
        self.names.insert(name, category);
    }

    /// Classify a name.
    ///
    /// Total and deterministic: unregistered names classify as
    /// `Category::Ordinary`.
    #[must_use]
    pub fn classify(&self, name: &str) -> Category {
        self.names.get(name).copied().unwrap_or_default()
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Get the number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over registered (name, category) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> {
        self.names.iter().map(|(name, category)| (name.as_str(), *category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.classify(AGED_BRIE), Category::Aged);
        assert_eq!(catalog.classify(SULFURAS), Category::Legendary);
        assert_eq!(catalog.classify(BACKSTAGE_PASS), Category::Backstage);
        assert_eq!(catalog.classify(CONJURED), Category::Conjured);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_unknown_name_is_ordinary() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.classify("generic item"), Category::Ordinary);
        assert_eq!(catalog.classify(""), Category::Ordinary);
    }

    #[test]
    fn test_matching_is_exact() {
        let catalog = Catalog::standard();

        // No prefix/substring matching, no case folding.
        assert_eq!(catalog.classify("Conjured Mana Cake"), Category::Ordinary);
        assert_eq!(catalog.classify("aged brie"), Category::Ordinary);
        assert_eq!(catalog.classify("Backstage passes"), Category::Ordinary);
    }

    #[test]
    fn test_register_custom_name() {
        let mut catalog = Catalog::standard();
        catalog.register("Conjured Mana Cake", Category::Conjured);

        assert_eq!(catalog.classify("Conjured Mana Cake"), Category::Conjured);
        assert!(catalog.contains("Conjured Mana Cake"));
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut catalog = Catalog::new();

        catalog.register("Aged Brie", Category::Aged);
        catalog.register("Aged Brie", Category::Ordinary); // Should panic
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();

        assert!(catalog.is_empty());
        assert_eq!(catalog.classify(AGED_BRIE), Category::Ordinary);
    }

    #[test]
    fn test_iteration() {
        let catalog = Catalog::standard();

        let legendary: Vec<_> = catalog
            .iter()
            .filter(|(_, category)| *category == Category::Legendary)
            .collect();

        assert_eq!(legendary, vec![(SULFURAS, Category::Legendary)]);
    }
}

//! One-day transition rules.
//!
//! Every category except `Legendary` shares step zero: decrement
//! `sell_in` by 1. The quality delta then depends on the category and
//! on whether the item is past its sell-by date. "Past" is judged on
//! the already-decremented `sell_in`, so the tick that crosses the
//! date already runs at the after-date rate.
//!
//! ## Bounds
//!
//! Additive deltas clamp to [`MIN_QUALITY`, `MAX_QUALITY`]. No delta
//! exceeds the range width, so clamping once per tick is equivalent to
//! clamping after each arithmetic step. The backstage collapse to 0 is
//! a hard reset, not a delta.

use crate::items::{Category, Item};

/// Lower quality bound shared by every non-legendary category.
pub const MIN_QUALITY: i32 = 0;

/// Upper quality bound shared by every non-legendary category.
pub const MAX_QUALITY: i32 = 50;

fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Advance one item state by one day.
///
/// Returns the post-transition `(sell_in, quality)` pair. Total over
/// integer inputs: no category produces an error.
///
/// ## Example
///
/// ```
/// use gilded_rose::{tick, Category};
///
/// // An ordinary item on its sell-by date decays at double rate.
/// assert_eq!(tick(Category::Ordinary, 0, 10), (-1, 8));
///
/// // Legendary state is never touched.
/// assert_eq!(tick(Category::Legendary, -1, 80), (-1, 80));
/// ```
#[must_use]
pub fn tick(category: Category, sell_in: i32, quality: i32) -> (i32, i32) {
    match category {
        Category::Legendary => (sell_in, quality),
        Category::Ordinary => {
            let sell_in = sell_in - 1;
            let rate = if sell_in < 0 { 2 } else { 1 };
            (sell_in, clamp_quality(quality - rate))
        }
        Category::Aged => {
            let sell_in = sell_in - 1;
            let rate = if sell_in < 0 { 2 } else { 1 };
            (sell_in, clamp_quality(quality + rate))
        }
        Category::Conjured => {
            let sell_in = sell_in - 1;
            let rate = if sell_in < 0 { 4 } else { 2 };
            (sell_in, clamp_quality(quality - rate))
        }
        Category::Backstage => (sell_in - 1, backstage_quality(sell_in, quality)),
    }
}

/// Backstage banding is judged on the pre-decrement `sell_in`: the
/// value at the start of the tick, before the day elapses.
fn backstage_quality(sell_in: i32, quality: i32) -> i32 {
    match sell_in {
        s if s <= 0 => 0,
        s if s <= 5 => clamp_quality(quality + 3),
        s if s <= 10 => clamp_quality(quality + 2),
        _ => clamp_quality(quality + 1),
    }
}

/// Advance an item in place.
///
/// Only the two numeric fields change; `name` is never altered.
pub fn tick_item(category: Category, item: &mut Item) {
    let (sell_in, quality) = tick(category, item.sell_in, item.quality);
    item.sell_in = sell_in;
    item.quality = quality;
}

//! Carousel paging.

use serde::Serialize;

/// Cause cards shown side by side on the home page.
pub const CAUSES_PER_VIEW: usize = 3;

/// Board member cards shown side by side on the home page.
pub const BOARD_STAFF_PER_VIEW: usize = 4;

/// Highest valid start index for a carousel.
#[must_use]
pub const fn max_index(len: usize, items_per_view: usize) -> usize {
    len.saturating_sub(items_per_view)
}

/// Clamp a requested start index into `[0, max(0, len - items_per_view)]`.
#[must_use]
pub fn clamp_index(index: i64, len: usize, items_per_view: usize) -> usize {
    let max = max_index(len, items_per_view);
    usize::try_from(index.max(0)).map_or(max, |i| i.min(max))
}

/// A window over a list of cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Carousel<T> {
    /// Every card, in display order.
    pub items: Vec<T>,
    pub items_per_view: usize,
    /// Start of the visible window.
    pub index: usize,
    pub max_index: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

impl<T> Carousel<T> {
    /// Build a carousel positioned at `index`, clamped.
    #[must_use]
    pub fn new(items: Vec<T>, items_per_view: usize, index: i64) -> Self {
        let len = items.len();
        let index = clamp_index(index, len, items_per_view);
        let max_index = max_index(len, items_per_view);
        Self {
            items,
            items_per_view,
            index,
            max_index,
            can_prev: index > 0,
            can_next: index < max_index,
        }
    }

    /// Advance by one card. Stays put at the end.
    #[cfg(test)]
    #[must_use]
    pub fn next(self) -> Self {
        let index = self.index as i64 + 1;
        Self::new(self.items, self.items_per_view, index)
    }

    /// Go back by one card. Stays put at the start.
    #[cfg(test)]
    #[must_use]
    pub fn prev(self) -> Self {
        let index = self.index as i64 - 1;
        Self::new(self.items, self.items_per_view, index)
    }

    /// Cards currently in view; never more than were returned.
    #[must_use]
    pub fn visible(&self) -> &[T] {
        let end = (self.index + self.items_per_view).min(self.items.len());
        &self.items[self.index..end]
    }
}

//! Page-number sequence for pagination controls.
//!
//! [`compute_visible_pages`] turns a `(current, total)` pair into the short list
//! of page links a pager shows: the first and last page always, a window of
//! `spread` pages around the current one, and an ellipsis wherever pages are
//! skipped.

/// One slot in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Window radius used when none is configured.
pub const DEFAULT_SPREAD: u32 = 2;

/// Computes the visible page sequence.
///
/// The result starts with page 1, ends with page `total` (when `total > 1`),
/// contains every page of `[current - spread, current + spread]` that lies in
/// `[2, total - 1]`, and has an [`PageItem::Ellipsis`] after page 1 when
/// `current - spread > 2` and before `total` when `current + spread < total - 1`.
///
/// # Examples
///
/// ```
/// use rickdex::app::pagination::{compute_visible_pages, PageItem::{Ellipsis, Page}};
///
/// assert_eq!(
///     compute_visible_pages(5, 10, 2),
///     vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
/// );
/// assert_eq!(compute_visible_pages(1, 1, 2), vec![Page(1)]);
/// ```
#[must_use]
pub fn compute_visible_pages(current: u32, total: u32, spread: u32) -> Vec<PageItem> {
    if total <= 1 {
        return vec![PageItem::Page(1)];
    }

    // Signed math so current - spread can go below zero.
    let current = i64::from(current);
    let total_i = i64::from(total);
    let spread = i64::from(spread);

    let window_start = (current - spread).max(2);
    let window_end = (current + spread).min(total_i - 1);

    let mut pages = Vec::with_capacity(usize::try_from(spread * 2 + 5).unwrap_or(9));
    pages.push(PageItem::Page(1));

    if current - spread > 2 {
        pages.push(PageItem::Ellipsis);
    }

    for page in window_start..=window_end {
        if let Ok(page) = u32::try_from(page) {
            pages.push(PageItem::Page(page));
        }
    }

    if current + spread < total_i - 1 {
        pages.push(PageItem::Ellipsis);
    }

    pages.push(PageItem::Page(total));
    pages
}

/// 1-based inclusive range of items shown on `current`, or `None` when there
/// are no items.
///
/// ```
/// use rickdex::app::pagination::item_range;
///
/// assert_eq!(item_range(1, 20, 826), Some((1, 20)));
/// assert_eq!(item_range(42, 20, 826), Some((821, 826)));
/// ```
#[must_use]
pub fn item_range(current: u32, page_size: u32, total_items: u32) -> Option<(u32, u32)> {
    if total_items == 0 || page_size == 0 || current == 0 {
        return None;
    }
    let start = (current - 1).saturating_mul(page_size).saturating_add(1);
    if start > total_items {
        return None;
    }
    let end = current.saturating_mul(page_size).min(total_items);
    Some((start, end))
}

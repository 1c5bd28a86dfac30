//! Page-number window strategies.
//!
//! A window decides which page numbers a pagination bar shows for a given
//! `(current_page, total_pages)`. Two styles are in use:
//!
//! - [`SlidingWindow`]: a fixed-width run of pages that slides with the
//!   current page and never crosses `[1, total_pages]`.
//! - [`EllipsisWindow`]: first and last page are always shown, plus
//!   `current ± delta`, with an ellipsis marker over every gap.

use serde::{Deserialize, Serialize};

use rollcall_types::PageItem;

pub const DEFAULT_WINDOW_WIDTH: usize = 9;
pub const DEFAULT_WINDOW_DELTA: usize = 4;

pub trait PageWindow {
    /// Page items to display. `current_page` is clamped into range first.
    fn window(&self, current_page: usize, total_pages: usize) -> Vec<PageItem>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindow {
    pub width: usize,
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
        }
    }
}

impl PageWindow for SlidingWindow {
    fn window(&self, current_page: usize, total_pages: usize) -> Vec<PageItem> {
        if total_pages == 0 || self.width == 0 {
            return Vec::new();
        }
        if total_pages <= self.width {
            return (1..=total_pages).map(PageItem::Page).collect();
        }

        let current = current_page.clamp(1, total_pages);
        let start = current.saturating_sub(self.width / 2).max(1);
        let end = (start + self.width - 1).min(total_pages);
        // Slide back when the window got cut off at the end.
        let start = (end + 1).saturating_sub(self.width).max(1);

        (start..=end).map(PageItem::Page).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipsisWindow {
    pub delta: usize,
}

impl Default for EllipsisWindow {
    fn default() -> Self {
        Self {
            delta: DEFAULT_WINDOW_DELTA,
        }
    }
}

impl PageWindow for EllipsisWindow {
    fn window(&self, current_page: usize, total_pages: usize) -> Vec<PageItem> {
        if total_pages == 0 {
            return Vec::new();
        }

        let current = current_page.clamp(1, total_pages);
        let low = current.saturating_sub(self.delta).max(1);
        let high = current.saturating_add(self.delta).min(total_pages);

        let mut shown: Vec<usize> = Vec::with_capacity(high - low + 3);
        shown.push(1);
        shown.extend(low..=high);
        shown.push(total_pages);
        shown.sort_unstable();
        shown.dedup();

        let mut items = Vec::with_capacity(shown.len() + 2);
        let mut previous: Option<usize> = None;
        for page in shown {
            if let Some(prev) = previous
                && page - prev > 1
            {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page(page));
            previous = Some(page);
        }
        items
    }
}

/// Window strategy selected per call site (and per config file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum WindowStyle {
    Sliding {
        #[serde(default = "default_width")]
        width: usize,
    },
    Ellipsis {
        #[serde(default = "default_delta")]
        delta: usize,
    },
}

fn default_width() -> usize {
    DEFAULT_WINDOW_WIDTH
}

fn default_delta() -> usize {
    DEFAULT_WINDOW_DELTA
}

impl Default for WindowStyle {
    fn default() -> Self {
        WindowStyle::Sliding {
            width: DEFAULT_WINDOW_WIDTH,
        }
    }
}

impl WindowStyle {
    pub fn sliding() -> Self {
        Self::default()
    }

    pub fn ellipsis() -> Self {
        WindowStyle::Ellipsis {
            delta: DEFAULT_WINDOW_DELTA,
        }
    }
}

impl PageWindow for WindowStyle {
    fn window(&self, current_page: usize, total_pages: usize) -> Vec<PageItem> {
        match *self {
            WindowStyle::Sliding { width } => {
                SlidingWindow { width }.window(current_page, total_pages)
            }
            WindowStyle::Ellipsis { delta } => {
                EllipsisWindow { delta }.window(current_page, total_pages)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<Option<usize>> {
        items.iter().map(PageItem::page).collect()
    }

    fn run(range: std::ops::RangeInclusive<usize>) -> Vec<PageItem> {
        range.map(PageItem::Page).collect()
    }

    #[test]
    fn test_sliding_small_total_shows_everything() {
        let window = SlidingWindow::default();
        assert_eq!(window.window(2, 3), run(1..=3));
        assert_eq!(window.window(1, 9), run(1..=9));
        assert!(window.window(1, 0).is_empty());
    }

    #[test]
    fn test_sliding_at_start() {
        assert_eq!(SlidingWindow::default().window(1, 20), run(1..=9));
    }

    #[test]
    fn test_sliding_in_middle() {
        assert_eq!(SlidingWindow::default().window(10, 20), run(6..=14));
    }

    #[test]
    fn test_sliding_at_end() {
        let window = SlidingWindow::default();
        assert_eq!(window.window(20, 20), run(12..=20));
        assert_eq!(window.window(18, 20), run(12..=20));
    }

    #[test]
    fn test_sliding_even_width_keeps_width() {
        let window = SlidingWindow { width: 4 };
        assert_eq!(window.window(5, 10), run(3..=6));
        assert_eq!(window.window(10, 10), run(7..=10));
    }

    #[test]
    fn test_sliding_zero_width() {
        assert!(SlidingWindow { width: 0 }.window(3, 10).is_empty());
    }

    #[test]
    fn test_ellipsis_near_start() {
        let items = EllipsisWindow::default().window(1, 20);
        assert_eq!(
            pages(&items),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(20)]
        );
    }

    #[test]
    fn test_ellipsis_in_middle() {
        let items = EllipsisWindow::default().window(10, 20);
        assert_eq!(
            pages(&items),
            vec![
                Some(1),
                None,
                Some(6),
                Some(7),
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn test_ellipsis_near_end() {
        let items = EllipsisWindow::default().window(18, 20);
        assert_eq!(
            pages(&items),
            vec![
                Some(1),
                None,
                Some(14),
                Some(15),
                Some(16),
                Some(17),
                Some(18),
                Some(19),
                Some(20)
            ]
        );
    }

    #[test]
    fn test_ellipsis_small_total_has_no_gaps() {
        let items = EllipsisWindow::default().window(3, 6);
        assert_eq!(items, run(1..=6));
        assert_eq!(EllipsisWindow::default().window(1, 1), run(1..=1));
        assert!(EllipsisWindow::default().window(1, 0).is_empty());
    }

    #[test]
    fn test_window_style_dispatch() {
        assert_eq!(WindowStyle::sliding().window(1, 20), run(1..=9));
        assert!(WindowStyle::ellipsis().window(10, 20).contains(&PageItem::Ellipsis));
    }

    #[test]
    fn test_window_style_serde_shape() {
        let style: WindowStyle = serde_json::from_str(r#"{"style":"ellipsis","delta":2}"#).unwrap();
        assert_eq!(style, WindowStyle::Ellipsis { delta: 2 });

        let style: WindowStyle = serde_json::from_str(r#"{"style":"sliding"}"#).unwrap();
        assert_eq!(style, WindowStyle::sliding());
    }
}

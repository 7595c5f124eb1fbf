use contracts::shared::pagination::PageItem;

/// Rows per list page.
pub const PER_PAGE: u64 = 15;

/// Number of pages needed to show `total_rows` rows.
pub fn total_pages(total_rows: u64) -> u64 {
    total_rows.div_ceil(PER_PAGE)
}

/// Compact strip of page links for the list footer.
///
/// Up to 7 pages everything is shown. Beyond that: a leading `1, …` once
/// the current page has moved past 2, the three-page window around the
/// current page (clipped to valid pages), and a trailing `…, last` while
/// the window has not reached the end. With `current_page <= 2` the strip
/// starts directly at the window.
pub fn page_window(current_page: u64, total_pages: u64) -> Vec<PageItem> {
    if total_pages <= 7 {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut pages = Vec::new();
    if current_page > 2 {
        pages.push(PageItem::Page(1));
        pages.push(PageItem::Ellipsis);
    }

    let from = current_page.saturating_sub(1).max(1);
    let to = (current_page + 1).min(total_pages);
    for p in from..=to {
        pages.push(PageItem::Page(p));
    }

    if current_page < total_pages - 1 {
        pages.push(PageItem::Ellipsis);
        pages.push(PageItem::Page(total_pages));
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::PageItem::{Ellipsis, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(15), 1);
        assert_eq!(total_pages(16), 2);
        assert_eq!(total_pages(150), 10);
    }

    #[test]
    fn test_few_pages_show_everything() {
        assert_eq!(
            page_window(1, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(page_window(7, 7).len(), 7);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_first_page_skips_leading_pair() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(2, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_middle_page_has_both_gaps() {
        assert_eq!(
            page_window(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_near_the_end_drops_trailing_pair() {
        // current == total - 1: the window itself reaches the last page
        assert_eq!(
            page_window(9, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn test_past_the_end_page() {
        // Page parameter beyond the last page: the window is empty and
        // only the leading pair remains
        assert_eq!(page_window(12, 10), vec![Page(1), Ellipsis]);
    }
}

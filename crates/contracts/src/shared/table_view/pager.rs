//! Pagination arithmetic and the compact page-number strip.

use serde::{Deserialize, Serialize};

/// One slot in the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

/// `ceil(count / per_page)`; zero records give zero pages
pub fn total_pages(count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    count.div_ceil(per_page)
}

/// Items of the 1-based `page`: `[(page-1)*per_page, page*per_page)`,
/// truncated to the slice. Pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Page numbers to show for `current` out of `total`.
///
/// Up to 5 pages are all listed. Beyond that a window of 3 pages starting
/// just before `current` is shown, with the first and last page always
/// present and an ellipsis wherever pages are skipped.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageToken> {
    if total <= 5 {
        return (1..=total).map(PageToken::Page).collect();
    }

    let start = current.saturating_sub(1).max(1);
    let end = (start + 2).min(total);

    let mut tokens = Vec::with_capacity(7);
    if start > 1 {
        tokens.push(PageToken::Page(1));
    }
    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend((start..=end).map(PageToken::Page));
    if end + 1 < total {
        tokens.push(PageToken::Ellipsis);
    }
    if end < total {
        tokens.push(PageToken::Page(total));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::PageToken::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 1), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(page_slice(&items, 1, 3), &[1, 2, 3]);
        assert_eq!(page_slice(&items, 3, 3), &[7]);
        assert!(page_slice(&items, 4, 3).is_empty());
        assert!(page_slice(&items, 0, 3).is_empty());
    }

    #[test]
    fn test_short_strip_lists_all() {
        assert!(page_numbers(1, 0).is_empty());
        assert_eq!(page_numbers(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_numbers(4, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(page_numbers(1, 10), vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);
        assert_eq!(page_numbers(2, 10), vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);
        assert_eq!(
            page_numbers(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_numbers(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(
            page_numbers(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(page_numbers(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }
}

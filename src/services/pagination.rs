// src/services/pagination.rs
// DOCUMENTATION: Page resolution for library listings
// PURPOSE: Map a raw `page` query value onto a valid LIMIT/OFFSET window

use serde::Serialize;

/// A resolved page of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// 1-based page number actually shown
    pub number: i64,
    pub num_pages: i64,
    pub per_page: i64,
    pub total: i64,
    #[serde(skip)]
    pub offset: i64,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Items of one page plus its window
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub window: PageWindow,
}

/// Resolve the requested page against `total` items
///
/// Missing or non-numeric input shows page 1; a number outside
/// `1..=num_pages` shows the last page. An empty listing still has one
/// (empty) page.
pub fn resolve_page(raw: Option<&str>, total: i64, per_page: i64) -> PageWindow {
    let per_page = per_page.max(1);
    let total = total.max(0);
    let num_pages = (total / per_page + i64::from(total % per_page != 0)).max(1);

    let number = match raw.map(str::trim) {
        Some(value) if is_integer(value) => match value.parse::<i64>() {
            Ok(n) if (1..=num_pages).contains(&n) => n,
            _ => {
                log::debug!("Page {} out of range, showing last page {}", value, num_pages);
                num_pages
            }
        },
        Some(_) | None => 1,
    };

    PageWindow {
        number,
        num_pages,
        per_page,
        total,
        offset: (number - 1) * per_page,
        has_previous: number > 1,
        has_next: number < num_pages,
    }
}

/// Optional sign followed by ASCII digits, of any length
fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Items shown on the resolved page of a 1..=total listing
    fn shown(raw: Option<&str>, total: i64) -> Vec<i64> {
        let w = resolve_page(raw, total, 4);
        (1..=total).skip(w.offset as usize).take(w.per_page as usize).collect()
    }

    #[test]
    fn test_ten_items_first_and_second_page() {
        assert_eq!(shown(Some("1"), 10), vec![1, 2, 3, 4]);
        assert_eq!(shown(Some("2"), 10), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_out_of_range_shows_last_page() {
        assert_eq!(shown(Some("99"), 10), vec![9, 10]);
        assert_eq!(resolve_page(Some("99"), 10, 4).number, 3);
    }

    #[test]
    fn test_page_beyond_i64_shows_last_page() {
        assert_eq!(resolve_page(Some("99999999999999999999"), 10, 4).number, 3);
        assert_eq!(resolve_page(Some("-99999999999999999999"), 10, 4).number, 3);
        assert_eq!(shown(Some("99999999999999999999"), 10), vec![9, 10]);
    }

    #[test]
    fn test_huge_page_size_does_not_overflow() {
        let w = resolve_page(Some("1"), i64::MAX, i64::MAX);
        assert_eq!(w.num_pages, 1);
        assert!(!w.has_next);

        let w = resolve_page(None, i64::MAX - 1, i64::MAX);
        assert_eq!(w.num_pages, 1);
        assert_eq!(w.offset, 0);
    }

    #[test]
    fn test_zero_and_negative_show_last_page() {
        assert_eq!(resolve_page(Some("0"), 10, 4).number, 3);
        assert_eq!(resolve_page(Some("-2"), 10, 4).number, 3);
    }

    #[test]
    fn test_non_numeric_shows_first_page() {
        assert_eq!(shown(Some("abc"), 10), vec![1, 2, 3, 4]);
        assert_eq!(shown(None, 10), vec![1, 2, 3, 4]);
        assert_eq!(shown(Some(""), 10), vec![1, 2, 3, 4]);
        assert_eq!(shown(Some("2.5"), 10), vec![1, 2, 3, 4]);
        assert_eq!(shown(Some("-"), 10), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_listing_has_one_page() {
        let w = resolve_page(Some("5"), 0, 4);
        assert_eq!(w.number, 1);
        assert_eq!(w.num_pages, 1);
        assert_eq!(w.offset, 0);
        assert!(!w.has_next && !w.has_previous);
    }

    #[test]
    fn test_exact_multiple_has_no_extra_page() {
        let w = resolve_page(Some("3"), 8, 4);
        assert_eq!(w.num_pages, 2);
        assert_eq!(w.number, 2);
        assert!(w.has_previous);
        assert!(!w.has_next);
    }
}

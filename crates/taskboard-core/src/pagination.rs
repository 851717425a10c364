//! Fixed-size client-side pagination.

/// Default number of posts per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `count` items, never less than one.
pub fn page_count(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a one-based page number into `[1, page_count]`.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// The window of `items` shown on the one-based `page`.
///
/// Pages past the end yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_has_floor_of_one() {
        assert_eq!(page_count(0, PAGE_SIZE), 1);
        assert_eq!(page_count(1, PAGE_SIZE), 1);
        assert_eq!(page_count(10, PAGE_SIZE), 1);
        assert_eq!(page_count(11, PAGE_SIZE), 2);
        assert_eq!(page_count(25, PAGE_SIZE), 3);
        assert_eq!(page_count(100, PAGE_SIZE), 10);
    }

    #[test]
    fn test_page_count_matches_ceiling_formula() {
        for count in 0..=105 {
            let expected = std::cmp::max(1, (count + PAGE_SIZE - 1) / PAGE_SIZE);
            assert_eq!(page_count(count, PAGE_SIZE), expected, "count {count}");
        }
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 3, 10), &items[20..25]);
        assert!(page_slice(&items, 4, 10).is_empty());
        assert!(page_slice::<u32>(&[], 1, 10).is_empty());
    }
}

//! Pure page derivation from `(offset, page_size, num_results)`.

/// Derived pager position. Pages are 1-indexed for display; offsets are
/// 0-indexed internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Pagination {
    /// Returns `None` when `page_size` is zero: the pager must not render
    /// rather than divide by zero.
    pub fn derive(offset: u32, page_size: u32, num_results: u32) -> Option<Pagination> {
        if page_size == 0 {
            return None;
        }
        let total_pages = num_results.div_ceil(page_size);
        let current_page = offset / page_size + 1;
        Some(Pagination {
            current_page,
            total_pages,
        })
    }

    /// The pager is only worth drawing when there is more than one page.
    pub fn should_render(&self) -> bool {
        self.total_pages > 1
    }

    /// Absolute offset addressing 1-indexed page `page`.
    pub fn offset_for_page(page: u32, page_size: u32) -> u32 {
        page.saturating_sub(1) * page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_results_in_tens_is_three_pages() {
        let p = Pagination::derive(0, 10, 30).unwrap();
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.current_page, 1);
        let p = Pagination::derive(20, 10, 30).unwrap();
        assert_eq!(p.current_page, 3);
    }

    #[test]
    fn partial_last_page_rounds_up() {
        let p = Pagination::derive(0, 20, 55).unwrap();
        assert_eq!(p.total_pages, 3);
    }

    #[test]
    fn single_page_is_not_rendered() {
        let p = Pagination::derive(0, 10, 5).unwrap();
        assert_eq!(p.total_pages, 1);
        assert!(!p.should_render());
    }

    #[test]
    fn empty_results_give_zero_pages() {
        let p = Pagination::derive(0, 10, 0).unwrap();
        assert_eq!(p.total_pages, 0);
        assert!(!p.should_render());
    }

    #[test]
    fn zero_page_size_is_guarded() {
        assert_eq!(Pagination::derive(0, 0, 30), None);
    }

    #[test]
    fn current_page_brackets_offset() {
        for (offset, page_size, num_results) in
            [(0u32, 20u32, 100u32), (20, 20, 100), (80, 20, 100), (15, 5, 60)]
        {
            let p = Pagination::derive(offset, page_size, num_results).unwrap();
            assert!(p.current_page >= 1);
            assert!(p.current_page <= p.total_pages);
            assert!((p.current_page - 1) * page_size <= offset);
            assert!(offset < p.current_page * page_size);
        }
    }

    #[test]
    fn offset_page_mapping_is_idempotent() {
        let page_size = 20;
        for page in 1..=5u32 {
            let offset = Pagination::offset_for_page(page, page_size);
            assert_eq!(offset, (page - 1) * page_size);
            let derived = Pagination::derive(offset, page_size, 100).unwrap();
            assert_eq!(derived.current_page, page);
        }
    }
}

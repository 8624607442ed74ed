pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Requested page. Zero in either field selects the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn resolved_page(&self) -> u32 {
        if self.page == 0 { DEFAULT_PAGE } else { self.page }
    }

    pub fn resolved_page_size(&self) -> u32 {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u32,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Slices an already filtered, ordered list. Pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let page = request.resolved_page();
    let page_size = request.resolved_page_size();
    let total = items.len() as u32;
    let total_pages = total.div_ceil(page_size);

    let start = (page as usize - 1).saturating_mul(page_size as usize);
    let items = items
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    Page {
        items,
        total,
        page,
        page_size,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_len(total: u32, page: u32, page_size: u32) -> usize {
        let consumed = (page - 1) * page_size;
        page_size.min(total.saturating_sub(consumed)) as usize
    }

    #[test]
    fn test_slice_length_and_total_pages() {
        let cases = [
            (0, 1, 10),
            (6, 1, 4),
            (6, 2, 4),
            (6, 3, 4),
            (10, 1, 10),
            (11, 2, 10),
            (25, 3, 7),
            (3, 9, 1),
        ];

        for (total, page, page_size) in cases {
            let items: Vec<u32> = (0..total).collect();
            let result = paginate(items, PageRequest::new(page, page_size));

            assert_eq!(
                result.items.len(),
                expected_len(total, page, page_size),
                "total={total} page={page} size={page_size}"
            );
            assert_eq!(result.total, total);
            assert_eq!(result.total_pages, total.div_ceil(page_size));
        }
    }

    #[test]
    fn test_defaults_when_zero() {
        let items: Vec<u32> = (0..25).collect();
        let result = paginate(items, PageRequest::default());

        assert_eq!(result.page, 1);
        assert_eq!(result.page_size, 10);
        assert_eq!(result.items, (0..10).collect::<Vec<_>>());
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<u32> = (0..5).collect();
        let result = paginate(items, PageRequest::new(4, 2));

        assert!(result.items.is_empty());
        assert_eq!(result.total, 5);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn test_preserves_order() {
        let items = vec!["c", "a", "b", "d"];
        let result = paginate(items, PageRequest::new(2, 2));
        assert_eq!(result.items, vec!["b", "d"]);
    }
}

use crate::model::RecipeSummary;

/// One search query and the results it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    query: String,
    results: Vec<RecipeSummary>,
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_results(&mut self, results: Vec<RecipeSummary>) {
        self.results = results;
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    /// The results shown on `page` (1-based).
    pub fn page(&self, page: usize, page_size: usize) -> &[RecipeSummary] {
        paginate(&self.results, page, page_size)
    }

    pub fn page_count(&self, page_size: usize) -> usize {
        page_count(self.results.len(), page_size)
    }
}

/// Window `[(page-1)*page_size, page*page_size)` of `results`, clamped to
/// the slice. Page 0, a zero page size or a page past the end give an
/// empty window.
pub fn paginate<T>(results: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= results.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(results.len());
    &results[start..end]
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Which neighbouring pages the pagination buttons should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub page: usize,
    pub pages: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl PageControls {
    pub fn new(page: usize, total: usize, page_size: usize) -> Self {
        let pages = page_count(total, page_size);
        let prev = (page > 1 && page <= pages).then(|| page - 1);
        let next = (page >= 1 && page < pages).then(|| page + 1);
        Self {
            page,
            pages,
            prev,
            next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_last_partial_page() {
        let results = numbers(23);
        assert_eq!(paginate(&results, 3, 10), &[20, 21, 22]);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let results = numbers(23);
        assert!(paginate(&results, 5, 10).is_empty());
        assert!(paginate(&results, 0, 10).is_empty());
        assert!(paginate(&results, 1, 0).is_empty());
        assert!(paginate(&results, usize::MAX, 10).is_empty());
    }

    #[test]
    fn test_first_page() {
        let results = numbers(23);
        assert_eq!(paginate(&results, 1, 10), &numbers(10)[..]);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(23, 10), 3);
        assert_eq!(page_count(30, 10), 3);
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn test_page_controls() {
        let first = PageControls::new(1, 23, 10);
        assert_eq!((first.prev, first.next), (None, Some(2)));

        let middle = PageControls::new(2, 23, 10);
        assert_eq!((middle.prev, middle.next), (Some(1), Some(3)));

        let last = PageControls::new(3, 23, 10);
        assert_eq!((last.prev, last.next), (Some(2), None));

        let only = PageControls::new(1, 7, 10);
        assert_eq!((only.prev, only.next), (None, None));
    }

    #[test]
    fn test_search_pages() {
        let mut search = Search::new("pizza");
        search.set_results(
            (0..12)
                .map(|i| RecipeSummary {
                    id: i.to_string(),
                    title: format!("Pizza {}", i),
                    author: "x".to_string(),
                    img: String::new(),
                })
                .collect(),
        );
        assert_eq!(search.query(), "pizza");
        assert_eq!(search.page_count(10), 2);
        assert_eq!(search.page(2, 10).len(), 2);
        assert_eq!(search.page(2, 10)[0].id, "10");
    }
}

use serde::{Serialize, Serializer};

/// An entry in the page navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPage {
    Page(i64),
    Gap,
}

impl Serialize for NavigationPage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NavigationPage::Page(page) => serializer.serialize_i64(*page),
            NavigationPage::Gap => serializer.serialize_i64(-1),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult<T> {
    pub list: Vec<T>,
    pub total_records: i64,
    pub current_page: i64,
    pub max_result: i64,
    pub total_pages: i64,
    pub max_navigation_page: i64,
    pub navigation_pages: Vec<NavigationPage>,
}

/// Zero-based page index for a requested one-based page; anything below 1 is page 1.
pub fn page_index(page: i64) -> i64 {
    page.saturating_sub(1).max(0)
}

/// Row offset of the first record on `page`.
pub fn page_offset(page: i64, max_result: i64) -> i64 {
    page_index(page).saturating_mul(max_result)
}

impl<T> PaginationResult<T> {
    /// `list` must already hold only the rows of the requested page.
    pub fn new(
        list: Vec<T>,
        total_records: i64,
        page: i64,
        max_result: i64,
        max_navigation_page: i64,
    ) -> Self {
        let max_result = max_result.max(1);
        let total_pages = (total_records + max_result - 1) / max_result;
        let current_page = page_index(page).saturating_add(1);
        let navigation_pages = navigation_pages(current_page, total_pages, max_navigation_page);

        Self {
            list,
            total_records,
            current_page,
            max_result,
            total_pages,
            max_navigation_page,
            navigation_pages,
        }
    }
}

fn navigation_pages(current_page: i64, total_pages: i64, max_navigation_page: i64) -> Vec<NavigationPage> {
    let mut pages = vec![NavigationPage::Page(1)];
    if total_pages <= 1 {
        return pages;
    }

    let current = current_page.min(total_pages);
    let begin = current - max_navigation_page / 2;
    let end = current + max_navigation_page / 2;

    if begin > 2 {
        pages.push(NavigationPage::Gap);
    }
    pages.extend(
        (begin..end)
            .filter(|&i| i > 1 && i < total_pages)
            .map(NavigationPage::Page),
    );
    if end < total_pages - 2 {
        pages.push(NavigationPage::Gap);
    }
    pages.push(NavigationPage::Page(total_pages));
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use NavigationPage::{Gap, Page};

    #[test]
    fn total_pages_rounds_up() {
        let result = PaginationResult::new(vec![(); 20], 41, 1, 20, 10);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.current_page, 1);
    }

    #[test]
    fn empty_result_has_single_navigation_page() {
        let result: PaginationResult<()> = PaginationResult::new(vec![], 0, 1, 20, 10);
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.navigation_pages, vec![Page(1)]);
    }

    #[test]
    fn pages_below_one_clamp_to_first_page() {
        assert_eq!(page_offset(0, 20), 0);
        assert_eq!(page_offset(-7, 20), 0);
        assert_eq!(page_offset(3, 20), 40);
        let result: PaginationResult<()> = PaginationResult::new(vec![], 100, -3, 20, 10);
        assert_eq!(result.current_page, 1);
    }

    #[test]
    fn extreme_pages_do_not_overflow() {
        assert_eq!(page_offset(i64::MIN, 20), 0);
        assert_eq!(page_offset(i64::MAX, 20), i64::MAX);
        assert_eq!(page_offset(3_000_000_000, 20), 59_999_999_980);

        let last: PaginationResult<()> = PaginationResult::new(vec![], 45, i64::MAX, 20, 10);
        assert_eq!(last.current_page, i64::MAX);
        assert_eq!(last.navigation_pages, vec![Page(1), Page(2), Page(3)]);

        let first: PaginationResult<()> = PaginationResult::new(vec![], 45, i64::MIN, 20, 10);
        assert_eq!(first.current_page, 1);
    }

    #[test]
    fn small_page_count_lists_every_page() {
        let result: PaginationResult<()> = PaginationResult::new(vec![], 100, 2, 20, 10);
        assert_eq!(
            result.navigation_pages,
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn gaps_surround_window_in_the_middle() {
        let result: PaginationResult<()> = PaginationResult::new(vec![], 1000, 25, 20, 10);
        assert_eq!(result.total_pages, 50);
        let mut expected = vec![Page(1), Gap];
        expected.extend((20..30).map(Page));
        expected.push(Gap);
        expected.push(Page(50));
        assert_eq!(result.navigation_pages, expected);
    }

    #[test]
    fn gap_markers_serialize_as_minus_one() {
        let json = serde_json::to_value(vec![Page(1), Gap, Page(9)]).unwrap();
        assert_eq!(json, serde_json::json!([1, -1, 9]));
    }
}

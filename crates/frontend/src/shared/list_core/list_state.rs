use super::date_filter::DateRange;
use super::pagination::PageState;

/// Filter + page state of one list view, with the reset-on-filter-change
/// rule built in so the orchestrator cannot forget it: any edit to the
/// search query or the date bounds starts over at page 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    pub query: String,
    pub range: DateRange,
    pub page: PageState,
}

impl ListState {
    pub fn new(per_page: usize) -> Self {
        Self {
            query: String::new(),
            range: DateRange::default(),
            page: PageState::new(per_page),
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page.reset();
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
        self.page.reset();
    }

    pub fn clear_range(&mut self) {
        self.range.clear();
        self.page.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn editing_the_query_resets_the_page() {
        let mut state = ListState::new(10);
        state.page.go_to(3, 23);
        state.set_query("gonz".to_string());
        assert_eq!(state.page.page, 1);
    }

    #[test]
    fn editing_the_date_bounds_resets_the_page() {
        let mut state = ListState::new(10);
        state.page.go_to(2, 23);
        state.set_range(DateRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 1),
            end: None,
        });
        assert_eq!(state.page.page, 1);
    }

    #[test]
    fn clearing_the_range_twice_equals_clearing_once() {
        let mut state = ListState::new(10);
        state.set_range(DateRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 1),
            end: NaiveDate::from_ymd_opt(2024, 1, 31),
        });
        state.clear_range();
        let once = state.clone();
        state.clear_range();
        assert_eq!(state, once);
        assert!(!state.range.is_active());
    }
}

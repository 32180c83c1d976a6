//! Browser-independent state machine behind every paginated listing.
//!
//! Each request gets a ticket carrying a monotonically increasing sequence
//! number. Only the completion of the most recently issued ticket is applied,
//! so a slow response for an old filter can never overwrite a newer one.

use contracts::shared::list::{ListQuery, ListResult};

use crate::shared::api_client::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(ListResult<T>),
    Failed(String),
}

/// User-facing messages for a failed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureMessages {
    pub offline: &'static str,
    pub fetch_failed: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub query: ListQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// Applied, but the current page no longer exists; the page number was
    /// pulled back to the last page and needs one more refresh.
    Clamped,
    /// Stale ticket or torn-down controller; nothing changed
    Discarded,
    /// 401: the session interceptor is already navigating away
    Redirecting,
}

#[derive(Debug, Clone)]
pub struct ListController<T> {
    query: ListQuery,
    state: FetchState<T>,
    total_pages: u32,
    total_count: u64,
    latest_seq: u64,
    alive: bool,
    messages: FailureMessages,
}

impl<T> ListController<T> {
    pub fn new(page_size: u32, messages: FailureMessages) -> Self {
        Self {
            query: ListQuery::first_page(page_size),
            state: FetchState::Loading,
            total_pages: 1,
            total_count: 0,
            latest_seq: 0,
            alive: true,
            messages,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Rows of the current page; empty while loading or after a failure.
    pub fn rows(&self) -> &[T] {
        match &self.state {
            FetchState::Ready(result) => &result.rows,
            _ => &[],
        }
    }

    pub fn can_prev(&self) -> bool {
        self.query.page > 1 && !self.is_loading()
    }

    pub fn can_next(&self) -> bool {
        self.query.page < self.total_pages && !self.is_loading()
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.query.page, self.total_pages)
    }

    /// Returns `true` when the query changed and a refresh is due.
    pub fn set_search(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.query.search == text {
            return false;
        }
        self.query.search = text;
        self.query.page = 1;
        true
    }

    /// Returns `true` when the query changed and a refresh is due.
    pub fn set_city(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.query.city == text {
            return false;
        }
        self.query.city = text;
        self.query.page = 1;
        true
    }

    pub fn go_to_page(&mut self, page: u32) -> bool {
        let target = page.clamp(1, self.total_pages);
        if target == self.query.page {
            return false;
        }
        self.query.page = target;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.can_next() && self.go_to_page(self.query.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.can_prev() && self.go_to_page(self.query.page - 1)
    }

    /// Starts a new request for the current query; older tickets become stale.
    pub fn begin_refresh(&mut self) -> RequestTicket {
        self.latest_seq += 1;
        self.state = FetchState::Loading;
        RequestTicket {
            seq: self.latest_seq,
            query: self.query.clone(),
        }
    }

    pub fn complete(
        &mut self,
        ticket: &RequestTicket,
        result: Result<ListResult<T>, ApiError>,
    ) -> Completion {
        if !self.alive || ticket.seq != self.latest_seq {
            log::debug!(
                "Discarding stale list response (seq {}, latest {})",
                ticket.seq,
                self.latest_seq
            );
            return Completion::Discarded;
        }

        match result {
            Ok(result) => {
                self.total_pages = result.total_pages.max(1);
                self.total_count = result.total_count;
                self.state = FetchState::Ready(result);
                if self.query.page > self.total_pages {
                    self.query.page = self.total_pages;
                    return Completion::Clamped;
                }
                Completion::Applied
            }
            Err(ApiError::Unauthorized) => Completion::Redirecting,
            Err(e) => {
                log::error!("List fetch failed for page {}: {}", ticket.query.page, e);
                let msg = if e.is_network() {
                    self.messages.offline
                } else {
                    self.messages.fetch_failed
                };
                self.state = FetchState::Failed(msg.to_string());
                Completion::Applied
            }
        }
    }

    /// Called on component cleanup; every later completion is discarded.
    pub fn teardown(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGES: FailureMessages = FailureMessages {
        offline: "Backend offline.",
        fetch_failed: "Failed to fetch data.",
    };

    fn controller() -> ListController<String> {
        ListController::new(10, MESSAGES)
    }

    fn page(prefix: &str, rows: usize, total_pages: u32, total_count: u64) -> ListResult<String> {
        ListResult {
            rows: (0..rows).map(|i| format!("{}-{}", prefix, i)).collect(),
            total_pages,
            total_count,
        }
    }

    fn loaded(total_pages: u32) -> ListController<String> {
        let mut c = controller();
        let t = c.begin_refresh();
        c.complete(&t, Ok(page("init", 10, total_pages, total_pages as u64 * 10)));
        c
    }

    #[test]
    fn test_first_page_scenario() {
        let mut c = controller();
        let ticket = c.begin_refresh();
        assert_eq!(ticket.query, ListQuery::first_page(10));
        assert!(c.is_loading());

        assert_eq!(c.complete(&ticket, Ok(page("atm", 10, 5, 47))), Completion::Applied);
        assert_eq!(c.rows().len(), 10);
        assert_eq!(c.page_label(), "Page 1 of 5");
        assert_eq!(c.total_count(), 47);
        assert!(!c.can_prev());
        assert!(c.can_next());
    }

    #[test]
    fn test_latest_request_wins_over_late_stale_response() {
        let mut c = controller();
        let a = c.begin_refresh();
        assert!(c.set_search("sbi"));
        let b = c.begin_refresh();

        assert_eq!(c.complete(&b, Ok(page("b", 3, 1, 3))), Completion::Applied);
        assert_eq!(c.complete(&a, Ok(page("a", 10, 5, 47))), Completion::Discarded);

        assert_eq!(c.rows()[0], "b-0");
        assert_eq!(c.total_count(), 3);
        assert_eq!(c.query().search, "sbi");
    }

    #[test]
    fn test_stale_failure_does_not_clobber_newer_rows() {
        let mut c = controller();
        let a = c.begin_refresh();
        c.set_city("Pune");
        let b = c.begin_refresh();

        c.complete(&b, Ok(page("b", 2, 1, 2)));
        let outcome = c.complete(&a, Err(ApiError::Http { status: 500 }));

        assert_eq!(outcome, Completion::Discarded);
        assert_eq!(c.error(), None);
        assert_eq!(c.rows().len(), 2);
    }

    #[test]
    fn test_filter_change_resets_page_before_refresh() {
        let mut c = loaded(5);
        assert!(c.go_to_page(3));
        assert!(c.set_search("hdfc"));
        assert_eq!(c.begin_refresh().query.page, 1);

        let mut c = loaded(5);
        assert!(c.go_to_page(4));
        assert!(c.set_city("Delhi"));
        let ticket = c.begin_refresh();
        assert_eq!(ticket.query.page, 1);
        assert_eq!(ticket.query.city, "Delhi");
    }

    #[test]
    fn test_unchanged_filter_is_not_a_change() {
        let mut c = loaded(5);
        c.go_to_page(2);
        assert!(!c.set_search(""));
        assert!(!c.set_city(""));
        assert_eq!(c.page(), 2);
    }

    #[test]
    fn test_page_is_clamped_to_bounds() {
        let mut c = loaded(5);
        assert!(!c.prev_page());
        assert_eq!(c.page(), 1);

        assert!(c.go_to_page(99));
        assert_eq!(c.page(), 5);
        assert!(!c.next_page());
        assert!(!c.can_next());
        assert!(c.can_prev());

        assert!(c.go_to_page(0));
        assert_eq!(c.page(), 1);
    }

    #[test]
    fn test_controls_disabled_while_loading() {
        let mut c = loaded(5);
        c.go_to_page(3);
        c.begin_refresh();
        assert!(!c.can_prev());
        assert!(!c.can_next());
        assert!(!c.next_page());
        assert!(!c.prev_page());
        assert_eq!(c.page(), 3);
    }

    #[test]
    fn test_single_page_has_no_navigation() {
        let c = loaded(1);
        assert!(!c.can_prev());
        assert!(!c.can_next());
    }

    #[test]
    fn test_failure_clears_rows() {
        let mut c = loaded(5);
        assert_eq!(c.rows().len(), 10);

        let t = c.begin_refresh();
        c.complete(&t, Err(ApiError::Http { status: 500 }));
        assert!(c.rows().is_empty());
        assert_eq!(c.error(), Some("Failed to fetch data."));

        let t = c.begin_refresh();
        c.complete(&t, Err(ApiError::NetworkUnavailable("connection refused".into())));
        assert_eq!(c.error(), Some("Backend offline."));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let mut c = controller();
        let t = c.begin_refresh();
        c.complete(&t, Ok(ListResult::empty()));
        assert!(c.rows().is_empty());
        assert_eq!(c.error(), None);
        assert_eq!(c.page_label(), "Page 1 of 1");
    }

    #[test]
    fn test_unauthorized_leaves_state_to_the_redirect() {
        let mut c = controller();
        let t = c.begin_refresh();
        assert_eq!(c.complete(&t, Err(ApiError::Unauthorized)), Completion::Redirecting);
        assert!(c.is_loading());
        assert_eq!(c.error(), None);
    }

    #[test]
    fn test_shrunk_result_pulls_page_back() {
        let mut c = loaded(5);
        c.go_to_page(5);
        let t = c.begin_refresh();
        assert_eq!(c.complete(&t, Ok(page("x", 0, 2, 15))), Completion::Clamped);
        assert_eq!(c.page(), 2);
        assert_eq!(c.begin_refresh().query.page, 2);
    }

    #[test]
    fn test_teardown_discards_in_flight_response() {
        let mut c = controller();
        let t = c.begin_refresh();
        c.teardown();
        assert_eq!(c.complete(&t, Ok(page("late", 10, 5, 47))), Completion::Discarded);
        assert!(c.rows().is_empty());
        assert!(c.is_loading());
    }
}

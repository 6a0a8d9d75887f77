//! Paging and search state shared by the users and trusts screens. The state
//! is pure so both screens drive the same machine and the behavior is
//! testable without a browser: `begin` issues a sequence number for a fetch,
//! `finish` reconciles a completion, and anything carrying an older sequence
//! number is discarded so a late response can never overwrite a newer one.

use crate::app_lib::AppError;

/// Fixed number of records requested per listing or search call.
pub(crate) const PAGE_SIZE: usize = 10;

/// Parameters for the next fetch: which page, how many records, and the
/// committed search term (`None` means plain listing).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ListQuery {
    pub page: u32,
    pub limit: usize,
    pub search: Option<String>,
}

#[derive(Clone, Debug)]
pub(crate) struct ListState<T> {
    /// Plural noun used in user-facing messages ("users", "trusts").
    noun: &'static str,
    page: u32,
    limit: usize,
    has_next: bool,
    search: String,
    records: Vec<T>,
    loading: bool,
    message: Option<String>,
    /// Sequence number of the most recently issued fetch.
    issued: u64,
}

impl<T> ListState<T> {
    pub fn new(noun: &'static str) -> Self {
        Self {
            noun,
            page: 1,
            limit: PAGE_SIZE,
            has_next: false,
            search: String::new(),
            records: Vec::new(),
            loading: false,
            message: None,
            issued: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the parameters the next fetch should use.
    pub fn query(&self) -> ListQuery {
        let term = self.search.trim();
        ListQuery {
            page: self.page,
            limit: self.limit,
            search: (!term.is_empty()).then(|| term.to_string()),
        }
    }

    /// Marks a fetch as started and returns its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.loading = true;
        self.issued
    }

    /// Reconciles a fetch completion into view state. Completions that do not
    /// carry the latest issued sequence number are stale and mutate nothing,
    /// including the loading flag of the newer in-flight fetch.
    pub fn finish(&mut self, seq: u64, outcome: Result<Vec<T>, AppError>) {
        if seq != self.issued {
            return;
        }
        self.loading = false;

        match outcome {
            Ok(records) if !records.is_empty() => {
                // A full page is assumed to have a successor. An exact-multiple
                // total briefly offers a next page that turns out empty.
                self.has_next = records.len() == self.limit;
                self.records = records;
                self.message = None;
            }
            Ok(_) => {
                self.records.clear();
                self.has_next = false;
                self.message = Some(format!("No {} found", self.noun));
            }
            Err(_) => {
                self.records.clear();
                self.has_next = false;
                self.message = Some(format!("Failed to fetch {}", self.noun));
            }
        }
    }

    /// Moves to the next page. Refuses when the current page is not full.
    pub fn advance(&mut self) -> bool {
        if self.has_next {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page. Refuses on page 1.
    pub fn retreat(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Replaces a fetch that cannot be issued (e.g. no session token) with a
    /// user-facing message. No sequence number is spent, so a later real
    /// fetch is unaffected.
    pub fn reject(&mut self, message: &str) {
        self.records.clear();
        self.has_next = false;
        self.loading = false;
        self.message = Some(message.to_string());
    }

    /// Commits a search term and returns to the first page. An empty or
    /// whitespace-only term switches back to plain listing.
    pub fn submit_search(&mut self, raw: &str) {
        self.search = raw.trim().to_string();
        self.page = 1;
    }

    /// Splices records matching the predicate out of the client-held result
    /// set, typically after a deletion.
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) {
        self.records.retain(|record| !predicate(record));
    }
}

#[cfg(test)]
mod tests {
    use super::{ListState, PAGE_SIZE};
    use crate::app_lib::AppError;

    fn page_of(len: usize) -> Vec<u32> {
        (0..len as u32).collect()
    }

    #[test]
    fn full_page_sets_has_next() {
        let mut state = ListState::new("users");
        let seq = state.begin();
        state.finish(seq, Ok(page_of(PAGE_SIZE)));

        assert!(state.has_next());
        assert!(!state.loading());
        assert_eq!(state.records().len(), PAGE_SIZE);
        assert_eq!(state.message(), None);
    }

    #[test]
    fn short_page_clears_has_next() {
        let mut state = ListState::new("users");
        let seq = state.begin();
        state.finish(seq, Ok(page_of(PAGE_SIZE)));

        let seq = state.begin();
        state.finish(seq, Ok(page_of(3)));

        assert!(!state.has_next());
        assert_eq!(state.records().len(), 3);
    }

    #[test]
    fn empty_page_yields_not_found_message() {
        let mut state = ListState::<u32>::new("trusts");
        let seq = state.begin();
        state.finish(seq, Ok(Vec::new()));

        assert!(state.records().is_empty());
        assert!(!state.has_next());
        assert!(!state.loading());
        assert_eq!(state.message(), Some("No trusts found"));
    }

    #[test]
    fn failure_clears_records_and_sets_message() {
        let mut state = ListState::new("users");
        let seq = state.begin();
        state.finish(seq, Ok(page_of(PAGE_SIZE)));

        let seq = state.begin();
        state.finish(
            seq,
            Err(AppError::Http {
                status: 500,
                message: "boom".to_string(),
            }),
        );

        assert!(state.records().is_empty());
        assert!(!state.has_next());
        assert_eq!(state.message(), Some("Failed to fetch users"));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = ListState::new("users");
        let first = state.begin();
        let second = state.begin();

        // The older fetch resolves after the newer one was issued.
        state.finish(first, Ok(page_of(PAGE_SIZE)));
        assert!(state.records().is_empty());
        assert!(state.loading(), "newer fetch is still in flight");

        state.finish(second, Ok(page_of(3)));
        assert_eq!(state.records().len(), 3);
        assert!(!state.loading());
    }

    #[test]
    fn advance_walks_pages_and_respects_has_next() {
        let mut state = ListState::new("users");
        assert!(!state.advance(), "no next page known yet");

        let seq = state.begin();
        state.finish(seq, Ok(page_of(PAGE_SIZE)));
        assert!(state.advance());
        assert_eq!(state.page(), 2);

        let seq = state.begin();
        state.finish(seq, Ok(page_of(3)));
        assert!(!state.advance());
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn retreat_stops_at_first_page() {
        let mut state = ListState::<u32>::new("users");
        assert!(!state.retreat());

        let seq = state.begin();
        state.finish(seq, Ok(page_of(PAGE_SIZE)));
        state.advance();

        assert!(state.retreat());
        assert_eq!(state.page(), 1);
        assert!(!state.retreat());
    }

    #[test]
    fn submit_search_resets_page() {
        let mut state = ListState::<u32>::new("trusts");
        let seq = state.begin();
        state.finish(seq, Ok(page_of(PAGE_SIZE)));
        state.advance();

        state.submit_search("acme");
        assert_eq!(state.page(), 1);
        assert_eq!(state.query().search.as_deref(), Some("acme"));
    }

    #[test]
    fn blank_search_switches_back_to_listing() {
        let mut state = ListState::<u32>::new("users");
        state.submit_search("  acme  ");
        assert_eq!(state.query().search.as_deref(), Some("acme"));

        state.submit_search("   ");
        assert_eq!(state.query().search, None);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn query_carries_page_and_limit() {
        let mut state = ListState::<u32>::new("users");
        let seq = state.begin();
        state.finish(seq, Ok(page_of(PAGE_SIZE)));
        state.advance();

        let query = state.query();
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, PAGE_SIZE);
        assert_eq!(query.search, None);
    }

    #[test]
    fn reject_replaces_fetch_with_message() {
        let mut state = ListState::<u32>::new("users");
        state.reject("No token found. Please log in.");

        assert!(state.records().is_empty());
        assert!(!state.loading());
        assert!(!state.has_next());
        assert_eq!(state.message(), Some("No token found. Please log in."));

        // A real fetch issued afterwards proceeds normally.
        let seq = state.begin();
        state.finish(seq, Ok(page_of(PAGE_SIZE)));
        assert_eq!(state.records().len(), PAGE_SIZE);
        assert_eq!(state.message(), None);
    }

    #[test]
    fn remove_where_splices_records() {
        let mut state = ListState::new("users");
        let seq = state.begin();
        state.finish(seq, Ok(page_of(5)));

        state.remove_where(|record| *record == 2);
        assert_eq!(state.records(), &[0, 1, 3, 4]);
    }
}

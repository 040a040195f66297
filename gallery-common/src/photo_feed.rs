use std::collections::HashSet;

/// Anything the feed can deduplicate by identifier.
pub trait FeedItem {
    fn id(&self) -> &str;
}

/// A page request handed to the caller to perform.
///
/// The feed never does I/O itself: it decides *whether* a page should be
/// fetched and the caller reports the result back through
/// [`PhotoFeed::apply_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

/// What applying a page result did to the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// New items were appended (count excludes duplicates that were dropped)
    Appended(usize),
    /// The page was empty, the feed is now exhausted
    Exhausted,
    /// The fetch failed; the message is now the feed error
    Failed(String),
    /// The result was for a page other than the current cursor and was ignored
    Stale,
}

/// Pure state machine behind the infinite-scrolling gallery.
///
/// Holds the accumulated list, the page cursor, and the loading/exhausted
/// flags. Handles cursor advancement and deduplication without any I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoFeed<T> {
    items: Vec<T>,
    seen: HashSet<String>,
    page: u32,
    page_size: u32,
    loading: bool,
    exhausted: bool,
    error: Option<String>,
}

impl<T: FeedItem> PhotoFeed<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            page: 1,
            page_size,
            loading: false,
            exhausted: false,
            error: None,
        }
    }

    /// Request the page at the current cursor (initial load on mount).
    ///
    /// Returns `None` if a request is already outstanding or the feed is
    /// exhausted.
    pub fn start(&mut self) -> Option<PageRequest> {
        if self.loading || self.exhausted {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(PageRequest {
            page: self.page,
            limit: self.page_size,
        })
    }

    /// The last rendered item became visible.
    ///
    /// Advances the cursor by exactly one and returns the request for the
    /// new page, unless a request is outstanding or the feed is exhausted.
    pub fn advance(&mut self) -> Option<PageRequest> {
        if self.loading || self.exhausted {
            return None;
        }
        self.page += 1;
        self.start()
    }

    /// Apply the result of a page fetch.
    ///
    /// Results for a page other than the current cursor are dropped without
    /// touching the loading flag, since the current request is still pending.
    /// A repeated result for a request that already landed is dropped too.
    pub fn apply_page(
        &mut self,
        request: PageRequest,
        result: Result<Vec<T>, String>,
    ) -> PageOutcome {
        if !self.loading || request.page != self.page {
            return PageOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(page) if page.is_empty() => {
                self.exhausted = true;
                PageOutcome::Exhausted
            }
            Ok(page) => {
                let before = self.items.len();
                for item in page {
                    if self.seen.insert(item.id().to_string()) {
                        self.items.push(item);
                    }
                }
                PageOutcome::Appended(self.items.len() - before)
            }
            Err(message) => {
                self.error = Some(message.clone());
                PageOutcome::Failed(message)
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Idle, nothing loaded and nothing went wrong: "no results".
    pub fn shows_empty_state(&self) -> bool {
        !self.loading && self.items.is_empty() && self.error.is_none()
    }

    /// Exhausted after having shown at least one item: "end of list".
    pub fn shows_end_of_feed(&self) -> bool {
        self.exhausted && !self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(String);

    impl FeedItem for Item {
        fn id(&self) -> &str {
            &self.0
        }
    }

    fn page_of(range: std::ops::Range<u32>) -> Vec<Item> {
        range.map(|i| Item(i.to_string())).collect()
    }

    fn ids(feed: &PhotoFeed<Item>) -> Vec<&str> {
        feed.items().iter().map(|i| i.id()).collect()
    }

    #[test]
    fn test_start_requests_first_page() {
        let mut feed = PhotoFeed::<Item>::new(20);
        assert_eq!(feed.start(), Some(PageRequest { page: 1, limit: 20 }));
        assert!(feed.is_loading());
    }

    #[test]
    fn test_start_while_loading_is_ignored() {
        let mut feed = PhotoFeed::<Item>::new(20);
        feed.start();
        assert_eq!(feed.start(), None);
    }

    #[test]
    fn test_advance_blocked_while_loading() {
        let mut feed = PhotoFeed::<Item>::new(20);
        feed.start();
        for _ in 0..5 {
            assert_eq!(feed.advance(), None);
        }
        let req = PageRequest { page: 1, limit: 20 };
        feed.apply_page(req, Ok(page_of(0..20)));
        assert_eq!(feed.advance(), Some(PageRequest { page: 2, limit: 20 }));
    }

    #[test]
    fn test_advance_increments_cursor_by_one() {
        let mut feed = PhotoFeed::new(20);
        let req = feed.start().unwrap();
        feed.apply_page(req, Ok(page_of(0..20)));

        let next = feed.advance().unwrap();
        assert_eq!(next.page, 2);
        assert_eq!(feed.advance(), None);

        feed.apply_page(next, Ok(page_of(20..40)));
        assert_eq!(feed.advance().map(|r| r.page), Some(3));
    }

    #[test]
    fn test_overlapping_pages_are_deduplicated() {
        let mut feed = PhotoFeed::new(3);
        let req = feed.start().unwrap();
        feed.apply_page(req, Ok(page_of(0..3)));

        let req = feed.advance().unwrap();
        let outcome = feed.apply_page(req, Ok(page_of(2..5)));

        assert_eq!(outcome, PageOutcome::Appended(2));
        assert_eq!(ids(&feed), vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_duplicates_within_a_page_are_dropped() {
        let mut feed = PhotoFeed::new(4);
        let req = feed.start().unwrap();
        let page = vec![
            Item("a".into()),
            Item("b".into()),
            Item("a".into()),
            Item("c".into()),
        ];
        assert_eq!(feed.apply_page(req, Ok(page)), PageOutcome::Appended(3));
        assert_eq!(ids(&feed), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_arrival_order_is_preserved() {
        let mut feed = PhotoFeed::new(3);
        let req = feed.start().unwrap();
        feed.apply_page(
            req,
            Ok(vec![Item("9".into()), Item("1".into()), Item("5".into())]),
        );
        assert_eq!(ids(&feed), vec!["9", "1", "5"]);
    }

    #[test]
    fn test_three_page_scenario_exhausts() {
        let mut feed = PhotoFeed::new(20);
        let mut requests = 0;

        let req = feed.start().unwrap();
        requests += 1;
        feed.apply_page(req, Ok(page_of(0..20)));

        let req = feed.advance().unwrap();
        requests += 1;
        feed.apply_page(req, Ok(page_of(20..40)));

        let req = feed.advance().unwrap();
        requests += 1;
        assert_eq!(req.page, 3);
        assert_eq!(feed.apply_page(req, Ok(vec![])), PageOutcome::Exhausted);

        for _ in 0..10 {
            if feed.advance().is_some() {
                requests += 1;
            }
        }

        assert_eq!(requests, 3);
        assert_eq!(feed.items().len(), 40);
        assert!(feed.is_exhausted());
        assert!(feed.shows_end_of_feed());
        assert!(!feed.shows_empty_state());
    }

    #[test]
    fn test_empty_first_page_shows_no_results_not_end() {
        let mut feed = PhotoFeed::<Item>::new(20);
        let req = feed.start().unwrap();
        feed.apply_page(req, Ok(vec![]));

        assert!(feed.is_exhausted());
        assert!(feed.shows_empty_state());
        assert!(!feed.shows_end_of_feed());
    }

    #[test]
    fn test_error_on_first_load() {
        let mut feed = PhotoFeed::<Item>::new(20);
        let req = feed.start().unwrap();
        let outcome = feed.apply_page(req, Err("Network error: offline".into()));

        assert_eq!(outcome, PageOutcome::Failed("Network error: offline".into()));
        assert_eq!(feed.error(), Some("Network error: offline"));
        assert!(feed.items().is_empty());
        assert!(!feed.is_loading());
        assert!(!feed.shows_empty_state());
    }

    #[test]
    fn test_error_keeps_accumulated_items() {
        let mut feed = PhotoFeed::new(2);
        let req = feed.start().unwrap();
        feed.apply_page(req, Ok(page_of(0..2)));

        let req = feed.advance().unwrap();
        feed.apply_page(req, Err("Server error: 503".into()));

        assert_eq!(ids(&feed), vec!["0", "1"]);
        assert_eq!(feed.error(), Some("Server error: 503"));
        assert!(!feed.is_exhausted());
    }

    #[test]
    fn test_next_request_clears_error() {
        let mut feed = PhotoFeed::new(2);
        let req = feed.start().unwrap();
        feed.apply_page(req, Ok(page_of(0..2)));
        let req = feed.advance().unwrap();
        feed.apply_page(req, Err("boom".into()));

        assert!(feed.advance().is_some());
        assert_eq!(feed.error(), None);
    }

    #[test]
    fn test_stale_page_result_is_ignored() {
        let mut feed = PhotoFeed::new(2);
        let first = feed.start().unwrap();
        let outcome = feed.apply_page(PageRequest { page: 7, limit: 2 }, Ok(page_of(0..2)));

        assert_eq!(outcome, PageOutcome::Stale);
        assert!(feed.items().is_empty());
        assert!(feed.is_loading());

        feed.apply_page(first, Ok(page_of(0..2)));
        assert_eq!(feed.items().len(), 2);
    }

    #[test]
    fn test_repeated_result_for_landed_page_is_ignored() {
        let mut feed = PhotoFeed::new(1);
        let req = feed.start().unwrap();
        assert_eq!(
            feed.apply_page(req, Ok(vec![Item("a".into())])),
            PageOutcome::Appended(1)
        );

        let outcome = feed.apply_page(req, Ok(vec![Item("b".into())]));
        assert_eq!(outcome, PageOutcome::Stale);
        assert_eq!(ids(&feed), vec!["a"]);
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_result_without_outstanding_request_is_ignored() {
        let mut feed = PhotoFeed::<Item>::new(2);
        let outcome = feed.apply_page(PageRequest { page: 1, limit: 2 }, Ok(page_of(0..2)));
        assert_eq!(outcome, PageOutcome::Stale);
        assert!(feed.items().is_empty());
    }
}

/// Render state of a single-item lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    /// Request outstanding
    Loading,
    /// Request failed or the item does not exist
    Failed(String),
    /// Item metadata present
    Loaded(T),
}

/// Tag attached to a request at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    token: u64,
    id: String,
}

impl Ticket {
    /// The identifier this request was issued for.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Tracks the lookup for whichever identifier is currently routed.
///
/// Every [`begin`](Self::begin) issues a fresh monotonic token; a response
/// only lands if its ticket still carries the latest token, so a slow reply
/// for an identifier the user already navigated away from is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSession<T> {
    next_token: u64,
    current: Option<Ticket>,
    state: DetailState<T>,
}

impl<T> Default for DetailSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DetailSession<T> {
    pub fn new() -> Self {
        Self {
            next_token: 0,
            current: None,
            state: DetailState::Loading,
        }
    }

    /// Start a lookup for `id`, superseding any request still in flight.
    pub fn begin(&mut self, id: &str) -> Ticket {
        self.next_token += 1;
        let ticket = Ticket {
            token: self.next_token,
            id: id.to_string(),
        };
        self.current = Some(ticket.clone());
        self.state = DetailState::Loading;
        ticket
    }

    /// Whether `ticket` is the latest issued request.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.current.as_ref() == Some(ticket)
    }

    /// Apply a response. Returns `false` (and changes nothing) if the
    /// ticket has been superseded.
    pub fn resolve(&mut self, ticket: &Ticket, result: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = match result {
            Ok(item) => DetailState::Loaded(item),
            Err(message) => DetailState::Failed(message),
        };
        true
    }

    pub fn state(&self) -> &DetailState<T> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let session = DetailSession::<String>::new();
        assert_eq!(session.state(), &DetailState::Loading);
    }

    #[test]
    fn test_resolve_success() {
        let mut session = DetailSession::new();
        let ticket = session.begin("42");
        assert!(session.resolve(&ticket, Ok("photo 42".to_string())));
        assert_eq!(session.state(), &DetailState::Loaded("photo 42".to_string()));
    }

    #[test]
    fn test_resolve_failure() {
        let mut session = DetailSession::<String>::new();
        let ticket = session.begin("999");
        assert!(session.resolve(&ticket, Err("Photo not found".into())));
        assert_eq!(session.state(), &DetailState::Failed("Photo not found".into()));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = DetailSession::new();
        let old = session.begin("1");
        let new = session.begin("2");

        assert!(!session.resolve(&old, Ok("photo 1".to_string())));
        assert_eq!(session.state(), &DetailState::Loading);

        assert!(session.resolve(&new, Ok("photo 2".to_string())));
        assert_eq!(session.state(), &DetailState::Loaded("photo 2".to_string()));
    }

    #[test]
    fn test_stale_response_after_newer_one_landed() {
        let mut session = DetailSession::new();
        let old = session.begin("1");
        let new = session.begin("2");
        session.resolve(&new, Ok("photo 2".to_string()));

        assert!(!session.resolve(&old, Err("Network error".into())));
        assert_eq!(session.state(), &DetailState::Loaded("photo 2".to_string()));
    }

    #[test]
    fn test_same_id_twice_gets_distinct_tickets() {
        let mut session = DetailSession::<String>::new();
        let first = session.begin("7");
        let second = session.begin("7");
        assert_ne!(first, second);
        assert!(!session.is_current(&first));
        assert!(session.is_current(&second));
    }

    #[test]
    fn test_begin_resets_to_loading() {
        let mut session = DetailSession::new();
        let ticket = session.begin("1");
        session.resolve(&ticket, Ok("photo 1".to_string()));
        let next = session.begin("2");
        assert_eq!(session.state(), &DetailState::Loading);
        assert_eq!(next.id(), "2");
        assert!(session.is_current(&next));
    }
}

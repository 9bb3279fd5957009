//! Optimistic like flag shadowing the server value.

use tracing::debug;

use crate::query_cache::QueryKey;

/// Two-source like state: the last value the server reported plus an
/// optional local override set by user clicks.
///
/// The override wins until the server reports a different value, at which
/// point server truth replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    server: bool,
    optimistic: Option<bool>,
}

impl LikeState {
    /// Seed from the server value.
    pub fn new(server: bool) -> Self {
        Self {
            server,
            optimistic: None,
        }
    }

    /// Value to render.
    pub fn displayed(&self) -> bool {
        self.optimistic.unwrap_or(self.server)
    }

    /// Last value reported by the server.
    pub fn server(&self) -> bool {
        self.server
    }

    /// Whether a local flip is shadowing the server value.
    pub fn is_overridden(&self) -> bool {
        self.optimistic.is_some()
    }

    /// Flip the displayed value once and return the new value.
    pub fn toggle(&mut self) -> bool {
        let next = !self.displayed();
        self.optimistic = Some(next);
        next
    }

    /// Merge a server value arriving with new props.
    ///
    /// A changed value replaces the server side and drops any local
    /// override; an unchanged value leaves the override in place.
    pub fn sync(&mut self, server: bool) {
        if server == self.server {
            return;
        }
        if self.optimistic.is_some() {
            debug!(server, "server like value changed, dropping local override");
        }
        self.server = server;
        self.optimistic = None;
    }

    /// Non-mutating form of [`LikeState::sync`].
    pub fn synced(mut self, server: bool) -> Self {
        self.sync(server);
        self
    }
}

/// Tracks the like request of one control so clicks are ignored while a
/// request is still in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LikeRequest {
    in_flight: bool,
}

impl LikeRequest {
    /// Whether a request is in flight.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start persisting the flip of `displayed`. Returns the value to send,
    /// or `None` when the previous request has not finished yet.
    pub fn begin(&mut self, displayed: bool) -> Option<bool> {
        if self.in_flight {
            debug!(displayed, "like request in flight, click ignored");
            return None;
        }
        self.in_flight = true;
        Some(!displayed)
    }

    /// Record the end of the request. A persisted change makes the animal
    /// listing stale.
    pub fn finish(&mut self, persisted: bool) -> Option<QueryKey> {
        self.in_flight = false;
        persisted.then_some(QueryKey::AnimalList)
    }
}

#[cfg(test)]
mod tests {
    use super::{LikeRequest, LikeState};
    use crate::query_cache::QueryKey;

    #[test]
    fn initial_display_matches_server() {
        assert!(LikeState::new(true).displayed());
        assert!(!LikeState::new(false).displayed());
    }

    #[test]
    fn toggle_flips_once_per_call() {
        let mut state = LikeState::new(false);
        assert!(state.toggle());
        assert!(state.displayed());
        assert!(!state.toggle());
        assert!(!state.displayed());
        assert!(!state.server());
    }

    #[test]
    fn changed_server_value_overrides_local_toggle() {
        let mut state = LikeState::new(false);
        state.toggle();
        state.toggle();
        assert!(!state.displayed());

        state.sync(true);
        assert!(state.displayed());
        assert!(!state.is_overridden());
    }

    #[test]
    fn unchanged_server_value_keeps_local_toggle() {
        let mut state = LikeState::new(false);
        state.toggle();
        state.sync(false);
        assert!(state.displayed());
        assert!(state.is_overridden());
    }

    #[test]
    fn synced_returns_merged_copy() {
        let state = LikeState::new(true);
        let merged = state.synced(false);
        assert!(state.displayed());
        assert!(!merged.displayed());
    }

    #[test]
    fn clicks_during_a_request_are_ignored() {
        let mut state = LikeState::new(false);
        let mut request = LikeRequest::default();

        let sent = request.begin(state.displayed());
        assert_eq!(sent, Some(true));
        state.toggle();

        assert_eq!(request.begin(state.displayed()), None);
        assert!(state.displayed());

        request.finish(true);
        assert!(!request.is_in_flight());
        assert_eq!(request.begin(state.displayed()), Some(false));
    }

    #[test]
    fn persisted_like_invalidates_animal_list() {
        let mut request = LikeRequest::default();
        request.begin(false);
        assert_eq!(request.finish(true), Some(QueryKey::AnimalList));

        request.begin(true);
        assert_eq!(request.finish(false), None);
        assert!(!request.is_in_flight());
    }
}

//! Autosuggest query sequencing
//!
//! One suggestion request goes out per input event and nothing is ever
//! cancelled, so responses can resolve out of order. [`QueryGuard`] tags
//! every query with a monotonically increasing id and admits a response
//! only while its id is still the latest, which makes the rendered panel
//! last-query-wins instead of last-response-wins.

use crate::protocol::{CategorySuggestion, RouterSuggestion};

/// One entry in the suggestion panel: a display label plus an optional
/// target identifier the view navigates to or fills in on click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub target: Option<String>,
}

impl From<RouterSuggestion> for Suggestion {
    fn from(row: RouterSuggestion) -> Self {
        Self {
            target: Some(row.emei.clone()),
            label: row.emei,
        }
    }
}

impl From<CategorySuggestion> for Suggestion {
    fn from(row: CategorySuggestion) -> Self {
        Self {
            target: Some(row.name.clone()),
            label: row.name,
        }
    }
}

/// Opaque tag for one in-flight suggestion query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryId(u64);

/// What the view should do for a given input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryAction {
    /// Hide the panel immediately, no network call
    Clear,
    /// Fetch with this tag and render only if it is admitted
    Fetch(QueryId),
}

/// Sequencer for overlapping suggestion fetches.
#[derive(Debug, Default)]
pub struct QueryGuard {
    latest: u64,
}

impl QueryGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the current input value.
    ///
    /// An empty (after trim) value clears the panel and also invalidates
    /// every id issued so far, so a stale response can never repopulate a
    /// panel the user just emptied.
    pub fn begin(&mut self, query: &str) -> QueryAction {
        self.latest += 1;
        if query.trim().is_empty() {
            QueryAction::Clear
        } else {
            QueryAction::Fetch(QueryId(self.latest))
        }
    }

    /// True iff this id belongs to the most recent query.
    pub fn admit(&self, id: QueryId) -> bool {
        id.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_clears_without_fetch() {
        let mut guard = QueryGuard::new();
        assert_eq!(guard.begin(""), QueryAction::Clear);
        assert_eq!(guard.begin("   "), QueryAction::Clear);
    }

    #[test]
    fn test_single_query_admitted() {
        let mut guard = QueryGuard::new();
        let QueryAction::Fetch(id) = guard.begin("357") else {
            panic!("expected fetch");
        };
        assert!(guard.admit(id));
    }

    #[test]
    fn test_last_query_wins() {
        let mut guard = QueryGuard::new();
        let QueryAction::Fetch(first) = guard.begin("3") else {
            panic!("expected fetch");
        };
        let QueryAction::Fetch(second) = guard.begin("35") else {
            panic!("expected fetch");
        };

        // The older response arrives last but is still rejected
        assert!(guard.admit(second));
        assert!(!guard.admit(first));
    }

    #[test]
    fn test_clear_invalidates_in_flight() {
        let mut guard = QueryGuard::new();
        let QueryAction::Fetch(id) = guard.begin("Cat") else {
            panic!("expected fetch");
        };
        // User wipes the field while the fetch is still out
        assert_eq!(guard.begin(""), QueryAction::Clear);
        assert!(!guard.admit(id));
    }

    #[test]
    fn test_router_suggestion_into() {
        let suggestion: Suggestion = RouterSuggestion {
            emei: "35791246802468013".to_string(),
        }
        .into();
        assert_eq!(suggestion.label, "35791246802468013");
        assert_eq!(suggestion.target.as_deref(), Some("35791246802468013"));
    }

    #[test]
    fn test_category_suggestion_into() {
        let suggestion: Suggestion = CategorySuggestion {
            name: "Cat1".to_string(),
        }
        .into();
        assert_eq!(suggestion.label, "Cat1");
        assert_eq!(suggestion.target.as_deref(), Some("Cat1"));
    }
}

//! Debounced reference-data search for typeahead selectors.
//!
//! Used wherever a modal lets the user search a related entity while typing
//! (member by phone number, coupon series by name). Keystrokes feed a
//! [`DebounceTimer`]; after the quiet period the keyword commits into a
//! watch channel the owning view can await. Queries are keyed by the
//! committed keyword, the selector's open flag, and an optional
//! disambiguating excluded id, so no query fires while the selector is
//! closed and a stale keyword never reuses a result tied to a different key.

use std::time::Duration;

use tokio::sync::watch;

use crate::debounce::{DEFAULT_DEBOUNCE_MS, DebounceTimer};

/// Cache key for a reference-data query.
///
/// An empty keyword is a valid key: the backend answers it with a default
/// unfiltered page of candidates ("show first N by default").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub keyword: String,
    /// Entity to leave out of the candidates, e.g. the member being edited
    /// when picking a referrer.
    pub exclude_id: Option<String>,
}

/// Debounced keyword search scoped to one selector instance.
pub struct ReferenceSearch {
    timer: DebounceTimer,
    keyword: watch::Sender<String>,
    open: bool,
    exclude_id: Option<String>,
}

impl ReferenceSearch {
    pub fn new(delay: Duration) -> Self {
        let (keyword, _) = watch::channel(String::new());
        Self {
            timer: DebounceTimer::new(delay),
            keyword,
            open: false,
            exclude_id: None,
        }
    }

    pub fn with_excluded(mut self, id: impl Into<String>) -> Self {
        self.exclude_id = Some(id.into());
        self
    }

    /// Track whether the containing selector/modal is open. While closed,
    /// [`query_key`](Self::query_key) yields nothing and no query fires.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Schedule the raw input to commit after the quiet period. Each
    /// keystroke supersedes the previous pending commit.
    pub fn on_keystroke(&mut self, raw: &str) {
        let keyword = self.keyword.clone();
        self.timer.schedule(raw.to_string(), move |value| {
            keyword.send_replace(value);
        });
    }

    /// Force-clear on blur or selection: cancel any pending timer and reset
    /// the committed keyword, so a late commit cannot stomp a just-made
    /// selection.
    pub fn on_blur_or_select(&mut self) {
        self.timer.cancel();
        self.keyword.send_replace(String::new());
    }

    pub fn committed_keyword(&self) -> String {
        self.keyword.borrow().clone()
    }

    /// Receiver the owning view can await for keyword commits.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.keyword.subscribe()
    }

    /// Key for the dependent query, or `None` while the selector is closed.
    pub fn query_key(&self) -> Option<SearchKey> {
        self.open.then(|| SearchKey {
            keyword: self.committed_keyword(),
            exclude_id: self.exclude_id.clone(),
        })
    }
}

impl Default for ReferenceSearch {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

//! Stateful autocomplete session: trigger detection, live filtering,
//! candidate selection, and commit splicing.
//!
//! `AutocompleteSession` owns the session state machine and mirrors the
//! host editor's text and caret. The host feeds it text changes and key
//! events and renders the returned [`SessionView`]; on commit it applies
//! the returned [`CommitResult`] to its own buffer (text first, then
//! caret).

mod commit;
mod ghost;
mod key_handlers;
mod scroll;
mod text_change;
mod trigger;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use inkling_core::catalog::TriggerCatalog;

pub use scroll::{scroll_into_view, ListViewport, RowBounds};
pub use types::{CommitResult, KeyEvent, KeyResponse, SessionView};

use types::SessionState;

/// Stateful autocomplete session bound to one editing surface.
pub struct AutocompleteSession {
    catalog: Arc<TriggerCatalog>,
    /// Mirror of the host's buffer, updated on every text change.
    text: String,
    /// Caret as a char offset into `text`.
    caret: usize,
    state: SessionState,
}

impl AutocompleteSession {
    pub fn new(catalog: Arc<TriggerCatalog>) -> Self {
        Self {
            catalog,
            text: String::new(),
            caret: 0,
            state: SessionState::Idle,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Trigger character of the open session, if any.
    pub fn trigger(&self) -> Option<char> {
        match &self.state {
            SessionState::Active(s) => Some(s.trigger_char),
            SessionState::Idle => None,
        }
    }

    /// Snapshot of the current session state for the rendering shell.
    pub fn view(&self) -> SessionView {
        match &self.state {
            SessionState::Active(s) => SessionView {
                is_open: true,
                candidates: s.candidates.clone(),
                selected_index: s.selected,
                ghost_suffix: self.ghost_suffix().to_string(),
            },
            SessionState::Idle => SessionView::closed(),
        }
    }
}

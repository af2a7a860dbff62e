use tracing::{debug, debug_span};

use inkling_core::filter::filter_prefix;
use inkling_core::unicode::{char_len, char_slice};

use super::trigger::find_active_trigger;
use super::types::{Session, SessionState, SessionView};
use super::AutocompleteSession;

impl AutocompleteSession {
    /// Process a text change from the host. Re-derives the whole session
    /// (trigger, query, filtered candidates) from scratch and resets the
    /// selection to the top match; there is no incremental update path.
    ///
    /// A caret beyond the text length is clamped rather than rejected.
    pub fn on_text_changed(&mut self, text: &str, caret: usize) -> SessionView {
        let _span = debug_span!("on_text_changed", caret).entered();

        self.text.clear();
        self.text.push_str(text);
        self.caret = caret.min(char_len(text));
        self.recompute_session();
        self.view()
    }

    fn recompute_session(&mut self) {
        let before_caret = char_slice(&self.text, 0, self.caret);

        let Some((trigger_char, trigger_index)) = find_active_trigger(&self.catalog, before_caret)
        else {
            self.close_session();
            return;
        };

        let query = char_slice(before_caret, trigger_index + 1, char_len(before_caret));
        let entries = self.catalog.candidates(trigger_char).unwrap_or(&[]);
        let candidates = filter_prefix(entries, query);
        if candidates.is_empty() {
            self.close_session();
            return;
        }

        debug!(%trigger_char, trigger_index, query, count = candidates.len(), "session open");
        self.state = SessionState::Active(Session {
            trigger_char,
            trigger_index,
            query: query.to_string(),
            candidates,
            selected: 0,
        });
    }

    pub(crate) fn close_session(&mut self) {
        if self.is_open() {
            debug!("session closed");
        }
        self.state = SessionState::Idle;
    }
}

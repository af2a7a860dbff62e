use tracing::debug;

use inkling_core::unicode::{char_len, char_slice};

use super::types::{CommitResult, SessionState};
use super::AutocompleteSession;

impl AutocompleteSession {
    /// Splice the selected candidate into the buffer: everything up to and
    /// including the trigger character, the candidate, a trailing space,
    /// then everything after the caret. The new caret lands just past the
    /// trailing space. Closes the session; returns `None` when idle.
    ///
    /// The engine's own text/caret mirror is updated to the result, so a
    /// host that echoes the edit back via `on_text_changed` is a no-op.
    pub fn on_commit(&mut self) -> Option<CommitResult> {
        let SessionState::Active(ref s) = self.state else {
            return None;
        };

        let candidate = &s.candidates[s.selected];
        let before = char_slice(&self.text, 0, s.trigger_index + 1);
        let after = char_slice(&self.text, self.caret, char_len(&self.text));
        let new_text = format!("{before}{candidate} {after}");
        let new_caret = s.trigger_index + 1 + char_len(candidate) + 1;

        debug!(%candidate, new_caret, "commit");
        self.text = new_text.clone();
        self.caret = new_caret;
        self.close_session();

        Some(CommitResult {
            new_text,
            new_caret,
        })
    }

    /// Commit a candidate chosen by pointer instead of the keyboard. The
    /// candidate must be in the current filtered list; an unknown value or
    /// a closed session is a no-op.
    pub fn on_suggestion_clicked(&mut self, candidate: &str) -> Option<CommitResult> {
        let SessionState::Active(ref mut s) = self.state else {
            return None;
        };
        let index = s.candidates.iter().position(|c| c == candidate)?;
        s.selected = index;
        self.on_commit()
    }

    /// Close the session without touching text or caret.
    pub fn on_cancel(&mut self) {
        self.close_session();
    }
}

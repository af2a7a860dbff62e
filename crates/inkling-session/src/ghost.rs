use inkling_core::unicode::{char_len, char_slice};

use super::types::SessionState;
use super::AutocompleteSession;

impl AutocompleteSession {
    /// The uncommitted remainder of the selected candidate: its chars
    /// beyond what the query already covers. Advisory preview text only,
    /// never written into the buffer. Empty when no session is open.
    pub fn ghost_suffix(&self) -> &str {
        match &self.state {
            SessionState::Active(s) => {
                let candidate = &s.candidates[s.selected];
                char_slice(candidate, char_len(&s.query), char_len(candidate))
            }
            SessionState::Idle => "",
        }
    }
}

use tracing::debug_span;

use super::types::{cyclic_index, KeyEvent, KeyResponse, SessionState, SessionView};
use super::AutocompleteSession;

impl AutocompleteSession {
    /// Move the selection by `delta` (1 = next, -1 = previous), wrapping
    /// at both ends. No-op when no session is open.
    pub fn on_navigate(&mut self, delta: i32) -> SessionView {
        if let SessionState::Active(ref mut s) = self.state {
            s.selected = cyclic_index(s.selected, delta, s.candidates.len());
        }
        self.view()
    }

    /// Process a key event. Keys are only consumed while a session is
    /// open; the host handles everything else itself.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?key).entered();

        if !self.is_open() {
            return KeyResponse::not_consumed(self.view());
        }

        match key {
            KeyEvent::Tab | KeyEvent::Enter => {
                let commit = self.on_commit();
                KeyResponse {
                    consumed: true,
                    commit,
                    view: self.view(),
                }
            }
            KeyEvent::ArrowDown => KeyResponse::consumed(self.on_navigate(1)),
            KeyEvent::ArrowUp => KeyResponse::consumed(self.on_navigate(-1)),
            KeyEvent::Escape => {
                self.on_cancel();
                KeyResponse::consumed(self.view())
            }
            KeyEvent::Other => KeyResponse::not_consumed(self.view()),
        }
    }
}

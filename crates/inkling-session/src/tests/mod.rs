mod basic;

use std::sync::Arc;

use inkling_core::catalog::TriggerCatalog;
use inkling_core::unicode::char_len;

use super::{AutocompleteSession, SessionView};

pub(super) fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn make_test_catalog() -> Arc<TriggerCatalog> {
    Arc::new(TriggerCatalog::from_entries([
        ('#', list(&["标题", "重要", "任务", "提醒"])),
        ('@', list(&["team", "test", "用户1"])),
        ('/', list(&["date", "time"])),
    ]))
}

pub(super) fn make_session() -> AutocompleteSession {
    AutocompleteSession::new(make_test_catalog())
}

// Helper: report a text change with the caret at the end, the way a host
// does after each keystroke.
pub(super) fn type_text(session: &mut AutocompleteSession, text: &str) -> SessionView {
    session.on_text_changed(text, char_len(text))
}

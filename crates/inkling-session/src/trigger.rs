//! Trigger detection over the text before the caret.

use inkling_core::catalog::TriggerCatalog;

/// Find the active trigger in `before_caret`: the rightmost occurrence of
/// any catalog trigger character, provided nothing between it and the
/// caret is whitespace.
///
/// Returns `(trigger_char, char_index)`. There is no fallback to an
/// earlier trigger when the rightmost one is disqualified: whitespace
/// after the rightmost trigger also sits after every earlier one, so no
/// earlier trigger could qualify either. A trigger directly before the
/// caret always qualifies, since its query region is empty.
pub(crate) fn find_active_trigger(
    catalog: &TriggerCatalog,
    before_caret: &str,
) -> Option<(char, usize)> {
    let mut found: Option<(char, usize)> = None;
    let mut whitespace_after = false;
    for (index, c) in before_caret.chars().enumerate() {
        if catalog.is_trigger(c) {
            found = Some((c, index));
            whitespace_after = false;
        } else if c.is_whitespace() {
            whitespace_after = true;
        }
    }
    if whitespace_after {
        return None;
    }
    found
}

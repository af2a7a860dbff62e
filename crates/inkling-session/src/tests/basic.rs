use super::*;

// --- Session open/close on text changes ---

#[test]
fn test_no_trigger_stays_closed() {
    let mut session = make_session();
    let view = type_text(&mut session, "plain text");
    assert!(!view.is_open);
    assert!(view.candidates.is_empty());
    assert!(view.ghost_suffix.is_empty());
}

#[test]
fn test_empty_text_stays_closed() {
    let mut session = make_session();
    let view = type_text(&mut session, "");
    assert!(!view.is_open);
}

#[test]
fn test_fresh_trigger_opens_with_full_list() {
    let mut session = make_session();
    let view = type_text(&mut session, "note #");
    assert!(view.is_open);
    assert_eq!(view.candidates, list(&["标题", "重要", "任务", "提醒"]));
    assert_eq!(view.selected_index, 0);
    assert_eq!(session.trigger(), Some('#'));
}

#[test]
fn test_query_filters_candidates() {
    let mut session = make_session();
    let view = type_text(&mut session, "hi @te");
    assert!(view.is_open);
    assert_eq!(view.candidates, list(&["team", "test"]));

    let view = type_text(&mut session, "hi @tea");
    assert_eq!(view.candidates, list(&["team"]));
}

#[test]
fn test_filter_is_case_insensitive() {
    let mut session = make_session();
    let view = type_text(&mut session, "@TE");
    assert!(view.is_open);
    assert_eq!(view.candidates, list(&["team", "test"]));
}

#[test]
fn test_no_match_closes() {
    let mut session = make_session();
    assert!(type_text(&mut session, "@te").is_open);
    let view = type_text(&mut session, "@tez");
    assert!(!view.is_open);
}

#[test]
fn test_space_in_query_region_closes() {
    let mut session = make_session();
    // Caret 16 is one past the end; the engine clamps and still sees the
    // space between "#tag" and "done".
    let view = session.on_text_changed("Hello #tag done", 16);
    assert!(!view.is_open);
}

#[test]
fn test_newline_in_query_region_closes() {
    let mut session = make_session();
    let view = type_text(&mut session, "#标\nmore");
    assert!(!view.is_open);
}

#[test]
fn test_rightmost_trigger_wins() {
    let mut session = make_session();
    let view = type_text(&mut session, "#标@te");
    assert!(view.is_open);
    assert_eq!(view.candidates, list(&["team", "test"]));
}

#[test]
fn test_caret_mid_text_ignores_tail() {
    let mut session = make_session();
    // Caret after "/ti"; the tail would otherwise disqualify the trigger.
    let view = session.on_text_changed("a /ti and more", 5);
    assert!(view.is_open);
    assert_eq!(view.candidates, list(&["time"]));
}

#[test]
fn test_caret_before_trigger_sees_no_trigger() {
    let mut session = make_session();
    let view = session.on_text_changed("ab #x", 2);
    assert!(!view.is_open);
}

#[test]
fn test_idempotent_recompute() {
    let mut session = make_session();
    let first = session.on_text_changed("see #标", 5);
    let second = session.on_text_changed("see #标", 5);
    assert_eq!(first, second);
    assert!(second.is_open);
}

#[test]
fn test_cancel_closes_without_text_change() {
    let mut session = make_session();
    type_text(&mut session, "note #");
    assert!(session.is_open());

    session.on_cancel();
    assert!(!session.is_open());
    assert_eq!(session.text(), "note #");
    assert_eq!(session.caret(), 6);

    // The session stays closed only until the next qualifying text change.
    assert!(type_text(&mut session, "note #标").is_open);
}

#[test]
fn test_escape_key_cancels() {
    let mut session = make_session();
    type_text(&mut session, "note #");
    let resp = session.handle_key(crate::KeyEvent::Escape);
    assert!(resp.consumed);
    assert!(resp.commit.is_none());
    assert!(!resp.view.is_open);
}

#[test]
fn test_keys_pass_through_when_closed() {
    let mut session = make_session();
    type_text(&mut session, "plain");
    for key in [
        crate::KeyEvent::Tab,
        crate::KeyEvent::Enter,
        crate::KeyEvent::ArrowUp,
        crate::KeyEvent::ArrowDown,
        crate::KeyEvent::Escape,
        crate::KeyEvent::Other,
    ] {
        let resp = session.handle_key(key);
        assert!(!resp.consumed);
        assert!(resp.commit.is_none());
    }
}

#[test]
fn test_other_key_not_consumed_while_open() {
    let mut session = make_session();
    type_text(&mut session, "note #");
    let resp = session.handle_key(crate::KeyEvent::Other);
    assert!(!resp.consumed);
    assert!(resp.view.is_open);
}

//! Scripted session replay: feed an event script to a session and print
//! the resulting views and popup anchors, one step per line.
//!
//! Script format, one event per line (`#` starts a comment):
//!
//! ```text
//! text note #       # replace the buffer (\n escapes), caret at the end
//! caret 5           # move the caret (char offset, clamped)
//! key down          # tab | enter | up | down | esc | other
//! click 标题        # commit a candidate by value
//! locate            # print the popup anchor for the current caret
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;
use std::process;
use std::sync::Arc;

use serde::Serialize;

use inkling_core::catalog::{default_toml, TriggerCatalog};
use inkling_core::layout::{locate, HostMetrics, PopupAnchor};
use inkling_core::unicode::char_len;
use inkling_session::{AutocompleteSession, CommitResult, KeyEvent, SessionView};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown event {event:?}")]
    UnknownEvent { line: usize, event: String },
    #[error("line {line}: {reason}")]
    Invalid { line: usize, reason: String },
}

#[derive(Debug, Clone)]
enum Event {
    Text(String),
    Caret(usize),
    Key(KeyEvent),
    Click(String),
    Locate,
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn parse_key(name: &str) -> Option<KeyEvent> {
    match name {
        "tab" => Some(KeyEvent::Tab),
        "enter" => Some(KeyEvent::Enter),
        "up" => Some(KeyEvent::ArrowUp),
        "down" => Some(KeyEvent::ArrowDown),
        "esc" | "escape" => Some(KeyEvent::Escape),
        "other" => Some(KeyEvent::Other),
        _ => None,
    }
}

fn parse_script(input: &str) -> Result<Vec<(usize, Event)>, ScriptError> {
    let mut events = Vec::new();
    for (i, raw) in input.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (word, rest) = match trimmed.split_once(' ') {
            Some((w, r)) => (w, r),
            None => (trimmed, ""),
        };
        let event = match word {
            "text" => Event::Text(unescape(rest)),
            "caret" => {
                let offset = rest.trim().parse().map_err(|_| ScriptError::Invalid {
                    line,
                    reason: format!("caret offset {:?} is not an integer", rest.trim()),
                })?;
                Event::Caret(offset)
            }
            "key" => {
                let name = rest.trim();
                Event::Key(parse_key(name).ok_or_else(|| ScriptError::Invalid {
                    line,
                    reason: format!("unknown key {name:?}"),
                })?)
            }
            "click" => {
                let candidate = rest.trim();
                if candidate.is_empty() {
                    return Err(ScriptError::Invalid {
                        line,
                        reason: "click needs a candidate value".to_string(),
                    });
                }
                Event::Click(candidate.to_string())
            }
            "locate" => Event::Locate,
            other => {
                return Err(ScriptError::UnknownEvent {
                    line,
                    event: other.to_string(),
                })
            }
        };
        events.push((line, event));
    }
    Ok(events)
}

#[derive(Serialize)]
struct StepRecord {
    event: String,
    view: SessionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit: Option<CommitResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchor: Option<PopupAnchor>,
}

fn print_step(step: &StepRecord, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string(step).expect("JSON serialization failed")
        );
        return;
    }

    let view = &step.view;
    let state = if view.is_open {
        format!(
            "open({}) sel={} ghost={:?}",
            view.candidates.len(),
            view.selected_index,
            view.ghost_suffix
        )
    } else {
        "closed".to_string()
    };
    print!("{:<20} {}", step.event, state);
    if let Some(ref commit) = step.commit {
        print!("  commit {:?} caret={}", commit.new_text, commit.new_caret);
    }
    if let Some(anchor) = step.anchor {
        print!("  anchor x={} y={}", anchor.x, anchor.y);
    }
    println!();
}

pub fn simulate(
    script_file: &str,
    catalog_file: Option<&str>,
    json: bool,
    host: HostMetrics,
) {
    let catalog = match catalog_file {
        Some(path) => die!(
            TriggerCatalog::load(Path::new(path)),
            "Error loading catalog: {}"
        ),
        None => die!(
            TriggerCatalog::from_toml_str(default_toml()),
            "Error parsing embedded catalog: {}"
        ),
    };

    let input = if script_file == "-" {
        let mut buf = String::new();
        die!(
            std::io::stdin().read_to_string(&mut buf),
            "Error reading stdin: {}"
        );
        buf
    } else {
        die!(
            fs::read_to_string(script_file),
            "Error reading script: {}"
        )
    };
    let events = die!(parse_script(&input), "Error: {}");

    let mut session = AutocompleteSession::new(Arc::new(catalog));
    // Host-side buffer mirror; commits apply text first, then the caret.
    let mut text = String::new();
    let mut caret = 0usize;

    for (_, event) in events {
        let mut commit = None;
        let mut anchor = None;
        let label;

        match &event {
            Event::Text(new_text) => {
                label = format!("text {new_text:?}");
                text = new_text.clone();
                caret = char_len(&text);
                session.on_text_changed(&text, caret);
            }
            Event::Caret(offset) => {
                label = format!("caret {offset}");
                caret = (*offset).min(char_len(&text));
                session.on_text_changed(&text, caret);
            }
            Event::Key(key) => {
                label = format!("key {key:?}");
                let resp = session.handle_key(*key);
                if let Some(result) = resp.commit {
                    text = result.new_text.clone();
                    caret = result.new_caret;
                    session.on_text_changed(&text, caret);
                    commit = Some(result);
                }
            }
            Event::Click(candidate) => {
                label = format!("click {candidate:?}");
                if let Some(result) = session.on_suggestion_clicked(candidate) {
                    text = result.new_text.clone();
                    caret = result.new_caret;
                    session.on_text_changed(&text, caret);
                    commit = Some(result);
                }
            }
            Event::Locate => {
                label = "locate".to_string();
                anchor = Some(locate(&text, caret, &host));
            }
        }

        let step = StepRecord {
            event: label,
            view: session.view(),
            commit,
            anchor,
        };
        print_step(&step, json);
    }
}

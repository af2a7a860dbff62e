//! Soft-wrap layout of the text before the caret.
//!
//! Reproduces the row structure the host's own renderer would produce:
//! logical lines split at `\n`, each soft-wrapped greedily at word
//! boundaries within the content width, breaking inside a word only when
//! the word alone exceeds a full row. Empty logical lines still occupy one
//! row and measure as a single space, matching the mirror-element trick
//! this algorithm descends from.

use super::TextMeasurer;

/// Result of laying out a text block: the width of the final visual row
/// and the cumulative height of all rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapMeasure {
    pub last_line_width: f32,
    pub total_height: f32,
}

/// Lay out `text` wrapped at `content_width` and measure it.
pub fn measure_wrapped<M: TextMeasurer>(text: &str, content_width: f32, font: &M) -> WrapMeasure {
    let mut rows = 0usize;
    let mut last_width = 0.0f32;
    for line in text.split('\n') {
        let (line_rows, width) = wrap_line(line, content_width, font);
        rows += line_rows;
        last_width = width;
    }
    WrapMeasure {
        last_line_width: last_width,
        total_height: rows as f32 * font.line_height(),
    }
}

/// Wrap one logical line; returns (row count, width of the final row).
fn wrap_line<M: TextMeasurer>(line: &str, max_width: f32, font: &M) -> (usize, f32) {
    if line.is_empty() {
        // An empty line still renders one row; measured as a single space.
        return (1, font.char_width(' '));
    }

    let mut rows = 1usize;
    let mut row_width = 0.0f32;
    for segment in segments(line) {
        let seg_width: f32 = segment.chars().map(|c| font.char_width(c)).sum();
        if row_width + seg_width <= max_width {
            row_width += seg_width;
        } else if seg_width <= max_width {
            rows += 1;
            row_width = seg_width;
        } else {
            // Word wider than a full row: break inside it, char by char.
            for c in segment.chars() {
                let w = font.char_width(c);
                if row_width + w > max_width && row_width > 0.0 {
                    rows += 1;
                    row_width = 0.0;
                }
                row_width += w;
            }
        }
    }
    (rows, row_width)
}

/// Split a line into wrap units: maximal non-space runs, and each space
/// character on its own.
fn segments(line: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = line;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = if rest.starts_with(' ') {
            1
        } else {
            rest.find(' ').unwrap_or(rest.len())
        };
        let (segment, tail) = rest.split_at(end);
        rest = tail;
        Some(segment)
    })
}

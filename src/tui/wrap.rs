//! Word wrapping for styled lines
//!
//! The UI wraps text itself instead of leaving it to `Paragraph`, so the
//! number of rows a block needs is known before it is drawn.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A run of same-kind characters (word or whitespace) across styled spans
struct Chunk {
    pieces: Vec<(String, Style)>,
    width: usize,
    is_space: bool,
}

fn chunks(line: &Line<'_>) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    for span in &line.spans {
        let style = line.style.patch(span.style);
        for ch in span.content.chars() {
            let is_space = ch.is_whitespace();
            let width = ch.width().unwrap_or(0);
            match chunks.last_mut() {
                Some(chunk) if chunk.is_space == is_space => {
                    match chunk.pieces.last_mut() {
                        Some((text, piece_style)) if *piece_style == style => text.push(ch),
                        _ => chunk.pieces.push((ch.to_string(), style)),
                    }
                    chunk.width += width;
                }
                _ => chunks.push(Chunk {
                    pieces: vec![(ch.to_string(), style)],
                    width,
                    is_space,
                }),
            }
        }
    }
    chunks
}

/// Append text to a line under construction, merging with a same-styled tail
fn push_text(spans: &mut Vec<Span<'static>>, text: &str, style: Style) {
    match spans.last_mut() {
        Some(last) if last.style == style => last.content.to_mut().push_str(text),
        _ => spans.push(Span::styled(text.to_string(), style)),
    }
}

/// Wrap one line at word boundaries to at most `width` columns.
///
/// Words wider than the line are broken by character. Whitespace at wrap
/// points is dropped. An empty line stays one empty line.
pub fn wrap_line(line: &Line<'_>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0;
    let mut pending: Vec<(String, Style)> = Vec::new();
    let mut pending_width = 0;

    for chunk in chunks(line) {
        if chunk.is_space {
            pending.extend(chunk.pieces);
            pending_width += chunk.width;
            continue;
        }

        if current_width > 0 && current_width + pending_width + chunk.width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            current_width = 0;
        }
        // leading indentation only survives on the first row
        if current_width == 0 && (!lines.is_empty() || pending_width + chunk.width > width) {
            pending.clear();
            pending_width = 0;
        }
        for (text, style) in pending.drain(..) {
            push_text(&mut current, &text, style);
        }
        current_width += pending_width;
        pending_width = 0;

        if current_width + chunk.width <= width {
            for (text, style) in &chunk.pieces {
                push_text(&mut current, text, *style);
            }
            current_width += chunk.width;
            continue;
        }

        for (text, style) in &chunk.pieces {
            for ch in text.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width > 0 && current_width + ch_width > width {
                    lines.push(Line::from(std::mem::take(&mut current)));
                    current_width = 0;
                }
                push_text(&mut current, ch.encode_utf8(&mut [0; 4]), *style);
                current_width += ch_width;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Wrap every line, keeping blank lines
pub fn wrap_lines(lines: &[Line<'_>], width: usize) -> Vec<Line<'static>> {
    lines.iter().flat_map(|line| wrap_line(line, width)).collect()
}

/// Longest suffix of `text` that fits in `width` columns
pub fn fit_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        start = index;
    }
    &text[start..]
}

/// Display width of a string
pub fn text_width(text: &str) -> usize {
    text.width()
}

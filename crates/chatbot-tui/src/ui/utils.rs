//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap text with an indent prefix on every line.
///
/// Widths are display columns. Breaks at the last space that fits, or
/// mid-word when there is none.
pub fn wrap_text_indented(text: &str, width: usize, indent: &str) -> Vec<String> {
    let effective_width = width.saturating_sub(UnicodeWidthStr::width(indent));

    if effective_width == 0 {
        return vec![format!("{}{}", indent, text)];
    }

    let mut lines = Vec::new();

    for line in text.lines() {
        if line.is_empty() {
            lines.push(indent.to_string());
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        let widths: Vec<usize> = chars
            .iter()
            .map(|ch| UnicodeWidthChar::width(*ch).unwrap_or(1))
            .collect();
        let mut start = 0;

        while start < chars.len() {
            // Longest run from `start` that fits, at least one char
            let mut end = start;
            let mut used = 0;
            while end < chars.len() && (end == start || used + widths[end] <= effective_width) {
                used += widths[end];
                end += 1;
            }

            if end == chars.len() {
                let remaining: String = chars[start..].iter().collect();
                lines.push(format!("{}{}", indent, remaining));
                break;
            }

            let break_at = chars[start..end]
                .iter()
                .rposition(|c| *c == ' ')
                .filter(|offset| *offset > 0)
                .map_or(end, |offset| start + offset);

            let chunk: String = chars[start..break_at].iter().collect();
            lines.push(format!("{}{}", indent, chunk.trim_end()));

            start = break_at;
            while start < chars.len() && chars[start] == ' ' {
                start += 1;
            }
        }
    }

    if lines.is_empty() {
        lines.push(indent.to_string());
    }

    lines
}

/// Truncate from the left so the tail fits, adding an ellipsis if needed.
///
/// Used for file paths, where the end is the informative part.
pub fn truncate_left(text: &str, max_width: usize) -> String {
    let total: usize = text
        .chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(1))
        .sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width < 3 {
        let chars: Vec<char> = text.chars().collect();
        return chars[chars.len().saturating_sub(max_width)..].iter().collect();
    }

    let mut width = 0;
    let mut tail = Vec::new();
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width - 3 {
            break;
        }
        tail.push(ch);
        width += ch_width;
    }

    let mut result = String::from("...");
    result.extend(tail.into_iter().rev());
    result
}

/// Human-readable byte size.
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;

    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    }
}

//! Greedy word packing for the dual-column reading layout.

use alloc::string::String;
use alloc::vec::Vec;

/// Character budget for a line rendered into `available_width` layout
/// units, given an approximate glyph width. Never less than one.
pub fn line_char_budget(available_width: f32, approx_char_width: f32) -> usize {
    if approx_char_width <= 0.0 {
        return 1;
    }
    ((available_width / approx_char_width) as usize).max(1)
}

/// Split `text` on whitespace and greedily pack the words into lines
/// whose joined length (single spaces between words) stays within
/// `max_chars`. A line is flushed when the next word would overflow the
/// budget, and the last partial line is flushed at end of input. A
/// single word longer than the budget gets a line of its own.
pub fn segment_lines(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();

        if current_chars == 0 {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars > max_chars {
            lines.push(core::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        } else {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        }
    }

    if current_chars > 0 {
        lines.push(current);
    }
    lines
}

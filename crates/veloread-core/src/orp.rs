//! Optimal-recognition-point calculation for RSVP word display.

/// Three-part split of a word around its ORP letter.
///
/// `before`, `focus` and `after` are slices of the original word, so
/// `before + focus + after` always reproduces the input exactly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OrpSplit<'a> {
    pub before: &'a str,
    pub focus: &'a str,
    pub after: &'a str,
}

impl OrpSplit<'_> {
    const EMPTY: Self = Self {
        before: "",
        focus: "",
        after: "",
    };
}

/// Characters that count toward ORP placement: ASCII alphanumerics plus
/// the Latin-1 accented letters.
pub fn is_recognition_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || (('\u{00C0}'..='\u{00FF}').contains(&c) && c != '\u{00D7}' && c != '\u{00F7}')
}

/// ORP character index into the original word.
///
/// The index is computed from the word with non-recognition characters
/// stripped (`len <= 1` fixates the first character, even lengths
/// fixate `len/2 - 1`, odd lengths `len/2`) but is applied to the raw
/// character offsets, so punctuation-bearing words still split at the
/// same position they are displayed at.
pub fn orp_index(word: &str) -> usize {
    let len = word.chars().filter(|&c| is_recognition_char(c)).count();

    if len <= 1 {
        0
    } else if len % 2 == 0 {
        len / 2 - 1
    } else {
        len / 2
    }
}

/// Split `word` around its ORP letter. Total: the empty word yields
/// three empty parts and every other input keeps its focus in bounds
/// because the cleaned length never exceeds the raw character count.
pub fn orp_split(word: &str) -> OrpSplit<'_> {
    if word.is_empty() {
        return OrpSplit::EMPTY;
    }

    let index = orp_index(word);
    let Some((start, c)) = word.char_indices().nth(index) else {
        return OrpSplit {
            before: word,
            focus: "",
            after: "",
        };
    };
    let end = start + c.len_utf8();

    OrpSplit {
        before: &word[..start],
        focus: &word[start..end],
        after: &word[end..],
    }
}

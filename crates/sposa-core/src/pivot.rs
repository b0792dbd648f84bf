//! Optimal recognition point (ORP) lookup.

use crate::content::Word;

const PIVOT_NUMERATOR: usize = 35;
const PIVOT_DENOMINATOR: usize = 100;

/// Char offset of the fixation point: `ceil(core_len * 0.35)`, clamped to
/// the core of the word. Trailing punctuation never shifts the pivot.
pub fn pivot_index(word: &Word) -> usize {
    pivot_for_len(word.core_len())
}

pub fn pivot_for_len(core_len: usize) -> usize {
    if core_len <= 1 {
        return 0;
    }

    (core_len * PIVOT_NUMERATOR)
        .div_ceil(PIVOT_DENOMINATOR)
        .min(core_len - 1)
}

/// Split `text` around the char at `pivot` as `(before, pivot_char, after)`.
///
/// Returns `None` when `text` has no char at that offset.
pub fn split_at_pivot(text: &str, pivot: usize) -> Option<(&str, char, &str)> {
    let (start, ch) = text.char_indices().nth(pivot)?;
    let end = start + ch.len_utf8();
    Some((&text[..start], ch, &text[end..]))
}

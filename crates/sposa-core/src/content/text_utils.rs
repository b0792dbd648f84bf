use super::Punctuation;

/// Closing quotes and brackets that may trail a terminator, as in `end."`.
const TRAILING_CLOSERS: &[char] = &['"', '\'', '\u{201D}', '\u{2019}', '\u{00BB}', ')', ']', '}'];

pub(super) fn next_word_at(text: &str, mut cursor: usize) -> Option<(&str, usize)> {
    let len = text.len();

    while let Some(ch) = text[cursor..].chars().next() {
        if !ch.is_whitespace() {
            break;
        }
        cursor += ch.len_utf8();
    }
    if cursor >= len {
        return None;
    }

    let start = cursor;
    while let Some(ch) = text[cursor..].chars().next() {
        if ch.is_whitespace() {
            break;
        }
        cursor += ch.len_utf8();
    }

    Some((&text[start..cursor], cursor))
}

pub(super) fn count_words(text: &str) -> usize {
    let mut count = 0usize;
    let mut cursor = 0usize;

    while let Some((_, next_cursor)) = next_word_at(text, cursor) {
        count += 1;
        cursor = next_cursor;
    }

    count
}

/// Classify the terminator of `word`, looking through trailing closers.
pub(super) fn classify_trailing(word: &str) -> Punctuation {
    let Some(last) = word.trim_end_matches(TRAILING_CLOSERS).chars().next_back() else {
        return Punctuation::None;
    };

    match last {
        '.' | '!' | '?' => Punctuation::Hard,
        ',' | ';' | ':' => Punctuation::Soft,
        _ => Punctuation::None,
    }
}

/// Length in chars of `word` once trailing terminators and closers are removed.
pub(super) fn core_char_len(word: &str) -> usize {
    word.trim_end_matches(|c: char| TRAILING_CLOSERS.contains(&c) || is_terminator(c))
        .chars()
        .count()
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{2026}' | ',' | ';' | ':')
}

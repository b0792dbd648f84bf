//! Tokenized documents for RSVP playback.

mod text_utils;

use log::debug;

/// Trailing terminator class of a word.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Punctuation {
    #[default]
    None,
    /// `,` `;` `:`
    Soft,
    /// `.` `!` `?`
    Hard,
}

/// One word token. Attached punctuation is kept in `text`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Word {
    text: String,
    punctuation: Punctuation,
    char_len: usize,
    core_len: usize,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let punctuation = text_utils::classify_trailing(&text);
        let char_len = text.chars().count();
        let core_len = text_utils::core_char_len(&text);
        Self {
            text,
            punctuation,
            char_len,
            core_len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn punctuation(&self) -> Punctuation {
        self.punctuation
    }

    /// Length in chars, punctuation included.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Length in chars without trailing terminators and closing quotes.
    pub fn core_len(&self) -> usize {
        self.core_len
    }

    pub fn ends_sentence(&self) -> bool {
        self.punctuation == Punctuation::Hard
    }

    pub fn ends_clause(&self) -> bool {
        self.punctuation == Punctuation::Soft
    }
}

/// Immutable word sequence plus the indices of sentence-ending words.
///
/// `sentence_ends` is strictly increasing and, for a non-empty document,
/// always ends with `len() - 1`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Document {
    words: Vec<Word>,
    sentence_ends: Vec<usize>,
}

impl Document {
    /// Split `text` on whitespace runs and record sentence boundaries.
    pub fn tokenize(text: &str) -> Self {
        let mut words = Vec::with_capacity(text_utils::count_words(text));
        let mut cursor = 0usize;

        while let Some((word, next_cursor)) = text_utils::next_word_at(text, cursor) {
            words.push(Word::new(word));
            cursor = next_cursor;
        }

        let document = Self::from_words(words);
        debug!(
            "content: tokenized words={} sentences={}",
            document.len(),
            document.sentence_ends.len()
        );
        document
    }

    pub fn from_words(words: Vec<Word>) -> Self {
        let mut sentence_ends: Vec<usize> = words
            .iter()
            .enumerate()
            .filter(|(_, word)| word.ends_sentence())
            .map(|(index, _)| index)
            .collect();

        if let Some(last) = words.len().checked_sub(1)
            && sentence_ends.last() != Some(&last)
        {
            sentence_ends.push(last);
        }

        Self {
            words,
            sentence_ends,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Indices of words that end a sentence.
    pub fn sentence_ends(&self) -> &[usize] {
        &self.sentence_ends
    }

    /// First sentence start strictly after `position`, or `len()`.
    pub fn next_sentence_start(&self, position: usize) -> usize {
        // A start `s = end + 1` is beyond `position` exactly when `end >= position`.
        let idx = self.sentence_ends.partition_point(|&end| end < position);
        self.sentence_ends
            .get(idx)
            .map_or(self.len(), |&end| end + 1)
            .min(self.len())
    }

    /// Last sentence start strictly before `position`, or `0`.
    pub fn previous_sentence_start(&self, position: usize) -> usize {
        if position == 0 {
            return 0;
        }

        // Starts below `position` come from ends `< position - 1`.
        let idx = self
            .sentence_ends
            .partition_point(|&end| end + 1 < position);
        idx.checked_sub(1)
            .and_then(|i| self.sentence_ends.get(i))
            .map_or(0, |&end| end + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(document: &Document) -> Vec<&str> {
        document.words().iter().map(Word::text).collect()
    }

    #[test]
    fn splits_on_whitespace_runs_and_keeps_punctuation() {
        let document = Document::tokenize("  Hello,   world!\tHow\r\nare you?  ");
        assert_eq!(texts(&document), ["Hello,", "world!", "How", "are", "you?"]);
    }

    #[test]
    fn empty_and_blank_input_yield_empty_document() {
        for text in ["", "   \n\t  \n  "] {
            let document = Document::tokenize(text);
            assert!(document.is_empty());
            assert!(document.sentence_ends().is_empty());
        }
    }

    #[test]
    fn records_hard_terminators_as_sentence_ends() {
        let document = Document::tokenize("Hello, world. Next sentence.");
        assert_eq!(document.sentence_ends(), &[1, 3]);
    }

    #[test]
    fn last_word_is_always_a_sentence_end() {
        let document = Document::tokenize("no punctuation here");
        assert_eq!(document.sentence_ends(), &[2]);
    }

    #[test]
    fn stacked_terminators_and_quotes_count_once() {
        let document = Document::tokenize("Really?!\" she said... \"Yes.\" ok");
        assert_eq!(document.sentence_ends(), &[0, 2, 3, 4]);
        assert_eq!(document.word(0).map(Word::punctuation), Some(Punctuation::Hard));
        assert_eq!(document.word(0).map(Word::core_len), Some(6));
    }

    #[test]
    fn ellipsis_is_not_a_sentence_end() {
        let document = Document::tokenize("wait\u{2026} then go");
        assert_eq!(document.sentence_ends(), &[2]);
        assert_eq!(document.word(0).map(Word::punctuation), Some(Punctuation::None));
        assert_eq!(document.word(0).map(Word::core_len), Some(4));
    }

    #[test]
    fn classifies_soft_terminators() {
        for text in ["one,", "two;", "three:"] {
            let word = Word::new(text);
            assert_eq!(word.punctuation(), Punctuation::Soft);
            assert!(word.ends_clause());
        }
        assert_eq!(Word::new("plain").punctuation(), Punctuation::None);
    }

    #[test]
    fn unicode_words_are_preserved() {
        let document = Document::tokenize("café résumé naïve");
        assert_eq!(texts(&document), ["café", "résumé", "naïve"]);
        assert_eq!(document.word(1).map(Word::char_len), Some(6));
    }

    #[test]
    fn sentence_starts_follow_boundaries() {
        let document = Document::tokenize("Hello, world. Next sentence.");
        assert_eq!(document.next_sentence_start(0), 2);
        assert_eq!(document.next_sentence_start(2), 4);
        assert_eq!(document.next_sentence_start(4), 4);
        assert_eq!(document.previous_sentence_start(4), 2);
        assert_eq!(document.previous_sentence_start(3), 2);
        assert_eq!(document.previous_sentence_start(2), 0);
        assert_eq!(document.previous_sentence_start(0), 0);
    }
}

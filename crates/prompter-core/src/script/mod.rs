//! Whitespace tokenizer producing the words shown by the prompter.

mod text_utils;

use core::iter::FusedIterator;

use text_utils::{count_words, first_words_excerpt, next_word_at};

/// Immutable word view over the operator's script text.
///
/// The word count is computed once on construction; iteration re-scans the
/// borrowed source lazily and can be restarted any number of times.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Script<'a> {
    source: &'a str,
    word_count: usize,
}

impl<'a> Script<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            word_count: count_words(source),
        }
    }

    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Index of the final word, `None` for an empty script.
    pub const fn last_index(&self) -> Option<usize> {
        self.word_count.checked_sub(1)
    }

    pub fn words(&self) -> Words<'a> {
        Words {
            source: self.source,
            cursor: 0,
        }
    }

    pub fn word_at(&self, index: usize) -> Option<&'a str> {
        if index >= self.word_count {
            return None;
        }
        self.words().nth(index)
    }

    /// Leading words of the script, for log lines and previews.
    pub fn excerpt(&self, max_words: usize) -> &'a str {
        first_words_excerpt(self.source, max_words)
    }
}

impl Default for Script<'_> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<'a> IntoIterator for Script<'a> {
    type Item = &'a str;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}

/// Lazy iterator over the words of a [`Script`].
#[derive(Clone, Debug)]
pub struct Words<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (word, next_cursor) = next_word_at(self.source, self.cursor)?;
        self.cursor = next_cursor;
        Some(word)
    }
}

impl FusedIterator for Words<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace_run() {
        let script = Script::new("  one\ttwo \n\n three  ");
        let words: Vec<&str> = script.words().collect();
        assert_eq!(words, ["one", "two", "three"]);
        assert_eq!(script.word_count(), 3);
        assert_eq!(script.last_index(), Some(2));
    }

    #[test]
    fn blank_input_has_no_words() {
        for text in ["", "   ", "\n\t \r\n"] {
            let script = Script::new(text);
            assert!(script.is_empty());
            assert_eq!(script.last_index(), None);
            assert_eq!(script.words().next(), None);
        }
    }

    #[test]
    fn unicode_whitespace_separates_words() {
        let script = Script::new("hola\u{00A0}mundo\u{2003}¿qué tal?");
        let words: Vec<&str> = script.words().collect();
        assert_eq!(words, ["hola", "mundo", "¿qué", "tal?"]);
    }

    #[test]
    fn iteration_is_restartable() {
        let script = Script::new("alpha beta");
        let first: Vec<&str> = script.words().collect();
        let second: Vec<&str> = script.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(script.word_at(1), Some("beta"));
        assert_eq!(script.word_at(2), None);
    }

    #[test]
    fn excerpt_stops_after_requested_words() {
        let script = Script::new("  Four score and seven years ago");
        assert_eq!(script.excerpt(3), "Four score and");
        assert_eq!(script.excerpt(10), "Four score and seven years ago");
        assert_eq!(script.excerpt(0), "");
    }
}

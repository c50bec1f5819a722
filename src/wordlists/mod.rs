//! Word lists
//!
//! A small embedded vocabulary for the CLI and tests, plus file loading for
//! real vocabularies. Which words are legal is the caller's business; these
//! helpers only check word syntax.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::vocabulary::CandidateIndex;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid_five_letter_words() {
        for word in WORDS {
            let parsed = Word::new(*word).unwrap();
            assert_eq!(parsed.len(), 5, "{word}");
        }
    }

    #[test]
    fn embedded_words_are_distinct() {
        let index = CandidateIndex::from_strs(WORDS).unwrap();
        assert_eq!(index.len(), WORDS_COUNT);
    }
}

//! Dense word ids
//!
//! Ids are assigned in vocabulary order when the index is built and never
//! change afterwards; matrices and word sets rely on that.

use crate::core::{MAX_WORD_LEN, Word};
use crate::error::WordleError;
use log::{debug, warn};
use rustc_hash::FxHashMap;

/// Dense identifier of a vocabulary word, in `0..N`
pub type WordId = u32;

/// Bidirectional mapping between vocabulary words and dense ids
#[derive(Debug, Clone)]
pub struct CandidateIndex {
    words: Vec<Word>,
    ids: FxHashMap<String, WordId>,
    word_len: usize,
}

impl CandidateIndex {
    /// Build an index over a vocabulary
    ///
    /// Ids follow the order of `words`. A repeated word keeps the id of its
    /// first occurrence. The vocabulary word length is the most common word
    /// length, ties going to the length seen first; words of other lengths are
    /// kept, logged, and fail later, per cell, when the matrix is built.
    ///
    /// # Errors
    /// Returns [`WordleError::EmptyVocabulary`] if `words` yields nothing.
    pub fn new<I>(words: I) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = Word>,
    {
        let mut index = Self {
            words: Vec::new(),
            ids: FxHashMap::default(),
            word_len: 0,
        };

        for word in words {
            if index.ids.contains_key(word.text()) {
                debug!("Skipping duplicate vocabulary word '{word}'");
                continue;
            }
            let id = index.words.len() as WordId;
            index.ids.insert(word.text().to_string(), id);
            index.words.push(word);
        }

        index.word_len = majority_len(&index.words).ok_or(WordleError::EmptyVocabulary)?;

        let outliers = index.words.iter().filter(|w| w.len() != index.word_len);
        for word in outliers {
            warn!(
                "Vocabulary word '{word}' has length {}, expected {}",
                word.len(),
                index.word_len
            );
        }

        Ok(index)
    }

    /// Build an index from raw strings
    ///
    /// # Errors
    /// Returns [`WordleError::InvalidWord`] for the first string that is not a
    /// valid word, or [`WordleError::EmptyVocabulary`] for an empty slice.
    ///
    /// # Examples
    /// ```
    /// use wordle_matrix::vocabulary::CandidateIndex;
    ///
    /// let index = CandidateIndex::from_strs(&["slate", "crane", "trace"]).unwrap();
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.id_of("CRANE"), Some(1));
    /// assert_eq!(index.word_of(2).unwrap().text(), "trace");
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self, WordleError> {
        let words = words
            .iter()
            .map(|&w| Word::new(w))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// Id of a word, or `None` if it is not in the vocabulary
    ///
    /// Lookup is case-insensitive.
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.ids.get(&word.to_ascii_lowercase()).copied()
        } else {
            self.ids.get(word).copied()
        }
    }

    /// Id of a word, with an explicit error for words outside the vocabulary
    ///
    /// # Errors
    /// Returns [`WordleError::UnknownWord`] if the word is not indexed.
    pub fn resolve(&self, word: &str) -> Result<WordId, WordleError> {
        self.id_of(word)
            .ok_or_else(|| WordleError::UnknownWord(word.to_string()))
    }

    /// Word with a given id, or `None` if the id is out of range
    #[inline]
    #[must_use]
    pub fn word_of(&self, id: WordId) -> Option<&Word> {
        self.words.get(id as usize)
    }

    /// Number of indexed words (N)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty vocabularies
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Vocabulary word length (L)
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// All words in id order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterate `(id, word)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words
            .iter()
            .enumerate()
            .map(|(id, word)| (id as WordId, word))
    }
}

/// Most common length, ties broken by first appearance
fn majority_len(words: &[Word]) -> Option<usize> {
    let mut counts = [0usize; MAX_WORD_LEN + 1];
    for word in words {
        counts[word.len()] += 1;
    }

    let mut best: Option<usize> = None;
    for word in words {
        let len = word.len();
        if best.is_none_or(|b| counts[len] > counts[b]) {
            best = Some(len);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_vocabulary_order() {
        let index = CandidateIndex::from_strs(&["slate", "crane", "trace"]).unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.word_len(), 5);
        for (id, word) in index.iter() {
            assert_eq!(index.id_of(word.text()), Some(id));
            assert_eq!(index.word_of(id), Some(word));
        }
    }

    #[test]
    fn unknown_words_and_ids() {
        let index = CandidateIndex::from_strs(&["slate", "crane"]).unwrap();

        assert_eq!(index.id_of("zzzzz"), None);
        assert_eq!(index.word_of(2), None);
        assert!(matches!(
            index.resolve("zzzzz"),
            Err(WordleError::UnknownWord(w)) if w == "zzzzz"
        ));
        assert_eq!(index.resolve("Slate"), Ok(0));
    }

    #[test]
    fn duplicates_keep_first_id() {
        let index = CandidateIndex::from_strs(&["slate", "crane", "SLATE", "trace"]).unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.id_of("slate"), Some(0));
        assert_eq!(index.id_of("trace"), Some(2));
    }

    #[test]
    fn word_len_is_the_majority_length() {
        let index = CandidateIndex::from_strs(&["cat", "slate", "crane", "trace"]).unwrap();
        assert_eq!(index.word_len(), 5);
        assert_eq!(index.id_of("cat"), Some(0));

        let tied = CandidateIndex::from_strs(&["cat", "slate", "dog", "crane"]).unwrap();
        assert_eq!(tied.word_len(), 3);
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        assert!(matches!(
            CandidateIndex::from_strs(&[]),
            Err(WordleError::EmptyVocabulary)
        ));
    }

    #[test]
    fn invalid_word_is_rejected() {
        assert!(matches!(
            CandidateIndex::from_strs(&["slate", "sl4te"]),
            Err(WordleError::InvalidWord(_))
        ));
    }
}

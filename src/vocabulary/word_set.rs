//! Sorted id sets for candidates and targets
//!
//! A set is a sorted, duplicate-free array of [`WordId`]s. Every operation that
//! narrows a set returns a new one; the receiver is never modified, so a set
//! can be shared freely and earlier turns stay available for undo.

use super::index::{CandidateIndex, WordId};
use crate::core::PatternCode;
use crate::error::WordleError;
use crate::matrix::PatternMatrix;
use log::debug;

/// Immutable sorted set of word ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CompactWordSet {
    ids: Box<[WordId]>,
}

impl CompactWordSet {
    /// Every id in `0..n`
    #[must_use]
    pub fn all(n: usize) -> Self {
        Self {
            ids: (0..n as WordId).collect(),
        }
    }

    /// The empty set
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from arbitrary ids, sorting and dropping duplicates
    #[must_use]
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = WordId>,
    {
        let mut ids: Vec<WordId> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self {
            ids: ids.into_boxed_slice(),
        }
    }

    /// Build from words, skipping any the index does not know
    pub fn from_words<'w, I>(words: I, index: &CandidateIndex) -> Self
    where
        I: IntoIterator<Item = &'w str>,
    {
        Self::from_ids(words.into_iter().filter_map(|word| {
            let id = index.id_of(word);
            if id.is_none() {
                debug!("Ignoring '{word}': not in the vocabulary");
            }
            id
        }))
    }

    /// Build from words, failing on the first one the index does not know
    ///
    /// # Errors
    /// Returns [`WordleError::UnknownWord`] naming the unresolved word.
    pub fn try_from_words<'w, I>(words: I, index: &CandidateIndex) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let ids = words
            .into_iter()
            .map(|word| index.resolve(word))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_ids(ids))
    }

    /// Ids satisfying `predicate`, as a new set
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(WordId) -> bool,
    {
        Self {
            ids: self.ids.iter().copied().filter(|&id| predicate(id)).collect(),
        }
    }

    /// Targets that would have produced `observed` when `guess` was played
    ///
    /// An unknown guess id matches nothing, and target ids outside the matrix
    /// are dropped.
    ///
    /// # Examples
    /// ```
    /// use wordle_matrix::core::Pattern;
    /// use wordle_matrix::matrix::PatternMatrix;
    /// use wordle_matrix::vocabulary::{CandidateIndex, CompactWordSet};
    ///
    /// let index = CandidateIndex::from_strs(&["steel", "stale", "slate"]).unwrap();
    /// let matrix = PatternMatrix::build_sequential(index);
    /// let targets = CompactWordSet::all(matrix.len());
    ///
    /// let observed = "GGAXA".parse::<Pattern>().unwrap().encode();
    /// let next = targets.filter_by_pattern(&matrix, 0, observed);
    ///
    /// assert_eq!(next.as_slice(), &[1]);
    /// assert_eq!(targets.len(), 3); // unchanged
    /// ```
    #[must_use]
    pub fn filter_by_pattern(
        &self,
        matrix: &PatternMatrix,
        guess: WordId,
        observed: PatternCode,
    ) -> Self {
        let Some(row) = matrix.row(guess) else {
            debug!("Guess id {guess} is not in the matrix; no target is consistent");
            return Self::empty();
        };

        self.filter(|target| row.get(target as usize) == Some(&observed))
    }

    /// Ids present in both sets
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.filter(|id| other.contains(id))
    }

    /// Membership test by binary search
    #[inline]
    #[must_use]
    pub fn contains(&self, id: WordId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = WordId> + '_ {
        self.ids.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[WordId] {
        &self.ids
    }

    /// Words of this set, in id order, skipping ids the index does not know
    pub fn words<'a>(&'a self, index: &'a CandidateIndex) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .filter_map(|id| index.word_of(id).map(crate::core::Word::text))
    }
}

impl FromIterator<WordId> for CompactWordSet {
    fn from_iter<I: IntoIterator<Item = WordId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}

impl<'a> IntoIterator for &'a CompactWordSet {
    type Item = WordId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, WordId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter().copied()
    }
}

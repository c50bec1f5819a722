//! Feedback patterns and their compact integer codes
//!
//! A [`Pattern`] is the per-position feedback for one guess/target pair. A
//! [`PatternCode`] packs it into two bits per position, position 0 in the
//! low-order bits:
//! - 0 = Green
//! - 1 = Amber
//! - 2 = Red
//! - 3 = Excess
//!
//! Codes for words of length `L` lie in `[0, 4^L)`. This bit layout is the
//! interchange format for stored matrices and must not change.

use super::feedback::Feedback;
use super::word::MAX_WORD_LEN;
use crate::error::WordleError;
use std::fmt;

/// Feedback for every position of a guess
///
/// Holds up to [`MAX_WORD_LEN`] marks inline so evaluation never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    marks: [Feedback; MAX_WORD_LEN],
    len: u8,
}

impl Pattern {
    /// Create a pattern from explicit marks
    ///
    /// Returns `None` for an empty slice or one longer than [`MAX_WORD_LEN`].
    #[must_use]
    pub fn new(marks: &[Feedback]) -> Option<Self> {
        if marks.is_empty() || marks.len() > MAX_WORD_LEN {
            return None;
        }
        let mut pattern = Self::filled(marks.len(), Feedback::Green);
        pattern.marks[..marks.len()].copy_from_slice(marks);
        Some(pattern)
    }

    /// A pattern of `len` identical marks
    pub(crate) const fn filled(len: usize, mark: Feedback) -> Self {
        debug_assert!(len <= MAX_WORD_LEN);
        let mut marks = [Feedback::Green; MAX_WORD_LEN];
        let mut i = 0;
        while i < len {
            marks[i] = mark;
            i += 1;
        }
        Self {
            marks,
            len: len as u8,
        }
    }

    /// The all-Green pattern of a given length
    #[must_use]
    pub const fn perfect(len: usize) -> Self {
        Self::filled(len, Feedback::Green)
    }

    #[inline]
    pub(crate) fn set(&mut self, position: usize, mark: Feedback) {
        debug_assert!(position < self.len());
        self.marks[position] = mark;
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// True only for a zero-length pattern, which [`Pattern::new`] never builds
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The marks, one per position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Feedback] {
        &self.marks[..self.len()]
    }

    /// Mark at `position`, if in range
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Feedback> {
        self.marks().get(position).copied()
    }

    /// Check if every position is Green
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.marks().iter().all(|&m| m == Feedback::Green)
    }

    /// Count positions carrying a given mark
    #[must_use]
    pub fn count(&self, mark: Feedback) -> usize {
        self.marks().iter().filter(|&&m| m == mark).count()
    }

    /// Pack into the two-bits-per-position code
    ///
    /// # Examples
    /// ```
    /// use wordle_matrix::core::{Feedback, Pattern};
    ///
    /// let pattern: Pattern = "GGAXA".parse().unwrap();
    /// // G=0, G=0, A=1, X=3, A=1 from the low bits upward
    /// assert_eq!(pattern.encode().value(), (1 << 4) | (3 << 6) | (1 << 8));
    /// assert_eq!(pattern.encode().decode(5), pattern);
    /// ```
    #[must_use]
    pub fn encode(&self) -> PatternCode {
        let code = self
            .marks()
            .iter()
            .enumerate()
            .fold(0u16, |acc, (i, mark)| acc | (mark.bits() << (2 * i)));
        PatternCode(code)
    }

    /// Convert pattern to emoji string
    ///
    /// Excess renders like Red, which is how players see it.
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks().iter().map(|m| m.to_emoji()).collect()
    }

    /// Parse a pattern from a string like "GGAXA" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns [`WordleError::InvalidPattern`] for an empty string, one longer
    /// than [`MAX_WORD_LEN`], or any unrecognised character.
    pub fn parse(s: &str) -> Result<Self, WordleError> {
        let marks = s
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| WordleError::InvalidPattern(s.to_string()))?;

        Self::new(&marks).ok_or_else(|| WordleError::InvalidPattern(s.to_string()))
    }
}

impl std::str::FromStr for Pattern {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

/// Compact integer form of a [`Pattern`]
///
/// This is what the pattern matrix stores, two bytes per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct PatternCode(u16);

impl PatternCode {
    /// All Green, for any word length
    pub const PERFECT: Self = Self(0);

    /// Wrap a raw code value
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Raw code value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Code as an array index into a `4^L` bucket table
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Number of distinct codes for words of length `len` (`4^len`)
    #[inline]
    #[must_use]
    pub const fn space(len: usize) -> usize {
        1 << (2 * len)
    }

    /// Check the code lies in `[0, 4^len)`
    #[must_use]
    pub const fn is_valid_for(self, len: usize) -> bool {
        len <= MAX_WORD_LEN && self.index() < Self::space(len)
    }

    /// All Red of a given length; the fallback for cells that fail to evaluate
    #[must_use]
    pub fn all_red(len: usize) -> Self {
        Pattern::filled(len, Feedback::Red).encode()
    }

    /// Unpack into a pattern of `len` positions
    ///
    /// # Panics
    /// Panics in debug mode if the code has bits set beyond position `len`.
    #[must_use]
    pub fn decode(self, len: usize) -> Pattern {
        debug_assert!(self.is_valid_for(len), "code {} out of range", self.0);
        let mut pattern = Pattern::perfect(len);
        for i in 0..len {
            pattern.set(i, Feedback::from_bits(self.0 >> (2 * i)));
        }
        pattern
    }
}

impl From<Pattern> for PatternCode {
    fn from(pattern: Pattern) -> Self {
        pattern.encode()
    }
}

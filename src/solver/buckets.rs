//! Pattern buckets
//!
//! For a fixed guess, targets are grouped by the code they produce. Bucket
//! sizes drive every metric; the per-position letter masks drive column length.

use crate::core::{MAX_WORD_LEN, PatternCode, Word, letter_index};
use crate::vocabulary::CompactWordSet;

const UNTOUCHED: u32 = u32::MAX;

/// One group of targets sharing a pattern against the guess
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bucket {
    pub(crate) code: PatternCode,
    pub(crate) count: usize,
    /// Bit `c` of `letters[p]` is set when some target in the bucket has
    /// letter `c` at position `p`
    letters: [u32; MAX_WORD_LEN],
}

impl Bucket {
    /// Product over positions of the number of distinct letters seen there
    fn column_length(&self, word_len: usize) -> f64 {
        self.letters[..word_len]
            .iter()
            .map(|mask| f64::from(mask.count_ones()))
            .product()
    }
}

/// Reusable scratch space for grouping targets by pattern
///
/// Holds a `4^L` slot table so grouping never hashes; only the touched slots
/// are reset between guesses. One tally per thread.
#[derive(Debug, Clone)]
pub(crate) struct BucketTally {
    slot_of: Vec<u32>,
    buckets: Vec<Bucket>,
    word_len: usize,
    total: usize,
    skipped: usize,
}

impl BucketTally {
    pub(crate) fn new(word_len: usize) -> Self {
        Self {
            slot_of: vec![UNTOUCHED; PatternCode::space(word_len)],
            buckets: Vec::new(),
            word_len,
            total: 0,
            skipped: 0,
        }
    }

    /// Group `targets` by their code in `row`
    ///
    /// Targets outside `row` are ignored. Targets whose code is too long for
    /// the vocabulary word length are not counted in any bucket and are
    /// reported by [`BucketTally::skipped`]. When `words` is given,
    /// per-position letter masks are collected for column length.
    pub(crate) fn tally(
        &mut self,
        row: &[PatternCode],
        targets: &CompactWordSet,
        words: Option<&[Word]>,
    ) -> usize {
        self.reset();

        for target in targets {
            let Some(&code) = row.get(target as usize) else {
                continue;
            };
            let slot = match self.slot_of.get(code.index()).copied() {
                Some(UNTOUCHED) => {
                    let slot = self.buckets.len();
                    self.slot_of[code.index()] = slot as u32;
                    self.buckets.push(Bucket {
                        code,
                        count: 0,
                        letters: [0; MAX_WORD_LEN],
                    });
                    slot
                }
                Some(slot) => slot as usize,
                // Only pairs of words longer than the vocabulary's get here
                None => {
                    self.skipped += 1;
                    continue;
                }
            };

            let bucket = &mut self.buckets[slot];
            bucket.count += 1;
            if let Some(word) = words.and_then(|words| words.get(target as usize)) {
                for (mask, &letter) in bucket.letters.iter_mut().zip(word.letters()) {
                    *mask |= 1u32 << letter_index(letter);
                }
            }
            self.total += 1;
        }

        self.total
    }

    fn reset(&mut self) {
        for bucket in self.buckets.drain(..) {
            self.slot_of[bucket.code.index()] = UNTOUCHED;
        }
        self.total = 0;
        self.skipped = 0;
    }

    /// Targets counted by the last tally
    pub(crate) const fn total(&self) -> usize {
        self.total
    }

    /// Targets the last tally could not place in a bucket
    pub(crate) const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Buckets from the last tally, in first-seen order
    pub(crate) fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub(crate) fn entropy(&self) -> f64 {
        shannon_entropy(self.buckets.iter().map(|b| b.count), self.total)
    }

    pub(crate) fn expected_remaining(&self) -> f64 {
        expected_remaining(self.buckets.iter().map(|b| b.count), self.total)
    }

    /// Probability-weighted column length; needs letter masks from `tally`
    pub(crate) fn column_length(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.buckets
            .iter()
            .map(|b| b.count as f64 / total * b.column_length(self.word_len))
            .sum()
    }

    pub(crate) fn max_bucket(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Shannon entropy in bits of a bucket-size distribution
///
/// H = -Σ p · log₂(p), with p = count / total
///
/// # Properties
/// - Returns 0.0 for a single bucket or no targets
/// - Equals log₂(total) when every bucket holds one target
///
/// # Examples
/// ```
/// use wordle_matrix::solver::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25], 100);
/// assert!((entropy - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn shannon_entropy<I>(counts: I, total: usize) -> f64
where
    I: IntoIterator<Item = usize>,
{
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    let entropy: f64 = counts
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    entropy.max(0.0)
}

/// Expected surviving targets: Σ count² / total
///
/// # Examples
/// ```
/// use wordle_matrix::solver::expected_remaining;
///
/// assert_eq!(expected_remaining([1, 1, 1], 3), 1.0);
/// assert_eq!(expected_remaining([3], 3), 3.0);
/// ```
#[must_use]
pub fn expected_remaining<I>(counts: I, total: usize) -> f64
where
    I: IntoIterator<Item = usize>,
{
    if total == 0 {
        return 0.0;
    }
    let squares: usize = counts.into_iter().map(|count| count * count).sum();
    squares as f64 / total as f64
}

/// Bucket sizes for one guess against one target set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketDistribution {
    buckets: Vec<(PatternCode, usize)>,
    total: usize,
    skipped: usize,
}

impl BucketDistribution {
    pub(crate) fn from_tally(tally: &BucketTally) -> Self {
        Self {
            buckets: tally.buckets().iter().map(|b| (b.code, b.count)).collect(),
            total: tally.total(),
            skipped: tally.skipped(),
        }
    }

    /// Non-empty buckets as `(code, count)`, in first-seen target order
    #[must_use]
    pub fn buckets(&self) -> &[(PatternCode, usize)] {
        &self.buckets
    }

    /// Number of targets counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Targets left out because their code does not fit the word length
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of distinct patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Targets producing `code`
    #[must_use]
    pub fn count(&self, code: PatternCode) -> usize {
        self.buckets
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(0, |&(_, count)| count)
    }

    /// Largest bucket (worst-case survivors)
    #[must_use]
    pub fn max_bucket(&self) -> usize {
        self.buckets.iter().map(|&(_, count)| count).max().unwrap_or(0)
    }

    #[must_use]
    pub fn entropy(&self) -> f64 {
        shannon_entropy(self.buckets.iter().map(|&(_, count)| count), self.total)
    }

    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        expected_remaining(self.buckets.iter().map(|&(_, count)| count), self.total)
    }
}

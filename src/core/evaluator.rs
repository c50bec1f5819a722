//! Feedback evaluation
//!
//! Pure function from a guess and a target to the feedback pattern. It holds
//! no state between calls, so any number of threads may call it at once.

use super::feedback::Feedback;
use super::pattern::Pattern;
use super::word::{ALPHABET_SIZE, Word, letter_index};
use crate::error::WordleError;

/// Calculate the pattern when `guess` is guessed and `target` is the answer
///
/// # Algorithm
/// 1. Green pass: exact position matches are Green and consume one
///    occurrence of their letter from the target.
/// 2. Left-to-right pass over the remaining positions: a letter with an
///    unconsumed target occurrence is Amber and consumes it; a letter the
///    target contains but has run out of is Excess; anything else is Red.
///
/// Earlier repeats of a guess letter therefore take Amber before later ones.
///
/// # Errors
/// Returns [`WordleError::LengthMismatch`] when the words differ in length.
///
/// # Examples
/// ```
/// use wordle_matrix::core::{Word, evaluate};
///
/// let guess = Word::new("steel").unwrap();
/// let target = Word::new("stale").unwrap();
/// let pattern = evaluate(&guess, &target).unwrap();
///
/// assert_eq!(pattern.to_string(), "GGAXA");
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<Pattern, WordleError> {
    if guess.len() != target.len() {
        return Err(WordleError::LengthMismatch {
            guess: guess.text().to_string(),
            target: target.text().to_string(),
        });
    }

    let guess_letters = guess.letters();
    let target_letters = target.letters();

    let mut pattern = Pattern::filled(guess.len(), Feedback::Red);
    let mut available = [0u8; ALPHABET_SIZE];
    let mut present = 0u32;

    for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
        present |= 1u32 << letter_index(t);
        if g == t {
            pattern.set(i, Feedback::Green);
        } else {
            available[letter_index(t)] += 1;
        }
    }

    for (i, &g) in guess_letters.iter().enumerate() {
        if g == target_letters[i] {
            continue;
        }
        let slot = &mut available[letter_index(g)];
        if *slot > 0 {
            *slot -= 1;
            pattern.set(i, Feedback::Amber);
        } else if present & (1u32 << letter_index(g)) != 0 {
            pattern.set(i, Feedback::Excess);
        }
    }

    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(guess: &str, target: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        evaluate(&guess, &target).unwrap().to_string()
    }

    #[test]
    fn self_match_is_all_green() {
        for word in ["slate", "crane", "eerie", "llama", "aaaaa", "cat"] {
            let w = Word::new(word).unwrap();
            assert!(evaluate(&w, &w).unwrap().is_perfect());
        }
    }

    #[test]
    fn steel_against_stale() {
        assert_eq!(eval("steel", "stale"), "GGAXA");
    }

    #[test]
    fn disjoint_words_are_all_red() {
        assert_eq!(eval("abcde", "fghij"), "RRRRR");
    }

    #[test]
    fn green_consumes_before_amber() {
        // The final E is Green, so the earlier E's have nothing left to claim
        assert_eq!(eval("eerie", "crane"), "XXARG");
    }

    #[test]
    fn earlier_repeat_gets_amber() {
        // SPEED against ERASE: both E's find an unconsumed E
        assert_eq!(eval("speed", "erase"), "ARAAR");
        // ROBOT against FLOOR: first O is Amber, second O is Green
        assert_eq!(eval("robot", "floor"), "AARGR");
    }

    #[test]
    fn excess_only_when_letter_in_target() {
        // LLAMA against CLEAN: second L is Green, first L has no spare L,
        // and the second A finds the only A already taken
        assert_eq!(eval("llama", "clean"), "XGARX");
    }

    #[test]
    fn one_code_per_position() {
        let words = ["slate", "crane", "trace", "eerie", "llama", "mamma"];
        for guess in words {
            for target in words {
                let g = Word::new(guess).unwrap();
                let t = Word::new(target).unwrap();
                assert_eq!(evaluate(&g, &t).unwrap().len(), 5);
            }
        }
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let guess = Word::new("crane").unwrap();
        let target = Word::new("cranes").unwrap();
        assert!(matches!(
            evaluate(&guess, &target),
            Err(WordleError::LengthMismatch { .. })
        ));
    }
}

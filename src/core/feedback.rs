//! Per-position feedback symbols
//!
//! The discriminants are the two-bit values stored in a pattern code.

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Feedback {
    /// Correct letter in the correct position
    Green = 0,
    /// Letter occurs elsewhere in the target and was not yet accounted for
    Amber = 1,
    /// Letter does not occur in the target
    Red = 2,
    /// Letter occurs in the target, but every occurrence is already consumed
    Excess = 3,
}

impl Feedback {
    /// All symbols in code order
    pub const ALL: [Self; 4] = [Self::Green, Self::Amber, Self::Red, Self::Excess];

    /// Two-bit code value
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Decode the low two bits of `bits`
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Self::Green,
            1 => Self::Amber,
            2 => Self::Red,
            _ => Self::Excess,
        }
    }

    /// Single-letter form used by [`super::Pattern`]'s `Display`
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Amber => 'A',
            Self::Red => 'R',
            Self::Excess => 'X',
        }
    }

    /// Emoji form; Excess is shown to players exactly like Red
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Amber => '🟨',
            Self::Red | Self::Excess => '⬜',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `G`, `A`/`Y`, `R`/`-`/`_` and `X` in either case, plus the
    /// coloured squares.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'A' | 'a' | 'Y' | 'y' | '🟨' => Some(Self::Amber),
            'R' | 'r' | '-' | '_' | '⬜' | '⬛' => Some(Self::Red),
            'X' | 'x' => Some(Self::Excess),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_values_are_fixed() {
        assert_eq!(Feedback::Green.bits(), 0);
        assert_eq!(Feedback::Amber.bits(), 1);
        assert_eq!(Feedback::Red.bits(), 2);
        assert_eq!(Feedback::Excess.bits(), 3);
    }

    #[test]
    fn from_bits_inverts_bits() {
        for feedback in Feedback::ALL {
            assert_eq!(Feedback::from_bits(feedback.bits()), feedback);
        }
    }

    #[test]
    fn chars_parse_back() {
        for feedback in Feedback::ALL {
            assert_eq!(Feedback::from_char(feedback.to_char()), Some(feedback));
        }
        assert_eq!(Feedback::from_char('y'), Some(Feedback::Amber));
        assert_eq!(Feedback::from_char('?'), None);
    }

    #[test]
    fn excess_displays_as_red() {
        assert_eq!(Feedback::Excess.to_emoji(), Feedback::Red.to_emoji());
    }
}

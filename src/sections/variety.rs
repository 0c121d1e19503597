//! Character variety sections - one per character class.

use super::SectionOutcome;
use crate::types::CharacterClassCounts;

const LETTER_POINTS: u32 = 15;
const DIGIT_POINTS: u32 = 15;
const SYMBOL_POINTS: u32 = 20;

pub const UPPERCASE_TIP: &str = "Add uppercase letters.";
pub const LOWERCASE_TIP: &str = "Add lowercase letters.";
pub const DIGIT_TIP: &str = "Include digits.";
pub const SYMBOL_TIP: &str = "Add symbols like !, @, #.";

/// Awards points when at least one uppercase letter is present.
pub fn uppercase_section(_password: &str, counts: &CharacterClassCounts) -> SectionOutcome {
    if counts.uppercase > 0 {
        SectionOutcome::passed(LETTER_POINTS)
    } else {
        SectionOutcome::failed(UPPERCASE_TIP)
    }
}

/// Awards points when at least one lowercase letter is present.
pub fn lowercase_section(_password: &str, counts: &CharacterClassCounts) -> SectionOutcome {
    if counts.lowercase > 0 {
        SectionOutcome::passed(LETTER_POINTS)
    } else {
        SectionOutcome::failed(LOWERCASE_TIP)
    }
}

/// Awards points when at least one digit is present.
pub fn digit_section(_password: &str, counts: &CharacterClassCounts) -> SectionOutcome {
    if counts.digits > 0 {
        SectionOutcome::passed(DIGIT_POINTS)
    } else {
        SectionOutcome::failed(DIGIT_TIP)
    }
}

/// Awards points when at least one symbol is present. Symbols weigh more
/// than the other classes.
pub fn symbol_section(_password: &str, counts: &CharacterClassCounts) -> SectionOutcome {
    if counts.symbols > 0 {
        SectionOutcome::passed(SYMBOL_POINTS)
    } else {
        SectionOutcome::failed(SYMBOL_TIP)
    }
}

//! Length section - scores the minimum-length requirement.

use super::SectionOutcome;
use crate::types::CharacterClassCounts;

const MIN_LENGTH: usize = 8;
const POINTS: u32 = 25;

pub const LENGTH_TIP: &str = "Increase length to at least 8 characters.";

/// Awards points when the password meets the minimum length.
pub fn length_section(_password: &str, counts: &CharacterClassCounts) -> SectionOutcome {
    if counts.length >= MIN_LENGTH {
        SectionOutcome::passed(POINTS)
    } else {
        SectionOutcome::failed(LENGTH_TIP)
    }
}

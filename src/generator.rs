//! Random password generation.

use rand::Rng;
use thiserror::Error;

use crate::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use crate::types::GenerationConfig;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// All four class toggles were off, leaving an empty alphabet. A normal
    /// user-input condition, reported for display rather than escalated.
    #[error("No character class selected")]
    NoCharacterClassSelected,
}

/// Generates a random password with the thread-local RNG.
///
/// Fails only when no character class is selected. A requested length of
/// zero yields the empty string.
pub fn generate(config: &GenerationConfig) -> Result<String, GenerateError> {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generates a random password drawing from the provided RNG.
///
/// Every position is an independent uniform draw from the combined alphabet;
/// the output is not guaranteed to contain a character from each selected
/// class.
pub fn generate_with_rng<R: Rng>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let alphabet = alphabet(config);

    if alphabet.is_empty() {
        return Err(GenerateError::NoCharacterClassSelected);
    }

    Ok((0..config.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect())
}

/// Concatenates the selected class tables in fixed order.
fn alphabet(config: &GenerationConfig) -> Vec<u8> {
    let mut chars = Vec::new();

    if config.include_uppercase {
        chars.extend(UPPERCASE);
    }
    if config.include_lowercase {
        chars.extend(LOWERCASE);
    }
    if config.include_digits {
        chars.extend(DIGITS);
    }
    if config.include_symbols {
        chars.extend(SYMBOLS);
    }

    chars
}

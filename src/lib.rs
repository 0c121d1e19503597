//! Password strength analysis and random password generation.
//!
//! Two independent, stateless components sharing one character-class
//! taxonomy:
//!
//! - the analyzer scores a candidate password, labels it Weak / Moderate /
//!   Strong and collects improvement tips;
//! - the generator draws random passwords from the selected character
//!   classes.
//!
//! # Features
//!
//! - `async` (default): Channel/cancellation bridge for UI integrations
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use passshield::{Analyzer, GenerationConfig, Verdict, generate};
//! use secrecy::SecretString;
//!
//! let analyzer = Analyzer::new();
//! let password = SecretString::new("Tr1cky!Pass".to_string().into());
//! let report = analyzer.analyze(&password);
//! assert_eq!(report.verdict, Verdict::Strong);
//!
//! let config = GenerationConfig { length: 16, ..GenerationConfig::default() };
//! let password = generate(&config).expect("at least one class is selected");
//! assert_eq!(password.chars().count(), 16);
//! ```

// Internal modules
mod analyzer;
mod blacklist;
mod generator;
mod sections;
mod types;

// Shared character-class taxonomy
pub mod charset;

// Public API
pub use analyzer::{Analyzer, analyze_password};
pub use blacklist::{Blacklist, BlacklistError};
pub use generator::{GenerateError, generate, generate_with_rng};
pub use types::{AnalysisResult, CharacterClassCounts, GenerationConfig, Score, Verdict};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;

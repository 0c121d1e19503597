//! Password analyzer - orchestrates the scoring sections.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::Blacklist;
use crate::sections::{
    Section, digit_section, length_section, lowercase_section, pattern_section, symbol_section,
    uppercase_section,
};
use crate::types::{AnalysisResult, CharacterClassCounts};

/// Score assigned to blacklisted passwords.
const BLACKLISTED_SCORE: u32 = 10;

pub(crate) const BLACKLIST_TIP: &str = "Password is blacklisted. Use something original.";

/// Scoring sections in evaluation order. The order fixes the tip sequence.
const SECTIONS: [Section; 5] = [
    length_section,
    uppercase_section,
    lowercase_section,
    digit_section,
    symbol_section,
];

/// Password analyzer with an injected blacklist.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    blacklist: Blacklist,
}

impl Analyzer {
    /// Builds an analyzer with the built-in blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an analyzer with a custom blacklist.
    pub fn with_blacklist(blacklist: Blacklist) -> Self {
        Self { blacklist }
    }

    /// Analyzes a password and returns score, verdict, composition counts
    /// and improvement tips.
    ///
    /// Total over all inputs: the empty string counts zero of everything and
    /// scores accordingly. Rejecting empty submissions is the caller's
    /// policy, not the analyzer's.
    pub fn analyze(&self, password: &SecretString) -> AnalysisResult {
        let pwd = password.expose_secret();
        let counts = CharacterClassCounts::scan(pwd);

        if self.blacklist.contains(pwd) {
            #[cfg(feature = "tracing")]
            tracing::debug!("password matched the blacklist");
            return AnalysisResult::new(
                BLACKLISTED_SCORE,
                counts,
                vec![BLACKLIST_TIP.to_string()],
            );
        }

        let mut score = 0u32;
        let mut tips = Vec::new();

        for section in SECTIONS {
            let outcome = section(pwd, &counts);
            score += outcome.points;
            if let Some(tip) = outcome.tip {
                tips.push(tip.to_string());
            }
        }

        // Tip only: repeated/sequential patterns never change the score.
        if let Some(tip) = pattern_section(pwd, &counts).tip {
            tips.push(tip.to_string());
        }

        AnalysisResult::new(score, counts, tips)
    }
}

/// Analyzes a password with the built-in blacklist.
pub fn analyze_password(password: &SecretString) -> AnalysisResult {
    Analyzer::new().analyze(password)
}

/// Async bridge: debounces, honors cancellation, then delivers the analysis
/// over a channel.
///
/// If the token is cancelled before the analysis runs, nothing is sent and
/// the receiver observes the channel closing. The synchronous analyzer
/// itself is never interrupted.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("analysis cancelled before it ran");
        return;
    }

    let result = Analyzer::new().analyze(password);

    match tx.send(result).await {
        Ok(()) => {}
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send analysis result: {}", _err);
        }
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_analyze_password_tx_delivers_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        analyze_password_tx(&secret("TestPass123!"), token, tx).await;

        let result = rx.recv().await.expect("Should receive analysis");
        assert_eq!(result.score.value(), 90);
    }

    #[tokio::test]
    async fn test_analyze_password_tx_honors_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        analyze_password_tx(&secret("TestPass123!"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}

//! Front end configuration parsed from environment variables.

use checkmate_engine::{Player, RandomPlayer};
use tracing::warn;

/// Default values:
///
/// * `human`: White
/// * `seed`: None, the computer is seeded from system entropy
/// * `ai_attempts`: [`RandomPlayer::DEFAULT_MAX_ATTEMPTS`]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CliConfig {
    /// Side played by the person at the keyboard.
    pub human: Player,
    /// Seed for the computer's move choices.
    pub seed: Option<u64>,
    /// Random proposals the computer makes before listing every legal move.
    pub ai_attempts: usize,
}

impl CliConfig {
    pub const HUMAN_VAR: &'static str = "CHECKMATE_HUMAN";
    pub const SEED_VAR: &'static str = "CHECKMATE_SEED";
    pub const AI_ATTEMPTS_VAR: &'static str = "CHECKMATE_AI_ATTEMPTS";

    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup. Values that fail to parse
    /// are logged and replaced by their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        CliConfig {
            human: parse_or(&lookup, Self::HUMAN_VAR, default.human),
            seed: lookup(Self::SEED_VAR).and_then(|raw| match raw.trim().parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!(key = Self::SEED_VAR, value = %raw, "ignoring unparseable seed");
                    None
                }
            }),
            ai_attempts: parse_or(&lookup, Self::AI_ATTEMPTS_VAR, default.ai_attempts),
        }
    }

    /// The computer opponent described by this configuration.
    pub fn opponent(&self) -> RandomPlayer {
        let ai = match self.seed {
            Some(seed) => RandomPlayer::with_seed(seed),
            None => RandomPlayer::new(),
        };
        ai.max_attempts(self.ai_attempts)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, ?default, "unparseable value, using default");
            default
        }),
        None => default,
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            human: Player::White,
            seed: None,
            ai_attempts: RandomPlayer::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

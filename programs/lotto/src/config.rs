use anchor_lang::prelude::*;
use std::str::FromStr;

use crate::{draw::SeededDraw, errors::LottoError};

// ── Environment ───────────────────────────────────────────────────────────
// No CLI flags; the two knobs are read once at startup.
pub const SEED_VAR: &str = "LOTTO_SEED"; // seed phrase → reproducible tickets
pub const LOG_VAR:  &str = "LOTTO_LOG";  // off | stderr

/// Where `msg!` diagnostics go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogSink {
    #[default]
    Off,
    Stderr,
}

impl FromStr for LogSink {
    type Err = anchor_lang::error::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "off"  => Ok(LogSink::Off),
            "stderr"    => Ok(LogSink::Stderr),
            _           => err!(LottoError::InvalidLogSink),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub seed_phrase: Option<String>,
    pub log_sink:    LogSink,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed_phrase = lookup(SEED_VAR).filter(|s| !s.is_empty());
        let log_sink = match lookup(LOG_VAR) {
            Some(raw) => raw.parse()?,
            None      => LogSink::default(),
        };
        Ok(Self { seed_phrase, log_sink })
    }

    /// Seeded from the phrase when one is configured, otherwise from OS entropy.
    pub fn number_source(&self) -> SeededDraw {
        match &self.seed_phrase {
            Some(phrase) => SeededDraw::from_phrase(phrase),
            None         => SeededDraw::from_entropy(),
        }
    }
}

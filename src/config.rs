//! # Deal Configuration
//!
//! Describes how to deal a batch of demo hands: how many, from which deck,
//! and with which seed. Configs are plain JSON so they can live in a file
//! or be passed inline.
//!
//! ```rust
//! use poker_hands::config::DealConfig;
//!
//! let config = DealConfig::from_json(r#"{"hands": 3, "seed": 7}"#).unwrap();
//! let hands = config.deal().unwrap();
//! assert_eq!(3, hands.len());
//! ```
//!
//! ## Fields
//!
//! - `hands` - number of hands to deal, defaults to 1
//! - `seed` - optional seed; without one every run is different
//! - `deck` - optional list of card tokens to deal from instead of the
//!   standard 52 card deck, e.g. `["4S", "TD", "4H", "2H", "7H"]`
//!
//! Each hand is sampled from the full deck independently, the way a fresh
//! shuffle would.

use std::{io::ErrorKind, path::Path};

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::core::{Card, Deck, Hand, PokerHandError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DealConfig {
    /// How many hands to deal
    #[serde(default = "default_hands")]
    pub hands: usize,
    /// Seed for a reproducible deal
    #[serde(default)]
    pub seed: Option<u64>,
    /// Custom deck, as card tokens
    #[serde(default)]
    pub deck: Option<Vec<String>>,
}

fn default_hands() -> usize {
    1
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            hands: default_hands(),
            seed: None,
            deck: None,
        }
    }
}

/// Errors that can occur while loading or using a deal configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A card in the deck or a dealt hand was bad
    #[error("Card error: {0}")]
    Card(#[from] PokerHandError),

    /// Generic validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DealConfig {
    /// Validate that the configuration is correct
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hands == 0 {
            return Err(ConfigError::Validation(
                "hands must be at least 1".to_string(),
            ));
        }
        let deck = self.build_deck()?;
        if deck.len() < 5 {
            return Err(ConfigError::Card(PokerHandError::NotEnoughCards(
                deck.len(),
            )));
        }
        Ok(())
    }

    /// Create from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DealConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "Loaded deal config");
        Ok(config)
    }

    /// Create from a file path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Try to parse as file path first, then as inline JSON
    pub fn from_str_or_file(input: &str) -> Result<Self, ConfigError> {
        match Self::from_file(input) {
            Ok(config) => Ok(config),
            Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                Self::from_json(input)
            }
            Err(err) => Err(err),
        }
    }

    /// The deck hands get dealt from.
    pub fn build_deck(&self) -> Result<Deck, ConfigError> {
        match &self.deck {
            Some(tokens) => {
                let cards = tokens
                    .iter()
                    .map(|t| t.parse::<Card>())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Deck::from(cards))
            }
            None => Ok(Deck::default()),
        }
    }

    /// Deal `hands` hands. With a seed the result is the same every time.
    #[instrument(level = "debug", skip(self), fields(hands = self.hands, seed = ?self.seed))]
    pub fn deal(&self) -> Result<Vec<Hand>, ConfigError> {
        self.validate()?;
        let deck = self.build_deck()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let hands = (0..self.hands)
            .map(|_| deck.sample_hand(&mut rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(hands)
    }
}

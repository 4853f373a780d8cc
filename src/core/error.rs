use thiserror::Error;

use crate::core::card::Card;

/// This is the core error type for the crate. Everything that can go wrong
/// while turning text or cards into a `Hand` ends up here. Once a `Hand`
/// exists classification, ranking and description can't fail.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum PokerHandError {
    #[error("Malformed card token '{0}': expected a value from [23456789TJQKA] followed by a suit from [SDCH]")]
    MalformedCardToken(String),
    #[error("A hand needs exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Need at least 5 cards to deal a hand, the deck has {0}")]
    NotEnoughCards(usize),
    #[error("Invalid ranking key {0:?}")]
    InvalidRankKey(Vec<u8>),
}

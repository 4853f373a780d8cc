#![deny(clippy::all)]
//! # Poker Hands
//!
//! Poker Hands is a small library for evaluating five card poker hands.
//! Given exactly five cards it will tell you which of the ten categories
//! the hand falls into, give you a key that orders it against any other
//! hand, and describe it in plain English.
//!
//! ```
//! use poker_hands::core::{Hand, HandCategory};
//!
//! let hand = Hand::new_from_str("7S 7D AS AC AH").unwrap();
//! let eval = hand.evaluate();
//! assert_eq!(HandCategory::FullHouse, eval.category);
//! assert_eq!("Full House, Aces over Sevens", eval.description);
//!
//! let two_pair = Hand::new_from_str("8S 8D TC TH KH").unwrap();
//! assert!(hand.rank_key() > two_pair.rank_key());
//! ```
//!
//! ## Cards
//!
//! Cards are two character tokens, a value from `23456789TJQKA` followed
//! by a suit from `SDCH`. Both are case sensitive.
//!
//! ## Dealing
//!
//! `Deck::default()` is the standard 52 cards in a fixed order, so
//! sampling with a seeded rng is reproducible.
//!
//! ```
//! use poker_hands::core::Deck;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let hand = Deck::default().sample_hand(&mut rng).unwrap();
//! println!("{}", hand.evaluate());
//! ```

/// Cards, decks, hands, and everything needed to classify, rank and
/// describe a five card hand.
pub mod core;

/// JSON configuration for dealing demo hands.
#[cfg(feature = "serde")]
pub mod config;

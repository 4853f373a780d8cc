/// The basics of five card evaluation: cards, decks, and hands.
mod card;
pub use self::card::{Card, Suit, Value};

mod error;
pub use self::error::PokerHandError;

/// Code related to dealing. A deck holds cards, sampling gives hands.
mod deck;
pub use self::deck::Deck;

/// Iterate over every five card hand of a deck.
mod card_iter;
pub use self::card_iter::CardIter;

/// A validated, sorted, immutable five card hand.
mod hand;
pub use self::hand::Hand;

/// Per value counts and the count signature of a hand.
mod frequency;
pub use self::frequency::{Frequency, Signature};

/// The ten categories and the predicates that pick one.
mod category;
pub use self::category::HandCategory;

/// Ranking keys, a total order over all hands.
mod rank;
pub use self::rank::RankKey;

/// English descriptions such as "Full House, Aces over Sevens".
mod describe;
pub use self::describe::describe;

mod evaluation;
pub use self::evaluation::{compare, Evaluation};

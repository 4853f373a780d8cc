use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::core::card::Card;
use crate::core::deck::Deck;
use crate::core::error::PokerHandError;
use crate::core::frequency::Frequency;

/// Exactly five distinct cards, sorted ascending by value (ties by suit).
///
/// A `Hand` can only be created through validating constructors and there's
/// no way to mutate it afterwards. Everything derived from the cards that
/// more than one stage of evaluation needs, the `Frequency`, is computed up
/// front so every later question is a pure read.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Hand {
    cards: [Card; 5],
    frequency: Frequency,
}

impl Hand {
    /// Create a hand from any five distinct cards, in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new(&[
    ///     Card::new(Value::King, Suit::Diamond),
    ///     Card::new(Value::Three, Suit::Heart),
    ///     Card::new(Value::Queen, Suit::Diamond),
    ///     Card::new(Value::Four, Suit::Spade),
    ///     Card::new(Value::Seven, Suit::Spade),
    /// ])
    /// .unwrap();
    /// assert_eq!("3H 4S 7S QD KD", hand.to_string());
    /// ```
    pub fn new(cards: &[Card]) -> Result<Self, PokerHandError> {
        let mut sorted: [Card; 5] = cards.try_into().map_err(|_| {
            trace!(len = cards.len(), "Rejecting hand with the wrong number of cards");
            PokerHandError::InvalidHandSize(cards.len())
        })?;
        sorted.sort();

        // Sorted, so any duplicate sits right next to its twin.
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            trace!(card = %w[0], "Rejecting hand with a duplicate card");
            return Err(PokerHandError::DuplicateCard(w[0]));
        }

        Ok(Self::from_distinct(sorted))
    }

    /// Build a hand from cards already known to be distinct.
    pub(crate) fn from_distinct(mut cards: [Card; 5]) -> Self {
        cards.sort();
        Self {
            cards,
            frequency: Frequency::new(&cards),
        }
    }

    /// Parse five whitespace separated card tokens, e.g. `"AS 2H 3S 4H 5C"`.
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerHandError> {
        let cards = hand_string
            .split_whitespace()
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&cards)
    }

    /// Parse a hand from separate card tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::{Hand, PokerHandError};
    ///
    /// let hand = Hand::from_tokens(&["AH", "TH", "JH", "QH", "KH"]).unwrap();
    /// assert_eq!("TH JH QH KH AH", hand.to_string());
    ///
    /// assert_eq!(
    ///     Err(PokerHandError::InvalidHandSize(4)),
    ///     Hand::from_tokens(&["AH", "TH", "JH", "QH"])
    /// );
    /// ```
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, PokerHandError> {
        let cards = tokens
            .iter()
            .map(|t| t.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&cards)
    }

    /// Deal a random hand from the standard 52 card deck.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let deck = Deck::default();
        let mut cards = [deck[0]; 5];
        for (slot, card) in cards.iter_mut().zip(deck.choose_multiple(rng, 5)) {
            *slot = *card;
        }
        Self::from_distinct(cards)
    }

    /// The cards, lowest first.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = PokerHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = PokerHandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hand {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new_from_str(&s).map_err(serde::de::Error::custom)
    }
}

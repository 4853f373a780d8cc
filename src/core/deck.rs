use std::ops::Deref;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{event, Level};

use crate::core::card::{Card, Suit, Value};
use crate::core::error::PokerHandError;
use crate::core::hand::Hand;

/// An ordered pile of cards that hands get dealt from.
///
/// The default deck holds the 52 standard cards suit by suit
/// (spades, diamonds, clubs, hearts) with the ace first inside each suit.
/// That order means nothing for evaluation, it only makes sampling with a
/// seeded rng reproducible.
///
/// Custom decks can be built from any list of cards, including short ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw five cards without replacement and make a `Hand` of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::Deck;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let hand = Deck::default().sample_hand(&mut rng).unwrap();
    /// assert_eq!(5, hand.cards().len());
    /// ```
    ///
    /// # Errors
    ///
    /// `NotEnoughCards` if the deck has fewer than five cards. A custom deck
    /// that holds the same card twice can produce `DuplicateCard`.
    pub fn sample_hand<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Hand, PokerHandError> {
        if self.cards.len() < 5 {
            event!(
                Level::WARN,
                deck_size = self.cards.len(),
                "Deck is too small to deal a hand"
            );
            return Err(PokerHandError::NotEnoughCards(self.cards.len()));
        }
        let drawn: Vec<Card> = self.cards.choose_multiple(rng, 5).copied().collect();
        let hand = Hand::new(&drawn)?;
        event!(Level::TRACE, %hand, "Dealt hand");
        Ok(hand)
    }
}

impl Default for Deck {
    fn default() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::suits() {
            cards.push(Card::new(Value::Ace, suit));
            for value in &Value::values()[..12] {
                cards.push(Card::new(*value, suit));
            }
        }
        Self { cards }
    }
}

impl Deref for Deck {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// Parse a whitespace separated list of card tokens into a deck.
impl FromStr for Deck {
    type Err = PokerHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cards })
    }
}

use tracing::trace;

use crate::core::card::Card;
use crate::core::deck::Deck;
use crate::core::hand::Hand;

/// Given some cards walk every possible five card hand that can be made
/// from them, in lexicographic order of positions.
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the possible cards that can be dealt
    possible_cards: &'a [Card],

    /// Positions into `possible_cards` of the next hand to hand out.
    idx: [usize; 5],

    /// Set once every combination has been produced.
    done: bool,
}

/// `CardIter` is a container for cards and current state.
impl CardIter<'_> {
    /// Create a new `CardIter` from a slice of cards.
    pub fn new(possible_cards: &[Card]) -> CardIter<'_> {
        CardIter {
            possible_cards,
            idx: [0, 1, 2, 3, 4],
            done: possible_cards.len() < 5,
        }
    }

    /// Move `idx` to the next combination, returning false when there
    /// isn't one.
    fn advance(&mut self) -> bool {
        let n = self.possible_cards.len();
        // Find the right most position that can still move forward while
        // leaving room for the positions after it.
        let Some(level) = (0..5).rev().find(|&i| self.idx[i] < n - 5 + i) else {
            return false;
        };
        self.idx[level] += 1;
        for i in level + 1..5 {
            self.idx[i] = self.idx[i - 1] + 1;
        }
        true
    }
}

/// The actual `Iterator` for `Hand`'s.
///
/// Combinations that contain the same card twice (only possible with a
/// custom deck) are skipped.
impl Iterator for CardIter<'_> {
    type Item = Hand;

    fn next(&mut self) -> Option<Hand> {
        while !self.done {
            let cards = self.idx.map(|i| self.possible_cards[i]);
            self.done = !self.advance();
            match Hand::new(&cards) {
                Ok(hand) => return Some(hand),
                Err(e) => trace!(%e, "Skipping combination"),
            }
        }
        None
    }
}

/// This is useful for trying every possible 5 card hand
///
/// Probably not something that's going to be done in real
/// use cases, but still not bad.
impl<'a> IntoIterator for &'a Deck {
    type Item = Hand;
    type IntoIter = CardIter<'a>;

    fn into_iter(self) -> CardIter<'a> {
        CardIter::new(&self[..])
    }
}

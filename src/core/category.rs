use std::fmt;

use crate::core::card::Value;
use crate::core::frequency::Signature;
use crate::core::hand::Hand;

/// All the different possible five card hand categories, weakest first.
///
/// The derived ordering is the poker ordering, and `as u8` gives the
/// priority used as the first slot of a `RankKey` (0 for high card up to 9
/// for a royal flush).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    Pair = 1,
    /// Two different pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all for the same suit.
    StraightFlush = 8,
    /// Ten through Ace of one suit.
    RoyalFlush = 9,
}

impl HandCategory {
    /// Every category, weakest first.
    pub const fn categories() -> [Self; 10] {
        [
            Self::HighCard,
            Self::Pair,
            Self::TwoPair,
            Self::ThreeOfAKind,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOfAKind,
            Self::StraightFlush,
            Self::RoyalFlush,
        ]
    }

    /// The category with priority `v`, if there is one.
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::categories().get(v as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Given a bitset of values this will determine if there's a straight,
/// and give back the top card of the run. The wheel is topped by the five,
/// the ace only counts as the card below the two there.
///
/// Returns None if the values represented don't correspond to a straight.
fn straight_high(value_set: u32) -> Option<Value> {
    // Five ones in a row survive all the shifts and leave a single bit at
    // the top card of the run.
    let left =
        value_set & (value_set >> 1) & (value_set >> 2) & (value_set >> 3) & (value_set >> 4);
    if left != 0 {
        Value::from_u8((32 - left.leading_zeros() - 1) as u8 + 4)
    } else if value_set == WHEEL {
        Some(Value::Five)
    } else {
        None
    }
}

/// The category predicates. Each one answers exactly the question in its
/// name and nothing more, so several can be true for the same hand (a
/// straight flush is also a straight and a flush). `category` resolves that
/// by asking in priority order.
impl Hand {
    /// All five suits are the same.
    pub fn is_flush(&self) -> bool {
        let first = self.cards()[0].suit;
        self.iter().all(|c| c.suit == first)
    }

    /// Five consecutive values, or the wheel `A 2 3 4 5`.
    pub fn is_straight(&self) -> bool {
        self.straight_high().is_some()
    }

    /// The top card of the straight if this hand is one. For the wheel
    /// that's the five.
    pub fn straight_high(&self) -> Option<Value> {
        if self.frequency().signature() != Signature::ALL_DISTINCT {
            return None;
        }
        straight_high(self.frequency().value_set())
    }

    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    /// An ace high straight flush. The wheel straight flush is not royal.
    pub fn is_royal_flush(&self) -> bool {
        self.is_straight_flush() && self.straight_high() == Some(Value::Ace)
    }

    pub fn is_four_of_a_kind(&self) -> bool {
        self.frequency().signature() == Signature::FOUR_OF_A_KIND
    }

    pub fn is_full_house(&self) -> bool {
        self.frequency().signature() == Signature::FULL_HOUSE
    }

    pub fn is_three_of_a_kind(&self) -> bool {
        self.frequency().signature() == Signature::THREE_OF_A_KIND
    }

    pub fn is_two_pair(&self) -> bool {
        self.frequency().signature() == Signature::TWO_PAIR
    }

    pub fn is_pair(&self) -> bool {
        self.frequency().signature() == Signature::PAIR
    }

    /// Five different values that make neither a flush nor a straight.
    pub fn is_high_card(&self) -> bool {
        self.frequency().signature() == Signature::ALL_DISTINCT
            && !(self.is_flush() || self.is_straight())
    }

    /// Classify the hand into exactly one category, the highest one whose
    /// predicate holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::{Hand, HandCategory};
    ///
    /// let hand = Hand::new_from_str("4D 5D 6D 7D 8D").unwrap();
    /// assert_eq!(HandCategory::StraightFlush, hand.category());
    /// ```
    pub fn category(&self) -> HandCategory {
        if self.is_royal_flush() {
            HandCategory::RoyalFlush
        } else if self.is_straight_flush() {
            HandCategory::StraightFlush
        } else if self.is_four_of_a_kind() {
            HandCategory::FourOfAKind
        } else if self.is_full_house() {
            HandCategory::FullHouse
        } else if self.is_flush() {
            HandCategory::Flush
        } else if self.is_straight() {
            HandCategory::Straight
        } else if self.is_three_of_a_kind() {
            HandCategory::ThreeOfAKind
        } else if self.is_two_pair() {
            HandCategory::TwoPair
        } else if self.is_pair() {
            HandCategory::Pair
        } else {
            HandCategory::HighCard
        }
    }

    /// Check a category's predicate directly.
    pub fn is(&self, category: HandCategory) -> bool {
        match category {
            HandCategory::HighCard => self.is_high_card(),
            HandCategory::Pair => self.is_pair(),
            HandCategory::TwoPair => self.is_two_pair(),
            HandCategory::ThreeOfAKind => self.is_three_of_a_kind(),
            HandCategory::Straight => self.is_straight(),
            HandCategory::Flush => self.is_flush(),
            HandCategory::FullHouse => self.is_full_house(),
            HandCategory::FourOfAKind => self.is_four_of_a_kind(),
            HandCategory::StraightFlush => self.is_straight_flush(),
            HandCategory::RoyalFlush => self.is_royal_flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(s: &str) -> HandCategory {
        Hand::new_from_str(s).unwrap().category()
    }

    #[test]
    fn test_cmp() {
        assert!(HandCategory::HighCard < HandCategory::Pair);
        assert!(HandCategory::Pair < HandCategory::TwoPair);
        assert!(HandCategory::TwoPair < HandCategory::ThreeOfAKind);
        assert!(HandCategory::ThreeOfAKind < HandCategory::Straight);
        assert!(HandCategory::Straight < HandCategory::Flush);
        assert!(HandCategory::Flush < HandCategory::FullHouse);
        assert!(HandCategory::FullHouse < HandCategory::FourOfAKind);
        assert!(HandCategory::FourOfAKind < HandCategory::StraightFlush);
        assert!(HandCategory::StraightFlush < HandCategory::RoyalFlush);
    }

    #[test]
    fn test_ordinals() {
        for (idx, c) in HandCategory::categories().iter().enumerate() {
            assert_eq!(idx as u8, *c as u8);
        }
    }

    #[test]
    fn test_straight_high_bits() {
        assert_eq!(Some(Value::Five), straight_high(WHEEL));
        assert_eq!(Some(Value::Six), straight_high(0b1_1111));
        assert_eq!(Some(Value::Ace), straight_high(0b1_1111_0000_0000));
        assert_eq!(None, straight_high(0b1_0111_1000_0000));
        // Ace, two, three, four and six isn't a wheel.
        assert_eq!(None, straight_high(0b1_0000_0001_0111));
    }

    #[test]
    fn test_examples() {
        assert_eq!(HandCategory::HighCard, category("3H 4S 7S QD KD"));
        assert_eq!(HandCategory::Pair, category("4D 6S TC JS JC"));
        assert_eq!(HandCategory::TwoPair, category("6S 6D TD TH KH"));
        assert_eq!(HandCategory::ThreeOfAKind, category("5S 5C 5H 6S QC"));
        assert_eq!(HandCategory::Straight, category("AS 2H 3S 4H 5C"));
        assert_eq!(HandCategory::Straight, category("AS TH JS QH KC"));
        assert_eq!(HandCategory::Straight, category("6S 7H 8S 9H TC"));
        assert_eq!(HandCategory::Flush, category("3C 5C 6C 9C QC"));
        assert_eq!(HandCategory::FullHouse, category("7S 7D AS AC AH"));
        assert_eq!(HandCategory::FourOfAKind, category("8S 8D 8C 8H KH"));
        assert_eq!(HandCategory::StraightFlush, category("4D 5D 6D 7D 8D"));
        assert_eq!(HandCategory::StraightFlush, category("AS 2S 3S 4S 5S"));
        assert_eq!(HandCategory::RoyalFlush, category("AH TH JH QH KH"));
    }

    #[test]
    fn test_wheel_flush_is_not_royal() {
        let h = Hand::new_from_str("AS 2S 3S 4S 5S").unwrap();
        assert!(h.is_straight_flush());
        assert!(!h.is_royal_flush());
        assert_eq!(Some(Value::Five), h.straight_high());
    }

    #[test]
    fn test_no_wrap_around() {
        // Queen, king, ace, two, three is not a straight.
        let h = Hand::new_from_str("QS KD AH 2C 3S").unwrap();
        assert!(!h.is_straight());
        assert_eq!(HandCategory::HighCard, h.category());
    }

    #[test]
    fn test_almost_wheel() {
        assert_eq!(HandCategory::HighCard, category("AD 2C 3S 4H 6D"));
    }

    #[test]
    fn test_royal_flush_satisfies_lower_predicates() {
        let h = Hand::new_from_str("AH TH JH QH KH").unwrap();
        assert!(h.is_flush());
        assert!(h.is_straight());
        assert!(h.is_straight_flush());
        assert!(h.is_royal_flush());
        assert!(!h.is_high_card());
    }

    #[test]
    fn test_pairs_are_never_straights() {
        let h = Hand::new_from_str("2S 3D 4C 5H 5S").unwrap();
        assert!(!h.is_straight());
        assert_eq!(None, h.straight_high());
        assert_eq!(HandCategory::Pair, h.category());
    }

    #[test]
    fn test_category_predicate_holds() {
        for s in [
            "3H 4S 7S QD KD",
            "4D 6S TC JS JC",
            "6S 6D TD TH KH",
            "AS 2H 3S 4H 5C",
            "3C 5C 6C 9C QC",
            "7S 7D AS AC AH",
            "8S 8D 8C 8H KH",
            "AH TH JH QH KH",
        ] {
            let h = Hand::new_from_str(s).unwrap();
            assert!(h.is(h.category()), "{s} fails its own predicate");
        }
    }
}

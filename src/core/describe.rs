use crate::core::category::HandCategory;
use crate::core::hand::Hand;
use crate::core::rank::RankKey;

/// Render the canonical English description for a ranking key.
///
/// Everything needed is already in the key: the category picks the
/// template and the tie break values fill it in. Nothing gets classified
/// again here.
pub fn describe(key: &RankKey) -> String {
    let category = key.category();
    let tie_breaks = key.tie_breaks();
    let Some(&top) = tie_breaks.first() else {
        // Every key carries at least one tie break value.
        return category.to_string();
    };

    match category {
        HandCategory::RoyalFlush => category.to_string(),
        // `top` is already the five for the wheel.
        HandCategory::StraightFlush | HandCategory::Straight | HandCategory::Flush => {
            format!("{}-High {category}", top.name())
        }
        HandCategory::FourOfAKind | HandCategory::ThreeOfAKind | HandCategory::Pair => {
            format!("{category}, {}", top.plural_name())
        }
        HandCategory::FullHouse => match tie_breaks.get(1) {
            Some(pair) => format!(
                "{category}, {} over {}",
                top.plural_name(),
                pair.plural_name()
            ),
            None => format!("{category}, {}", top.plural_name()),
        },
        // Named low pair first.
        HandCategory::TwoPair => match tie_breaks.get(1) {
            Some(low) => format!(
                "{category}, {} and {}",
                low.plural_name(),
                top.plural_name()
            ),
            None => format!("{category}, {}", top.plural_name()),
        },
        HandCategory::HighCard => format!("{category}, {}", top.name()),
    }
}

impl Hand {
    /// The canonical description of this hand.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::Hand;
    ///
    /// let hand = Hand::new_from_str("7S 7D AS AC AH").unwrap();
    /// assert_eq!("Full House, Aces over Sevens", hand.describe());
    ///
    /// let wheel = Hand::new_from_str("AS 2H 3S 4H 5C").unwrap();
    /// assert_eq!("Five-High Straight", wheel.describe());
    /// ```
    pub fn describe(&self) -> String {
        describe(&self.rank_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe_str(s: &str) -> String {
        Hand::new_from_str(s).unwrap().describe()
    }

    #[test]
    fn test_high_card() {
        assert_eq!("High Card, King", describe_str("3H 4S 7S QD KD"));
    }

    #[test]
    fn test_pair() {
        assert_eq!("Pair, Jacks", describe_str("4D 6S TC JS JC"));
    }

    #[test]
    fn test_two_pair() {
        assert_eq!("Two Pair, Sixes and Tens", describe_str("6S 6D TD TH KH"));
        assert_eq!("Two Pair, Eights and Tens", describe_str("8S 8D TC TH KH"));
    }

    #[test]
    fn test_three_of_a_kind() {
        assert_eq!("Three of a Kind, Fives", describe_str("5S 5C 5H 6S QC"));
    }

    #[test]
    fn test_straights() {
        assert_eq!("Five-High Straight", describe_str("AS 2H 3S 4H 5C"));
        assert_eq!("Ace-High Straight", describe_str("AS TH JS QH KC"));
        assert_eq!("Ten-High Straight", describe_str("6S 7H 8S 9H TC"));
    }

    #[test]
    fn test_flush() {
        assert_eq!("Queen-High Flush", describe_str("3C 5C 6C 9C QC"));
    }

    #[test]
    fn test_full_house() {
        assert_eq!("Full House, Aces over Sevens", describe_str("7S 7D AS AC AH"));
        assert_eq!("Full House, Sevens over Aces", describe_str("7S 7D 7C AC AH"));
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!("Four of a Kind, Eights", describe_str("8S 8D 8C 8H KH"));
    }

    #[test]
    fn test_straight_flushes() {
        assert_eq!(
            "Eight-High Straight Flush",
            describe_str("4D 5D 6D 7D 8D")
        );
        assert_eq!("Five-High Straight Flush", describe_str("AS 2S 3S 4S 5S"));
    }

    #[test]
    fn test_royal_flush() {
        assert_eq!("Royal Flush", describe_str("AH TH JH QH KH"));
    }
}

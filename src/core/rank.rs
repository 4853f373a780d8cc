use std::cmp::Ordering;

use crate::core::card::Value;
use crate::core::category::HandCategory;
use crate::core::error::PokerHandError;
use crate::core::hand::Hand;

/// The comparison key for a hand: the category priority followed by the
/// tie break values that matter for that category, most significant first.
///
/// Keys compare lexicographically, which makes them a total order over all
/// five card hands. The category always dominates, so any flush beats any
/// straight no matter the values. Suits never take part, two keys being
/// equal means the hands split.
///
/// | Category | Tie breaks |
/// |---|---|
/// | Straight, Straight Flush, Royal Flush | top card of the run (five for the wheel) |
/// | Four of a Kind | quads, kicker |
/// | Full House | trips, pair |
/// | Flush, High Card | all five values high to low |
/// | Three of a Kind | trips, two kickers high to low |
/// | Two Pair | high pair, low pair, kicker |
/// | Pair | pair, three kickers high to low |
///
/// With the `serde` feature a key is written as its `to_tuple()` form.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct RankKey {
    category: HandCategory,
    // Unused trailing slots stay at `Value::Two`; keys of one category
    // always use the same number of slots so the padding never decides.
    values: [Value; 5],
    len: usize,
}

impl RankKey {
    fn new(category: HandCategory, tie_breaks: impl IntoIterator<Item = Value>) -> Self {
        let mut values = [Value::Two; 5];
        let mut len = 0;
        for (slot, v) in values.iter_mut().zip(tie_breaks) {
            *slot = v;
            len += 1;
        }
        Self {
            category,
            values,
            len,
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tie break values in priority order.
    pub fn tie_breaks(&self) -> &[Value] {
        &self.values[..self.len]
    }

    /// The key as plain integers: category priority (0 to 9) followed by
    /// each tie break value (two is 0, ace is 12).
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::Hand;
    ///
    /// let hand = Hand::new_from_str("7S 7D AS AC AH").unwrap();
    /// assert_eq!(vec![6, 12, 5], hand.rank_key().to_tuple());
    /// ```
    pub fn to_tuple(&self) -> Vec<u8> {
        std::iter::once(self.category as u8)
            .chain(self.tie_breaks().iter().map(|v| *v as u8))
            .collect()
    }
}

/// How many tie break values a key of `category` carries.
fn tie_break_len(category: HandCategory) -> usize {
    match category {
        HandCategory::RoyalFlush | HandCategory::StraightFlush | HandCategory::Straight => 1,
        HandCategory::FourOfAKind | HandCategory::FullHouse => 2,
        HandCategory::ThreeOfAKind | HandCategory::TwoPair => 3,
        HandCategory::Pair => 4,
        HandCategory::Flush | HandCategory::HighCard => 5,
    }
}

/// Rebuild a key from its `to_tuple()` form. The category has to exist, it
/// has to be followed by exactly as many values as that category uses, and
/// every value has to be a real card value.
impl TryFrom<&[u8]> for RankKey {
    type Error = PokerHandError;

    fn try_from(tuple: &[u8]) -> Result<Self, Self::Error> {
        let invalid = || PokerHandError::InvalidRankKey(tuple.to_vec());
        let (&first, rest) = tuple.split_first().ok_or_else(invalid)?;
        let category = HandCategory::from_u8(first).ok_or_else(invalid)?;
        if rest.len() != tie_break_len(category) {
            return Err(invalid());
        }
        let values = rest
            .iter()
            .map(|&v| Value::from_u8(v).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(category, values))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RankKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_tuple(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RankKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tuple = <Vec<u8> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(tuple.as_slice()).map_err(serde::de::Error::custom)
    }
}

impl Hand {
    /// Build the ranking key. It is derived from the same `Frequency` the
    /// classifier uses and isn't cached, every call recomputes it.
    pub fn rank_key(&self) -> RankKey {
        let category = self.category();
        let frequency = self.frequency();
        match category {
            HandCategory::RoyalFlush | HandCategory::StraightFlush | HandCategory::Straight => {
                RankKey::new(category, self.straight_high())
            }
            // Grouped values come out groups first then kickers, each high
            // to low, which is exactly the tie break order for everything
            // that isn't a straight.
            HandCategory::FourOfAKind
            | HandCategory::FullHouse
            | HandCategory::Flush
            | HandCategory::ThreeOfAKind
            | HandCategory::TwoPair
            | HandCategory::Pair
            | HandCategory::HighCard => RankKey::new(category, frequency.grouped_values()),
        }
    }

    /// Compare the strength of two hands.
    ///
    /// `Ordering::Equal` means a genuine tie: same category and every tie
    /// break value equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use poker_hands::core::Hand;
    ///
    /// let full_house = Hand::new_from_str("7S 7D AS AC AH").unwrap();
    /// let two_pair = Hand::new_from_str("8S 8D TC TH KH").unwrap();
    /// assert_eq!(Ordering::Greater, full_house.cmp_strength(&two_pair));
    /// ```
    pub fn cmp_strength(&self, other: &Hand) -> Ordering {
        self.rank_key().cmp(&other.rank_key())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn key(s: &str) -> RankKey {
        Hand::new_from_str(s).unwrap().rank_key()
    }

    fn tuple(s: &str) -> Vec<u8> {
        key(s).to_tuple()
    }

    #[test]
    fn test_straight_keys() {
        assert_eq!(vec![4, 3], tuple("AS 2H 3S 4H 5C"));
        assert_eq!(vec![4, 12], tuple("AS TH JS QH KC"));
        assert_eq!(vec![4, 8], tuple("6S 7H 8S 9H TC"));
        assert_eq!(vec![8, 6], tuple("4D 5D 6D 7D 8D"));
        assert_eq!(vec![8, 3], tuple("AS 2S 3S 4S 5S"));
        assert_eq!(vec![9, 12], tuple("AH TH JH QH KH"));
    }

    #[test]
    fn test_four_of_a_kind_key() {
        assert_eq!(vec![7, 6, 11], tuple("8S 8D 8C 8H KH"));
        // Kicker below the quads.
        assert_eq!(vec![7, 6, 0], tuple("8S 8D 8C 8H 2H"));
    }

    #[test]
    fn test_full_house_key() {
        assert_eq!(vec![6, 12, 5], tuple("7S 7D AS AC AH"));
        assert_eq!(vec![6, 5, 12], tuple("7S 7D 7C AC AH"));
    }

    #[test]
    fn test_flush_key_uses_all_values() {
        assert_eq!(vec![5, 10, 7, 4, 3, 1], tuple("3C 5C 6C 9C QC"));
    }

    #[test]
    fn test_three_of_a_kind_key() {
        assert_eq!(vec![3, 3, 10, 4], tuple("5S 5C 5H 6S QC"));
    }

    #[test]
    fn test_two_pair_key() {
        assert_eq!(vec![2, 8, 4, 11], tuple("6S 6D TD TH KH"));
        assert_eq!(vec![2, 8, 6, 11], tuple("8S 8D TC TH KH"));
    }

    #[test]
    fn test_pair_key_kickers_high_to_low() {
        assert_eq!(vec![1, 9, 8, 4, 2], tuple("4D 6S TC JS JC"));
        assert_eq!(vec![1, 0, 11, 7, 3], tuple("2S 9D 2C KH 5S"));
    }

    #[test]
    fn test_high_card_key() {
        assert_eq!(vec![0, 11, 10, 5, 2, 1], tuple("3H 4S 7S QD KD"));
    }

    #[test]
    fn test_full_house_beats_two_pair() {
        assert!(key("7S 7D AS AC AH") > key("8S 8D TC TH KH"));
    }

    #[test]
    fn test_category_dominates_tie_breaks() {
        // Lowest hand of each category still beats the highest hand of the
        // category below it.
        let ladder = [
            ("AS KD QC JH 9S", "2S 2D 3C 4H 5S"),
            ("AS AD KC QH JS", "2S 2D 3C 3H 4S"),
            ("AS AD KC KH QS", "2S 2D 2C 3H 4S"),
            ("AS AD AC KH QS", "AS 2D 3C 4H 5S"),
            ("AS KD QC JH TS", "2S 3S 4S 5S 7S"),
            ("AS KS QS JS 9S", "2S 2D 2C 3H 3S"),
            ("AS AD AC KH KS", "2S 2D 2C 2H 3S"),
            ("AS AD AC AH KS", "AD 2D 3D 4D 5D"),
            ("9D TD JD QD KD", "TC JC QC KC AC"),
        ];
        for (high, next) in ladder {
            assert!(key(high) < key(next), "{high} should lose to {next}");
        }
    }

    #[test]
    fn test_kickers_decide_within_category() {
        assert!(key("AS AD KC QH JS") > key("AC AH KD QS TS"));
        assert!(key("AS AD KC QH 3S") < key("AC AH KD QS 4S"));
        assert!(key("9S 9D 5C 5H AS") > key("9C 9H 5D 5S KS"));
        assert!(key("9S 9D 5C 5H 2S") > key("8C 8H 7D 7S AS"));
        assert!(key("KS QS 9S 7S 3S") > key("KD QD 9D 7D 2D"));
        assert!(key("6S 7H 8S 9H TC") > key("AS 2H 3S 4H 5C"));
    }

    #[test]
    fn test_suits_do_not_matter() {
        assert_eq!(key("AS AD KC QH JS"), key("AC AH KD QS JH"));
        let a = Hand::new_from_str("TS JS QS KS AS").unwrap();
        let b = Hand::new_from_str("TH JH QH KH AH").unwrap();
        assert_eq!(Ordering::Equal, a.cmp_strength(&b));
    }

    #[test]
    fn test_key_matches_category() {
        for s in ["3H 4S 7S QD KD", "7S 7D AS AC AH", "AH TH JH QH KH"] {
            let h = Hand::new_from_str(s).unwrap();
            assert_eq!(h.category(), h.rank_key().category());
        }
    }

    #[test]
    fn test_random_pairs_order_like_tuples() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..10_000 {
            let a = Hand::random(&mut rng);
            let b = Hand::random(&mut rng);
            let (ka, kb) = (a.rank_key(), b.rank_key());
            if a.category() != b.category() {
                assert_eq!(a.category().cmp(&b.category()), ka.cmp(&kb), "{a} vs {b}");
            }
            assert_eq!(ka.to_tuple().cmp(&kb.to_tuple()), ka.cmp(&kb), "{a} vs {b}");
            assert_eq!(ka.cmp(&kb), kb.cmp(&ka).reverse());
        }
    }
    /// Sorted values of the cards, grouped by count then by value, the way
    /// you'd read the tie breaks off the table by hand.
    fn kickers_by_hand(hand: &Hand) -> Vec<u8> {
        let mut values: Vec<u8> = hand.cards().iter().map(|c| c.value as u8).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        let count = |v: u8| values.iter().filter(|&&x| x == v).count();
        let mut grouped = values.clone();
        grouped.sort_by(|a, b| count(*b).cmp(&count(*a)).then(b.cmp(a)));
        grouped.dedup();
        grouped
    }

    #[test]
    fn test_random_pairs_order_kicker_by_kicker() {
        let mut rng = StdRng::seed_from_u64(4321);
        let mut checked = 0;
        for _ in 0..20_000 {
            let a = Hand::random(&mut rng);
            let b = Hand::random(&mut rng);
            if a.category() != b.category() || a.is_straight() {
                continue;
            }
            let mut expected = Ordering::Equal;
            for (x, y) in kickers_by_hand(&a).iter().zip(kickers_by_hand(&b).iter()) {
                if x != y {
                    expected = x.cmp(y);
                    break;
                }
            }
            assert_eq!(expected, a.cmp_strength(&b), "{a} vs {b}");
            checked += 1;
        }
        assert!(checked > 1000);
    }

    #[test]
    fn test_rank_key_from_tuple() {
        let k = key("8S 8D TC TH KH");
        assert_eq!(Ok(k), RankKey::try_from(k.to_tuple().as_slice()));
        for bad in [
            vec![],
            vec![10, 12],
            vec![1, 12, 11, 10],
            vec![1, 12, 11, 10, 9, 8, 7, 6, 5, 4],
            vec![4, 13],
        ] {
            assert_eq!(
                Err(PokerHandError::InvalidRankKey(bad.clone())),
                RankKey::try_from(bad.as_slice())
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_tuple() {
        let k = key("7S 7D AS AC AH");
        assert_eq!("[6,12,5]", serde_json::to_string(&k).unwrap());
        assert_eq!(k, serde_json::from_str::<RankKey>("[6,12,5]").unwrap());

        assert!(serde_json::from_str::<RankKey>("[1,0,0,0,0,0,0,0,0]").is_err());
        assert!(serde_json::from_str::<RankKey>(
            r#"{"category":"Pair","values":["Two","Two","Two","Two","Two"],"len":9}"#
        )
        .is_err());
    }
}

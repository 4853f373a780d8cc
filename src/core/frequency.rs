use crate::core::card::{Card, Value};

/// The multiset of value counts in a hand, stored as "how many distinct
/// values appear exactly `c` times" for `c` in `1..=4`. Index 0 is unused.
///
/// A pair (`{1, 1, 1, 2}`) is `[0, 3, 1, 0, 0]`, a full house (`{2, 3}`) is
/// `[0, 0, 1, 1, 0]`. The signature says nothing about which values hold
/// which counts.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Signature([u8; 5]);

impl Signature {
    /// Five different values: `{1, 1, 1, 1, 1}`
    pub const ALL_DISTINCT: Self = Self([0, 5, 0, 0, 0]);
    /// `{1, 1, 1, 2}`
    pub const PAIR: Self = Self([0, 3, 1, 0, 0]);
    /// `{1, 2, 2}`
    pub const TWO_PAIR: Self = Self([0, 1, 2, 0, 0]);
    /// `{1, 1, 3}`
    pub const THREE_OF_A_KIND: Self = Self([0, 2, 0, 1, 0]);
    /// `{2, 3}`
    pub const FULL_HOUSE: Self = Self([0, 0, 1, 1, 0]);
    /// `{1, 4}`
    pub const FOUR_OF_A_KIND: Self = Self([0, 1, 0, 0, 1]);

    /// How many distinct values show up exactly `count` times.
    pub fn groups_of(&self, count: u8) -> u8 {
        self.0.get(count as usize).copied().unwrap_or(0)
    }

    /// The signature written out as a sorted multiset of counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::Hand;
    ///
    /// let hand = Hand::new_from_str("4D 6S TC JS JC").unwrap();
    /// assert_eq!(vec![1, 1, 1, 2], hand.frequency().signature().multiset());
    /// ```
    pub fn multiset(&self) -> Vec<u8> {
        (1..=4u8)
            .flat_map(|count| std::iter::repeat(count).take(self.groups_of(count) as usize))
            .collect()
    }
}

/// Per value occurrence counts for one five card hand.
///
/// This is computed exactly once when a `Hand` is built. The classifier, the
/// ranking key and the description all read from the same `Frequency`, so
/// they can never disagree about which cards are the group and which are
/// kickers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Frequency {
    counts: [u8; 13],
    signature: Signature,
}

impl Frequency {
    /// Only `Hand` builds these, from cards it has already checked are
    /// distinct.
    pub(crate) fn new(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 13];
        for c in cards {
            counts[c.value as usize] += 1;
        }

        // Now rotate the value to count map.
        let mut signature = [0u8; 5];
        for &count in counts.iter().filter(|&&count| count > 0) {
            if let Some(groups) = signature.get_mut(count as usize) {
                *groups += 1;
            }
        }

        Self {
            counts,
            signature: Signature(signature),
        }
    }

    /// How many cards of `value` are in the hand.
    pub fn count(&self, value: Value) -> u8 {
        self.counts[value as usize]
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Bit set of the values present, bit `n` is `Value::from_u8(n)`.
    pub fn value_set(&self) -> u32 {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .fold(0, |set, (idx, _)| set | (1 << idx))
    }

    /// Values that appear exactly `count` times, highest first.
    pub fn values_with_count(&self, count: u8) -> impl Iterator<Item = Value> + '_ {
        Value::values()
            .into_iter()
            .rev()
            .filter(move |v| self.count(*v) == count)
    }

    /// Every distinct value in the hand ordered by how often it appears and
    /// then by how high it is. For two pair `8S 8D TC TH KH` that is
    /// `Ten, Eight, King`: the groups first, the kickers last, each part high
    /// to low.
    pub fn grouped_values(&self) -> impl Iterator<Item = Value> + '_ {
        (1..=4u8)
            .rev()
            .flat_map(move |count| self.values_with_count(count))
    }
}

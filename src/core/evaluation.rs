use std::cmp::Ordering;
use std::fmt;

use crate::core::category::HandCategory;
use crate::core::describe::describe;
use crate::core::hand::Hand;
use crate::core::rank::RankKey;

/// Everything there is to say about one hand: the category, the ranking
/// key, and the description, all built from a single classification.
///
/// Deserializing only reads `hand`; the rest is rebuilt from it so the
/// parts always agree.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "StoredEvaluation"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Evaluation {
    pub hand: Hand,
    pub category: HandCategory,
    pub key: RankKey,
    pub description: String,
}

impl Evaluation {
    pub fn new(hand: Hand) -> Self {
        let key = hand.rank_key();
        Self {
            hand,
            category: key.category(),
            description: describe(&key),
            key,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StoredEvaluation {
    hand: Hand,
}

#[cfg(feature = "serde")]
impl From<StoredEvaluation> for Evaluation {
    fn from(stored: StoredEvaluation) -> Self {
        Self::new(stored.hand)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.hand, self.description)
    }
}

impl Hand {
    /// Classify and describe the hand in one go.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::{Hand, HandCategory};
    ///
    /// let eval = Hand::new_from_str("4D 6S TC JS JC").unwrap().evaluate();
    /// assert_eq!(HandCategory::Pair, eval.category);
    /// assert_eq!("Pair, Jacks", eval.description);
    /// ```
    pub fn evaluate(&self) -> Evaluation {
        Evaluation::new(*self)
    }
}

/// Compare two hands by strength. `Ordering::Greater` means `a` wins.
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    a.cmp_strength(b)
}

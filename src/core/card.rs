use std::fmt;
use std::str::FromStr;

use crate::core::error::PokerHandError;

/// Card face value, what most people would call the rank of a card.
///
/// The discriminant is the position in the strict order `Two < ... < Ace`,
/// so `Value::Two as u8 == 0` and `Value::Ace as u8 == 12`. Those numbers
/// are the ones used inside of ranking keys.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::Value;
    ///
    /// let values = Value::values();
    /// assert_eq!(Value::Two, values[0]);
    /// assert_eq!(Value::Ace, values[12]);
    /// ```
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Take a u8 in `0..13` and convert it to a value.
    pub fn from_u8(v: u8) -> Option<Self> {
        VALUES.get(v as usize).copied()
    }

    /// Given a character parse that char into a value.
    /// Only the upper case letters are accepted for the face cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('t'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// The English name of a single card of this value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    /// The English name used when several cards of this value are named
    /// together, e.g. "Aces" or "Sixes".
    pub fn plural_name(self) -> &'static str {
        match self {
            Self::Two => "Twos",
            Self::Three => "Threes",
            Self::Four => "Fours",
            Self::Five => "Fives",
            Self::Six => "Sixes",
            Self::Seven => "Sevens",
            Self::Eight => "Eights",
            Self::Nine => "Nines",
            Self::Ten => "Tens",
            Self::Jack => "Jacks",
            Self::Queen => "Queens",
            Self::King => "Kings",
            Self::Ace => "Aces",
        }
    }
}

/// Enum for the four different suits.
/// Suits have no poker order at all. The declaration order only exists
/// so that sorting a hand is deterministic.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Diamonds
    Diamond = 1,
    /// Clubs
    Club = 2,
    /// Hearts
    Heart = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Parse a suit char. Like values this is case sensitive:
    /// only `S`, `D`, `C` and `H` are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('H'));
    /// assert_eq!(None, Suit::from_char('h'));
    /// ```
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'S' => Some(Self::Spade),
            'D' => Some(Self::Diamond),
            'C' => Some(Self::Club),
            'H' => Some(Self::Heart),
            _ => None,
        }
    }

    /// This is the inverse of `Suit::from_char`.
    pub fn to_char(self) -> char {
        match self {
            Self::Spade => 'S',
            Self::Diamond => 'D',
            Self::Club => 'C',
            Self::Heart => 'H',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards order by value first and suit second. That order is only used to
/// keep hands sorted; suits never decide which hand is stronger.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Parse a two character token such as `"AS"` or `"7D"`.
///
/// # Examples
///
/// ```
/// use poker_hands::core::{Card, Suit, Value};
///
/// let card: Card = "TH".parse().unwrap();
/// assert_eq!(Card::new(Value::Ten, Suit::Heart), card);
/// assert_eq!("TH", card.to_string());
/// assert!("10H".parse::<Card>().is_err());
/// ```
impl FromStr for Card {
    type Err = PokerHandError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let malformed = || PokerHandError::MalformedCardToken(token.to_string());
        let mut chars = token.chars();
        let value = chars.next().and_then(Value::from_char).ok_or_else(malformed)?;
        let suit = chars.next().and_then(Suit::from_char).ok_or_else(malformed)?;
        if chars.next().is_some() {
            return Err(malformed());
        }
        Ok(Self { value, suit })
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerHandError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        token.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = <String as serde::Deserialize>::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

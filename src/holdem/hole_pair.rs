use std::fmt;
use std::str::FromStr;

use crate::core::{BotError, Card, cards_from_str};

/// The two private cards one player holds.
///
/// A hole pair is an unordered set: the cards are stored normalized with
/// the higher card first, so the derived `Eq`/`Hash`/`Ord` compare by set
/// equality no matter which order the cards were listed in.
///
/// # Examples
///
/// ```
/// use rangebot::holdem::HolePair;
///
/// let a: HolePair = "AhKd".parse().unwrap();
/// let b: HolePair = "KdAh".parse().unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolePair {
    high: Card,
    low: Card,
}

impl HolePair {
    /// Create a hole pair from two distinct cards, in either order.
    pub fn new(a: Card, b: Card) -> Result<Self, BotError> {
        if a == b {
            return Err(BotError::DuplicateCard(a));
        }
        if a > b {
            Ok(Self { high: a, low: b })
        } else {
            Ok(Self { high: b, low: a })
        }
    }

    pub fn high(&self) -> Card {
        self.high
    }

    pub fn low(&self) -> Card {
        self.low
    }

    pub fn cards(&self) -> [Card; 2] {
        [self.high, self.low]
    }

    pub fn contains(&self, c: Card) -> bool {
        self.high == c || self.low == c
    }

    /// Does either hole card appear among `cards`?
    /// Used to drop range candidates once a board card collides with them.
    pub fn conflicts_with(&self, cards: &[Card]) -> bool {
        cards.iter().any(|c| self.contains(*c))
    }

    pub fn suited(&self) -> bool {
        self.high.suit == self.low.suit
    }

    pub fn is_pair(&self) -> bool {
        self.high.value == self.low.value
    }
}

impl fmt::Display for HolePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)
    }
}

impl FromStr for HolePair {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = cards_from_str(s)?;
        match cards[..] {
            [a, b] => HolePair::new(a, b),
            [_] => Err(BotError::TooFewChars),
            _ => Err(BotError::UnparsedCharsRemaining),
        }
    }
}

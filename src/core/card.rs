use std::fmt;
use std::str::FromStr;

use super::BotError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck, or
    /// generating all possible starting hands.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not sensical.
/// The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'd' => Some(Suit::Diamond),
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Club => 'c',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    ///
    /// # Examples
    ///
    /// ```
    /// use rangebot::core::{Card, Suit, Value};
    ///
    /// let c = Card::new(Value::Ace, Suit::Spade);
    /// assert_eq!("As", c.to_string());
    /// ```
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Every card maps to a unique id in `0..52`.
/// The id is `value * 4 + suit` so that ids sort by value first.
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        (c.value as u8) * 4 + (c.suit as u8)
    }
}

impl From<u8> for Card {
    fn from(id: u8) -> Card {
        debug_assert!(id < 52);
        Card {
            value: VALUES[(id / 4) as usize],
            suit: SUITS[(id % 4) as usize],
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = cards_from_str(s)?;
        match cards[..] {
            [c] => Ok(c),
            _ => Err(BotError::UnparsedCharsRemaining),
        }
    }
}

/// Parse a string of concatenated two-character cards, e.g. `"AsKd2c"`.
///
/// Duplicated cards are rejected since a physical card can appear at most
/// once among hole cards and board.
///
/// # Examples
///
/// ```
/// use rangebot::core::cards_from_str;
///
/// let board = cards_from_str("AsKd2c").unwrap();
/// assert_eq!(3, board.len());
/// ```
pub fn cards_from_str(s: &str) -> Result<Vec<Card>, BotError> {
    let mut chars = s.chars();
    let mut cards: Vec<Card> = Vec::with_capacity(s.len() / 2);

    while let Some(vc) = chars.next() {
        let sc = chars.next().ok_or(BotError::TooFewChars)?;
        let value = Value::from_char(vc).ok_or(BotError::UnexpectedValueChar)?;
        let suit = Suit::from_char(sc).ok_or(BotError::UnexpectedSuitChar)?;
        let card = Card::new(value, suit);
        if cards.contains(&card) {
            return Err(BotError::DuplicateCard(card));
        }
        cards.push(card);
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        // Make sure that equals works
        assert!(c1 == c1);
        // Make sure that the values are ordered
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Make sure that suit is used.
        assert!(c3 > c2);
    }

    #[test]
    fn test_u8_round_trip() {
        for id in 0..52u8 {
            assert_eq!(id, u8::from(Card::from(id)));
        }
        // The id scheme sorts by value first.
        assert_eq!(Card::new(Value::Six, Suit::Club), Card::from(17));
    }

    #[test]
    fn test_parse_display_round_trip() {
        for id in 0..52u8 {
            let c = Card::from(id);
            assert_eq!(c, c.to_string().parse().unwrap());
        }
    }

    #[test]
    fn test_cards_from_str() {
        let cards = cards_from_str("AsKd2c").unwrap();
        assert_eq!(
            vec![
                Card::new(Value::Ace, Suit::Spade),
                Card::new(Value::King, Suit::Diamond),
                Card::new(Value::Two, Suit::Club),
            ],
            cards
        );
    }

    #[test]
    fn test_cards_from_str_rejects_dupes() {
        assert!(matches!(
            cards_from_str("AsAs"),
            Err(BotError::DuplicateCard(_))
        ));
    }

    #[test]
    fn test_cards_from_str_rejects_partial() {
        assert!(matches!(cards_from_str("AsK"), Err(BotError::TooFewChars)));
        assert!(matches!(
            cards_from_str("Xs"),
            Err(BotError::UnexpectedValueChar)
        ));
        assert!(matches!(
            cards_from_str("Ax"),
            Err(BotError::UnexpectedSuitChar)
        ));
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }
}

use std::fmt::Debug;

use super::Card;

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

/// A bitset of cards. Each card is one bit in a 64 bit integer, using the
/// card's `u8` id as the bit index.
///
/// `CardBitSet::default()` is the full 52 card deck; removing every known
/// card from it yields the remaining deck a simulation may draw from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    cards: u64,
}

impl CardBitSet {
    /// Create a new empty bitset
    ///
    /// ```
    /// use rangebot::core::CardBitSet;
    /// let cards = CardBitSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    pub fn insert(&mut self, card: Card) {
        self.cards |= 1 << u8::from(card);
    }

    pub fn remove(&mut self, card: Card) {
        self.cards &= !(1 << u8::from(card));
    }

    /// Is the card in the bitset?
    ///
    /// ```
    /// use rangebot::core::{Card, CardBitSet, Suit, Value};
    ///
    /// let mut cards = CardBitSet::new();
    /// cards.insert(Card::new(Value::Six, Suit::Club));
    /// assert!(cards.contains(Card::new(Value::Six, Suit::Club)));
    /// ```
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }
}

impl Default for CardBitSet {
    /// Create a new bitset with all 52 cards in it
    /// ```
    /// use rangebot::core::CardBitSet;
    ///
    /// assert_eq!(52, CardBitSet::default().count());
    /// ```
    fn default() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

/// The iterator for the CardBitSet.
/// It yields the cards in id order (value first, then suit).
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let card = self.0.trailing_zeros();
        self.0 &= !(1 << card);

        Some(Card::from(card as u8))
    }
}

//! This is the core module. It exports the non-holdem related code.

mod card;
pub use self::card::{Card, Suit, Value, cards_from_str};

mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

mod card_iter;
pub use self::card_iter::CardIter;

mod flat_deck;
pub use self::flat_deck::FlatDeck;

mod rank;
pub use self::rank::{Rank, Rankable};

mod error;
pub use self::error::BotError;

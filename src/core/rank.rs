use super::{Card, CardIter, Value};

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all of the same suit.
    StraightFlush(u32),
}

/// If the value bitset is one of the ten straights, return its strength
/// index (0 = the wheel, 9 = broadway).
fn rank_straight(value_set: u32) -> Option<u32> {
    // The wheel is the only straight that isn't a contiguous run of bits.
    const WHEEL: u32 = (1 << (Value::Ace as u32)) | 0b1111;
    if value_set == WHEEL {
        return Some(0);
    }
    (0u32..9).find(|i| value_set == (0b1_1111 << i)).map(|i| i + 1)
}

/// First value (as a bit index) appearing `count` times in the hand.
fn value_with_count(value_to_count: &[u8; 13], count: u8) -> Option<u32> {
    value_to_count
        .iter()
        .position(|c| *c == count)
        .map(|v| v as u32)
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// Rank a hand of exactly five cards.
    fn rank_five(&self) -> Rank;

    /// Rank the best five card hand choosable from five to seven cards.
    fn rank(&self) -> Rank;
}

impl Rankable for [Card] {
    /// Rank this five card hand. It doesn't do any caching so it's left up
    /// to the user to understand that duplicate work will be done if this
    /// is called more than once.
    fn rank_five(&self) -> Rank {
        debug_assert_eq!(5, self.len());

        // Use for bitsets
        let mut suit_set: u32 = 0;
        let mut value_set: u32 = 0;
        let mut value_to_count = [0u8; 13];
        for c in self.iter() {
            suit_set |= 1 << (c.suit as u32);
            value_set |= 1 << (c.value as u32);
            value_to_count[c.value as usize] += 1;
        }

        // The major deciding factor for hand rank
        // is the number of unique card values.
        let unique_card_count = value_set.count_ones();

        if unique_card_count == 5 {
            // If there are five different cards it can be a straight,
            // a straight flush, a flush, or just a high card.
            let is_flush = suit_set.count_ones() == 1;
            match (rank_straight(value_set), is_flush) {
                (Some(rank), true) => Rank::StraightFlush(rank),
                (Some(rank), false) => Rank::Straight(rank),
                (None, true) => Rank::Flush(value_set),
                (None, false) => Rank::HighCard(value_set),
            }
        } else if unique_card_count == 2 {
            // This can either be full house, or four of a kind.
            match value_with_count(&value_to_count, 3) {
                Some(three_value) => {
                    let major_rank = 1 << three_value;
                    // Remove the card that we have three of from the minor rank.
                    let minor_rank = value_set ^ major_rank;
                    Rank::FullHouse(major_rank << 13 | minor_rank)
                }
                None => {
                    let major_rank =
                        1 << value_with_count(&value_to_count, 4).unwrap_or(0);
                    let minor_rank = value_set ^ major_rank;
                    Rank::FourOfAKind(major_rank << 13 | minor_rank)
                }
            }
        } else if unique_card_count == 3 {
            // This can be three of a kind or two pair.
            match value_with_count(&value_to_count, 3) {
                Some(three_value) => {
                    let major_rank = 1 << three_value;
                    let minor_rank = value_set ^ major_rank;
                    Rank::ThreeOfAKind(major_rank << 13 | minor_rank)
                }
                None => {
                    // Get the values of the two pairs.
                    let mut major_rank: u32 = 0;
                    for (v, count) in value_to_count.iter().enumerate() {
                        if *count == 2 {
                            major_rank |= 1 << v;
                        }
                    }
                    let minor_rank = value_set ^ major_rank;
                    Rank::TwoPair(major_rank << 13 | minor_rank)
                }
            }
        } else {
            // This is unique_card_count == 4
            debug_assert_eq!(4, unique_card_count);
            let major_rank = 1 << value_with_count(&value_to_count, 2).unwrap_or(0);
            let minor_rank = value_set ^ major_rank;
            Rank::OnePair(major_rank << 13 | minor_rank)
        }
    }

    /// Rank a five to seven card hand as the best five card sub-hand.
    fn rank(&self) -> Rank {
        if self.len() == 5 {
            self.rank_five()
        } else {
            CardIter::new(self.to_vec(), 5)
                .map(|combo| combo[..].rank_five())
                .max()
                .unwrap_or(Rank::HighCard(0))
        }
    }
}

impl Rankable for Vec<Card> {
    fn rank_five(&self) -> Rank {
        self[..].rank_five()
    }
    fn rank(&self) -> Rank {
        self[..].rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards_from_str;

    fn rank_str(s: &str) -> Rank {
        cards_from_str(s).unwrap().rank()
    }

    #[test]
    fn test_cmp() {
        assert!(Rank::HighCard(0) < Rank::StraightFlush(0));
        assert!(Rank::HighCard(0) < Rank::FourOfAKind(0));
        assert!(Rank::HighCard(0) < Rank::ThreeOfAKind(0));
    }

    #[test]
    fn test_cmp_high() {
        assert!(Rank::HighCard(0) < Rank::HighCard(100));
    }

    #[test]
    fn test_high_card_hand() {
        let rank = 1 << (Value::Ace as u32)
            | 1 << (Value::Eight as u32)
            | 1 << (Value::Nine as u32)
            | 1 << (Value::Ten as u32)
            | 1 << (Value::Five as u32);
        assert_eq!(Rank::HighCard(rank), rank_str("Ad8h9cTc5c"));
    }

    #[test]
    fn test_flush() {
        let rank = 1 << (Value::Ace as u32)
            | 1 << (Value::Eight as u32)
            | 1 << (Value::Nine as u32)
            | 1 << (Value::Ten as u32)
            | 1 << (Value::Five as u32);
        assert_eq!(Rank::Flush(rank), rank_str("Ad8d9dTd5d"));
    }

    #[test]
    fn test_full_house() {
        let rank = (1 << (Value::Nine as u32)) << 13 | 1 << (Value::Ace as u32);
        assert_eq!(Rank::FullHouse(rank), rank_str("AdAc9d9c9s"));
    }

    #[test]
    fn test_two_pair() {
        let rank = (1 << (Value::Ace as u32) | 1 << (Value::Nine as u32)) << 13
            | 1 << (Value::Ten as u32);
        assert_eq!(Rank::TwoPair(rank), rank_str("AdAc9d9cTs"));
    }

    #[test]
    fn test_one_pair() {
        let rank = (1 << (Value::Ace as u32)) << 13
            | 1 << (Value::Nine as u32)
            | 1 << (Value::Eight as u32)
            | 1 << (Value::Ten as u32);
        assert_eq!(Rank::OnePair(rank), rank_str("AdAc9d8cTs"));
    }

    #[test]
    fn test_four_of_a_kind() {
        let rank = (1 << (Value::Ace as u32)) << 13 | 1 << (Value::Ten as u32);
        assert_eq!(Rank::FourOfAKind(rank), rank_str("AdAcAsAhTs"));
    }

    #[test]
    fn test_wheel() {
        assert_eq!(Rank::Straight(0), rank_str("Ad2c3s4h5s"));
    }

    #[test]
    fn test_straight() {
        assert_eq!(Rank::Straight(1), rank_str("2c3s4h5s6d"));
    }

    #[test]
    fn test_broadway_straight() {
        assert_eq!(Rank::Straight(9), rank_str("TcJsQhKsAd"));
    }

    #[test]
    fn test_three_of_a_kind() {
        let rank = (1 << (Value::Two as u32)) << 13
            | 1 << (Value::Five as u32)
            | 1 << (Value::Six as u32);
        assert_eq!(Rank::ThreeOfAKind(rank), rank_str("2c2s2h5s6d"));
    }

    #[test]
    fn test_seven_card_royal() {
        assert_eq!(Rank::StraightFlush(9), rank_str("AsKsQsJsTs2c2d"));
    }

    #[test]
    fn test_seven_card_picks_best_five() {
        // A pair of aces plus a board that makes a flush.
        assert!(matches!(rank_str("AhAd2c5c8cJcKc"), Rank::Flush(_)));
    }

    #[test]
    fn test_seven_card_matches_max_of_five() {
        for s in ["AsKsQsJsTs2c2d", "AhAd2c5c8cJcKc", "2c3s4h5s6d8h8s"] {
            let cards = cards_from_str(s).unwrap();
            let best = CardIter::new(cards.clone(), 5)
                .map(|combo| combo[..].rank_five())
                .max()
                .unwrap();
            assert_eq!(best, cards.rank());
        }
    }
}

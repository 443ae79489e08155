use super::Card;

/// Iterator over every `num_cards`-sized combination of a card slice.
///
/// Used for enumerating candidate hole pairs, remaining board runouts, and
/// the five card sub-hands of a seven card hand.
#[derive(Debug)]
pub struct CardIter {
    /// All the possible cards that can be dealt
    possible_cards: Vec<Card>,

    /// Set of current offsets being used to create card sets.
    idx: Vec<i64>,

    /// Size of card sets requested.
    num_cards: usize,
}

impl CardIter {
    /// `possible_cards` must hold at least `num_cards` cards and
    /// `num_cards` must be non-zero.
    pub fn new(possible_cards: Vec<Card>, num_cards: usize) -> CardIter {
        debug_assert!(num_cards > 0);
        debug_assert!(possible_cards.len() >= num_cards);
        let mut idx: Vec<i64> = (0..(num_cards as i64)).collect();
        idx[num_cards - 1] -= 1;
        CardIter {
            possible_cards,
            idx,
            num_cards,
        }
    }
}

impl Iterator for CardIter {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        // Keep track of where we are mutating
        let mut current_level = self.num_cards - 1;

        while current_level < self.num_cards {
            // Move the current level forward one.
            self.idx[current_level] += 1;

            // Now check if moving this level forward means that
            // we will need more cards to fill out the rest of the
            // combination than there are.
            let cards_needed_after = self.num_cards - (current_level + 1);
            if self.idx[current_level] as usize
                >= (self.possible_cards.len() - cards_needed_after)
            {
                if current_level == 0 {
                    return None;
                }
                current_level -= 1;
            } else {
                // If we aren't at the end then
                if current_level < self.num_cards - 1 {
                    self.idx[current_level + 1] = self.idx[current_level];
                }
                // Move forward one level
                current_level += 1;
            }
        }

        let result_cards: Vec<Card> = self
            .idx
            .iter()
            .map(|i| self.possible_cards[*i as usize])
            .collect();
        Some(result_cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards_from_str;

    #[test]
    fn test_iter_one() {
        let cards = cards_from_str("2s").unwrap();
        assert_eq!(1, CardIter::new(cards, 1).count());
    }

    #[test]
    fn test_iter_two() {
        let cards = cards_from_str("2s3s4s").unwrap();

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::new(cards.clone(), 2).count());

        // Make sure that everything has two cards and they are different.
        for combo in CardIter::new(cards, 2) {
            assert_eq!(2, combo.len());
            assert!(combo[0] != combo[1]);
        }
    }

    #[test]
    fn test_iter_five_of_seven() {
        let cards = cards_from_str("2s3s4s5s6s7s8s").unwrap();
        // C(7, 5) == 21
        assert_eq!(21, CardIter::new(cards, 5).count());
    }

    #[test]
    fn test_iter_whole_set() {
        let cards = cards_from_str("2s3s4s").unwrap();
        let combos: Vec<Vec<Card>> = CardIter::new(cards.clone(), 3).collect();
        assert_eq!(vec![cards], combos);
    }

    #[test]
    fn test_pairs_from_deck() {
        let deck: Vec<Card> = (0..52u8).map(Card::from).collect();
        // C(52, 2) == 1326
        assert_eq!(1326, CardIter::new(deck, 2).count());
    }
}

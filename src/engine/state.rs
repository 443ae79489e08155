use crate::core::{BotError, Card};
use crate::holdem::HolePair;

use super::action::LegalActions;

/// Match parameters fixed by the external engine.
pub const NUM_ROUNDS: u32 = 1000;
pub const STARTING_STACK: u32 = 200;
pub const BIG_BLIND: u32 = 2;
pub const SMALL_BLIND: u32 = 1;

/// Match-level state: how the whole session is going.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Chips won or lost since the start of the match.
    pub bankroll: i64,
    /// Wall clock seconds left for the whole match.
    pub game_clock: f64,
    /// The current round, from 1 to [`NUM_ROUNDS`].
    pub round_num: u32,
}

/// One betting turn's worth of state, as handed over by the engine.
///
/// `street` is the number of visible board cards: 0 preflop, 3 on the
/// flop, 4 on the turn, 5 on the river. `hands` holds our own hole pair
/// at our seat; the opponent's entry is `None` until a showdown reveal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    pub street: usize,
    pub hands: [Option<HolePair>; 2],
    pub board: Vec<Card>,
    /// Chips each player has put in during the current betting round.
    pub pips: [u32; 2],
    pub stacks: [u32; 2],
    pub min_raise: u32,
    pub max_raise: u32,
    pub legal: LegalActions,
}

impl RoundState {
    /// Our hole pair, or an error if the engine didn't deal us in.
    pub fn hole(&self, seat: usize) -> Result<HolePair, BotError> {
        self.hands[seat].ok_or(BotError::MissingHoleCards)
    }

    /// Chips needed to stay in the pot.
    pub fn continue_cost(&self, seat: usize) -> u32 {
        self.pips[1 - seat].saturating_sub(self.pips[seat])
    }

    /// Everything this player has committed across the whole round.
    pub fn contribution(&self, seat: usize) -> u32 {
        STARTING_STACK - self.stacks[seat]
    }

    pub fn pot_total(&self) -> u32 {
        self.contribution(0) + self.contribution(1)
    }

    /// Clamp a desired raise-to amount into the engine's bounds and the
    /// acting player's stack.
    pub fn clamp_raise(&self, seat: usize, amount: u32) -> u32 {
        amount
            .max(self.min_raise)
            .min(self.max_raise)
            .min(self.pips[seat] + self.stacks[seat])
    }
}

/// The end of a round: chip deltas plus the state before payoffs, with
/// the opponent's hand filled in when it was revealed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalState {
    pub deltas: [i64; 2],
    pub previous: RoundState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards_from_str;
    use crate::engine::action::ActionKind;

    fn round_state(
        street: usize,
        board: &str,
        pips: [u32; 2],
        stacks: [u32; 2],
        legal: LegalActions,
    ) -> RoundState {
        RoundState {
            street,
            hands: [Some("AsKs".parse().unwrap()), None],
            board: cards_from_str(board).unwrap(),
            pips,
            stacks,
            min_raise: pips[0].max(pips[1]) + BIG_BLIND,
            max_raise: STARTING_STACK,
            legal,
        }
    }

    #[test]
    fn test_continue_cost() {
        let legal = LegalActions::empty().with(ActionKind::Call);
        let rs = round_state(0, "", [2, 10], [198, 190], legal);
        assert_eq!(8, rs.continue_cost(0));
        assert_eq!(0, rs.continue_cost(1));
    }

    #[test]
    fn test_pot_total() {
        let legal = LegalActions::empty();
        let rs = round_state(3, "2c7d9h", [0, 0], [180, 170], legal);
        assert_eq!(20, rs.contribution(0));
        assert_eq!(30, rs.contribution(1));
        assert_eq!(50, rs.pot_total());
    }

    #[test]
    fn test_clamp_raise_bounds() {
        let legal = LegalActions::empty().with(ActionKind::Raise);
        let mut rs = round_state(0, "", [1, 2], [199, 198], legal);
        rs.min_raise = 4;
        rs.max_raise = 200;

        assert_eq!(4, rs.clamp_raise(0, 1));
        assert_eq!(50, rs.clamp_raise(0, 50));
        assert_eq!(200, rs.clamp_raise(0, 500));
    }

    #[test]
    fn test_clamp_raise_respects_stack() {
        let legal = LegalActions::empty().with(ActionKind::Raise);
        let mut rs = round_state(3, "2c7d9h", [10, 10], [40, 150], legal);
        rs.min_raise = 20;
        rs.max_raise = 200;

        // Seat zero only has 40 chips behind on top of a 10 chip pip.
        assert_eq!(50, rs.clamp_raise(0, 120));
        assert_eq!(120, rs.clamp_raise(1, 120));
    }

    #[test]
    fn test_missing_hole_cards() {
        let legal = LegalActions::empty();
        let rs = round_state(0, "", [1, 2], [199, 198], legal);
        assert!(rs.hole(0).is_ok());
        assert!(matches!(rs.hole(1), Err(BotError::MissingHoleCards)));
    }
}

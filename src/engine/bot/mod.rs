//! The bots that plug into the external match runner. The baselines exist
//! to measure the heuristic bots against; [`RangeBot`] and [`PotentialBot`]
//! are the ones with actual content.

mod calling;
mod check_fold;
mod potential_bot;
mod range_bot;

pub use calling::CallingBot;
pub use check_fold::CheckFoldBot;
pub use potential_bot::PotentialBot;
pub use range_bot::RangeBot;

use super::action::{Action, ActionKind, LegalActions};
use super::state::{GameState, RoundState, TerminalState};

/// The callback surface the match runner drives. One instance plays one
/// seat for a whole match; calls are strictly sequential, so per-round
/// state lives directly on the implementing struct.
pub trait Bot {
    /// A new round has started and hole cards are dealt.
    fn new_round(&mut self, game: &GameState, round: &RoundState, seat: usize);

    /// The round ended; deltas are final and the opponent's hand may have
    /// been revealed.
    fn round_over(&mut self, game: &GameState, terminal: &TerminalState, seat: usize);

    /// Produce one legal action. Must never panic; a crashed bot forfeits
    /// the match.
    fn get_action(&mut self, game: &GameState, round: &RoundState, seat: usize) -> Action;
}

/// The safest legal action: check when allowed, fold otherwise. Used as
/// the fallback when a decision cycle errors out.
pub(crate) fn safe_action(legal: LegalActions) -> Action {
    if legal.contains(ActionKind::Check) {
        Action::Check
    } else {
        Action::Fold
    }
}

/// The most aggressive affordable action: raise to `raise_to` if the
/// engine allows it and the stack covers it, otherwise call, otherwise
/// check, otherwise fold.
pub(crate) fn aggressive_action(round: &RoundState, seat: usize, raise_to: u32) -> Action {
    let raise_cost = raise_to.saturating_sub(round.pips[seat]);
    if round.legal.contains(ActionKind::Raise) && raise_cost <= round.stacks[seat] {
        Action::Raise(raise_to)
    } else if round.legal.contains(ActionKind::Call)
        && round.continue_cost(seat) <= round.stacks[seat]
    {
        Action::Call
    } else if round.legal.contains(ActionKind::Check) {
        Action::Check
    } else {
        Action::Fold
    }
}

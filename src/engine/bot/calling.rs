use super::{Action, Bot, GameState, RoundState, TerminalState};
use crate::engine::action::ActionKind;

/// Baseline that never folds: calls every bet and checks back otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingBot;

impl Bot for CallingBot {
    fn new_round(&mut self, _game: &GameState, _round: &RoundState, _seat: usize) {}

    fn round_over(&mut self, _game: &GameState, _terminal: &TerminalState, _seat: usize) {}

    fn get_action(&mut self, _game: &GameState, round: &RoundState, _seat: usize) -> Action {
        if round.legal.contains(ActionKind::Call) {
            Action::Call
        } else if round.legal.contains(ActionKind::Check) {
            Action::Check
        } else {
            Action::Fold
        }
    }
}

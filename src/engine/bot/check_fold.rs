use super::{Action, Bot, GameState, RoundState, TerminalState, safe_action};

/// Baseline that never puts a chip in voluntarily: checks when it can,
/// folds when it can't.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckFoldBot;

impl Bot for CheckFoldBot {
    fn new_round(&mut self, _game: &GameState, _round: &RoundState, _seat: usize) {}

    fn round_over(&mut self, _game: &GameState, _terminal: &TerminalState, _seat: usize) {}

    fn get_action(&mut self, _game: &GameState, round: &RoundState, _seat: usize) -> Action {
        safe_action(round.legal)
    }
}

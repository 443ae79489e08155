use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::event;

use crate::core::BotError;
use crate::holdem::{
    OpponentRange, PreflopTable, PrunePolicy, calc_strength, calc_strength_against_range,
};

use super::{
    Action, Bot, GameState, RoundState, TerminalState, aggressive_action, safe_action,
};

/// Iterations for the single-opponent estimate when we open the betting.
const MONTE_CARLO_ITERS: u32 = 100;
/// Iterations per candidate when re-scoring the whole range. One sample is
/// a coarse signal, but the range has over a thousand candidates to score
/// inside one decision budget.
const REFRESH_ITERS: u32 = 1;
/// Iterations per candidate for the strength-against-range signal, which
/// runs over a range already thinned by pruning.
const RANGE_ITERS: u32 = 3;
/// How many standard deviations out the pruning cutoff sits.
const PRUNE_DEVIATIONS: f64 = 0.5;

const PREFLOP_RAISE_FRACTION: f64 = 0.2;
const POSTFLOP_RAISE_FRACTION: f64 = 0.5;

/// The range tracking bot. It keeps a per-round estimate of what the
/// opponent can hold, reads their actions as evidence to prune it, and
/// compares its strength against that range with the pot odds on offer.
///
/// Preflop strength comes from the injected precomputed table; postflop
/// strength is simulated live.
#[derive(Debug)]
pub struct RangeBot {
    table: PreflopTable,
    rng: StdRng,
    range: Option<OpponentRange>,
}

impl RangeBot {
    pub fn new(table: PreflopTable) -> Self {
        Self::with_rng(table, StdRng::from_os_rng())
    }

    pub fn with_rng(table: PreflopTable, rng: StdRng) -> Self {
        Self {
            table,
            rng,
            range: None,
        }
    }

    /// The opponent range for the round in progress, once built.
    pub fn range(&self) -> Option<&OpponentRange> {
        self.range.as_ref()
    }

    fn decide(&mut self, round: &RoundState, seat: usize) -> Result<Action, BotError> {
        let hole = round.hole(seat)?;
        let board = &round.board;
        let continue_cost = round.continue_cost(seat);
        let pot_total = round.pot_total();

        let range = self
            .range
            .get_or_insert_with(|| OpponentRange::generate(hole, board));
        range.refresh(hole, board, REFRESH_ITERS, &mut self.rng)?;

        let fraction = if round.street < 3 {
            PREFLOP_RAISE_FRACTION
        } else {
            POSTFLOP_RAISE_FRACTION
        };
        let raise_to = round.clamp_raise(
            seat,
            (f64::from(round.pips[seat] + continue_cost)
                + fraction * f64::from(pot_total + continue_cost)) as u32,
        );
        let bold = aggressive_action(round, seat, raise_to);

        if continue_cost > 0 {
            // The opponent put chips in; their weakest holdings drop out.
            range.prune(PrunePolicy::suspect_strength(PRUNE_DEVIATIONS));

            let strength = if round.street < 3 {
                self.table.strength(hole)?
            } else {
                calc_strength_against_range(hole, board, RANGE_ITERS, range, &mut self.rng)?
            };
            let pot_odds =
                f64::from(continue_cost) / f64::from(pot_total + continue_cost);

            event!(
                tracing::Level::DEBUG,
                strength,
                pot_odds,
                range_size = range.len(),
                "facing a bet"
            );

            if strength >= pot_odds {
                if strength > 0.5 && self.rng.random_bool(strength.clamp(0.0, 1.0)) {
                    Ok(bold)
                } else {
                    Ok(Action::Call)
                }
            } else {
                Ok(Action::Fold)
            }
        } else {
            if round.street >= 3 {
                // A postflop check is weakness; thin the strong end.
                range.prune(PrunePolicy::suspect_weakness(PRUNE_DEVIATIONS));
            }

            let strength = if round.street < 3 {
                self.table.strength(hole)?
            } else {
                calc_strength(hole, board, MONTE_CARLO_ITERS, &mut self.rng)?
            };

            if self.rng.random_bool(strength.clamp(0.0, 1.0)) {
                Ok(bold)
            } else {
                Ok(Action::Check)
            }
        }
    }
}

impl Bot for RangeBot {
    fn new_round(&mut self, game: &GameState, _round: &RoundState, _seat: usize) {
        self.range = None;
        event!(
            tracing::Level::DEBUG,
            round_num = game.round_num,
            bankroll = game.bankroll,
            "new round"
        );
    }

    fn round_over(&mut self, _game: &GameState, terminal: &TerminalState, seat: usize) {
        event!(
            tracing::Level::DEBUG,
            delta = terminal.deltas[seat],
            "round over"
        );
    }

    fn get_action(&mut self, _game: &GameState, round: &RoundState, seat: usize) -> Action {
        match self.decide(round, seat) {
            Ok(action) if round.legal.allows(action) => action,
            Ok(action) => {
                event!(
                    tracing::Level::WARN,
                    %action,
                    "decided on an illegal action, taking the safe one"
                );
                safe_action(round.legal)
            }
            Err(err) => {
                event!(
                    tracing::Level::WARN,
                    %err,
                    "decision failed, taking the safe action"
                );
                safe_action(round.legal)
            }
        }
    }
}

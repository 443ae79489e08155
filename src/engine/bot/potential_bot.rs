use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::event;

use crate::core::{BotError, Card};
use crate::holdem::{HolePair, OpponentRange, calc_strength, hand_potential};

use super::{
    Action, Bot, GameState, RoundState, TerminalState, aggressive_action, safe_action,
};
use crate::engine::state::{BIG_BLIND, NUM_ROUNDS, SMALL_BLIND};

const MONTE_CARLO_ITERS: u32 = 300;
/// How hard a bet discounts our strength, scaled by its size against the pot.
const SCARY_SCALE: f64 = 0.15;
/// Only raise for value above this adjusted strength.
const AGGRESSION_THRESHOLD: f64 = 0.55;
/// Exhaustive potential over a full candidate set is far too slow for one
/// decision budget, so the candidate set is capped.
const POTENTIAL_MAX_CANDIDATES: usize = 128;

const PREFLOP_RAISE_FRACTION: f64 = 0.2;
const POSTFLOP_RAISE_FRACTION: f64 = 0.3;

/// The aggression exploit needs a sample of this many rounds before it
/// trusts the observed bet rate.
const EXPLOIT_MIN_ROUNDS: u32 = 200;
const EXPLOIT_BET_RATE: f64 = 0.2;
const EXPLOIT_MIN_STRENGTH: f64 = 0.8;

/// Stop playing once the banked lead exceeds this multiple of the blinds
/// still payable; folding every remaining hand locks the win.
const LOCK_MARGIN: f64 = 1.5;

/// Every nth candidate of the sorted range, capped at
/// `POTENTIAL_MAX_CANDIDATES`. Stepping through the whole sorted list
/// keeps the sample spread from the weakest holding to the strongest
/// instead of clustering at one end.
fn potential_candidates(hole: HolePair, board: &[Card]) -> Vec<HolePair> {
    let mut candidates: Vec<HolePair> = OpponentRange::generate(hole, board)
        .candidates()
        .copied()
        .collect();
    candidates.sort();
    if candidates.len() > POTENTIAL_MAX_CANDIDATES {
        let step = candidates.len().div_ceil(POTENTIAL_MAX_CANDIDATES);
        candidates = candidates.into_iter().step_by(step).collect();
    }
    candidates
}

/// The pot odds bot. It plays raw Monte Carlo strength, folds when the
/// price is wrong, and on the flop and turn blends in hand potential so
/// draws are not priced as made hands. Against opponents who bet too
/// often it shoves its strongest late-street hands.
#[derive(Debug)]
pub struct PotentialBot {
    rng: StdRng,
    opp_bets: u32,
    rounds_seen: u32,
}

impl PotentialBot {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            opp_bets: 0,
            rounds_seen: 0,
        }
    }

    fn victory_locked(&self, game: &GameState) -> bool {
        let rounds_left = NUM_ROUNDS.saturating_sub(game.round_num) + 1;
        let blinds_left = f64::from((SMALL_BLIND + BIG_BLIND) * rounds_left);
        game.bankroll as f64 > LOCK_MARGIN * blinds_left
    }

    fn exploit_spot(&self, street: usize, strength: f64) -> bool {
        self.rounds_seen >= EXPLOIT_MIN_ROUNDS
            && f64::from(self.opp_bets) / f64::from(self.rounds_seen) >= EXPLOIT_BET_RATE
            && strength > EXPLOIT_MIN_STRENGTH
            && street >= 4
    }

    fn decide(
        &mut self,
        game: &GameState,
        round: &RoundState,
        seat: usize,
    ) -> Result<Action, BotError> {
        if self.victory_locked(game) {
            event!(
                tracing::Level::DEBUG,
                bankroll = game.bankroll,
                "lead covers the remaining blinds, blinding off"
            );
            return Ok(safe_action(round.legal));
        }

        let hole = round.hole(seat)?;
        let board = &round.board;
        let continue_cost = round.continue_cost(seat);
        let pot_total = round.pot_total();

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

        let strength = calc_strength(hole, board, MONTE_CARLO_ITERS, &mut self.rng)?;

        if continue_cost > 0 {
            self.opp_bets += 1;

            let scary = f64::from(continue_cost) / f64::from(pot_total) * SCARY_SCALE;
            let adjusted = if matches!(round.street, 3 | 4) {
                let candidates = potential_candidates(hole, board);
                let (pos, neg) = hand_potential(hole, board, candidates)?;
                let effective = strength * (1.0 - neg) + (1.0 - strength) * pos;
                (effective - scary).max(0.0)
            } else {
                (strength - scary).max(0.0)
            };
            let pot_odds =
                f64::from(continue_cost) / f64::from(pot_total + continue_cost);

            event!(
                tracing::Level::DEBUG,
                strength,
                adjusted,
                pot_odds,
                "facing a bet"
            );

            if adjusted >= pot_odds {
                if self.exploit_spot(round.street, strength) {
                    event!(
                        tracing::Level::DEBUG,
                        "opponent bets too often, raising the maximum"
                    );
                    return Ok(aggressive_action(
                        round,
                        seat,
                        round.clamp_raise(seat, round.max_raise),
                    ));
                }
                if adjusted > AGGRESSION_THRESHOLD
                    && self.rng.random_bool(adjusted.clamp(0.0, 1.0))
                {
                    Ok(bold)
                } else {
                    Ok(Action::Call)
                }
            } else {
                Ok(Action::Fold)
            }
        } else if self.rng.random_bool(strength.clamp(0.0, 1.0)) {
            Ok(bold)
        } else {
            Ok(Action::Check)
        }
    }
}

impl Default for PotentialBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for PotentialBot {
    fn new_round(&mut self, _game: &GameState, _round: &RoundState, _seat: usize) {}

    fn round_over(&mut self, _game: &GameState, _terminal: &TerminalState, _seat: usize) {
        self.rounds_seen += 1;
    }

    fn get_action(&mut self, game: &GameState, round: &RoundState, seat: usize) -> Action {
        match self.decide(game, round, seat) {
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

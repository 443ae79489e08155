use std::cmp::Ordering;

use rand::Rng;
use tracing::event;

use crate::core::{BotError, Card, CardBitSet, FlatDeck, Rank, Rankable};

use super::{HolePair, OpponentRange};

/// Build the remaining deck for a simulation: the full 52 card deck minus
/// every known or assumed card. Any collision among the known cards is an
/// invariant violation and fails before a single card is drawn.
pub(crate) fn build_deck(
    hole: HolePair,
    opp: Option<HolePair>,
    board: &[Card],
) -> Result<FlatDeck, BotError> {
    if board.len() > 5 {
        return Err(BotError::InvalidBoardSize(board.len()));
    }

    let mut unseen = CardBitSet::default();
    let known = hole
        .cards()
        .into_iter()
        .chain(opp.into_iter().flat_map(|p| p.cards()))
        .chain(board.iter().copied());
    for c in known {
        if !unseen.contains(c) {
            return Err(BotError::DuplicateCard(c));
        }
        unseen.remove(c);
    }

    Ok(unseen.into())
}

/// A win scores two points out of two and a tie scores one. The branches
/// are mutually exclusive: a tie never also counts as a win or a loss.
fn score_trial(ours: Rank, theirs: Rank) -> u64 {
    match ours.cmp(&theirs) {
        Ordering::Greater => 2,
        Ordering::Equal => 1,
        Ordering::Less => 0,
    }
}

/// Estimate with `iters` Monte Carlo trials the probability that `hole`
/// wins at showdown against one random opponent hole pair, with ties
/// counted as half a win.
///
/// Each trial shuffles the remaining deck, draws the opponent's two cards
/// and the rest of the board from the same shuffle, and ranks both final
/// seven card hands. `iters` may be as low as one; the result is then a
/// coarse single-sample signal, which callers trade against their decision
/// time budget. Zero iterations is rejected rather than dividing by zero.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rangebot::holdem::calc_strength;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let aces = "AsAd".parse().unwrap();
/// let strength = calc_strength(aces, &[], 500, &mut rng).unwrap();
/// assert!(strength > 0.5);
/// ```
pub fn calc_strength<R: Rng>(
    hole: HolePair,
    board: &[Card],
    iters: u32,
    rng: &mut R,
) -> Result<f64, BotError> {
    if iters == 0 {
        return Err(BotError::NoIterations);
    }
    let mut deck = build_deck(hole, None, board)?;

    let needed = 2 + (5 - board.len());
    if deck.len() < needed {
        return Err(BotError::InsufficientDeck {
            needed,
            remaining: deck.len(),
        });
    }

    let mut ours: Vec<Card> = Vec::with_capacity(7);
    let mut theirs: Vec<Card> = Vec::with_capacity(7);
    let mut score: u64 = 0;

    for _ in 0..iters {
        deck.shuffle(rng);
        let opp_hole = &deck[..2];
        let runout = &deck[2..needed];

        ours.clear();
        ours.extend_from_slice(&hole.cards());
        ours.extend_from_slice(board);
        ours.extend_from_slice(runout);

        theirs.clear();
        theirs.extend_from_slice(opp_hole);
        theirs.extend_from_slice(board);
        theirs.extend_from_slice(runout);

        score += score_trial(ours.rank(), theirs.rank());
    }

    Ok(score as f64 / (2.0 * f64::from(iters)))
}

/// Same Monte Carlo procedure as [`calc_strength`], but with the opponent
/// hole pair pinned to `opp` instead of drawn from the deck. Only the
/// remaining board cards vary between trials.
pub fn calc_strength_vs<R: Rng>(
    hole: HolePair,
    opp: HolePair,
    board: &[Card],
    iters: u32,
    rng: &mut R,
) -> Result<f64, BotError> {
    if iters == 0 {
        return Err(BotError::NoIterations);
    }
    let mut deck = build_deck(hole, Some(opp), board)?;

    let needed = 5 - board.len();
    if deck.len() < needed {
        return Err(BotError::InsufficientDeck {
            needed,
            remaining: deck.len(),
        });
    }

    let mut ours: Vec<Card> = Vec::with_capacity(7);
    let mut theirs: Vec<Card> = Vec::with_capacity(7);
    let mut score: u64 = 0;

    for _ in 0..iters {
        deck.shuffle(rng);
        let runout = &deck[..needed];

        ours.clear();
        ours.extend_from_slice(&hole.cards());
        ours.extend_from_slice(board);
        ours.extend_from_slice(runout);

        theirs.clear();
        theirs.extend_from_slice(&opp.cards());
        theirs.extend_from_slice(board);
        theirs.extend_from_slice(runout);

        score += score_trial(ours.rank(), theirs.rank());
    }

    Ok(score as f64 / (2.0 * f64::from(iters)))
}

/// Average of "my win probability against this one fixed hand" over every
/// candidate in the opponent range. This is the decision-relevant signal:
/// not how good the hand is in the abstract, but how good it is against
/// what we currently believe the opponent holds.
///
/// An empty range falls back to drawing the opponent from the remaining
/// deck, exactly as [`calc_strength`] does, rather than dividing by zero.
///
/// Candidates are visited in sorted order so RNG draws line up with the
/// same candidates every time; two equal ranges evaluated with equally
/// seeded generators give identical estimates.
pub fn calc_strength_against_range<R: Rng>(
    hole: HolePair,
    board: &[Card],
    iters: u32,
    range: &OpponentRange,
    rng: &mut R,
) -> Result<f64, BotError> {
    if range.is_empty() {
        event!(
            tracing::Level::DEBUG,
            "empty opponent range, falling back to a random opponent"
        );
        return calc_strength(hole, board, iters, rng);
    }

    let mut candidates: Vec<HolePair> = range.candidates().copied().collect();
    candidates.sort();

    let mut total = 0.0;
    for candidate in &candidates {
        total += calc_strength_vs(hole, *candidate, board, iters, rng)?;
    }
    Ok(total / candidates.len() as f64)
}

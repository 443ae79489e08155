use crate::core::{BotError, Card, CardIter, Rank, Rankable};

use super::{HolePair, strength::build_deck};

/// Divide-by-zero guard for the potential formulas. Applied to both
/// denominators so the two potentials are computed symmetrically.
const EPSILON: f64 = 1e-5;

/// Where our hand stands against one fixed opponent holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Ahead = 0,
    Tied = 1,
    Behind = 2,
}

impl Standing {
    fn classify(ours: Rank, theirs: Rank) -> Self {
        match ours.cmp(&theirs) {
            std::cmp::Ordering::Greater => Standing::Ahead,
            std::cmp::Ordering::Equal => Standing::Tied,
            std::cmp::Ordering::Less => Standing::Behind,
        }
    }
}

/// Transition counts over `Standing × Standing`: where we stand against a
/// candidate before the remaining board cards, and where we end up after
/// them. Filled by [`potential_matrix`], transient per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PotentialMatrix {
    counts: [[u64; 3]; 3],
}

impl PotentialMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, now: Standing, later: Standing) {
        self.counts[now as usize][later as usize] += 1;
    }

    pub fn count(&self, now: Standing, later: Standing) -> u64 {
        self.counts[now as usize][later as usize]
    }

    pub fn row_total(&self, now: Standing) -> u64 {
        self.counts[now as usize].iter().sum()
    }

    /// Total transitions recorded: candidates times board completions.
    pub fn trials(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Probability of improving: how often a hand currently behind (or half
    /// credited, tied) ends up ahead (or half credited, tied) once the board
    /// runs out.
    pub fn positive_potential(&self) -> f64 {
        let numerator = self.count(Standing::Behind, Standing::Ahead) as f64
            + self.count(Standing::Behind, Standing::Tied) as f64 / 2.0
            + self.count(Standing::Tied, Standing::Ahead) as f64 / 2.0;
        let denominator = self.row_total(Standing::Behind) as f64
            + self.row_total(Standing::Tied) as f64 / 2.0
            + EPSILON;
        numerator / denominator
    }

    /// Probability of falling behind from a currently winning position.
    pub fn negative_potential(&self) -> f64 {
        let numerator = self.count(Standing::Ahead, Standing::Behind) as f64
            + self.count(Standing::Ahead, Standing::Tied) as f64 / 2.0
            + self.count(Standing::Tied, Standing::Behind) as f64 / 2.0;
        let denominator = self.row_total(Standing::Ahead) as f64
            + self.row_total(Standing::Tied) as f64 / 2.0
            + EPSILON;
        numerator / denominator
    }
}

/// Exhaustively fill the transition matrix for `hole` on a flop or turn
/// board against every candidate holding.
///
/// For each candidate we classify the current standing using only the
/// cards on the table, then enumerate every completion of the remaining
/// board (all turn and river pairs on the flop, every river on the turn)
/// and classify again. Candidates that collide with our cards or the
/// board are impossible holdings and are skipped.
pub fn potential_matrix<I>(
    hole: HolePair,
    board: &[Card],
    candidates: I,
) -> Result<PotentialMatrix, BotError>
where
    I: IntoIterator<Item = HolePair>,
{
    if !matches!(board.len(), 3 | 4) {
        return Err(BotError::PotentialBoardSize(board.len()));
    }
    let missing = 5 - board.len();
    let dealt = 2 + board.len();

    let mut matrix = PotentialMatrix::new();
    let mut ours: Vec<Card> = Vec::with_capacity(7);
    let mut theirs: Vec<Card> = Vec::with_capacity(7);

    for opp in candidates {
        if opp.conflicts_with(&hole.cards()) || opp.conflicts_with(board) {
            continue;
        }

        ours.clear();
        ours.extend_from_slice(&hole.cards());
        ours.extend_from_slice(board);
        theirs.clear();
        theirs.extend_from_slice(&opp.cards());
        theirs.extend_from_slice(board);

        let now = Standing::classify(ours.rank(), theirs.rank());

        let deck = build_deck(hole, Some(opp), board)?;
        for completion in CardIter::new(deck[..].to_vec(), missing) {
            ours.truncate(dealt);
            ours.extend_from_slice(&completion);
            theirs.truncate(dealt);
            theirs.extend_from_slice(&completion);

            matrix.record(now, Standing::classify(ours.rank(), theirs.rank()));
        }
    }

    Ok(matrix)
}

/// Positive and negative potential of `hole` on a flop or turn board
/// against a candidate set.
///
/// An empty candidate set leaves the matrix empty, which the epsilon
/// guarded formulas turn into `(0.0, 0.0)` rather than a division fault.
pub fn hand_potential<I>(
    hole: HolePair,
    board: &[Card],
    candidates: I,
) -> Result<(f64, f64), BotError>
where
    I: IntoIterator<Item = HolePair>,
{
    let matrix = potential_matrix(hole, board, candidates)?;
    Ok((matrix.positive_potential(), matrix.negative_potential()))
}

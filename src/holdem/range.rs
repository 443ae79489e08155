use std::collections::{HashMap, HashSet};

use rand::Rng;
use tracing::event;

use crate::core::{BotError, Card, CardBitSet, CardIter};

use super::{HolePair, calc_strength_vs};

/// Which tail of the strength distribution a prune removes.
///
/// Strengths in the map are each candidate's win probability against our
/// own hand. An opponent who bets is advertising strength, so we drop the
/// candidates that fare worst against us (`Below`). An opponent who
/// declines to bet is advertising weakness, so we drop the candidates
/// that fare best (`Above`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneDirection {
    Below,
    Above,
}

/// A pruning rule: drop candidates more than `deviations` standard
/// deviations out on the chosen side of the mean.
///
/// The cutoff adapts to how spread out the current range is, so a tight
/// range with little variance is barely touched while a wide uncertain
/// range loses its clearly inconsistent candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrunePolicy {
    pub direction: PruneDirection,
    pub deviations: f64,
}

impl PrunePolicy {
    /// The opponent put chips in; remove candidates weaker than
    /// `mean + deviations * stddev` against our hand.
    pub fn suspect_strength(deviations: f64) -> Self {
        Self {
            direction: PruneDirection::Below,
            deviations,
        }
    }

    /// The opponent checked; remove candidates stronger than
    /// `mean - deviations * stddev` against our hand.
    pub fn suspect_weakness(deviations: f64) -> Self {
        Self {
            direction: PruneDirection::Above,
            deviations,
        }
    }
}

/// The set of hole pairs the opponent could still hold, with an estimated
/// strength against our own hand for each.
///
/// The candidate set and the strength map move in lockstep: discarding a
/// candidate drops its score, and scores exist only for current
/// candidates. Strengths are filled in by [`OpponentRange::refresh`] and
/// consumed by [`OpponentRange::prune`], which interprets observed actions
/// as evidence about which candidates the opponent can still hold.
#[derive(Debug, Clone, Default)]
pub struct OpponentRange {
    candidates: HashSet<HolePair>,
    strengths: HashMap<HolePair, f64>,
}

impl OpponentRange {
    /// Every hole pair the opponent could hold given our cards and the
    /// board: all two card combinations of the unseen deck. Preflop that
    /// is 1225 candidates.
    pub fn generate(my_hole: HolePair, board: &[Card]) -> Self {
        let mut unseen = CardBitSet::default();
        for c in my_hole.cards() {
            unseen.remove(c);
        }
        for c in board {
            unseen.remove(*c);
        }

        let remaining: Vec<Card> = unseen.into_iter().collect();
        let candidates: HashSet<HolePair> = CardIter::new(remaining, 2)
            .filter_map(|combo| HolePair::new(combo[0], combo[1]).ok())
            .collect();

        Self {
            candidates,
            strengths: HashMap::new(),
        }
    }

    /// A range over an explicit candidate set, unscored.
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = HolePair>,
    {
        Self {
            candidates: candidates.into_iter().collect(),
            strengths: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn contains(&self, pair: HolePair) -> bool {
        self.candidates.contains(&pair)
    }

    pub fn candidates(&self) -> impl Iterator<Item = &HolePair> {
        self.candidates.iter()
    }

    /// The last refreshed strength of a candidate, if it has been scored.
    pub fn strength_of(&self, pair: HolePair) -> Option<f64> {
        self.strengths.get(&pair).copied()
    }

    /// Drop every candidate that uses one of `cards`. Called when new
    /// board cards appear: the opponent cannot hold a card we can see.
    pub fn discard_conflicts(&mut self, cards: &[Card]) {
        let removed: Vec<HolePair> = self
            .candidates
            .iter()
            .filter(|p| p.conflicts_with(cards))
            .copied()
            .collect();
        for pair in removed {
            self.candidates.remove(&pair);
            self.strengths.remove(&pair);
        }
    }

    /// Re-score every candidate: how often would this exact holding beat
    /// our hand on a random runout? Candidates that conflict with the
    /// board or our hole cards are discarded first, so the Monte Carlo
    /// layer never sees an impossible deal.
    pub fn refresh<R: Rng>(
        &mut self,
        my_hole: HolePair,
        board: &[Card],
        iters: u32,
        rng: &mut R,
    ) -> Result<(), BotError> {
        self.discard_conflicts(board);
        self.discard_conflicts(&my_hole.cards());

        // Score in sorted order; set iteration order varies per instance
        // and would break reproducibility under a seeded generator.
        let mut snapshot: Vec<HolePair> = self.candidates.iter().copied().collect();
        snapshot.sort();
        for candidate in snapshot {
            let strength = calc_strength_vs(candidate, my_hole, board, iters, rng)?;
            self.strengths.insert(candidate, strength);
        }
        Ok(())
    }

    /// Remove the candidates the opponent's last action makes implausible.
    /// Returns how many were removed.
    ///
    /// The cutoff is `mean + deviations * stddev` when suspecting strength
    /// and `mean - deviations * stddev` when suspecting weakness, over the
    /// scored candidates. A range with fewer than two scored candidates is
    /// left untouched; there is no distribution to cut against.
    pub fn prune(&mut self, policy: PrunePolicy) -> usize {
        let Some((mean, stddev)) = self.stats() else {
            return 0;
        };

        let removed: Vec<HolePair> = match policy.direction {
            PruneDirection::Below => {
                let cutoff = mean + policy.deviations * stddev;
                self.candidates
                    .iter()
                    .filter(|p| {
                        self.strengths
                            .get(p)
                            .is_some_and(|s| *s < cutoff)
                    })
                    .copied()
                    .collect()
            }
            PruneDirection::Above => {
                let cutoff = mean - policy.deviations * stddev;
                self.candidates
                    .iter()
                    .filter(|p| {
                        self.strengths
                            .get(p)
                            .is_some_and(|s| *s > cutoff)
                    })
                    .copied()
                    .collect()
            }
        };

        for pair in &removed {
            self.candidates.remove(pair);
            self.strengths.remove(pair);
        }

        event!(
            tracing::Level::DEBUG,
            removed = removed.len(),
            remaining = self.candidates.len(),
            "pruned opponent range"
        );

        removed.len()
    }

    /// Mean and population standard deviation of the scored strengths.
    /// `None` with fewer than two scores.
    fn stats(&self) -> Option<(f64, f64)> {
        let scored: Vec<f64> = self
            .candidates
            .iter()
            .filter_map(|p| self.strengths.get(p).copied())
            .collect();
        if scored.len() < 2 {
            return None;
        }

        let n = scored.len() as f64;
        let mean = scored.iter().sum::<f64>() / n;
        let variance = scored.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        Some((mean, variance.sqrt()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards_from_str;

    use rand::{SeedableRng, rngs::StdRng};

    fn pair(s: &str) -> HolePair {
        s.parse().unwrap()
    }

    #[test]
    fn test_generate_preflop_size() {
        let range = OpponentRange::generate(pair("AsKs"), &[]);
        // Two cards out of the fifty we can't see.
        assert_eq!(1225, range.len());
        assert!(range.candidates().all(|p| !p.contains("As".parse().unwrap())));
        assert!(range.candidates().all(|p| !p.contains("Ks".parse().unwrap())));
    }

    #[test]
    fn test_generate_excludes_board() {
        let board = cards_from_str("2c7d9h").unwrap();
        let range = OpponentRange::generate(pair("AsKs"), &board);
        // 47 unseen cards, choose two.
        assert_eq!(1081, range.len());
        assert!(!range.contains(pair("2c3c")));
    }

    #[test]
    fn test_discard_conflicts() {
        let mut range =
            OpponentRange::from_candidates([pair("AhKh"), pair("QdQc"), pair("Ah2d")]);
        let turn = cards_from_str("Ah").unwrap();
        range.discard_conflicts(&turn);

        assert_eq!(1, range.len());
        assert!(range.contains(pair("QdQc")));
    }

    #[test]
    fn test_refresh_scores_every_candidate() {
        let mut range =
            OpponentRange::from_candidates([pair("AhAd"), pair("7h2d"), pair("QcJc")]);
        let mut rng = StdRng::seed_from_u64(17);
        range.refresh(pair("QsQh"), &[], 100, &mut rng).unwrap();

        for candidate in range.candidates() {
            let s = range.strength_of(*candidate).unwrap();
            assert!((0.0..=1.0).contains(&s), "strength {s} out of range");
        }
    }

    #[test]
    fn test_refresh_discards_conflicted_candidates() {
        let mut range = OpponentRange::from_candidates([pair("AhAd"), pair("QsJs")]);
        let mut rng = StdRng::seed_from_u64(17);
        // QsJs shares a card with our hole pair and must not be simulated.
        range.refresh(pair("QsQh"), &[], 50, &mut rng).unwrap();

        assert_eq!(1, range.len());
        assert!(range.contains(pair("AhAd")));
    }

    #[test]
    fn test_refresh_is_deterministic_under_a_seed() {
        // Equal ranges refreshed with equally seeded generators must score
        // every candidate identically, whatever order the sets hash in.
        let mut range_one = OpponentRange::generate(pair("QsQh"), &[]);
        let mut range_two = OpponentRange::generate(pair("QsQh"), &[]);

        let mut rng_one = StdRng::seed_from_u64(42);
        let mut rng_two = StdRng::seed_from_u64(42);
        range_one.refresh(pair("QsQh"), &[], 1, &mut rng_one).unwrap();
        range_two.refresh(pair("QsQh"), &[], 1, &mut rng_two).unwrap();

        for candidate in range_one.candidates() {
            assert_eq!(
                range_one.strength_of(*candidate),
                range_two.strength_of(*candidate),
                "diverging score for {candidate}"
            );
        }
    }

    #[test]
    fn test_prune_suspect_strength_drops_weak() {
        let mut range = OpponentRange::from_candidates([pair("AhAd"), pair("7h2d")]);
        let mut rng = StdRng::seed_from_u64(99);
        range.refresh(pair("QsQh"), &[], 200, &mut rng).unwrap();

        let removed = range.prune(PrunePolicy::suspect_strength(0.0));

        assert_eq!(1, removed);
        assert!(range.contains(pair("AhAd")));
        assert!(!range.contains(pair("7h2d")));
    }

    #[test]
    fn test_prune_suspect_weakness_drops_strong() {
        let mut range = OpponentRange::from_candidates([pair("AhAd"), pair("7h2d")]);
        let mut rng = StdRng::seed_from_u64(99);
        range.refresh(pair("QsQh"), &[], 200, &mut rng).unwrap();

        let removed = range.prune(PrunePolicy::suspect_weakness(0.0));

        assert_eq!(1, removed);
        assert!(range.contains(pair("7h2d")));
        assert!(!range.contains(pair("AhAd")));
    }

    #[test]
    fn test_pruned_candidates_never_return() {
        let mut range = OpponentRange::from_candidates([pair("AhAd"), pair("7h2d")]);
        let mut rng = StdRng::seed_from_u64(99);
        range.refresh(pair("QsQh"), &[], 200, &mut rng).unwrap();
        range.prune(PrunePolicy::suspect_strength(0.0));
        assert!(!range.contains(pair("7h2d")));

        // A later refresh re-scores survivors but never grows the set.
        let board = cards_from_str("2c7c9h").unwrap();
        range.refresh(pair("QsQh"), &board, 50, &mut rng).unwrap();
        assert!(!range.contains(pair("7h2d")));
        assert!(range.strength_of(pair("7h2d")).is_none());
        assert_eq!(1, range.len());
    }

    #[test]
    fn test_prune_unscored_is_noop() {
        let mut range = OpponentRange::from_candidates([pair("AhAd"), pair("7h2d")]);
        assert_eq!(0, range.prune(PrunePolicy::suspect_strength(0.0)));
        assert_eq!(2, range.len());
    }

    #[test]
    fn test_prune_single_candidate_is_noop() {
        let mut range = OpponentRange::from_candidates([pair("AhAd")]);
        let mut rng = StdRng::seed_from_u64(4);
        range.refresh(pair("QsQh"), &[], 50, &mut rng).unwrap();

        assert_eq!(0, range.prune(PrunePolicy::suspect_strength(1.0)));
        assert_eq!(1, range.len());
    }

    #[test]
    fn test_wide_deviations_prune_less() {
        let mut strict = OpponentRange::generate(pair("QsQh"), &[]);
        let mut rng = StdRng::seed_from_u64(7);
        // Score a slice of the range only, enough for a distribution.
        let sample: Vec<HolePair> = strict.candidates().take(40).copied().collect();
        strict = OpponentRange::from_candidates(sample);
        strict.refresh(pair("QsQh"), &[], 50, &mut rng).unwrap();
        let mut loose = strict.clone();

        let removed_strict = strict.prune(PrunePolicy::suspect_strength(0.5));
        let removed_loose = loose.prune(PrunePolicy::suspect_strength(-2.0));

        assert!(removed_loose <= removed_strict);
    }
}

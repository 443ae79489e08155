//! Hold'em specific code: hole pairs, Monte Carlo strength estimation,
//! opponent range bookkeeping, hand potential, and preflop lookup tables.

mod hole_pair;
pub use self::hole_pair::HolePair;

mod strength;
pub use self::strength::{calc_strength, calc_strength_against_range, calc_strength_vs};

mod range;
pub use self::range::{OpponentRange, PruneDirection, PrunePolicy};

mod potential;
pub use self::potential::{PotentialMatrix, Standing, hand_potential, potential_matrix};

mod starting_hand;
pub use self::starting_hand::{PreflopTable, StartingHand, Suitedness};

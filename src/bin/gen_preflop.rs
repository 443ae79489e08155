//! Regenerate the preflop strength table. Prints `key,winrate` rows for
//! all 169 canonical starting hands to stdout; redirect into a file and
//! hand that file to `PreflopTable::load`.

use rand::SeedableRng;
use rand::rngs::StdRng;

use rangebot::core::BotError;
use rangebot::holdem::{StartingHand, calc_strength};

const ITERS_PER_HAND: u32 = 2_000;

fn main() -> Result<(), BotError> {
    let mut rng = StdRng::from_os_rng();

    println!("# preflop win rates vs one random hand, {ITERS_PER_HAND} trials per concrete pair");
    for hand in StartingHand::all() {
        let concrete = hand.possible_hands();
        let mut total = 0.0;
        for pair in &concrete {
            total += calc_strength(*pair, &[], ITERS_PER_HAND, &mut rng)?;
        }
        let strength = total / concrete.len() as f64;
        println!("{hand},{strength:.4}");
    }

    Ok(())
}

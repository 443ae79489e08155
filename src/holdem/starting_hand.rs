use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::{BotError, Card, Suit, Value};

use super::HolePair;

/// Whether the two hole cards share a suit. Pairs never do, so a pair
/// carries `OffSuit` and suited pairs are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suitedness {
    Suited,
    OffSuit,
}

/// A canonical preflop hand class, written `"AA"`, `"AKs"` or `"AKo"`.
///
/// The 1326 concrete hole pairs collapse into 169 of these classes, which
/// is what the precomputed preflop strength table is keyed by.
///
/// # Examples
///
/// ```
/// use rangebot::holdem::{HolePair, StartingHand};
///
/// let pair: HolePair = "KdAh".parse().unwrap();
/// let hand = StartingHand::from(pair);
/// assert_eq!("AKo", hand.to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingHand {
    high: Value,
    low: Value,
    suitedness: Suitedness,
}

impl StartingHand {
    /// Build a starting hand from two values in either order.
    pub fn new(a: Value, b: Value, suitedness: Suitedness) -> Result<Self, BotError> {
        let (high, low) = if a >= b { (a, b) } else { (b, a) };
        // Can't have a suited pair. Not unless you're cheating.
        if high == low && suitedness == Suitedness::Suited {
            return Err(BotError::InvalidSuitedPairs);
        }
        Ok(Self {
            high,
            low,
            suitedness,
        })
    }

    pub fn high(&self) -> Value {
        self.high
    }

    pub fn low(&self) -> Value {
        self.low
    }

    pub fn suitedness(&self) -> Suitedness {
        self.suitedness
    }

    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    fn suited_hands(&self) -> Vec<HolePair> {
        Suit::suits()
            .iter()
            .filter_map(|s| {
                HolePair::new(
                    Card {
                        value: self.high,
                        suit: *s,
                    },
                    Card {
                        value: self.low,
                        suit: *s,
                    },
                )
                .ok()
            })
            .collect()
    }

    fn offsuit_hands(&self) -> Vec<HolePair> {
        let suits = Suit::suits();
        let mut hands = Vec::with_capacity(if self.is_pair() { 6 } else { 12 });
        for (i, suit_one) in suits.iter().enumerate() {
            for suit_two in &suits[i + 1..] {
                hands.extend(
                    HolePair::new(
                        Card {
                            value: self.high,
                            suit: *suit_one,
                        },
                        Card {
                            value: self.low,
                            suit: *suit_two,
                        },
                    )
                    .ok(),
                );
                // If this isn't a pair then the flipped suits are distinct.
                if !self.is_pair() {
                    hands.extend(
                        HolePair::new(
                            Card {
                                value: self.high,
                                suit: *suit_two,
                            },
                            Card {
                                value: self.low,
                                suit: *suit_one,
                            },
                        )
                        .ok(),
                    );
                }
            }
        }
        hands
    }

    /// Every concrete hole pair in this class: four for a suited hand,
    /// six for a pair, twelve for an offsuit non-pair.
    pub fn possible_hands(&self) -> Vec<HolePair> {
        match self.suitedness {
            Suitedness::Suited => self.suited_hands(),
            Suitedness::OffSuit => self.offsuit_hands(),
        }
    }

    /// All 169 canonical starting hands.
    pub fn all() -> Vec<StartingHand> {
        let mut hands = Vec::with_capacity(169);
        let values = Value::values();
        for (i, low) in values.iter().enumerate() {
            for high in &values[i..] {
                hands.push(StartingHand {
                    high: *high,
                    low: *low,
                    suitedness: Suitedness::OffSuit,
                });
                if high != low {
                    hands.push(StartingHand {
                        high: *high,
                        low: *low,
                        suitedness: Suitedness::Suited,
                    });
                }
            }
        }
        hands
    }
}

impl From<HolePair> for StartingHand {
    fn from(pair: HolePair) -> Self {
        // A pair can never be suited, so this can't build the rejected
        // suited-pair combination.
        let suitedness = if pair.suited() {
            Suitedness::Suited
        } else {
            Suitedness::OffSuit
        };
        Self {
            high: pair.high().value,
            low: pair.low().value,
            suitedness,
        }
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high.to_char(), self.low.to_char())?;
        if !self.is_pair() {
            let marker = match self.suitedness {
                Suitedness::Suited => 's',
                Suitedness::OffSuit => 'o',
            };
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}

impl FromStr for StartingHand {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        match chars[..] {
            [a, b] => {
                let high = Value::from_char(a).ok_or(BotError::UnexpectedValueChar)?;
                let low = Value::from_char(b).ok_or(BotError::UnexpectedValueChar)?;
                if high != low {
                    return Err(BotError::MissingSuitedness(s.to_string()));
                }
                StartingHand::new(high, low, Suitedness::OffSuit)
            }
            [a, b, m] => {
                let high = Value::from_char(a).ok_or(BotError::UnexpectedValueChar)?;
                let low = Value::from_char(b).ok_or(BotError::UnexpectedValueChar)?;
                let suitedness = match m {
                    's' => Suitedness::Suited,
                    'o' => Suitedness::OffSuit,
                    _ => return Err(BotError::MissingSuitedness(s.to_string())),
                };
                StartingHand::new(high, low, suitedness)
            }
            [_] | [] => Err(BotError::TooFewChars),
            _ => Err(BotError::UnparsedCharsRemaining),
        }
    }
}

/// Precomputed preflop win rates, keyed by canonical starting hand.
///
/// Loaded once at bot construction and read-only after that. The rows are
/// `key,winrate` lines as produced by the `gen_preflop` binary. A lookup
/// miss means the table or the canonicalization is broken, so it fails
/// loudly instead of returning a default.
#[derive(Debug, Clone, Default)]
pub struct PreflopTable {
    strengths: HashMap<StartingHand, f64>,
}

impl PreflopTable {
    /// Parse `key,winrate` rows. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, BotError> {
        let mut strengths = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once(',')
                .ok_or_else(|| BotError::InvalidTableRow(line.to_string()))?;
            let hand: StartingHand = key.trim().parse()?;
            let strength: f64 = value
                .trim()
                .parse()
                .map_err(|_| BotError::InvalidTableRow(line.to_string()))?;
            if strengths.insert(hand, strength).is_some() {
                return Err(BotError::DuplicateTableRow(hand.to_string()));
            }
        }
        Ok(Self { strengths })
    }

    pub fn load(path: &Path) -> Result<Self, BotError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// The precomputed win rate for the class this hole pair belongs to.
    pub fn strength(&self, pair: HolePair) -> Result<f64, BotError> {
        let hand = StartingHand::from(pair);
        self.strengths
            .get(&hand)
            .copied()
            .ok_or_else(|| BotError::UnknownStartingHand(hand.to_string()))
    }

    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn test_all_is_169() {
        let all = StartingHand::all();
        assert_eq!(169, all.len());
        let unique: HashSet<StartingHand> = all.into_iter().collect();
        assert_eq!(169, unique.len());
    }

    #[test]
    fn test_all_expands_to_every_hole_pair() {
        let total: usize = StartingHand::all()
            .iter()
            .map(|h| h.possible_hands().len())
            .sum();
        assert_eq!(1326, total);
    }

    #[test]
    fn test_pair_has_six_hands() {
        let hand: StartingHand = "AA".parse().unwrap();
        assert_eq!(6, hand.possible_hands().len());
    }

    #[test]
    fn test_suited_has_four_hands() {
        let hand: StartingHand = "AKs".parse().unwrap();
        let hands = hand.possible_hands();
        assert_eq!(4, hands.len());
        assert!(hands.iter().all(|p| p.suited()));
    }

    #[test]
    fn test_offsuit_has_twelve_hands() {
        let hand: StartingHand = "AKo".parse().unwrap();
        let hands = hand.possible_hands();
        assert_eq!(12, hands.len());
        assert!(hands.iter().all(|p| !p.suited()));
    }

    #[test]
    fn test_display_round_trip() {
        for hand in StartingHand::all() {
            let parsed: StartingHand = hand.to_string().parse().unwrap();
            assert_eq!(hand, parsed);
        }
    }

    #[test]
    fn test_canonicalize_hole_pairs() {
        let suited: HolePair = "KhAh".parse().unwrap();
        assert_eq!("AKs", StartingHand::from(suited).to_string());

        let offsuit: HolePair = "AhKd".parse().unwrap();
        assert_eq!("AKo", StartingHand::from(offsuit).to_string());

        let pocket: HolePair = "AhAd".parse().unwrap();
        assert_eq!("AA", StartingHand::from(pocket).to_string());
    }

    #[test]
    fn test_rejects_suited_pair() {
        assert!(matches!(
            "AAs".parse::<StartingHand>(),
            Err(BotError::InvalidSuitedPairs)
        ));
    }

    #[test]
    fn test_rejects_missing_suitedness() {
        assert!(matches!(
            "AK".parse::<StartingHand>(),
            Err(BotError::MissingSuitedness(_))
        ));
    }

    #[test]
    fn test_table_parse_and_lookup() {
        let table = PreflopTable::parse("# winrates\nAA,0.85\nAKs,0.67\nAKo,0.65\n")
            .unwrap();
        assert_eq!(3, table.len());

        let aces: HolePair = "AsAd".parse().unwrap();
        assert_eq!(0.85, table.strength(aces).unwrap());

        let suited: HolePair = "AhKh".parse().unwrap();
        assert_eq!(0.67, table.strength(suited).unwrap());
    }

    #[test]
    fn test_table_lookup_miss_is_loud() {
        let table = PreflopTable::parse("AA,0.85\n").unwrap();
        let missing: HolePair = "7c2d".parse().unwrap();
        assert!(matches!(
            table.strength(missing),
            Err(BotError::UnknownStartingHand(_))
        ));
    }

    #[test]
    fn test_table_rejects_duplicate_rows() {
        assert!(matches!(
            PreflopTable::parse("AA,0.85\nAA,0.80\n"),
            Err(BotError::DuplicateTableRow(_))
        ));
    }

    #[test]
    fn test_table_rejects_malformed_rows() {
        assert!(matches!(
            PreflopTable::parse("AA 0.85\n"),
            Err(BotError::InvalidTableRow(_))
        ));
        assert!(matches!(
            PreflopTable::parse("AA,not-a-number\n"),
            Err(BotError::InvalidTableRow(_))
        ));
    }

    #[test]
    fn test_table_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "AA,0.85").unwrap();
        writeln!(file, "72o,0.32").unwrap();
        file.flush().unwrap();

        let table = PreflopTable::load(file.path()).unwrap();
        assert_eq!(2, table.len());

        let worst: HolePair = "7c2d".parse().unwrap();
        assert_eq!(0.32, table.strength(worst).unwrap());
    }
}

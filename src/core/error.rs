use thiserror::Error;

use super::Card;

/// Crate wide error type. Uses `thiserror` to provide readable messages.
///
/// Validation errors from the estimation layer (duplicate cards, short
/// decks) indicate a malformed decision state; bots catch them at the
/// decision boundary and fall back to the safest legal action.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} is already in use")]
    DuplicateCard(Card),
    #[error("A board has at most five cards, got {0}")]
    InvalidBoardSize(usize),
    #[error("Hand potential needs a flop or turn board, got {0} cards")]
    PotentialBoardSize(usize),
    #[error("The deck has {remaining} cards left but {needed} are needed")]
    InsufficientDeck { needed: usize, remaining: usize },
    #[error("Monte Carlo estimation needs at least one iteration")]
    NoIterations,
    #[error("Pairs can't be suited.")]
    InvalidSuitedPairs,
    #[error("A starting hand needs a suitedness marker: {0}")]
    MissingSuitedness(String),
    #[error("No precomputed strength for starting hand {0}")]
    UnknownStartingHand(String),
    #[error("Malformed preflop table row: {0}")]
    InvalidTableRow(String),
    #[error("Preflop table defines {0} twice")]
    DuplicateTableRow(String),
    #[error("The acting player has no hole cards")]
    MissingHoleCards,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

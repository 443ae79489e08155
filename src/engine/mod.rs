//! The engine-facing surface: the state types the external match runner
//! hands over each turn, the closed action vocabulary it accepts back,
//! and the bots that map one to the other. The wire protocol between bot
//! and runner lives outside this crate.

mod action;
pub use self::action::{Action, ActionKind, LegalActions};

pub mod state;
pub use self::state::{
    BIG_BLIND, GameState, NUM_ROUNDS, RoundState, SMALL_BLIND, STARTING_STACK,
    TerminalState,
};

mod bot;
pub use self::bot::{Bot, CallingBot, CheckFoldBot, PotentialBot, RangeBot};

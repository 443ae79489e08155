//! Heuristic heads-up Texas hold'em bots.
//!
//! The interesting part of this crate is the opponent-range estimation and
//! hand-strength evaluation subsystem in [`holdem`]: Monte Carlo win
//! probability estimation against a random or a pinned opponent, strength
//! against an explicit candidate range, range generation and pruning, and
//! positive/negative hand potential.
//!
//! [`core`] holds the poker-agnostic card machinery, and [`engine`] holds
//! the value types a game engine feeds to a bot plus the bots themselves.
//! The engine's round state machine and the bot/engine transport are
//! external collaborators and are not part of this crate.

/// Poker-agnostic card, deck, and hand ranking code.
pub mod core;
/// The engine-facing surface: state types, actions, and the bots.
pub mod engine;
/// Hold'em strength estimation, opponent ranges, and hand potential.
pub mod holdem;

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for three-player Ulti.
//!
//! Every operation takes an immutable `EngineState` snapshot and returns a new,
//! invariant-checked one or an `EngineError`; the input is never modified.

pub mod config;
pub mod domain;
pub mod errors;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::{ConfigError, EngineConfig};
pub use domain::bela::{announce_bela, BelaAnnouncement};
pub use domain::bidding::{
    bid, decline_talon, declare_trump, discard_to_talon, legal_bids, pass_bid, take_talon,
};
pub use domain::bids::{BidDefinition, BidId, Component, SilentEligibility, TrumpPolicy, BIDS};
pub use domain::cards_types::{Card, GameType, Rank, Suit};
pub use domain::invariants::check_invariants;
pub use domain::kontra::{call_kontra, KontraLadder, KontraSide};
pub use domain::round_lifecycle::{new_game, new_game_with, next_round};
pub use domain::scoring::{score_round, ScoreBreakdown};
pub use domain::state::{EngineState, Phase, Seat};
pub use domain::tricks::{legal_moves, play_card, trick_winner};
pub use errors::{EngineError, RuleKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

//! Domain layer: pure game logic types and helpers.

pub mod bela;
pub mod bidding;
pub mod bids;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod invariants;
pub mod kontra;
pub mod round_lifecycle;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_bela;
#[cfg(test)]
mod tests_props_legality;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{full_deck, Card, GameType, Rank, Suit};
pub use dealing::deal_hands;
pub use seed_derivation::derive_dealing_seed;
pub use state::{next_player, Auction, AuctionStage, CompletedTrick, Contract, Trick, PLAYERS};

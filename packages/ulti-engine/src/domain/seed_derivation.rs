//! RNG seed derivation for deterministic dealing.
//!
//! A game carries one base seed; every round derives its own dealing seed
//! from it so a whole session can be replayed from a single number.

/// Derive the seed used to shuffle the deck for a round.
///
/// Same `(game_seed, round_no)` always yields the same seed, and different
/// rounds of one game never collide.
pub fn derive_dealing_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

//! Deterministic card dealing logic.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::cards_types::{full_deck, Card};
use crate::domain::state::{next_player, Seat, HAND_SIZE, PLAYERS, TALON_SIZE};

/// Shuffle the 32-card deck with a seeded ChaCha20 generator (Fisher-Yates).
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Deal a round relative to `dealer`.
///
/// The seat after the dealer gets 12 cards (it must shed two into the talon
/// before bidding), the next seat 10 and the dealer 10. Hands are sorted.
pub fn deal_hands(dealer: Seat, seed: u64) -> [Vec<Card>; PLAYERS] {
    let deck = shuffled_deck(seed);
    let first = next_player(dealer);
    let second = next_player(first);

    let opening = HAND_SIZE + TALON_SIZE;
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    hands[first as usize] = deck[..opening].to_vec();
    hands[second as usize] = deck[opening..opening + HAND_SIZE].to_vec();
    hands[dealer as usize] = deck[opening + HAND_SIZE..].to_vec();
    for hand in hands.iter_mut() {
        hand.sort();
    }
    hands
}

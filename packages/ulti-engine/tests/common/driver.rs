//! Random-policy players that drive a round to completion through the public API.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use ulti_engine::domain::AuctionStage;
use ulti_engine::{
    announce_bela, bid, call_kontra, check_invariants, decline_talon, declare_trump,
    discard_to_talon, legal_bids, legal_moves, pass_bid, play_card, take_talon, Card, EngineState,
    Phase, Suit,
};

/// Steps far beyond any legal round length.
const STEP_LIMIT: usize = 2_000;

#[derive(Debug)]
pub struct RoundLog {
    /// Every snapshot the round passed through, starting with the input.
    pub states: Vec<EngineState>,
    /// `(standing_rank, accepted_rank)` for every accepted bid.
    pub bids: Vec<(u8, u8)>,
}

impl RoundLog {
    pub fn last(&self) -> &EngineState {
        self.states.last().expect("log starts with the input state")
    }
}

/// Play `state` out to ROUND_END with choices drawn from `policy_seed`.
pub fn play_round(state: EngineState, policy_seed: u64) -> RoundLog {
    let mut rng = ChaCha20Rng::seed_from_u64(policy_seed);
    let mut log = RoundLog {
        states: vec![state],
        bids: Vec::new(),
    };

    for _ in 0..STEP_LIMIT {
        let state = log.last().clone();
        if state.phase == Phase::RoundEnd {
            return log;
        }
        let next = step(&state, &mut rng, &mut log.bids);
        check_invariants(&next).expect("returned snapshot passes invariants");
        log.states.push(next);
    }
    panic!("round did not finish within {STEP_LIMIT} steps");
}

fn step(state: &EngineState, rng: &mut ChaCha20Rng, bids: &mut Vec<(u8, u8)>) -> EngineState {
    let seat = state.current_player;
    match state.phase {
        Phase::Bid => match state.auction.stage {
            AuctionStage::AwaitingDiscard { .. } => {
                let discard: Vec<Card> =
                    state.hand(seat).choose_multiple(rng, 2).copied().collect();
                discard_to_talon(state, seat, &discard).expect("discard of two held cards")
            }
            AuctionStage::Open { .. } => {
                let options = legal_bids(state, seat);
                let raise = state.auction.raise_required() || rng.random_bool(0.3);
                if raise && !options.is_empty() {
                    // Favor modest raises so auctions run for a while.
                    let pick = options[rng.random_range(0..options.len().min(4))];
                    bids.push((state.auction.highest_bid.rank(), pick.rank()));
                    bid(state, seat, pick).expect("bid from legal_bids")
                } else {
                    pass_bid(state, seat).expect("pass without raise obligation")
                }
            }
            AuctionStage::TalonDecision => {
                if rng.random_bool(0.4) {
                    if let Ok(next) = take_talon(state, seat) {
                        return next;
                    }
                }
                decline_talon(state, seat).expect("highest bidder declines")
            }
            AuctionStage::Closed => panic!("closed auction while still bidding"),
        },
        Phase::DeclareTrump => {
            let suit = *Suit::ALL.choose(rng).expect("four suits");
            declare_trump(state, seat, suit).expect("bidder declares trump")
        }
        Phase::Play => {
            if !state.kontra.locked && rng.random_bool(0.3) {
                if let Ok(next) = call_kontra(state, rng.random_range(0..3)) {
                    return next;
                }
            }
            if state.trick_index == 0 && rng.random_bool(0.3) {
                let suit = *Suit::ALL.choose(rng).expect("four suits");
                if let Ok(next) = announce_bela(state, seat, suit) {
                    if next != *state {
                        return next;
                    }
                }
            }
            let moves = legal_moves(state, seat);
            let card = *moves.choose(rng).expect("a legal move exists");
            play_card(state, seat, card).expect("legal move is accepted")
        }
        Phase::RoundEnd => state.clone(),
    }
}

/// Property-based tests for follow/overtake/trump legality and trick winners
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::bids::BidId;
use crate::domain::cards_types::{Card, GameType, Suit};
use crate::domain::state::{EngineState, Seat, PLAYERS};
use crate::domain::test_state_helpers::play_state_with_hands;
use crate::domain::tricks::{legal_moves, play_card, resolve_trick};
use crate::domain::{test_gens, test_prelude};

/// Independent oracle: trump beats everything, then lead suit, then rank.
fn oracle_winner(plays: &[(Seat, Card)], trump: Option<Suit>) -> Seat {
    let lead = plays[0].1.suit;
    let mode = if trump.is_some() {
        GameType::Trump
    } else {
        GameType::NoTrump
    };
    let key = |c: &Card| {
        let bucket = if Some(c.suit) == trump {
            2
        } else if c.suit == lead {
            1
        } else {
            0
        };
        (bucket, if bucket > 0 { c.rank.strength(mode) } else { 0 })
    };
    plays
        .iter()
        .enumerate()
        .max_by(|(i, a), (j, b)| key(&a.1).cmp(&key(&b.1)).then(j.cmp(i)))
        .map(|(_, (seat, _))| *seat)
        .unwrap_or(plays[0].0)
}

/// Deal 3 x 10 from `cards`, let `bidder` lead and play `steps` cards by
/// the given choice indices.
fn mid_trick(
    cards: Vec<Card>,
    trump: Option<Suit>,
    bidder: Seat,
    choices: &[usize],
) -> EngineState {
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (seat, chunk) in cards.chunks(10).enumerate() {
        hands[seat] = chunk.to_vec();
    }
    let bid = if trump.is_some() { BidId::Ulti } else { BidId::Betli };
    let mut state = play_state_with_hands(bid, bidder, trump, hands);
    for &choice in choices {
        let seat = state.current_player;
        let moves = legal_moves(&state, seat);
        state = play_card(&state, seat, moves[choice % moves.len()]).unwrap();
    }
    state
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Legal plays are a non-empty, duplicate-free subset of the hand.
    #[test]
    fn prop_legal_plays_subset(
        cards in test_gens::unique_cards(30),
        trump in proptest::option::of(test_gens::suit()),
        bidder in test_gens::seat(),
        choices in proptest::collection::vec(0usize..10, 0..3),
    ) {
        let state = mid_trick(cards, trump, bidder, &choices);
        let seat = state.current_player;
        let legal = legal_moves(&state, seat);
        prop_assert!(!legal.is_empty());
        let set: HashSet<Card> = legal.iter().copied().collect();
        prop_assert_eq!(set.len(), legal.len());
        for card in &legal {
            prop_assert!(state.hand(seat).contains(card));
        }
    }

    /// Holding the led suit forces it; void with trump forces trump.
    #[test]
    fn prop_follow_then_trump(
        cards in test_gens::unique_cards(30),
        trump in proptest::option::of(test_gens::suit()),
        bidder in test_gens::seat(),
        choices in proptest::collection::vec(0usize..10, 1..3),
    ) {
        let state = mid_trick(cards, trump, bidder, &choices);
        let seat = state.current_player;
        let hand = state.hand(seat);
        let lead = state.trick.lead_suit().unwrap();
        let legal = legal_moves(&state, seat);

        if hand.iter().any(|c| c.suit == lead) {
            prop_assert!(legal.iter().all(|c| c.suit == lead));
        } else if let Some(t) = trump.filter(|t| hand.iter().any(|c| c.suit == *t)) {
            prop_assert!(legal.iter().all(|c| c.suit == t));
        } else {
            prop_assert_eq!(legal.len(), hand.len());
        }
    }

    /// Whenever some card in hand would take the lead, every legal play does
    /// too, except when following suit after someone else has trumped.
    #[test]
    fn prop_must_overtake(
        cards in test_gens::unique_cards(30),
        trump in proptest::option::of(test_gens::suit()),
        bidder in test_gens::seat(),
        choices in proptest::collection::vec(0usize..10, 1..3),
    ) {
        let state = mid_trick(cards, trump, bidder, &choices);
        let seat = state.current_player;
        let legal = legal_moves(&state, seat);
        let lead = state.trick.lead_suit().unwrap();
        let cut = trump
            .is_some_and(|t| t != lead && state.trick.plays.iter().any(|(_, c)| c.suit == t));

        let wins = |card: Card| {
            let mut plays = state.trick.plays.clone();
            plays.push((seat, card));
            oracle_winner(&plays, trump) == seat
        };
        let following = legal.iter().all(|c| c.suit == lead);
        if !(cut && following) && legal.iter().any(|c| wins(*c)) {
            prop_assert!(legal.iter().all(|c| wins(*c)));
        }
    }

    /// Engine trick winner agrees with the oracle on completed tricks.
    #[test]
    fn prop_trick_winner_matches_oracle(
        cards in test_gens::unique_cards(30),
        trump in proptest::option::of(test_gens::suit()),
        bidder in test_gens::seat(),
        choices in proptest::collection::vec(0usize..10, 3),
    ) {
        let state = mid_trick(cards, trump, bidder, &choices);
        let last = state.last_trick.clone().unwrap();
        prop_assert_eq!(last.winner, oracle_winner(&last.plays, trump));
        prop_assert_eq!(resolve_trick(&last.plays, trump).unwrap(), last.winner);
        prop_assert_eq!(state.current_player, last.winner);
    }
}

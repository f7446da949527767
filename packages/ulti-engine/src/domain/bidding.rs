//! Auction: talon discard, raising, passing and the talon take/decline step.
//!
//! The auction opens with the seat after the dealer holding 12 cards. That
//! seat sheds two into the talon, then seats bid or pass in turn. Two passes
//! in a row close a segment: the highest bidder then picks up the talon or
//! leaves it. Picking it up means discarding again and outbidding the
//! standing contract before anyone can close the auction.

use tracing::{debug, info};

use crate::domain::bids::{bids_above, BidId, TrumpPolicy};
use crate::domain::cards_types::{Card, GameType, Suit};
use crate::domain::invariants::transition;
use crate::domain::kontra::KontraLadder;
use crate::domain::state::{
    next_player, require_contract, require_phase, require_turn, round_start_seat, AuctionStage,
    Contract, EngineState, Phase, Seat, Trick, HAND_SIZE, TALON_SIZE,
};
use crate::errors::domain::{EngineError, RuleKind};

/// Passes in a row that close an auction segment.
const CLOSING_PASSES: u8 = 2;

/// Shed two cards from a 12-card hand into the talon.
pub fn discard_to_talon(
    state: &EngineState,
    who: Seat,
    cards: &[Card],
) -> Result<EngineState, EngineError> {
    require_phase(state, Phase::Bid, "discard_to_talon")?;
    require_turn(state, who, "discard_to_talon")?;
    let AuctionStage::AwaitingDiscard { raise_required } = state.auction.stage else {
        return Err(EngineError::rule(
            RuleKind::IllegalDiscard,
            "No discard pending",
        ));
    };
    let hand = state.hand(who);
    if hand.len() != HAND_SIZE + TALON_SIZE {
        return Err(EngineError::rule(
            RuleKind::IllegalDiscard,
            format!("Discard needs a 12-card hand, seat {who} holds {}", hand.len()),
        ));
    }
    if cards.len() != TALON_SIZE {
        return Err(EngineError::rule(
            RuleKind::IllegalDiscard,
            format!("Exactly {TALON_SIZE} cards must be discarded, got {}", cards.len()),
        ));
    }
    if cards[0] == cards[1] {
        return Err(EngineError::rule(
            RuleKind::IllegalDiscard,
            format!("Duplicate discard {}", cards[0]),
        ));
    }
    if let Some(missing) = cards.iter().find(|c| !hand.contains(c)) {
        return Err(EngineError::rule(
            RuleKind::IllegalDiscard,
            format!("Card {missing} not in hand"),
        ));
    }

    transition(state, "discard_to_talon", |s| {
        s.hands[who as usize].retain(|c| !cards.contains(c));
        s.talon = cards.to_vec();
        s.auction.stage = AuctionStage::Open { raise_required };
        debug!(seat = who, "Talon discarded");
        Ok(())
    })
}

/// Contracts `who` may bid right now; empty unless it is their open turn.
pub fn legal_bids(state: &EngineState, who: Seat) -> Vec<BidId> {
    let open = matches!(state.auction.stage, AuctionStage::Open { .. });
    if state.phase != Phase::Bid || !open || state.current_player != who {
        return Vec::new();
    }
    bids_above(state.auction.highest_bid.rank()).collect()
}

/// Raise the standing contract.
pub fn bid(state: &EngineState, who: Seat, bid_id: BidId) -> Result<EngineState, EngineError> {
    require_phase(state, Phase::Bid, "bid")?;
    require_turn(state, who, "bid")?;
    require_open_turn(state, "bid")?;

    let standing = state.auction.highest_bid;
    if bid_id.rank() <= standing.rank() {
        let detail = if state.auction.raise_required() {
            format!("After taking the talon seat {who} must outbid {standing}")
        } else {
            format!("{bid_id} does not outrank {standing}")
        };
        return Err(EngineError::rule(RuleKind::IllegalBid, detail));
    }

    transition(state, "bid", |s| {
        s.auction.highest_bid = bid_id;
        s.auction.highest_bidder = Some(who);
        s.auction.consecutive_passes = 0;
        s.auction.stage = AuctionStage::Open {
            raise_required: false,
        };
        s.current_player = next_player(who);
        debug!(seat = who, bid = %bid_id, "Bid accepted");
        Ok(())
    })
}

/// Pass. The second pass in a row closes the segment.
pub fn pass_bid(state: &EngineState, who: Seat) -> Result<EngineState, EngineError> {
    require_phase(state, Phase::Bid, "pass_bid")?;
    require_turn(state, who, "pass_bid")?;
    require_open_turn(state, "pass_bid")?;
    if state.auction.raise_required() {
        return Err(EngineError::rule(
            RuleKind::IllegalBid,
            format!(
                "After taking the talon seat {who} must outbid {} before passing",
                state.auction.highest_bid
            ),
        ));
    }

    transition(state, "pass_bid", |s| {
        s.auction.consecutive_passes += 1;
        s.current_player = next_player(who);
        debug!(seat = who, passes = s.auction.consecutive_passes, "Pass");

        if s.auction.consecutive_passes < CLOSING_PASSES {
            return Ok(());
        }
        match s.auction.highest_bidder {
            None => {
                let opener = round_start_seat(s.dealer);
                finalize(s, BidId::LOWEST, opener)
            }
            Some(holder) => {
                s.auction.stage = AuctionStage::TalonDecision;
                s.current_player = holder;
                debug!(seat = holder, "Awaiting talon decision");
                Ok(())
            }
        }
    })
}

/// Highest bidder picks up the talon and must discard and raise again.
pub fn take_talon(state: &EngineState, who: Seat) -> Result<EngineState, EngineError> {
    require_phase(state, Phase::Bid, "take_talon")?;
    require_talon_decision(state, who)?;
    let standing = state.auction.highest_bid;
    if bids_above(standing.rank()).next().is_none() {
        return Err(EngineError::rule(
            RuleKind::TalonViolation,
            format!("Nothing outranks {standing}, the talon cannot be taken"),
        ));
    }

    transition(state, "take_talon", |s| {
        let talon = std::mem::take(&mut s.talon);
        let hand = &mut s.hands[who as usize];
        hand.extend(talon);
        hand.sort();
        s.auction.consecutive_passes = 0;
        s.auction.stage = AuctionStage::AwaitingDiscard {
            raise_required: true,
        };
        s.current_player = who;
        debug!(seat = who, "Talon taken");
        Ok(())
    })
}

/// Highest bidder leaves the talon; the contract stands as bid.
pub fn decline_talon(state: &EngineState, who: Seat) -> Result<EngineState, EngineError> {
    require_phase(state, Phase::Bid, "decline_talon")?;
    require_talon_decision(state, who)?;

    transition(state, "decline_talon", |s| {
        debug!(seat = who, "Talon declined");
        let standing = s.auction.highest_bid;
        finalize(s, standing, who)
    })
}

/// Bidder names trump for a bidder-chooses contract.
pub fn declare_trump(
    state: &EngineState,
    who: Seat,
    suit: Suit,
) -> Result<EngineState, EngineError> {
    require_phase(state, Phase::DeclareTrump, "declare_trump")?;
    require_turn(state, who, "declare_trump")?;
    let contract = require_contract(state, "declare_trump")?;

    transition(state, "declare_trump", |s| {
        require_dealt_out(s)?;
        s.trump_suit = Some(suit);
        s.game_type = GameType::Trump;
        start_play(s, contract.bidder);
        info!(seat = who, trump = %suit, contract = %contract.bid, "Trump declared");
        Ok(())
    })
}

fn require_open_turn(state: &EngineState, ctx: &'static str) -> Result<(), EngineError> {
    match state.auction.stage {
        AuctionStage::Open { .. } => Ok(()),
        AuctionStage::AwaitingDiscard { .. } => Err(EngineError::rule(
            RuleKind::IllegalBid,
            format!("{ctx}: talon discard still pending"),
        )),
        AuctionStage::TalonDecision => Err(EngineError::rule(
            RuleKind::IllegalBid,
            format!("{ctx}: talon decision pending"),
        )),
        AuctionStage::Closed => Err(EngineError::rule(
            RuleKind::TurnViolation,
            format!("{ctx}: auction closed"),
        )),
    }
}

fn require_talon_decision(state: &EngineState, who: Seat) -> Result<(), EngineError> {
    if !state.auction.talon_decision_pending() {
        return Err(EngineError::rule(
            RuleKind::TalonViolation,
            "No talon decision pending",
        ));
    }
    if state.auction.highest_bidder != Some(who) {
        return Err(EngineError::rule(
            RuleKind::TalonViolation,
            format!("Only the highest bidder decides on the talon, not seat {who}"),
        ));
    }
    Ok(())
}

/// Hands must already be 10/10/10; nothing is moved at this point.
fn require_dealt_out(s: &EngineState) -> Result<(), EngineError> {
    let sizes = s.hand_sizes();
    if sizes.iter().any(|&n| n != HAND_SIZE) || s.talon.len() != TALON_SIZE {
        return Err(EngineError::invariant(format!(
            "contract finalized with hands {sizes:?} and talon {}",
            s.talon.len()
        )));
    }
    Ok(())
}

fn finalize(s: &mut EngineState, bid_id: BidId, bidder: Seat) -> Result<(), EngineError> {
    require_dealt_out(s)?;
    let def = bid_id.definition();
    s.contract = Some(Contract {
        bid: bid_id,
        bidder,
    });
    s.auction.stage = AuctionStage::Closed;
    s.auction.highest_bid = bid_id;
    s.leader = bidder;
    s.current_player = bidder;
    s.trick = Trick::new(bidder);
    info!(seat = bidder, contract = %bid_id, "Contract finalized");

    match def.trump {
        TrumpPolicy::BidderChooses => {
            s.phase = Phase::DeclareTrump;
        }
        TrumpPolicy::FixedHearts => {
            s.trump_suit = Some(Suit::Hearts);
            s.game_type = GameType::Trump;
            start_play(s, bidder);
        }
        TrumpPolicy::NoTrump => {
            s.trump_suit = None;
            s.game_type = GameType::NoTrump;
            start_play(s, bidder);
        }
    }
    Ok(())
}

fn start_play(s: &mut EngineState, bidder: Seat) {
    s.phase = Phase::Play;
    s.leader = bidder;
    s.current_player = bidder;
    s.trick = Trick::new(bidder);
    s.trick_index = 0;
    s.kontra = KontraLadder::armed();
}

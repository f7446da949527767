use serde::{Deserialize, Serialize};

use crate::domain::bela::BelaAnnouncement;
use crate::domain::bids::BidId;
use crate::domain::cards_types::{Card, GameType, Suit};
use crate::domain::kontra::KontraLadder;
use crate::domain::scoring::ScoreBreakdown;
use crate::errors::domain::{EngineError, RuleKind};

pub const PLAYERS: usize = 3;
/// Cards each seat holds once the talon has been shed.
pub const HAND_SIZE: usize = 10;
pub const TALON_SIZE: usize = 2;
pub const TRICKS_PER_ROUND: u8 = 10;

pub type Seat = u8; // 0..=2

/// Round progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Auction, including talon discard and take/decline.
    Bid,
    /// Bidder names the trump suit.
    DeclareTrump,
    /// Ten tricks are played.
    Play,
    /// Round scored; only `next_round` is accepted.
    RoundEnd,
}

/// Sub-state of the auction while `phase == Bid`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuctionStage {
    /// Current player holds 12 cards and must shed two into the talon.
    AwaitingDiscard { raise_required: bool },
    /// Regular bid/pass turns. With `raise_required` the acting seat took the
    /// talon and must outbid its own standing contract before passing.
    Open { raise_required: bool },
    /// Highest bidder decides whether to pick up the talon.
    TalonDecision,
    /// Contract finalized.
    Closed,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub stage: AuctionStage,
    /// Standing contract; `BidId::LOWEST` until someone raises.
    pub highest_bid: BidId,
    /// `None` while no non-pass bid has been made.
    pub highest_bidder: Option<Seat>,
    pub consecutive_passes: u8,
}

impl Auction {
    pub fn opening() -> Self {
        Self {
            stage: AuctionStage::AwaitingDiscard {
                raise_required: false,
            },
            highest_bid: BidId::LOWEST,
            highest_bidder: None,
            consecutive_passes: 0,
        }
    }

    pub fn has_bid(&self) -> bool {
        self.highest_bidder.is_some()
    }

    pub fn discard_pending(&self) -> bool {
        matches!(self.stage, AuctionStage::AwaitingDiscard { .. })
    }

    pub fn talon_decision_pending(&self) -> bool {
        self.stage == AuctionStage::TalonDecision
    }

    pub fn raise_required(&self) -> bool {
        matches!(
            self.stage,
            AuctionStage::AwaitingDiscard {
                raise_required: true
            } | AuctionStage::Open {
                raise_required: true
            }
        )
    }
}

/// The finalized contract and who plays it alone.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub bid: BidId,
    pub bidder: Seat,
}

impl Contract {
    pub fn defenders(&self) -> [Seat; 2] {
        [next_player(self.bidder), next_player(next_player(self.bidder))]
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    pub leader: Seat,
    pub plays: Vec<(Seat, Card)>,
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|(_, c)| c.suit)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }
}

/// A resolved trick, kept for display and for the final-trick conditions.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub winner: Seat,
    pub plays: Vec<(Seat, Card)>,
}

/// Single root of truth for one round. Every operation returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    pub phase: Phase,
    pub dealer: Seat,
    /// Leads the current trick (or, before play, the seat that will).
    pub leader: Seat,
    pub current_player: Seat,
    pub hands: [Vec<Card>; PLAYERS],
    pub talon: Vec<Card>,
    pub trick: Trick,
    /// Cards won per seat; every three cards are one trick.
    pub tricks_won: [Vec<Card>; PLAYERS],
    pub auction: Auction,
    pub contract: Option<Contract>,
    pub game_type: GameType,
    pub trump_suit: Option<Suit>,
    /// Completed tricks this round (0..=10).
    pub trick_index: u8,
    pub announcements: Vec<BelaAnnouncement>,
    pub last_trick: Option<CompletedTrick>,
    pub kontra: KontraLadder,
    /// Breakdown of the most recently scored round.
    pub last_score: Option<ScoreBreakdown>,
    /// Cumulative balances across rounds.
    pub balances: [i32; PLAYERS],
    pub round_no: u32,
    pub game_seed: u64,
}

impl EngineState {
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat as usize]
    }

    pub fn hand_sizes(&self) -> [usize; PLAYERS] {
        [self.hands[0].len(), self.hands[1].len(), self.hands[2].len()]
    }

    pub fn tricks_taken(&self, seat: Seat) -> u8 {
        (self.tricks_won[seat as usize].len() / PLAYERS) as u8
    }
}

/// Seat / turn math helpers (3 fixed seats: 0..=2).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next player (0 → 1 → 2 → 0).
#[inline]
pub fn next_player(p: Seat) -> Seat {
    seat_offset(p, 1)
}

/// Seat that receives twelve cards and opens the auction.
#[inline]
pub fn round_start_seat(dealer: Seat) -> Seat {
    next_player(dealer)
}

pub fn require_seat(seat: Seat, ctx: &'static str) -> Result<(), EngineError> {
    if (seat as usize) < PLAYERS {
        Ok(())
    } else {
        Err(EngineError::rule(
            RuleKind::TurnViolation,
            format!("{ctx}: no seat {seat}"),
        ))
    }
}

pub fn require_phase(
    state: &EngineState,
    phase: Phase,
    ctx: &'static str,
) -> Result<(), EngineError> {
    if state.phase == phase {
        Ok(())
    } else {
        Err(EngineError::rule(
            RuleKind::TurnViolation,
            format!("{ctx}: not allowed in {:?}", state.phase),
        ))
    }
}

pub fn require_turn(state: &EngineState, seat: Seat, ctx: &'static str) -> Result<(), EngineError> {
    require_seat(seat, ctx)?;
    if state.current_player == seat {
        Ok(())
    } else {
        Err(EngineError::rule(
            RuleKind::TurnViolation,
            format!(
                "{ctx}: seat {seat} acted out of turn (seat {} to act)",
                state.current_player
            ),
        ))
    }
}

pub fn require_contract(state: &EngineState, ctx: &'static str) -> Result<Contract, EngineError> {
    state
        .contract
        .ok_or_else(|| EngineError::invariant(format!("contract must be set ({ctx})")))
}

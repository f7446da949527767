//! Round scoring: contract evaluation, silent bonuses and zero-sum payouts.
//!
//! Trick points are the counters ("zsír", 10 per Ace and Ten) a seat won,
//! 10 for the last trick and any Béla it announced. No-trump contracts are
//! decided on trick counts alone, so their trick points are zero.

use serde::{Deserialize, Serialize};

use crate::domain::bela::bela_points;
use crate::domain::bids::{BidId, Component, SilentEligibility};
use crate::domain::cards_types::{Card, GameType, Rank};
use crate::domain::state::{require_contract, EngineState, Seat, PLAYERS, TRICKS_PER_ROUND};
use crate::errors::domain::{EngineError, RuleKind};

pub const LAST_TRICK_BONUS: i32 = 10;
/// Counters in the deck plus the last-trick bonus.
pub const CARD_POINTS_AVAILABLE: i32 = 90;
/// Threshold for the 40-100 / 20-100 contracts and the silent hundred.
pub const HUNDRED: i32 = 100;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub struct SilentAchieved {
    pub hundred: bool,
    pub ulti: bool,
    pub durchmarsch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub contract: BidId,
    pub bidder: Seat,
    pub defenders: [Seat; 2],
    pub base_points: i32,
    pub success: bool,
    pub bidder_tricks: u8,
    /// Trick points including Béla.
    pub bidder_points: i32,
    pub defender_points: i32,
    pub bidder_bela: i32,
    pub defender_bela: i32,
    pub silent_eligible: SilentEligibility,
    pub silent_achieved: SilentAchieved,
    pub silent_points: i32,
    pub kontra_level: u8,
    pub kontra_multiplier: i32,
    /// `(base_points + silent_points) * kontra_multiplier`.
    pub point_value: i32,
    pub payouts: [i32; PLAYERS],
    pub notes: Vec<String>,
}

/// Per-seat trick points (counters, last trick, Béla).
pub fn trick_points(state: &EngineState) -> [i32; PLAYERS] {
    let mut points = [0; PLAYERS];
    if state.game_type == GameType::NoTrump {
        return points;
    }
    for (seat, pts) in points.iter_mut().enumerate() {
        let counters: i32 = state.tricks_won[seat].iter().map(|c| c.rank.zsir()).sum();
        *pts = counters + bela_points(&state.announcements, seat as Seat);
    }
    if let Some(last) = &state.last_trick {
        points[last.winner as usize] += LAST_TRICK_BONUS;
    }
    points
}

/// Score a finished round. Pure: the caller applies `payouts` to balances.
pub fn score_round(state: &EngineState) -> Result<ScoreBreakdown, EngineError> {
    if state.trick_index != TRICKS_PER_ROUND || state.hands.iter().any(|h| !h.is_empty()) {
        return Err(EngineError::rule(
            RuleKind::TurnViolation,
            "score_round: round still in progress",
        ));
    }
    let contract = require_contract(state, "score_round")?;
    let def = contract.bid.definition();
    let bidder = contract.bidder;
    let defenders = contract.defenders();
    let trump_mode = state.game_type == GameType::Trump && state.trump_suit.is_some();

    let points = trick_points(state);
    let bidder_points = points[bidder as usize];
    let defender_points: i32 = defenders.iter().map(|&d| points[d as usize]).sum();
    let bidder_bela = if trump_mode {
        bela_points(&state.announcements, bidder)
    } else {
        0
    };
    let defender_bela: i32 = if trump_mode {
        defenders
            .iter()
            .map(|&d| bela_points(&state.announcements, d))
            .sum()
    } else {
        0
    };
    let bidder_tricks = state.tricks_taken(bidder);
    let defender_tricks: u8 = defenders.iter().map(|&d| state.tricks_taken(d)).sum();

    let ulti_made = trump_mode && won_last_trick_with_trump_seven(state, bidder);
    let mut notes = Vec::new();
    let mut success = true;

    let mut fail = |note: &str| {
        success = false;
        notes.push(note.to_string());
    };

    if def.has(Component::Betli) && bidder_tricks != 0 {
        fail("betli failed: bidder took a trick");
    }
    if def.has(Component::Durchmarsch) && bidder_tricks != TRICKS_PER_ROUND {
        fail("durchmarsch failed: bidder did not win all tricks");
    }
    if def.has(Component::Ulti) && !ulti_made {
        fail("ulti failed: last trick not won with the trump seven");
    }
    if def.has(Component::FortyHundred) {
        let trump_bela = state
            .announcements
            .iter()
            .any(|a| a.seat == bidder && Some(a.suit) == state.trump_suit);
        if !(trump_mode && trump_bela && bidder_points >= HUNDRED) {
            fail("40-100 failed: no trump Béla or under 100 points");
        }
    }
    if def.has(Component::TwentyHundred) {
        let plain_bela = state
            .announcements
            .iter()
            .any(|a| a.seat == bidder && Some(a.suit) != state.trump_suit);
        if !(trump_mode && plain_bela && bidder_points >= HUNDRED) {
            fail("20-100 failed: no side-suit Béla or under 100 points");
        }
    }
    let plays_for_party = ![
        Component::Betli,
        Component::Durchmarsch,
        Component::FortyHundred,
        Component::TwentyHundred,
    ]
    .iter()
    .any(|&c| def.has(c));
    if plays_for_party {
        let available = CARD_POINTS_AVAILABLE + bidder_bela + defender_bela;
        if bidder_points * 2 <= available {
            fail("party failed: bidder did not take more than half the points");
        }
    }

    let silent_eligible = def.silent;
    let silent_achieved = SilentAchieved {
        hundred: trump_mode && bidder_points >= HUNDRED,
        ulti: ulti_made,
        durchmarsch: defender_tricks == 0,
    };
    let silent_points = [
        (silent_eligible.hundred, silent_achieved.hundred),
        (silent_eligible.ulti, silent_achieved.ulti),
        (silent_eligible.durchmarsch, silent_achieved.durchmarsch),
    ]
    .iter()
    .filter_map(|&(eligible, achieved)| eligible.filter(|_| achieved))
    .sum::<i32>();

    let kontra_level = state.kontra.level;
    let kontra_multiplier = state.kontra.multiplier();
    let point_value = (def.base_points + silent_points) * kontra_multiplier;

    let defender_delta = if success { -point_value } else { point_value };
    let mut payouts = [0; PLAYERS];
    for d in defenders {
        payouts[d as usize] = defender_delta;
    }
    payouts[bidder as usize] = -defender_delta * 2;

    Ok(ScoreBreakdown {
        contract: contract.bid,
        bidder,
        defenders,
        base_points: def.base_points,
        success,
        bidder_tricks,
        bidder_points,
        defender_points,
        bidder_bela,
        defender_bela,
        silent_eligible,
        silent_achieved,
        silent_points,
        kontra_level,
        kontra_multiplier,
        point_value,
        payouts,
        notes,
    })
}

fn won_last_trick_with_trump_seven(state: &EngineState, bidder: Seat) -> bool {
    let (Some(last), Some(trump)) = (&state.last_trick, state.trump_suit) else {
        return false;
    };
    last.winner == bidder
        && last
            .plays
            .iter()
            .any(|&(seat, card)| seat == bidder && card == Card::new(trump, Rank::Seven))
}

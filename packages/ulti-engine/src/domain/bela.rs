//! Béla (King + Queen of one suit) announcements.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::cards_types::{Card, GameType, Rank, Suit};
use crate::domain::invariants::transition;
use crate::domain::state::{require_phase, require_turn, EngineState, Phase, Seat};
use crate::errors::domain::{EngineError, RuleKind};

pub const TRUMP_BELA: i32 = 40;
pub const PLAIN_BELA: i32 = 20;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BelaAnnouncement {
    pub seat: Seat,
    pub suit: Suit,
    /// 40 for the trump suit, 20 otherwise.
    pub value: i32,
}

/// Record a Béla for `seat` in `suit`.
///
/// Allowed only to the current player during the first trick of a trump
/// contract. Announcing the same suit twice returns the state unchanged.
pub fn announce_bela(
    state: &EngineState,
    seat: Seat,
    suit: Suit,
) -> Result<EngineState, EngineError> {
    require_phase(state, Phase::Play, "announce_bela")?;
    if state.trick_index != 0 {
        return Err(EngineError::rule(
            RuleKind::AnnouncementViolation,
            "Béla must be announced during the first trick",
        ));
    }
    let trump = match (state.game_type, state.trump_suit) {
        (GameType::Trump, Some(trump)) => trump,
        _ => {
            return Err(EngineError::rule(
                RuleKind::AnnouncementViolation,
                "Béla is only announced in trump contracts",
            ))
        }
    };
    require_turn(state, seat, "announce_bela")?;

    if state
        .announcements
        .iter()
        .any(|a| a.seat == seat && a.suit == suit)
    {
        return Ok(state.clone());
    }

    let hand = state.hand(seat);
    let holds_pair = hand.contains(&Card::new(suit, Rank::King))
        && hand.contains(&Card::new(suit, Rank::Queen));
    if !holds_pair {
        return Err(EngineError::rule(
            RuleKind::AnnouncementViolation,
            format!("Seat {seat} does not hold King and Queen of {suit}"),
        ));
    }

    let value = if suit == trump { TRUMP_BELA } else { PLAIN_BELA };
    transition(state, "announce_bela", |s| {
        s.announcements.push(BelaAnnouncement { seat, suit, value });
        debug!(seat, suit = %suit, value, "Béla announced");
        Ok(())
    })
}

/// Sum of announced Béla values for `seat`.
pub fn bela_points(announcements: &[BelaAnnouncement], seat: Seat) -> i32 {
    announcements
        .iter()
        .filter(|a| a.seat == seat)
        .map(|a| a.value)
        .sum()
}

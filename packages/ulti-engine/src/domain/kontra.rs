//! Kontra ladder: alternating doublings between defenders and bidder.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::invariants::transition;
use crate::domain::state::{require_contract, require_phase, require_seat, EngineState, Phase, Seat};
use crate::errors::domain::{EngineError, RuleKind};

/// Kontra, re-kontra, szub-kontra.
pub const MAX_KONTRA_LEVEL: u8 = 3;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KontraSide {
    Defenders,
    Bidder,
}

impl KontraSide {
    pub fn other(self) -> Self {
        match self {
            KontraSide::Defenders => KontraSide::Bidder,
            KontraSide::Bidder => KontraSide::Defenders,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub struct KontraLadder {
    pub level: u8,
    /// Side allowed to escalate next; `None` until the contract is finalized.
    pub turn: Option<KontraSide>,
    /// Set by the first card of the round; never cleared within the round.
    pub locked: bool,
}

impl KontraLadder {
    /// Fresh ladder for a finalized contract; defenders speak first.
    pub fn armed() -> Self {
        Self {
            level: 0,
            turn: Some(KontraSide::Defenders),
            locked: false,
        }
    }

    pub fn multiplier(&self) -> i32 {
        1 << self.level
    }
}

/// Escalate the ladder by one level on behalf of `seat`.
pub fn call_kontra(state: &EngineState, seat: Seat) -> Result<EngineState, EngineError> {
    require_seat(seat, "call_kontra")?;
    require_phase(state, Phase::Play, "call_kontra")?;
    let contract = require_contract(state, "call_kontra")?;

    let ladder = state.kontra;
    if ladder.locked {
        return Err(EngineError::rule(
            RuleKind::KontraViolation,
            "Kontra is locked once the first card is played",
        ));
    }
    if ladder.level >= MAX_KONTRA_LEVEL {
        return Err(EngineError::rule(
            RuleKind::KontraViolation,
            "Kontra already at maximum level",
        ));
    }
    let Some(side) = ladder.turn else {
        return Err(EngineError::rule(
            RuleKind::KontraViolation,
            "Kontra ladder is not armed",
        ));
    };
    let caller_side = if seat == contract.bidder {
        KontraSide::Bidder
    } else {
        KontraSide::Defenders
    };
    if caller_side != side {
        return Err(EngineError::rule(
            RuleKind::KontraViolation,
            format!("Seat {seat} is not on the {side:?} side"),
        ));
    }

    transition(state, "call_kontra", |s| {
        s.kontra.level += 1;
        s.kontra.turn = Some(side.other());
        debug!(seat, level = s.kontra.level, "Kontra called");
        Ok(())
    })
}

//! Engine-level error type returned by every state transition.
//!
//! Rule violations are ordinary user-facing rejections: the caller's snapshot
//! is untouched and a different action may be tried. Invariant violations mean
//! the engine itself produced an inconsistent state and should be treated as a
//! defect by whoever embeds the engine.

use thiserror::Error;

/// Kinds of rule violations a player action can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RuleKind {
    /// Acting seat is not `current_player`, or the phase does not allow the action.
    TurnViolation,
    /// Bid rank too low, discard still pending, or raise-after-take unmet.
    IllegalBid,
    /// Wrong card count, duplicates, cards not held, or wrong hand size.
    IllegalDiscard,
    /// Card not in hand or not a legal play for the current trick.
    IllegalMove,
    /// Talon taken or declined while no decision is pending, or by the wrong seat.
    TalonViolation,
    /// Ladder locked, wrong side's turn, or already at maximum level.
    KontraViolation,
    /// Béla outside the eligible window or without King and Queen.
    AnnouncementViolation,
    ParseCard,
    ParseSuit,
    ParseBid,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{0:?}: {1}")]
    Rule(RuleKind, String),
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl EngineError {
    pub fn rule(kind: RuleKind, detail: impl Into<String>) -> Self {
        Self::Rule(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    pub fn kind(&self) -> Option<RuleKind> {
        match self {
            Self::Rule(kind, _) => Some(*kind),
            Self::Invariant(_) => None,
        }
    }

    /// True for engine defects; false for rejections the player can recover from.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }
}

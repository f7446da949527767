//! Post-condition auditor run after every state transition.
//!
//! A failure here is an engine defect, never a player mistake.

use std::collections::HashSet;

use tracing::error;

use crate::domain::cards_types::{full_deck, Card};
use crate::domain::state::{
    AuctionStage, EngineState, Phase, HAND_SIZE, PLAYERS, TALON_SIZE, TRICKS_PER_ROUND,
};
use crate::errors::domain::EngineError;

/// Verify every cross-field invariant of `state`.
pub fn check_invariants(state: &EngineState) -> Result<(), EngineError> {
    check_seats(state)?;
    check_conservation(state)?;

    if !state.talon.is_empty() && state.talon.len() != TALON_SIZE {
        return Err(EngineError::invariant(format!(
            "talon holds {} cards",
            state.talon.len()
        )));
    }
    if state.kontra.level > 3 {
        return Err(EngineError::invariant("kontra level above 3"));
    }
    if state.trick_index > TRICKS_PER_ROUND {
        return Err(EngineError::invariant("trick index past the last trick"));
    }
    if state.trick.plays.len() >= PLAYERS {
        return Err(EngineError::invariant("completed trick left unresolved"));
    }

    let sizes = state.hand_sizes();
    match state.phase {
        Phase::Bid => check_bid_hands(state, sizes),
        Phase::DeclareTrump => {
            require_contract_set(state)?;
            if sizes.iter().any(|&n| n != HAND_SIZE) {
                return Err(EngineError::invariant(format!(
                    "hands must be 10/10/10 before play, got {sizes:?}"
                )));
            }
            Ok(())
        }
        Phase::Play => {
            require_contract_set(state)?;
            check_play_hands(state, sizes)
        }
        Phase::RoundEnd => {
            require_contract_set(state)?;
            if sizes.iter().any(|&n| n != 0) {
                return Err(EngineError::invariant("round ended with cards in hand"));
            }
            Ok(())
        }
    }
}

/// Clone `state`, apply `f` to the clone and audit the result.
///
/// The caller's snapshot is never touched, so a rejected action leaves it as-is.
pub(crate) fn transition<F>(
    state: &EngineState,
    action: &'static str,
    f: F,
) -> Result<EngineState, EngineError>
where
    F: FnOnce(&mut EngineState) -> Result<(), EngineError>,
{
    let mut next = state.clone();
    f(&mut next)?;
    if let Err(err) = check_invariants(&next) {
        error!(action, error = %err, "Invariant check failed after transition");
        return Err(err);
    }
    Ok(next)
}

fn check_seats(state: &EngineState) -> Result<(), EngineError> {
    for (name, seat) in [
        ("current_player", state.current_player),
        ("dealer", state.dealer),
        ("leader", state.leader),
    ] {
        if seat as usize >= PLAYERS {
            return Err(EngineError::invariant(format!("{name} out of range: {seat}")));
        }
    }
    Ok(())
}

fn check_conservation(state: &EngineState) -> Result<(), EngineError> {
    let located: Vec<Card> = state
        .hands
        .iter()
        .flatten()
        .chain(state.talon.iter())
        .chain(state.trick.plays.iter().map(|(_, c)| c))
        .chain(state.tricks_won.iter().flatten())
        .copied()
        .collect();

    let unique: HashSet<Card> = located.iter().copied().collect();
    if located.len() != 32 || unique.len() != 32 {
        return Err(EngineError::invariant(format!(
            "card conservation: {} cards located, {} distinct",
            located.len(),
            unique.len()
        )));
    }
    let deck: HashSet<Card> = full_deck().into_iter().collect();
    if unique != deck {
        return Err(EngineError::invariant("card conservation: foreign card"));
    }
    Ok(())
}

fn check_bid_hands(state: &EngineState, sizes: [usize; PLAYERS]) -> Result<(), EngineError> {
    let twelve: Vec<usize> = (0..PLAYERS)
        .filter(|&s| sizes[s] == HAND_SIZE + TALON_SIZE)
        .collect();
    match state.auction.stage {
        AuctionStage::AwaitingDiscard { .. } => {
            if twelve != [state.current_player as usize] {
                return Err(EngineError::invariant(format!(
                    "discard pending but hand sizes are {sizes:?}"
                )));
            }
        }
        _ => {
            if !twelve.is_empty() {
                return Err(EngineError::invariant(format!(
                    "no discard pending but hand sizes are {sizes:?}"
                )));
            }
        }
    }
    Ok(())
}

fn check_play_hands(state: &EngineState, sizes: [usize; PLAYERS]) -> Result<(), EngineError> {
    let max = sizes.iter().copied().max().unwrap_or(0);
    let min = sizes.iter().copied().min().unwrap_or(0);
    if max - min > 1 {
        return Err(EngineError::invariant(format!(
            "hand sizes drifted apart: {sizes:?}"
        )));
    }
    if state.trick.plays.is_empty() && max != min {
        return Err(EngineError::invariant(format!(
            "hand sizes unequal between tricks: {sizes:?}"
        )));
    }
    let expected = HAND_SIZE - state.trick_index as usize;
    if max != expected {
        return Err(EngineError::invariant(format!(
            "trick {} with hand sizes {sizes:?}",
            state.trick_index
        )));
    }
    Ok(())
}

fn require_contract_set(state: &EngineState) -> Result<(), EngineError> {
    if state.contract.is_none() {
        return Err(EngineError::invariant(format!(
            "{:?} without a contract",
            state.phase
        )));
    }
    Ok(())
}

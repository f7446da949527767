use tracing::{debug, info};

use crate::domain::cards_logic::{card_beats, winning_index};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::invariants::transition;
use crate::domain::scoring::score_round;
use crate::domain::state::{
    next_player, require_phase, require_turn, CompletedTrick, EngineState, Phase, Seat, Trick,
    PLAYERS,
};
use crate::errors::domain::{EngineError, RuleKind};

/// Compute legal cards the seat may play, independent of turn enforcement.
///
/// Follow suit; when following without a trump in the trick, overtake the
/// current best card if able. Void in the led suit, play trump (overtaking the
/// best trump if able). Otherwise anything goes.
pub fn legal_moves(state: &EngineState, who: Seat) -> Vec<Card> {
    if state.phase != Phase::Play || who as usize >= PLAYERS {
        return Vec::new();
    }
    let hand = state.hand(who);
    if hand.is_empty() {
        return Vec::new();
    }

    let plays = &state.trick.plays;
    let Some(lead) = state.trick.lead_suit() else {
        let mut any = hand.to_vec();
        any.sort();
        return any;
    };
    let trump = state.trump_suit;
    let Some(best) = winning_index(plays, trump).map(|i| plays[i].1) else {
        return hand.to_vec();
    };

    let mut legal = required_cards(hand, lead, trump, plays, best);
    legal.sort();
    legal
}

fn required_cards(
    hand: &[Card],
    lead: Suit,
    trump: Option<Suit>,
    plays: &[(Seat, Card)],
    best: Card,
) -> Vec<Card> {
    let overtaking = |cards: Vec<Card>| -> Vec<Card> {
        let beating: Vec<Card> = cards
            .iter()
            .copied()
            .filter(|c| card_beats(*c, best, lead, trump))
            .collect();
        if beating.is_empty() {
            cards
        } else {
            beating
        }
    };

    let following: Vec<Card> = hand.iter().copied().filter(|c| c.suit == lead).collect();
    if !following.is_empty() {
        let cut = trump.is_some_and(|t| t != lead && plays.iter().any(|(_, c)| c.suit == t));
        return if cut { following } else { overtaking(following) };
    }

    if let Some(t) = trump {
        let trumps: Vec<Card> = hand.iter().copied().filter(|c| c.suit == t).collect();
        if !trumps.is_empty() {
            return overtaking(trumps);
        }
    }

    hand.to_vec()
}

/// Winner of a complete three-card trick.
pub fn resolve_trick(plays: &[(Seat, Card)], trump: Option<Suit>) -> Result<Seat, EngineError> {
    if plays.len() < PLAYERS {
        return Err(EngineError::rule(
            RuleKind::IllegalMove,
            format!("Trick incomplete: {} of {PLAYERS} cards played", plays.len()),
        ));
    }
    winning_index(plays, trump)
        .map(|i| plays[i].0)
        .ok_or_else(|| EngineError::invariant("trick without a lead card"))
}

/// Winner of the state's current trick; errors unless three cards are down.
pub fn trick_winner(state: &EngineState) -> Result<Seat, EngineError> {
    resolve_trick(&state.trick.plays, state.trump_suit)
}

/// Play a card into the current trick, enforcing turn, phase and follow rules.
///
/// The first card of the round locks the kontra ladder. The third card of a
/// trick resolves it; the tenth resolved trick scores the round.
pub fn play_card(state: &EngineState, who: Seat, card: Card) -> Result<EngineState, EngineError> {
    require_phase(state, Phase::Play, "play_card")?;
    require_turn(state, who, "play_card")?;

    let Some(pos) = state.hand(who).iter().position(|&c| c == card) else {
        return Err(EngineError::rule(
            RuleKind::IllegalMove,
            format!("Card {card} not in hand"),
        ));
    };
    if !legal_moves(state, who).contains(&card) {
        return Err(EngineError::rule(
            RuleKind::IllegalMove,
            format!("Card {card} is not a legal play"),
        ));
    }

    transition(state, "play_card", |s| {
        let removed = s.hands[who as usize].remove(pos);
        s.trick.plays.push((who, removed));
        s.kontra.locked = true;
        s.current_player = next_player(who);
        debug!(seat = who, card = %removed, trick = s.trick_index, "Card played");

        if s.trick.is_complete() {
            complete_trick(s)?;
        }
        Ok(())
    })
}

fn complete_trick(s: &mut EngineState) -> Result<(), EngineError> {
    let winner = resolve_trick(&s.trick.plays, s.trump_suit)?;
    let plays = std::mem::replace(&mut s.trick, Trick::new(winner)).plays;

    s.tricks_won[winner as usize].extend(plays.iter().map(|(_, c)| *c));
    s.last_trick = Some(CompletedTrick { winner, plays });
    s.leader = winner;
    s.current_player = winner;
    s.trick_index += 1;
    debug!(winner, trick = s.trick_index, "Trick resolved");

    if s.hands.iter().all(Vec::is_empty) {
        let breakdown = score_round(s)?;
        for (balance, delta) in s.balances.iter_mut().zip(breakdown.payouts) {
            *balance += delta;
        }
        info!(
            round = s.round_no,
            contract = %breakdown.contract,
            success = breakdown.success,
            point_value = breakdown.point_value,
            "Round scored"
        );
        s.last_score = Some(breakdown);
        s.phase = Phase::RoundEnd;
    }
    Ok(())
}

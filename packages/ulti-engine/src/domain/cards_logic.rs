//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, GameType, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// True if `a` beats `b` in a trick led with `lead`.
///
/// Trump cards outrank everything, lead-suit cards outrank off-suit cards, and
/// within the same bucket the rank table of the current mode decides. Two
/// off-suit non-trump cards never beat each other.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Option<Suit>) -> bool {
    let mode = match trump {
        Some(_) => GameType::Trump,
        None => GameType::NoTrump,
    };

    if let Some(trump_suit) = trump {
        let a_trump = a.suit == trump_suit;
        let b_trump = b.suit == trump_suit;
        if a_trump != b_trump {
            return a_trump;
        }
        if a_trump && b_trump {
            return a.rank.strength(mode) > b.rank.strength(mode);
        }
    }

    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows != b_follows {
        return a_follows;
    }
    if a_follows && b_follows {
        return a.rank.strength(mode) > b.rank.strength(mode);
    }
    false
}

/// Index of the play currently winning `plays` (first play leads).
pub fn winning_index(plays: &[(u8, Card)], trump: Option<Suit>) -> Option<usize> {
    let (_, lead_card) = plays.first()?;
    let lead = lead_card.suit;
    let mut best = 0usize;
    for (i, (_, card)) in plays.iter().enumerate().skip(1) {
        if card_beats(*card, plays[best].1, lead, trump) {
            best = i;
        }
    }
    Some(best)
}

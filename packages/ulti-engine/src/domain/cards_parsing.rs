//! Card parsing from compact tokens (e.g., "AH", "TB", "7L")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{EngineError, RuleKind};

fn rank_char(rank: Rank) -> char {
    match rank {
        Rank::Ace => 'A',
        Rank::Ten => 'T',
        Rank::King => 'K',
        Rank::Queen => 'Q',
        Rank::Jack => 'J',
        Rank::Nine => '9',
        Rank::Eight => '8',
        Rank::Seven => '7',
    }
}

fn suit_char(suit: Suit) -> char {
    match suit {
        Suit::Clubs => 'C',
        Suit::Bells => 'B',
        Suit::Leaves => 'L',
        Suit::Hearts => 'H',
    }
}

pub(crate) fn suit_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "CLUBS",
        Suit::Bells => "BELLS",
        Suit::Leaves => "LEAVES",
        Suit::Hearts => "HEARTS",
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_char(self.rank), suit_char(self.suit))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(suit_name(*self))
    }
}

impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || EngineError::rule(RuleKind::ParseCard, format!("Parse card: {s}"));
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(bad());
        };
        let rank = match rank_ch {
            'A' => Rank::Ace,
            'T' => Rank::Ten,
            'K' => Rank::King,
            'Q' => Rank::Queen,
            'J' => Rank::Jack,
            '9' => Rank::Nine,
            '8' => Rank::Eight,
            '7' => Rank::Seven,
            _ => return Err(bad()),
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'B' => Suit::Bells,
            'L' => Suit::Leaves,
            'H' => Suit::Hearts,
            _ => return Err(bad()),
        };
        Ok(Card { suit, rank })
    }
}

impl FromStr for Suit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLUBS" => Ok(Suit::Clubs),
            "BELLS" => Ok(Suit::Bells),
            "LEAVES" => Ok(Suit::Leaves),
            "HEARTS" => Ok(Suit::Hearts),
            _ => Err(EngineError::rule(
                RuleKind::ParseSuit,
                format!("Invalid suit: {s}"),
            )),
        }
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

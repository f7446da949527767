//! Core card-related types: Card, Rank, Suit, GameType

use serde::{Deserialize, Serialize};

/// The four Hungarian-pattern suits (makk, tök, zöld, piros).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Bells,
    Leaves,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Bells, Suit::Leaves, Suit::Hearts];
}

/// Declared in ascending trump-mode strength so the derived `Ord` gives a
/// stable sort order. Trick resolution never uses it; see `Rank::strength`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Seven,
    Eight,
    Nine,
    /// Alsó
    Jack,
    /// Felső
    Queen,
    King,
    Ten,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::Ace,
        Rank::Ten,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
    ];

    /// Rank value for trick comparison; higher wins.
    ///
    /// Trump mode: A, 10, K, Q, J, 9, 8, 7.
    /// No-trump mode: A, K, Q, J, 10, 9, 8, 7.
    pub fn strength(self, mode: GameType) -> u8 {
        match (mode, self) {
            (_, Rank::Ace) => 8,
            (GameType::Trump, Rank::Ten) => 7,
            (GameType::Trump, Rank::King) => 6,
            (GameType::Trump, Rank::Queen) => 5,
            (GameType::Trump, Rank::Jack) => 4,
            (GameType::NoTrump, Rank::King) => 7,
            (GameType::NoTrump, Rank::Queen) => 6,
            (GameType::NoTrump, Rank::Jack) => 5,
            (GameType::NoTrump, Rank::Ten) => 4,
            (_, Rank::Nine) => 3,
            (_, Rank::Eight) => 2,
            (_, Rank::Seven) => 1,
        }
    }

    /// Counter ("zsír") value when won in a trick.
    pub fn zsir(self) -> i32 {
        match self {
            Rank::Ace | Rank::Ten => 10,
            _ => 0,
        }
    }
}

/// Whether the finalized contract plays with a trump suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    #[default]
    Trump,
    NoTrump,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

// Note: Ord on Card is only for stable sorting (suit, then rank).
// Trick resolution goes through `cards_logic::card_beats`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The fixed 32-card deck in catalog order (suit by suit, Ace down to Seven).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(32);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

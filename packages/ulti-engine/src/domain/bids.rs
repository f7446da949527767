//! Static contract catalog.
//!
//! Every biddable contract is a `BidId` variant; its discriminant is its rank,
//! so `BIDS[id as usize]` is its definition. Ranks are a total order and a bid
//! is only legal when it strictly outranks the standing one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::GameType;
use crate::errors::domain::{EngineError, RuleKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum BidId {
    Passz,
    RedPassz,
    FortyHundred,
    Ulti,
    Betli,
    Durchmarsch,
    FortyHundredUlti,
    RedFortyHundred,
    TwentyHundred,
    RedUlti,
    RedBetli,
    DurchmarschFortyHundred,
    DurchmarschUlti,
    UltiTwentyHundred,
    RedDurchmarsch,
    DurchmarschFortyHundredUlti,
    DurchmarschTwentyHundred,
    RedFortyHundredUlti,
    RedTwentyHundred,
    DurchmarschUltiTwentyHundred,
    RedDurchmarschFortyHundred,
    RedDurchmarschUlti,
    OpenBetli,
    RedUltiTwentyHundred,
    OpenDurchmarsch,
    RedDurchmarschFortyHundredUlti,
    RedDurchmarschTwentyHundred,
    OpenDurchmarschFortyHundred,
    OpenDurchmarschUlti,
    OpenDurchmarschFortyHundredUlti,
    RedOpenDurchmarschFortyHundred,
    RedOpenDurchmarschUlti,
    OpenDurchmarschTwentyHundred,
    RedDurchmarschUltiTwentyHundred,
    OpenDurchmarschUltiTwentyHundred,
    RedOpenDurchmarschFortyHundredUlti,
    RedOpenDurchmarschTwentyHundred,
    RedOpenDurchmarschUltiTwentyHundred,
}

/// How the trump suit is chosen once a contract is finalized.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TrumpPolicy {
    /// Bidder names any suit in the DECLARE_TRUMP phase.
    BidderChooses,
    /// "Piros" contracts: hearts are trump.
    FixedHearts,
    /// Played without trump.
    NoTrump,
}

/// Component tags; each one layers a win condition onto the contract.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Component {
    /// Piros prefix (hearts trump, doubled value).
    Red,
    /// Terített: bidder plays open-handed.
    Open,
    Ulti,
    Durchmarsch,
    Betli,
    FortyHundred,
    TwentyHundred,
}

/// Silent ("csendes") bonus eligibility. `None` means never paid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub struct SilentEligibility {
    pub hundred: Option<i32>,
    pub ulti: Option<i32>,
    pub durchmarsch: Option<i32>,
}

impl SilentEligibility {
    const NONE: Self = Self {
        hundred: None,
        ulti: None,
        durchmarsch: None,
    };

    const fn of(hundred: Option<i32>, ulti: Option<i32>, durchmarsch: Option<i32>) -> Self {
        Self {
            hundred,
            ulti,
            durchmarsch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidDefinition {
    pub id: BidId,
    /// Stable string key used on the wire.
    pub key: &'static str,
    pub name: &'static str,
    pub base_points: i32,
    pub trump: TrumpPolicy,
    pub components: &'static [Component],
    pub silent: SilentEligibility,
}

impl BidDefinition {
    pub fn rank(&self) -> u8 {
        self.id as u8
    }

    pub fn game_type(&self) -> GameType {
        match self.trump {
            TrumpPolicy::NoTrump => GameType::NoTrump,
            TrumpPolicy::BidderChooses | TrumpPolicy::FixedHearts => GameType::Trump,
        }
    }

    pub fn has(&self, component: Component) -> bool {
        self.components.contains(&component)
    }
}

use BidId as B;
use Component::{Betli, Durchmarsch, FortyHundred, Open, Red, TwentyHundred, Ulti};
use TrumpPolicy::{BidderChooses as Bidder, FixedHearts as Hearts, NoTrump as Plain};

const fn def(
    id: BidId,
    key: &'static str,
    name: &'static str,
    base_points: i32,
    trump: TrumpPolicy,
    components: &'static [Component],
    silent: SilentEligibility,
) -> BidDefinition {
    BidDefinition {
        id,
        key,
        name,
        base_points,
        trump,
        components,
        silent,
    }
}

const fn s(hundred: Option<i32>, ulti: Option<i32>, durchmarsch: Option<i32>) -> SilentEligibility {
    SilentEligibility::of(hundred, ulti, durchmarsch)
}

const NONE: SilentEligibility = SilentEligibility::NONE;

#[rustfmt::skip]
pub static BIDS: [BidDefinition; 38] = [
    def(B::Passz, "passz", "Passz", 1, Bidder, &[], s(Some(2), Some(2), Some(3))),
    def(B::RedPassz, "piros_passz", "Piros Passz", 2, Hearts, &[Red], s(Some(4), Some(4), Some(6))),
    def(B::FortyHundred, "negyvenszaz_40_100", "40-100", 4, Bidder, &[FortyHundred], s(None, Some(2), Some(3))),
    def(B::Ulti, "ulti", "Ulti", 5, Bidder, &[Ulti], s(Some(2), None, Some(3))),
    def(B::Betli, "betli", "Betli", 5, Plain, &[Betli], NONE),
    def(B::Durchmarsch, "durchmarsch", "Durchmarsch", 6, Plain, &[Durchmarsch], NONE),
    def(B::FortyHundredUlti, "40_100_ulti", "40-100 Ulti", 8, Bidder, &[FortyHundred, Ulti], s(None, None, Some(3))),
    def(B::RedFortyHundred, "piros_40_100", "Piros 40-100", 8, Hearts, &[Red, FortyHundred], s(None, Some(4), Some(6))),
    def(B::TwentyHundred, "20_100", "20-100", 8, Bidder, &[TwentyHundred], s(None, Some(2), Some(3))),
    def(B::RedUlti, "piros_ulti", "Piros Ulti", 10, Hearts, &[Red, Ulti], s(Some(4), None, Some(6))),
    def(B::RedBetli, "pirosbetli", "Pirosbetli", 10, Plain, &[Red, Betli], NONE),
    def(B::DurchmarschFortyHundred, "durchmarsch_40_100", "Durchmarsch 40-100", 10, Bidder, &[Durchmarsch, FortyHundred], s(None, Some(2), None)),
    def(B::DurchmarschUlti, "durchmarsch_ulti", "Durchmarsch Ulti", 10, Bidder, &[Durchmarsch, Ulti], s(Some(2), None, None)),
    def(B::UltiTwentyHundred, "ulti_20_100", "Ulti 20-100", 12, Bidder, &[Ulti, TwentyHundred], s(None, None, Some(3))),
    def(B::RedDurchmarsch, "pirosdurchmarsch", "Pirosdurchmarsch", 12, Plain, &[Red, Durchmarsch], NONE),
    def(B::DurchmarschFortyHundredUlti, "durchmarsch_40_100_ulti", "Durchmarsch 40-100 Ulti", 14, Bidder, &[Durchmarsch, FortyHundred, Ulti], NONE),
    def(B::DurchmarschTwentyHundred, "durchmarsch_20_100", "Durchmarsch 20-100", 14, Bidder, &[Durchmarsch, TwentyHundred], s(None, Some(2), None)),
    def(B::RedFortyHundredUlti, "piros_40_100_ulti", "Piros 40-100 Ulti", 16, Hearts, &[Red, FortyHundred, Ulti], s(None, None, Some(6))),
    def(B::RedTwentyHundred, "piros_20_100", "Piros 20-100", 16, Hearts, &[Red, TwentyHundred], s(None, Some(4), Some(6))),
    def(B::DurchmarschUltiTwentyHundred, "durchmarsch_ulti_20_100", "Durchmarsch Ulti 20-100", 18, Bidder, &[Durchmarsch, Ulti, TwentyHundred], NONE),
    def(B::RedDurchmarschFortyHundred, "pirosdurchmarsch_40_100", "Pirosdurchmarsch 40-100", 20, Hearts, &[Red, Durchmarsch, FortyHundred], s(None, Some(4), None)),
    def(B::RedDurchmarschUlti, "pirosdurchmarsch_ulti", "Pirosdurchmarsch Ulti", 20, Hearts, &[Red, Durchmarsch, Ulti], s(Some(4), None, None)),
    def(B::OpenBetli, "teritettbetli", "Terítettbetli", 20, Plain, &[Open, Betli], NONE),
    def(B::RedUltiTwentyHundred, "piros_ulti_20_100", "Piros Ulti 20-100", 24, Hearts, &[Red, Ulti, TwentyHundred], s(None, None, Some(6))),
    def(B::OpenDurchmarsch, "teritett_durchmarsch", "Terített Durchmarsch", 24, Plain, &[Open, Durchmarsch], NONE),
    def(B::RedDurchmarschFortyHundredUlti, "piros_durchmarsch_40_100_ulti", "Piros Durchmarsch 40-100 Ulti", 28, Hearts, &[Red, Durchmarsch, FortyHundred, Ulti], NONE),
    def(B::RedDurchmarschTwentyHundred, "piros_durchmarsch_20_100", "Piros Durchmarsch 20-100", 28, Hearts, &[Red, Durchmarsch, TwentyHundred], s(None, Some(4), None)),
    def(B::OpenDurchmarschFortyHundred, "teritett_durchmarsch_40_100", "Terített Durchmarsch 40-100", 28, Bidder, &[Open, Durchmarsch, FortyHundred], s(None, Some(2), None)),
    def(B::OpenDurchmarschUlti, "teritett_durchmarsch_ulti", "Terített Durchmarsch Ulti", 28, Bidder, &[Open, Durchmarsch, Ulti], s(Some(2), None, None)),
    def(B::OpenDurchmarschFortyHundredUlti, "teritett_durchmarsch_40_100_ulti", "Terített Durchmarsch 40-100 Ulti", 32, Bidder, &[Open, Durchmarsch, FortyHundred, Ulti], NONE),
    def(B::RedOpenDurchmarschFortyHundred, "piros_teritett_durchmarsch_40_100", "Piros Terített Durchmarsch 40-100", 32, Hearts, &[Red, Open, Durchmarsch, FortyHundred], s(None, Some(4), None)),
    def(B::RedOpenDurchmarschUlti, "piros_teritett_durchmarsch_ulti", "Piros Terített Durchmarsch Ulti", 32, Hearts, &[Red, Open, Durchmarsch, Ulti], s(Some(4), None, None)),
    def(B::OpenDurchmarschTwentyHundred, "teritett_durchmarsch_20_100", "Terített Durchmarsch 20-100", 32, Bidder, &[Open, Durchmarsch, TwentyHundred], s(None, Some(2), None)),
    def(B::RedDurchmarschUltiTwentyHundred, "piros_durchmarsch_ulti_20_100", "Piros Durchmarsch Ulti 20-100", 36, Hearts, &[Red, Durchmarsch, Ulti, TwentyHundred], NONE),
    def(B::OpenDurchmarschUltiTwentyHundred, "teritett_durchmarsch_ulti_20_100", "Terített Durchmarsch Ulti 20-100", 36, Bidder, &[Open, Durchmarsch, Ulti, TwentyHundred], NONE),
    def(B::RedOpenDurchmarschFortyHundredUlti, "piros_teritett_durchmarsch_40_100_ulti", "Piros Terített Durchmarsch 40-100 Ulti", 40, Hearts, &[Red, Open, Durchmarsch, FortyHundred, Ulti], NONE),
    def(B::RedOpenDurchmarschTwentyHundred, "piros_teritett_durchmarsch_20_100", "Piros Terített Durchmarsch 20-100", 40, Hearts, &[Red, Open, Durchmarsch, TwentyHundred], s(None, Some(4), None)),
    def(B::RedOpenDurchmarschUltiTwentyHundred, "piros_teritett_durchmarsch_ulti_20_100", "Piros Terített Durchmarsch Ulti 20-100", 48, Hearts, &[Red, Open, Durchmarsch, Ulti, TwentyHundred], NONE),
];

impl BidId {
    /// The lowest standing contract, in force when nobody raises.
    pub const LOWEST: BidId = BidId::Passz;

    pub fn definition(self) -> &'static BidDefinition {
        &BIDS[self as usize]
    }

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn key(self) -> &'static str {
        self.definition().key
    }

    pub fn all() -> impl Iterator<Item = BidId> {
        BIDS.iter().map(|d| d.id)
    }
}

/// Every contract strictly outranking `rank`, in rank order.
pub fn bids_above(rank: u8) -> impl Iterator<Item = BidId> {
    BidId::all().filter(move |id| id.rank() > rank)
}

impl fmt::Display for BidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition().name)
    }
}

impl FromStr for BidId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BIDS.iter()
            .find(|d| d.key == s)
            .map(|d| d.id)
            .ok_or_else(|| EngineError::rule(RuleKind::ParseBid, format!("Unknown bid: {s}")))
    }
}

impl Serialize for BidId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for BidId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<BidId>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

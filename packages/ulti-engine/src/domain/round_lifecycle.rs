//! Game creation and round rotation.

use tracing::info;

use crate::config::EngineConfig;
use crate::domain::cards_types::GameType;
use crate::domain::dealing::deal_hands;
use crate::domain::invariants::transition;
use crate::domain::kontra::KontraLadder;
use crate::domain::scoring::ScoreBreakdown;
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{
    next_player, round_start_seat, Auction, EngineState, Phase, Seat, Trick, PLAYERS,
};
use crate::errors::domain::{EngineError, RuleKind};

/// Start a game with dealer 0. Without a seed one is drawn and recorded in
/// `game_seed`, so the session can still be replayed.
pub fn new_game(seed: Option<u64>) -> EngineState {
    new_game_with(&EngineConfig {
        seed,
        ..EngineConfig::default()
    })
}

pub fn new_game_with(config: &EngineConfig) -> EngineState {
    let game_seed = config.seed.unwrap_or_else(rand::random);
    let dealer = config.starting_dealer % PLAYERS as Seat;
    deal_round(game_seed, 1, dealer, [0; PLAYERS], None)
}

/// Deal the following round: dealer rotates, balances carry over.
pub fn next_round(state: &EngineState) -> Result<EngineState, EngineError> {
    if state.phase != Phase::RoundEnd {
        return Err(EngineError::rule(
            RuleKind::TurnViolation,
            format!("next_round: round not finished ({:?})", state.phase),
        ));
    }
    transition(state, "next_round", |s| {
        *s = deal_round(
            s.game_seed,
            s.round_no + 1,
            next_player(s.dealer),
            s.balances,
            s.last_score.take(),
        );
        Ok(())
    })
}

fn deal_round(
    game_seed: u64,
    round_no: u32,
    dealer: Seat,
    balances: [i32; PLAYERS],
    last_score: Option<ScoreBreakdown>,
) -> EngineState {
    let hands = deal_hands(dealer, derive_dealing_seed(game_seed, round_no));
    let opener = round_start_seat(dealer);
    info!(round = round_no, dealer, game_seed, "Round dealt");

    EngineState {
        phase: Phase::Bid,
        dealer,
        leader: opener,
        current_player: opener,
        hands,
        talon: Vec::new(),
        trick: Trick::new(opener),
        tricks_won: Default::default(),
        auction: Auction::opening(),
        contract: None,
        game_type: GameType::default(),
        trump_suit: None,
        trick_index: 0,
        announcements: Vec::new(),
        last_trick: None,
        kontra: KontraLadder::default(),
        last_score,
        balances,
        round_no,
        game_seed,
    }
}

use crate::domain::bela::{announce_bela, BelaAnnouncement};
use crate::domain::bids::BidId;
use crate::domain::cards_types::Suit;
use crate::domain::state::{EngineState, Phase};
use crate::domain::test_state_helpers::play_state;
use crate::domain::tricks::{legal_moves, play_card};
use crate::errors::domain::RuleKind;

fn play_first_legal(s: &EngineState) -> EngineState {
    let seat = s.current_player;
    play_card(s, seat, legal_moves(s, seat)[0]).unwrap()
}

#[test]
fn trump_pair_is_worth_forty() {
    let s = play_state(BidId::Ulti, 0, Some(Suit::Clubs));
    let s = announce_bela(&s, 0, Suit::Clubs).unwrap();
    assert_eq!(
        s.announcements,
        vec![BelaAnnouncement {
            seat: 0,
            suit: Suit::Clubs,
            value: 40
        }]
    );
}

#[test]
fn side_suit_pair_is_worth_twenty() {
    let s = play_state(BidId::TwentyHundred, 1, Some(Suit::Hearts));
    let s = announce_bela(&s, 1, Suit::Bells).unwrap();
    let s = announce_bela(&s, 1, Suit::Leaves).unwrap();
    let values: Vec<i32> = s.announcements.iter().map(|a| a.value).collect();
    assert_eq!(values, vec![20, 20]);
}

#[test]
fn repeat_announcement_is_a_no_op() {
    let s = play_state(BidId::Ulti, 0, Some(Suit::Clubs));
    let once = announce_bela(&s, 0, Suit::Clubs).unwrap();
    let twice = announce_bela(&once, 0, Suit::Clubs).unwrap();
    assert_eq!(once, twice);
    assert_eq!(twice.announcements.len(), 1);
}

#[test]
fn pair_must_be_held() {
    let s = play_state(BidId::Ulti, 0, Some(Suit::Clubs));
    let err = announce_bela(&s, 0, Suit::Bells).unwrap_err();
    assert_eq!(err.kind(), Some(RuleKind::AnnouncementViolation));
}

#[test]
fn only_current_player_announces() {
    let s = play_state(BidId::Ulti, 0, Some(Suit::Clubs));
    let err = announce_bela(&s, 1, Suit::Bells).unwrap_err();
    assert_eq!(err.kind(), Some(RuleKind::TurnViolation));
}

#[test]
fn followers_announce_during_first_trick() {
    let s = play_state(BidId::Ulti, 1, Some(Suit::Hearts));
    let s = play_first_legal(&s);
    assert_eq!(s.current_player, 2);
    let s = announce_bela(&s, 2, Suit::Hearts).unwrap();
    assert_eq!(s.announcements[0].value, 40);
    assert_eq!(s.announcements[0].seat, 2);
}

#[test]
fn window_closes_after_first_trick() {
    let s = play_state(BidId::Ulti, 0, Some(Suit::Clubs));
    let s = play_first_legal(&s);
    let s = play_first_legal(&s);
    let s = play_first_legal(&s);
    assert_eq!(s.trick_index, 1);
    let err = announce_bela(&s, s.current_player, Suit::Clubs).unwrap_err();
    assert_eq!(err.kind(), Some(RuleKind::AnnouncementViolation));
}

#[test]
fn no_bela_without_trump() {
    let s = play_state(BidId::Betli, 1, None);
    let err = announce_bela(&s, 1, Suit::Bells).unwrap_err();
    assert_eq!(err.kind(), Some(RuleKind::AnnouncementViolation));
}

#[test]
fn no_bela_outside_play() {
    let mut s = play_state(BidId::Ulti, 0, Some(Suit::Clubs));
    s.phase = Phase::DeclareTrump;
    let err = announce_bela(&s, 0, Suit::Clubs).unwrap_err();
    assert_eq!(err.kind(), Some(RuleKind::TurnViolation));
}

//! API tests for holdem-engine
//!
//! Эти тесты проверяют:
//! - посадку игроков: свободные места, повторный вход, переполнение
//! - wire-формат снапшота (camelCase, стадии в верхнем регистре)
//! - кодирование -1 для отсутствующего хода
//! - разбор wire-операций (join / start / move / settle)
//! - проходку раздачи через комнату

use holdem_engine::api::{Room, RoomError, RoomOp};
use holdem_engine::domain::{Chips, Stage, TableConfig};
use holdem_engine::engine::{ActionKind, EngineError};
use serde_json::json;

fn full_room() -> Room {
    let mut room = Room::new(TableConfig::default());
    for name in ["Ann", "Bob", "Cid", "Dot"] {
        room.join(name).expect("seat available");
    }
    room
}

//
// TEST 1 — join fills seats in order
//
#[test]
fn join_fills_free_seats_in_order() {
    let mut room = Room::new(TableConfig::default());

    let (seat_a, dto_a) = room.join("Ann").expect("join");
    let (seat_b, _) = room.join("Bob").expect("join");

    assert_eq!(seat_a, 0);
    assert_eq!(seat_b, 1);
    assert_eq!(dto_a.name.as_deref(), Some("Ann"));
    assert_eq!(dto_a.chips, 10_000);
}

//
// TEST 2 — rejoining with the same name resets the seat to a clean state
//
#[test]
fn rejoin_with_same_name_reuses_the_seat() {
    let mut room = full_room();
    room.start(42).expect("start");

    // Seat 2 (SB) уже поставил блайнд и сфолдил до повторного входа.
    room.make_move(0, ActionKind::Fold, None).expect("fold");
    room.make_move(1, ActionKind::Fold, None).expect("fold");
    room.make_move(2, ActionKind::Fold, None).expect("fold");

    let (seat, dto) = room.join("Cid").expect("rejoin");
    assert_eq!(seat, 2, "existing seat is reused instead of a new one");
    assert_eq!(dto.chips, 10_000, "stack is reset to the initial stake");
    assert_eq!(dto.bet, 0, "no stale street bet after rejoin");
    assert_eq!(dto.total_hand_bet, 0, "no stale hand bet after rejoin");
    assert!(!dto.has_folded, "fold flag does not survive a rejoin");
}

//
// TEST 3 — a fifth distinct name does not fit
//
#[test]
fn join_rejects_a_full_table() {
    let mut room = full_room();

    let err = room.join("Eve").unwrap_err();
    assert_eq!(err, RoomError::TableFull);
    assert_eq!(err.to_string(), "table full");
}

//
// TEST 4 — blank names are rejected
//
#[test]
fn join_rejects_blank_names() {
    let mut room = Room::new(TableConfig::default());

    assert_eq!(room.join("").unwrap_err(), RoomError::NameRequired);
    assert_eq!(room.join("   ").unwrap_err(), RoomError::NameRequired);
}

//
// TEST 5 — snapshot serializes to the fixed camelCase shape
//
#[test]
fn snapshot_uses_camel_case_and_uppercase_stages() {
    let mut room = full_room();
    room.start(42).expect("start");

    let v = serde_json::to_value(room.snapshot()).expect("serialize");

    assert_eq!(v["stage"], "PREFLOP");
    assert_eq!(v["handId"], 1);
    assert_eq!(v["deckSeed"], 42);
    assert_eq!(v["pot"], 150);
    assert_eq!(v["highestBet"], 100);
    assert_eq!(v["dealerIndex"], 1);
    assert_eq!(v["currentTurnIndex"], 0);
    assert_eq!(v["players"][3]["totalHandBet"], 100);
    assert_eq!(v["players"][0]["hasFolded"], false);
    assert_eq!(v["players"][0]["name"], "Ann");
}

//
// TEST 6 — no pending turn encodes as -1
//
#[test]
fn idle_room_encodes_turn_as_minus_one() {
    let room = full_room();

    let v = serde_json::to_value(room.snapshot()).expect("serialize");
    assert_eq!(v["stage"], "IDLE");
    assert_eq!(v["currentTurnIndex"], -1);
}

//
// TEST 7 — wire operations parse from JSON
//
#[test]
fn room_ops_parse_from_wire_json() {
    let join: RoomOp = serde_json::from_value(json!({"op": "join", "name": "Ann"})).unwrap();
    assert_eq!(join, RoomOp::Join { name: "Ann".into() });

    let start: RoomOp = serde_json::from_value(json!({"op": "start"})).unwrap();
    assert_eq!(start, RoomOp::Start);

    let mv: RoomOp = serde_json::from_value(json!({
        "op": "move", "playerIndex": 2, "move": "allin", "amount": 500
    }))
    .unwrap();
    assert_eq!(
        mv,
        RoomOp::Move {
            player_index: 2,
            action: ActionKind::AllIn,
            amount: Some(500),
        }
    );

    // amount опционален.
    let fold: RoomOp = serde_json::from_value(json!({
        "op": "move", "playerIndex": 0, "move": "fold"
    }))
    .unwrap();
    assert_eq!(
        fold,
        RoomOp::Move {
            player_index: 0,
            action: ActionKind::Fold,
            amount: None,
        }
    );

    let settle: RoomOp = serde_json::from_value(json!({"op": "settle", "winners": [1, 2]})).unwrap();
    assert_eq!(settle, RoomOp::Settle { winners: vec![1, 2] });
}

//
// TEST 8 — a hand can be played through the room surface
//
#[test]
fn hand_plays_through_room_ops() {
    let mut room = full_room();
    room.start(42).expect("start");

    for seat in [0usize, 1, 2] {
        room.make_move(seat, ActionKind::Fold, None).expect("fold");
    }

    let snap = room.snapshot();
    assert_eq!(snap.stage, Stage::Showdown);
    assert_eq!(snap.winners, vec![3]);
    assert_eq!(snap.players[3].chips, 10_050, "BB keeps the blinds");
    assert!(room.active_hand().is_none(), "finished hand releases its resources");
}

//
// TEST 9 — out-of-range player index is a room-level error
//
#[test]
fn make_move_rejects_bad_player_index() {
    let mut room = full_room();
    room.start(42).expect("start");

    let err = room.make_move(7, ActionKind::Call, None).unwrap_err();
    assert_eq!(err, RoomError::InvalidPlayerIndex(7));
    assert_eq!(err.to_string(), "invalid playerIndex 7");
}

//
// TEST 10 — forced settle pays the named winners and ends the hand
//
#[test]
fn settle_op_pays_named_winners() {
    let mut room = full_room();
    room.start(42).expect("start");

    let share = room.settle(&[0, 1]).expect("settle");
    assert_eq!(share, Chips::new(75), "150 blinds split two ways");

    let snap = room.snapshot();
    assert_eq!(snap.stage, Stage::Showdown);
    assert_eq!(snap.winners, vec![0, 1]);

    let err = room.settle(&[]).unwrap_err();
    assert_eq!(err, RoomError::Engine(EngineError::NoWinners));
    assert_eq!(err.to_string(), "Расчёт без победителей невозможен");
}

//
// TEST 11 — starting over an unfinished hand abandons it
//
#[test]
fn restart_abandons_a_live_hand() {
    let mut room = full_room();
    room.start(42).expect("first start");
    room.make_move(0, ActionKind::Call, None).expect("call");

    room.start(43).expect("restart");
    let snap = room.snapshot();
    assert_eq!(snap.hand_id, 2, "restart is a brand-new hand");
    assert_eq!(snap.stage, Stage::Preflop);
    assert_eq!(snap.deck_seed, 43);
    assert_eq!(snap.pot, 150, "only fresh blinds are in the pot");
}

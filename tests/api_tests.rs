// tests/api_tests.rs
//
// Read-only API: DTO партии, сообщения раундов, отчёт по статистике.

mod common;

use common::{layout_a, layout_b, player_with, two_player_game};
use loto_engine::api::{
    build_card_view, build_game_view, build_round_view, build_stats, rank_by_score,
    statistics_report, STATISTICS_HEADER,
};
use loto_engine::domain::{Card, PlayerKind};
use loto_engine::engine::GameState;

use PlayerKind::{Computer, Human};

#[test]
fn statistics_report_has_header_and_ranking() {
    let mut a = player_with("A", Human, layout_a());
    let mut b = player_with("B", Computer, layout_b());
    a.add_loss();
    b.add_win();

    let report = statistics_report(&[a.clone(), b.clone()]);
    assert!(report.contains(STATISTICS_HEADER));
    assert!(report.contains("СТАТИСТИКА ИГРОКОВ"));

    let pos_a = report.find("1. B").expect("B ranks first");
    let pos_b = report.find("2. A").expect("A ranks second");
    assert!(pos_a < pos_b);
    assert!(report.contains("100.0%"));
}

#[test]
fn rank_keeps_order_on_ties() {
    let a = player_with("A", Human, layout_a());
    let mut b = player_with("B", Computer, layout_b());
    let c = player_with("C", Computer, layout_b());
    b.add_win();

    let players = vec![a, b, c];
    let ranked = rank_by_score(&players);
    let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A", "C"]);

    let stats = build_stats(&players);
    assert_eq!(stats[0].score, 10);
    assert_eq!(stats[0].win_rate, 100.0);
}

#[test]
fn card_view_hides_layout() {
    let card = Card::from_layout("X", layout_a());
    let hidden = build_card_view(&card, false);
    assert!(hidden.rows.is_none());
    assert_eq!(hidden.remaining, 15);

    let open = build_card_view(&card, true);
    let rows = open.rows.unwrap();
    assert_eq!(rows[0][0], Some(5));
    assert_eq!(open.marked.len(), 3);
    assert_eq!(open.marked[0].len(), 9);
}

#[test]
fn game_view_reflects_pending_decision() {
    let mut game = two_player_game(Human, Computer, &[5]);
    game.step().unwrap();

    let view = build_game_view(&game, true, |p| p.kind == Human);
    assert_eq!(view.state, GameState::InProgress);
    assert_eq!(view.current_barrel, Some(5));
    assert_eq!(view.awaiting_decision_from, Some(0));
    assert!(view.players[0].card.rows.is_some());
    assert!(view.players[1].card.rows.is_none());
    assert_eq!(view.barrels_left, 0);
}

#[test]
fn round_messages() {
    let mut game = two_player_game(Computer, Human, &[23, 5]);

    let r = game.step().unwrap();
    assert_eq!(build_round_view(&game, &r).message, "A зачеркнул 23");

    game.step().unwrap();
    let r = game.submit_human_decision(true).unwrap();
    assert_eq!(
        build_round_view(&game, &r).message,
        "ОШИБКА! 5 нет на карточке! B проигрывает."
    );

    let view = build_game_view(&game, false, |_| false);
    assert_eq!(view.disqualified.as_deref(), Some("B"));
    assert!(view.winner.is_none());
}

#[test]
fn dto_serializes_to_json() {
    let game = two_player_game(Computer, Computer, &[90]);
    let view = build_game_view(&game, false, |_| true);
    let json = serde_json::to_string(&view).unwrap();
    assert!(json.contains("\"state\":\"Setup\""));
    assert!(json.contains("\"kind\":\"computer\""));
}

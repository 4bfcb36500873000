//! Player: статистика, процент побед, сравнение, парсинг типа.

mod common;

use std::cmp::Ordering;
use std::str::FromStr;

use common::{layout_a, layout_b, player_with};
use loto_engine::domain::{PlayerDescriptor, PlayerKind, PlayerKindParseError};

#[test]
fn win_rate_zero_hundred_fifty() {
    let mut p = player_with("Тестовый игрок", PlayerKind::Human, layout_a());
    assert_eq!(p.win_rate(), 0.0);

    p.add_win();
    assert_eq!(p.win_rate(), 100.0);

    p.add_loss();
    assert_eq!(p.win_rate(), 50.0);
}

#[test]
fn add_win_updates_all_counters() {
    let mut p = player_with("P", PlayerKind::Human, layout_a());
    p.add_win();
    assert_eq!(p.games_played(), 1);
    assert_eq!(p.games_won(), 1);
    assert_eq!(p.score(), 10);
}

#[test]
fn add_loss_changes_only_games_played() {
    let mut p = player_with("P", PlayerKind::Computer, layout_a());
    p.add_loss();
    assert_eq!(p.games_played(), 1);
    assert_eq!(p.games_won(), 0);
    assert_eq!(p.score(), 0);
}

#[test]
fn display_name_and_kind() {
    let h = player_with("Тестовый игрок", PlayerKind::Human, layout_a());
    let c = player_with("Компьютер", PlayerKind::Computer, layout_b());
    assert_eq!(h.to_string(), "Тестовый игрок (human)");
    assert_eq!(c.to_string(), "Компьютер (computer)");
}

#[test]
fn equality_by_name_and_kind_only() {
    let p1 = player_with("Тестовый игрок", PlayerKind::Human, layout_a());
    let mut p2 = player_with("Тестовый игрок", PlayerKind::Human, layout_b());
    p2.add_win();
    let p3 = player_with("Тестовый игрок", PlayerKind::Computer, layout_a());

    assert_eq!(p1, p2);
    assert_ne!(p1, p3);
}

#[test]
fn compare_by_score() {
    let mut p1 = player_with("A", PlayerKind::Human, layout_a());
    let mut p2 = player_with("B", PlayerKind::Computer, layout_b());
    p1.stats.score = 10;
    p2.stats.score = 20;

    assert_eq!(p1.cmp_by_score(&p2), Ordering::Less);
    assert_eq!(p2.cmp_by_score(&p1), Ordering::Greater);
}

#[test]
fn kind_parsing() {
    for s in ["human", "h", "Человек", " H "] {
        assert_eq!(PlayerKind::from_str(s), Ok(PlayerKind::Human));
    }
    for s in ["computer", "c", "компьютер"] {
        assert_eq!(PlayerKind::from_str(s), Ok(PlayerKind::Computer));
    }
    assert_eq!(
        PlayerKind::from_str("robot"),
        Err(PlayerKindParseError("robot".to_string()))
    );
}

#[test]
fn default_names_by_position() {
    assert_eq!(PlayerKind::Human.default_name(1), "Игрок 1");
    assert_eq!(PlayerKind::Computer.default_name(2), "Компьютер 2");

    let d = PlayerDescriptor::named("Вася", PlayerKind::Human);
    assert_eq!(d.name.as_deref(), Some("Вася"));
}

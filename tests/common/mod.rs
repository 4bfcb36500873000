//! Общие помощники для интеграционных тестов.
#![allow(dead_code)]

use loto_engine::domain::{Barrel, Card, CardLayout, Drum, GameConfig, Player, PlayerKind};
use loto_engine::engine::{Game, RandomSource};

/// RNG без перемешивания: порядок остаётся исходным.
#[derive(Default)]
pub struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

/// Карточка A:
///  5  .  23 .  41 .  62 .  85
///  .  12 .  34 .  55 .  77 88
///  .  17 28 .  46 59 .  71 .
pub fn layout_a() -> CardLayout {
    [
        [Some(5), None, Some(23), None, Some(41), None, Some(62), None, Some(85)],
        [None, Some(12), None, Some(34), None, Some(55), None, Some(77), Some(88)],
        [None, Some(17), Some(28), None, Some(46), Some(59), None, Some(71), None],
    ]
}

/// Карточка B, не пересекается с A.
pub fn layout_b() -> CardLayout {
    [
        [Some(1), None, Some(21), None, Some(42), None, Some(63), None, Some(81)],
        [None, Some(11), None, Some(31), None, Some(51), None, Some(72), Some(82)],
        [None, Some(13), Some(24), None, Some(44), Some(52), None, Some(73), None],
    ]
}

/// Числа, которых нет ни на A, ни на B.
pub const ABSENT_ON_BOTH: [u8; 16] = [2, 3, 4, 6, 7, 8, 9, 10, 14, 15, 16, 18, 19, 20, 90, 89];

pub fn numbers_of(layout: &CardLayout) -> Vec<u8> {
    layout.iter().flatten().filter_map(|c| *c).collect()
}

/// Мешок, который выдаёт бочонки ровно в порядке `draws`.
pub fn drum_drawing(draws: &[u8]) -> Drum {
    Drum::from_order(draws.iter().rev().map(|&n| Barrel(n)).collect())
}

pub fn player_with(name: &str, kind: PlayerKind, layout: CardLayout) -> Player {
    Player::new(name, kind, Card::from_layout(name, layout))
}

/// Партия из двух игроков (A, B) с заданным порядком бочонков.
pub fn two_player_game(kind_a: PlayerKind, kind_b: PlayerKind, draws: &[u8]) -> Game {
    two_player_game_with_config(kind_a, kind_b, draws, GameConfig::default())
}

pub fn two_player_game_with_config(
    kind_a: PlayerKind,
    kind_b: PlayerKind,
    draws: &[u8],
    config: GameConfig,
) -> Game {
    let players = vec![
        player_with("A", kind_a, layout_a()),
        player_with("B", kind_b, layout_b()),
    ];
    Game::from_parts(players, drum_drawing(draws), config).expect("valid setup")
}

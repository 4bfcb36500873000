use serde::{Deserialize, Serialize};

use crate::domain::barrel::BARRELS_TOTAL;

/// Конфиг партии: сколько бочонков, как считать статистику.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Сколько бочонков в мешке (1..=90).
    pub drum_size: u8,
    /// Минимальное количество игроков.
    pub min_players: usize,
    /// Очки победителю.
    pub win_score: u32,
    /// Засчитывать ли партию всем участникам при ничьей или дисквалификации.
    pub count_unfinished_games: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            drum_size: BARRELS_TOTAL,
            min_players: 2,
            win_score: 10,
            count_unfinished_games: true,
        }
    }
}

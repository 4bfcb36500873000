use core::fmt;
use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;

/// Кто принимает решения за игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Человек: отвечает "зачеркнуть / нет" на каждый бочонок.
    Human,
    /// Компьютер: зачёркивает сам и никогда не ошибается.
    Computer,
}

impl PlayerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer => "computer",
        }
    }

    /// Имя по умолчанию для игрока на позиции `position` (с 1).
    pub fn default_name(self, position: usize) -> String {
        match self {
            PlayerKind::Human => format!("Игрок {position}"),
            PlayerKind::Computer => format!("Компьютер {position}"),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("неизвестный тип игрока: {0:?}")]
pub struct PlayerKindParseError(pub String);

/// Парсинг "human" / "computer" / "h" / "c" / "человек" / "компьютер".
impl FromStr for PlayerKind {
    type Err = PlayerKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" | "h" | "человек" => Ok(PlayerKind::Human),
            "computer" | "c" | "компьютер" => Ok(PlayerKind::Computer),
            other => Err(PlayerKindParseError(other.to_string())),
        }
    }
}

/// Описание игрока при создании партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDescriptor {
    /// `None` — имя по умолчанию по позиции.
    pub name: Option<String>,
    pub kind: PlayerKind,
}

impl PlayerDescriptor {
    pub fn new(kind: PlayerKind) -> Self {
        Self { name: None, kind }
    }

    pub fn named(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: Some(name.into()),
            kind,
        }
    }
}

/// Накопленная статистика игрока за сессию.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStats {
    pub games_played: u32,
    pub games_won: u32,
    pub score: u32,
}

/// Игрок: имя, тип, карточка текущей партии и статистика.
///
/// Равенство — по имени и типу. Для рейтинга см. `cmp_by_score`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
    pub card: Card,
    pub stats: PlayerStats,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind, card: Card) -> Self {
        Self {
            name: name.into(),
            kind,
            card,
            stats: PlayerStats::default(),
        }
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    pub fn games_played(&self) -> u32 {
        self.stats.games_played
    }

    pub fn games_won(&self) -> u32 {
        self.stats.games_won
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    /// Процент побед, 0.0 если партий ещё не было.
    pub fn win_rate(&self) -> f64 {
        if self.stats.games_played == 0 {
            return 0.0;
        }
        f64::from(self.stats.games_won) / f64::from(self.stats.games_played) * 100.0
    }

    /// Победа со стандартными очками.
    pub fn add_win(&mut self) {
        self.add_win_with_score(crate::domain::GameConfig::default().win_score);
    }

    pub fn add_win_with_score(&mut self, score: u32) {
        self.stats.games_played += 1;
        self.stats.games_won += 1;
        self.stats.score += score;
    }

    /// Поражение: только счётчик партий.
    pub fn add_loss(&mut self) {
        self.stats.games_played += 1;
    }

    /// Сравнение по очкам (для рейтинга).
    pub fn cmp_by_score(&self, other: &Self) -> Ordering {
        self.stats.score.cmp(&other.stats.score)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl Eq for Player {}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::{Barrel, PlayerIndex};
use crate::engine::moves::DisqualificationReason;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Партия началась.
    GameStarted { players: usize, barrels: usize },

    /// Из мешка вытянут бочонок.
    BarrelDrawn { barrel: Barrel, player: PlayerIndex },

    /// Игрок зачеркнул число.
    NumberMarked {
        player: PlayerIndex,
        number: u8,
        remaining: usize,
    },

    /// Игрок пропустил ход.
    Passed { player: PlayerIndex, number: u8 },

    /// Человек ошибся и снят с партии.
    Disqualified {
        player: PlayerIndex,
        number: u8,
        reason: DisqualificationReason,
    },

    /// Победа: все числа зачёркнуты.
    GameWon { player: PlayerIndex },

    /// Бочонки кончились, победителя нет.
    GameDrawn,
}

/// Событие в партии с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Все вытянутые бочонки по порядку.
    pub fn drawn_barrels(&self) -> Vec<Barrel> {
        self.events
            .iter()
            .filter_map(|e| match e.kind {
                GameEventKind::BarrelDrawn { barrel, .. } => Some(barrel),
                _ => None,
            })
            .collect()
    }
}

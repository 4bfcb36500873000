use std::io;

use crate::domain::{GeneratorError, PlayerIndex};

use thiserror::Error;

/// Ошибки движка лото.
///
/// Конец партии (ничья, дисквалификация) ошибкой не считается —
/// это терминальные состояния `Game`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Нужно не меньше {minimum} игроков, передано {requested}")]
    NotEnoughPlayers { requested: usize, minimum: usize },

    #[error("Неизвестный тип игрока: {0}")]
    UnknownPlayerKind(String),

    #[error("Недопустимый размер мешка: {0} (нужно 1..=90)")]
    InvalidDrumSize(u8),

    #[error("Партия уже закончена")]
    GameFinished,

    #[error("Ждём решения игрока #{player}")]
    DecisionPending { player: PlayerIndex },

    #[error("Сейчас никто не должен принимать решение")]
    NoPendingDecision,

    #[error("Нет ответа игрока: {0}")]
    ClaimUnavailable(#[source] io::Error),

    #[error("Ошибка генерации карточки: {0}")]
    Generator(#[from] GeneratorError),
}

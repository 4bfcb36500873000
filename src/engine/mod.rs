//! Движок лото: тираж бочонков, ходы игроков, определение победителя.
//!
//! Высокоуровневый объект: `Game`
//! Основные операции:
//!   - `Game::new` – собрать игру по списку игроков
//!   - `Game::step` – вытянуть бочонок и разыграть ход
//!   - `Game::submit_human_decision` – ответ человека на текущий бочонок

pub mod errors;
pub mod game_history;
pub mod game_loop;
pub mod moves;

pub use errors::EngineError;
pub use game_history::{GameEvent, GameEventKind, GameHistory};
pub use game_loop::{ClaimSource, Game, GameOutcome, GameState, HonestClaims, RoundResult};
pub use moves::{resolve_computer_move, resolve_human_move, Claim, DisqualificationReason, MoveSummary};

/// RNG интерфейс для движка и генератора карточек.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerKind;
use crate::domain::PlayerIndex;
use crate::engine::{DisqualificationReason, GameState, MoveSummary, RoundResult};

/// DTO карточки: раскладка видна только если её разрешено показать.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardViewDto {
    pub card_id: String,
    /// Раскладка (`None` в ячейке — пусто). `None` целиком — карточка скрыта.
    pub rows: Option<Vec<Vec<Option<u8>>>>,
    pub marked: Vec<Vec<bool>>,
    pub remaining: usize,
    /// Готовая текстовая отрисовка.
    pub rendered: String,
}

/// DTO игрока.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerViewDto {
    pub index: PlayerIndex,
    pub name: String,
    pub kind: PlayerKind,
    pub card: CardViewDto,
    pub games_played: u32,
    pub games_won: u32,
    pub score: u32,
    pub win_rate: f64,
}

/// DTO партии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameViewDto {
    pub state: GameState,
    pub current_barrel: Option<u8>,
    pub barrels_left: usize,
    pub current_player: PlayerIndex,
    /// Кто сейчас должен ответить "да/нет".
    pub awaiting_decision_from: Option<PlayerIndex>,
    pub winner: Option<String>,
    pub disqualified: Option<String>,
    pub players: Vec<PlayerViewDto>,
}

/// DTO раунда — то, что показываем после каждого хода.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundViewDto {
    pub barrel: Option<u8>,
    pub player_name: Option<String>,
    pub state: GameState,
    pub message: String,
}

impl RoundViewDto {
    pub fn from_round(result: &RoundResult, player_name: Option<String>) -> Self {
        let who = player_name.clone().unwrap_or_default();
        let message = match result.move_summary {
            MoveSummary::Marked { number } if result.state == GameState::Won => {
                format!("{who} зачеркнул {number} и ПОБЕДИЛ!")
            }
            MoveSummary::Marked { number } => format!("{who} зачеркнул {number}"),
            MoveSummary::Passed { .. } => format!("{who} пропустил ход"),
            MoveSummary::AwaitingClaim { number } => {
                format!("{who}, ваш ход! Бочонок {number}")
            }
            MoveSummary::Disqualified { number, reason } => match reason {
                DisqualificationReason::ClaimedMissingNumber => {
                    format!("ОШИБКА! {number} нет на карточке! {who} проигрывает.")
                }
                DisqualificationReason::MissedNumber => {
                    format!("ОШИБКА! {number} есть на карточке! {who} проигрывает.")
                }
            },
            MoveSummary::DrumExhausted => {
                "Бочонки закончились! Ничья - никто не зачеркнул все числа".to_string()
            }
            MoveSummary::AlreadyComplete => {
                format!("{who} ПОБЕДИЛ, зачеркнув все числа!")
            }
        };

        Self {
            barrel: result.drawn_barrel.map(|b| b.number()),
            player_name,
            state: result.state,
            message,
        }
    }
}

/// Строка статистики одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerStatsDto {
    pub name: String,
    pub kind: PlayerKind,
    pub games_played: u32,
    pub games_won: u32,
    pub score: u32,
    pub win_rate: f64,
}

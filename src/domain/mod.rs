//! Доменная модель лото: бочонки, мешок, карточки, игроки, конфиг партии.

pub mod barrel;
pub mod card;
pub mod card_layout;
pub mod config;
pub mod drum;
pub mod player;

/// Позиция игрока в партии (порядок ходов).
pub type PlayerIndex = usize;

pub use barrel::*;
pub use card::*;
pub use card_layout::*;
pub use config::*;
pub use drum::*;
pub use player::*;

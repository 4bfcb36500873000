//! Движок настольного лото.
//!
//! Мешок из 90 бочонков, карточки 3×9 по 15 чисел, игроки-люди и
//! компьютеры. Консольный ввод/вывод живёт в `src/bin/loto_cli.rs`,
//! здесь только доменная модель, движок и read-only API.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

//! Внешний API движка лото — только чтение.
//!
//! Здесь описываются:
//! - DTO (dto.rs) — структуры для консоли или другого фронта;
//! - запросы (queries.rs) — построение DTO и отчёт по статистике.

pub mod dto;
pub mod queries;

pub use dto::*;
pub use queries::*;

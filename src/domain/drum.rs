use serde::{Deserialize, Serialize};

use crate::domain::barrel::{Barrel, BARRELS_TOTAL};
use crate::engine::RandomSource;

/// Мешок с бочонками: порядок вытягивания без возврата.
/// Источник случайности передаётся снаружи (RNG из infra).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Drum {
    /// Оставшиеся бочонки; тянем с конца.
    order: Vec<Barrel>,
    /// Последний вытянутый бочонок.
    drawn: Option<Barrel>,
    /// Сколько бочонков уже вытянуто.
    drawn_count: usize,
}

impl Drum {
    /// Стандартный мешок 1..=90 в порядке возрастания.
    pub fn standard() -> Self {
        Self::with_size(BARRELS_TOTAL)
    }

    /// Перемешанный мешок 1..=size.
    pub fn shuffled<R: RandomSource>(size: u8, rng: &mut R) -> Self {
        let mut drum = Self::with_size(size);
        rng.shuffle(&mut drum.order);
        drum
    }

    /// Мешок 1..=size в порядке возрастания.
    pub fn with_size(size: u8) -> Self {
        Self::from_order((1..=size).map(Barrel).collect())
    }

    /// Мешок с заранее заданным порядком. Первым вытянется последний элемент.
    pub fn from_order(order: Vec<Barrel>) -> Self {
        Self {
            order,
            drawn: None,
            drawn_count: 0,
        }
    }

    /// Оставшиеся бочонки, следующий — последний в срезе.
    pub fn order(&self) -> &[Barrel] {
        &self.order
    }

    pub fn drawn(&self) -> Option<Barrel> {
        self.drawn
    }

    pub fn drawn_count(&self) -> usize {
        self.drawn_count
    }

    pub fn remaining(&self) -> usize {
        self.order.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.order.is_empty()
    }

    /// Вытянуть следующий бочонок. `None` — мешок пуст.
    pub fn draw(&mut self) -> Option<Barrel> {
        let barrel = self.order.pop()?;
        self.drawn = Some(barrel);
        self.drawn_count += 1;
        Some(barrel)
    }
}

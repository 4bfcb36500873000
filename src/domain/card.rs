use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card_layout::{
    generate_layout, validate_layout, CardLayout, GeneratorError, LayoutViolation, CARD_COLUMNS,
    CARD_ROWS,
};
use crate::engine::RandomSource;

/// Рамка карточки при отрисовке.
const CARD_BORDER_WIDTH: usize = 26;

/// Карточка лото: неизменяемая раскладка + отметки.
///
/// Равенство — по раскладке, отметкам и остатку; подпись не учитывается.
/// При десериализации раскладка проверяется, остаток пересчитывается по отметкам.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "CardRepr")]
pub struct Card {
    /// Подпись над сеткой ("Игрок 1", "Компьютер 2").
    pub card_id: String,
    layout: CardLayout,
    marked: [[bool; CARD_COLUMNS]; CARD_ROWS],
    remaining: usize,
}

impl Card {
    /// Новая случайная карточка.
    pub fn generate<R: RandomSource>(
        card_id: impl Into<String>,
        rng: &mut R,
    ) -> Result<Self, GeneratorError> {
        Ok(Self::from_layout(card_id, generate_layout(rng)?))
    }

    /// Карточка с готовой раскладкой (тесты, реплей).
    pub fn from_layout(card_id: impl Into<String>, layout: CardLayout) -> Self {
        let remaining = layout.iter().flatten().filter(|c| c.is_some()).count();
        Self {
            card_id: card_id.into(),
            layout,
            marked: [[false; CARD_COLUMNS]; CARD_ROWS],
            remaining,
        }
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    pub fn is_marked(&self, row: usize, column: usize) -> bool {
        self.marked
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// Сколько чисел ещё не зачёркнуто.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Сколько чисел уже зачёркнуто.
    pub fn marked_count(&self) -> usize {
        self.numbers().count().saturating_sub(self.remaining)
    }

    /// Все числа карточки, построчно слева направо.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.layout.iter().flatten().filter_map(|c| *c)
    }

    /// Ещё не зачёркнутые числа.
    pub fn unmarked_numbers(&self) -> Vec<u8> {
        self.cells()
            .filter(|&(r, c, _)| !self.marked[r][c])
            .map(|(_, _, n)| n)
            .collect()
    }

    /// Где стоит число (строка, столбец).
    pub fn position_of(&self, number: u8) -> Option<(usize, usize)> {
        self.cells()
            .find(|&(_, _, n)| n == number)
            .map(|(r, c, _)| (r, c))
    }

    /// Число есть на карточке и ещё не зачёркнуто.
    pub fn contains_unmarked(&self, number: u8) -> bool {
        self.position_of(number)
            .is_some_and(|(r, c)| !self.marked[r][c])
    }

    /// Зачеркнуть число. `false` — числа нет или оно уже зачёркнуто.
    pub fn mark(&mut self, number: u8) -> bool {
        match self.position_of(number) {
            Some((r, c)) if !self.marked[r][c] => {
                self.marked[r][c] = true;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Текстовая сетка: зачёркнутое — ` - `, пустое — пробелы,
    /// скрытое (`reveal == false`) — ` * `.
    pub fn render(&self, reveal: bool) -> String {
        let border = "-".repeat(CARD_BORDER_WIDTH);
        let mut lines = Vec::with_capacity(CARD_ROWS + 3);
        lines.push(border.clone());
        if !self.card_id.is_empty() {
            lines.push(format!("Карточка {}", self.card_id));
        }

        for (r, row) in self.layout.iter().enumerate() {
            let mut line = String::with_capacity(CARD_COLUMNS * 3);
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    None => line.push_str("   "),
                    Some(_) if self.marked[r][c] => line.push_str(" - "),
                    Some(_) if !reveal => line.push_str(" * "),
                    Some(n) => line.push_str(&format!("{n:2} ")),
                }
            }
            lines.push(line);
        }

        lines.push(border);
        lines.join("\n")
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.layout.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|n| (r, c, n)))
        })
    }
}

/// Карточка в сыром виде, как она приходит из JSON.
#[derive(Deserialize)]
struct CardRepr {
    card_id: String,
    layout: CardLayout,
    marked: [[bool; CARD_COLUMNS]; CARD_ROWS],
}

impl TryFrom<CardRepr> for Card {
    type Error = LayoutViolation;

    fn try_from(raw: CardRepr) -> Result<Self, Self::Error> {
        validate_layout(&raw.layout)?;

        let mut card = Card::from_layout(raw.card_id, raw.layout);
        for (r, row) in raw.marked.iter().enumerate() {
            for (c, &is_marked) in row.iter().enumerate() {
                if !is_marked {
                    continue;
                }
                match card.layout[r][c] {
                    Some(number) => {
                        card.mark(number);
                    }
                    None => return Err(LayoutViolation::MarkOnEmptyCell { row: r, column: c }),
                }
            }
        }
        Ok(card)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.layout == other.layout
            && self.marked == other.marked
            && self.remaining == other.remaining
    }
}

impl Eq for Card {}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

//! Генератор раскладки карточки 3×9.
//!
//! Правила:
//!   - столбец `c` берёт числа из своего десятка `10c+1 ..= 10c+10`;
//!   - в столбце 1 или 2 числа, в разных строках;
//!   - первый столбец даёт 1 число, последний 2, внутренние пять раз по 2 и дважды по 1;
//!   - в каждой строке ровно 5 чисел, всего 15, по возрастанию слева направо.

use std::ops::RangeInclusive;

use thiserror::Error;
use tracing::warn;

use crate::engine::RandomSource;

pub const CARD_ROWS: usize = 3;
pub const CARD_COLUMNS: usize = 9;
pub const NUMBERS_PER_ROW: usize = 5;
pub const NUMBERS_PER_CARD: usize = CARD_ROWS * NUMBERS_PER_ROW;

/// Сколько раз пробуем сгенерировать раскладку, прежде чем сдаться.
pub const MAX_GENERATION_ATTEMPTS: u32 = 16;

/// Раскладка: 3 строки по 9 ячеек, `None` — пустая ячейка.
pub type CardLayout = [[Option<u8>; CARD_COLUMNS]; CARD_ROWS];

/// Количество чисел во внутренних столбцах 1..=7 (до перемешивания).
const INTERIOR_COLUMN_COUNTS: [usize; CARD_COLUMNS - 2] = [2, 2, 2, 2, 2, 1, 1];

/// Нарушение правил раскладки.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutViolation {
    #[error("на карточке {0} чисел вместо 15")]
    WrongTotal(usize),

    #[error("в строке {row} {count} чисел вместо 5")]
    WrongRowCount { row: usize, count: usize },

    #[error("число {number} не из десятка столбца {column}")]
    OutOfDecade { column: usize, number: u8 },

    #[error("в строке {row} числа идут не по возрастанию")]
    RowNotAscending { row: usize },

    #[error("число {0} встречается на карточке дважды")]
    Duplicate(u8),

    #[error("отмечена пустая ячейка: строка {row}, столбец {column}")]
    MarkOnEmptyCell { row: usize, column: usize },
}

/// Ошибки генератора. Наружу к игроку не уходят.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("не удалось сгенерировать карточку за {attempts} попыток: {last}")]
    InvariantViolation { attempts: u32, last: LayoutViolation },
}

/// Десяток чисел для столбца.
pub fn column_decade(column: usize) -> RangeInclusive<u8> {
    let start = (column * 10 + 1) as u8;
    start..=start + 9
}

/// Какому столбцу принадлежит число.
pub fn column_for_number(number: u8) -> usize {
    (number.saturating_sub(1) as usize / 10).min(CARD_COLUMNS - 1)
}

/// Сгенерировать валидную раскладку. Каждая попытка проверяется,
/// невалидная раскладка перегенерируется.
pub fn generate_layout<R: RandomSource>(rng: &mut R) -> Result<CardLayout, GeneratorError> {
    let mut last = LayoutViolation::WrongTotal(0);

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let layout = draw_layout(rng);
        match validate_layout(&layout) {
            Ok(()) => return Ok(layout),
            Err(violation) => {
                warn!(attempt, %violation, "card layout rejected, regenerating");
                last = violation;
            }
        }
    }

    Err(GeneratorError::InvariantViolation {
        attempts: MAX_GENERATION_ATTEMPTS,
        last,
    })
}

/// Одна попытка генерации.
fn draw_layout<R: RandomSource>(rng: &mut R) -> CardLayout {
    let mut counts = [0usize; CARD_COLUMNS];
    let mut interior = INTERIOR_COLUMN_COUNTS;
    rng.shuffle(&mut interior);
    counts[0] = 1;
    counts[1..CARD_COLUMNS - 1].copy_from_slice(&interior);
    counts[CARD_COLUMNS - 1] = 2;

    let mut layout: CardLayout = [[None; CARD_COLUMNS]; CARD_ROWS];
    let mut row_fill = [0usize; CARD_ROWS];

    for (column, &count) in counts.iter().enumerate() {
        let mut pool: Vec<u8> = column_decade(column).collect();
        rng.shuffle(&mut pool);

        // Случайный порядок строк, затем самые свободные строки вперёд
        // (сортировка стабильная, ничьи остаются случайными).
        let mut rows = [0usize, 1, 2];
        rng.shuffle(&mut rows);
        rows.sort_by_key(|&r| row_fill[r]);

        for (&row, &number) in rows.iter().take(count).zip(pool.iter()) {
            layout[row][column] = Some(number);
            row_fill[row] += 1;
        }
    }

    for row in layout.iter_mut() {
        sort_row(row);
    }

    layout
}

/// Упорядочить числа строки по возрастанию, не меняя набор занятых столбцов.
fn sort_row(row: &mut [Option<u8>; CARD_COLUMNS]) {
    let columns: Vec<usize> = (0..CARD_COLUMNS).filter(|&c| row[c].is_some()).collect();
    let mut values: Vec<u8> = row.iter().flatten().copied().collect();
    values.sort_unstable();

    for (column, value) in columns.into_iter().zip(values) {
        row[column] = Some(value);
    }
}

/// Проверка всех инвариантов раскладки.
pub fn validate_layout(layout: &CardLayout) -> Result<(), LayoutViolation> {
    let mut seen = Vec::with_capacity(NUMBERS_PER_CARD);

    for (row_idx, row) in layout.iter().enumerate() {
        let mut previous: Option<u8> = None;
        let mut count = 0;

        for (column, cell) in row.iter().enumerate() {
            let Some(number) = *cell else { continue };
            count += 1;

            if !column_decade(column).contains(&number) {
                return Err(LayoutViolation::OutOfDecade { column, number });
            }
            if previous.is_some_and(|p| p >= number) {
                return Err(LayoutViolation::RowNotAscending { row: row_idx });
            }
            if seen.contains(&number) {
                return Err(LayoutViolation::Duplicate(number));
            }
            seen.push(number);
            previous = Some(number);
        }

        if count != NUMBERS_PER_ROW {
            return Err(LayoutViolation::WrongRowCount {
                row: row_idx,
                count,
            });
        }
    }

    if seen.len() != NUMBERS_PER_CARD {
        return Err(LayoutViolation::WrongTotal(seen.len()));
    }

    Ok(())
}

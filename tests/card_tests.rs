//! Card + генератор раскладки.
//!
//! Проверяем:
//! - инварианты сгенерированной карточки (15 чисел, по 5 в строке, десятки, возрастание)
//! - идемпотентность mark
//! - отрисовку (зачёркнутые, скрытые, пустые ячейки)
//! - равенство карточек по раскладке и отметкам

mod common;

use common::{layout_a, layout_b, numbers_of, DummyRng};
use loto_engine::domain::{
    column_decade, validate_layout, Card, CardLayout, LayoutViolation, CARD_COLUMNS,
    NUMBERS_PER_CARD, NUMBERS_PER_ROW,
};
use loto_engine::infra::DeterministicRng;
use proptest::prelude::*;

fn assert_layout_invariants(layout: &CardLayout) {
    let mut total = 0;
    for row in layout {
        let values: Vec<(usize, u8)> = row
            .iter()
            .enumerate()
            .filter_map(|(c, cell)| cell.map(|n| (c, n)))
            .collect();
        assert_eq!(values.len(), NUMBERS_PER_ROW, "each row holds exactly 5 numbers");
        for (c, n) in &values {
            assert!(column_decade(*c).contains(n), "{n} outside decade of column {c}");
        }
        for pair in values.windows(2) {
            assert!(pair[0].1 < pair[1].1, "row values must increase left to right");
        }
        total += values.len();
    }
    assert_eq!(total, NUMBERS_PER_CARD);
}

//
// TEST 1 — generated card satisfies every layout rule
//
#[test]
fn generated_card_is_valid() {
    let mut rng = DeterministicRng::from_u64(42);
    for _ in 0..200 {
        let card = Card::generate("t", &mut rng).expect("generation must succeed");
        assert_layout_invariants(card.layout());
        assert_eq!(card.remaining(), 15);
        assert!(!card.is_complete());
    }
}

//
// TEST 2 — generator copes with a source that never shuffles
//
#[test]
fn generator_valid_without_shuffling() {
    let card = Card::generate("dummy", &mut DummyRng).expect("generation must succeed");
    assert_layout_invariants(card.layout());
    assert_eq!(validate_layout(card.layout()), Ok(()));
}

//
// TEST 3 — first column holds one number, last column two
//
#[test]
fn edge_columns_have_fixed_counts() {
    let mut rng = DeterministicRng::from_u64(7);
    for _ in 0..50 {
        let card = Card::generate("", &mut rng).unwrap();
        let count = |c: usize| card.layout().iter().filter(|r| r[c].is_some()).count();
        assert_eq!(count(0), 1);
        assert_eq!(count(CARD_COLUMNS - 1), 2);
        for c in 1..CARD_COLUMNS - 1 {
            assert!((1..=2).contains(&count(c)), "column {c} must hold 1 or 2 numbers");
        }
    }
}

//
// TEST 4 — mark(5): 15 → 14, second mark is a no-op
//
#[test]
fn mark_is_idempotent() {
    let mut card = Card::from_layout("A", layout_a());
    assert_eq!(card.remaining(), 15);

    assert!(card.contains_unmarked(5));
    assert!(card.mark(5));
    assert!(card.is_marked(0, 0));
    assert_eq!(card.remaining(), 14);

    assert!(!card.mark(5));
    assert_eq!(card.remaining(), 14);
    assert!(!card.contains_unmarked(5));
}

//
// TEST 5 — marking a number that is not on the card changes nothing
//
#[test]
fn mark_absent_number_is_noop() {
    let mut card = Card::from_layout("A", layout_a());
    let before = card.clone();

    assert!(!card.contains_unmarked(90));
    assert!(!card.mark(90));
    assert_eq!(card, before);
}

//
// TEST 6 — remaining decreases by exactly one per new mark, down to zero
//
#[test]
fn remaining_counts_down_to_complete() {
    let mut card = Card::from_layout("A", layout_a());
    for (i, n) in numbers_of(&layout_a()).into_iter().enumerate() {
        assert!(card.mark(n));
        assert_eq!(card.remaining(), 15 - (i + 1));
        assert_eq!(card.marked_count(), i + 1);
    }
    assert!(card.is_complete());
    assert!(card.unmarked_numbers().is_empty());
}

//
// TEST 7 — render: header, marked, hidden and empty cells
//
#[test]
fn render_shows_marked_and_hidden_cells() {
    let mut card = Card::from_layout("Игрок 1", layout_a());
    card.mark(5);

    let open = card.render(true);
    let lines: Vec<&str> = open.lines().collect();
    assert_eq!(lines[0], "-".repeat(26));
    assert_eq!(lines[1], "Карточка Игрок 1");
    assert_eq!(lines[2], " -    23    41    62    85 ");
    assert_eq!(lines[3], "   12    34    55    77 88 ");
    assert_eq!(lines[5], "-".repeat(26));

    let hidden = card.render(false);
    let lines: Vec<&str> = hidden.lines().collect();
    assert_eq!(lines[2], " -     *     *     *     * ");
    assert!(!hidden.contains("23"));
}

//
// TEST 8 — equality ignores the label, respects marks
//
#[test]
fn card_equality_by_layout_and_marks() {
    let a1 = Card::from_layout("first", layout_a());
    let mut a2 = Card::from_layout("second", layout_a());
    let b = Card::from_layout("first", layout_b());

    assert_eq!(a1, a2);
    assert_ne!(a1, b);

    a2.mark(12);
    assert_ne!(a1, a2);
}

//
// TEST 9 — different seeds give different cards
//
#[test]
fn different_cards_are_not_equal() {
    let c1 = Card::generate("1", &mut DeterministicRng::from_u64(1)).unwrap();
    let c2 = Card::generate("2", &mut DeterministicRng::from_u64(2)).unwrap();
    assert_ne!(c1, c2);
}

//
// TEST 10 — validate_layout catches decade and duplicate violations
//
#[test]
fn validate_rejects_broken_layouts() {
    let mut out_of_decade = layout_a();
    out_of_decade[0][2] = Some(33);
    assert_eq!(
        validate_layout(&out_of_decade),
        Err(LayoutViolation::OutOfDecade { column: 2, number: 33 })
    );

    let mut duplicate = layout_a();
    duplicate[2][2] = Some(23);
    assert_eq!(validate_layout(&duplicate), Err(LayoutViolation::Duplicate(23)));
}

//
// TEST 11 — deserialization recomputes remaining from the marks
//
#[test]
fn deserialized_card_trusts_marks_not_counter() {
    let mut card = Card::from_layout("X", layout_a());
    card.mark(5);

    let mut json = serde_json::to_value(&card).unwrap();
    json["remaining"] = serde_json::json!(0);

    let mut restored: Card = serde_json::from_value(json).unwrap();
    assert_eq!(restored.remaining(), 14);
    assert!(restored.is_marked(0, 0));
    assert_eq!(restored, card);

    assert!(restored.mark(23));
    assert_eq!(restored.remaining(), 13);
}

//
// TEST 12 — broken layouts and marks on empty cells are rejected
//
#[test]
fn deserialization_rejects_broken_cards() {
    let card = Card::from_layout("X", layout_a());

    let mut empty_mark = serde_json::to_value(&card).unwrap();
    empty_mark["marked"][0][1] = serde_json::json!(true);
    let err = serde_json::from_value::<Card>(empty_mark).unwrap_err();
    assert!(err.to_string().contains("пустая ячейка"));

    let mut duplicate = serde_json::to_value(&card).unwrap();
    duplicate["layout"][2][2] = serde_json::json!(23);
    assert!(serde_json::from_value::<Card>(duplicate).is_err());
}

proptest! {
    #[test]
    fn prop_generated_cards_hold_invariants(seed in any::<u64>()) {
        let card = Card::generate("p", &mut DeterministicRng::from_u64(seed)).unwrap();
        prop_assert_eq!(validate_layout(card.layout()), Ok(()));
        prop_assert_eq!(card.numbers().count(), NUMBERS_PER_CARD);
    }
}

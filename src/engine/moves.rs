use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Заявление человека о текущем бочонке.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Claim {
    /// "Число есть на моей карточке, зачёркиваю".
    Present,
    /// "Числа нет, пропускаю".
    Absent,
}

impl From<bool> for Claim {
    fn from(claims_present: bool) -> Self {
        if claims_present {
            Claim::Present
        } else {
            Claim::Absent
        }
    }
}

/// За что игрок снят с партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DisqualificationReason {
    /// Хотел зачеркнуть число, которого нет (или оно уже зачёркнуто).
    ClaimedMissingNumber,
    /// Пропустил число, которое есть на карточке.
    MissedNumber,
}

/// Итог хода одного игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MoveSummary {
    /// Число зачёркнуто.
    Marked { number: u8 },
    /// Числа нет — ход пропущен.
    Passed { number: u8 },
    /// Ход человека: ждём `submit_human_decision`.
    AwaitingClaim { number: u8 },
    /// Ошибка человека — конец партии.
    Disqualified {
        number: u8,
        reason: DisqualificationReason,
    },
    /// Мешок пуст, хода не было.
    DrumExhausted,
    /// Карточка игрока закрылась до вытягивания бочонка.
    AlreadyComplete,
}

/// Ход компьютера: зачёркивает, если число есть. Ошибиться не может.
pub fn resolve_computer_move(card: &mut Card, number: u8) -> MoveSummary {
    if card.mark(number) {
        MoveSummary::Marked { number }
    } else {
        MoveSummary::Passed { number }
    }
}

/// Ход человека: сверяем заявление с карточкой.
pub fn resolve_human_move(card: &mut Card, number: u8, claim: Claim) -> MoveSummary {
    let present = card.contains_unmarked(number);

    match (claim, present) {
        (Claim::Present, true) => {
            card.mark(number);
            MoveSummary::Marked { number }
        }
        (Claim::Present, false) => MoveSummary::Disqualified {
            number,
            reason: DisqualificationReason::ClaimedMissingNumber,
        },
        (Claim::Absent, true) => MoveSummary::Disqualified {
            number,
            reason: DisqualificationReason::MissedNumber,
        },
        (Claim::Absent, false) => MoveSummary::Passed { number },
    }
}

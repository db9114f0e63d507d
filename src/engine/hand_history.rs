use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, SeatIndex, Stage};
use crate::engine::actions::ActionKind;
use crate::eval::HandCategory;

/// Тип события в раздаче. Машинно-читаемая запись всего, что
/// произошло — для реплея, отладки и отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted { round_number: u64, deck_seed: u64 },

    /// Обнулившийся игрок докуплен до стартового стека («кредит»).
    LoanGranted { seat: SeatIndex, amount: Chips },

    /// Кнопка и блайнды.
    BlindsPosted {
        dealer: SeatIndex,
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: [Card; 2] },

    /// Действие игрока.
    PlayerActed {
        seat: SeatIndex,
        action: ActionKind,
        paid: Chips,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Открыты общие карты.
    BoardDealt { stage: Stage, cards: Vec<Card> },

    /// Переход на новую стадию.
    StageChanged { stage: Stage },

    /// Шоудаун — вскрытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        hole_cards: Vec<Card>,
        category: HandCategory,
        score: f64,
    },

    /// Выплата доли банка.
    PotAwarded { seat: SeatIndex, amount: Chips },

    /// Раздача завершена.
    HandFinished { round_number: u64 },
}

/// Событие с порядковым номером внутри раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история одной раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let index = self.events.len() as u32;
        self.events.push(HandEvent { index, kind });
    }
}

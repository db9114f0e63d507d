use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Тип действия игрока. Сериализация в нижнем регистре — это же
/// множество ходов идёт в wire-контракте комнаты (`move`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    /// Поднять суммарную ставку раунда до `amount`.
    Raise,
    /// Поставить весь стек (amount опционален — 0 трактуется как
    /// «всё, что есть»).
    AllIn,
}

impl ActionKind {
    /// Агрессивное ли действие (после него торговля продолжается).
    pub fn is_aggressive(self) -> bool {
        matches!(self, ActionKind::Raise | ActionKind::AllIn)
    }
}

/// Конкретное действие игрока.
///
/// `amount` имеет смысл только для Raise/AllIn: целевая суммарная
/// ставка раунда, до потолка стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    pub seat: SeatIndex,
    pub kind: ActionKind,
    pub amount: Chips,
}

impl PlayerAction {
    pub fn new(seat: SeatIndex, kind: ActionKind) -> Self {
        Self {
            seat,
            kind,
            amount: Chips::ZERO,
        }
    }

    pub fn with_amount(seat: SeatIndex, kind: ActionKind, amount: Chips) -> Self {
        Self { seat, kind, amount }
    }
}

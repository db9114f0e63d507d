use thiserror::Error;

use crate::domain::SeatIndex;

/// Ошибки движка. Невалидный ввод отвергается на границе:
/// состояние при ошибке не меняется никогда.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("Сейчас не ход места {0}")]
    NotPlayersTurn(SeatIndex),

    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Раздача уже идёт")]
    HandInProgress,

    #[error("Игрок на месте {0} уже сфолдил")]
    PlayerFolded(SeatIndex),

    #[error("У игрока на месте {0} нет фишек для действия")]
    PlayerOutOfChips(SeatIndex),

    #[error("Невозможно выполнить check — нужно уравнять ставку")]
    CannotCheck,

    #[error("Расчёт без победителей невозможен")]
    NoWinners,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

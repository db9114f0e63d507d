use thiserror::Error;

use crate::engine::EngineError;

/// Ошибки на границе комнаты — то, что видит wire-клиент.
/// Тексты совпадают с историческими ответами HTTP-заглушки.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomError {
    #[error("name required")]
    NameRequired,

    #[error("table full")]
    TableFull,

    #[error("invalid playerIndex {0}")]
    InvalidPlayerIndex(usize),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

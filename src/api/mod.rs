//! Wire-контракт комнаты: одно состояние стола на комнату и четыре
//! операции — join / start / move / settle, каждая возвращает
//! обновлённую комнату. Формат полей (camelCase) зафиксирован для
//! совместимости с существующими клиентами.

pub mod dto;
pub mod errors;
pub mod room;

pub use dto::{PlayerDto, RoomOp, RoomStateDto};
pub use errors::RoomError;
pub use room::Room;

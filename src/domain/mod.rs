//! Доменная модель: карты, фишки, колода, игроки, состояние стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

/// Индекс места за столом (0..seat_count-1).
pub type SeatIndex = usize;

// Реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;

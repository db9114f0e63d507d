//! Автомат ставок: раздача, действия игроков, переход улиц, шоудаун.
//!
//! Основные операции:
//!   - `start_hand` — запустить новую раздачу (блайнды, карманные карты);
//!   - `apply_action` — применить действие текущего игрока;
//!   - `advance_stage_or_run_out` — следующая улица либо доезд борда;
//!   - `settle` — раздать банк победителям.

pub mod actions;
pub mod bot;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod settlement;
pub mod validation;

pub use actions::{ActionKind, PlayerAction};
pub use bot::{BotPolicy, RandomBot, ScriptedBot};
pub use errors::EngineError;
pub use game_loop::{
    advance_stage_or_run_out, apply_action, apply_house_loans, create_deck, start_hand,
    ActiveHand, HandStatus,
};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use settlement::settle;

/// Источник псевдослучайности для перемешивания колоды.
///
/// Единственная реализация в ядре — `infra::rng::Lcg`; трейт нужен,
/// чтобы тесты могли подсунуть свой источник.
pub trait RandomSource {
    /// Следующее число в [0, 1).
    fn next_unit(&mut self) -> f64;

    /// Fisher–Yates от последнего индекса к первому:
    /// на шаге i меняем местами с j = floor(next_unit() * (i + 1)).
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = (self.next_unit() * (i + 1) as f64).floor() as usize;
            slice.swap(i, j);
        }
    }
}

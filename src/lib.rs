//! Движок четырёхместного Texas Hold'em: детерминированная колода,
//! оценка рук, автомат ставок и расчёт банка.
//!
//! Слои:
//!   - `domain`  — карты, фишки, игроки, состояние стола;
//!   - `eval`    — оценка лучшей 5-карточной руки;
//!   - `engine`  — раздача: блайнды, действия, улицы, шоудаун, боты;
//!   - `infra`   — seeded RNG для колоды;
//!   - `api`     — wire-контракт комнаты (join / start / move / settle);
//!   - `odds`    — вспомогательный калькулятор аутов (правило 4 и 2).
//!
//! Рендеринг, анимации и сетевой транспорт — снаружи: внешний драйвер
//! (UI или бот) зовёт публичные операции и показывает результат.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod odds;

// Основные операции ядра — удобные реэкспорты для внешнего драйвера.
pub use engine::game_loop::{
    advance_stage_or_run_out, apply_action, create_deck, start_hand, ActiveHand, HandStatus,
};
pub use engine::settlement::settle;
pub use eval::evaluate_hand;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Стадия раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stage {
    Idle,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    /// Идёт ли на этой стадии торговля.
    pub fn is_betting(self) -> bool {
        matches!(self, Stage::Preflop | Stage::Flop | Stage::Turn | Stage::River)
    }
}

/// Конфиг стола. Значения настраиваемые, поведение — нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Стартовый стек (он же размер «кредита» при обнулении).
    pub initial_stake: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Количество мест. Движок рассчитан на фиксированные 4 места.
    pub seat_count: usize,
    /// Потолок суммарной ставки в раунде (cap на raise/all-in).
    pub max_total_bet: Chips,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_stake: Chips::new(10_000),
            small_blind: Chips::new(50),
            big_blind: Chips::new(100),
            seat_count: 4,
            max_total_bet: Chips::new(3_000),
        }
    }
}

/// Состояние стола между действиями.
///
/// Мутирует его только автомат ставок (engine::game_loop и
/// engine::settlement); все остальные получают копии или &-ссылки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub stage: Stage,
    /// Общий банк. Инвариант: pot == Σ total_hand_bet всех игроков
    /// текущей раздачи после каждого применённого действия.
    pub pot: Chips,
    /// Общие карты борда: 0 / 3 / 4 / 5.
    pub community_cards: Vec<Card>,
    /// Чей сейчас ход; None вне торговли.
    pub current_turn: Option<SeatIndex>,
    pub dealer_index: SeatIndex,
    /// Сумма, до которой нужно дотянуться для колла.
    pub highest_bet: Chips,
    pub min_raise: Chips,
    /// Победители последней завершённой раздачи.
    pub winners: Vec<SeatIndex>,
    /// Описание выигравшей руки (для отображения).
    pub winning_hand: Option<String>,
    /// Монотонный номер раздачи.
    pub round_number: u64,
    /// Seed колоды текущей раздачи (для реплея и сверки клиент/сервер).
    pub deck_seed: u64,
}

impl GameState {
    /// Начальное состояние: стол ждёт первой раздачи.
    pub fn new() -> Self {
        Self {
            stage: Stage::Idle,
            pot: Chips::ZERO,
            community_cards: Vec::new(),
            current_turn: None,
            dealer_index: 0,
            highest_bet: Chips::ZERO,
            min_raise: Chips::ZERO,
            winners: Vec::new(),
            winning_hand: None,
            round_number: 0,
            deck_seed: 0,
        }
    }

    /// Место малого блайнда относительно кнопки.
    pub fn small_blind_seat(&self, config: &TableConfig) -> SeatIndex {
        (self.dealer_index + 1) % config.seat_count
    }

    /// Место большого блайнда относительно кнопки.
    pub fn big_blind_seat(&self, config: &TableConfig) -> SeatIndex {
        (self.dealer_index + 2) % config.seat_count
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Состояние игрока за столом.
///
/// Жизненный цикл: карманные карты выдаются на старте раздачи и
/// сбрасываются при старте следующей; стек переживает раздачи (плюс
/// «кредиты» при обнулении — см. engine::game_loop::apply_house_loans).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Фиксированный индекс места (0..seat_count-1).
    pub seat: SeatIndex,
    /// Отображаемое имя; None — место ещё никем не занято (для комнаты).
    pub name: Option<String>,
    /// Текущий стек.
    pub chips: Chips,
    /// Ставка в текущем раунде (сбрасывается каждой улицей).
    pub bet: Chips,
    /// Суммарная ставка за всю раздачу (сбрасывается каждой раздачей).
    pub total_hand_bet: Chips,
    /// Карманные карты: 0 или 2.
    pub cards: Vec<Card>,
    pub has_folded: bool,
    pub is_dealer: bool,
}

impl Player {
    pub fn new(seat: SeatIndex, stack: Chips) -> Self {
        Self {
            seat,
            name: None,
            chips: stack,
            bet: Chips::ZERO,
            total_hand_bet: Chips::ZERO,
            cards: Vec::new(),
            has_folded: false,
            is_dealer: false,
        }
    }

    /// Участвует ли игрок в раздаче (не сфолдил).
    pub fn is_in_hand(&self) -> bool {
        !self.has_folded
    }

    /// Может ли игрок ещё действовать: не сфолдил и есть фишки.
    pub fn can_act(&self) -> bool {
        !self.has_folded && !self.chips.is_zero()
    }

    /// Списать со стека не более `amount`, зачислив в bet/total_hand_bet.
    /// Возвращает фактически уплаченное (блайнды и коллы могут оказаться
    /// all-in, если стека не хватает).
    pub fn pay_up_to(&mut self, amount: Chips) -> Chips {
        let paid = self.chips.min(amount);
        self.chips -= paid;
        self.bet += paid;
        self.total_hand_bet += paid;
        paid
    }

    /// Сброс к новой раздаче: карты, фолд, ставки.
    pub fn reset_for_hand(&mut self) {
        self.cards.clear();
        self.has_folded = false;
        self.bet = Chips::ZERO;
        self.total_hand_bet = Chips::ZERO;
        self.is_dealer = false;
    }
}

/// Посадить `seat_count` игроков с одинаковым стартовым стеком.
pub fn seat_players(seat_count: usize, stack: Chips) -> Vec<Player> {
    (0..seat_count).map(|seat| Player::new(seat, stack)).collect()
}

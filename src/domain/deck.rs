use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт одной раздачи.
///
/// Создаётся один раз на раздачу (engine перемешивает её seeded RNG из
/// infra), расходуется строго с начала и после раздачи выбрасывается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    /// Индекс следующей невыданной карты.
    cursor: usize,
}

impl Deck {
    /// Каноническая 52-карточная колода в фиксированном порядке
    /// (масть, ранг): Hearts 2..A, Diamonds 2..A, Clubs 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards, cursor: 0 }
    }

    /// Колода из готового порядка карт (для тестов и реплея).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Порядок всей колоды, включая уже выданные карты.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Мутабельный доступ к картам — только для перемешивания до начала
    /// раздачи.
    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Выдать следующую карту с начала колоды.
    ///
    /// Исчерпание колоды при 4 местах невозможно (максимум 8 карманных +
    /// 5 общих = 13 из 52); если оно случилось — это баг автомата
    /// состояний, и мы падаем сразу, не пытаясь продолжить раздачу.
    pub fn draw(&mut self) -> Card {
        assert!(
            self.cursor < self.cards.len(),
            "колода исчерпана: запрошена карта {} из {}",
            self.cursor + 1,
            self.cards.len()
        );
        let card = self.cards[self.cursor];
        self.cursor += 1;
        card
    }

    /// Выдать n карт подряд.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map(|_| self.draw()).collect()
    }
}

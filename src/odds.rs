//! Подсказчик аутов: какие невидимые карты улучшают КАТЕГОРИЮ руки и
//! грубая оценка эквити по правилу «4 и 2». Чисто справочный модуль,
//! на ход раздачи не влияет.

use serde::Serialize;

use crate::domain::{Card, Rank, Suit};
use crate::eval::{evaluate_hand, HandCategory, HandResult};

/// Группа аутов, ведущая к одной категории.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct OutGroup {
    pub category: HandCategory,
    pub cards: Vec<Card>,
    /// Самая слабая группа помечается исключённой: такие «апгрейды»
    /// обычно не дают выигрыша и из эффективных аутов вычитаются.
    pub excluded: bool,
}

/// Итог подсчёта аутов для одной руки.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct OutsReport {
    /// Текущая рука (карманные + борд).
    pub current: HandResult,
    pub total_outs: usize,
    pub effective_outs: usize,
    /// Группы по категориям, от сильной к слабой.
    pub groups: Vec<OutGroup>,
    /// Эквити в процентах по правилу «4 и 2» от эффективных аутов.
    pub rule_of_42_equity: u32,
}

/// Перебор невидимых карт: каждая, что поднимает категорию руки,
/// считается аутом. Имеет смысл только на флопе и тёрне; до флопа и
/// после ривера отчёт пуст.
pub fn calculate_outs(hole: &[Card], board: &[Card]) -> OutsReport {
    let current = evaluate_hand(hole, board);

    if board.len() < 3 || board.len() >= 5 {
        return OutsReport {
            current,
            total_outs: 0,
            effective_outs: 0,
            groups: Vec::new(),
            rule_of_42_equity: 0,
        };
    }

    let mut groups: Vec<OutGroup> = Vec::new();
    for card in unseen_cards(hole, board) {
        let mut next_board = board.to_vec();
        next_board.push(card);
        let improved = evaluate_hand(hole, &next_board);
        if improved.category <= current.category {
            continue;
        }
        match groups.iter_mut().find(|g| g.category == improved.category) {
            Some(group) => group.cards.push(card),
            None => groups.push(OutGroup {
                category: improved.category,
                cards: vec![card],
                excluded: false,
            }),
        }
    }

    groups.sort_by(|a, b| b.category.cmp(&a.category));

    let total_outs: usize = groups.iter().map(|g| g.cards.len()).sum();
    let mut effective_outs = total_outs;
    if groups.len() > 1 {
        // Самый слабый апгрейд чаще всего «грязный» и не выигрывает.
        if let Some(last) = groups.last_mut() {
            last.excluded = true;
            effective_outs = total_outs.saturating_sub(last.cards.len());
        }
    }

    let rule_of_42_equity = rule_of_42(effective_outs, board.len());

    OutsReport {
        current,
        total_outs,
        effective_outs,
        groups,
        rule_of_42_equity,
    }
}

/// Карты, которых нет ни в руке, ни на борде.
fn unseen_cards(hole: &[Card], board: &[Card]) -> Vec<Card> {
    let mut seen: Vec<Card> = hole.to_vec();
    seen.extend_from_slice(board);

    let mut out = Vec::with_capacity(52 - seen.len());
    for &suit in Suit::ALL.iter() {
        for &rank in Rank::ALL.iter() {
            let card = Card { rank, suit };
            if !seen.contains(&card) {
                out.push(card);
            }
        }
    }
    out
}

/// Правило «4 и 2»: на флопе ауты * 4 (с поправкой при > 8 аутах),
/// на тёрне ауты * 2. Результат обрезается сотней.
fn rule_of_42(outs: usize, board_len: usize) -> u32 {
    let outs = outs as u32;
    let pct = match board_len {
        3 => {
            if outs > 8 {
                outs * 4 - (outs - 8)
            } else {
                outs * 4
            }
        }
        4 => outs * 2,
        _ => 0,
    };
    pct.min(100)
}

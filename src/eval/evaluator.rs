use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

use super::hand_rank::{describe_category, HandCategory, SCORE_EPS};

/// Результат оценки руки.
///
/// `score` — вещественное число для полного порядка внутри категории
/// (у двух пар дробная часть кодирует младшую пару). Схема очков
/// зафиксирована протоколом и воспроизводится точно:
///   роял 9000, стрит-флеш 8000+top, каре 7000+quad, фулл-хаус
///   6000+trips, флеш 5000+top, стрит 4000+top, сет 3000+trips,
///   две пары 2000+hi+lo/100, пара 1000+pair, старшая карта topRank.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandResult {
    pub category: HandCategory,
    pub score: f64,
    /// Конкретные карты, образующие комбинацию.
    pub winning_cards: Vec<Card>,
}

impl HandResult {
    pub fn describe(&self) -> &'static str {
        describe_category(self.category)
    }

    /// Строго сильнее ли эта рука другой.
    pub fn beats(&self, other: &HandResult) -> bool {
        if self.category != other.category {
            return self.category > other.category;
        }
        self.score > other.score + SCORE_EPS
    }

    /// Равны ли руки по силе (категория + score с эпсилоном).
    pub fn ties_with(&self, other: &HandResult) -> bool {
        self.category == other.category && (self.score - other.score).abs() < SCORE_EPS
    }
}

/// Вычислить лучшую 5-карточную руку из карманных + общих карт.
///
/// Чистая функция от множества из 2–7 карт (порядок не важен,
/// случайности нет). На префлопе допустим пустой борд — тогда рука
/// оценивается только по карманным картам.
pub fn evaluate_hand(hole: &[Card], community: &[Card]) -> HandResult {
    let mut all: Vec<Card> = Vec::with_capacity(hole.len() + community.len());
    all.extend_from_slice(hole);
    all.extend_from_slice(community);

    assert!(
        (2..=7).contains(&all.len()),
        "evaluate_hand ожидает от 2 до 7 карт"
    );

    // Всё дальше работает с картами, отсортированными по убыванию ранга.
    all.sort_by(|a, b| b.rank.cmp(&a.rank));

    // Карты по мастям (каждая группа тоже по убыванию ранга).
    let by_suit: Vec<Vec<Card>> = Suit::ALL
        .into_iter()
        .map(|s| all.iter().copied().filter(|c| c.suit == s).collect())
        .collect();
    let flush_suit: Option<&Vec<Card>> = by_suit.iter().find(|g| g.len() >= 5);

    // Стрит-флеш / роял-флеш: стрит ищем внутри масти с >= 5 картами.
    if let Some(suited) = flush_suit {
        if let Some(run) = straight_run(suited) {
            let top = run[0].rank;
            if top == Rank::Ace && run.iter().any(|c| c.rank == Rank::King) {
                return HandResult {
                    category: HandCategory::RoyalFlush,
                    score: 9000.0,
                    winning_cards: run,
                };
            }
            return HandResult {
                category: HandCategory::StraightFlush,
                score: 8000.0 + f64::from(top.value()),
                winning_cards: run,
            };
        }
    }

    // Группы по рангам: (ранг, карты), по убыванию ранга.
    let mut rank_groups: Vec<(Rank, Vec<Card>)> = Vec::new();
    for &card in &all {
        match rank_groups.last_mut() {
            Some((r, group)) if *r == card.rank => group.push(card),
            _ => rank_groups.push((card.rank, vec![card])),
        }
    }

    let quads: Vec<&(Rank, Vec<Card>)> =
        rank_groups.iter().filter(|(_, g)| g.len() == 4).collect();
    let trips: Vec<&(Rank, Vec<Card>)> =
        rank_groups.iter().filter(|(_, g)| g.len() == 3).collect();
    let pairs: Vec<&(Rank, Vec<Card>)> =
        rank_groups.iter().filter(|(_, g)| g.len() == 2).collect();

    // Каре: четвёрка + лучший оставшийся кикер.
    if let Some((quad_rank, quad_cards)) = quads.first() {
        let mut winning = quad_cards.clone();
        winning.extend(all.iter().copied().find(|c| c.rank != *quad_rank));
        return HandResult {
            category: HandCategory::FourOfAKind,
            score: 7000.0 + f64::from(quad_rank.value()),
            winning_cards: winning,
        };
    }

    // Фулл-хаус: тройка + вторая тройка (её топ-2 как пара) либо пара.
    if let Some((trips_rank, trips_cards)) = trips.first() {
        let pair_part: Option<&[Card]> = if trips.len() > 1 {
            Some(&trips[1].1[..2])
        } else {
            pairs.first().map(|(_, g)| g.as_slice())
        };
        if let Some(pair_cards) = pair_part {
            let mut winning = trips_cards.clone();
            winning.extend_from_slice(pair_cards);
            return HandResult {
                category: HandCategory::FullHouse,
                score: 6000.0 + f64::from(trips_rank.value()),
                winning_cards: winning,
            };
        }
    }

    // Флеш: топ-5 карт масти.
    if let Some(suited) = flush_suit {
        let winning: Vec<Card> = suited[..5].to_vec();
        return HandResult {
            category: HandCategory::Flush,
            score: 5000.0 + f64::from(winning[0].rank.value()),
            winning_cards: winning,
        };
    }

    // Стрит по всем картам независимо от масти.
    if let Some(run) = straight_run(&all) {
        return HandResult {
            category: HandCategory::Straight,
            score: 4000.0 + f64::from(run[0].rank.value()),
            winning_cards: run,
        };
    }

    // Сет: тройка + два лучших кикера.
    if let Some((trips_rank, trips_cards)) = trips.first() {
        let mut winning = trips_cards.clone();
        winning.extend(all.iter().copied().filter(|c| c.rank != *trips_rank).take(2));
        return HandResult {
            category: HandCategory::ThreeOfAKind,
            score: 3000.0 + f64::from(trips_rank.value()),
            winning_cards: winning,
        };
    }

    // Две пары: две старшие пары + лучший кикер. Дробная часть
    // сохраняет доминирование старшей пары, различая младшую.
    if pairs.len() >= 2 {
        let (hi_rank, hi_cards) = pairs[0];
        let (lo_rank, lo_cards) = pairs[1];
        let mut winning = hi_cards.clone();
        winning.extend_from_slice(lo_cards);
        winning.extend(
            all.iter()
                .copied()
                .find(|c| c.rank != *hi_rank && c.rank != *lo_rank),
        );
        return HandResult {
            category: HandCategory::TwoPair,
            score: 2000.0 + f64::from(hi_rank.value()) + f64::from(lo_rank.value()) / 100.0,
            winning_cards: winning,
        };
    }

    // Пара: + три лучших кикера.
    if let Some((pair_rank, pair_cards)) = pairs.first() {
        let mut winning = pair_cards.clone();
        winning.extend(all.iter().copied().filter(|c| c.rank != *pair_rank).take(3));
        return HandResult {
            category: HandCategory::OnePair,
            score: 1000.0 + f64::from(pair_rank.value()),
            winning_cards: winning,
        };
    }

    // Старшая карта: топ-5 (или сколько есть) по рангу, без смещения.
    HandResult {
        category: HandCategory::HighCard,
        score: f64::from(all[0].rank.value()),
        winning_cards: all.iter().copied().take(5).collect(),
    }
}

/// Найти стрит среди карт, отсортированных по убыванию ранга.
///
/// Сканируем уникальные ранги окнами по 5 подряд; отдельно — «колесо»
/// A-2-3-4-5, которое считается стритом от пятёрки.
fn straight_run(sorted_desc: &[Card]) -> Option<Vec<Card>> {
    let mut unique: Vec<Card> = Vec::with_capacity(sorted_desc.len());
    for &card in sorted_desc {
        if unique.last().map(|c| c.rank) != Some(card.rank) {
            unique.push(card);
        }
    }

    if unique.len() < 5 {
        return None;
    }

    for window in unique.windows(5) {
        if window[0].rank.value() - window[4].rank.value() == 4 {
            return Some(window.to_vec());
        }
    }

    // Wheel: туз считается единицей, старшая карта стрита — пятёрка.
    if unique[0].rank == Rank::Ace {
        let low = [Rank::Five, Rank::Four, Rank::Three, Rank::Two];
        let mut run: Vec<Card> = Vec::with_capacity(5);
        for want in low {
            run.extend(unique.iter().copied().find(|c| c.rank == want));
        }
        if run.len() == 4 {
            run.push(unique[0]);
            return Some(run);
        }
    }

    None
}

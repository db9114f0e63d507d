use serde::{Deserialize, Serialize};

/// Категория покерной руки по силе (0 = старшая карта, 9 = роял-флеш).
///
/// Сначала сравниваются категории, и только при равенстве — числовой
/// score внутри категории.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

/// Допуск при сравнении score двух рук одной категории.
///
/// Схема очков для двух пар дробная (`2000 + hi + lo/100`), поэтому
/// равенство проверяется с эпсилоном, а не строго.
pub const SCORE_EPS: f64 = 0.01;

/// Человеческое описание категории.
pub fn describe_category(category: HandCategory) -> &'static str {
    match category {
        HandCategory::HighCard => "High card",
        HandCategory::OnePair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeOfAKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourOfAKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
        HandCategory::RoyalFlush => "Royal flush",
    }
}

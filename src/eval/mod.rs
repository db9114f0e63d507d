//! Оценка покерных рук: лучшая 5-карточная комбинация из 2 карманных
//! и до 5 общих карт.

pub mod evaluator;
pub mod hand_rank;

pub use evaluator::{evaluate_hand, HandResult};
pub use hand_rank::{describe_category, HandCategory, SCORE_EPS};

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::table::Stage;
use crate::domain::SeatIndex;

/// Краткий итог завершённой раздачи — для драйвера, истории и реплеера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandSummary {
    pub round_number: u64,
    /// До какой стадии дошла раздача (Showdown, если вскрывались).
    pub stage_reached: Stage,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    pub winners: Vec<SeatIndex>,
    /// Доля каждого победителя: floor(pot / winners).
    pub share: Chips,
    /// Описание выигравшей руки; None при победе фолдами.
    pub winning_hand: Option<String>,
}

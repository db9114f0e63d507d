use serde::{Deserialize, Serialize};

use crate::domain::{GameState, Player, Stage};
use crate::engine::ActionKind;

/// Игрок в wire-представлении.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub index: usize,
    /// None — место никем не занято.
    pub name: Option<String>,
    pub chips: u64,
    pub bet: u64,
    pub total_hand_bet: u64,
    pub has_folded: bool,
}

impl PlayerDto {
    pub fn from_player(player: &Player) -> Self {
        Self {
            index: player.seat,
            name: player.name.clone(),
            chips: player.chips.0,
            bet: player.bet.0,
            total_hand_bet: player.total_hand_bet.0,
            has_folded: player.has_folded,
        }
    }
}

/// Состояние комнаты в wire-представлении.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomStateDto {
    pub hand_id: u64,
    pub deck_seed: u64,
    pub stage: Stage,
    pub pot: u64,
    pub highest_bet: u64,
    pub dealer_index: usize,
    /// -1 на проводе, когда хода нет (вне торговли).
    pub current_turn_index: i64,
    pub winners: Vec<usize>,
    pub players: Vec<PlayerDto>,
}

impl RoomStateDto {
    pub fn from_state(state: &GameState, players: &[Player]) -> Self {
        Self {
            hand_id: state.round_number,
            deck_seed: state.deck_seed,
            stage: state.stage,
            pot: state.pot.0,
            highest_bet: state.highest_bet.0,
            dealer_index: state.dealer_index,
            current_turn_index: state.current_turn.map_or(-1, |s| s as i64),
            winners: state.winners.clone(),
            players: players.iter().map(PlayerDto::from_player).collect(),
        }
    }
}

/// Операция над комнатой. На проводе различается полем `op`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum RoomOp {
    Join {
        name: String,
    },
    Start,
    Move {
        #[serde(rename = "playerIndex")]
        player_index: usize,
        #[serde(rename = "move")]
        action: ActionKind,
        #[serde(default)]
        amount: Option<u64>,
    },
    Settle {
        winners: Vec<usize>,
    },
}

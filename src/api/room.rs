use std::time::{SystemTime, UNIX_EPOCH};

use log::info;

use crate::api::dto::{PlayerDto, RoomOp, RoomStateDto};
use crate::api::errors::RoomError;
use crate::domain::{seat_players, Chips, GameState, Player, Stage, TableConfig};
use crate::engine::game_loop::{apply_action, start_hand, ActiveHand, HandStatus};
use crate::engine::settlement;
use crate::engine::{ActionKind, PlayerAction};

/// Комната: один стол с фиксированными местами и одна активная раздача.
///
/// Все операции синхронны; внешний транспорт (HTTP, очередь команд)
/// остаётся за вызывающим, комната отдаёт только снапшоты состояния.
#[derive(Clone, Debug)]
pub struct Room {
    config: TableConfig,
    state: GameState,
    players: Vec<Player>,
    hand: Option<ActiveHand>,
}

impl Room {
    pub fn new(config: TableConfig) -> Self {
        let players = seat_players(config.seat_count, config.initial_stake);
        Self {
            config,
            state: GameState::new(),
            players,
            hand: None,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// История событий текущей раздачи, если она идёт.
    pub fn active_hand(&self) -> Option<&ActiveHand> {
        self.hand.as_ref()
    }

    /// Снапшот комнаты в wire-представлении.
    pub fn snapshot(&self) -> RoomStateDto {
        RoomStateDto::from_state(&self.state, &self.players)
    }

    /// Выполнить wire-операцию. Start берёт seed из системных часов;
    /// детерминированные варианты — start()/make_move() напрямую.
    pub fn apply(&mut self, op: RoomOp) -> Result<RoomStateDto, RoomError> {
        match op {
            RoomOp::Join { name } => {
                let (seat, _) = self.join(&name)?;
                info!("join: {:?} -> seat {}", name, seat);
                Ok(self.snapshot())
            }
            RoomOp::Start => {
                self.start(clock_seed())?;
                Ok(self.snapshot())
            }
            RoomOp::Move {
                player_index,
                action,
                amount,
            } => {
                self.make_move(player_index, action, amount.map(Chips::new))?;
                Ok(self.snapshot())
            }
            RoomOp::Settle { winners } => {
                self.settle(&winners)?;
                Ok(self.snapshot())
            }
        }
    }

    /// Посадить игрока: первое свободное место, либо место с тем же
    /// именем (повторный вход), либо отказ «table full». Занятому месту
    /// восстанавливается стартовый стек.
    pub fn join(&mut self, name: &str) -> Result<(usize, PlayerDto), RoomError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RoomError::NameRequired);
        }

        let seat = self
            .players
            .iter()
            .position(|p| p.name.is_none())
            .or_else(|| {
                self.players
                    .iter()
                    .position(|p| p.name.as_deref() == Some(name))
            })
            .ok_or(RoomError::TableFull)?;

        // Вход всегда начисто: стартовый стек, без ставок и без фолда
        // (повторный вход посреди раздачи не тащит старые флаги).
        let player = &mut self.players[seat];
        player.name = Some(name.to_string());
        player.chips = self.config.initial_stake;
        player.bet = Chips::ZERO;
        player.total_hand_bet = Chips::ZERO;
        player.has_folded = false;
        Ok((seat, PlayerDto::from_player(player)))
    }

    /// Начать новую раздачу. Идущая раздача (и чей-то недоигранный ход)
    /// при этом молча бросается: комната всегда может быть перезапущена.
    pub fn start(&mut self, seed: u64) -> Result<(), RoomError> {
        if self.state.stage.is_betting() {
            self.hand = None;
            self.state.stage = Stage::Idle;
            self.state.current_turn = None;
        }
        let hand = start_hand(&mut self.state, &mut self.players, &self.config, seed)?;
        self.hand = Some(hand);
        Ok(())
    }

    /// Ход игрока. `amount` имеет смысл только для raise/all-in.
    pub fn make_move(
        &mut self,
        player_index: usize,
        kind: ActionKind,
        amount: Option<Chips>,
    ) -> Result<HandStatus, RoomError> {
        if player_index >= self.players.len() {
            return Err(RoomError::InvalidPlayerIndex(player_index));
        }
        let hand = self.hand.as_mut().ok_or(RoomError::Engine(
            crate::engine::EngineError::NoActiveHand,
        ))?;

        let action = match amount {
            Some(amount) => PlayerAction::with_amount(player_index, kind, amount),
            None => PlayerAction::new(player_index, kind),
        };
        let status = apply_action(
            &mut self.state,
            &mut self.players,
            hand,
            &self.config,
            action,
        )?;
        if matches!(status, HandStatus::Finished(_)) {
            self.hand = None;
        }
        Ok(status)
    }

    /// Принудительное завершение: раздать банк названным победителям.
    pub fn settle(&mut self, winners: &[usize]) -> Result<Chips, RoomError> {
        let share = settlement::settle(&mut self.state, &mut self.players, winners)?;
        self.hand = None;
        Ok(share)
    }
}

/// Seed из системных часов (миллисекунды эпохи) для недетерминированных
/// стартов через wire-операцию.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

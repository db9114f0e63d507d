use crate::domain::{GameState, Player, SeatIndex};
use crate::engine::actions::{ActionKind, PlayerAction};
use crate::engine::errors::EngineError;

/// Проверка действия до любой мутации состояния.
///
/// Отвергаются: ход вне очереди, действие вне торговли, действие
/// сфолдившего или пустого по стеку игрока, check при неуравненной
/// ставке. Слишком маленький raise при достаточном стеке НЕ ошибка —
/// его молча поправляет движок (документированная мягкая политика
/// к кривому вводу драйверов).
pub fn validate_action(
    state: &GameState,
    players: &[Player],
    action: &PlayerAction,
) -> Result<(), EngineError> {
    if !state.stage.is_betting() {
        return Err(EngineError::NoActiveHand);
    }

    let player = seat_player(players, action.seat)?;

    if state.current_turn != Some(action.seat) {
        return Err(EngineError::NotPlayersTurn(action.seat));
    }
    if player.has_folded {
        return Err(EngineError::PlayerFolded(action.seat));
    }
    if player.chips.is_zero() {
        return Err(EngineError::PlayerOutOfChips(action.seat));
    }

    if action.kind == ActionKind::Check && player.bet != state.highest_bet {
        return Err(EngineError::CannotCheck);
    }

    Ok(())
}

/// Игрок по месту, с проверкой границ.
pub fn seat_player(players: &[Player], seat: SeatIndex) -> Result<&Player, EngineError> {
    players.get(seat).ok_or(EngineError::InvalidSeat(seat))
}

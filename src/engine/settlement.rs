use crate::domain::{Chips, GameState, Player, SeatIndex, Stage};
use crate::engine::errors::EngineError;
use crate::eval::{evaluate_hand, HandResult};

/// Оценить руки всех несфолдивших против текущего борда.
pub fn reveal_hands(state: &GameState, players: &[Player]) -> Vec<(SeatIndex, HandResult)> {
    players
        .iter()
        .filter(|p| p.is_in_hand())
        .map(|p| (p.seat, evaluate_hand(&p.cards, &state.community_cards)))
        .collect()
}

/// Выбрать победителей: максимум по (категория, score), все руки в
/// пределах эпсилона от максимума делят банк. None, если рук нет.
pub fn pick_winners(results: &[(SeatIndex, HandResult)]) -> Option<(Vec<SeatIndex>, HandResult)> {
    let best = results
        .iter()
        .map(|(_, r)| r)
        .fold(None::<&HandResult>, |acc, r| match acc {
            Some(b) if !r.beats(b) => Some(b),
            _ => Some(r),
        })?
        .clone();

    let winners = results
        .iter()
        .filter(|(_, r)| r.ties_with(&best))
        .map(|(seat, _)| *seat)
        .collect();

    Some((winners, best))
}

/// Раздать банк победителям.
///
/// Доля каждого — floor(pot / winners); остаток от деления никому не
/// достаётся (принятая погрешность округления). Сфолдившие не получают
/// ничего; пустой список победителей — ошибка, раздача не может
/// разрешиться без победителя.
pub fn settle(
    state: &mut GameState,
    players: &mut [Player],
    winners: &[SeatIndex],
) -> Result<Chips, EngineError> {
    let mut unique: Vec<SeatIndex> = Vec::with_capacity(winners.len());
    for &seat in winners {
        if seat >= players.len() {
            return Err(EngineError::InvalidSeat(seat));
        }
        if !unique.contains(&seat) {
            unique.push(seat);
        }
    }
    if unique.is_empty() {
        return Err(EngineError::NoWinners);
    }

    let share = state.pot.split_between(unique.len());
    for &seat in &unique {
        players[seat].chips += share;
    }

    state.winners = unique;
    state.stage = Stage::Showdown;
    state.current_turn = None;
    Ok(share)
}

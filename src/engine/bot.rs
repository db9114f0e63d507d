use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Chips, GameState, Player, TableConfig};
use crate::engine::actions::{ActionKind, PlayerAction};

/// Стратегия принятия решений за место без человека.
///
/// Подключаемый интерфейс: автомат ставок о ботах ничего не знает,
/// драйвер сам спрашивает политику и передаёт действие в apply_action.
/// В тестах подменяется на ScriptedBot.
pub trait BotPolicy {
    fn decide(&mut self, state: &GameState, player: &Player, config: &TableConfig) -> PlayerAction;
}

/// Рандомизированная политика с фиксированными порогами:
/// - без ставки к коллу: raise до highest+BB при r > 0.8, иначе check;
/// - против ставки: call при r > 0.3, fold при r > 0.1,
///   иначе raise до highest + max(BB, стоимость колла);
/// - при нехватке стека на полный raise — all-in (r > 0.5) или call;
/// - целевая ставка ограничена потолком стола.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Детерминированный вариант для тестов и реплея.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BotPolicy for RandomBot {
    fn decide(&mut self, state: &GameState, player: &Player, config: &TableConfig) -> PlayerAction {
        let r: f64 = self.rng.gen();
        let call_cost = state.highest_bet.saturating_sub(player.bet);

        let mut kind;
        let mut amount = Chips::ZERO;

        if call_cost.is_zero() {
            if r > 0.8 {
                kind = ActionKind::Raise;
                amount = state.highest_bet + config.big_blind;
            } else {
                kind = ActionKind::Check;
            }
        } else if r > 0.3 {
            kind = ActionKind::Call;
        } else if r > 0.1 {
            kind = ActionKind::Fold;
        } else {
            kind = ActionKind::Raise;
            amount = state.highest_bet + config.big_blind.max(call_cost);
        }

        if kind == ActionKind::Raise {
            let min_target = state.highest_bet + config.big_blind;
            if player.chips < amount || player.chips < min_target {
                kind = if r > 0.5 {
                    ActionKind::AllIn
                } else {
                    ActionKind::Call
                };
            }
            amount = amount.min(config.max_total_bet);
        }

        PlayerAction::with_amount(player.seat, kind, amount)
    }
}

/// Скриптованная политика: проигрывает заранее заданный список
/// действий (для табличных тестов). По исчерпанию — fold.
pub struct ScriptedBot {
    script: VecDeque<(ActionKind, Chips)>,
}

impl ScriptedBot {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = (ActionKind, Chips)>,
    {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl BotPolicy for ScriptedBot {
    fn decide(&mut self, _state: &GameState, player: &Player, _config: &TableConfig) -> PlayerAction {
        match self.script.pop_front() {
            Some((kind, amount)) => PlayerAction::with_amount(player.seat, kind, amount),
            None => PlayerAction::new(player.seat, ActionKind::Fold),
        }
    }
}

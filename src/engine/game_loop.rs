use log::{debug, info};

use crate::domain::{
    Chips, Deck, GameState, HandSummary, Player, SeatIndex, Stage, TableConfig,
};
use crate::engine::actions::{ActionKind, PlayerAction};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::settlement;
use crate::engine::validation::validate_action;
use crate::engine::RandomSource;
use crate::infra::rng::Lcg;

/// Статус раздачи после очередной операции.
#[derive(Clone, Debug, PartialEq)]
pub enum HandStatus {
    Ongoing,
    Finished(HandSummary),
}

/// Живые ресурсы одной раздачи: колода и история событий.
///
/// GameState и игроки живут у вызывающего (комната/драйвер); ActiveHand
/// выбрасывается вместе с колодой, когда раздача закончена.
#[derive(Clone, Debug)]
pub struct ActiveHand {
    pub deck: Deck,
    pub history: HandHistory,
}

/// Детерминированная колода из seed: канонический порядок 52 карт,
/// перемешанный Fisher–Yates поверх LCG. Один и тот же seed всегда
/// даёт один и тот же порядок.
pub fn create_deck(seed: u64) -> Deck {
    let mut deck = Deck::standard_52();
    Lcg::new(seed).shuffle(deck.cards_mut());
    deck
}

/// «Кредиты дома»: игроки с пустым стеком докупаются до стартового.
///
/// Продуктовая политика (боты/места никогда не выбывают навсегда),
/// вынесенная в отдельную публичную функцию: start_hand зовёт её сам,
/// но драйвер может наблюдать и переопределять границу.
pub fn apply_house_loans(players: &mut [Player], stake: Chips) -> Vec<SeatIndex> {
    let mut granted = Vec::new();
    for player in players.iter_mut() {
        if player.chips.is_zero() {
            player.chips = stake;
            granted.push(player.seat);
        }
    }
    granted
}

/// Старт новой раздачи (из Idle или Showdown):
/// - кнопка сдвигается на следующее место;
/// - обнулившиеся игроки докупаются («кредит»);
/// - свежая seeded-колода, по 2 карманные карты каждому;
/// - SB/BB (не больше стека постящего — блайнд может быть all-in);
/// - первым ходит место слева от большого блайнда.
pub fn start_hand(
    state: &mut GameState,
    players: &mut [Player],
    config: &TableConfig,
    seed: u64,
) -> Result<ActiveHand, EngineError> {
    if state.stage.is_betting() {
        return Err(EngineError::HandInProgress);
    }
    if players.len() != config.seat_count {
        return Err(EngineError::Internal("число игроков не равно seat_count"));
    }

    state.round_number += 1;
    state.dealer_index = (state.dealer_index + 1) % config.seat_count;
    state.deck_seed = seed;

    let mut history = HandHistory::new();
    history.push(HandEventKind::HandStarted {
        round_number: state.round_number,
        deck_seed: seed,
    });

    for seat in apply_house_loans(players, config.initial_stake) {
        history.push(HandEventKind::LoanGranted {
            seat,
            amount: config.initial_stake,
        });
    }

    let mut deck = create_deck(seed);
    for player in players.iter_mut() {
        player.reset_for_hand();
    }
    players[state.dealer_index].is_dealer = true;

    for player in players.iter_mut() {
        let cards = [deck.draw(), deck.draw()];
        player.cards = cards.to_vec();
        history.push(HandEventKind::HoleCardsDealt {
            seat: player.seat,
            cards,
        });
    }

    let sb_seat = state.small_blind_seat(config);
    let bb_seat = state.big_blind_seat(config);
    let sb_paid = players[sb_seat].pay_up_to(config.small_blind);
    let bb_paid = players[bb_seat].pay_up_to(config.big_blind);

    state.pot = sb_paid + bb_paid;
    state.highest_bet = config.big_blind;
    state.min_raise = config.big_blind;
    state.community_cards.clear();
    state.winners.clear();
    state.winning_hand = None;
    state.stage = Stage::Preflop;
    state.current_turn = Some((bb_seat + 1) % config.seat_count);

    history.push(HandEventKind::BlindsPosted {
        dealer: state.dealer_index,
        small_blind: (sb_seat, sb_paid),
        big_blind: (bb_seat, bb_paid),
    });

    info!(
        "раздача {}: кнопка seat {}, SB {} / BB {}, первый ход seat {:?}",
        state.round_number, state.dealer_index, sb_paid, bb_paid, state.current_turn
    );

    Ok(ActiveHand { deck, history })
}

/// Применить действие текущего игрока.
///
/// Действие атомарно: либо применяется целиком (вместе с каскадом —
/// переход улицы, доезд борда, шоудаун), либо отвергается до любой
/// мутации. Суммы raise/all-in клампятся к потолку стола, а raise ниже
/// текущей ставки при достаточном стеке молча поправляется вверх.
pub fn apply_action(
    state: &mut GameState,
    players: &mut [Player],
    hand: &mut ActiveHand,
    config: &TableConfig,
    action: PlayerAction,
) -> Result<HandStatus, EngineError> {
    validate_action(state, players, &action)?;
    let seat = action.seat;

    let paid = match action.kind {
        ActionKind::Fold => {
            players[seat].has_folded = true;
            Chips::ZERO
        }
        ActionKind::Check => Chips::ZERO,
        ActionKind::Call => {
            let to_call = state.highest_bet - players[seat].bet;
            let paid = players[seat].pay_up_to(to_call);
            state.pot += paid;
            paid
        }
        ActionKind::Raise | ActionKind::AllIn => {
            let player = &mut players[seat];

            let mut target = action.amount;
            if action.kind == ActionKind::AllIn && target.is_zero() {
                target = player.bet + player.chips;
            }
            target = target.min(config.max_total_bet);
            if target < state.highest_bet && player.chips + player.bet > target {
                target = state.highest_bet;
            }

            let paid = player.pay_up_to(target.saturating_sub(player.bet));
            state.pot += paid;
            state.highest_bet = state.highest_bet.max(player.bet);
            paid
        }
    };

    hand.history.push(HandEventKind::PlayerActed {
        seat,
        action: action.kind,
        paid,
        new_stack: players[seat].chips,
        pot_after: state.pot,
    });
    debug!(
        "seat {} {:?} (+{}), банк {}, к коллу {}",
        seat, action.kind, paid, state.pot, state.highest_bet
    );

    // Остался один несфолдивший — он победитель, без дальнейшей торговли.
    let in_hand: Vec<SeatIndex> = players
        .iter()
        .filter(|p| p.is_in_hand())
        .map(|p| p.seat)
        .collect();
    if in_hand.len() == 1 {
        let summary = finish_by_folds(state, players, hand, in_hand[0])?;
        return Ok(HandStatus::Finished(summary));
    }

    let all_matched = players
        .iter()
        .filter(|p| p.is_in_hand())
        .all(|p| p.bet == state.highest_bet || p.chips.is_zero());
    let can_still_bet = players.iter().filter(|p| p.can_act()).count();

    // Торговля исчерпана all-in'ами: доезжаем борд и вскрываемся.
    if all_matched && can_still_bet < 2 {
        let summary = run_out_and_show_down(state, players, hand)?;
        return Ok(HandStatus::Finished(summary));
    }

    // Префлоп-опция большого блайнда: пока все только коллировали BB,
    // ход обязан дойти до BB прежде, чем улица может закрыться.
    let bb_seat = state.big_blind_seat(config);
    if state.stage == Stage::Preflop && seat != bb_seat && state.highest_bet == config.big_blind {
        advance_turn(state, players, config, seat);
        return Ok(HandStatus::Ongoing);
    }

    if all_matched && !action.kind.is_aggressive() {
        return advance_stage_or_run_out(state, players, hand, config);
    }

    advance_turn(state, players, config, seat);
    Ok(HandStatus::Ongoing)
}

/// Следующая улица, либо доезд борда, если торговля уже невозможна
/// (меньше двух игроков со стеком). С ривера — шоудаун.
pub fn advance_stage_or_run_out(
    state: &mut GameState,
    players: &mut [Player],
    hand: &mut ActiveHand,
    config: &TableConfig,
) -> Result<HandStatus, EngineError> {
    if !state.stage.is_betting() {
        return Err(EngineError::NoActiveHand);
    }

    let can_still_bet = players.iter().filter(|p| p.can_act()).count();
    if can_still_bet < 2 {
        let summary = run_out_and_show_down(state, players, hand)?;
        return Ok(HandStatus::Finished(summary));
    }

    reset_round_bets(state, players);

    let (count, next) = match state.stage {
        Stage::Preflop => (3, Stage::Flop),
        Stage::Flop => (1, Stage::Turn),
        Stage::Turn => (1, Stage::River),
        Stage::River => {
            let summary = show_down(state, players, hand)?;
            return Ok(HandStatus::Finished(summary));
        }
        Stage::Idle | Stage::Showdown => return Err(EngineError::NoActiveHand),
    };

    deal_board(state, hand, count, next);

    // Постфлоп первым ходит первое способное действовать место
    // слева от кнопки.
    state.current_turn = first_to_act_after(players, config, state.dealer_index);
    Ok(HandStatus::Ongoing)
}

/// Сброс ставок улицы (total_hand_bet не трогаем).
fn reset_round_bets(state: &mut GameState, players: &mut [Player]) {
    for player in players.iter_mut() {
        player.bet = Chips::ZERO;
    }
    state.highest_bet = Chips::ZERO;
}

/// Открыть карты борда и сменить стадию.
fn deal_board(state: &mut GameState, hand: &mut ActiveHand, count: usize, stage: Stage) {
    let cards = hand.deck.draw_n(count);
    state.community_cards.extend_from_slice(&cards);
    state.stage = stage;
    hand.history.push(HandEventKind::BoardDealt { stage, cards });
    hand.history.push(HandEventKind::StageChanged { stage });
    debug!("борд {:?}: {} карт(ы) открыто", stage, count);
}

/// Передать ход следующему способному действовать месту по кругу.
/// Скан ограничен размером стола, чтобы не зациклиться на
/// патологических состояниях.
fn advance_turn(state: &mut GameState, players: &[Player], config: &TableConfig, from: SeatIndex) {
    let n = config.seat_count;
    let mut next = (from + 1) % n;
    for _ in 0..n {
        if players[next].can_act() {
            state.current_turn = Some(next);
            return;
        }
        next = (next + 1) % n;
    }
    state.current_turn = None;
}

/// Первое способное действовать место после `from` (исключительно).
fn first_to_act_after(players: &[Player], config: &TableConfig, from: SeatIndex) -> Option<SeatIndex> {
    let n = config.seat_count;
    (1..=n).map(|i| (from + i) % n).find(|&s| players[s].can_act())
}

/// Доезд борда: все оставшиеся улицы открываются без торговли,
/// затем шоудаун.
fn run_out_and_show_down(
    state: &mut GameState,
    players: &mut [Player],
    hand: &mut ActiveHand,
) -> Result<HandSummary, EngineError> {
    state.current_turn = None;

    match state.stage {
        Stage::Preflop => {
            deal_board(state, hand, 3, Stage::Flop);
            deal_board(state, hand, 1, Stage::Turn);
            deal_board(state, hand, 1, Stage::River);
        }
        Stage::Flop => {
            deal_board(state, hand, 1, Stage::Turn);
            deal_board(state, hand, 1, Stage::River);
        }
        Stage::Turn => {
            deal_board(state, hand, 1, Stage::River);
        }
        Stage::River => {}
        Stage::Idle | Stage::Showdown => return Err(EngineError::NoActiveHand),
    }

    show_down(state, players, hand)
}

/// Шоудаун: оценка рук несфолдивших, выбор победителей и делёж банка.
fn show_down(
    state: &mut GameState,
    players: &mut [Player],
    hand: &mut ActiveHand,
) -> Result<HandSummary, EngineError> {
    let results = settlement::reveal_hands(state, players);
    for (seat, result) in &results {
        hand.history.push(HandEventKind::ShowdownReveal {
            seat: *seat,
            hole_cards: players[*seat].cards.clone(),
            category: result.category,
            score: result.score,
        });
    }

    let (winners, best) = settlement::pick_winners(&results).ok_or(EngineError::NoWinners)?;
    let description = best.describe().to_string();

    let share = settlement::settle(state, players, &winners)?;
    state.winning_hand = Some(description.clone());

    for &seat in &winners {
        hand.history.push(HandEventKind::PotAwarded { seat, amount: share });
    }
    hand.history.push(HandEventKind::HandFinished {
        round_number: state.round_number,
    });
    info!(
        "раздача {}: шоудаун, победители {:?} ({}), доля {}",
        state.round_number, winners, description, share
    );

    Ok(HandSummary {
        round_number: state.round_number,
        stage_reached: Stage::Showdown,
        board: state.community_cards.clone(),
        total_pot: state.pot,
        winners,
        share,
        winning_hand: Some(description),
    })
}

/// Победа фолдами: единственный оставшийся забирает банк без вскрытия.
fn finish_by_folds(
    state: &mut GameState,
    players: &mut [Player],
    hand: &mut ActiveHand,
    winner: SeatIndex,
) -> Result<HandSummary, EngineError> {
    let share = settlement::settle(state, players, &[winner])?;
    state.winning_hand = None;

    hand.history.push(HandEventKind::PotAwarded {
        seat: winner,
        amount: share,
    });
    hand.history.push(HandEventKind::HandFinished {
        round_number: state.round_number,
    });
    info!(
        "раздача {}: все сфолдили, банк {} уходит seat {}",
        state.round_number, share, winner
    );

    Ok(HandSummary {
        round_number: state.round_number,
        stage_reached: Stage::Showdown,
        board: state.community_cards.clone(),
        total_pot: state.pot,
        winners: vec![winner],
        share,
        winning_hand: None,
    })
}

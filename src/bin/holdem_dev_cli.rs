//! Дев-прогон движка: N раздач случайных ботов за одним столом.
//!
//! Использование: holdem_dev_cli [раздач] [seed]
//! Без seed берётся энтропия ОС (каждый прогон разный).

use holdem_engine::api::Room;
use holdem_engine::domain::TableConfig;
use holdem_engine::engine::{BotPolicy, HandStatus, RandomBot};

const BOT_NAMES: [&str; 4] = ["Bot User", "Bot Alpha", "Bot Beta", "Bot Gamma"];

/// Страховка от зависшего цикла при поломке автомата ставок.
const MAX_ACTIONS_PER_HAND: usize = 200;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let hands: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    let seed: Option<u64> = args.next().and_then(|s| s.parse().ok());

    let mut room = Room::new(TableConfig::default());
    for name in BOT_NAMES {
        room.join(name).expect("стол из 4 мест вмещает 4 ботов");
    }

    let mut bot = match seed {
        Some(seed) => RandomBot::seeded(seed),
        None => RandomBot::from_entropy(),
    };

    println!("=== holdem_dev_cli: {} раздач(и) ===", hands);

    for i in 0..hands {
        let hand_seed = seed.map_or_else(rand::random, |s| s.wrapping_add(i));
        room.start(hand_seed).expect("старт раздачи из Idle/Showdown");

        let mut summary = None;
        for _ in 0..MAX_ACTIONS_PER_HAND {
            let Some(turn) = room.state().current_turn else {
                break;
            };
            let action = bot.decide(room.state(), &room.players()[turn], room.config());
            let status = room
                .make_move(turn, action.kind, Some(action.amount))
                .expect("действие по решению бота легально");
            if let HandStatus::Finished(s) = status {
                summary = Some(s);
                break;
            }
        }

        let state = room.state();
        match summary {
            Some(s) => println!(
                "раздача {:>3}: банк {:>6}, победители {:?}, доля {}, рука: {}",
                s.round_number,
                s.total_pot,
                s.winners,
                s.share,
                s.winning_hand.as_deref().unwrap_or("(все сфолдили)"),
            ),
            None => println!(
                "раздача {:>3}: не завершилась за {} действий (stage {:?})",
                state.round_number, MAX_ACTIONS_PER_HAND, state.stage
            ),
        }
    }

    println!("=== стеки после прогона ===");
    for p in room.players() {
        println!(
            "  seat {} {:<10} {:>7}",
            p.seat,
            p.name.as_deref().unwrap_or("-"),
            p.chips
        );
    }
}

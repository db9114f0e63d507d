use crate::engine::RandomSource;

/// Константы генератора. Зафиксированы протоколом: клиент и сервер,
/// зная один seed, обязаны получить одинаковую колоду.
const LCG_A: u64 = 9301;
const LCG_C: u64 = 49297;
const LCG_M: u64 = 233280;

/// Линейный конгруэнтный генератор для детерминированной раздачи.
///
/// Шаг: `seed = (seed * 9301 + 49297) mod 233280`, наружу отдаём
/// `seed / 233280` — псевдослучайное число в [0, 1). Никакого
/// re-seeding внутри одной колоды.
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for Lcg {
    fn next_unit(&mut self) -> f64 {
        // wrapping_mul: первый шаг может прийти с произвольно большим
        // seed (например, timestamp); после него state всегда < M.
        self.state = self.state.wrapping_mul(LCG_A).wrapping_add(LCG_C) % LCG_M;
        self.state as f64 / LCG_M as f64
    }
}

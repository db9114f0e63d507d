//! Инфраструктура вокруг движка: seeded RNG для колоды.

pub mod rng;

pub use rng::Lcg;

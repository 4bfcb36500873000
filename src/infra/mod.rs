//! Инфраструктурный слой вокруг движка лото:
//! - RNG-реализации для движка;
//! - seed'ы для воспроизводимых сессий.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;

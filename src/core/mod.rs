//! Shared building blocks: the seeded RNG used by maze generation and
//! random agents.

pub mod rng;

pub use rng::{GameRng, GameRngState};

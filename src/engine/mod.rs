//! Simulation Engine Module
//!
//! Capture odds and turn-based battles over caught Pokemon. Everything here
//! is synchronous and draws randomness only from an injected [`RandomSource`].

mod battle;
mod capture;
pub(crate) mod rng;

#[cfg(test)]
mod property_tests;

pub use battle::{
    calc_damage, resolve, BattleOutcome, BattleParticipant, BattleReport, TurnEvent, MAX_ROUNDS,
};
pub use capture::{attempt, catch_chance, Ball, BallSelection};
pub use rng::{default_source, RandomSource};

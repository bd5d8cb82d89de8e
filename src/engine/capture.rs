//! Capture Resolver
//!
//! Turns a Pokemon's base experience and the thrown ball into a catch
//! probability, then settles the throw with one random draw.

use std::fmt;
use std::str::FromStr;

use crate::engine::RandomSource;
use crate::error::PokedexError;

/// Lower bound of the base catch chance.
const MIN_BASE_CHANCE: f64 = 0.01;
/// Upper bound of the base catch chance.
const MAX_BASE_CHANCE: f64 = 0.99;
/// Ceiling after the ball modifier; a throw is never certain.
const MAX_CHANCE: f64 = 0.9999;

// == Ball ==
/// Ball selector, each with a fixed multiplier on the base chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ball {
    #[default]
    Pokeball,
    Greatball,
    Ultraball,
    Masterball,
}

impl Ball {
    pub const ALL: [Ball; 4] = [
        Ball::Pokeball,
        Ball::Greatball,
        Ball::Ultraball,
        Ball::Masterball,
    ];

    /// Multiplier applied to the clamped base chance.
    pub fn modifier(self) -> f64 {
        match self {
            Ball::Pokeball => 1.0,
            Ball::Greatball => 1.5,
            Ball::Ultraball => 2.0,
            Ball::Masterball => 100.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ball::Pokeball => "pokeball",
            Ball::Greatball => "greatball",
            Ball::Ultraball => "ultraball",
            Ball::Masterball => "masterball",
        }
    }

    // == Select ==
    /// Resolves an optional user selector, falling back to the standard
    /// ball and recording the rejected name when it is not recognized.
    pub fn select(selector: Option<&str>) -> BallSelection {
        match selector.map(str::parse::<Ball>) {
            None => BallSelection {
                ball: Ball::default(),
                rejected: None,
            },
            Some(Ok(ball)) => BallSelection {
                ball,
                rejected: None,
            },
            Some(Err(err)) => BallSelection {
                ball: Ball::default(),
                rejected: Some(err),
            },
        }
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ball {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Ball::ALL
            .into_iter()
            .find(|ball| ball.name() == wanted)
            .ok_or(PokedexError::UnknownBall(wanted))
    }
}

/// Outcome of resolving a ball selector.
#[derive(Debug)]
pub struct BallSelection {
    /// Ball that will actually be thrown
    pub ball: Ball,
    /// Set when the requested selector was unknown and the default was substituted
    pub rejected: Option<PokedexError>,
}

// == Catch Chance ==
/// Probability that a throw succeeds.
///
/// `clamp(0.5 - difficulty / 500, 0.01, 0.99)` scaled by `modifier`, then
/// capped at 0.9999.
pub fn catch_chance(difficulty: i64, modifier: f64) -> f64 {
    let base = (0.5 - difficulty as f64 / 500.0).clamp(MIN_BASE_CHANCE, MAX_BASE_CHANCE);
    (base * modifier).clamp(0.0, MAX_CHANCE)
}

// == Attempt ==
/// Draws once from `rng` and succeeds iff the draw is below the catch chance.
pub fn attempt<R: RandomSource + ?Sized>(difficulty: i64, modifier: f64, rng: &mut R) -> bool {
    rng.next_unit() < catch_chance(difficulty, modifier)
}

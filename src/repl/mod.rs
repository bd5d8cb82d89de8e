//! REPL Module
//!
//! Line-oriented command surface over the catalog client, the Pokedex and
//! the simulation engines.
//!
//! # Commands
//! - `help`, `exit`
//! - `map`, `mapb` - page through location areas
//! - `explore <area>` - list Pokemon found in an area
//! - `catch <pokemon> [ball]` - try to catch a Pokemon
//! - `pokedex`, `inspect <pokemon>` - browse caught Pokemon
//! - `battle <pokemon1> <pokemon2>` - simulate a battle
//! - `cache` - response cache statistics

mod command;
mod input;
mod session;

pub use command::{clean_input, Command};
pub use input::{spawn_line_reader, spawn_stdin_reader};
pub use session::{Flow, Session, PROMPT};

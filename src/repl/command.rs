//! Input cleaning and command parsing.

use crate::error::{PokedexError, Result};

/// Trims, lower-cases and splits a line into words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore { area: String },
    Catch { name: String, ball: Option<String> },
    Pokedex,
    Inspect { name: String },
    Battle { first: String, second: String },
    Cache,
    Unknown(String),
}

impl Command {
    /// Parses cleaned words; the first word selects the command.
    ///
    /// Returns a usage error when a known command lacks its arguments.
    pub fn parse(words: &[String]) -> Result<Self> {
        let Some((name, args)) = words.split_first() else {
            return Ok(Command::Unknown(String::new()));
        };
        let arg = |i: usize| args.get(i).cloned();

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore {
                area: arg(0).ok_or(PokedexError::Usage("explore <area>"))?,
            },
            "catch" => Command::Catch {
                name: arg(0).ok_or(PokedexError::Usage("catch <pokemon> [ball]"))?,
                ball: arg(1),
            },
            "pokedex" => Command::Pokedex,
            "inspect" => Command::Inspect {
                name: arg(0).ok_or(PokedexError::Usage("inspect <pokemon>"))?,
            },
            "battle" => match (arg(0), arg(1)) {
                (Some(first), Some(second)) => Command::Battle { first, second },
                _ => return Err(PokedexError::Usage("battle <pokemon1> <pokemon2>")),
            },
            "cache" => Command::Cache,
            other => Command::Unknown(other.to_string()),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        clean_input(line)
    }

    #[test]
    fn test_clean_input() {
        let cases = [
            ("  hello  world  ", vec!["hello", "world"]),
            (
                "Charmander Bulbasaur PIKACHU",
                vec!["charmander", "bulbasaur", "pikachu"],
            ),
            ("", vec![]),
            ("   ", vec![]),
            ("  MIXED   case  Test  ", vec!["mixed", "case", "test"]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse(&words("help")).unwrap(), Command::Help);
        assert_eq!(Command::parse(&words("EXIT")).unwrap(), Command::Exit);
        assert_eq!(Command::parse(&words("map")).unwrap(), Command::Map);
        assert_eq!(Command::parse(&words("mapb")).unwrap(), Command::MapBack);
        assert_eq!(Command::parse(&words("pokedex")).unwrap(), Command::Pokedex);
        assert_eq!(Command::parse(&words("cache")).unwrap(), Command::Cache);
    }

    #[test]
    fn test_parse_catch_with_and_without_ball() {
        assert_eq!(
            Command::parse(&words("catch Pikachu")).unwrap(),
            Command::Catch {
                name: "pikachu".to_string(),
                ball: None
            }
        );
        assert_eq!(
            Command::parse(&words("catch pikachu UltraBall")).unwrap(),
            Command::Catch {
                name: "pikachu".to_string(),
                ball: Some("ultraball".to_string())
            }
        );
    }

    #[test]
    fn test_parse_battle() {
        assert_eq!(
            Command::parse(&words("battle weak strong")).unwrap(),
            Command::Battle {
                first: "weak".to_string(),
                second: "strong".to_string()
            }
        );
    }

    #[test]
    fn test_parse_missing_arguments() {
        for line in ["explore", "catch", "inspect", "battle", "battle onlyone"] {
            assert!(
                matches!(Command::parse(&words(line)), Err(PokedexError::Usage(_))),
                "{} should be a usage error",
                line
            );
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse(&words("dance")).unwrap(),
            Command::Unknown("dance".to_string())
        );
    }
}

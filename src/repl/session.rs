//! Interactive session
//!
//! Reads commands line by line and writes results to an output sink. Command
//! failures are reported on the output and never end the session.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::client::PokeApiClient;
use crate::engine::{self, default_source, Ball, RandomSource};
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaList;
use crate::pokedex::Pokedex;
use crate::repl::{clean_input, Command};

pub const PROMPT: &str = "Pokedex > ";

const HELP: &str = "\
Welcome to the Pokedex!
Usage:

  exit                   - Exit the Pokedex
  help                   - Show this help message
  map                    - Show next page of location areas
  mapb                   - Show previous page of location areas
  explore <area>         - Explore a location area and list encountered Pokemon
  catch <pokemon> [ball] - Catch a Pokemon; optional ball types: pokeball, greatball, ultraball, masterball
  pokedex                - List caught Pokemon
  inspect <pokemon>      - Show details for a caught Pokemon
  battle <p1> <p2>       - Simulate a simple battle between two caught Pokemon
  cache                  - Show response cache statistics";

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Location-area paging cursor.
#[derive(Debug, Default)]
struct Pager {
    next: Option<String>,
    previous: Option<String>,
}

impl Pager {
    fn update(&mut self, list: &LocationAreaList) {
        self.next = list.next.clone().filter(|url| !url.is_empty());
        self.previous = list.previous.clone().filter(|url| !url.is_empty());
    }
}

// == Session ==
/// One interactive Pokedex session writing to `out`.
pub struct Session<W: Write> {
    client: PokeApiClient,
    pokedex: Pokedex,
    rng: Box<dyn RandomSource + Send>,
    pager: Pager,
    out: W,
}

impl<W: Write> Session<W> {
    /// Creates a session.
    ///
    /// Without an explicit random source an entropy-seeded one is used.
    pub fn new(client: PokeApiClient, rng: Option<Box<dyn RandomSource + Send>>, out: W) -> Self {
        Self {
            client,
            pokedex: Pokedex::new(),
            rng: rng.unwrap_or_else(|| default_source(None)),
            pager: Pager::default(),
            out,
        }
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    // == Run ==
    /// Prompts and executes commands until `exit` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        loop {
            self.prompt()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if self.execute_line(&line).await? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Like [`Session::run`], reading lines from a channel until it closes.
    pub async fn run_lines(&mut self, mut lines: mpsc::Receiver<String>) -> Result<()> {
        loop {
            self.prompt()?;
            let Some(line) = lines.recv().await else {
                break;
            };
            if self.execute_line(&line).await? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()?;
        Ok(())
    }

    /// Executes one raw input line, reporting any command error on the output.
    ///
    /// Only failures to write the output are returned.
    pub async fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let words = clean_input(line);
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let outcome = match Command::parse(&words) {
            Ok(command) => self.execute(command).await,
            Err(err) => Err(err),
        };
        match outcome {
            Ok(flow) => Ok(flow),
            Err(PokedexError::Io(err)) => Err(PokedexError::Io(err)),
            Err(err) => {
                writeln!(self.out, "{}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    // == Execute ==
    /// Runs a parsed command.
    pub async fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Exit => {
                writeln!(self.out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map_forward().await?,
            Command::MapBack => self.map_back().await?,
            Command::Explore { area } => self.explore(&area).await?,
            Command::Catch { name, ball } => self.catch(&name, ball.as_deref()).await?,
            Command::Pokedex => self.list_pokedex().await?,
            Command::Inspect { name } => self.inspect(&name).await?,
            Command::Battle { first, second } => self.battle(&first, &second).await?,
            Command::Cache => self.cache_stats().await?,
            Command::Unknown(_) => writeln!(self.out, "Unknown command")?,
        }
        Ok(Flow::Continue)
    }

    async fn map_forward(&mut self) -> Result<()> {
        let url = self
            .pager
            .next
            .clone()
            .unwrap_or_else(|| self.client.location_areas_url());
        self.show_page(&url).await
    }

    async fn map_back(&mut self) -> Result<()> {
        match self.pager.previous.clone() {
            Some(url) => self.show_page(&url).await,
            None => {
                writeln!(self.out, "you're on the first page")?;
                Ok(())
            }
        }
    }

    async fn show_page(&mut self, url: &str) -> Result<()> {
        let list = self.client.fetch_location_areas(url).await?;
        for area in &list.results {
            writeln!(self.out, "{}", area.name)?;
        }
        self.pager.update(&list);
        Ok(())
    }

    async fn explore(&mut self, area: &str) -> Result<()> {
        writeln!(self.out, "Exploring {}...", area)?;
        let detail = self.client.fetch_location_area(area).await?;

        writeln!(self.out, "Found Pokemon:")?;
        for name in detail.pokemon_names() {
            writeln!(self.out, " - {}", name)?;
        }
        Ok(())
    }

    // == Catch ==
    async fn catch(&mut self, name: &str, selector: Option<&str>) -> Result<()> {
        let selection = Ball::select(selector);
        if let Some(rejected) = &selection.rejected {
            warn!("{}", rejected);
            writeln!(self.out, "{}", rejected)?;
        }
        let ball = selection.ball;

        writeln!(self.out, "Throwing a {} at {}...", ball, name)?;
        let pokemon = self.client.fetch_pokemon(name).await?;

        if engine::attempt(pokemon.base_experience, ball.modifier(), &mut *self.rng) {
            info!("Caught {} with a {}", pokemon.name, ball);
            writeln!(self.out, "{} was caught!", pokemon.name)?;
            writeln!(self.out, "You may now inspect it with the inspect command.")?;
            self.pokedex.add(pokemon).await;
        } else {
            writeln!(self.out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    async fn list_pokedex(&mut self) -> Result<()> {
        writeln!(self.out, "Your Pokedex:")?;
        let names = self.pokedex.list_names().await;
        if names.is_empty() {
            writeln!(self.out, " (empty)")?;
        }
        for name in names {
            writeln!(self.out, " - {}", name)?;
        }
        Ok(())
    }

    // == Inspect ==
    async fn inspect(&mut self, name: &str) -> Result<()> {
        let mut pokemon = self
            .pokedex
            .get(name)
            .await
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

        if pokemon.is_partial() {
            match self.client.fetch_pokemon(name).await {
                Ok(fresh) => {
                    self.pokedex.add(fresh.clone()).await;
                    pokemon = fresh;
                }
                Err(err) => warn!("Could not refresh {}: {}", name, err),
            }
        }

        writeln!(self.out, "Name: {}", pokemon.name)?;
        writeln!(self.out, "Height: {}", pokemon.height)?;
        writeln!(self.out, "Weight: {}", pokemon.weight)?;
        writeln!(self.out, "Stats:")?;
        for (stat, value) in pokemon.ordered_stats() {
            writeln!(self.out, "  -{}: {}", stat, value)?;
        }
        writeln!(self.out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(self.out, "  - {}", kind)?;
        }
        Ok(())
    }

    // == Battle ==
    async fn battle(&mut self, first: &str, second: &str) -> Result<()> {
        let a = self
            .pokedex
            .get(first)
            .await
            .ok_or_else(|| PokedexError::NotCaught(first.to_string()))?;
        let b = self
            .pokedex
            .get(second)
            .await
            .ok_or_else(|| PokedexError::NotCaught(second.to_string()))?;

        let report = engine::resolve(&a, &b, &mut *self.rng);
        info!(
            "Battle {} vs {} finished after {} turns: {:?}",
            report.a,
            report.b,
            report.turns.len(),
            report.outcome
        );
        writeln!(self.out, "{}", report)?;
        Ok(())
    }

    async fn cache_stats(&mut self) -> Result<()> {
        match self.client.cache() {
            Some(cache) => {
                let stats = cache.stats().await;
                writeln!(self.out, "{}", stats)?;
            }
            None => writeln!(self.out, "Response cache is disabled")?,
        }
        Ok(())
    }
}

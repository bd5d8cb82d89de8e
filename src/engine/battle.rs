//! Battle Engine
//!
//! Simulates a battle between two caught Pokemon. The faster one strikes
//! first, then the two alternate until one faints or the round ceiling is
//! reached.

use std::fmt;

use crate::engine::RandomSource;
use crate::models::Pokemon;

/// Hard cap on attacks in one battle; reaching it is a draw.
pub const MAX_ROUNDS: usize = 200;

/// HP used when a record has no positive `hp` stat.
const FALLBACK_HP: i64 = 10;
/// Attack used when a record has no positive `attack` stat.
const FALLBACK_ATTACK: i64 = 5;
/// Damage roll spans `[DAMAGE_ROLL_MIN, DAMAGE_ROLL_MIN + DAMAGE_ROLL_SPAN)`.
const DAMAGE_ROLL_MIN: f64 = 0.85;
const DAMAGE_ROLL_SPAN: f64 = 0.3;

// == Participant ==
/// Per-battle view of a Pokemon's combat stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleParticipant {
    pub name: String,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
}

impl From<&Pokemon> for BattleParticipant {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            name: pokemon.name.clone(),
            hp: pokemon
                .stat("hp")
                .filter(|hp| *hp > 0)
                .unwrap_or(FALLBACK_HP),
            attack: pokemon.stat("attack").unwrap_or(0),
            defense: pokemon.stat("defense").unwrap_or(0),
            speed: pokemon.stat("speed").unwrap_or(0),
        }
    }
}

/// One attack in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnEvent {
    pub attacker: String,
    pub defender: String,
    pub damage: i64,
    /// Defender HP after the hit, never negative
    pub defender_hp: i64,
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hits {} for {} damage ({} HP left)",
            self.attacker, self.defender, self.damage, self.defender_hp
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The first-listed Pokemon won
    AWins,
    /// The second-listed Pokemon won
    BWins,
    Draw,
}

// == Report ==
/// Full result of a battle: who fought, every turn, and the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub a: String,
    pub b: String,
    pub turns: Vec<TurnEvent>,
    pub outcome: BattleOutcome,
    /// Set when the battle was stopped by [`MAX_ROUNDS`]
    pub hit_round_limit: bool,
}

impl BattleReport {
    /// Name of the winner, or `None` for a draw.
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            BattleOutcome::AWins => Some(self.a.as_str()),
            BattleOutcome::BWins => Some(self.b.as_str()),
            BattleOutcome::Draw => None,
        }
    }

    /// Final line of the transcript.
    pub fn outcome_line(&self) -> String {
        match self.winner() {
            Some(name) => format!("{} wins!", name),
            None => "It's a draw!".to_string(),
        }
    }
}

impl fmt::Display for BattleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Battle: {} vs {}", self.a, self.b)?;
        for turn in &self.turns {
            writeln!(f, "{}", turn)?;
        }
        if self.hit_round_limit {
            writeln!(f, "No winner after {} rounds.", MAX_ROUNDS)?;
        }
        write!(f, "{}", self.outcome_line())
    }
}

// == Damage ==
/// Damage dealt by one attack.
///
/// Non-positive attack counts as 5 and negative defense as 0. The base is
/// `attack - defense / 2` (at least 1), scaled by a roll in `[0.85, 1.15)`
/// and floored, never below 1.
pub fn calc_damage<R: RandomSource + ?Sized>(attack: i64, defense: i64, rng: &mut R) -> i64 {
    let attack = if attack <= 0 { FALLBACK_ATTACK } else { attack };
    let defense = defense.max(0);
    let base = (attack - defense / 2).max(1);
    let factor = DAMAGE_ROLL_MIN + rng.next_unit() * DAMAGE_ROLL_SPAN;
    ((base as f64 * factor).floor() as i64).max(1)
}

// == Resolve ==
/// Runs a battle between `a` and `b`.
///
/// `a` moves first unless `b` is strictly faster. Stored records are not
/// modified.
pub fn resolve<R: RandomSource + ?Sized>(a: &Pokemon, b: &Pokemon, rng: &mut R) -> BattleReport {
    let mut fighters = [BattleParticipant::from(a), BattleParticipant::from(b)];
    let mut attacker = if fighters[1].speed > fighters[0].speed { 1 } else { 0 };
    let mut turns = Vec::new();
    let mut hit_round_limit = false;

    let outcome = loop {
        let defender = 1 - attacker;
        let damage = calc_damage(fighters[attacker].attack, fighters[defender].defense, rng);
        fighters[defender].hp = (fighters[defender].hp - damage).max(0);

        turns.push(TurnEvent {
            attacker: fighters[attacker].name.clone(),
            defender: fighters[defender].name.clone(),
            damage,
            defender_hp: fighters[defender].hp,
        });

        // The ceiling wins over a knockout landed on the last attack
        if turns.len() >= MAX_ROUNDS {
            hit_round_limit = true;
            break BattleOutcome::Draw;
        }

        match (fighters[0].hp, fighters[1].hp) {
            (0, 0) => break BattleOutcome::Draw,
            (_, 0) => break BattleOutcome::AWins,
            (0, _) => break BattleOutcome::BWins,
            _ => {}
        }
        attacker = defender;
    };

    BattleReport {
        a: fighters[0].name.clone(),
        b: fighters[1].name.clone(),
        turns,
        outcome,
        hit_round_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::testing::SequenceSource;

    fn pokemon(name: &str, hp: i64, attack: i64, defense: i64, speed: i64) -> Pokemon {
        let mut p = Pokemon::named(name);
        p.stats.insert("hp".to_string(), hp);
        p.stats.insert("attack".to_string(), attack);
        p.stats.insert("defense".to_string(), defense);
        p.stats.insert("speed".to_string(), speed);
        p
    }

    #[test]
    fn test_participant_hp_floor() {
        let missing = BattleParticipant::from(&Pokemon::named("ghost"));
        assert_eq!(missing.hp, 10);

        let negative = BattleParticipant::from(&pokemon("odd", -3, 1, 1, 1));
        assert_eq!(negative.hp, 10);
    }

    #[test]
    fn test_damage_formula() {
        // base = 50 - 20/2 = 40; factor = 0.85 + 0.5 * 0.3 = 1.0
        assert_eq!(calc_damage(50, 20, &mut SequenceSource::constant(0.5)), 40);
        // factor = 0.85
        assert_eq!(calc_damage(50, 20, &mut SequenceSource::constant(0.0)), 34);
    }

    #[test]
    fn test_damage_floors() {
        let mut rng = SequenceSource::constant(0.0);
        // attack <= 0 counts as 5: base 5, 5 * 0.85 = 4.25
        assert_eq!(calc_damage(0, 0, &mut rng), 4);
        assert_eq!(calc_damage(-40, 0, &mut rng), 4);
        // negative defense counts as 0
        assert_eq!(calc_damage(10, -100, &mut rng), 8);
        // huge defense still deals 1
        assert_eq!(calc_damage(10, 10_000, &mut rng), 1);
    }

    #[test]
    fn test_faster_attacks_first() {
        let slow = pokemon("slow", 50, 10, 10, 1);
        let fast = pokemon("fast", 50, 10, 10, 2);

        let report = resolve(&slow, &fast, &mut SequenceSource::constant(0.5));
        assert_eq!(report.turns[0].attacker, "fast");
        assert_eq!(report.turns[1].attacker, "slow");
    }

    #[test]
    fn test_speed_tie_first_listed_attacks_first() {
        let left = pokemon("left", 50, 10, 10, 7);
        let right = pokemon("right", 50, 10, 10, 7);

        let report = resolve(&left, &right, &mut SequenceSource::constant(0.5));
        assert_eq!(report.turns[0].attacker, "left");
        assert_eq!(report.turns[0].defender, "right");
    }

    #[test]
    fn test_turns_alternate_and_hp_never_negative() {
        let a = pokemon("a", 40, 12, 4, 5);
        let b = pokemon("b", 35, 11, 6, 5);

        let report = resolve(&a, &b, &mut SequenceSource::new(vec![0.1, 0.7, 0.4]));
        for pair in report.turns.windows(2) {
            assert_ne!(pair[0].attacker, pair[1].attacker);
        }
        assert!(report.turns.iter().all(|turn| turn.defender_hp >= 0));
        assert_eq!(report.turns.last().unwrap().defender_hp, 0);
    }

    #[test]
    fn test_strong_beats_weak() {
        let weak = pokemon("weak", 10, 1, 1, 10);
        let strong = pokemon("strong", 100, 1000, 1, 5);

        let report = resolve(&weak, &strong, &mut SequenceSource::constant(0.5));
        assert_eq!(report.outcome, BattleOutcome::BWins);
        assert_eq!(report.turns.len(), 2);
        assert_eq!(report.turns[0].attacker, "weak");
        assert_eq!(report.turns[0].damage, 1);
        assert_eq!(report.winner(), Some("strong"));
    }

    #[test]
    fn test_round_limit_forces_draw() {
        // Each hit deals exactly 1 damage against a huge HP pool
        let a = pokemon("wall-a", 10_000, 1, 10_000, 1);
        let b = pokemon("wall-b", 10_000, 1, 10_000, 1);

        let report = resolve(&a, &b, &mut SequenceSource::constant(0.0));
        assert_eq!(report.outcome, BattleOutcome::Draw);
        assert!(report.hit_round_limit);
        assert_eq!(report.turns.len(), MAX_ROUNDS);
        assert_eq!(report.outcome_line(), "It's a draw!");
    }

    #[test]
    fn test_knockout_on_last_round_is_a_draw() {
        // b moves first; a's 100th one-damage hit lands on attack 200
        let a = pokemon("a", 101, 1, 10_000, 0);
        let b = pokemon("b", 100, 1, 10_000, 1);

        let report = resolve(&a, &b, &mut SequenceSource::constant(0.0));
        assert_eq!(report.outcome, BattleOutcome::Draw);
        assert!(report.hit_round_limit);
        assert_eq!(report.turns.len(), MAX_ROUNDS);
        assert_eq!(report.turns.last().unwrap().defender_hp, 0);
        assert!(report.to_string().ends_with("No winner after 200 rounds.\nIt's a draw!"));
    }

    #[test]
    fn test_knockout_on_attack_199_wins() {
        // a moves first; its 100th hit is attack 199
        let a = pokemon("a", 101, 1, 10_000, 1);
        let b = pokemon("b", 100, 1, 10_000, 0);

        let report = resolve(&a, &b, &mut SequenceSource::constant(0.0));
        assert_eq!(report.outcome, BattleOutcome::AWins);
        assert!(!report.hit_round_limit);
        assert_eq!(report.turns.len(), MAX_ROUNDS - 1);
    }

    #[test]
    fn test_records_are_not_mutated() {
        let a = Pokemon::named("a");
        let b = pokemon("b", 5, 50, 0, 0);
        let before = a.clone();

        resolve(&a, &b, &mut SequenceSource::constant(0.5));
        assert_eq!(a, before);
        assert!(a.stats.is_empty());
    }

    #[test]
    fn test_report_display() {
        let weak = pokemon("weak", 10, 1, 1, 10);
        let strong = pokemon("strong", 100, 1000, 1, 5);

        let text = resolve(&weak, &strong, &mut SequenceSource::constant(0.5)).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Battle: weak vs strong",
                "weak hits strong for 1 damage (99 HP left)",
                "strong hits weak for 1000 damage (0 HP left)",
                "strong wins!",
            ]
        );
    }
}

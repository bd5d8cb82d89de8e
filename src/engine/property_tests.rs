//! Property-Based Tests for the capture and battle engines

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::{attempt, calc_damage, catch_chance, resolve, Ball, BattleOutcome, MAX_ROUNDS};
use crate::models::Pokemon;

fn ball_strategy() -> impl Strategy<Value = Ball> {
    prop::sample::select(Ball::ALL.to_vec())
}

fn stat_pokemon(name: &str, stats: (i64, i64, i64, i64)) -> Pokemon {
    let mut p = Pokemon::named(name);
    p.stats.insert("hp".to_string(), stats.0);
    p.stats.insert("attack".to_string(), stats.1);
    p.stats.insert("defense".to_string(), stats.2);
    p.stats.insert("speed".to_string(), stats.3);
    p
}

fn stats_strategy() -> impl Strategy<Value = (i64, i64, i64, i64)> {
    (-50i64..500, -50i64..500, -50i64..2000, -10i64..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For a fixed ball, a harder Pokemon is never easier to catch.
    #[test]
    fn prop_catch_chance_non_increasing(
        ball in ball_strategy(),
        difficulty in -1000i64..2000,
        step in 0i64..500
    ) {
        let easier = catch_chance(difficulty, ball.modifier());
        let harder = catch_chance(difficulty + step, ball.modifier());
        prop_assert!(harder <= easier);
    }

    // Before the final cap the chance sits in [0.01, 0.99] times the modifier.
    #[test]
    fn prop_catch_chance_bounds(ball in ball_strategy(), difficulty in any::<i32>()) {
        let chance = catch_chance(difficulty as i64, ball.modifier());
        let lower = (0.01 * ball.modifier()).min(0.9999);
        let upper = (0.99 * ball.modifier()).min(0.9999);
        prop_assert!(chance >= lower - 1e-12);
        prop_assert!(chance <= upper + 1e-12);
        prop_assert!(chance < 1.0);
    }

    // An unknown selector resolves to the same outcomes as a plain pokeball.
    #[test]
    fn prop_unknown_ball_matches_pokeball(
        selector in "[a-z]{3,12}",
        difficulty in 0i64..700,
        seed in any::<u64>()
    ) {
        prop_assume!(selector.parse::<Ball>().is_err());
        let selected = Ball::select(Some(&selector));
        prop_assert_eq!(selected.ball, Ball::Pokeball);

        let mut a = StdRng::seed_from_u64(seed);
        let mut b = StdRng::seed_from_u64(seed);
        for _ in 0..10 {
            prop_assert_eq!(
                attempt(difficulty, selected.ball.modifier(), &mut a),
                attempt(difficulty, Ball::Pokeball.modifier(), &mut b)
            );
        }
    }

    // Damage is never below one whatever the stats and roll.
    #[test]
    fn prop_damage_at_least_one(
        attack in any::<i32>(),
        defense in any::<i32>(),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(calc_damage(attack as i64, defense as i64, &mut rng) >= 1);
    }

    // Every battle ends within the round ceiling, and a decisive one ends
    // with the loser at zero HP.
    #[test]
    fn prop_battle_terminates(
        a_stats in stats_strategy(),
        b_stats in stats_strategy(),
        seed in any::<u64>()
    ) {
        let a = stat_pokemon("a", a_stats);
        let b = stat_pokemon("b", b_stats);

        let report = resolve(&a, &b, &mut StdRng::seed_from_u64(seed));
        prop_assert!(!report.turns.is_empty());
        prop_assert!(report.turns.len() <= MAX_ROUNDS);
        if report.outcome != BattleOutcome::Draw {
            prop_assert_eq!(report.turns.last().unwrap().defender_hp, 0);
        } else {
            prop_assert!(report.hit_round_limit);
        }
    }

    // Identically seeded sources replay the same battle.
    #[test]
    fn prop_battle_deterministic_under_seed(
        a_stats in stats_strategy(),
        b_stats in stats_strategy(),
        seed in any::<u64>()
    ) {
        let a = stat_pokemon("a", a_stats);
        let b = stat_pokemon("b", b_stats);

        let first = resolve(&a, &b, &mut StdRng::seed_from_u64(seed));
        let second = resolve(&a, &b, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }
}

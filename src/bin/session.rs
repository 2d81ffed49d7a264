//! Scripted session driver.
//!
//! Plays out a short career on a seeded RNG and prints every notification
//! batch the achievement system produces, so the whole unlock pipeline
//! can be eyeballed from a terminal.
//!
//! Usage:
//!   cargo run --bin session            # default seed
//!   cargo run --bin session -- 1337    # explicit seed

use std::env;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::text::Line;

use throne::achievements::{Catalog, Category, Evaluator, PresentationSurface, TelemetrySink};
use throne::character::Player;

/// Prints rendered notices instead of drawing them; the pacing delay is
/// reported rather than slept so the script stays instant.
struct ConsoleSurface;

impl PresentationSurface for ConsoleSurface {
    fn present(&mut self, lines: Vec<Line<'static>>, pace_ms: u64) {
        println!("  ┌──────────────────────────────────────────────┐");
        for line in lines {
            let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
            println!("  │ {:<44} │", text);
        }
        println!("  └────────────────────────── displayed {pace_ms} ms ┘");
    }
}

/// Echoes what a real analytics sink would receive.
struct ConsoleTelemetry;

impl TelemetrySink for ConsoleTelemetry {
    fn record_achievement(&mut self, id: &str, _name: &str, player_level: u32, category: Category) {
        println!(
            "  [telemetry] {} ({}, level {})",
            id,
            category.name(),
            player_level
        );
    }
}

fn main() {
    let seed: u64 = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║              THRONE SESSION DRIVER                ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();
    println!("Seed: {seed}");
    println!();

    let mut evaluator = Evaluator::with_hooks(
        Catalog::standard(),
        Box::new(ConsoleTelemetry),
        None,
    );
    let mut player = Player::new("Wanderer");
    let mut surface = ConsoleSurface;

    for day in 1..=10u32 {
        println!("── Day {day} ──");

        let kills = rng.gen_range(5..40);
        for _ in 0..kills {
            let boss = rng.gen_ratio(1, 12);
            player.statistics.record_monster_kill(boss, false);
            player.statistics.record_damage_dealt(rng.gen_range(20..220));
            if rng.gen_ratio(1, 5) {
                player.statistics.record_critical_hit();
            }
        }
        player.gain_gold(rng.gen_range(50..900));
        player.gain_experience(rng.gen_range(100..1_200));
        player.level = 1 + day;

        player.statistics.note_dungeon_depth(day);
        if rng.gen_ratio(1, 3) {
            player.statistics.record_chest_opened();
        }
        player.statistics.note_play_streak(day);

        if day == 6 {
            player.married = true;
            println!("  (the Wanderer marries)");
        }
        if day == 8 {
            player.team = Some("Night Watch".to_string());
        }

        evaluator.check_achievements(&mut player);

        // Roughly one duel resolution per day
        let took_damage = rng.gen_ratio(4, 5);
        let hp_left = rng.gen_range(0.02..1.0);
        evaluator.check_combat_outcome(&mut player, took_damage, hp_left);

        evaluator.drain_and_present(&mut surface);
        println!();
    }

    let catalog = evaluator.catalog();
    println!("═════════════════════════════════════════════════════");
    println!(
        "Career: level {}, {} gold, {} monsters slain",
        player.level, player.gold, player.statistics.monsters_killed
    );
    println!(
        "Achievements: {}/{} ({:.1}%), {} pts",
        player.achievements.unlocked_count(),
        catalog.len(),
        player.achievements.completion_percentage(catalog),
        player.achievements.total_points(catalog)
    );
}

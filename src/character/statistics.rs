//! Lifetime statistics the achievement evaluator reads.
//!
//! Counters only go up and high-water marks only ratchet, which is what
//! makes re-scanning every achievement threshold safe.

use serde::{Deserialize, Serialize};

use crate::achievements::types::StatKind;

/// Aggregate tracking across a player's whole career.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Statistics {
    pub monsters_killed: u64,
    pub bosses_killed: u64,
    pub uniques_killed: u64,
    pub critical_hits: u64,
    pub damage_dealt: u64,
    pub players_killed: u64,
    /// Most gold ever held at one time.
    pub highest_gold_held: u64,
    pub total_gold_earned: u64,
    pub gold_spent: u64,
    pub items_bought: u64,
    /// Deepest dungeon level ever reached.
    pub deepest_dungeon_level: u32,
    pub chests_opened: u64,
    pub secrets_found: u64,
    pub friends_gained: u64,
    /// Longest run of consecutive play days.
    pub best_play_streak_days: u32,
    pub deaths: u64,
    pub total_experience_earned: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when a monster dies. Bosses and uniques also count as
    /// plain monster kills.
    pub fn record_monster_kill(&mut self, boss: bool, unique: bool) {
        self.monsters_killed += 1;
        if boss {
            self.bosses_killed += 1;
        }
        if unique {
            self.uniques_killed += 1;
        }
    }

    pub fn record_player_kill(&mut self) {
        self.players_killed += 1;
    }

    pub fn record_critical_hit(&mut self) {
        self.critical_hits += 1;
    }

    pub fn record_damage_dealt(&mut self, amount: u64) {
        self.damage_dealt += amount;
    }

    /// Ratchet the gold high-water mark. Lower balances leave it alone.
    pub fn note_gold_held(&mut self, amount: u64) {
        if amount > self.highest_gold_held {
            self.highest_gold_held = amount;
        }
    }

    pub fn record_gold_earned(&mut self, amount: u64) {
        self.total_gold_earned += amount;
    }

    pub fn record_gold_spent(&mut self, amount: u64) {
        self.gold_spent += amount;
    }

    pub fn record_purchase(&mut self) {
        self.items_bought += 1;
    }

    /// Ratchet the dungeon-depth high-water mark.
    pub fn note_dungeon_depth(&mut self, level: u32) {
        if level > self.deepest_dungeon_level {
            self.deepest_dungeon_level = level;
        }
    }

    pub fn record_chest_opened(&mut self) {
        self.chests_opened += 1;
    }

    pub fn record_secret_found(&mut self) {
        self.secrets_found += 1;
    }

    pub fn record_friend_gained(&mut self) {
        self.friends_gained += 1;
    }

    /// Ratchet the best consecutive-play streak.
    pub fn note_play_streak(&mut self, days: u32) {
        if days > self.best_play_streak_days {
            self.best_play_streak_days = days;
        }
    }

    pub fn record_death(&mut self) {
        self.deaths += 1;
    }

    pub fn record_experience_earned(&mut self, amount: u64) {
        self.total_experience_earned += amount;
    }

    /// The value an achievement threshold compares against.
    pub fn value(&self, kind: StatKind) -> u64 {
        match kind {
            StatKind::MonstersKilled => self.monsters_killed,
            StatKind::BossesKilled => self.bosses_killed,
            StatKind::UniquesKilled => self.uniques_killed,
            StatKind::CriticalHits => self.critical_hits,
            StatKind::DamageDealt => self.damage_dealt,
            StatKind::PlayersKilled => self.players_killed,
            StatKind::HighestGoldHeld => self.highest_gold_held,
            StatKind::GoldSpent => self.gold_spent,
            StatKind::ItemsBought => self.items_bought,
            StatKind::DeepestDungeonLevel => u64::from(self.deepest_dungeon_level),
            StatKind::ChestsOpened => self.chests_opened,
            StatKind::SecretsFound => self.secrets_found,
            StatKind::FriendsGained => self.friends_gained,
            StatKind::ConsecutivePlayDays => u64::from(self.best_play_streak_days),
            StatKind::Deaths => self.deaths,
            StatKind::ExperienceEarned => self.total_experience_earned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boss_kill_counts_as_monster_kill() {
        let mut stats = Statistics::new();
        stats.record_monster_kill(true, false);

        assert_eq!(stats.monsters_killed, 1);
        assert_eq!(stats.bosses_killed, 1);
        assert_eq!(stats.uniques_killed, 0);
    }

    #[test]
    fn test_gold_high_water_only_ratchets_up() {
        let mut stats = Statistics::new();

        stats.note_gold_held(500);
        assert_eq!(stats.highest_gold_held, 500);

        stats.note_gold_held(200);
        assert_eq!(stats.highest_gold_held, 500);

        stats.note_gold_held(800);
        assert_eq!(stats.highest_gold_held, 800);
    }

    #[test]
    fn test_dungeon_depth_only_ratchets_down_the_stairs() {
        let mut stats = Statistics::new();

        stats.note_dungeon_depth(7);
        stats.note_dungeon_depth(3);
        assert_eq!(stats.deepest_dungeon_level, 7);
    }

    #[test]
    fn test_value_maps_every_kind() {
        let mut stats = Statistics::new();
        stats.record_monster_kill(false, false);
        stats.note_dungeon_depth(4);
        stats.note_play_streak(9);
        stats.record_experience_earned(123);

        assert_eq!(stats.value(StatKind::MonstersKilled), 1);
        assert_eq!(stats.value(StatKind::DeepestDungeonLevel), 4);
        assert_eq!(stats.value(StatKind::ConsecutivePlayDays), 9);
        assert_eq!(stats.value(StatKind::ExperienceEarned), 123);
        assert_eq!(stats.value(StatKind::Deaths), 0);
    }
}

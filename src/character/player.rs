//! The player entity: resources, social state, and embedded records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::achievements::types::PlayerAchievementRecord;
use crate::character::statistics::Statistics;

/// Difficulty mode chosen at character creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Normal,
    Veteran,
    Nightmare,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Normal => "Normal",
            Difficulty::Veteran => "Veteran",
            Difficulty::Nightmare => "Nightmare",
        }
    }
}

/// A player character and everything saved with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub gold: u64,
    pub experience: u64,
    pub married: bool,
    pub team: Option<String>,
    pub king: bool,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub achievements: PlayerAchievementRecord,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            level: 1,
            gold: 0,
            experience: 0,
            married: false,
            team: None,
            king: false,
            difficulty: Difficulty::Normal,
            statistics: Statistics::new(),
            achievements: PlayerAchievementRecord::new(),
        }
    }

    /// Credit gold and keep the earned total and high-water mark current,
    /// so gold-driven achievements see the grant on the next scan.
    pub fn gain_gold(&mut self, amount: u64) {
        self.gold += amount;
        self.statistics.record_gold_earned(amount);
        self.statistics.note_gold_held(self.gold);
    }

    /// Spend gold if the purse covers it. Returns false (and changes
    /// nothing) when it doesn't.
    pub fn spend_gold(&mut self, amount: u64) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        self.statistics.record_gold_spent(amount);
        true
    }

    /// Credit experience and the cumulative earned counter.
    pub fn gain_experience(&mut self, amount: u64) {
        self.experience += amount;
        self.statistics.record_experience_earned(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_clean() {
        let player = Player::new("Aldric");

        assert_eq!(player.name, "Aldric");
        assert_eq!(player.level, 1);
        assert_eq!(player.gold, 0);
        assert!(!player.married);
        assert!(!player.king);
        assert_eq!(player.difficulty, Difficulty::Normal);
        assert_eq!(player.achievements.unlocked_count(), 0);
        assert!(!player.id.is_empty());
    }

    #[test]
    fn test_gain_gold_updates_statistics() {
        let mut player = Player::new("Aldric");

        player.gain_gold(300);
        player.gain_gold(900);

        assert_eq!(player.gold, 1200);
        assert_eq!(player.statistics.total_gold_earned, 1200);
        assert_eq!(player.statistics.highest_gold_held, 1200);
    }

    #[test]
    fn test_spend_gold_tracks_spending_and_keeps_high_water() {
        let mut player = Player::new("Aldric");
        player.gain_gold(1000);

        assert!(player.spend_gold(700));
        assert_eq!(player.gold, 300);
        assert_eq!(player.statistics.gold_spent, 700);
        assert_eq!(player.statistics.highest_gold_held, 1000);

        // Not enough left; nothing changes
        assert!(!player.spend_gold(400));
        assert_eq!(player.gold, 300);
        assert_eq!(player.statistics.gold_spent, 700);
    }

    #[test]
    fn test_gain_experience_updates_cumulative_counter() {
        let mut player = Player::new("Aldric");

        player.gain_experience(150);
        player.gain_experience(50);

        assert_eq!(player.experience, 200);
        assert_eq!(player.statistics.total_experience_earned, 200);
    }

    #[test]
    fn test_player_serde_round_trip() {
        let mut player = Player::new("Aldric");
        player.gain_gold(500);
        player.achievements.unlock("first_blood");

        let json = serde_json::to_string(&player).unwrap();
        let loaded: Player = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.name, "Aldric");
        assert_eq!(loaded.gold, 500);
        assert!(loaded.achievements.is_unlocked("first_blood"));
        assert_eq!(
            loaded.achievements.unlocked_at("first_blood"),
            player.achievements.unlocked_at("first_blood")
        );
    }
}

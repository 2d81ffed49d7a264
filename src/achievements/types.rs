//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::achievements::catalog::Catalog;

/// Achievement categories for organization in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Combat,
    Exploration,
    Economy,
    Social,
    Progression,
    Challenge,
    Secret,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 7] = [
        Category::Combat,
        Category::Exploration,
        Category::Economy,
        Category::Social,
        Category::Progression,
        Category::Challenge,
        Category::Secret,
    ];

    /// Display name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Combat => "Combat",
            Category::Exploration => "Exploration",
            Category::Economy => "Economy",
            Category::Social => "Social",
            Category::Progression => "Progression",
            Category::Challenge => "Challenge",
            Category::Secret => "Secret",
        }
    }
}

/// Achievement rarity rank. The ordering (`Bronze < ... < Diamond`) is
/// relied on when consolidated notifications sort by descending tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl Tier {
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Diamond => "Diamond",
        }
    }
}

/// Player statistics a threshold condition can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    MonstersKilled,
    BossesKilled,
    UniquesKilled,
    CriticalHits,
    DamageDealt,
    PlayersKilled,
    HighestGoldHeld,
    GoldSpent,
    ItemsBought,
    DeepestDungeonLevel,
    ChestsOpened,
    SecretsFound,
    FriendsGained,
    ConsecutivePlayDays,
    Deaths,
    ExperienceEarned,
}

/// Boolean player state a condition can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerFlag {
    Married,
    OnTeam,
    King,
    NightmareDifficulty,
}

/// What it takes to earn an achievement.
///
/// `Stat` and `Level` thresholds are monotonic: statistics only grow, so
/// re-scanning an already-satisfied condition is harmless. `Event`
/// entries are never granted by the scan; they are awarded through
/// [`Evaluator::check_combat_outcome`](crate::achievements::Evaluator::check_combat_outcome)
/// or a direct `try_unlock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockCondition {
    /// A cumulative or high-water statistic reached the threshold.
    Stat(StatKind, u64),
    /// The player reached this level.
    Level(u32),
    /// A boolean player state is set.
    Flag(PlayerFlag),
    /// Every other non-secret, non-meta achievement is unlocked.
    Completionist,
    /// Granted only by event-local logic, never by the stat scan.
    Event,
}

/// Static definition of an achievement.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Shown instead of `description` while `secret` and still locked.
    pub secret_hint: Option<&'static str>,
    pub category: Category,
    pub tier: Tier,
    pub secret: bool,
    pub points: u32,
    pub gold_reward: u64,
    pub experience_reward: u64,
    /// Optional flavor text shown on unlock.
    pub unlock_message: Option<&'static str>,
    pub condition: UnlockCondition,
    pub icon: &'static str,
}

impl AchievementDef {
    /// The text to display for this entry given its unlock state.
    /// Secret entries show their hint (or nothing at all) until earned.
    pub fn display_description(&self, unlocked: bool) -> &'static str {
        if self.secret && !unlocked {
            self.secret_hint.unwrap_or("???")
        } else {
            self.description
        }
    }

    /// Whether the condition depends on other achievements' unlock state.
    pub fn is_meta(&self) -> bool {
        matches!(self.condition, UnlockCondition::Completionist)
    }

    /// Secret and meta entries are excluded from the completionist tally.
    pub fn counts_toward_completion(&self) -> bool {
        !self.secret && !self.is_meta()
    }
}

/// Record of a single unlocked achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    /// UTC seconds at the moment of unlock.
    pub unlocked_at: i64,
}

/// Per-player unlock record, saved with the player.
///
/// The map is both the unlocked set and the timestamp table, so the two
/// can never drift apart. There is deliberately no removal operation:
/// unlocking is one-way.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PlayerAchievementRecord {
    unlocked: HashMap<String, UnlockedAchievement>,
}

impl PlayerAchievementRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an achievement is unlocked.
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains_key(id)
    }

    /// Unlock an achievement. Returns true only when newly unlocked;
    /// a repeat call changes nothing.
    pub fn unlock(&mut self, id: &str) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(
            id.to_string(),
            UnlockedAchievement {
                unlocked_at: chrono::Utc::now().timestamp(),
            },
        );
        true
    }

    /// When the achievement was unlocked, if it has been.
    pub fn unlocked_at(&self, id: &str) -> Option<i64> {
        self.unlocked.get(id).map(|u| u.unlocked_at)
    }

    /// Number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Iterate over unlocked achievement ids.
    pub fn unlocked_ids(&self) -> impl Iterator<Item = &str> {
        self.unlocked.keys().map(String::as_str)
    }

    /// Unlock percentage against a catalog (0.0 - 100.0). Ids the catalog
    /// no longer knows (saves from other versions) are not counted.
    pub fn completion_percentage(&self, catalog: &Catalog) -> f32 {
        if catalog.len() == 0 {
            return 0.0;
        }
        let known = catalog
            .all()
            .iter()
            .filter(|def| self.is_unlocked(def.id))
            .count();
        (known as f32 / catalog.len() as f32) * 100.0
    }

    /// Total score from unlocked achievements.
    pub fn total_points(&self, catalog: &Catalog) -> u32 {
        catalog
            .all()
            .iter()
            .filter(|def| self.is_unlocked(def.id))
            .map(|def| def.points)
            .sum()
    }

    /// Unlocked/total split for one category.
    pub fn count_by_category(&self, catalog: &Catalog, category: Category) -> (usize, usize) {
        let defs = catalog.by_category(category);
        let unlocked = defs.iter().filter(|def| self.is_unlocked(def.id)).count();
        (unlocked, defs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::catalog::Catalog;

    #[test]
    fn test_unlock_is_idempotent() {
        let mut record = PlayerAchievementRecord::new();

        assert!(!record.is_unlocked("first_blood"));
        assert!(record.unlock("first_blood"));
        assert!(record.is_unlocked("first_blood"));

        // Second unlock is a no-op
        let stamp = record.unlocked_at("first_blood");
        assert!(!record.unlock("first_blood"));
        assert_eq!(record.unlocked_at("first_blood"), stamp);
        assert_eq!(record.unlocked_count(), 1);
    }

    #[test]
    fn test_timestamp_recorded_on_unlock() {
        let mut record = PlayerAchievementRecord::new();
        record.unlock("first_blood");

        let stamp = record.unlocked_at("first_blood").unwrap();
        assert!(stamp > 0);
        assert_eq!(record.unlocked_at("monster_slayer_10"), None);
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut record = PlayerAchievementRecord::new();
        record.unlock("first_blood");
        record.unlock("the_crown");

        let json = serde_json::to_string_pretty(&record).unwrap();
        let loaded: PlayerAchievementRecord = serde_json::from_str(&json).unwrap();

        assert!(loaded.is_unlocked("first_blood"));
        assert!(loaded.is_unlocked("the_crown"));
        assert_eq!(
            loaded.unlocked_at("first_blood"),
            record.unlocked_at("first_blood")
        );
        assert_eq!(loaded.unlocked_count(), 2);
    }

    #[test]
    fn test_completion_percentage() {
        let catalog = Catalog::standard();
        let mut record = PlayerAchievementRecord::new();

        assert_eq!(record.completion_percentage(&catalog), 0.0);

        for def in catalog.all().iter().take(9) {
            record.unlock(def.id);
        }
        let percentage = record.completion_percentage(&catalog);
        assert!((percentage - 20.0).abs() < 0.01, "got {percentage}");
    }

    #[test]
    fn test_unknown_ids_do_not_count_toward_percentage() {
        let catalog = Catalog::standard();
        let mut record = PlayerAchievementRecord::new();
        record.unlock("retired_from_an_old_version");

        assert_eq!(record.completion_percentage(&catalog), 0.0);
        assert_eq!(record.total_points(&catalog), 0);
    }

    #[test]
    fn test_total_points_sums_unlocked_only() {
        let catalog = Catalog::standard();
        let mut record = PlayerAchievementRecord::new();

        record.unlock("first_blood");
        record.unlock("the_crown");

        let expected = catalog.get("first_blood").unwrap().points
            + catalog.get("the_crown").unwrap().points;
        assert_eq!(record.total_points(&catalog), expected);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Bronze < Tier::Silver);
        assert!(Tier::Silver < Tier::Gold);
        assert!(Tier::Gold < Tier::Platinum);
        assert!(Tier::Platinum < Tier::Diamond);
    }

    #[test]
    fn test_secret_description_hidden_until_unlocked() {
        let catalog = Catalog::standard();
        let def = catalog.get("graveborn").unwrap();

        assert!(def.secret);
        assert_eq!(def.display_description(false), def.secret_hint.unwrap());
        assert_eq!(def.display_description(true), def.description);

        // Non-secret entries always show their description
        let open = catalog.get("first_blood").unwrap();
        assert_eq!(open.display_description(false), open.description);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Combat.name(), "Combat");
        assert_eq!(Category::Secret.name(), "Secret");
        assert_eq!(Category::ALL.len(), 7);
    }
}

//! The static achievement catalog and the registry built from it.

use std::collections::HashMap;

use crate::achievements::types::{
    AchievementDef, Category, PlayerFlag, StatKind, Tier, UnlockCondition,
};

/// All achievement definitions in display order.
///
/// Reward magnitudes follow the tier: Bronze 25g/50xp, Silver 100/250,
/// Gold 500/1,000, Platinum 2,000/5,000, Diamond 10,000/25,000.
pub const CATALOG: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // COMBAT
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "first_blood",
        name: "First Blood",
        description: "Slay your first monster",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Bronze,
        secret: false,
        points: 10,
        gold_reward: 25,
        experience_reward: 50,
        unlock_message: Some("Every legend starts somewhere."),
        condition: UnlockCondition::Stat(StatKind::MonstersKilled, 1),
        icon: "⚔️",
    },
    AchievementDef {
        id: "monster_slayer_10",
        name: "Monster Slayer I",
        description: "Slay 10 monsters",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Bronze,
        secret: false,
        points: 10,
        gold_reward: 25,
        experience_reward: 50,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::MonstersKilled, 10),
        icon: "💀",
    },
    AchievementDef {
        id: "monster_slayer_100",
        name: "Monster Slayer II",
        description: "Slay 100 monsters",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::MonstersKilled, 100),
        icon: "💀",
    },
    AchievementDef {
        id: "monster_slayer_500",
        name: "Monster Slayer III",
        description: "Slay 500 monsters",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::MonstersKilled, 500),
        icon: "💀",
    },
    AchievementDef {
        id: "monster_slayer_1000",
        name: "Monster Slayer IV",
        description: "Slay 1,000 monsters",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Platinum,
        secret: false,
        points: 100,
        gold_reward: 2_000,
        experience_reward: 5_000,
        unlock_message: Some("The fields are quieter now."),
        condition: UnlockCondition::Stat(StatKind::MonstersKilled, 1_000),
        icon: "💀",
    },
    AchievementDef {
        id: "boss_breaker",
        name: "Boss Breaker",
        description: "Defeat your first dungeon boss",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::BossesKilled, 1),
        icon: "👹",
    },
    AchievementDef {
        id: "boss_breaker_10",
        name: "Scourge of Bosses",
        description: "Defeat 10 dungeon bosses",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::BossesKilled, 10),
        icon: "👹",
    },
    AchievementDef {
        id: "giant_killer",
        name: "Giant Killer",
        description: "Slay a unique monster",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: Some("It had a name. Now it has a tombstone."),
        condition: UnlockCondition::Stat(StatKind::UniquesKilled, 1),
        icon: "🐉",
    },
    AchievementDef {
        id: "precision_striker",
        name: "Precision Striker",
        description: "Land 100 critical hits",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::CriticalHits, 100),
        icon: "🎯",
    },
    AchievementDef {
        id: "heavy_hitter",
        name: "Heavy Hitter",
        description: "Deal 10,000 total damage",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::DamageDealt, 10_000),
        icon: "🔨",
    },
    AchievementDef {
        id: "force_of_nature",
        name: "Force of Nature",
        description: "Deal 250,000 total damage",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::DamageDealt, 250_000),
        icon: "🌪️",
    },
    AchievementDef {
        id: "duelist",
        name: "Duelist",
        description: "Defeat another player in combat",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::PlayersKilled, 1),
        icon: "🤺",
    },
    AchievementDef {
        id: "warlord",
        name: "Warlord",
        description: "Defeat 25 players in combat",
        secret_hint: None,
        category: Category::Combat,
        tier: Tier::Platinum,
        secret: false,
        points: 100,
        gold_reward: 2_000,
        experience_reward: 5_000,
        unlock_message: Some("They duel in your shadow now."),
        condition: UnlockCondition::Stat(StatKind::PlayersKilled, 25),
        icon: "🏴",
    },
    // ═══════════════════════════════════════════════════════════════
    // EXPLORATION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "cellar_delver",
        name: "Cellar Delver",
        description: "Descend to dungeon level 5",
        secret_hint: None,
        category: Category::Exploration,
        tier: Tier::Bronze,
        secret: false,
        points: 10,
        gold_reward: 25,
        experience_reward: 50,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::DeepestDungeonLevel, 5),
        icon: "🕯️",
    },
    AchievementDef {
        id: "deep_delver",
        name: "Deep Delver",
        description: "Descend to dungeon level 10",
        secret_hint: None,
        category: Category::Exploration,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::DeepestDungeonLevel, 10),
        icon: "⛏️",
    },
    AchievementDef {
        id: "abyss_walker",
        name: "Abyss Walker",
        description: "Descend to dungeon level 25",
        secret_hint: None,
        category: Category::Exploration,
        tier: Tier::Platinum,
        secret: false,
        points: 100,
        gold_reward: 2_000,
        experience_reward: 5_000,
        unlock_message: Some("The dark looks back."),
        condition: UnlockCondition::Stat(StatKind::DeepestDungeonLevel, 25),
        icon: "🌑",
    },
    AchievementDef {
        id: "chest_cracker",
        name: "Chest Cracker",
        description: "Open 10 chests",
        secret_hint: None,
        category: Category::Exploration,
        tier: Tier::Bronze,
        secret: false,
        points: 10,
        gold_reward: 25,
        experience_reward: 50,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::ChestsOpened, 10),
        icon: "🧰",
    },
    AchievementDef {
        id: "master_looter",
        name: "Master Looter",
        description: "Open 100 chests",
        secret_hint: None,
        category: Category::Exploration,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::ChestsOpened, 100),
        icon: "💰",
    },
    AchievementDef {
        id: "keen_eye",
        name: "Keen Eye",
        description: "Find a hidden passage",
        secret_hint: None,
        category: Category::Exploration,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::SecretsFound, 1),
        icon: "🔍",
    },
    AchievementDef {
        id: "keeper_of_mysteries",
        name: "Keeper of Mysteries",
        description: "Find 25 hidden passages",
        secret_hint: None,
        category: Category::Exploration,
        tier: Tier::Platinum,
        secret: false,
        points: 100,
        gold_reward: 2_000,
        experience_reward: 5_000,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::SecretsFound, 25),
        icon: "🗝️",
    },
    // ═══════════════════════════════════════════════════════════════
    // ECONOMY
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "pocket_money",
        name: "Pocket Money",
        description: "Hold 1,000 gold at once",
        secret_hint: None,
        category: Category::Economy,
        tier: Tier::Bronze,
        secret: false,
        points: 10,
        gold_reward: 25,
        experience_reward: 50,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::HighestGoldHeld, 1_000),
        icon: "🪙",
    },
    AchievementDef {
        id: "merchant_prince",
        name: "Merchant Prince",
        description: "Hold 10,000 gold at once",
        secret_hint: None,
        category: Category::Economy,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::HighestGoldHeld, 10_000),
        icon: "🏦",
    },
    AchievementDef {
        id: "vault_builder",
        name: "Vault Builder",
        description: "Hold 100,000 gold at once",
        secret_hint: None,
        category: Category::Economy,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::HighestGoldHeld, 100_000),
        icon: "💰",
    },
    AchievementDef {
        id: "royal_treasury",
        name: "Royal Treasury",
        description: "Hold 1,000,000 gold at once",
        secret_hint: None,
        category: Category::Economy,
        tier: Tier::Platinum,
        secret: false,
        points: 100,
        gold_reward: 2_000,
        experience_reward: 5_000,
        unlock_message: Some("Dragons would envy this hoard."),
        condition: UnlockCondition::Stat(StatKind::HighestGoldHeld, 1_000_000),
        icon: "🏛️",
    },
    AchievementDef {
        id: "big_spender",
        name: "Big Spender",
        description: "Spend 10,000 gold",
        secret_hint: None,
        category: Category::Economy,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::GoldSpent, 10_000),
        icon: "💸",
    },
    AchievementDef {
        id: "market_regular",
        name: "Market Regular",
        description: "Buy 10 items",
        secret_hint: None,
        category: Category::Economy,
        tier: Tier::Bronze,
        secret: false,
        points: 10,
        gold_reward: 25,
        experience_reward: 50,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::ItemsBought, 10),
        icon: "🛒",
    },
    AchievementDef {
        id: "pack_mule",
        name: "Pack Mule",
        description: "Buy 50 items",
        secret_hint: None,
        category: Category::Economy,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::ItemsBought, 50),
        icon: "🎒",
    },
    // ═══════════════════════════════════════════════════════════════
    // SOCIAL
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "newlywed",
        name: "Newlywed",
        description: "Get married",
        secret_hint: None,
        category: Category::Social,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: Some("May the realm toast your union."),
        condition: UnlockCondition::Flag(PlayerFlag::Married),
        icon: "💍",
    },
    AchievementDef {
        id: "band_of_blades",
        name: "Band of Blades",
        description: "Join a team",
        secret_hint: None,
        category: Category::Social,
        tier: Tier::Bronze,
        secret: false,
        points: 10,
        gold_reward: 25,
        experience_reward: 50,
        unlock_message: None,
        condition: UnlockCondition::Flag(PlayerFlag::OnTeam),
        icon: "🛡️",
    },
    AchievementDef {
        id: "the_crown",
        name: "The Crown",
        description: "Seize the throne and rule the realm",
        secret_hint: None,
        category: Category::Social,
        tier: Tier::Diamond,
        secret: false,
        points: 250,
        gold_reward: 10_000,
        experience_reward: 25_000,
        unlock_message: Some("Heavy is the head."),
        condition: UnlockCondition::Flag(PlayerFlag::King),
        icon: "👑",
    },
    AchievementDef {
        id: "well_liked",
        name: "Well Liked",
        description: "Gain 5 friends",
        secret_hint: None,
        category: Category::Social,
        tier: Tier::Bronze,
        secret: false,
        points: 10,
        gold_reward: 25,
        experience_reward: 50,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::FriendsGained, 5),
        icon: "🍻",
    },
    AchievementDef {
        id: "beloved",
        name: "Beloved",
        description: "Gain 25 friends",
        secret_hint: None,
        category: Category::Social,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::FriendsGained, 25),
        icon: "❤️",
    },
    // ═══════════════════════════════════════════════════════════════
    // PROGRESSION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "adventurer",
        name: "Adventurer",
        description: "Reach level 5",
        secret_hint: None,
        category: Category::Progression,
        tier: Tier::Bronze,
        secret: false,
        points: 10,
        gold_reward: 25,
        experience_reward: 50,
        unlock_message: None,
        condition: UnlockCondition::Level(5),
        icon: "📈",
    },
    AchievementDef {
        id: "seasoned_veteran",
        name: "Seasoned Veteran",
        description: "Reach level 10",
        secret_hint: None,
        category: Category::Progression,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Level(10),
        icon: "📈",
    },
    AchievementDef {
        id: "champion_of_the_realm",
        name: "Champion of the Realm",
        description: "Reach level 20",
        secret_hint: None,
        category: Category::Progression,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: None,
        condition: UnlockCondition::Level(20),
        icon: "🏅",
    },
    AchievementDef {
        id: "living_legend",
        name: "Living Legend",
        description: "Reach level 50",
        secret_hint: None,
        category: Category::Progression,
        tier: Tier::Platinum,
        secret: false,
        points: 100,
        gold_reward: 2_000,
        experience_reward: 5_000,
        unlock_message: Some("Bards argue over which verses are true."),
        condition: UnlockCondition::Level(50),
        icon: "🌟",
    },
    AchievementDef {
        id: "quick_study",
        name: "Quick Study",
        description: "Earn 10,000 experience",
        secret_hint: None,
        category: Category::Progression,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::ExperienceEarned, 10_000),
        icon: "📚",
    },
    AchievementDef {
        id: "scholar_of_war",
        name: "Scholar of War",
        description: "Earn 100,000 experience",
        secret_hint: None,
        category: Category::Progression,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::ExperienceEarned, 100_000),
        icon: "🎓",
    },
    AchievementDef {
        id: "creature_of_habit",
        name: "Creature of Habit",
        description: "Play 7 days in a row",
        secret_hint: None,
        category: Category::Progression,
        tier: Tier::Silver,
        secret: false,
        points: 25,
        gold_reward: 100,
        experience_reward: 250,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::ConsecutivePlayDays, 7),
        icon: "📅",
    },
    AchievementDef {
        id: "iron_routine",
        name: "Iron Routine",
        description: "Play 30 days in a row",
        secret_hint: None,
        category: Category::Progression,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: None,
        condition: UnlockCondition::Stat(StatKind::ConsecutivePlayDays, 30),
        icon: "🗓️",
    },
    // ═══════════════════════════════════════════════════════════════
    // CHALLENGE
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "flawless_victory",
        name: "Flawless Victory",
        description: "Win a fight without taking damage",
        secret_hint: None,
        category: Category::Challenge,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: Some("Untouched. Untouchable."),
        condition: UnlockCondition::Event,
        icon: "✨",
    },
    AchievementDef {
        id: "survivor",
        name: "Survivor",
        description: "Win a fight with less than 10% health remaining",
        secret_hint: None,
        category: Category::Challenge,
        tier: Tier::Gold,
        secret: false,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: Some("Too stubborn to die."),
        condition: UnlockCondition::Event,
        icon: "🩸",
    },
    AchievementDef {
        id: "nightmare_pilgrim",
        name: "Nightmare Pilgrim",
        description: "Take up the quest on Nightmare difficulty",
        secret_hint: None,
        category: Category::Challenge,
        tier: Tier::Platinum,
        secret: false,
        points: 100,
        gold_reward: 2_000,
        experience_reward: 5_000,
        unlock_message: None,
        condition: UnlockCondition::Flag(PlayerFlag::NightmareDifficulty),
        icon: "🔥",
    },
    AchievementDef {
        id: "completionist",
        name: "Completionist",
        description: "Earn every other achievement in the realm",
        secret_hint: None,
        category: Category::Challenge,
        tier: Tier::Diamond,
        secret: false,
        points: 250,
        gold_reward: 10_000,
        experience_reward: 25_000,
        unlock_message: Some("There is nothing left to prove."),
        condition: UnlockCondition::Completionist,
        icon: "🏆",
    },
    // ═══════════════════════════════════════════════════════════════
    // SECRET
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "graveborn",
        name: "Graveborn",
        description: "Die 99 times",
        secret_hint: Some("Even death keeps a ledger."),
        category: Category::Secret,
        tier: Tier::Gold,
        secret: true,
        points: 50,
        gold_reward: 500,
        experience_reward: 1_000,
        unlock_message: Some("You know the way back by heart."),
        condition: UnlockCondition::Stat(StatKind::Deaths, 99),
        icon: "⚰️",
    },
];

/// Read-only achievement registry.
///
/// Built once at startup (usually via [`Catalog::standard`]) and injected
/// into the evaluator and any UI that needs definitions. `register` exists
/// for initialization only; nothing mutates the catalog after that.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<AchievementDef>,
    index: HashMap<&'static str, usize>,
    installed: bool,
}

impl Catalog {
    /// An empty catalog. Callers either `install_defaults` or `register`
    /// their own definitions before use.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            installed: false,
        }
    }

    /// The full built-in catalog, sealed against repeat installs.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.install_defaults();
        catalog
    }

    /// Install the built-in definitions. Guarded: calling this more than
    /// once is a silent no-op, so defensive init from several subsystems
    /// cannot duplicate or reset entries.
    pub fn install_defaults(&mut self) {
        if self.installed {
            return;
        }
        for def in CATALOG {
            self.register(def.clone());
        }
        self.installed = true;
    }

    /// Insert or replace a definition under its id. Initialization-time
    /// only; replacing keeps the original catalog position.
    pub fn register(&mut self, def: AchievementDef) {
        match self.index.get(def.id) {
            Some(&i) => self.entries[i] = def,
            None => {
                self.index.insert(def.id, self.entries.len());
                self.entries.push(def);
            }
        }
    }

    /// Look up a definition. Unknown ids are simply `None`, never an error.
    pub fn get(&self, id: &str) -> Option<&AchievementDef> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// All definitions in catalog order.
    pub fn all(&self) -> &[AchievementDef] {
        &self.entries
    }

    /// Definitions in one category, in catalog order.
    pub fn by_category(&self, category: Category) -> Vec<&AchievementDef> {
        self.entries
            .iter()
            .filter(|def| def.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_entries_have_unique_ids() {
        use std::collections::HashSet;
        let mut ids = HashSet::new();
        for def in CATALOG {
            assert!(ids.insert(def.id), "Duplicate achievement id: {}", def.id);
        }
    }

    #[test]
    fn test_catalog_has_45_entries() {
        assert_eq!(CATALOG.len(), 45);
        assert_eq!(Catalog::standard().len(), 45);
    }

    #[test]
    fn test_every_category_is_populated() {
        let catalog = Catalog::standard();
        for category in Category::ALL {
            assert!(
                !catalog.by_category(category).is_empty(),
                "No entries in category {}",
                category.name()
            );
        }
    }

    #[test]
    fn test_get_known_and_unknown() {
        let catalog = Catalog::standard();

        let def = catalog.get("first_blood").unwrap();
        assert_eq!(def.name, "First Blood");
        assert_eq!(def.category, Category::Combat);

        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn test_install_defaults_is_idempotent() {
        let mut catalog = Catalog::new();
        catalog.install_defaults();
        catalog.install_defaults();
        catalog.install_defaults();
        assert_eq!(catalog.len(), CATALOG.len());
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut catalog = Catalog::standard();
        let position = catalog
            .all()
            .iter()
            .position(|d| d.id == "first_blood")
            .unwrap();

        let mut patched = catalog.get("first_blood").unwrap().clone();
        patched.points = 999;
        catalog.register(patched);

        assert_eq!(catalog.len(), CATALOG.len());
        assert_eq!(catalog.get("first_blood").unwrap().points, 999);
        assert_eq!(catalog.all()[position].id, "first_blood");
    }

    #[test]
    fn test_secret_entries_carry_hints() {
        for def in CATALOG {
            if def.secret {
                assert!(
                    def.secret_hint.is_some(),
                    "Secret entry {} is missing a hint",
                    def.id
                );
            }
        }
    }

    #[test]
    fn test_exactly_one_meta_entry() {
        let metas: Vec<_> = CATALOG.iter().filter(|d| d.is_meta()).collect();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].id, "completionist");
    }

    #[test]
    fn test_rewards_are_tier_consistent() {
        for def in CATALOG {
            let expected = match def.tier {
                Tier::Bronze => (10, 25, 50),
                Tier::Silver => (25, 100, 250),
                Tier::Gold => (50, 500, 1_000),
                Tier::Platinum => (100, 2_000, 5_000),
                Tier::Diamond => (250, 10_000, 25_000),
            };
            assert_eq!(
                (def.points, def.gold_reward, def.experience_reward),
                expected,
                "Off-scale rewards on {}",
                def.id
            );
        }
    }
}

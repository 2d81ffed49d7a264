//! The evaluation pass: scan player state against the catalog and grant
//! whatever is due.

use crate::achievements::catalog::Catalog;
use crate::achievements::hooks::{NullTelemetry, PlatformBridge, TelemetrySink};
use crate::achievements::notifier::{drain_and_present, NotificationBatch, PendingUnlocks, PresentationSurface};
use crate::achievements::types::{AchievementDef, PlayerAchievementRecord, PlayerFlag, UnlockCondition};
use crate::character::player::{Difficulty, Player};

/// Owns the injected catalog, the unlock side-effect ports, and the
/// pending-notification queue for one game session.
pub struct Evaluator {
    catalog: Catalog,
    pending: PendingUnlocks,
    telemetry: Box<dyn TelemetrySink>,
    platform: Option<Box<dyn PlatformBridge>>,
}

impl Evaluator {
    /// An evaluator with no external hooks wired up.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_hooks(catalog, Box::new(NullTelemetry), None)
    }

    pub fn with_hooks(
        catalog: Catalog,
        telemetry: Box<dyn TelemetrySink>,
        platform: Option<Box<dyn PlatformBridge>>,
    ) -> Self {
        Self {
            catalog,
            pending: PendingUnlocks::new(),
            telemetry,
            platform,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pending(&self) -> &PendingUnlocks {
        &self.pending
    }

    /// The single authoritative unlock path.
    ///
    /// Unknown ids and repeat unlocks return false without touching
    /// anything. A first-time unlock applies the rewards exactly once,
    /// queues the notification, and notifies the external hooks; hook
    /// failures are theirs to swallow and never undo the unlock.
    pub fn try_unlock(&mut self, player: &mut Player, id: &str) -> bool {
        let Some(def) = self.catalog.get(id) else {
            return false;
        };
        let def = def.clone();

        if !player.achievements.unlock(def.id) {
            return false;
        }

        if def.gold_reward > 0 {
            player.gain_gold(def.gold_reward);
        }
        if def.experience_reward > 0 {
            player.gain_experience(def.experience_reward);
        }

        self.pending.push(def.clone());

        self.telemetry
            .record_achievement(def.id, def.name, player.level, def.category);
        if let Some(bridge) = self.platform.as_mut() {
            bridge.unlock(def.id);
        }

        true
    }

    /// One evaluation pass over the whole catalog.
    ///
    /// Every threshold is re-checked on every call: one event can cross
    /// several thresholds in different categories, and earlier events may
    /// have satisfied conditions nobody scanned for yet. Re-checking an
    /// already-earned entry is free because `try_unlock` is idempotent.
    pub fn check_achievements(&mut self, player: &mut Player) {
        let due: Vec<&'static str> = self
            .catalog
            .all()
            .iter()
            .filter(|def| !player.achievements.is_unlocked(def.id))
            .filter(|def| condition_met(def, player))
            .map(|def| def.id)
            .collect();
        for id in due {
            self.try_unlock(player, id);
        }

        // Meta entries go last so unlocks granted above count this pass.
        let meta_due: Vec<&'static str> = self
            .catalog
            .all()
            .iter()
            .filter(|def| def.is_meta() && !player.achievements.is_unlocked(def.id))
            .map(|def| def.id)
            .collect();
        for id in meta_due {
            if self.completion_reached(&player.achievements) {
                self.try_unlock(player, id);
            }
        }
    }

    /// Per-combat predicates that cannot be reconstructed from stored
    /// statistics; called once when a combat resolves in the player's
    /// favor.
    pub fn check_combat_outcome(
        &mut self,
        player: &mut Player,
        took_damage: bool,
        hp_fraction_remaining: f64,
    ) {
        if !took_damage {
            self.try_unlock(player, "flawless_victory");
        }
        if hp_fraction_remaining < 0.1 {
            self.try_unlock(player, "survivor");
        }
    }

    /// Whether every non-secret, non-meta entry is unlocked.
    pub fn completion_reached(&self, record: &PlayerAchievementRecord) -> bool {
        self.catalog
            .all()
            .iter()
            .filter(|def| def.counts_toward_completion())
            .all(|def| record.is_unlocked(def.id))
    }

    /// Hand everything queued since the last drain to the surface.
    pub fn drain_and_present(&mut self, surface: &mut dyn PresentationSurface) {
        drain_and_present(&mut self.pending, surface);
    }

    /// Drain the queue without presenting; callers that render elsewhere
    /// take the batch directly.
    pub fn drain_pending(&mut self) -> Option<NotificationBatch> {
        self.pending.drain()
    }
}

fn condition_met(def: &AchievementDef, player: &Player) -> bool {
    match def.condition {
        UnlockCondition::Stat(kind, threshold) => player.statistics.value(kind) >= threshold,
        UnlockCondition::Level(required) => player.level >= required,
        UnlockCondition::Flag(flag) => flag_set(player, flag),
        // Meta entries are handled after the scan; event entries never by it.
        UnlockCondition::Completionist | UnlockCondition::Event => false,
    }
}

fn flag_set(player: &Player, flag: PlayerFlag) -> bool {
    match flag {
        PlayerFlag::Married => player.married,
        PlayerFlag::OnTeam => player.team.is_some(),
        PlayerFlag::King => player.king,
        PlayerFlag::NightmareDifficulty => player.difficulty == Difficulty::Nightmare,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> Evaluator {
        Evaluator::new(Catalog::standard())
    }

    #[test]
    fn test_stat_threshold_grants_on_scan() {
        let mut eval = evaluator();
        let mut player = Player::new("Hero");

        player.statistics.record_monster_kill(false, false);
        eval.check_achievements(&mut player);

        assert!(player.achievements.is_unlocked("first_blood"));
        assert!(!player.achievements.is_unlocked("monster_slayer_10"));
    }

    #[test]
    fn test_flag_conditions() {
        let mut eval = evaluator();
        let mut player = Player::new("Hero");

        player.married = true;
        player.team = Some("Night Watch".to_string());
        eval.check_achievements(&mut player);

        assert!(player.achievements.is_unlocked("newlywed"));
        assert!(player.achievements.is_unlocked("band_of_blades"));
        assert!(!player.achievements.is_unlocked("the_crown"));

        player.king = true;
        player.difficulty = Difficulty::Nightmare;
        eval.check_achievements(&mut player);

        assert!(player.achievements.is_unlocked("the_crown"));
        assert!(player.achievements.is_unlocked("nightmare_pilgrim"));
    }

    #[test]
    fn test_level_condition() {
        let mut eval = evaluator();
        let mut player = Player::new("Hero");

        player.level = 12;
        eval.check_achievements(&mut player);

        assert!(player.achievements.is_unlocked("adventurer"));
        assert!(player.achievements.is_unlocked("seasoned_veteran"));
        assert!(!player.achievements.is_unlocked("champion_of_the_realm"));
    }

    #[test]
    fn test_event_entries_never_granted_by_scan() {
        let mut eval = evaluator();
        let mut player = Player::new("Hero");

        // Nothing in the statistics can trigger an event-local entry
        player.statistics.record_monster_kill(false, false);
        eval.check_achievements(&mut player);

        assert!(!player.achievements.is_unlocked("flawless_victory"));
        assert!(!player.achievements.is_unlocked("survivor"));
    }

    #[test]
    fn test_completionist_waits_for_everything_else() {
        let mut eval = evaluator();
        let mut player = Player::new("Hero");

        // Unlock all but one of the entries that count
        let counted: Vec<&'static str> = eval
            .catalog()
            .all()
            .iter()
            .filter(|def| def.counts_toward_completion())
            .map(|def| def.id)
            .collect();
        for id in &counted[..counted.len() - 1] {
            eval.try_unlock(&mut player, id);
        }

        eval.check_achievements(&mut player);
        assert!(!player.achievements.is_unlocked("completionist"));
    }

    #[test]
    fn test_scan_is_idempotent_across_calls() {
        let mut eval = evaluator();
        let mut player = Player::new("Hero");

        player.statistics.record_monster_kill(false, false);
        eval.check_achievements(&mut player);
        let gold_after_first = player.gold;

        eval.check_achievements(&mut player);
        eval.check_achievements(&mut player);

        assert_eq!(player.gold, gold_after_first);
        assert_eq!(player.achievements.unlocked_count(), 1);
    }
}

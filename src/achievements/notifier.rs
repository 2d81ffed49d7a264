//! Pending-unlock queue and notification batching.
//!
//! Unlocks granted during an evaluation pass collect here, and a display
//! pass drains them all at once: one detailed notice for a single unlock,
//! one consolidated notice for several. The queue is session-scoped and
//! never persisted.

use std::collections::VecDeque;

use ratatui::text::Line;

use crate::achievements::types::AchievementDef;
use crate::constants::{BATCH_NOTICE_MS, MAX_BATCH_LISTED, SINGLE_NOTICE_MS};
use crate::ui::notification::render_batch;

/// FIFO of definitions unlocked since the last drain.
#[derive(Debug, Clone, Default)]
pub struct PendingUnlocks {
    queue: VecDeque<AchievementDef>,
}

impl PendingUnlocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, def: AchievementDef) {
        self.queue.push_back(def);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Consume everything queued and fold it into one batch.
    /// An empty queue yields `None`: nothing to display, nothing to do.
    pub fn drain(&mut self) -> Option<NotificationBatch> {
        if self.queue.is_empty() {
            return None;
        }
        let entries: Vec<AchievementDef> = self.queue.drain(..).collect();
        Some(NotificationBatch::from_entries(entries))
    }
}

/// One display pass worth of unlocks, ready for presentation.
///
/// Entries are ordered by descending tier; ties keep their unlock order.
/// The reward totals are display aggregates only — the actual grants
/// happened at unlock time.
#[derive(Debug, Clone)]
pub struct NotificationBatch {
    entries: Vec<AchievementDef>,
    total_gold: u64,
    total_experience: u64,
}

impl NotificationBatch {
    fn from_entries(mut entries: Vec<AchievementDef>) -> Self {
        let total_gold = entries.iter().map(|d| d.gold_reward).sum();
        let total_experience = entries.iter().map(|d| d.experience_reward).sum();
        // Stable sort: same-tier entries stay in unlock order.
        entries.sort_by(|a, b| b.tier.cmp(&a.tier));
        Self {
            entries,
            total_gold,
            total_experience,
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_single(&self) -> bool {
        self.entries.len() == 1
    }

    /// Every unlock in the batch, highest tier first.
    pub fn entries(&self) -> &[AchievementDef] {
        &self.entries
    }

    /// The entries that fit on the consolidated notice.
    pub fn listed(&self) -> &[AchievementDef] {
        &self.entries[..self.entries.len().min(MAX_BATCH_LISTED)]
    }

    /// How many entries fell off the end of the listing.
    pub fn overflow(&self) -> usize {
        self.entries.len().saturating_sub(MAX_BATCH_LISTED)
    }

    pub fn total_gold(&self) -> u64 {
        self.total_gold
    }

    pub fn total_experience(&self) -> u64 {
        self.total_experience
    }

    /// How long the surface should keep the notice up.
    pub fn pace_ms(&self) -> u64 {
        if self.is_single() {
            SINGLE_NOTICE_MS
        } else {
            BATCH_NOTICE_MS
        }
    }
}

/// Where rendered notices go. The surface owns the pacing wait; this
/// module only says how long the notice deserves.
pub trait PresentationSurface {
    fn present(&mut self, lines: Vec<Line<'static>>, pace_ms: u64);
}

/// Drain the queue and, if anything was pending, render and present it.
pub fn drain_and_present(pending: &mut PendingUnlocks, surface: &mut dyn PresentationSurface) {
    if let Some(batch) = pending.drain() {
        let pace = batch.pace_ms();
        surface.present(render_batch(&batch), pace);
    }
}

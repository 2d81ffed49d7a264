//! Achievement system module.
//!
//! The catalog of accomplishments, the per-player unlock record, the
//! evaluation pass that grants unlocks from player statistics, and the
//! pending-notification queue. The catalog is built once and injected
//! wherever it is read; nothing in here owns global state.

pub mod catalog;
pub mod evaluator;
pub mod hooks;
pub mod notifier;
pub mod types;

pub use catalog::{Catalog, CATALOG};
pub use evaluator::Evaluator;
pub use hooks::{HttpTelemetry, NullTelemetry, PlatformBridge, TelemetrySink};
pub use notifier::{drain_and_present, NotificationBatch, PendingUnlocks, PresentationSurface};
pub use types::{
    AchievementDef, Category, PlayerAchievementRecord, PlayerFlag, StatKind, Tier,
    UnlockCondition, UnlockedAchievement,
};

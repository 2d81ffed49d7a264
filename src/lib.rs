//! Throne - Achievement Core for a Terminal Kingdom RPG
//!
//! This crate holds the accomplishment catalog, the per-player unlock
//! record, the evaluation pass that grants new unlocks after gameplay
//! events, and the notification batching that coalesces simultaneous
//! unlocks into a single display. Save/load, statistics collection,
//! telemetry, platform achievements, and rendering live behind narrow
//! interfaces so the game loop can supply its own.

pub mod achievements;
pub mod build_info;
pub mod character;
pub mod constants;
pub mod save_manager;
pub mod ui;

pub use achievements::{
    drain_and_present, AchievementDef, Catalog, Category, Evaluator, NotificationBatch,
    PendingUnlocks, PlayerAchievementRecord, PresentationSurface, Tier,
};
pub use character::{Difficulty, Player, Statistics};
pub use save_manager::SaveManager;

// Notification pacing. The presentation surface owns the actual wait;
// these are the durations it is asked to honor.
pub const SINGLE_NOTICE_MS: u64 = 2500;
pub const BATCH_NOTICE_MS: u64 = 4500;

// Consolidated notifications list at most this many entries; the rest
// collapse into a "+N more" line.
pub const MAX_BATCH_LISTED: usize = 8;

// Save system constants
pub const SAVE_VERSION_MAGIC: u64 = 0x5448524F4E450000; // "THRONE\0\0" in hex

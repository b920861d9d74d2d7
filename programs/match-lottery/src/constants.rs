/// Seed prefix of every `LotteryPool` PDA, followed by the little-endian match id.
pub const SEED_LOTTERY_POOL: &[u8] = b"lottery_pool";

/// Seed prefix of every `BetAccount` PDA, followed by the bettor and pool keys.
pub const SEED_BET: &[u8] = b"bet";

pub const DISCRIMINATOR_SIZE: usize = 8;

/// Longest allowed distance, in seconds, between pool creation and its close time.
pub const MAX_BETTING_WINDOW: i64 = 30 * 24 * 60 * 60; // 30 days

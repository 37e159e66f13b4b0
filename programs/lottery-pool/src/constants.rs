use anchor_lang::prelude::*;

/// Seed prefix of the pool PDA, followed by the manager key.
#[constant]
pub const POOL_SEED: &[u8] = b"lottery_pool";

/// Smallest stake accepted by `enter`: 0.01 SOL.
#[constant]
pub const MIN_STAKE: u64 = 10_000_000;

/// Entry slots per round. Must match the `max_len` on `LotteryPool::players`.
/// `get_players` returns the whole list as return data, which is capped at
/// 1024 bytes, so this stays at 30 keys.
pub const MAX_PLAYERS: usize = 30;

/// A pending commitment older than this many slots may be replaced.
#[constant]
pub const COMMIT_EXPIRY_SLOTS: u64 = 300;

/// Owner of every randomness account the program accepts.
#[cfg(feature = "devnet")]
pub const SWITCHBOARD_PROGRAM_ID: Pubkey = switchboard_on_demand::ON_DEMAND_DEVNET_PID;
#[cfg(not(feature = "devnet"))]
pub const SWITCHBOARD_PROGRAM_ID: Pubkey = switchboard_on_demand::ON_DEMAND_MAINNET_PID;

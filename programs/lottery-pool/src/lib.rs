use anchor_lang::prelude::*;
pub use instructions::*;

/// Program-wide constants: PDA seed, minimum stake and pool capacity.
pub mod constants;

/// Errors returned via the Anchor framework when instructions fail.
pub mod error;

/// Events emitted by the instructions, one per successful state change.
pub mod events;

/// Instruction handlers: creating the pool, entering, committing randomness,
/// picking the winner and the read-only views.
pub mod instructions;

/// The seams a draw goes through: where entropy comes from and how the
/// payout is sent.
pub mod payout;

/// Reading and validating Switchboard randomness accounts.
pub mod randomness;

/// Lock-guarded pool for hosts outside the Solana runtime.
#[cfg(not(target_os = "solana"))]
pub mod shared;

/// The `LotteryPool` account and the state machine around it.
pub mod state;

#[cfg(test)]
mod test_utils;

declare_id!("4PxsNq2dWfEEivxG6pdsdF28gziY6WvFWoFh1juBpVHA");

#[program]
pub mod lottery_pool {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
        process_initialize_pool(ctx)
    }

    pub fn enter(ctx: Context<Enter>, stake: u64) -> Result<()> {
        process_enter(ctx, stake)
    }

    pub fn commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
        process_commit_randomness(ctx)
    }

    pub fn pick_winner(ctx: Context<PickWinner>) -> Result<()> {
        process_pick_winner(ctx)
    }

    pub fn get_players(ctx: Context<ViewPool>) -> Result<Vec<Pubkey>> {
        process_get_players(ctx)
    }

    pub fn get_manager(ctx: Context<ViewPool>) -> Result<Pubkey> {
        process_get_manager(ctx)
    }
}

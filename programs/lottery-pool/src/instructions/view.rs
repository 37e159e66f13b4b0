use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::state::LotteryPool;

/// Read-only access to a pool. Anyone can call the view instructions.
#[derive(Accounts)]
pub struct ViewPool<'info> {
    #[account(
        seeds = [POOL_SEED, pool.manager.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, LotteryPool>,
}

/// Players of the current round, in entry order.
pub fn process_get_players(ctx: Context<ViewPool>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.pool.players().to_vec())
}

pub fn process_get_manager(ctx: Context<ViewPool>) -> Result<Pubkey> {
    Ok(ctx.accounts.pool.manager())
}

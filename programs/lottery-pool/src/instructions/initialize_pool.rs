use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::events::PoolInitialized;
use crate::state::LotteryPool;

/// Accounts required to create a lottery pool.
/// The signer becomes the pool's manager for its whole lifetime.
#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// The account paying for account creation, and the future manager.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The pool state account, one per manager.
    #[account(
        init,
        payer = payer,
        space = 8 + LotteryPool::INIT_SPACE,
        seeds = [POOL_SEED, payer.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, LotteryPool>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Initializes an empty pool managed by the payer.
///
/// # Arguments
/// * `ctx` - Context holding the InitializePool accounts
pub fn process_initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
    let manager = ctx.accounts.payer.key();
    ctx.accounts
        .pool
        .set_inner(LotteryPool::new(manager, ctx.bumps.pool));

    msg!("Lottery pool created, manager: {}", manager);

    emit!(PoolInitialized {
        pool: ctx.accounts.pool.key(),
        manager,
    });

    Ok(())
}

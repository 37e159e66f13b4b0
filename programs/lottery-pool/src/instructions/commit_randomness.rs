use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::events::RandomnessCommitted;
use crate::randomness::{ensure_fresh_seed, ensure_stale_commitment, read_randomness};
use crate::state::LotteryPool;

/// Accounts required to commit a randomness account for the current round.
///
/// Ensures:
/// 1. Only the manager can commit.
/// 2. The pool has players.
/// 3. The randomness account is owned by Switchboard and was seeded in the
///    previous slot, so its value is not yet known to anyone.
/// 4. A pending commitment is only replaced once it has expired and its value
///    has not been revealed on-chain.
#[derive(Accounts)]
pub struct CommitRandomness<'info> {
    /// The manager.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The pool whose draw is being committed.
    #[account(
        mut,
        seeds = [POOL_SEED, pool.manager.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, LotteryPool>,

    /// Randomness account from Switchboard.
    /// CHECK: Owner and data are validated within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// The commitment being replaced. Required while a draw is pending.
    /// CHECK: Must be the committed account; validated within the handler.
    pub previous_randomness_data: Option<UncheckedAccount<'info>>,
}

pub fn process_commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let manager = ctx.accounts.payer.key();

    ctx.accounts.pool.ensure_drawable(&manager)?;
    ctx.accounts.pool.ensure_replaceable(clock.slot)?;

    let randomness_data = read_randomness(&ctx.accounts.randomness_account_data)?;
    ensure_fresh_seed(randomness_data.seed_slot, clock.slot)?;

    if ctx.accounts.pool.draw_pending() {
        ensure_stale_commitment(
            ctx.accounts.previous_randomness_data.as_deref(),
            &ctx.accounts.pool.randomness_account,
        )?;
    }

    let randomness_account = ctx.accounts.randomness_account_data.key();
    let pool = &mut ctx.accounts.pool;
    pool.commit_randomness(&manager, randomness_account, clock.slot)?;

    msg!("Randomness account: {}", randomness_account);

    emit!(RandomnessCommitted {
        randomness_account,
        slot: clock.slot,
        round: pool.round,
    });

    Ok(())
}

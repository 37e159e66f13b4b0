use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::POOL_SEED;
use crate::events::PlayerEntered;
use crate::state::LotteryPool;

/// Accounts required to enter the pool.
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The player, paying the stake.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The pool being entered. Receives the stake.
    #[account(
        mut,
        seeds = [POOL_SEED, pool.manager.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, LotteryPool>,

    /// System program for the stake transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Record the entry (rejects the manager, short stakes, a pending draw
///    and a full pool).
/// 2. Transfer the stake from payer to the pool account.
///
/// If the transfer fails the transaction aborts and the entry is discarded.
///
/// # Arguments
/// * `ctx` - Context containing Enter accounts
/// * `stake` - Lamports to stake, at least `MIN_STAKE`
pub fn process_enter(ctx: Context<Enter>, stake: u64) -> Result<()> {
    let player = ctx.accounts.payer.key();

    ctx.accounts.pool.enter(player, stake)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.pool.to_account_info(),
            },
        ),
        stake,
    )?;

    let pool = &ctx.accounts.pool;

    msg!("Player {} entered with {} lamports", player, stake);
    msg!("Players: {}, balance: {}", pool.players.len(), pool.balance);

    emit!(PlayerEntered {
        player,
        stake,
        players: pool.players.len() as u32,
        balance: pool.balance,
        round: pool.round,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::error::LotteryError;
use crate::events::WinnerPicked;
use crate::payout::{entropy_from_bytes, EntropySource, ValueTransfer};
use crate::randomness::{read_randomness, revealed_value};
use crate::state::LotteryPool;

/// Accounts required to draw the winner and pay out the pool.
///
/// The client reads the revealed randomness off-chain to find out which
/// player won and passes that account as `winner`; the program recomputes
/// the draw and refuses to pay anyone else.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// The manager.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The pool being settled.
    #[account(
        mut,
        seeds = [POOL_SEED, pool.manager.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, LotteryPool>,

    /// CHECK: Must be the drawn player; checked by `LamportTransfer`.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: Owner, key and data are validated by `SwitchboardEntropy`.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Reads the revealed value of the committed Switchboard randomness account.
pub struct SwitchboardEntropy<'a, 'info> {
    pub account: &'a AccountInfo<'info>,
    pub committed: Pubkey,
    pub clock: &'a Clock,
}

impl EntropySource for SwitchboardEntropy<'_, '_> {
    fn next_entropy(&mut self) -> Result<u64> {
        require_keys_neq!(
            self.committed,
            Pubkey::default(),
            LotteryError::RandomnessNotCommitted
        );
        require_keys_eq!(
            self.account.key(),
            self.committed,
            LotteryError::IncorrectRandomnessAccount
        );

        let randomness_data = read_randomness(self.account)?;
        let revealed_random_value = revealed_value(&randomness_data, self.clock)?;

        msg!("Randomness result: {}", revealed_random_value[0]);

        Ok(entropy_from_bytes(&revealed_random_value))
    }
}

/// Moves lamports from the pool account to the winner, never touching the
/// pool's rent reserve.
pub struct LamportTransfer<'a, 'info> {
    pub pool: &'a AccountInfo<'info>,
    pub winner: &'a AccountInfo<'info>,
    pub reserve: u64,
}

impl ValueTransfer for LamportTransfer<'_, '_> {
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*to, self.winner.key(), LotteryError::TransferFailed);

        let available = self
            .pool
            .lamports()
            .checked_sub(self.reserve)
            .ok_or(LotteryError::TransferFailed)?;
        require!(amount <= available, LotteryError::TransferFailed);

        let credited = self
            .winner
            .lamports()
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;

        let mut pool_lamports = self.pool.try_borrow_mut_lamports()?;
        let mut winner_lamports = self.winner.try_borrow_mut_lamports()?;
        **pool_lamports -= amount;
        **winner_lamports = credited;

        Ok(())
    }
}

/// Draws the winner from the committed randomness, pays them the whole pool
/// balance and opens the next round.
///
/// Checks run in this order: caller is the manager, pool is not empty,
/// randomness is committed and revealed, supplied winner matches the draw.
pub fn process_pick_winner(ctx: Context<PickWinner>) -> Result<()> {
    let clock = Clock::get()?;
    let manager = ctx.accounts.payer.key();

    let pool_info = ctx.accounts.pool.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();
    let randomness_info = ctx.accounts.randomness_account_data.to_account_info();

    let mut entropy = SwitchboardEntropy {
        account: &randomness_info,
        committed: ctx.accounts.pool.randomness_account,
        clock: &clock,
    };
    let mut transfer = LamportTransfer {
        pool: &pool_info,
        winner: &winner_info,
        reserve: Rent::get()?.minimum_balance(pool_info.data_len()),
    };

    let pool = &mut ctx.accounts.pool;
    msg!("Players: {}", pool.players.len());

    let payout = pool.pick_winner(&manager, &mut entropy, &mut transfer)?;

    msg!("Winner: {} (slot {})", payout.winner, payout.index);
    msg!("Paid out: {} lamports", payout.amount);

    emit!(WinnerPicked {
        winner: payout.winner,
        index: payout.index as u32,
        amount: payout.amount,
        round: payout.round,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::constants::{COMMIT_EXPIRY_SLOTS, MAX_PLAYERS, MIN_STAKE};
use crate::error::LotteryError;
use crate::payout::{select_index, EntropySource, Payout, ValueTransfer};

#[account]
#[derive(InitSpace)]
pub struct LotteryPool {
    /// The account that created the pool. Only it can draw, and it can never enter.
    pub manager: Pubkey,

    /// One key per accepted entry, in entry order. A key that entered
    /// several times occupies several slots.
    #[max_len(30)]
    pub players: Vec<Pubkey>,

    /// Lamports staked since the last payout. The rent reserve of the pool
    /// account is not part of it.
    pub balance: u64,

    /// Number of payouts made so far.
    pub round: u64,

    /// Switchboard randomness account committed for the pending draw,
    /// `Pubkey::default()` when none is pending.
    pub randomness_account: Pubkey,

    /// Slot at which `randomness_account` was committed.
    pub committed_slot: u64,

    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,
}

impl LotteryPool {
    pub fn new(manager: Pubkey, bump: u8) -> Self {
        Self {
            manager,
            players: Vec::new(),
            balance: 0,
            round: 0,
            randomness_account: Pubkey::default(),
            committed_slot: 0,
            bump,
        }
    }

    pub fn manager(&self) -> Pubkey {
        self.manager
    }

    pub fn players(&self) -> &[Pubkey] {
        &self.players
    }

    pub fn draw_pending(&self) -> bool {
        self.randomness_account != Pubkey::default()
    }

    /// Records a stake of `stake` lamports for `caller`. All checks run
    /// before the pool is touched.
    pub fn enter(&mut self, caller: Pubkey, stake: u64) -> Result<()> {
        require_keys_neq!(caller, self.manager, LotteryError::ManagerCannotEnter);
        require!(stake >= MIN_STAKE, LotteryError::InsufficientStake);
        require!(!self.draw_pending(), LotteryError::DrawPending);
        require!(self.players.len() < MAX_PLAYERS, LotteryError::PoolFull);

        let balance = self
            .balance
            .checked_add(stake)
            .ok_or(LotteryError::MathOverflow)?;

        self.players.push(caller);
        self.balance = balance;

        Ok(())
    }

    /// Binds the draw of this round to `randomness_account`. Entries are
    /// closed until the draw settles. A commitment can be replaced only once
    /// it is older than `COMMIT_EXPIRY_SLOTS`.
    pub fn commit_randomness(
        &mut self,
        caller: &Pubkey,
        randomness_account: Pubkey,
        slot: u64,
    ) -> Result<()> {
        self.ensure_drawable(caller)?;
        self.ensure_replaceable(slot)?;

        self.randomness_account = randomness_account;
        self.committed_slot = slot;

        Ok(())
    }

    /// Fails with `DrawPending` while the current commitment is younger than
    /// `COMMIT_EXPIRY_SLOTS` at `slot`.
    pub fn ensure_replaceable(&self, slot: u64) -> Result<()> {
        if self.draw_pending() {
            let expiry = self
                .committed_slot
                .checked_add(COMMIT_EXPIRY_SLOTS)
                .ok_or(LotteryError::MathOverflow)?;
            require!(slot > expiry, LotteryError::DrawPending);
        }
        Ok(())
    }

    /// Access-control and emptiness checks shared by every draw step.
    pub fn ensure_drawable(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.manager, LotteryError::Forbidden);
        require!(!self.players.is_empty(), LotteryError::EmptyPool);
        Ok(())
    }

    /// Computes the payout for `entropy` without modifying the pool.
    pub fn draw(&self, entropy: u64) -> Result<Payout> {
        let index = select_index(entropy, self.players.len()).ok_or(LotteryError::EmptyPool)?;

        Ok(Payout {
            winner: self.players[index],
            index,
            amount: self.balance,
            round: self.round,
        })
    }

    /// Starts the next round. Only called once the payout has been sent.
    pub fn settle(&mut self) {
        self.players.clear();
        self.balance = 0;
        self.randomness_account = Pubkey::default();
        self.committed_slot = 0;
        self.round = self.round.saturating_add(1);
    }

    /// Draws a winner and pays them the whole balance. The pool is reset
    /// only after `transfer` succeeds; on any error it is left as it was.
    pub fn pick_winner<E, T>(
        &mut self,
        caller: &Pubkey,
        entropy: &mut E,
        transfer: &mut T,
    ) -> Result<Payout>
    where
        E: EntropySource,
        T: ValueTransfer,
    {
        self.ensure_drawable(caller)?;

        let payout = self.draw(entropy.next_entropy()?)?;

        transfer
            .transfer(&payout.winner, payout.amount)
            .map_err(|e| {
                msg!("Payout to {} failed: {}", payout.winner, e);
                LotteryError::TransferFailed
            })?;

        self.settle();

        Ok(payout)
    }
}

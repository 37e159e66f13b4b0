//! Off-chain host for a [`LotteryPool`].
//!
//! On-chain the runtime write-locks the pool account for each transaction.
//! Off-chain that discipline is made explicit: mutators hold the write lock
//! for their whole run, readers take the read lock and get an owned copy.

use anchor_lang::prelude::*;
use parking_lot::RwLock;

use crate::payout::{EntropySource, Payout, ValueTransfer};
use crate::state::LotteryPool;

pub struct SharedPool {
    pool: RwLock<LotteryPool>,
}

impl SharedPool {
    pub fn new(manager: Pubkey) -> Self {
        Self::from_pool(LotteryPool::new(manager, 0))
    }

    pub fn from_pool(pool: LotteryPool) -> Self {
        Self {
            pool: RwLock::new(pool),
        }
    }

    pub fn enter(&self, caller: Pubkey, stake: u64) -> Result<()> {
        self.pool.write().enter(caller, stake)
    }

    /// Selection, transfer and reset all run under one write guard, so no
    /// entry can land between the draw and the payout.
    pub fn pick_winner<E, T>(
        &self,
        caller: &Pubkey,
        entropy: &mut E,
        transfer: &mut T,
    ) -> Result<Payout>
    where
        E: EntropySource,
        T: ValueTransfer,
    {
        let mut pool = self.pool.write();
        pool.pick_winner(caller, entropy, transfer)
    }

    pub fn players(&self) -> Vec<Pubkey> {
        self.pool.read().players().to_vec()
    }

    pub fn manager(&self) -> Pubkey {
        self.pool.read().manager()
    }

    pub fn balance(&self) -> u64 {
        self.pool.read().balance
    }

    pub fn round(&self) -> u64 {
        self.pool.read().round
    }

    /// Players and balance read under a single guard.
    pub fn snapshot(&self) -> (Vec<Pubkey>, u64) {
        let pool = self.pool.read();
        (pool.players().to_vec(), pool.balance)
    }
}

use std::fmt::Debug;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;
use switchboard_on_demand::Discriminator;

use crate::error::LotteryError;
use crate::payout::{EntropySource, ValueTransfer};

/// Asserts that `result` failed with exactly `expected`.
pub fn assert_lottery_error<T: Debug>(result: Result<T>, expected: LotteryError) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

/// Returns the same value on every pull, or `RandomnessNotResolved` when built
/// with `unresolved`.
pub struct FixedEntropy {
    value: Option<u64>,
    pub pulls: usize,
}

impl FixedEntropy {
    pub fn new(value: u64) -> Self {
        Self {
            value: Some(value),
            pulls: 0,
        }
    }

    pub fn unresolved() -> Self {
        Self {
            value: None,
            pulls: 0,
        }
    }
}

impl EntropySource for FixedEntropy {
    fn next_entropy(&mut self) -> Result<u64> {
        self.pulls += 1;
        self.value
            .ok_or_else(|| LotteryError::RandomnessNotResolved.into())
    }
}

/// Records every transfer it is asked to make, or refuses all of them.
#[derive(Default)]
pub struct RecordingTransfer {
    pub sent: Vec<(Pubkey, u64)>,
    fail: bool,
}

impl RecordingTransfer {
    pub fn failing() -> Self {
        Self {
            sent: Vec::new(),
            fail: true,
        }
    }
}

impl ValueTransfer for RecordingTransfer {
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        if self.fail {
            return Err(ProgramError::InsufficientFunds.into());
        }
        self.sent.push((*to, amount));
        Ok(())
    }
}

/// Raw data of a Switchboard randomness account. Only the fields the
/// program reads are filled in.
pub fn randomness_bytes(seed_slot: u64, reveal_slot: u64, value: [u8; 32]) -> Vec<u8> {
    let mut data = vec![0u8; RandomnessAccountData::size()];
    data[..8].copy_from_slice(&<RandomnessAccountData as Discriminator>::DISCRIMINATOR);
    // authority, queue and seed_slothash come first, 32 bytes each
    data[104..112].copy_from_slice(&seed_slot.to_le_bytes());
    // then the oracle key
    data[144..152].copy_from_slice(&reveal_slot.to_le_bytes());
    data[152..184].copy_from_slice(&value);
    data
}

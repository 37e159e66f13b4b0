use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::SWITCHBOARD_PROGRAM_ID;
use crate::error::LotteryError;

/// Copies the data out of a Switchboard randomness account.
///
/// The account must be owned by the Switchboard On-Demand program. The
/// discriminator check done by `RandomnessAccountData::parse` alone would
/// accept an account written by any program.
pub fn read_randomness(account: &AccountInfo) -> Result<RandomnessAccountData> {
    require_keys_eq!(
        *account.owner,
        SWITCHBOARD_PROGRAM_ID,
        LotteryError::InvalidRandomnessData
    );
    require!(
        account.data_len() >= RandomnessAccountData::size(),
        LotteryError::InvalidRandomnessData
    );

    let randomness_data = RandomnessAccountData::parse(account.data.borrow())
        .map_err(|_| LotteryError::InvalidRandomnessData)?;

    Ok(*randomness_data)
}

/// A commitment is only accepted for an account seeded in the slot right
/// before `slot`, so nobody can know its value yet.
pub fn ensure_fresh_seed(seed_slot: u64, slot: u64) -> Result<()> {
    if slot.checked_sub(1) != Some(seed_slot) {
        msg!("Seed slot: {}", seed_slot);
        msg!("Current slot: {}", slot);
        return err!(LotteryError::RandomnessAlreadyRevealed);
    }
    Ok(())
}

/// A stale commitment may only be replaced while its value is still
/// unrevealed on-chain.
pub fn ensure_unrevealed(randomness: &RandomnessAccountData) -> Result<()> {
    require!(
        randomness.reveal_slot == 0,
        LotteryError::RandomnessAlreadyRevealed
    );
    Ok(())
}

/// A pending commitment may only be replaced by showing the committed
/// account, still without a value on-chain.
pub fn ensure_stale_commitment(previous: Option<&AccountInfo>, committed: &Pubkey) -> Result<()> {
    let previous = previous.ok_or(LotteryError::DrawPending)?;
    require_keys_eq!(
        previous.key(),
        *committed,
        LotteryError::IncorrectRandomnessAccount
    );
    ensure_unrevealed(&read_randomness(previous)?)
}

/// The revealed value. Switchboard only serves it in the reveal slot.
pub fn revealed_value(randomness: &RandomnessAccountData, clock: &Clock) -> Result<[u8; 32]> {
    randomness
        .get_value(clock)
        .map_err(|_| LotteryError::RandomnessNotResolved.into())
}

use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub manager: Pubkey,
}

#[event]
pub struct PlayerEntered {
    pub player: Pubkey,
    pub stake: u64,
    pub players: u32,
    pub balance: u64,
    pub round: u64,
}

#[event]
pub struct RandomnessCommitted {
    pub randomness_account: Pubkey,
    pub slot: u64,
    pub round: u64,
}

#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub index: u32,
    pub amount: u64,
    pub round: u64,
}

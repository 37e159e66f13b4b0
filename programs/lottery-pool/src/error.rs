use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    // Access control
    /// The `Forbidden` kind as raised by `enter`. Kept as its own variant for
    /// the message; `is_forbidden` groups it with `Forbidden`.
    #[msg("The manager is not allowed to enter the pool")]
    ManagerCannotEnter,
    #[msg("Only the manager can execute this operation")]
    Forbidden,

    // Pool state
    #[msg("At least 0.01 SOL is required to enter the pool")]
    InsufficientStake,
    #[msg("The pool has no players")]
    EmptyPool,
    #[msg("The pool is full for this round")]
    PoolFull,
    #[msg("A draw is pending for this round")]
    DrawPending,
    #[msg("Arithmetic overflow")]
    MathOverflow,

    // Payout
    #[msg("Transfer of the pool balance failed")]
    TransferFailed,

    // Randomness
    #[msg("No randomness has been committed for this round")]
    RandomnessNotCommitted,
    #[msg("Randomness account does not match the committed one")]
    IncorrectRandomnessAccount,
    #[msg("Invalid randomness data")]
    InvalidRandomnessData,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness not yet resolved")]
    RandomnessNotResolved,
}

impl LotteryError {
    /// Both access-control failures: the manager entering, or anyone else
    /// running a manager-only operation.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::ManagerCannotEnter | Self::Forbidden)
    }
}

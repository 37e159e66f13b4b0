use anchor_lang::prelude::*;

/// Sends lamports from the pool to an account. Implementations either move
/// the full amount or return an error without moving anything.
pub trait ValueTransfer {
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Source of the value used to select a winner. It must not be something the
/// manager can read before submitting the draw.
pub trait EntropySource {
    fn next_entropy(&mut self) -> Result<u64>;
}

/// Outcome of a draw, computed before any state is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    /// Account receiving the pool balance.
    pub winner: Pubkey,
    /// Slot in `players` that was drawn.
    pub index: usize,
    /// Full pool balance at draw time.
    pub amount: u64,
    /// Round being settled.
    pub round: u64,
}

/// Reduces `entropy` to a slot in `0..slots`. Every entry counts as one slot,
/// so a player who entered twice is twice as likely to be drawn.
pub fn select_index(entropy: u64, slots: usize) -> Option<usize> {
    if slots == 0 {
        return None;
    }
    Some((entropy % slots as u64) as usize)
}

/// Interprets the first 8 bytes of a 32-byte random value as a little-endian `u64`.
pub fn entropy_from_bytes(value: &[u8; 32]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&value[..8]);
    u64::from_le_bytes(bytes)
}

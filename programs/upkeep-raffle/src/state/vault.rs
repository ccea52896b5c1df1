use anchor_lang::prelude::*;

// 8 discriminator, 32 raffle, 1 bump
pub const VAULT_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned PDA holding the entrance fees of the current cycle.
/// Lamports above rent exemption always equal `Raffle::balance`.
#[account]
pub struct Vault {
    pub raffle: Pubkey,
    pub bump: u8,
}

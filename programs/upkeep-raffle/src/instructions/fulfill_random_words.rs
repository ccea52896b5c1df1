use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, VAULT_SEED},
    error::RaffleError,
    state::{PrizeVault, Raffle, Vault},
};

/// Event emitted when a winner is paid and the raffle reopens
#[event]
pub struct WinnerPicked {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports paid to the winner
    pub prize: u64,
    /// The request this draw settled
    pub request_id: u64,
}

/// Pays out of the vault PDA into the winner account passed by the coordinator.
struct LamportVault<'a, 'info> {
    vault: &'a AccountInfo<'info>,
    winner: &'a AccountInfo<'info>,
}

impl PrizeVault for LamportVault<'_, '_> {
    fn pay_out(&mut self, winner: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(
            *self.winner.key,
            *winner,
            RaffleError::WinnerAccountMismatch
        );

        let pre_transfer_balance = self.winner.lamports();

        // The vault is a PDA owned by this program, so lamports move directly.
        self.vault.sub_lamports(amount)?;
        self.winner.add_lamports(amount)?;

        require!(
            self.winner.lamports()
                == pre_transfer_balance
                    .checked_add(amount)
                    .ok_or(RaffleError::Overflow)?,
            RaffleError::TransferFailed
        );
        Ok(())
    }
}

/// Instruction delivering the coordinator's random words for a pending draw
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `request_id` - Id published in `RandomWordsRequested`
/// * `random_words` - 256-bit big-endian words; the first one picks the winner
///
/// # Security Considerations
/// 1. Only the configured coordinator may sign, checked before the request id
/// 2. The request id must match the pending one, so stale or replayed
///    fulfillments are rejected
/// 3. The winner account must be the drawn player
///
/// # Implementation Notes
/// - Winner index is `random_words[0] mod number_of_players`
/// - Any failure reverts the transaction and the raffle stays Drawing
/// - On success players are cleared, balance is zeroed and a new interval starts now
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let coordinator = ctx.accounts.vrf_coordinator.key();

    let vault_info = ctx.accounts.vault.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();
    let mut vault = LamportVault {
        vault: &vault_info,
        winner: &winner_info,
    };

    let outcome = ctx.accounts.raffle.fulfill_random_words(
        &coordinator,
        request_id,
        &random_words,
        now,
        &mut vault,
    )?;

    msg!(
        "Winner picked: index={} prize={}",
        outcome.winner_index,
        outcome.prize
    );

    emit!(WinnerPicked {
        raffle: raffle_key,
        winner: outcome.winner,
        prize: outcome.prize,
        request_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.authority.as_ref()],
        bump = raffle.bump,
        has_one = vault @ RaffleError::InvalidVault,
        has_one = vrf_coordinator @ RaffleError::OnlyCoordinatorCanFulfill,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The coordinator configured at initialization
    pub vrf_coordinator: Signer<'info>,

    /// Vault PDA holding the prize
    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    /// Receives the prize.
    /// CHECK: compared against the drawn player before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn pays_the_drawn_player_from_the_vault() {
        let program_id = crate::ID;
        let system_program = anchor_lang::system_program::ID;
        let vault_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let mut vault_lamports = 1_000_000u64;
        let mut winner_lamports = 5u64;
        let mut vault_data = vec![0u8; 41];
        let mut winner_data: Vec<u8> = Vec::new();
        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        let winner = AccountInfo::new(
            &winner_key,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &system_program,
            false,
            0,
        );
        let mut payout = LamportVault {
            vault: &vault,
            winner: &winner,
        };

        payout.pay_out(&winner_key, 100).unwrap();

        assert_eq!(vault.lamports(), 999_900);
        assert_eq!(winner.lamports(), 105);
    }

    #[test]
    fn rejects_winner_account_that_was_not_drawn() {
        let program_id = crate::ID;
        let system_program = anchor_lang::system_program::ID;
        let vault_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let mut vault_lamports = 1_000_000u64;
        let mut winner_lamports = 5u64;
        let mut vault_data = vec![0u8; 41];
        let mut winner_data: Vec<u8> = Vec::new();
        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        let winner = AccountInfo::new(
            &winner_key,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &system_program,
            false,
            0,
        );
        let mut payout = LamportVault {
            vault: &vault,
            winner: &winner,
        };

        let err = payout.pay_out(&Pubkey::new_unique(), 100).unwrap_err();

        assert_eq!(err, Error::from(RaffleError::WinnerAccountMismatch));
        assert_eq!(vault.lamports(), 1_000_000);
        assert_eq!(winner.lamports(), 5);
    }

    #[test]
    fn overdrawn_vault_moves_nothing() {
        let program_id = crate::ID;
        let system_program = anchor_lang::system_program::ID;
        let vault_key = Pubkey::new_unique();
        let winner_key = Pubkey::new_unique();
        let mut vault_lamports = 50u64;
        let mut winner_lamports = 5u64;
        let mut vault_data = vec![0u8; 41];
        let mut winner_data: Vec<u8> = Vec::new();
        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        let winner = AccountInfo::new(
            &winner_key,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &system_program,
            false,
            0,
        );
        let mut payout = LamportVault {
            vault: &vault,
            winner: &winner,
        };

        assert!(payout.pay_out(&winner_key, 100).is_err());
        assert_eq!(vault.lamports(), 50);
        assert_eq!(winner.lamports(), 5);
    }
}

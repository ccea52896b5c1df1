use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::{RAFFLE_SEED, VAULT_SEED},
    error::RaffleError,
    state::{Raffle, Vault},
};

/// Event emitted when a player joins the current cycle
#[event]
pub struct RaffleEnter {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The player's address
    pub player: Pubkey,
    /// Amount paid in lamports, including any overpayment
    pub amount: u64,
}

/// Instruction to join the current raffle cycle
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports to pay, at least the entrance fee
///
/// # Security Considerations
/// 1. Rejects payments below the entrance fee
/// 2. Rejects entries while a draw is pending
/// 3. Rejects entries once the player registry is full
/// 4. Verifies the vault received exactly `amount` lamports
///
/// # Implementation Notes
/// - Overpayment is not refunded and goes to the next winner
/// - The same player may enter several times in one cycle
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.enter(player, amount)?;

    let vault_info = ctx.accounts.vault.to_account_info();
    let pre_transfer_balance = vault_info.lamports();

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: vault_info.clone(),
            },
        ),
        amount,
    )?;

    let post_transfer_balance = vault_info.lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    msg!(
        "Player entered: players={} balance={}",
        ctx.accounts.raffle.number_of_players(),
        ctx.accounts.raffle.balance()
    );

    emit!(RaffleEnter {
        raffle: ctx.accounts.raffle.key(),
        player,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.authority.as_ref()],
        bump = raffle.bump,
        has_one = vault @ RaffleError::InvalidVault,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Vault PDA receiving the entrance payment
    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

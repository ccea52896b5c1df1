use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, VAULT_SEED},
    state::{InitializeRaffleParams, Raffle, Vault, RAFFLE_ACCOUNT_SIZE, VAULT_ACCOUNT_SIZE},
};

/// Event emitted when a raffle is created
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    /// The account that created and paid for the raffle
    pub authority: Pubkey,
    /// The only account allowed to deliver random words
    pub vrf_coordinator: Pubkey,
    /// Minimum payment per entry in lamports
    pub entrance_fee: u64,
    /// Seconds between draws
    pub interval: i64,
    /// When the first cycle started
    pub created_at: i64,
}

/// Instruction to create a raffle and its vault
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `params` - Entrance fee, interval and randomness coordinator settings
///
/// # Security Considerations
/// 1. Rejects a zero entrance fee and a non-positive or oversized interval
/// 2. Rejects the default key as coordinator, since nobody could sign for it
/// 3. Rejects callback gas limits the coordinator would refuse
///
/// # Account Validations
/// * Raffle - New PDA with seeds ["raffle", authority_key]
/// * Vault - New PDA with seeds ["vault", raffle_key] holding entrance fees
/// * Authority - Pays for both accounts
///
/// # Implementation Notes
/// - The raffle starts Open and its first interval starts now
/// - All parameters are fixed for the lifetime of the raffle
pub fn initialize_raffle(
    ctx: Context<InitializeRaffle>,
    params: InitializeRaffleParams,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let raffle = Raffle::new(
        ctx.accounts.authority.key(),
        ctx.accounts.vault.key(),
        ctx.bumps.raffle,
        &params,
        now,
    )?;
    ctx.accounts.raffle.set_inner(raffle);

    ctx.accounts.vault.raffle = ctx.accounts.raffle.key();
    ctx.accounts.vault.bump = ctx.bumps.vault;

    msg!(
        "Raffle initialized: fee={} interval={}s",
        params.entrance_fee,
        params.interval
    );

    emit!(RaffleInitialized {
        raffle: ctx.accounts.raffle.key(),
        authority: ctx.accounts.authority.key(),
        vrf_coordinator: params.vrf_coordinator,
        entrance_fee: params.entrance_fee,
        interval: params.interval,
        created_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED, authority.key().as_ref()],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = authority,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

use anchor_lang::prelude::*;

use crate::{
    constants::RAFFLE_SEED,
    state::{Raffle, UpkeepCheck},
};

/// View instruction answering whether `perform_upkeep` would succeed now.
///
/// Keepers simulate this instead of sending it. It never writes and never
/// fails for an existing raffle. `check_data` is accepted for keeper
/// compatibility and ignored.
pub fn check_upkeep(ctx: Context<CheckUpkeep>, _check_data: Vec<u8>) -> Result<UpkeepCheck> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.raffle.check_upkeep(now))
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [RAFFLE_SEED, raffle.authority.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

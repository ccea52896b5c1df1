use anchor_lang::prelude::*;

use crate::{
    constants::RAFFLE_SEED,
    state::{Raffle, RaffleSnapshot},
};

/// View instruction returning every observable field of a raffle
pub fn get_raffle_info(ctx: Context<GetRaffleInfo>) -> Result<RaffleSnapshot> {
    Ok(ctx.accounts.raffle.snapshot())
}

#[derive(Accounts)]
pub struct GetRaffleInfo<'info> {
    #[account(
        seeds = [RAFFLE_SEED, raffle.authority.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

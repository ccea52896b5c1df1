use anchor_lang::prelude::*;

use crate::{constants::RAFFLE_SEED, state::Raffle};

/// View instruction returning the player at `index`, or `None` past the end
pub fn get_player(ctx: Context<GetPlayer>, index: u32) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.raffle.player(index as usize))
}

#[derive(Accounts)]
pub struct GetPlayer<'info> {
    #[account(
        seeds = [RAFFLE_SEED, raffle.authority.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

//! Interval-driven raffle.
//!
//! Players pay a fixed entrance fee into a vault. Once the interval has
//! elapsed and at least one player has entered, any keeper may close the
//! cycle with `perform_upkeep`, which publishes a randomness request. The
//! configured coordinator answers with `fulfill_random_words`; the first
//! random word picks the winner, the whole vault balance is paid out and the
//! raffle reopens for the next cycle.

#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;
use instructions::*;
use state::{InitializeRaffleParams, RaffleSnapshot, UpkeepCheck};

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

declare_id!("2jrxbgQmYUp5hiKNncMRzcy2o81qAXkHvP4uRVUaVcPS");

#[program]
pub mod upkeep_raffle {
    use super::*;

    pub fn initialize_raffle(
        ctx: Context<InitializeRaffle>,
        params: InitializeRaffleParams,
    ) -> Result<()> {
        instructions::initialize_raffle::initialize_raffle(ctx, params)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
        instructions::check_upkeep::check_upkeep(ctx, check_data)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx, perform_data)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn get_raffle_info(ctx: Context<GetRaffleInfo>) -> Result<RaffleSnapshot> {
        instructions::get_raffle_info::get_raffle_info(ctx)
    }

    pub fn get_player(ctx: Context<GetPlayer>, index: u32) -> Result<Option<Pubkey>> {
        instructions::get_player::get_player(ctx, index)
    }
}

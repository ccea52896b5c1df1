use anchor_lang::prelude::*;

use crate::{
    constants::RAFFLE_SEED,
    state::{derive_request_id, RandomWordsRequest, Raffle, RandomnessCoordinator},
};

/// Request picked up by the off-chain randomness coordinator
#[event]
pub struct RandomWordsRequested {
    /// The raffle that will receive the fulfillment
    pub raffle: Pubkey,
    /// Id the fulfillment must carry
    pub request_id: u64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub nonce: u64,
}

/// Event emitted when a cycle closes and a draw is pending
#[event]
pub struct RequestedRaffleWinner {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Id of the pending randomness request
    pub request_id: u64,
}

/// Publishes requests through program logs, where the coordinator listens.
/// The request id is derived on-chain so the coordinator cannot choose it.
struct LogCoordinator {
    raffle: Pubkey,
}

impl RandomnessCoordinator for LogCoordinator {
    fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64> {
        let request_id = derive_request_id(&self.raffle, request);

        emit!(RandomWordsRequested {
            raffle: self.raffle,
            request_id,
            key_hash: request.key_hash,
            subscription_id: request.subscription_id,
            request_confirmations: request.request_confirmations,
            callback_gas_limit: request.callback_gas_limit,
            num_words: request.num_words,
            nonce: request.nonce,
        });

        Ok(request_id)
    }
}

/// Instruction to close the current cycle and request a random winner
///
/// # Arguments
/// * `ctx` - The context object containing the raffle and the keeper
/// * `perform_data` - Accepted for keeper compatibility and ignored
///
/// # Security Considerations
/// 1. Re-checks every draw condition itself, whatever `check_upkeep` said earlier
/// 2. Anyone may call it; a duplicate call after a successful one is rejected
///
/// # Implementation Notes
/// - Changes raffle state to Drawing until the coordinator fulfills
/// - There is no timeout: a coordinator that never answers leaves the raffle Drawing
pub fn perform_upkeep(ctx: Context<PerformUpkeep>, _perform_data: Vec<u8>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();

    let mut coordinator = LogCoordinator { raffle: raffle_key };
    let request_id = ctx.accounts.raffle.perform_upkeep(now, &mut coordinator)?;

    msg!(
        "Requested raffle winner: request_id={} keeper={}",
        request_id,
        ctx.accounts.keeper.key()
    );

    emit!(RequestedRaffleWinner {
        raffle: raffle_key,
        request_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.authority.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Any account paying for the upkeep transaction
    pub keeper: Signer<'info>,
}

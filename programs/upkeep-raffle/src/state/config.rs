use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_CALLBACK_GAS_LIMIT, MAX_INTERVAL},
    error::RaffleError,
};

/// Construction parameters for a raffle. None of them can change afterwards.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct InitializeRaffleParams {
    /// Minimum payment in lamports to join a cycle
    pub entrance_fee: u64,
    /// Seconds that must pass between draws
    pub interval: i64,
    /// The only account allowed to deliver random words
    pub vrf_coordinator: Pubkey,
    /// Coordinator key hash ("gas lane") the requests are billed against
    pub key_hash: [u8; 32],
    /// Coordinator subscription funding the requests
    pub subscription_id: u64,
    /// Compute budget the coordinator grants the fulfillment callback
    pub callback_gas_limit: u32,
}

impl InitializeRaffleParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.entrance_fee > 0, RaffleError::InvalidEntranceFee);
        require!(
            self.interval > 0 && self.interval <= MAX_INTERVAL,
            RaffleError::InvalidInterval
        );
        require!(
            self.vrf_coordinator != Pubkey::default(),
            RaffleError::InvalidCoordinator
        );
        require!(
            self.callback_gas_limit > 0 && self.callback_gas_limit <= MAX_CALLBACK_GAS_LIMIT,
            RaffleError::InvalidCallbackGasLimit
        );
        Ok(())
    }
}

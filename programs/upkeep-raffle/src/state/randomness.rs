use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use arrayref::{array_ref, array_refs};

use crate::error::RaffleError;

/// Parameters forwarded to the randomness coordinator with every draw
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RandomWordsRequest {
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub nonce: u64,
}

/// Issues randomness requests. The answer arrives later through a separate
/// `fulfill_random_words` call, never as a return value.
pub trait RandomnessCoordinator {
    /// Returns the id the matching fulfillment has to carry.
    fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64>;
}

/// Custody of the pool's lamports.
pub trait PrizeVault {
    /// Moves `amount` to `winner`. Any error aborts the whole fulfillment.
    fn pay_out(&mut self, winner: &Pubkey, amount: u64) -> Result<()>;
}

/// Request id for `request`, bound to the raffle that issued it.
/// The nonce makes every cycle's id distinct.
pub fn derive_request_id(raffle: &Pubkey, request: &RandomWordsRequest) -> u64 {
    let digest = hashv(&[
        request.key_hash.as_ref(),
        raffle.as_ref(),
        request.subscription_id.to_le_bytes().as_ref(),
        request.nonce.to_le_bytes().as_ref(),
    ])
    .to_bytes();
    u64::from_le_bytes(*array_ref![digest, 0, 8])
}

/// Reduces a 256-bit big-endian random word modulo `player_count`.
///
/// The word is folded one 64-bit limb at a time so the result equals
/// `word mod player_count` over the full 256 bits.
pub fn winner_index(random_word: &[u8; 32], player_count: usize) -> Result<usize> {
    require!(player_count > 0, RaffleError::NoPlayers);

    let modulus = player_count as u128;
    let (high, upper, lower, low) = array_refs![random_word, 8, 8, 8, 8];
    let reduced = [high, upper, lower, low].iter().fold(0u128, |acc, limb| {
        ((acc << 64) | u64::from_be_bytes(**limb) as u128) % modulus
    });

    Ok(reduced as usize)
}

use anchor_lang::prelude::*;

/// Block confirmations the coordinator waits before answering a request
#[constant]
pub const REQUEST_CONFIRMATIONS: u16 = 3;

/// Random words requested per draw
#[constant]
pub const NUM_WORDS: u32 = 1;

/// Players a single cycle can hold. Bounded by the raffle account size.
#[constant]
pub const MAX_PLAYERS: usize = 200;

/// Upper bound the coordinator accepts for the fulfillment callback
#[constant]
pub const MAX_CALLBACK_GAS_LIMIT: u32 = 2_500_000;

/// Longest accepted draw interval, one year in seconds
#[constant]
pub const MAX_INTERVAL: i64 = 365 * 24 * 60 * 60;

#[constant]
pub const RAFFLE_SEED: &[u8] = b"raffle";

#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

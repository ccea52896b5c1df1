use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_PLAYERS, NUM_WORDS, REQUEST_CONFIRMATIONS},
    error::RaffleError,
    state::{
        config::InitializeRaffleParams,
        randomness::{winner_index, PrizeVault, RandomWordsRequest, RandomnessCoordinator},
    },
};

// Space calculation:
// 8 (discriminator) +
// 32 (authority) +
// 32 (vault) +
// 32 (vrf_coordinator) +
// 32 (key_hash) +
// 8 (subscription_id) +
// 4 (callback_gas_limit) +
// 8 (entrance_fee) +
// 8 (interval) +
// 8 (last_timestamp) +
// 1 (raffle_state) +
// 4 + 32 * MAX_PLAYERS (players) +
// 8 (balance) +
// 33 (recent_winner: Option<Pubkey>) +
// 9 (pending_request_id: Option<u64>) +
// 8 (request_nonce) +
// 1 (bump)
pub const RAFFLE_ACCOUNT_SIZE: usize =
    8 + 32 + 32 + 32 + 32 + 8 + 4 + 8 + 8 + 8 + 1 + (4 + 32 * MAX_PLAYERS) + 8 + 33 + 9 + 8 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open = 0,
    Drawing = 1,
}

/// First unmet draw condition, in evaluation order
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpkeepBlocker {
    NotOpen,
    IntervalNotElapsed,
    NoPlayers,
    NoBalance,
}

/// Answer to "should a draw happen now?"
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    pub reason: Option<UpkeepBlocker>,
    pub perform_data: Vec<u8>,
}

/// Result of a completed draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawOutcome {
    pub winner: Pubkey,
    pub winner_index: u64,
    pub prize: u64,
}

/// Read-only view of a raffle returned by `get_raffle_info`.
/// Players are listed through `get_player` since return data is capped at 1 KiB.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RaffleSnapshot {
    pub raffle_state: RaffleState,
    pub entrance_fee: u64,
    pub interval: i64,
    pub latest_timestamp: i64,
    pub balance: u64,
    pub number_of_players: u32,
    pub recent_winner: Option<Pubkey>,
    pub pending_request_id: Option<u64>,
    pub num_words: u32,
    pub request_confirmations: u16,
}

/// A self-resetting raffle.
///
/// Lifecycle: `Open --perform_upkeep--> Drawing --fulfill_random_words--> Open`.
/// There is no terminal state and no way back from `Drawing` other than a
/// fulfillment carrying the pending request id.
///
/// Invariants:
/// - `raffle_state == Drawing` exactly when `pending_request_id` is set
/// - `players` only grows while `Open` and is emptied by a payout
/// - `balance` is the sum of the payments accepted since the last payout
#[account]
pub struct Raffle {
    pub authority: Pubkey,
    pub vault: Pubkey,
    pub vrf_coordinator: Pubkey,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub entrance_fee: u64,
    pub interval: i64,
    pub last_timestamp: i64,
    pub raffle_state: RaffleState,
    pub players: Vec<Pubkey>,
    pub balance: u64,
    pub recent_winner: Option<Pubkey>,
    pub pending_request_id: Option<u64>,
    pub request_nonce: u64,
    pub bump: u8,
}

impl Raffle {
    pub fn new(
        authority: Pubkey,
        vault: Pubkey,
        bump: u8,
        params: &InitializeRaffleParams,
        now: i64,
    ) -> Result<Self> {
        params.validate()?;

        Ok(Self {
            authority,
            vault,
            vrf_coordinator: params.vrf_coordinator,
            key_hash: params.key_hash,
            subscription_id: params.subscription_id,
            callback_gas_limit: params.callback_gas_limit,
            entrance_fee: params.entrance_fee,
            interval: params.interval,
            last_timestamp: now,
            raffle_state: RaffleState::Open,
            players: Vec::new(),
            balance: 0,
            recent_winner: None,
            pending_request_id: None,
            request_nonce: 0,
            bump,
        })
    }

    /// Admits `player` for the current cycle. Overpayment is kept in the pool.
    pub fn enter(&mut self, player: Pubkey, amount_paid: u64) -> Result<()> {
        require!(
            amount_paid >= self.entrance_fee,
            RaffleError::InsufficientFee
        );
        require!(
            self.raffle_state == RaffleState::Open,
            RaffleError::LotteryClosed
        );
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        let balance = self
            .balance
            .checked_add(amount_paid)
            .ok_or(RaffleError::Overflow)?;

        self.players.push(player);
        self.balance = balance;
        Ok(())
    }

    /// Side-effect free eligibility check
    pub fn check_upkeep(&self, now: i64) -> UpkeepCheck {
        let is_open = self.raffle_state == RaffleState::Open;
        let time_passed = now.saturating_sub(self.last_timestamp) >= self.interval;
        let has_players = !self.players.is_empty();
        let has_balance = self.balance > 0;

        let reason = if !is_open {
            Some(UpkeepBlocker::NotOpen)
        } else if !time_passed {
            Some(UpkeepBlocker::IntervalNotElapsed)
        } else if !has_players {
            Some(UpkeepBlocker::NoPlayers)
        } else if !has_balance {
            Some(UpkeepBlocker::NoBalance)
        } else {
            None
        };

        UpkeepCheck {
            upkeep_needed: reason.is_none(),
            reason,
            perform_data: Vec::new(),
        }
    }

    /// Closes the cycle and asks `coordinator` for randomness.
    ///
    /// Eligibility is re-evaluated here; an earlier `check_upkeep` result is
    /// never trusted. Returns the pending request id.
    pub fn perform_upkeep<C: RandomnessCoordinator>(
        &mut self,
        now: i64,
        coordinator: &mut C,
    ) -> Result<u64> {
        let check = self.check_upkeep(now);
        if !check.upkeep_needed {
            msg!(
                "Upkeep not needed: balance={} players={} state={:?} reason={:?}",
                self.balance,
                self.players.len(),
                self.raffle_state,
                check.reason
            );
            return Err(error!(RaffleError::UpkeepNotNeeded)
                .with_values((self.balance, self.players.len())));
        }

        let request = self.random_words_request();
        let request_id = coordinator.request_random_words(&request)?;

        self.request_nonce = self
            .request_nonce
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        self.raffle_state = RaffleState::Drawing;
        self.pending_request_id = Some(request_id);

        Ok(request_id)
    }

    /// Settles the pending draw with the coordinator's random words.
    ///
    /// The payout happens before any field changes, so a failed transfer
    /// leaves the raffle `Drawing` with players and balance intact.
    pub fn fulfill_random_words<V: PrizeVault>(
        &mut self,
        caller: &Pubkey,
        request_id: u64,
        random_words: &[[u8; 32]],
        now: i64,
        vault: &mut V,
    ) -> Result<DrawOutcome> {
        require_keys_eq!(
            *caller,
            self.vrf_coordinator,
            RaffleError::OnlyCoordinatorCanFulfill
        );
        require!(
            self.raffle_state == RaffleState::Drawing
                && self.pending_request_id == Some(request_id),
            RaffleError::UnknownRequest
        );

        let random_word = random_words
            .first()
            .ok_or(RaffleError::MissingRandomWords)?;
        let index = winner_index(random_word, self.players.len())?;
        let winner = *self.players.get(index).ok_or(RaffleError::NoPlayers)?;
        let prize = self.balance;

        vault.pay_out(&winner, prize)?;

        self.players.clear();
        self.balance = 0;
        self.recent_winner = Some(winner);
        self.last_timestamp = now;
        self.pending_request_id = None;
        self.raffle_state = RaffleState::Open;

        Ok(DrawOutcome {
            winner,
            winner_index: index as u64,
            prize,
        })
    }

    fn random_words_request(&self) -> RandomWordsRequest {
        RandomWordsRequest {
            key_hash: self.key_hash,
            subscription_id: self.subscription_id,
            request_confirmations: REQUEST_CONFIRMATIONS,
            callback_gas_limit: self.callback_gas_limit,
            num_words: NUM_WORDS,
            nonce: self.request_nonce,
        }
    }

    pub fn entrance_fee(&self) -> u64 {
        self.entrance_fee
    }

    pub fn interval(&self) -> i64 {
        self.interval
    }

    pub fn raffle_state(&self) -> RaffleState {
        self.raffle_state
    }

    pub fn player(&self, index: usize) -> Option<Pubkey> {
        self.players.get(index).copied()
    }

    pub fn number_of_players(&self) -> usize {
        self.players.len()
    }

    pub fn latest_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.recent_winner
    }

    pub fn pending_request_id(&self) -> Option<u64> {
        self.pending_request_id
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn num_words(&self) -> u32 {
        NUM_WORDS
    }

    pub fn request_confirmations(&self) -> u16 {
        REQUEST_CONFIRMATIONS
    }

    pub fn snapshot(&self) -> RaffleSnapshot {
        RaffleSnapshot {
            raffle_state: self.raffle_state(),
            entrance_fee: self.entrance_fee(),
            interval: self.interval(),
            latest_timestamp: self.latest_timestamp(),
            balance: self.balance(),
            number_of_players: self.number_of_players() as u32,
            recent_winner: self.recent_winner(),
            pending_request_id: self.pending_request_id(),
            num_words: self.num_words(),
            request_confirmations: self.request_confirmations(),
        }
    }
}

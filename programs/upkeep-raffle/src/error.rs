use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Interval must be positive and at most one year")]
    InvalidInterval,
    #[msg("The randomness coordinator cannot be the default key")]
    InvalidCoordinator,
    #[msg("Callback gas limit is outside the range accepted by the coordinator")]
    InvalidCallbackGasLimit,
    #[msg("Amount paid is below the entrance fee")]
    InsufficientFee,
    #[msg("The lottery is not open for entries")]
    LotteryClosed,
    #[msg("The player registry is full for this cycle")]
    RaffleFull,
    #[msg("Upkeep is not needed")]
    UpkeepNotNeeded,
    #[msg("Only the configured randomness coordinator can fulfill requests")]
    OnlyCoordinatorCanFulfill,
    #[msg("Request id does not match the pending randomness request")]
    UnknownRequest,
    #[msg("The coordinator delivered no random words")]
    MissingRandomWords,
    #[msg("Cannot pick a winner from an empty player list")]
    NoPlayers,
    #[msg("Winner account does not match the drawn player")]
    WinnerAccountMismatch,
    #[msg("Vault transfer failed")]
    TransferFailed,
    #[msg("Vault account does not belong to this raffle")]
    InvalidVault,
}

use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The end timestamp must lie in the future and within the betting window.")]
    InvalidEndTimestamp,
    #[msg("The bet amount must be greater than zero.")]
    InvalidBetAmount,
    #[msg("The betting period has ended.")]
    PoolClosed,
    #[msg("Math operation overflow.")]
    MathOverflow,
}

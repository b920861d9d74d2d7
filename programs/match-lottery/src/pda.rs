use anchor_lang::prelude::*;

use crate::constants::{SEED_BET, SEED_LOTTERY_POOL};

/// Address and canonical bump of the pool for `match_id`.
///
/// Clients use this to name the pool in `create_lottery_pool` and
/// `place_bet`; the program re-derives the same seeds in its account
/// constraints.
pub fn lottery_pool_address(match_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_LOTTERY_POOL, &match_id.to_le_bytes()], &crate::ID)
}

/// Address and canonical bump of `bettor`'s single bet on `lottery_pool`.
pub fn bet_address(bettor: &Pubkey, lottery_pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SEED_BET, bettor.as_ref(), lottery_pool.as_ref()],
        &crate::ID,
    )
}

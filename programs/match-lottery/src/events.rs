use anchor_lang::prelude::*;

use crate::state::BetOption;

#[event]
pub struct LotteryPoolCreated {
    pub lottery_pool: Pubkey,
    pub match_id: u64,
    pub admin: Pubkey,
    pub end_timestamp: i64,
}

#[event]
pub struct BetPlaced {
    pub lottery_pool: Pubkey,
    pub bet_account: Pubkey,
    pub bettor: Pubkey,
    pub bet_amount: u64,
    pub bet_option: BetOption,
    /// Pool total after this bet.
    pub total_bet_amount: u64,
}

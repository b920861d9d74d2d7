use anchor_lang::prelude::*;
use instructions::*;

/// PDA seeds and protocol limits.
pub mod constants;

/// Custom error codes returned when an instruction is rejected.
pub mod error;

/// Events emitted on pool creation and bet placement.
pub mod events;

/// Instruction handlers and their account contexts.
pub mod instructions;

/// Deterministic addresses of pools and bets, shared with clients.
pub mod pda;

/// On-chain account layouts: `LotteryPool` and `BetAccount`.
pub mod state;

use state::BetOption;

declare_id!("GKjnF9FWdhUMZzD55d2Ruf8xDBmvGba39ThHJUktsG8a");

#[program]
pub mod match_lottery {
    use super::*;

    pub fn create_lottery_pool(
        ctx: Context<CreateLotteryPool>,
        match_id: u64,
        end_timestamp: i64,
    ) -> Result<()> {
        process_create_lottery_pool(ctx, match_id, end_timestamp)
    }

    pub fn place_bet(ctx: Context<PlaceBet>, bet_amount: u64, bet_option: BetOption) -> Result<()> {
        process_place_bet(ctx, bet_amount, bet_option)
    }
}

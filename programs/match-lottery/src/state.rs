use anchor_lang::prelude::*;

use crate::constants::MAX_BETTING_WINDOW;
use crate::error::ErrorCode;

/// Outcome of a match that a bet can be placed on.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum BetOption {
    #[default]
    HomeWin,
    Draw,
    AwayWin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolStatus {
    Open,
    Closed,
}

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct LotteryPool {
    /// The externally assigned match this pool takes bets on.
    pub match_id: u64,

    /// UNIX timestamp (seconds) after which no bet is accepted.
    pub end_timestamp: i64,

    /// Sum of the stakes of every bet recorded against this pool, in lamports.
    /// The lamports themselves stay in custody of the individual bet accounts.
    pub total_bet_amount: u64,

    /// Set once the pool has been settled. Nothing in this program sets it;
    /// it marks the boundary where settlement takes over.
    pub is_settled: bool,

    /// The signer that created the pool.
    pub admin: Pubkey,

    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,
}

impl LotteryPool {
    /// Initializes a freshly allocated pool. `now` is the ledger clock.
    pub fn open(
        &mut self,
        match_id: u64,
        end_timestamp: i64,
        admin: Pubkey,
        bump: u8,
        now: i64,
    ) -> Result<()> {
        let window = end_timestamp
            .checked_sub(now)
            .ok_or(ErrorCode::InvalidEndTimestamp)?;
        require!(
            window > 0 && window <= MAX_BETTING_WINDOW,
            ErrorCode::InvalidEndTimestamp
        );

        self.match_id = match_id;
        self.end_timestamp = end_timestamp;
        self.total_bet_amount = 0;
        self.is_settled = false;
        self.admin = admin;
        self.bump = bump;
        Ok(())
    }

    pub fn status(&self, now: i64) -> PoolStatus {
        if self.is_settled || now >= self.end_timestamp {
            PoolStatus::Closed
        } else {
            PoolStatus::Open
        }
    }

    /// Validates a stake against the pool and adds it to the running total.
    /// Leaves the pool untouched on error.
    pub fn accept_bet(&mut self, bet_amount: u64, now: i64) -> Result<()> {
        require!(
            self.status(now) == PoolStatus::Open,
            ErrorCode::PoolClosed
        );
        require!(bet_amount > 0, ErrorCode::InvalidBetAmount);

        self.total_bet_amount = self
            .total_bet_amount
            .checked_add(bet_amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct BetAccount {
    /// The account that placed, and paid for, this bet.
    pub bettor: Pubkey,

    /// The pool this bet belongs to.
    pub lottery_pool: Pubkey,

    /// Stake in lamports, held by this account on top of its rent reserve.
    pub bet_amount: u64,

    pub bet_option: BetOption,

    pub bump: u8,
}

impl BetAccount {
    pub fn record(
        &mut self,
        bettor: Pubkey,
        lottery_pool: Pubkey,
        bet_amount: u64,
        bet_option: BetOption,
        bump: u8,
    ) {
        self.bettor = bettor;
        self.lottery_pool = lottery_pool;
        self.bet_amount = bet_amount;
        self.bet_option = bet_option;
        self.bump = bump;
    }
}

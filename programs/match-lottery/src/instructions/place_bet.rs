use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{DISCRIMINATOR_SIZE, SEED_BET, SEED_LOTTERY_POOL};
use crate::events::BetPlaced;
use crate::state::{BetAccount, BetOption, LotteryPool};

/// Accounts required to place a bet.
///
/// Ensures:
/// 1. The pool is the PDA of its own match id.
/// 2. The bet account is the PDA of (bettor, pool) and does not exist yet,
///    so a bettor can hold at most one bet per pool.
/// 3. The pool is write-locked, serializing concurrent bets on it.
#[derive(Accounts)]
pub struct PlaceBet<'info> {
    /// The account placing, and paying for, the bet.
    #[account(mut)]
    pub bettor: Signer<'info>,

    /// The pool being bet on.
    #[account(
        mut,
        seeds = [SEED_LOTTERY_POOL, lottery_pool.match_id.to_le_bytes().as_ref()],
        bump = lottery_pool.bump
    )]
    pub lottery_pool: Account<'info, LotteryPool>,

    /// The bettor's bet on this pool. Also holds the staked lamports.
    #[account(
        init,
        payer = bettor,
        space = DISCRIMINATOR_SIZE + BetAccount::INIT_SPACE,
        seeds = [SEED_BET, bettor.key().as_ref(), lottery_pool.key().as_ref()],
        bump
    )]
    pub bet_account: Account<'info, BetAccount>,

    /// System program for account creation and the stake transfer.
    pub system_program: Program<'info, System>,
}

/// Keys of the accounts a bet touches, plus the bump of the bet PDA.
#[derive(Clone, Copy, Debug)]
pub struct BetAddresses {
    pub bettor: Pubkey,
    pub lottery_pool: Pubkey,
    pub bet_account: Pubkey,
    pub bump: u8,
}

/// Places `bet_amount` lamports on `bet_option`.
///
/// Steps performed:
/// 1. Check that the pool is still open and the stake is positive.
/// 2. Add the stake to the pool total.
/// 3. Record the bet.
/// 4. Transfer the stake from the bettor into the bet account.
///
/// # Arguments
/// * `ctx` - Context containing PlaceBet accounts
/// * `bet_amount` - Stake in lamports
/// * `bet_option` - Predicted match outcome
pub fn process_place_bet(
    ctx: Context<PlaceBet>,
    bet_amount: u64,
    bet_option: BetOption,
) -> Result<()> {
    let clock = Clock::get()?;
    let addresses = BetAddresses {
        bettor: ctx.accounts.bettor.key(),
        lottery_pool: ctx.accounts.lottery_pool.key(),
        bet_account: ctx.accounts.bet_account.key(),
        bump: ctx.bumps.bet_account,
    };

    execute_place_bet(
        &mut ctx.accounts.lottery_pool,
        &mut ctx.accounts.bet_account,
        &addresses,
        bet_amount,
        bet_option,
        clock.unix_timestamp,
    )?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.bettor.to_account_info(),
                to: ctx.accounts.bet_account.to_account_info(),
            },
        ),
        bet_amount,
    )?;

    Ok(())
}

/// Steps 1-3 of `process_place_bet` on an already allocated bet account.
/// The caller moves the stake once this succeeds.
pub fn execute_place_bet(
    lottery_pool: &mut LotteryPool,
    bet_account: &mut BetAccount,
    addresses: &BetAddresses,
    bet_amount: u64,
    bet_option: BetOption,
    now: i64,
) -> Result<()> {
    lottery_pool.accept_bet(bet_amount, now)?;

    bet_account.record(
        addresses.bettor,
        addresses.lottery_pool,
        bet_amount,
        bet_option,
        addresses.bump,
    );

    msg!("Bet of {} placed on match {}", bet_amount, lottery_pool.match_id);
    msg!("Pool total: {}", lottery_pool.total_bet_amount);

    emit!(BetPlaced {
        lottery_pool: addresses.lottery_pool,
        bet_account: addresses.bet_account,
        bettor: addresses.bettor,
        bet_amount,
        bet_option,
        total_bet_amount: lottery_pool.total_bet_amount,
    });

    Ok(())
}

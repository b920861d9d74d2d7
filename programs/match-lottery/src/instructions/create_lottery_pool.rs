use anchor_lang::prelude::*;

use crate::constants::{DISCRIMINATOR_SIZE, SEED_LOTTERY_POOL};
use crate::events::LotteryPoolCreated;
use crate::state::LotteryPool;

/// Accounts required to open the betting pool of one match.
#[derive(Accounts)]
#[instruction(match_id: u64)]
pub struct CreateLotteryPool<'info> {
    /// The pool state account. `init` fails if a pool already exists for
    /// this match id, so each match gets exactly one pool.
    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_SIZE + LotteryPool::INIT_SPACE,
        seeds = [SEED_LOTTERY_POOL, match_id.to_le_bytes().as_ref()],
        bump
    )]
    pub lottery_pool: Account<'info, LotteryPool>,

    /// Creator of the pool, recorded as its admin. Pays for the account.
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the pool for `match_id`, open for bets until `end_timestamp`.
///
/// # Arguments
/// * `ctx` - Context holding the CreateLotteryPool accounts
/// * `match_id` - Externally assigned match identifier
/// * `end_timestamp` - UNIX timestamp at which betting closes
pub fn process_create_lottery_pool(
    ctx: Context<CreateLotteryPool>,
    match_id: u64,
    end_timestamp: i64,
) -> Result<()> {
    let clock = Clock::get()?;
    let lottery_pool_key = ctx.accounts.lottery_pool.key();
    let admin = ctx.accounts.admin.key();

    execute_create_lottery_pool(
        &mut ctx.accounts.lottery_pool,
        lottery_pool_key,
        admin,
        match_id,
        end_timestamp,
        ctx.bumps.lottery_pool,
        clock.unix_timestamp,
    )
}

/// Initializes an already allocated pool account and announces it.
/// `now` is the ledger clock.
pub fn execute_create_lottery_pool(
    lottery_pool: &mut LotteryPool,
    lottery_pool_key: Pubkey,
    admin: Pubkey,
    match_id: u64,
    end_timestamp: i64,
    bump: u8,
    now: i64,
) -> Result<()> {
    lottery_pool.open(match_id, end_timestamp, admin, bump, now)?;

    msg!("Lottery pool created for match {}", match_id);
    msg!("Betting closes at {}", end_timestamp);

    emit!(LotteryPoolCreated {
        lottery_pool: lottery_pool_key,
        match_id,
        admin,
        end_timestamp,
    });

    Ok(())
}

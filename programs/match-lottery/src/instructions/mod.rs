pub mod create_lottery_pool;
pub mod place_bet;

pub use create_lottery_pool::*;
pub use place_bet::*;

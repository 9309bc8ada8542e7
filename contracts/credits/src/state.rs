use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// One row of the credit rate table: paying exactly `amount` grants `reward` credits.
#[cw_serde]
pub struct CreditRate {
    pub amount: Uint128,
    pub reward: u64,
}

pub const CREDIT_RATE_COUNT: usize = 9;

// 18 decimal places, 1 ETH-equivalent = 10^18 base units.
const FINNEY: u128 = 1_000_000_000_000_000;

pub const DEFAULT_CREDIT_RATES: [(u128, u64); CREDIT_RATE_COUNT] = [
    (FINNEY, 5),
    (5 * FINNEY, 25),
    (10 * FINNEY, 55),
    (50 * FINNEY, 275),
    (100 * FINNEY, 550),
    (500 * FINNEY, 2_750),
    (1_000 * FINNEY, 5_500),
    (3_000 * FINNEY, 18_000),
    (5_000 * FINNEY, 30_000),
];

pub const DEFAULT_RUBY_TIER_PRICE: u128 = 500 * FINNEY;
pub const DEFAULT_DIAMOND_TIER_PRICE: u128 = 1_000 * FINNEY;
pub const RUBY_TIER_REWARD: u64 = 250;
pub const DIAMOND_TIER_REWARD: u64 = 500;

pub fn default_credit_rates() -> Vec<CreditRate> {
    DEFAULT_CREDIT_RATES
        .iter()
        .map(|&(amount, reward)| CreditRate {
            amount: Uint128::new(amount),
            reward,
        })
        .collect()
}

pub const OWNER: Item<Addr> = Item::new("owner");
pub const TREASURY: Item<Addr> = Item::new("treasury");
pub const DENOM: Item<String> = Item::new("denom");
pub const PAUSED: Item<bool> = Item::new("paused");
pub const CREDITS: Map<&Addr, u64> = Map::new("credits");
pub const TOTAL_CREDITS_MINTED: Item<u64> = Item::new("total_credits_minted");
pub const CREDIT_RATES: Item<Vec<CreditRate>> = Item::new("credit_rates");
pub const RUBY_TIER_PRICE: Item<Uint128> = Item::new("ruby_tier_price");
pub const DIAMOND_TIER_PRICE: Item<Uint128> = Item::new("diamond_tier_price");

use cosmwasm_std::{Addr, HexBinary, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use serde::{Deserialize, Serialize};

pub const DAY: u64 = 86_400;
pub const COIN_ID_LEN: usize = 32;

pub const DEFAULT_VOTE_FEE: u128 = 3_500_000_000_000_000;
pub const DEFAULT_DAILY_VOTE_LIMIT: u64 = 5;

/// Index of the day `time` falls in. Derived from block time only, so every
/// account rolls over at the same instant.
pub fn day_index(time: Timestamp) -> u64 {
    time.seconds() / DAY
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct DailyVoteWindow {
    pub day: u64,
    pub count: u64,
}

impl DailyVoteWindow {
    /// The window as seen on `day`: a window stored for any other day counts as empty.
    pub fn at_day(self, day: u64) -> Self {
        if self.day == day {
            self
        } else {
            DailyVoteWindow { day, count: 0 }
        }
    }

    pub fn remaining(&self, limit: u64) -> u64 {
        limit.saturating_sub(self.count)
    }
}

pub const OWNER: Item<Addr> = Item::new("owner");
pub const TREASURY: Item<Addr> = Item::new("treasury");
pub const DENOM: Item<String> = Item::new("denom");
pub const PAUSED: Item<bool> = Item::new("paused");
pub const VOTE_FEE: Item<Uint128> = Item::new("vote_fee");
pub const DAILY_VOTE_LIMIT: Item<u64> = Item::new("daily_vote_limit");
pub const TOTAL_VOTES: Map<&[u8], u64> = Map::new("total_votes");
pub const USER_VOTES: Map<(&[u8], &Addr), u64> = Map::new("user_votes");
pub const TOTAL_VOTES_CAST: Item<u64> = Item::new("total_votes_cast");
pub const VOTED_COINS: Map<u64, HexBinary> = Map::new("voted_coins");
pub const VOTED_COINS_COUNT: Item<u64> = Item::new("voted_coins_count");
pub const DAILY_VOTES: Map<&Addr, DailyVoteWindow> = Map::new("daily_votes");

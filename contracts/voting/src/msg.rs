use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub treasury: String,
    pub denom: String,
    pub vote_fee: Option<Uint128>,
    pub daily_vote_limit: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    Vote { coin_id: HexBinary },
    SetVoteFee { fee: Uint128 },
    SetDailyVoteLimit { limit: u64 },
    SetTreasury { treasury: String },
    Pause {},
    Unpause {},
    TransferOwnership { new_owner: String },
}

#[cw_serde]
pub struct TotalVotesResponse {
    pub votes: u64,
}

#[cw_serde]
pub struct UserVotesForCoinResponse {
    pub votes: u64,
}

#[cw_serde]
pub struct TotalVotesCastResponse {
    pub total: u64,
}

#[cw_serde]
pub struct VotedCoinsCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct VotedCoin {
    pub index: u64,
    pub coin_id: HexBinary,
    pub votes: u64,
}

#[cw_serde]
pub struct VotedCoinsResponse {
    pub coins: Vec<VotedCoin>,
}

#[cw_serde]
pub struct VotesRemainingResponse {
    pub remaining: u64,
}

#[cw_serde]
pub struct DailyVoteLimitResponse {
    pub limit: u64,
}

#[cw_serde]
pub struct VoteFeeResponse {
    pub fee: Uint128,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct TreasuryResponse {
    pub treasury: Addr,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(TotalVotesResponse)]
    TotalVotes { coin_id: HexBinary },
    #[returns(UserVotesForCoinResponse)]
    UserVotesForCoin { coin_id: HexBinary, account: String },
    #[returns(TotalVotesCastResponse)]
    TotalVotesCast {},
    #[returns(VotedCoinsCountResponse)]
    VotedCoinsCount {},
    /// Coins in the order they first received a vote.
    #[returns(VotedCoinsResponse)]
    VotedCoins {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(VotesRemainingResponse)]
    VotesRemainingToday { account: String },
    #[returns(DailyVoteLimitResponse)]
    DailyVoteLimit {},
    #[returns(VoteFeeResponse)]
    VoteFee {},
    #[returns(OwnerResponse)]
    Owner {},
    #[returns(TreasuryResponse)]
    Treasury {},
    #[returns(PausedResponse)]
    Paused {},
}

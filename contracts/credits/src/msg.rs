use crate::state::CreditRate;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub treasury: String,
    pub denom: String,
    pub ruby_tier_price: Option<Uint128>,
    pub diamond_tier_price: Option<Uint128>,
    pub credit_rates: Option<Vec<CreditRate>>,
}

#[cw_serde]
pub enum ExecuteMsg {
    BuyCredits {},
    SpendCredits { amount: u64, reason: String },
    BuyRubyTier {},
    BuyDiamondTier {},
    SetTreasury { treasury: String },
    SetRubyTierPrice { price: Uint128 },
    SetDiamondTierPrice { price: Uint128 },
    SetCreditRate { index: u32, amount: Uint128, reward: u64 },
    Pause {},
    Unpause {},
    TransferOwnership { new_owner: String },
    Withdraw {},
}

#[cw_serde]
pub struct CreditsResponse {
    pub credits: u64,
}

#[cw_serde]
pub struct TotalCreditsMintedResponse {
    pub total: u64,
}

#[cw_serde]
pub struct PriceResponse {
    pub price: Uint128,
}

#[cw_serde]
pub struct CreditAmountResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct CreditRewardResponse {
    pub reward: u64,
}

#[cw_serde]
pub struct CreditRatesResponse {
    pub rates: Vec<CreditRate>,
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
pub struct CustodiedResponse {
    pub amount: Uint128,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CreditsResponse)]
    Credits { account: String },
    #[returns(CreditsResponse)]
    GetCredits { account: String },
    #[returns(TotalCreditsMintedResponse)]
    TotalCreditsMinted {},
    #[returns(PriceResponse)]
    RubyTierPrice {},
    #[returns(PriceResponse)]
    DiamondTierPrice {},
    #[returns(CreditAmountResponse)]
    CreditAmount { index: u32 },
    #[returns(CreditRewardResponse)]
    CreditReward { index: u32 },
    #[returns(CreditRatesResponse)]
    CreditRates {},
    #[returns(OwnerResponse)]
    Owner {},
    #[returns(TreasuryResponse)]
    Treasury {},
    #[returns(PausedResponse)]
    Paused {},
    #[returns(CustodiedResponse)]
    Custodied {},
}

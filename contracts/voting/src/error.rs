use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),
    #[error("Payment error: {0}")]
    PaymentError(#[from] PaymentError),
    #[error("Caller is not the owner")]
    Unauthorized(),
    #[error("Contract is paused")]
    Paused(),
    #[error("Contract is not paused")]
    NotPaused(),
    #[error("Treasury address must not be empty")]
    ZeroTreasury(),
    #[error("Coin id must not be empty")]
    EmptyCoinId(),
    #[error("Coin id must be {expected} bytes, got {got}")]
    InvalidCoinId { expected: usize, got: usize },
    #[error("Incorrect vote fee: expected {expected}, got {got}")]
    IncorrectFee { expected: Uint128, got: Uint128 },
    #[error("Daily limit of {limit} votes reached")]
    DailyLimitReached { limit: u64 },
    #[error("Daily vote limit must be greater than zero")]
    ZeroVoteLimit(),
    #[error("Integer overflow")]
    Overflow(),
}

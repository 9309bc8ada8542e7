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
    #[error("Invalid payment amount {0}")]
    InvalidAmount(Uint128),
    #[error("Incorrect ruby tier price: expected {expected}, got {got}")]
    IncorrectRubyPrice { expected: Uint128, got: Uint128 },
    #[error("Incorrect diamond tier price: expected {expected}, got {got}")]
    IncorrectDiamondPrice { expected: Uint128, got: Uint128 },
    #[error("Amount must be greater than zero")]
    ZeroAmount(),
    #[error("Insufficient credits: requested {requested}, available {available}")]
    InsufficientCredits { requested: u64, available: u64 },
    #[error("Credit rate index {0} out of range")]
    IndexOutOfRange(u32),
    #[error("Credit rate table must have exactly {expected} entries, got {got}")]
    InvalidRateTable { expected: usize, got: usize },
    #[error("Nothing to withdraw")]
    NothingToWithdraw(),
    #[error("Integer overflow")]
    Overflow(),
}

use cosmwasm_std::{Int256, SignedDecimal};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParamsError {
    #[error("empty parameter: LiquidityPoolTypes")]
    EmptyConfiguration,

    #[error("LiquidityPoolTypes index must be sorted: found index {found} at position {expected}")]
    IndexNotSorted { expected: u32, found: u32 },

    #[error("only the default pool type is allowed on this version, got {count} pool types")]
    UnsupportedCount { count: usize },

    #[error("only the default pool type is allowed")]
    NotDefaultType,

    #[error("{field} must be positive: {value}")]
    NotPositive { field: &'static str, value: Int256 },

    #[error("{field} should be at least {floor}: {value}")]
    BelowFloor {
        field: &'static str,
        floor: Int256,
        value: Int256,
    },

    #[error("SwapFeeRate cannot be negative: {0}")]
    Negative(SignedDecimal),

    #[error("SwapFeeRate too large: {0}")]
    TooLarge(SignedDecimal),

    #[error("LiquidityPoolCreationFee cannot be empty")]
    EmptyFee,

    #[error("invalid denom {denom}: {reason}")]
    InvalidDenom { denom: String, reason: String },

    #[error("coin {denom} amount is not positive")]
    NonPositiveCoin { denom: String },

    #[error("denomination {denom} is not sorted")]
    UnsortedCoins { denom: String },

    #[error("duplicate denomination {denom}")]
    DuplicateDenom { denom: String },

    #[error("bech32 error: {0}")]
    Bech32(String),

    #[error("invalid pool record #{pool_id}: {reason}")]
    InvalidPoolRecord { pool_id: u64, reason: String },

    #[error("duplicate pool id {0} in pool records")]
    DuplicatePoolId(u64),

    #[error("pool #{pool_id} references unknown pool type index {type_index}")]
    UnknownPoolType { pool_id: u64, type_index: u32 },

    #[error("pool #{pool_id} holds {count} reserve coins, must be between {min} and {max}")]
    InvalidReserveCoinNum {
        pool_id: u64,
        count: usize,
        min: u32,
        max: u32,
    },
}

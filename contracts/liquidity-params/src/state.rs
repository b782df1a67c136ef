use cosmwasm_std::{Coin, Int256, SignedDecimal, StdResult, Storage};
use cw_storage_plus::Item;
use liquidity_utils::{ParamChange, ParamKey, Params, PoolRecord, PoolType};

// every parameter lives under its own store key
pub const LIQUIDITY_POOL_TYPES: Item<Vec<PoolType>> =
    Item::new(ParamKey::LiquidityPoolTypes.as_str());
pub const MIN_INIT_DEPOSIT_TO_POOL: Item<Int256> =
    Item::new(ParamKey::MinInitDepositToPool.as_str());
pub const INIT_POOL_COIN_MINT_AMOUNT: Item<Int256> =
    Item::new(ParamKey::InitPoolCoinMintAmount.as_str());
pub const SWAP_FEE_RATE: Item<SignedDecimal> = Item::new(ParamKey::SwapFeeRate.as_str());
pub const LIQUIDITY_POOL_CREATION_FEE: Item<Vec<Coin>> =
    Item::new(ParamKey::LiquidityPoolCreationFee.as_str());

pub const POOL_RECORDS: Item<Vec<PoolRecord>> = Item::new("pool_records");

pub fn load_params(storage: &dyn Storage) -> StdResult<Params> {
    Ok(Params::new(
        LIQUIDITY_POOL_TYPES.load(storage)?,
        MIN_INIT_DEPOSIT_TO_POOL.load(storage)?,
        INIT_POOL_COIN_MINT_AMOUNT.load(storage)?,
        SWAP_FEE_RATE.load(storage)?,
        LIQUIDITY_POOL_CREATION_FEE.load(storage)?,
    ))
}

pub fn save_params(storage: &mut dyn Storage, params: &Params) -> StdResult<()> {
    LIQUIDITY_POOL_TYPES.save(storage, &params.liquidity_pool_types)?;
    MIN_INIT_DEPOSIT_TO_POOL.save(storage, &params.min_init_deposit_to_pool)?;
    INIT_POOL_COIN_MINT_AMOUNT.save(storage, &params.init_pool_coin_mint_amount)?;
    SWAP_FEE_RATE.save(storage, &params.swap_fee_rate)?;
    LIQUIDITY_POOL_CREATION_FEE.save(storage, &params.liquidity_pool_creation_fee)
}

/// Writes a single, already validated, change under its key.
pub fn save_param(storage: &mut dyn Storage, change: &ParamChange) -> StdResult<()> {
    match change {
        ParamChange::LiquidityPoolTypes(v) => LIQUIDITY_POOL_TYPES.save(storage, v),
        ParamChange::MinInitDepositToPool(v) => MIN_INIT_DEPOSIT_TO_POOL.save(storage, v),
        ParamChange::InitPoolCoinMintAmount(v) => INIT_POOL_COIN_MINT_AMOUNT.save(storage, v),
        ParamChange::SwapFeeRate(v) => SWAP_FEE_RATE.save(storage, v),
        ParamChange::LiquidityPoolCreationFee(v) => LIQUIDITY_POOL_CREATION_FEE.save(storage, v),
    }
}

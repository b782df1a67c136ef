use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{coin, CanonicalAddr, Coin, Decimal, Int256, SignedDecimal};
use sha2::{Digest, Sha256};

use crate::{coins::validate_coins, error::ParamsError};

/// Lifespan of a cancel order, in batches.
pub const CANCEL_ORDER_LIFE_SPAN: i64 = 0;

/// Min number of reserve coins a pool may hold. Only 2 is allowed for now.
pub const MIN_RESERVE_COIN_NUM: u32 = 2;

/// Max number of reserve coins a pool may hold. Only 2 is allowed for now.
pub const MAX_RESERVE_COIN_NUM: u32 = 2;

/// Number of blocks in a batch.
pub const UNIT_BATCH_SIZE: u32 = 1;

/// Index of the only pool type allowed on this version.
pub const DEFAULT_POOL_TYPE_INDEX: u32 = 1;

pub const DEFAULT_POOL_TYPE_NAME: &str = "DefaultPoolType";

/// Swap type of the only available swap request.
pub const DEFAULT_SWAP_TYPE: u32 = 1;

pub const DEFAULT_MIN_INIT_DEPOSIT_TO_POOL: i128 = 1_000_000;

/// Also the lower bound accepted for `init_pool_coin_mint_amount`.
pub const DEFAULT_INIT_POOL_COIN_MINT_AMOUNT: i128 = 1_000_000;

/// 0.003
pub const DEFAULT_SWAP_FEE_RATE_PERMILLE: i64 = 3;

pub const DEFAULT_BOND_DENOM: &str = "stake";

pub const DEFAULT_LIQUIDITY_POOL_CREATION_FEE: u128 = 100_000_000;

/// Seed hashed into the address of the account collecting pool fees.
pub const FEE_POOL_SEED: &[u8] = b"LiquidityModuleFeePool";

/// Keys each parameter is registered under in the parameter store.
#[cw_serde]
#[derive(Copy, Eq, PartialOrd, Ord)]
pub enum ParamKey {
    LiquidityPoolTypes,
    MinInitDepositToPool,
    InitPoolCoinMintAmount,
    SwapFeeRate,
    LiquidityPoolCreationFee,
}

impl ParamKey {
    pub const ALL: [ParamKey; 5] = [
        ParamKey::LiquidityPoolTypes,
        ParamKey::MinInitDepositToPool,
        ParamKey::InitPoolCoinMintAmount,
        ParamKey::SwapFeeRate,
        ParamKey::LiquidityPoolCreationFee,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ParamKey::LiquidityPoolTypes => "LiquidityPoolTypes",
            ParamKey::MinInitDepositToPool => "MinInitDepositToPool",
            ParamKey::InitPoolCoinMintAmount => "InitPoolCoinMintAmount",
            ParamKey::SwapFeeRate => "SwapFeeRate",
            ParamKey::LiquidityPoolCreationFee => "LiquidityPoolCreationFee",
        }
    }

    pub const fn as_bytes(&self) -> &'static [u8] {
        self.as_str().as_bytes()
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template describing the reserve coin bounds of a pool.
#[cw_serde]
#[derive(Eq)]
pub struct PoolType {
    pub type_index: u32,
    pub name: String,
    pub min_reserve_coin_num: u32,
    pub max_reserve_coin_num: u32,
}

impl PoolType {
    pub fn default_pool_type() -> Self {
        PoolType {
            type_index: DEFAULT_POOL_TYPE_INDEX,
            name: DEFAULT_POOL_TYPE_NAME.to_string(),
            min_reserve_coin_num: MIN_RESERVE_COIN_NUM,
            max_reserve_coin_num: MAX_RESERVE_COIN_NUM,
        }
    }

    pub fn accepts_reserve_coin_num(&self, count: usize) -> bool {
        (self.min_reserve_coin_num as usize..=self.max_reserve_coin_num as usize).contains(&count)
    }
}

#[cw_serde]
pub struct Params {
    pub liquidity_pool_types: Vec<PoolType>,
    /// Minimum total deposit required to create a pool.
    pub min_init_deposit_to_pool: Int256,
    /// Pool coins minted to the creator of a pool.
    pub init_pool_coin_mint_amount: Int256,
    /// Fraction of the offered coin charged on every swap.
    pub swap_fee_rate: SignedDecimal,
    /// Fee paid to create a pool.
    pub liquidity_pool_creation_fee: Vec<Coin>,
}

impl Default for Params {
    fn default() -> Self {
        Self::default_params()
    }
}

impl Params {
    pub fn new(
        liquidity_pool_types: Vec<PoolType>,
        min_init_deposit_to_pool: Int256,
        init_pool_coin_mint_amount: Int256,
        swap_fee_rate: SignedDecimal,
        liquidity_pool_creation_fee: Vec<Coin>,
    ) -> Self {
        Params {
            liquidity_pool_types,
            min_init_deposit_to_pool,
            init_pool_coin_mint_amount,
            swap_fee_rate,
            liquidity_pool_creation_fee,
        }
    }

    pub fn default_params() -> Self {
        Params::new(
            vec![PoolType::default_pool_type()],
            Int256::from(DEFAULT_MIN_INIT_DEPOSIT_TO_POOL),
            Int256::from(DEFAULT_INIT_POOL_COIN_MINT_AMOUNT),
            SignedDecimal::permille(DEFAULT_SWAP_FEE_RATE_PERMILLE),
            vec![coin(DEFAULT_LIQUIDITY_POOL_CREATION_FEE, DEFAULT_BOND_DENOM)],
        )
    }

    /// Runs every field validator in key order and returns the first failure.
    pub fn validate(&self) -> Result<(), ParamsError> {
        validate_liquidity_pool_types(&self.liquidity_pool_types)?;
        validate_min_init_deposit_to_pool(&self.min_init_deposit_to_pool)?;
        validate_init_pool_coin_mint_amount(&self.init_pool_coin_mint_amount)?;
        validate_swap_fee_rate(&self.swap_fee_rate)?;
        validate_liquidity_pool_creation_fee(&self.liquidity_pool_creation_fee)?;
        Ok(())
    }

    /// Validates a single change and writes it. `self` is untouched on error.
    pub fn apply(&mut self, change: ParamChange) -> Result<(), ParamsError> {
        change.validate()?;

        match change {
            ParamChange::LiquidityPoolTypes(v) => self.liquidity_pool_types = v,
            ParamChange::MinInitDepositToPool(v) => self.min_init_deposit_to_pool = v,
            ParamChange::InitPoolCoinMintAmount(v) => self.init_pool_coin_mint_amount = v,
            ParamChange::SwapFeeRate(v) => self.swap_fee_rate = v,
            ParamChange::LiquidityPoolCreationFee(v) => self.liquidity_pool_creation_fee = v,
        }

        Ok(())
    }

    pub fn pool_type(&self, type_index: u32) -> Option<&PoolType> {
        self.liquidity_pool_types
            .iter()
            .find(|pool_type| pool_type.type_index == type_index)
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "liquidity_pool_types:")?;
        for pool_type in &self.liquidity_pool_types {
            writeln!(f, "- type_index: {}", pool_type.type_index)?;
            writeln!(f, "  name: {}", pool_type.name)?;
            writeln!(f, "  min_reserve_coin_num: {}", pool_type.min_reserve_coin_num)?;
            writeln!(f, "  max_reserve_coin_num: {}", pool_type.max_reserve_coin_num)?;
        }
        writeln!(f, "min_init_deposit_to_pool: \"{}\"", self.min_init_deposit_to_pool)?;
        writeln!(f, "init_pool_coin_mint_amount: \"{}\"", self.init_pool_coin_mint_amount)?;
        writeln!(f, "swap_fee_rate: \"{}\"", self.swap_fee_rate)?;
        writeln!(f, "liquidity_pool_creation_fee:")?;
        for fee in &self.liquidity_pool_creation_fee {
            writeln!(f, "- denom: {}", fee.denom)?;
            writeln!(f, "  amount: \"{}\"", fee.amount)?;
        }
        Ok(())
    }
}

/// A new value for exactly one parameter, as submitted by governance.
#[cw_serde]
pub enum ParamChange {
    LiquidityPoolTypes(Vec<PoolType>),
    MinInitDepositToPool(Int256),
    InitPoolCoinMintAmount(Int256),
    SwapFeeRate(SignedDecimal),
    LiquidityPoolCreationFee(Vec<Coin>),
}

impl ParamChange {
    pub fn key(&self) -> ParamKey {
        match self {
            ParamChange::LiquidityPoolTypes(_) => ParamKey::LiquidityPoolTypes,
            ParamChange::MinInitDepositToPool(_) => ParamKey::MinInitDepositToPool,
            ParamChange::InitPoolCoinMintAmount(_) => ParamKey::InitPoolCoinMintAmount,
            ParamChange::SwapFeeRate(_) => ParamKey::SwapFeeRate,
            ParamChange::LiquidityPoolCreationFee(_) => ParamKey::LiquidityPoolCreationFee,
        }
    }

    /// Runs the validator registered for this change's key.
    pub fn validate(&self) -> Result<(), ParamsError> {
        match self {
            ParamChange::LiquidityPoolTypes(v) => validate_liquidity_pool_types(v),
            ParamChange::MinInitDepositToPool(v) => validate_min_init_deposit_to_pool(v),
            ParamChange::InitPoolCoinMintAmount(v) => validate_init_pool_coin_mint_amount(v),
            ParamChange::SwapFeeRate(v) => validate_swap_fee_rate(v),
            ParamChange::LiquidityPoolCreationFee(v) => validate_liquidity_pool_creation_fee(v),
        }
    }
}

pub fn validate_liquidity_pool_types(pool_types: &[PoolType]) -> Result<(), ParamsError> {
    if pool_types.is_empty() {
        return Err(ParamsError::EmptyConfiguration);
    }

    for (position, pool_type) in pool_types.iter().enumerate() {
        let expected = position as u32 + 1;
        if pool_type.type_index != expected {
            return Err(ParamsError::IndexNotSorted {
                expected,
                found: pool_type.type_index,
            });
        }
    }

    ensure_default_pool_type_only(pool_types)
}

/// Current policy: exactly one pool type, identical to the default one.
fn ensure_default_pool_type_only(pool_types: &[PoolType]) -> Result<(), ParamsError> {
    let [pool_type] = pool_types else {
        return Err(ParamsError::UnsupportedCount {
            count: pool_types.len(),
        });
    };

    if *pool_type != PoolType::default_pool_type() {
        return Err(ParamsError::NotDefaultType);
    }

    Ok(())
}

pub fn validate_min_init_deposit_to_pool(amount: &Int256) -> Result<(), ParamsError> {
    if *amount <= Int256::zero() {
        return Err(ParamsError::NotPositive {
            field: ParamKey::MinInitDepositToPool.as_str(),
            value: *amount,
        });
    }

    Ok(())
}

pub fn validate_init_pool_coin_mint_amount(amount: &Int256) -> Result<(), ParamsError> {
    if *amount <= Int256::zero() {
        return Err(ParamsError::NotPositive {
            field: ParamKey::InitPoolCoinMintAmount.as_str(),
            value: *amount,
        });
    }

    let floor = Int256::from(DEFAULT_INIT_POOL_COIN_MINT_AMOUNT);
    if *amount < floor {
        return Err(ParamsError::BelowFloor {
            field: ParamKey::InitPoolCoinMintAmount.as_str(),
            floor,
            value: *amount,
        });
    }

    Ok(())
}

/// The rate must lie in `[0, 1]`.
pub fn validate_swap_fee_rate(rate: &SignedDecimal) -> Result<(), ParamsError> {
    if *rate < SignedDecimal::zero() {
        return Err(ParamsError::Negative(*rate));
    }
    if *rate > SignedDecimal::one() {
        return Err(ParamsError::TooLarge(*rate));
    }

    Ok(())
}

pub fn validate_liquidity_pool_creation_fee(fee: &[Coin]) -> Result<(), ParamsError> {
    validate_coins(fee)?;

    if fee.is_empty() {
        return Err(ParamsError::EmptyFee);
    }

    Ok(())
}

/// Canonical address of the account collecting pool fees: the first 20 bytes
/// of `sha256(FEE_POOL_SEED)`.
pub fn fee_pool_canonical_address() -> CanonicalAddr {
    let hash = Sha256::digest(FEE_POOL_SEED);
    CanonicalAddr::from(&hash[..20])
}

/// Bech32 rendering of [`fee_pool_canonical_address`] under `prefix`.
pub fn fee_pool_address(prefix: &str) -> Result<String, ParamsError> {
    let hrp = bech32::Hrp::parse(prefix).map_err(|e| ParamsError::Bech32(e.to_string()))?;

    bech32::encode::<bech32::Bech32>(hrp, fee_pool_canonical_address().as_slice())
        .map_err(|e| ParamsError::Bech32(e.to_string()))
}

// TODO: move into Params once governance can tune the max order ratio
pub fn max_order_ratio() -> Decimal {
    Decimal::percent(10)
}

use std::collections::BTreeSet;

use cosmwasm_schema::cw_serde;

use crate::{coins::validate_denom, error::ParamsError, params::Params};

/// A pool persisted in the module state.
#[cw_serde]
pub struct PoolRecord {
    pub pool_id: u64,
    pub pool_type_index: u32,
    /// Sorted denominations of the coins held by the pool.
    pub reserve_coin_denoms: Vec<String>,
    pub pool_coin_denom: String,
}

#[cw_serde]
pub struct GenesisState {
    pub params: Params,
    pub pool_records: Vec<PoolRecord>,
}

impl Default for GenesisState {
    fn default() -> Self {
        Self::default_genesis_state()
    }
}

impl GenesisState {
    pub fn new(params: Params, pool_records: Vec<PoolRecord>) -> Self {
        GenesisState {
            params,
            pool_records,
        }
    }

    pub fn default_genesis_state() -> Self {
        GenesisState::new(Params::default_params(), vec![])
    }
}

/// Validates the parameters first and, only once they hold, the pool records
/// against them. Used for both genesis import and export.
pub fn validate_genesis(state: &GenesisState) -> Result<(), ParamsError> {
    state.params.validate()?;

    let mut seen = BTreeSet::new();
    for record in &state.pool_records {
        validate_pool_record(&state.params, record)?;

        if !seen.insert(record.pool_id) {
            return Err(ParamsError::DuplicatePoolId(record.pool_id));
        }
    }

    Ok(())
}

fn validate_pool_record(params: &Params, record: &PoolRecord) -> Result<(), ParamsError> {
    if record.pool_id == 0 {
        return Err(ParamsError::InvalidPoolRecord {
            pool_id: record.pool_id,
            reason: "pool id must be positive".to_string(),
        });
    }

    let pool_type =
        params
            .pool_type(record.pool_type_index)
            .ok_or(ParamsError::UnknownPoolType {
                pool_id: record.pool_id,
                type_index: record.pool_type_index,
            })?;

    let count = record.reserve_coin_denoms.len();
    if !pool_type.accepts_reserve_coin_num(count) {
        return Err(ParamsError::InvalidReserveCoinNum {
            pool_id: record.pool_id,
            count,
            min: pool_type.min_reserve_coin_num,
            max: pool_type.max_reserve_coin_num,
        });
    }

    for denom in &record.reserve_coin_denoms {
        validate_denom(denom)?;
    }

    // strictly ascending also rules out a pool holding the same coin twice
    if record
        .reserve_coin_denoms
        .windows(2)
        .any(|pair| pair[0] >= pair[1])
    {
        return Err(ParamsError::InvalidPoolRecord {
            pool_id: record.pool_id,
            reason: "reserve coin denoms must be sorted and unique".to_string(),
        });
    }

    validate_denom(&record.pool_coin_denom)
}

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Decimal};
use cw_ownable::{cw_ownable_execute, cw_ownable_query};
use liquidity_utils::{GenesisState, ParamChange, Params, PoolRecord};

#[cw_serde]
pub struct InstantiateMsg {
    /// Account allowed to change parameters, usually the governance module
    pub owner: String,
    pub genesis: GenesisState,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Validates and stores every change, or none of them
    UpdateParams { changes: Vec<ParamChange> },
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Params)]
    Params {},
    #[returns(Vec<PoolRecord>)]
    PoolRecords {},
    /// Current state as a genesis, validated before it is returned
    #[returns(GenesisState)]
    ExportGenesis {},
    #[returns(Addr)]
    FeePoolAddress {},
    #[returns(Decimal)]
    MaxOrderRatio {},
}

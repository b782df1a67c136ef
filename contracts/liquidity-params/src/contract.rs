#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use liquidity_utils::validate_genesis;

use crate::{
    error::ContractError,
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    state::{save_params, POOL_RECORDS},
};

// version info for migration info
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // Nothing is stored unless the whole genesis is valid
    validate_genesis(&msg.genesis)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(&msg.owner))?;

    save_params(deps.storage, &msg.genesis.params)?;
    POOL_RECORDS.save(deps.storage, &msg.genesis.pool_records)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", msg.owner)
        .add_attribute(
            "pool_records",
            msg.genesis.pool_records.len().to_string(),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateParams { changes } => execute::update_params(deps, info, changes),
        ExecuteMsg::UpdateOwnership(action) => {
            let result =
                cw_ownable::update_ownership(deps, &env.block, &info.sender, action.clone())?;
            Ok(Response::default()
                .add_attribute("method", "update_ownership")
                .add_attribute("action", format!("{action:?}"))
                .add_attribute("result", format!("{result:?}")))
        }
    }
}

mod execute {
    use cosmwasm_std::{ensure, DepsMut, MessageInfo, Response};
    use itertools::Itertools;
    use liquidity_utils::ParamChange;

    use crate::{error::ContractError, state::save_param};

    pub fn update_params(
        deps: DepsMut,
        info: MessageInfo,
        changes: Vec<ParamChange>,
    ) -> Result<Response, ContractError> {
        cw_ownable::assert_owner(deps.storage, &info.sender)?;

        ensure!(!changes.is_empty(), ContractError::NoParamChanges);

        // Every change passes its key's validator before anything is written
        for change in &changes {
            change.validate()?;
        }

        for change in &changes {
            save_param(deps.storage, change)?;
        }

        Ok(Response::new()
            .add_attribute("method", "update_params")
            .add_attribute(
                "keys",
                changes.iter().map(|change| change.key()).join(","),
            ))
    }
}

mod query {
    use cosmwasm_std::{Addr, Deps, StdError, StdResult};
    use liquidity_utils::{params::fee_pool_canonical_address, validate_genesis, GenesisState};

    use crate::state::{load_params, POOL_RECORDS};

    pub fn export_genesis(deps: Deps) -> StdResult<GenesisState> {
        let genesis = GenesisState::new(
            load_params(deps.storage)?,
            POOL_RECORDS.load(deps.storage)?,
        );

        // Same check as on import
        validate_genesis(&genesis).map_err(|e| StdError::generic_err(e.to_string()))?;

        Ok(genesis)
    }

    pub fn fee_pool_address(deps: Deps) -> StdResult<Addr> {
        deps.api.addr_humanize(&fee_pool_canonical_address())
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Params {} => to_json_binary(&crate::state::load_params(deps.storage)?),
        QueryMsg::PoolRecords {} => to_json_binary(&POOL_RECORDS.load(deps.storage)?),
        QueryMsg::ExportGenesis {} => to_json_binary(&query::export_genesis(deps)?),
        QueryMsg::FeePoolAddress {} => to_json_binary(&query::fee_pool_address(deps)?),
        QueryMsg::MaxOrderRatio {} => {
            to_json_binary(&liquidity_utils::params::max_order_ratio())
        }
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
    }
}

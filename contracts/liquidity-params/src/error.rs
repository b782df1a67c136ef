use cosmwasm_std::StdError;
use cw_ownable::OwnershipError;
use liquidity_utils::ParamsError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error("No parameter changes were submitted")]
    NoParamChanges,
}

pub mod coins;
pub mod error;
pub mod genesis;
pub mod params;

pub use error::ParamsError;
pub use genesis::{validate_genesis, GenesisState, PoolRecord};
pub use params::{ParamChange, ParamKey, Params, PoolType};

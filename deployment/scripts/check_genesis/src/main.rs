use clap::{arg, command, Parser};
use config::Config as ConfigHelper;
use liquidity_utils::{params::fee_pool_address, validate_genesis, GenesisState};
use log::{error, info};
use serde::Deserialize;
use std::error::Error;
use std::fs;

#[derive(Debug, Clone, clap::ValueEnum, Default)]
pub enum Env {
    Testnet,
    Mainnet,
    #[default]
    Local,
}

impl Env {
    fn config_path(&self) -> &'static str {
        match self {
            Env::Testnet => "deployment/configs/testnet/config",
            Env::Mainnet => "deployment/configs/mainnet/config",
            Env::Local => "deployment/configs/local/config",
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Enviroment config to use
    #[arg(short, long, default_value = "local")]
    target_env: Env,
    /// Path to the genesis file holding the liquidity module state
    #[arg(short, long, default_value = "deployment/genesis/liquidity.json")]
    genesis_path: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckConfig {
    /// Prefix used to render the fee pool address
    pub bech32_prefix: String,
    #[serde(default)]
    pub print_params: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let config = get_config(&args.target_env)?;
    info!("Using {:?} config: {:?}", args.target_env, config);

    let genesis = get_genesis(&args.genesis_path)?;
    info!(
        "Loaded genesis from {} with {} pool records",
        args.genesis_path,
        genesis.pool_records.len()
    );

    let report = check(&genesis, &config).inspect_err(|e| error!("Invalid genesis: {e}"))?;
    println!("{report}");

    Ok(())
}

/// Environment config file, overridable through `CHECK_GENESIS_*` variables.
pub fn get_config(env: &Env) -> Result<CheckConfig, Box<dyn Error>> {
    ConfigHelper::builder()
        .add_source(config::File::with_name(env.config_path()))
        .add_source(config::Environment::with_prefix("CHECK_GENESIS"))
        .build()?
        .try_deserialize()
        .map_err(|e| e.into())
}

pub fn get_genesis(path: &str) -> Result<GenesisState, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str::<GenesisState>(&content)?)
}

/// Validates the genesis and builds the summary printed on success.
pub fn check(genesis: &GenesisState, config: &CheckConfig) -> Result<String, Box<dyn Error>> {
    validate_genesis(genesis)?;
    info!("Genesis is valid");

    let mut report = format!(
        "Genesis is valid\nfee pool address: {}\npool records: {}",
        fee_pool_address(&config.bech32_prefix)?,
        genesis.pool_records.len()
    );

    if config.print_params {
        report.push_str("\nparams:\n");
        report.push_str(&genesis.params.to_string());
    }

    Ok(report)
}

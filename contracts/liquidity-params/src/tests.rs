use std::str::FromStr;

use cosmwasm_std::{coin, Addr, Decimal, Int256, SignedDecimal};
use cw_multi_test::{error::AnyResult, App, AppResponse, ContractWrapper, Executor};
use cw_ownable::{Action, Ownership, OwnershipError};
use liquidity_utils::{GenesisState, ParamChange, Params, ParamsError, PoolRecord, PoolType};

use crate::{
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    ContractError,
};

struct LiquidityParamsTestSuite {
    app: App,
    owner: Addr,
    code_id: u64,
}

impl Default for LiquidityParamsTestSuite {
    fn default() -> Self {
        let mut app = App::default();
        let owner = app.api().addr_make("gov");

        let code = ContractWrapper::new(
            crate::contract::execute,
            crate::contract::instantiate,
            crate::contract::query,
        );
        let code_id = app.store_code(Box::new(code));

        Self {
            app,
            owner,
            code_id,
        }
    }
}

impl LiquidityParamsTestSuite {
    fn instantiate(&mut self, genesis: GenesisState) -> AnyResult<Addr> {
        self.app.instantiate_contract(
            self.code_id,
            self.owner.clone(),
            &InstantiateMsg {
                owner: self.owner.to_string(),
                genesis,
            },
            &[],
            "liquidity_params",
            None,
        )
    }

    fn update_params(
        &mut self,
        sender: Addr,
        addr: &Addr,
        changes: Vec<ParamChange>,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender,
            addr.clone(),
            &ExecuteMsg::UpdateParams { changes },
            &[],
        )
    }

    fn query_params(&self, addr: &Addr) -> Params {
        self.app
            .wrap()
            .query_wasm_smart(addr, &QueryMsg::Params {})
            .unwrap()
    }

    fn query_genesis(&self, addr: &Addr) -> GenesisState {
        self.app
            .wrap()
            .query_wasm_smart(addr, &QueryMsg::ExportGenesis {})
            .unwrap()
    }
}

fn genesis_with_pool() -> GenesisState {
    GenesisState::new(
        Params::default_params(),
        vec![PoolRecord {
            pool_id: 1,
            pool_type_index: 1,
            reserve_coin_denoms: vec!["stake".to_string(), "uatom".to_string()],
            pool_coin_denom: "pool1".to_string(),
        }],
    )
}

fn dec(value: &str) -> SignedDecimal {
    SignedDecimal::from_str(value).unwrap()
}

#[test]
fn instantiate_stores_genesis() {
    let mut suite = LiquidityParamsTestSuite::default();
    let genesis = genesis_with_pool();

    let addr = suite.instantiate(genesis.clone()).unwrap();

    assert_eq!(suite.query_params(&addr), Params::default_params());
    let records: Vec<PoolRecord> = suite
        .app
        .wrap()
        .query_wasm_smart(&addr, &QueryMsg::PoolRecords {})
        .unwrap();
    assert_eq!(records, genesis.pool_records);
    assert_eq!(suite.query_genesis(&addr), genesis);

    let ownership: Ownership<Addr> = suite
        .app
        .wrap()
        .query_wasm_smart(&addr, &QueryMsg::Ownership {})
        .unwrap();
    assert_eq!(ownership.owner, Some(suite.owner.clone()));
}

#[test]
fn instantiate_rejects_invalid_params() {
    let mut suite = LiquidityParamsTestSuite::default();

    let mut genesis = genesis_with_pool();
    genesis.params.swap_fee_rate = dec("-1");

    let err = suite.instantiate(genesis).unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        ContractError::Params(ParamsError::Negative(dec("-1"))).to_string()
    );
}

#[test]
fn instantiate_rejects_duplicated_pool_types() {
    let mut suite = LiquidityParamsTestSuite::default();

    let mut genesis = genesis_with_pool();
    genesis.params.liquidity_pool_types =
        vec![PoolType::default_pool_type(), PoolType::default_pool_type()];

    let err = suite.instantiate(genesis).unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        ParamsError::IndexNotSorted {
            expected: 2,
            found: 1
        }
        .to_string()
    );
}

#[test]
fn instantiate_rejects_invalid_pool_records() {
    let mut suite = LiquidityParamsTestSuite::default();

    let mut genesis = genesis_with_pool();
    genesis.pool_records[0].pool_type_index = 7;

    let err = suite.instantiate(genesis).unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        ParamsError::UnknownPoolType {
            pool_id: 1,
            type_index: 7
        }
        .to_string()
    );
}

#[test]
fn owner_updates_params() {
    let mut suite = LiquidityParamsTestSuite::default();
    let addr = suite.instantiate(genesis_with_pool()).unwrap();
    let owner = suite.owner.clone();

    let res = suite
        .update_params(
            owner,
            &addr,
            vec![
                ParamChange::SwapFeeRate(dec("1")),
                ParamChange::InitPoolCoinMintAmount(Int256::from(2_000_000i128)),
                ParamChange::LiquidityPoolCreationFee(vec![coin(5, "stake"), coin(5, "uatom")]),
            ],
        )
        .unwrap();

    let wasm = res.events.iter().find(|e| e.ty == "wasm").unwrap();
    assert!(wasm.attributes.iter().any(|attr| attr.key == "keys"
        && attr.value == "SwapFeeRate,InitPoolCoinMintAmount,LiquidityPoolCreationFee"));

    let params = suite.query_params(&addr);
    assert_eq!(params.swap_fee_rate, dec("1"));
    assert_eq!(params.init_pool_coin_mint_amount, Int256::from(2_000_000i128));
    assert_eq!(
        params.liquidity_pool_creation_fee,
        vec![coin(5, "stake"), coin(5, "uatom")]
    );
    assert_eq!(params.validate(), Ok(()));
}

#[test]
fn invalid_change_aborts_whole_update() {
    let mut suite = LiquidityParamsTestSuite::default();
    let addr = suite.instantiate(genesis_with_pool()).unwrap();
    let owner = suite.owner.clone();

    let err = suite
        .update_params(
            owner,
            &addr,
            vec![
                ParamChange::SwapFeeRate(dec("0.01")),
                ParamChange::InitPoolCoinMintAmount(Int256::from(999_999i128)),
            ],
        )
        .unwrap_err();

    assert_eq!(
        err.root_cause().to_string(),
        ParamsError::BelowFloor {
            field: "InitPoolCoinMintAmount",
            floor: Int256::from(1_000_000i128),
            value: Int256::from(999_999i128),
        }
        .to_string()
    );
    assert_eq!(suite.query_params(&addr), Params::default_params());
}

#[test]
fn update_rejects_each_invalid_field() {
    let mut suite = LiquidityParamsTestSuite::default();
    let addr = suite.instantiate(genesis_with_pool()).unwrap();
    let owner = suite.owner.clone();

    let cases = vec![
        (
            ParamChange::LiquidityPoolTypes(vec![]),
            ParamsError::EmptyConfiguration,
        ),
        (
            ParamChange::MinInitDepositToPool(Int256::zero()),
            ParamsError::NotPositive {
                field: "MinInitDepositToPool",
                value: Int256::zero(),
            },
        ),
        (
            ParamChange::SwapFeeRate(dec("1.000000000000000001")),
            ParamsError::TooLarge(dec("1.000000000000000001")),
        ),
        (
            ParamChange::LiquidityPoolCreationFee(vec![]),
            ParamsError::EmptyFee,
        ),
    ];

    for (change, expected) in cases {
        let err = suite
            .update_params(owner.clone(), &addr, vec![change])
            .unwrap_err();
        assert_eq!(err.root_cause().to_string(), expected.to_string());
    }

    assert_eq!(suite.query_params(&addr), Params::default_params());
}

#[test]
fn update_requires_changes() {
    let mut suite = LiquidityParamsTestSuite::default();
    let addr = suite.instantiate(genesis_with_pool()).unwrap();
    let owner = suite.owner.clone();

    let err = suite.update_params(owner, &addr, vec![]).unwrap_err();
    assert_eq!(err.root_cause().to_string(), ContractError::NoParamChanges.to_string());
}

#[test]
fn only_owner_updates_params() {
    let mut suite = LiquidityParamsTestSuite::default();
    let addr = suite.instantiate(genesis_with_pool()).unwrap();
    let stranger = suite.app.api().addr_make("stranger");

    let err = suite
        .update_params(
            stranger,
            &addr,
            vec![ParamChange::SwapFeeRate(dec("0.01"))],
        )
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), OwnershipError::NotOwner.to_string());
}

#[test]
fn transferred_ownership_moves_update_rights() {
    let mut suite = LiquidityParamsTestSuite::default();
    let addr = suite.instantiate(genesis_with_pool()).unwrap();
    let owner = suite.owner.clone();
    let new_owner = suite.app.api().addr_make("new_gov");

    suite
        .app
        .execute_contract(
            owner.clone(),
            addr.clone(),
            &ExecuteMsg::UpdateOwnership(Action::TransferOwnership {
                new_owner: new_owner.to_string(),
                expiry: None,
            }),
            &[],
        )
        .unwrap();
    suite
        .app
        .execute_contract(
            new_owner.clone(),
            addr.clone(),
            &ExecuteMsg::UpdateOwnership(Action::AcceptOwnership),
            &[],
        )
        .unwrap();

    suite
        .update_params(new_owner, &addr, vec![ParamChange::SwapFeeRate(dec("0"))])
        .unwrap();
    assert_eq!(suite.query_params(&addr).swap_fee_rate, dec("0"));

    let err = suite
        .update_params(owner, &addr, vec![ParamChange::SwapFeeRate(dec("0.1"))])
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), OwnershipError::NotOwner.to_string());
}

#[test]
fn exported_genesis_reimports() {
    let mut suite = LiquidityParamsTestSuite::default();
    let addr = suite.instantiate(genesis_with_pool()).unwrap();
    let owner = suite.owner.clone();

    suite
        .update_params(
            owner,
            &addr,
            vec![ParamChange::MinInitDepositToPool(Int256::from(42i128))],
        )
        .unwrap();

    let exported = suite.query_genesis(&addr);
    assert_eq!(exported.params.min_init_deposit_to_pool, Int256::from(42i128));

    let reimported = suite.instantiate(exported.clone()).unwrap();
    assert_eq!(suite.query_genesis(&reimported), exported);
}

#[test]
fn derived_values() {
    let mut suite = LiquidityParamsTestSuite::default();
    let addr = suite.instantiate(GenesisState::default_genesis_state()).unwrap();

    let fee_pool: Addr = suite
        .app
        .wrap()
        .query_wasm_smart(&addr, &QueryMsg::FeePoolAddress {})
        .unwrap();
    assert_eq!(
        fee_pool.as_str(),
        "cosmwasm18l9ktac2vf2qyf8a8hjahh47995ymknz6pr7sp"
    );

    let ratio: Decimal = suite
        .app
        .wrap()
        .query_wasm_smart(&addr, &QueryMsg::MaxOrderRatio {})
        .unwrap();
    assert_eq!(ratio, Decimal::percent(10));
}

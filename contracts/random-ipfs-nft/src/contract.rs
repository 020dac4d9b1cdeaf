use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use random_ipfs_nft_common::types::Breed;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{MintState, NftConfig, CONFIG, INITIALIZED, MINT_STATE, TOKEN_URIS};

const CONTRACT_NAME: &str = "crates.io:random-ipfs-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.mint_fee.is_zero() {
        return Err(ContractError::InvalidMintFee);
    }
    execute::validate_token_uris(&msg.token_uris, Breed::COUNT)?;
    execute::validate_key_hash(&msg.key_hash)?;

    let config = NftConfig {
        owner: info.sender.clone(),
        vrf_coordinator: deps.api.addr_validate(&msg.vrf_coordinator)?,
        subscription_id: msg.subscription_id,
        key_hash: msg.key_hash,
        callback_gas_limit: msg.callback_gas_limit,
        mint_fee: msg.mint_fee,
        fee_denom: msg.fee_denom,
    };
    CONFIG.save(deps.storage, &config)?;
    TOKEN_URIS.save(deps.storage, &msg.token_uris)?;

    let mint_state = MintState {
        token_counter: 0,
        next_request_id: 1,
        collected_fees: Uint128::zero(),
    };
    MINT_STATE.save(deps.storage, &mint_state)?;
    INITIALIZED.save(deps.storage, &true)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "random-ipfs-nft")
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("mint_fee", config.mint_fee.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RequestNft {} => execute::request_nft(deps, env, info),
        ExecuteMsg::RawFulfillRandomWords {
            request_id,
            random_words,
        } => execute::raw_fulfill_random_words(deps, env, info, request_id, random_words),
        ExecuteMsg::Withdraw {} => execute::withdraw(deps, env, info),
        ExecuteMsg::UpdateMintFee { mint_fee } => {
            execute::update_mint_fee(deps, env, info, mint_fee)
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::MintFee {} => query::query_mint_fee(deps),
        QueryMsg::TokenUris { index } => query::query_token_uris(deps, index),
        QueryMsg::Initialized {} => query::query_initialized(deps),
        QueryMsg::TokenCounter {} => query::query_token_counter(deps),
        QueryMsg::MintState {} => query::query_mint_state(deps),
        QueryMsg::TokenUri { token_id } => query::query_token_uri(deps, token_id),
        QueryMsg::NftInfo { token_id } => query::query_nft_info(deps, token_id),
        QueryMsg::OwnerOf { token_id } => query::query_owner_of(deps, token_id),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => query::query_tokens(deps, owner, start_after, limit),
        QueryMsg::PendingRequest { request_id } => query::query_pending_request(deps, request_id),
        QueryMsg::ChanceArray {} => query::query_chance_array(),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

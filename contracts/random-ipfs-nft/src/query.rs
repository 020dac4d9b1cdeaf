use cosmwasm_std::{coin, to_json_binary, Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;
use random_ipfs_nft_common::rarity::CHANCE_ARRAY;

use crate::msg::{OwnerOfResponse, TokensResponse};
use crate::state::{
    TokenInfo, CONFIG, INITIALIZED, MINT_STATE, OWNER_TOKENS, PENDING_REQUESTS, TOKENS,
    TOKEN_URIS,
};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_mint_fee(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&coin(config.mint_fee.u128(), config.fee_denom))
}

pub fn query_token_uris(deps: Deps, index: u64) -> StdResult<Binary> {
    let uris = TOKEN_URIS.load(deps.storage)?;
    let uri = usize::try_from(index)
        .ok()
        .and_then(|i| uris.get(i))
        .ok_or_else(|| StdError::generic_err(format!("token URI index {index} out of range")))?;
    to_json_binary(uri)
}

pub fn query_initialized(deps: Deps) -> StdResult<Binary> {
    let initialized = INITIALIZED.may_load(deps.storage)?.unwrap_or(false);
    to_json_binary(&initialized)
}

pub fn query_token_counter(deps: Deps) -> StdResult<Binary> {
    let state = MINT_STATE.load(deps.storage)?;
    to_json_binary(&state.token_counter)
}

pub fn query_mint_state(deps: Deps) -> StdResult<Binary> {
    let state = MINT_STATE.load(deps.storage)?;
    to_json_binary(&state)
}

fn load_token(deps: Deps, token_id: u64) -> StdResult<TokenInfo> {
    TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::generic_err(format!("token {token_id} not found")))
}

pub fn query_token_uri(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let token = load_token(deps, token_id)?;
    to_json_binary(&token.token_uri)
}

pub fn query_nft_info(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let token = load_token(deps, token_id)?;
    to_json_binary(&token)
}

pub fn query_owner_of(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let token = load_token(deps, token_id)?;
    to_json_binary(&OwnerOfResponse {
        owner: token.owner.to_string(),
    })
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(30).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens: Vec<u64> = OWNER_TOKENS
        .prefix(&owner)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<_>>()?;

    to_json_binary(&TokensResponse { tokens })
}

pub fn query_pending_request(deps: Deps, request_id: u64) -> StdResult<Binary> {
    let request = PENDING_REQUESTS.may_load(deps.storage, request_id)?;
    to_json_binary(&request)
}

pub fn query_chance_array() -> StdResult<Binary> {
    to_json_binary(&CHANCE_ARRAY.to_vec())
}

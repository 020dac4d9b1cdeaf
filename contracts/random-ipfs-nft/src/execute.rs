use cosmwasm_std::{
    coins, to_json_binary, BankMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg,
};
use random_ipfs_nft_common::rarity::{breed_from_modded_rng, modded_rng};
use random_ipfs_nft_common::types::Breed;
use random_ipfs_nft_common::vrf::VrfCoordinatorExecuteMsg;

use crate::error::ContractError;
use crate::state::{
    PendingRequest, TokenInfo, CONFIG, MINT_STATE, NUM_WORDS, OWNER_TOKENS, PENDING_REQUESTS,
    REQUEST_CONFIRMATIONS, TOKENS, TOKEN_URIS, TOKEN_URI_PREFIX,
};

/// Validate the per-breed URI table: one entry per breed, all on IPFS.
pub fn validate_token_uris(uris: &[String], expected: usize) -> Result<(), ContractError> {
    if uris.len() != expected {
        return Err(ContractError::InvalidTokenUriCount {
            expected,
            got: uris.len(),
        });
    }
    for (index, uri) in uris.iter().enumerate() {
        if !uri.starts_with(TOKEN_URI_PREFIX) {
            return Err(ContractError::InvalidTokenUri {
                index,
                prefix: TOKEN_URI_PREFIX.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_key_hash(key_hash: &str) -> Result<(), ContractError> {
    let bytes = hex::decode(key_hash).map_err(|_| ContractError::InvalidHex {
        field: "key_hash".to_string(),
    })?;
    if bytes.len() != 32 {
        return Err(ContractError::InvalidKeyHashLength { got: bytes.len() });
    }
    Ok(())
}

/// Accept a paid mint request and forward a randomness request to the
/// coordinator. The token itself is minted in `raw_fulfill_random_words`.
pub fn request_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let paid = info
        .funds
        .iter()
        .find(|c| c.denom == config.fee_denom)
        .map(|c| c.amount)
        .unwrap_or(Uint128::zero());

    if paid < config.mint_fee {
        return Err(ContractError::NeedMoreFunds {
            sent: paid.to_string(),
            required: config.mint_fee.to_string(),
            denom: config.fee_denom,
        });
    }

    let mut state = MINT_STATE.load(deps.storage)?;
    let request_id = state.next_request_id;
    state.next_request_id += 1;
    state.collected_fees = state.collected_fees.checked_add(paid)?;
    MINT_STATE.save(deps.storage, &state)?;

    let request = PendingRequest {
        request_id,
        requester: info.sender.clone(),
        paid,
        requested_at: env.block.time,
    };
    PENDING_REQUESTS.save(deps.storage, request_id, &request)?;

    let vrf_request = WasmMsg::Execute {
        contract_addr: config.vrf_coordinator.to_string(),
        msg: to_json_binary(&VrfCoordinatorExecuteMsg::RequestRandomWords {
            request_id,
            key_hash: config.key_hash,
            sub_id: config.subscription_id,
            request_confirmations: REQUEST_CONFIRMATIONS,
            callback_gas_limit: config.callback_gas_limit,
            num_words: NUM_WORDS,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(vrf_request)
        .add_attribute("action", "request_nft")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("requester", info.sender.to_string())
        .add_event(
            Event::new("ipfs_nft_requested")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("requester", info.sender.to_string())
                .add_attribute("paid", paid.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Mint the token for a pending request. VRF coordinator only.
///
/// 1. Resolve the requester from the pending request
/// 2. Reduce `random_words[0]` into [0, 100) and pick the breed
/// 3. Mint token `token_counter` with the breed's URI, bump the counter
pub fn raw_fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint128>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.vrf_coordinator {
        return Err(ContractError::OnlyCoordinatorCanFulfill {
            coordinator: config.vrf_coordinator.to_string(),
            sender: info.sender.to_string(),
        });
    }

    let request = PENDING_REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::RequestNotFound { request_id })?;

    let word = random_words
        .first()
        .copied()
        .ok_or(ContractError::NoRandomWords { request_id })?;

    let modded = modded_rng(word);
    let breed = breed_from_modded_rng(modded)?;
    let uris = TOKEN_URIS.load(deps.storage)?;
    let token_uri = uris
        .get(breed.index())
        .cloned()
        .ok_or(ContractError::InvalidTokenUriCount {
            expected: Breed::COUNT,
            got: uris.len(),
        })?;

    let mut state = MINT_STATE.load(deps.storage)?;
    let token_id = state.token_counter;
    state.token_counter += 1;
    MINT_STATE.save(deps.storage, &state)?;

    let token = TokenInfo {
        token_id,
        owner: request.requester.clone(),
        breed,
        token_uri: token_uri.clone(),
        minted_at: env.block.time,
    };
    TOKENS.save(deps.storage, token_id, &token)?;
    OWNER_TOKENS.save(deps.storage, (&request.requester, token_id), &())?;
    PENDING_REQUESTS.remove(deps.storage, request_id);

    Ok(Response::new()
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("token_id", token_id.to_string())
        .add_event(
            Event::new("ipfs_nft_minted")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("token_id", token_id.to_string())
                .add_attribute("breed", breed.as_str())
                .add_attribute("minter", request.requester.to_string())
                .add_attribute("token_uri", token_uri)
                .add_attribute("modded_rng", modded.to_string()),
        ))
}

/// Send all collected fees to the owner. Owner only.
pub fn withdraw(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: "only owner can withdraw".to_string(),
        });
    }

    let mut state = MINT_STATE.load(deps.storage)?;
    if state.collected_fees.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }
    let amount = state.collected_fees;
    state.collected_fees = Uint128::zero();
    MINT_STATE.save(deps.storage, &state)?;

    let send_msg = BankMsg::Send {
        to_address: config.owner.to_string(),
        amount: coins(amount.u128(), &config.fee_denom),
    };

    Ok(Response::new()
        .add_message(send_msg)
        .add_attribute("action", "withdraw")
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("ipfs_nft_fees_withdrawn")
                .add_attribute("to", config.owner.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("denom", config.fee_denom),
        ))
}

/// Update the mint fee. Owner only.
pub fn update_mint_fee(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    mint_fee: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: "only owner can update the mint fee".to_string(),
        });
    }
    if mint_fee.is_zero() {
        return Err(ContractError::InvalidMintFee);
    }

    let old_fee = config.mint_fee;
    config.mint_fee = mint_fee;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_mint_fee")
        .add_attribute("old_fee", old_fee.to_string())
        .add_attribute("new_fee", mint_fee.to_string()))
}

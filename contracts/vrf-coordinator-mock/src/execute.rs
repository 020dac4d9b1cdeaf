use cosmwasm_std::{
    to_json_binary, Deps, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg,
};
use random_ipfs_nft_common::vrf::VrfConsumerExecuteMsg;

use crate::error::ContractError;
use crate::msg::RequestParams;
use crate::randomness::{
    derive_random_words, fulfillment_payment, MAX_NUM_WORDS, MAX_REQUEST_CONFIRMATIONS,
};
use crate::state::{PendingRequest, Subscription, CONFIG, NEXT_SUB_ID, REQUESTS, SUBSCRIPTIONS};

pub fn create_subscription(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let sub_id = NEXT_SUB_ID.load(deps.storage)?;
    NEXT_SUB_ID.save(deps.storage, &(sub_id + 1))?;

    let sub = Subscription {
        id: sub_id,
        owner: info.sender.clone(),
        balance: Uint128::zero(),
        consumers: vec![],
    };
    SUBSCRIPTIONS.save(deps.storage, sub_id, &sub)?;

    Ok(Response::new()
        .add_attribute("action", "create_subscription")
        .add_attribute("sub_id", sub_id.to_string())
        .set_data(to_json_binary(&sub_id)?)
        .add_event(
            Event::new("vrf_subscription_created")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("owner", info.sender.to_string()),
        ))
}

pub fn fund_subscription(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    sub_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let mut sub = SUBSCRIPTIONS
        .may_load(deps.storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription { sub_id })?;
    let old_balance = sub.balance;
    sub.balance = sub.balance.checked_add(amount)?;
    SUBSCRIPTIONS.save(deps.storage, sub_id, &sub)?;

    Ok(Response::new()
        .add_attribute("action", "fund_subscription")
        .add_attribute("sub_id", sub_id.to_string())
        .add_event(
            Event::new("vrf_subscription_funded")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("old_balance", old_balance.to_string())
                .add_attribute("new_balance", sub.balance.to_string()),
        ))
}

pub fn add_consumer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    sub_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    let mut sub = load_owned_subscription(deps.as_ref(), &info, sub_id)?;
    let consumer_addr = deps.api.addr_validate(&consumer)?;

    // Adding twice is a no-op
    if !sub.consumers.contains(&consumer_addr) {
        sub.consumers.push(consumer_addr);
        SUBSCRIPTIONS.save(deps.storage, sub_id, &sub)?;
    }

    Ok(Response::new()
        .add_attribute("action", "add_consumer")
        .add_attribute("sub_id", sub_id.to_string())
        .add_attribute("consumer", consumer))
}

pub fn remove_consumer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    sub_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    let mut sub = load_owned_subscription(deps.as_ref(), &info, sub_id)?;
    let consumer_addr = deps.api.addr_validate(&consumer)?;

    if !sub.consumers.contains(&consumer_addr) {
        return Err(ContractError::InvalidConsumer { sub_id, consumer });
    }
    sub.consumers.retain(|c| *c != consumer_addr);
    SUBSCRIPTIONS.save(deps.storage, sub_id, &sub)?;

    Ok(Response::new()
        .add_attribute("action", "remove_consumer")
        .add_attribute("sub_id", sub_id.to_string())
        .add_attribute("consumer", consumer))
}

/// Register a randomness request from a consumer contract.
///
/// The request stays pending until someone calls one of the fulfill entry
/// points with the same `(consumer, request_id)` pair.
pub fn request_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: RequestParams,
) -> Result<Response, ContractError> {
    let RequestParams {
        request_id,
        key_hash,
        sub_id,
        request_confirmations,
        callback_gas_limit,
        num_words,
    } = params;

    let sub = SUBSCRIPTIONS
        .may_load(deps.storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription { sub_id })?;
    if !sub.consumers.contains(&info.sender) {
        return Err(ContractError::InvalidConsumer {
            sub_id,
            consumer: info.sender.to_string(),
        });
    }

    if num_words == 0 {
        return Err(ContractError::NoWordsRequested);
    }
    if num_words > MAX_NUM_WORDS {
        return Err(ContractError::NumWordsTooBig {
            got: num_words,
            max: MAX_NUM_WORDS,
        });
    }
    if request_confirmations > MAX_REQUEST_CONFIRMATIONS {
        return Err(ContractError::InvalidRequestConfirmations {
            got: request_confirmations,
            max: MAX_REQUEST_CONFIRMATIONS,
        });
    }

    let key_hash_bytes = hex::decode(&key_hash).map_err(|_| ContractError::InvalidHex {
        field: "key_hash".to_string(),
    })?;
    if key_hash_bytes.len() != 32 {
        return Err(ContractError::InvalidHex {
            field: "key_hash".to_string(),
        });
    }

    if REQUESTS.has(deps.storage, (&info.sender, request_id)) {
        return Err(ContractError::DuplicateRequest {
            request_id,
            consumer: info.sender.to_string(),
        });
    }

    let request = PendingRequest {
        request_id,
        consumer: info.sender.clone(),
        sub_id,
        key_hash: key_hash.clone(),
        request_confirmations,
        callback_gas_limit,
        num_words,
        requested_at_height: env.block.height,
    };
    REQUESTS.save(deps.storage, (&info.sender, request_id), &request)?;

    Ok(Response::new()
        .add_attribute("action", "request_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("consumer", info.sender.to_string())
        .add_event(
            Event::new("vrf_random_words_requested")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("consumer", info.sender.to_string())
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("key_hash", key_hash)
                .add_attribute("num_words", num_words.to_string())
                .add_attribute("callback_gas_limit", callback_gas_limit.to_string()),
        ))
}

/// Fulfill a pending request and call back into the consumer.
///
/// `words` overrides the derived randomness when present. The subscription is
/// charged `base_fee + gas_price * callback_gas_limit`; if the consumer's
/// callback fails the whole transaction, including the charge, is reverted.
pub fn fulfill_random_words(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    request_id: u64,
    consumer: String,
    words: Option<Vec<Uint128>>,
) -> Result<Response, ContractError> {
    let consumer_addr = deps.api.addr_validate(&consumer)?;
    let request = REQUESTS
        .may_load(deps.storage, (&consumer_addr, request_id))?
        .ok_or_else(|| ContractError::NonexistentRequest {
            request_id,
            consumer: consumer.clone(),
        })?;

    let random_words = match words {
        Some(words) => {
            if words.len() != request.num_words as usize {
                return Err(ContractError::WordCountMismatch {
                    got: words.len(),
                    expected: request.num_words,
                });
            }
            words
        }
        None => derive_random_words(consumer_addr.as_str(), request_id, request.num_words),
    };

    let config = CONFIG.load(deps.storage)?;
    let payment =
        fulfillment_payment(config.base_fee, config.gas_price, request.callback_gas_limit)?;

    let mut sub = SUBSCRIPTIONS
        .may_load(deps.storage, request.sub_id)?
        .ok_or(ContractError::InvalidSubscription {
            sub_id: request.sub_id,
        })?;
    if sub.balance < payment {
        return Err(ContractError::InsufficientBalance {
            needed: payment.to_string(),
            available: sub.balance.to_string(),
        });
    }
    sub.balance -= payment;
    SUBSCRIPTIONS.save(deps.storage, sub.id, &sub)?;

    REQUESTS.remove(deps.storage, (&consumer_addr, request_id));

    let callback = WasmMsg::Execute {
        contract_addr: consumer_addr.to_string(),
        msg: to_json_binary(&VrfConsumerExecuteMsg::RawFulfillRandomWords {
            request_id,
            random_words,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(callback)
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("consumer", consumer.clone())
        .add_event(
            Event::new("vrf_random_words_fulfilled")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("consumer", consumer)
                .add_attribute("sub_id", sub.id.to_string())
                .add_attribute("payment", payment.to_string())
                .add_attribute("height", env.block.height.to_string()),
        ))
}

fn load_owned_subscription(
    deps: Deps,
    info: &MessageInfo,
    sub_id: u64,
) -> Result<Subscription, ContractError> {
    let sub = SUBSCRIPTIONS
        .may_load(deps.storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription { sub_id })?;
    if sub.owner != info.sender {
        return Err(ContractError::Unauthorized {
            reason: "only the subscription owner can manage consumers".to_string(),
        });
    }
    Ok(sub)
}

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::{CoordinatorConfig, PendingRequest, Subscription};

#[cw_serde]
pub struct InstantiateMsg {
    pub base_fee: Uint128,
    pub gas_price: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Open a new subscription owned by the sender.
    CreateSubscription {},
    /// Credit a subscription. Mock accounting, no tokens move.
    FundSubscription { sub_id: u64, amount: Uint128 },
    /// Allow a contract to request randomness against a subscription (owner only).
    AddConsumer { sub_id: u64, consumer: String },
    /// Revoke a consumer (owner only).
    RemoveConsumer { sub_id: u64, consumer: String },
    /// Register a randomness request. Called by consumers; same shape as
    /// `VrfCoordinatorExecuteMsg::RequestRandomWords`.
    RequestRandomWords {
        request_id: u64,
        key_hash: String,
        sub_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },
    /// Fulfill a pending request with derived words. Anyone can call.
    FulfillRandomWords { request_id: u64, consumer: String },
    /// Fulfill a pending request with caller-chosen words.
    FulfillRandomWordsWithOverride {
        request_id: u64,
        consumer: String,
        words: Vec<Uint128>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CoordinatorConfig)]
    Config {},

    #[returns(Option<Subscription>)]
    Subscription { sub_id: u64 },

    #[returns(Option<PendingRequest>)]
    Request { consumer: String, request_id: u64 },
}

/// Parameters of a `RequestRandomWords` call.
pub struct RequestParams {
    pub request_id: u64,
    pub key_hash: String,
    pub sub_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<CoordinatorConfig> = Item::new("config");
pub const NEXT_SUB_ID: Item<u64> = Item::new("next_sub_id");
pub const SUBSCRIPTIONS: Map<u64, Subscription> = Map::new("subscriptions");
/// Pending requests keyed by (consumer, consumer-chosen request id)
pub const REQUESTS: Map<(&Addr, u64), PendingRequest> = Map::new("requests");

#[cw_serde]
pub struct CoordinatorConfig {
    pub admin: Addr,
    /// Flat fee charged per fulfillment
    pub base_fee: Uint128,
    /// Fee per unit of callback gas limit
    pub gas_price: Uint128,
}

#[cw_serde]
pub struct Subscription {
    pub id: u64,
    pub owner: Addr,
    pub balance: Uint128,
    pub consumers: Vec<Addr>,
}

#[cw_serde]
pub struct PendingRequest {
    pub request_id: u64,
    pub consumer: Addr,
    pub sub_id: u64,
    pub key_hash: String,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub requested_at_height: u64,
}

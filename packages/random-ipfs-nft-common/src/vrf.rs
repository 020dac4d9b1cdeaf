//! Wire messages shared by a randomness consumer and the VRF coordinator.
//!
//! The consumer picks its own `request_id` and the coordinator keys pending
//! requests by `(consumer, request_id)`, so no reply parsing is needed to
//! correlate the callback.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Messages a consumer sends to the coordinator.
#[cw_serde]
pub enum VrfCoordinatorExecuteMsg {
    RequestRandomWords {
        request_id: u64,
        /// Gas lane, hex-encoded 32 bytes
        key_hash: String,
        sub_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },
}

/// Callback the coordinator delivers to the consumer.
#[cw_serde]
pub enum VrfConsumerExecuteMsg {
    RawFulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint128>,
    },
}

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use random_ipfs_nft_common::types::Breed;

pub const CONFIG: Item<NftConfig> = Item::new("config");
pub const MINT_STATE: Item<MintState> = Item::new("mint_state");
/// Set once at instantiation, never cleared
pub const INITIALIZED: Item<bool> = Item::new("initialized");
/// One URI per breed, indexed by `Breed::index`
pub const TOKEN_URIS: Item<Vec<String>> = Item::new("token_uris");
pub const PENDING_REQUESTS: Map<u64, PendingRequest> = Map::new("pending_requests");
pub const TOKENS: Map<u64, TokenInfo> = Map::new("tokens");
/// Owner index: (owner, token_id) -> ()
pub const OWNER_TOKENS: Map<(&Addr, u64), ()> = Map::new("owner_tokens");

/// Number of random words requested per mint
pub const NUM_WORDS: u32 = 1;
/// Block confirmations asked from the coordinator
pub const REQUEST_CONFIRMATIONS: u16 = 3;
/// Scheme every token URI must use
pub const TOKEN_URI_PREFIX: &str = "ipfs://";

#[cw_serde]
pub struct NftConfig {
    pub owner: Addr,
    pub vrf_coordinator: Addr,
    pub subscription_id: u64,
    /// Gas lane, hex-encoded 32 bytes
    pub key_hash: String,
    pub callback_gas_limit: u32,
    pub mint_fee: Uint128,
    pub fee_denom: String,
}

#[cw_serde]
pub struct MintState {
    /// Id of the next token to mint; equals the number of tokens minted
    pub token_counter: u64,
    pub next_request_id: u64,
    /// Fees received and not yet withdrawn
    pub collected_fees: Uint128,
}

#[cw_serde]
pub struct PendingRequest {
    pub request_id: u64,
    pub requester: Addr,
    pub paid: Uint128,
    pub requested_at: Timestamp,
}

#[cw_serde]
pub struct TokenInfo {
    pub token_id: u64,
    pub owner: Addr,
    pub breed: Breed,
    pub token_uri: String,
    pub minted_at: Timestamp,
}

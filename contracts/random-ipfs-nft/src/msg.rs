use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};

use crate::state::{MintState, NftConfig, PendingRequest, TokenInfo};

#[cw_serde]
pub struct InstantiateMsg {
    pub vrf_coordinator: String,
    pub subscription_id: u64,
    /// Hex-encoded gas lane key hash (32 bytes = 64 hex chars)
    pub key_hash: String,
    pub callback_gas_limit: u32,
    pub mint_fee: Uint128,
    pub fee_denom: String,
    /// One `ipfs://` URI per breed: pug, shiba inu, st bernard
    pub token_uris: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pay the mint fee and ask the coordinator for randomness.
    RequestNft {},
    /// Randomness callback. VRF coordinator only.
    RawFulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint128>,
    },
    /// Send collected mint fees to the owner.
    Withdraw {},
    /// Change the mint fee. Owner only.
    UpdateMintFee { mint_fee: Uint128 },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(NftConfig)]
    Config {},
    #[returns(Coin)]
    MintFee {},
    #[returns(String)]
    TokenUris { index: u64 },
    #[returns(bool)]
    Initialized {},
    #[returns(u64)]
    TokenCounter {},
    #[returns(MintState)]
    MintState {},
    #[returns(String)]
    TokenUri { token_id: u64 },
    #[returns(TokenInfo)]
    NftInfo { token_id: u64 },
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(Option<PendingRequest>)]
    PendingRequest { request_id: u64 },
    #[returns(Vec<u64>)]
    ChanceArray {},
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u64>,
}

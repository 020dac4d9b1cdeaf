use cosmwasm_std::{OverflowError, StdError};
use random_ipfs_nft_common::rarity::RarityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Rarity(#[from] RarityError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("only the VRF coordinator {coordinator} can fulfill, got {sender}")]
    OnlyCoordinatorCanFulfill { coordinator: String, sender: String },

    #[error("insufficient payment: sent {sent}{denom}, mint fee is {required}{denom}")]
    NeedMoreFunds {
        sent: String,
        required: String,
        denom: String,
    },

    #[error("mint fee must be greater than zero")]
    InvalidMintFee,

    #[error("expected {expected} token URIs, got {got}")]
    InvalidTokenUriCount { expected: usize, got: usize },

    #[error("token URI at index {index} must start with {prefix}")]
    InvalidTokenUri { index: usize, prefix: String },

    #[error("invalid hex: {field}")]
    InvalidHex { field: String },

    #[error("key hash must be 32 bytes, got {got}")]
    InvalidKeyHashLength { got: usize },

    #[error("mint request {request_id} not found")]
    RequestNotFound { request_id: u64 },

    #[error("fulfillment for request {request_id} carried no random words")]
    NoRandomWords { request_id: u64 },

    #[error("no fees to withdraw")]
    NothingToWithdraw,
}

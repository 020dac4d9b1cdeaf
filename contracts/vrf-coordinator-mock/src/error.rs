use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("subscription {sub_id} does not exist")]
    InvalidSubscription { sub_id: u64 },

    #[error("{consumer} is not a consumer of subscription {sub_id}")]
    InvalidConsumer { sub_id: u64, consumer: String },

    #[error("request {request_id} from {consumer} already pending")]
    DuplicateRequest { request_id: u64, consumer: String },

    #[error("no pending request {request_id} from {consumer}")]
    NonexistentRequest { request_id: u64, consumer: String },

    #[error("num_words {got} exceeds max {max}")]
    NumWordsTooBig { got: u32, max: u32 },

    #[error("at least one random word must be requested")]
    NoWordsRequested,

    #[error("request_confirmations {got} exceeds max {max}")]
    InvalidRequestConfirmations { got: u16, max: u16 },

    #[error("override supplied {got} words, request expects {expected}")]
    WordCountMismatch { got: usize, expected: u32 },

    #[error("insufficient subscription balance: need {needed}, have {available}")]
    InsufficientBalance { needed: String, available: String },

    #[error("amount must be greater than zero")]
    ZeroAmount,

    #[error("invalid hex input: {field}")]
    InvalidHex { field: String },
}

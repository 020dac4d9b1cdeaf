use cosmwasm_std::{OverflowError, Uint128};
use sha2::{Digest, Sha256};

/// Largest number of words a single request may ask for.
pub const MAX_NUM_WORDS: u32 = 500;

/// Largest number of block confirmations a request may ask for.
pub const MAX_REQUEST_CONFIRMATIONS: u16 = 200;

/// Derive `num_words` pseudo-random words for a pending request.
///
/// `word[i] = uint128(sha256(consumer || request_id_be || i_be)[0..16])`
pub fn derive_random_words(consumer: &str, request_id: u64, num_words: u32) -> Vec<Uint128> {
    (0..num_words)
        .map(|i| {
            let mut hasher = Sha256::new();
            hasher.update(consumer.as_bytes());
            hasher.update(request_id.to_be_bytes());
            hasher.update(i.to_be_bytes());
            let digest: [u8; 32] = hasher.finalize().into();
            let mut word = [0u8; 16];
            word.copy_from_slice(&digest[0..16]);
            Uint128::new(u128::from_be_bytes(word))
        })
        .collect()
}

/// Fee charged to a subscription for one fulfillment.
pub fn fulfillment_payment(
    base_fee: Uint128,
    gas_price: Uint128,
    callback_gas_limit: u32,
) -> Result<Uint128, OverflowError> {
    gas_price
        .checked_mul(Uint128::from(callback_gas_limit))?
        .checked_add(base_fee)
}

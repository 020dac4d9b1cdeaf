use cosmwasm_std::Uint128;
use thiserror::Error;

use crate::types::Breed;

/// Upper bound (exclusive) of the modded random value.
pub const MAX_CHANCE_VALUE: u64 = 100;

/// Cumulative chance table, one entry per breed in index order.
///
/// A modded value in `[0, 10)` is a Pug (10%), `[10, 40)` a Shiba Inu (30%),
/// `[40, 100)` a St. Bernard (60%).
pub const CHANCE_ARRAY: [u64; Breed::COUNT] = [10, 40, MAX_CHANCE_VALUE];

const BREEDS: [Breed; Breed::COUNT] = [Breed::Pug, Breed::ShibaInu, Breed::StBernard];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RarityError {
    #[error("modded rng {value} out of range [0, {max})")]
    RangeOutOfBounds { value: u64, max: u64 },
}

/// Reduce a random word into `[0, MAX_CHANCE_VALUE)`.
pub fn modded_rng(word: Uint128) -> u64 {
    (word.u128() % MAX_CHANCE_VALUE as u128) as u64
}

/// Walk the cumulative chance table and return the first breed whose bucket
/// contains `modded`.
pub fn breed_from_modded_rng(modded: u64) -> Result<Breed, RarityError> {
    let mut cumulative = 0u64;
    for (breed, upper) in BREEDS.iter().zip(CHANCE_ARRAY.iter()) {
        if modded >= cumulative && modded < *upper {
            return Ok(*breed);
        }
        cumulative = *upper;
    }
    Err(RarityError::RangeOutOfBounds {
        value: modded,
        max: MAX_CHANCE_VALUE,
    })
}

pub mod rarity;
pub mod types;
pub mod vrf;

pub use rarity::{breed_from_modded_rng, modded_rng, RarityError, CHANCE_ARRAY, MAX_CHANCE_VALUE};
pub use types::Breed;
pub use vrf::{VrfConsumerExecuteMsg, VrfCoordinatorExecuteMsg};

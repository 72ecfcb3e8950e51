pub mod health;
pub mod owner;
pub mod pet;

pub use health::Health;
pub use owner::{OwnerCreate, OwnerFilter, OwnerRead, OwnerUpdate};
pub use pet::{PetBase, PetCreate, PetFilter, PetRead, PetUpdate};

use serde::{Deserialize, Deserializer};

/// Deserializer for PATCH fields where presence matters: a field that is
/// missing from the payload stays `None`, while an explicit `null` becomes
/// `Some(None)` so the merge can clear the stored value.
pub(crate) fn optional_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

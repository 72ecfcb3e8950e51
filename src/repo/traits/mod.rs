pub mod owner_trait;
pub mod pet_trait;

pub use owner_trait::OwnerStore;
pub use pet_trait::PetStore;

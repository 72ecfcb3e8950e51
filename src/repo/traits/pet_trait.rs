use async_trait::async_trait;
use uuid::Uuid;

use crate::models::pet::{PetCreate, PetFilter, PetRead, PetUpdate};
use crate::utils::errors::ApiError;

#[async_trait]
pub trait PetStore: Send + Sync {
    async fn create_pet(&self, payload: PetCreate) -> Result<PetRead, ApiError>;
    async fn get_pet_by_id(&self, id: Uuid) -> Result<PetRead, ApiError>;
    async fn get_all_pets(&self, filter: PetFilter) -> Result<Vec<PetRead>, ApiError>;
    async fn replace_pet(&self, id: Uuid, payload: PetCreate) -> Result<PetRead, ApiError>;
    async fn update_pet(&self, id: Uuid, update: PetUpdate) -> Result<PetRead, ApiError>;
    async fn delete_pet(&self, id: Uuid) -> Result<(), ApiError>;
}

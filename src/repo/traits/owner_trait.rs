use async_trait::async_trait;
use uuid::Uuid;

use crate::models::owner::{OwnerCreate, OwnerFilter, OwnerRead, OwnerUpdate};
use crate::utils::errors::ApiError;

#[async_trait]
pub trait OwnerStore: Send + Sync {
    async fn create_owner(&self, payload: OwnerCreate) -> Result<OwnerRead, ApiError>;
    async fn get_owner_by_id(&self, id: Uuid) -> Result<OwnerRead, ApiError>;
    async fn get_all_owners(&self, filter: OwnerFilter) -> Result<Vec<OwnerRead>, ApiError>;
    async fn replace_owner(&self, id: Uuid, payload: OwnerCreate) -> Result<OwnerRead, ApiError>;
    async fn update_owner(&self, id: Uuid, update: OwnerUpdate) -> Result<OwnerRead, ApiError>;
    async fn delete_owner(&self, id: Uuid) -> Result<(), ApiError>;
}

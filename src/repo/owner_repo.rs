use async_trait::async_trait;
use uuid::Uuid;

use crate::models::owner::{OwnerCreate, OwnerFilter, OwnerRead, OwnerUpdate};
use crate::repo::memory_store::MemoryStore;
use crate::repo::traits::owner_trait::OwnerStore;
use crate::utils::errors::ApiError;

#[async_trait]
impl OwnerStore for MemoryStore {

    async fn create_owner(&self, payload: OwnerCreate) -> Result<OwnerRead, ApiError> {
        payload.validate()?;
        let owner = OwnerRead::new(payload);
        log::info!("created owner {}", owner.id);
        let mut owners = self.owners().write().await;
        owners.insert(owner.id, owner.clone());
        Ok(owner)
    }

    async fn get_owner_by_id(&self, id: Uuid) -> Result<OwnerRead, ApiError> {
        let owners = self.owners().read().await;
        owners
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Owner not found".to_string()))
    }

    async fn get_all_owners(&self, filter: OwnerFilter) -> Result<Vec<OwnerRead>, ApiError> {
        let owners = self.owners().read().await;
        Ok(owners.values().filter(|owner| filter.matches(owner)).cloned().collect())
    }

    async fn replace_owner(&self, id: Uuid, payload: OwnerCreate) -> Result<OwnerRead, ApiError> {
        payload.validate()?;
        let mut owners = self.owners().write().await;
        let owner = owners
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound("Owner not found".to_string()))?;
        owner.replace(payload);
        Ok(owner.clone())
    }

    async fn update_owner(&self, id: Uuid, update: OwnerUpdate) -> Result<OwnerRead, ApiError> {
        update.validate()?;
        let mut owners = self.owners().write().await;
        let owner = owners
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound("Owner not found".to_string()))?;
        owner.merge(update);
        Ok(owner.clone())
    }

    async fn delete_owner(&self, id: Uuid) -> Result<(), ApiError> {
        let mut owners = self.owners().write().await;
        if owners.remove(&id).is_none() {
            return Err(ApiError::NotFound("Owner not found".to_string()));
        }
        log::info!("deleted owner {}", id);
        Ok(())
    }
}

// ----------------------------- TESTS --------------------------------

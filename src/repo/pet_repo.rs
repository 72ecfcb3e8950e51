use async_trait::async_trait;
use uuid::Uuid;

use crate::models::pet::{PetCreate, PetFilter, PetRead, PetUpdate};
use crate::repo::memory_store::MemoryStore;
use crate::repo::traits::pet_trait::PetStore;
use crate::utils::errors::ApiError;

#[async_trait]
impl PetStore for MemoryStore {

    async fn create_pet(&self, payload: PetCreate) -> Result<PetRead, ApiError> {
        payload.validate()?;
        let mut pets = self.pets().write().await;
        if pets.contains_key(&payload.id) {
            return Err(ApiError::Conflict("Pet with this ID already exists".to_string()));
        }
        let pet = PetRead::new(payload);
        log::info!("created pet {}", pet.id);
        pets.insert(pet.id, pet.clone());
        Ok(pet)
    }

    async fn get_pet_by_id(&self, id: Uuid) -> Result<PetRead, ApiError> {
        let pets = self.pets().read().await;
        pets.get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Pet not found".to_string()))
    }

    async fn get_all_pets(&self, filter: PetFilter) -> Result<Vec<PetRead>, ApiError> {
        let pets = self.pets().read().await;
        Ok(pets.values().filter(|pet| filter.matches(pet)).cloned().collect())
    }

    async fn replace_pet(&self, id: Uuid, payload: PetCreate) -> Result<PetRead, ApiError> {
        payload.validate()?;
        let mut pets = self.pets().write().await;
        let pet = pets
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound("Pet not found".to_string()))?;
        pet.replace(payload);
        Ok(pet.clone())
    }

    async fn update_pet(&self, id: Uuid, update: PetUpdate) -> Result<PetRead, ApiError> {
        update.validate()?;
        let mut pets = self.pets().write().await;
        let pet = pets
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound("Pet not found".to_string()))?;
        pet.merge(update);
        Ok(pet.clone())
    }

    async fn delete_pet(&self, id: Uuid) -> Result<(), ApiError> {
        let mut pets = self.pets().write().await;
        if pets.remove(&id).is_none() {
            return Err(ApiError::NotFound("Pet not found".to_string()));
        }
        log::info!("deleted pet {}", id);
        Ok(())
    }
}

// ----------------------------- TESTS --------------------------------

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::errors::ApiError;

/// Canonical pet fields, also embedded by value in an owner's `pets` list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PetBase {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub age: Option<u32>,
}

/// Creation payload. The id may be client-chosen; a fresh random one is
/// generated when the field is absent.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PetCreate {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub age: Option<u32>,
}

/// Partial update for an existing pet. The pet id is taken from the path,
/// not the body. `age` distinguishes an absent field (left untouched) from
/// an explicit `null` (cleared).
#[derive(Deserialize, Clone, Debug, Default)]
pub struct PetUpdate {
    pub name: Option<String>,
    pub species: Option<String>,
    #[serde(default, deserialize_with = "crate::models::optional_field")]
    pub age: Option<Option<u32>>,
}

/// Served representation of a pet, with server-assigned timestamps.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PetRead {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub age: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Exact-match query filters for listing pets; supplied filters are
/// AND-combined, absent filters impose no constraint.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct PetFilter {
    pub name: Option<String>,
    pub species: Option<String>,
    pub age: Option<u32>,
}

impl PetCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() {
            return Err(ApiError::ValidationError("Pet name cannot be empty".to_string()));
        }
        if self.species.is_empty() {
            return Err(ApiError::ValidationError("Pet species cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl PetUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(name) = &self.name {
            if name.is_empty() {
                return Err(ApiError::ValidationError("Pet name cannot be empty".to_string()));
            }
        }
        if let Some(species) = &self.species {
            if species.is_empty() {
                return Err(ApiError::ValidationError("Pet species cannot be empty".to_string()));
            }
        }
        Ok(())
    }
}

impl PetRead {
    pub fn new(payload: PetCreate) -> Self {
        let now = Utc::now();
        PetRead {
            id: payload.id,
            name: payload.name,
            species: payload.species,
            age: payload.age,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replacement: every base field comes from the payload, the stored
    /// id and created_at are kept, updated_at is re-stamped. The payload's
    /// own id is ignored; the path id wins.
    pub fn replace(&mut self, payload: PetCreate) {
        self.name = payload.name;
        self.species = payload.species;
        self.age = payload.age;
        self.updated_at = Utc::now();
    }

    /// Merge update: only fields present in the payload overwrite the stored
    /// values; an explicit `age: null` clears the age.
    pub fn merge(&mut self, update: PetUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(species) = update.species {
            self.species = species;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        self.updated_at = Utc::now();
    }
}

impl PetFilter {
    pub fn matches(&self, pet: &PetRead) -> bool {
        if let Some(name) = &self.name {
            if &pet.name != name {
                return false;
            }
        }
        if let Some(species) = &self.species {
            if &pet.species != species {
                return false;
            }
        }
        if let Some(age) = self.age {
            if pet.age != Some(age) {
                return false;
            }
        }
        true
    }
}

// ----------------------------- TESTS --------------------------------

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pet::PetBase;
use crate::utils::errors::ApiError;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap())
}

pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if email.is_empty() {
        return Err(ApiError::ValidationError("Owner email cannot be empty".to_string()));
    }
    if !email_regex().is_match(email) {
        return Err(ApiError::ValidationError(format!("Invalid email address: {}", email)));
    }
    Ok(())
}

/// Creation payload. Owner ids are always server-generated, so unlike
/// `PetCreate` there is no id field here.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OwnerCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub pets: Vec<PetBase>,
}

/// Partial update for an existing owner. `phone` distinguishes absent from
/// explicit `null`; a supplied `pets` list replaces the stored list
/// wholesale, there is no per-pet merge.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct OwnerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::models::optional_field")]
    pub phone: Option<Option<String>>,
    pub pets: Option<Vec<PetBase>>,
}

/// Served representation of an owner.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OwnerRead {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub pets: Vec<PetBase>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Exact-match query filters for listing owners, AND-combined.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct OwnerFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl OwnerCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.first_name.is_empty() {
            return Err(ApiError::ValidationError("Owner first name cannot be empty".to_string()));
        }
        if self.last_name.is_empty() {
            return Err(ApiError::ValidationError("Owner last name cannot be empty".to_string()));
        }
        validate_email(&self.email)
    }
}

impl OwnerUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(first_name) = &self.first_name {
            if first_name.is_empty() {
                return Err(ApiError::ValidationError("Owner first name cannot be empty".to_string()));
            }
        }
        if let Some(last_name) = &self.last_name {
            if last_name.is_empty() {
                return Err(ApiError::ValidationError("Owner last name cannot be empty".to_string()));
            }
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

impl OwnerRead {
    pub fn new(payload: OwnerCreate) -> Self {
        let now = Utc::now();
        OwnerRead {
            id: Uuid::new_v4(),
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone,
            pets: payload.pets,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replacement: base fields including the whole pets list come from
    /// the payload; id and created_at are carried forward, updated_at is
    /// re-stamped.
    pub fn replace(&mut self, payload: OwnerCreate) {
        self.first_name = payload.first_name;
        self.last_name = payload.last_name;
        self.email = payload.email;
        self.phone = payload.phone;
        self.pets = payload.pets;
        self.updated_at = Utc::now();
    }

    /// Merge update: supplied fields overwrite, absent fields are retained.
    /// An explicit `phone: null` clears the phone; a supplied pets list
    /// replaces the old one in full.
    pub fn merge(&mut self, update: OwnerUpdate) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(pets) = update.pets {
            self.pets = pets;
        }
        self.updated_at = Utc::now();
    }
}

impl OwnerFilter {
    pub fn matches(&self, owner: &OwnerRead) -> bool {
        if let Some(first_name) = &self.first_name {
            if &owner.first_name != first_name {
                return false;
            }
        }
        if let Some(last_name) = &self.last_name {
            if &owner.last_name != last_name {
                return false;
            }
        }
        if let Some(email) = &self.email {
            if &owner.email != email {
                return false;
            }
        }
        if let Some(phone) = &self.phone {
            if owner.phone.as_ref() != Some(phone) {
                return false;
            }
        }
        true
    }
}

// ----------------------------- TESTS --------------------------------

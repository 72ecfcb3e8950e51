use actix_web::{web, HttpResponse, Responder, ResponseError};
use uuid::Uuid;

use crate::models::owner::{OwnerCreate, OwnerFilter, OwnerUpdate};
use crate::repo::memory_store::MemoryStore;
use crate::repo::traits::owner_trait::OwnerStore;

pub async fn create_owner(
    store: web::Data<MemoryStore>,
    owner: web::Json<OwnerCreate>
) -> impl Responder {
    match store.create_owner(owner.into_inner()).await {
        Ok(owner) => HttpResponse::Created().json(owner),
        Err(e) => e.error_response()
    }
}

pub async fn list_owners(
    store: web::Data<MemoryStore>,
    filter: web::Query<OwnerFilter>
) -> impl Responder {
    match store.get_all_owners(filter.into_inner()).await {
        Ok(owners) => HttpResponse::Ok().json(owners),
        Err(e) => e.error_response()
    }
}

pub async fn get_owner(
    store: web::Data<MemoryStore>,
    owner_id: web::Path<Uuid>
) -> impl Responder {
    match store.get_owner_by_id(owner_id.into_inner()).await {
        Ok(owner) => HttpResponse::Ok().json(owner),
        Err(e) => e.error_response()
    }
}

pub async fn replace_owner(
    store: web::Data<MemoryStore>,
    owner_id: web::Path<Uuid>,
    owner: web::Json<OwnerCreate>
) -> impl Responder {
    match store.replace_owner(owner_id.into_inner(), owner.into_inner()).await {
        Ok(owner) => HttpResponse::Ok().json(owner),
        Err(e) => e.error_response()
    }
}

pub async fn update_owner(
    store: web::Data<MemoryStore>,
    owner_id: web::Path<Uuid>,
    update: web::Json<OwnerUpdate>
) -> impl Responder {
    match store.update_owner(owner_id.into_inner(), update.into_inner()).await {
        Ok(owner) => HttpResponse::Ok().json(owner),
        Err(e) => e.error_response()
    }
}

pub async fn delete_owner(
    store: web::Data<MemoryStore>,
    owner_id: web::Path<Uuid>
) -> impl Responder {
    match store.delete_owner(owner_id.into_inner()).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e) => e.error_response()
    }
}

// ----------------------------- TESTS --------------------------------

use actix_web::web;

use crate::handlers::health_handlers::{get_health, get_health_with_path};
use crate::handlers::owner_handlers::{
    create_owner, delete_owner, get_owner, list_owners, replace_owner, update_owner,
};
use crate::handlers::pet_handlers::{
    create_pet, delete_pet, get_pet, list_pets, replace_pet, update_pet,
};

pub fn pet_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/pets")
            .route(web::post().to(create_pet))
            .route(web::get().to(list_pets))
    );

    cfg.service(
        web::resource("/pets/{pet_id}")
            .route(web::get().to(get_pet))
            .route(web::put().to(replace_pet))
            .route(web::patch().to(update_pet))
            .route(web::delete().to(delete_pet))
    );
}

pub fn owner_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/owners")
            .route(web::post().to(create_owner))
            .route(web::get().to(list_owners))
    );

    cfg.service(
        web::resource("/owners/{owner_id}")
            .route(web::get().to(get_owner))
            .route(web::put().to(replace_owner))
            .route(web::patch().to(update_owner))
            .route(web::delete().to(delete_owner))
    );
}

pub fn health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(get_health))
    );

    cfg.service(
        web::resource("/health/{path_echo}")
            .route(web::get().to(get_health_with_path))
    );
}

use actix_web::{web, HttpResponse, Responder, ResponseError};
use uuid::Uuid;

use crate::models::pet::{PetCreate, PetFilter, PetUpdate};
use crate::repo::memory_store::MemoryStore;
use crate::repo::traits::pet_trait::PetStore;

pub async fn create_pet(
    store: web::Data<MemoryStore>,
    pet: web::Json<PetCreate>
) -> impl Responder {
    match store.create_pet(pet.into_inner()).await {
        Ok(pet) => HttpResponse::Created().json(pet),
        Err(e) => e.error_response()
    }
}

pub async fn list_pets(
    store: web::Data<MemoryStore>,
    filter: web::Query<PetFilter>
) -> impl Responder {
    match store.get_all_pets(filter.into_inner()).await {
        Ok(pets) => HttpResponse::Ok().json(pets),
        Err(e) => e.error_response()
    }
}

pub async fn get_pet(
    store: web::Data<MemoryStore>,
    pet_id: web::Path<Uuid>
) -> impl Responder {
    match store.get_pet_by_id(pet_id.into_inner()).await {
        Ok(pet) => HttpResponse::Ok().json(pet),
        Err(e) => e.error_response()
    }
}

pub async fn replace_pet(
    store: web::Data<MemoryStore>,
    pet_id: web::Path<Uuid>,
    pet: web::Json<PetCreate>
) -> impl Responder {
    match store.replace_pet(pet_id.into_inner(), pet.into_inner()).await {
        Ok(pet) => HttpResponse::Ok().json(pet),
        Err(e) => e.error_response()
    }
}

pub async fn update_pet(
    store: web::Data<MemoryStore>,
    pet_id: web::Path<Uuid>,
    update: web::Json<PetUpdate>
) -> impl Responder {
    match store.update_pet(pet_id.into_inner(), update.into_inner()).await {
        Ok(pet) => HttpResponse::Ok().json(pet),
        Err(e) => e.error_response()
    }
}

pub async fn delete_pet(
    store: web::Data<MemoryStore>,
    pet_id: web::Path<Uuid>
) -> impl Responder {
    match store.delete_pet(pet_id.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.error_response()
    }
}

// ----------------------------- TESTS --------------------------------

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::json;

    use crate::models::pet::PetRead;
    use crate::repo::memory_store::MemoryStore;
    use crate::routes::pet_routes;

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(MemoryStore::new()))
                    .configure(pet_routes),
            )
            .await
        };
    }

    #[tokio::test]
    async fn test_create_pet_returns_201_and_read_shape() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/pets")
            .set_json(json!({"name": "Fido", "species": "Dog", "age": 3}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let pet: PetRead = test::read_body_json(resp).await;
        assert_eq!(pet.name, "Fido");
        assert_eq!(pet.species, "Dog");
        assert_eq!(pet.age, Some(3));
    }

    #[tokio::test]
    async fn test_create_duplicate_id_returns_409() {
        let app = test_app!();
        let payload = json!({
            "id": "11111111-1111-4111-8111-111111111111",
            "name": "Buddy",
            "species": "Dog"
        });

        let req = test::TestRequest::post().uri("/pets").set_json(&payload).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);

        let req = test::TestRequest::post().uri("/pets").set_json(&payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 409);
    }

    #[tokio::test]
    async fn test_create_empty_name_returns_400() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/pets")
            .set_json(json!({"name": "", "species": "Dog"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn test_get_unknown_pet_returns_404() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/pets/22222222-2222-4222-8222-222222222222")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Pet not found");
    }

    #[tokio::test]
    async fn test_list_pets_with_filters() {
        let app = test_app!();
        for payload in [
            json!({"name": "Fido", "species": "Dog", "age": 3}),
            json!({"name": "Rex", "species": "Dog", "age": 5}),
            json!({"name": "Whiskers", "species": "Cat", "age": 3}),
        ] {
            let req = test::TestRequest::post().uri("/pets").set_json(payload).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 201);
        }

        let req = test::TestRequest::get().uri("/pets?species=Dog&age=3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let pets: Vec<PetRead> = test::read_body_json(resp).await;
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].name, "Fido");

        let req = test::TestRequest::get().uri("/pets").to_request();
        let pets: Vec<PetRead> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(pets.len(), 3);
    }

    #[tokio::test]
    async fn test_put_replaces_and_patch_merges() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/pets")
            .set_json(json!({"name": "Fido", "species": "Dog", "age": 3}))
            .to_request();
        let created: PetRead = test::call_and_read_body_json(&app, req).await;

        // PUT without age drops the old age
        let req = test::TestRequest::put()
            .uri(&format!("/pets/{}", created.id))
            .set_json(json!({"name": "Fido", "species": "Dog"}))
            .to_request();
        let replaced: PetRead = test::call_and_read_body_json(&app, req).await;
        assert_eq!(replaced.age, None);
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.created_at, created.created_at);

        // PATCH with only age keeps the rest
        let req = test::TestRequest::patch()
            .uri(&format!("/pets/{}", created.id))
            .set_json(json!({"age": 4}))
            .to_request();
        let patched: PetRead = test::call_and_read_body_json(&app, req).await;
        assert_eq!(patched.name, "Fido");
        assert_eq!(patched.age, Some(4));
    }

    #[tokio::test]
    async fn test_delete_pet_returns_204_then_404() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/pets")
            .set_json(json!({"name": "Fido", "species": "Dog"}))
            .to_request();
        let created: PetRead = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::delete().uri(&format!("/pets/{}", created.id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);

        let req = test::TestRequest::delete().uri(&format!("/pets/{}", created.id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}

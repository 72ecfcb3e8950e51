use pet_owner_service::{repo::memory_store::MemoryStore, routes::{health_routes, owner_routes, pet_routes}, utils::config::AppConfig};
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};

#[get("/")]
async fn entry_point() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Owner/Pet API. Use /pets and /owners to manage records."
    }))
}

#[tokio::main]
async fn main() -> std::io::Result<()> {

    env_logger::init();

    let config = AppConfig::global();

    let store = web::Data::new(MemoryStore::new());

    println!("🚀 Server running at http://{}", config.bind_address());

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .configure(pet_routes)
            .configure(owner_routes)
            .configure(health_routes)
            .service(entry_point)
    })
    .bind(config.bind_address())?
    .run()
    .await
}

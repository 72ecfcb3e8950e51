use actix_web::{web, HttpResponse, Responder};

use crate::models::health::{Health, HealthQuery};

pub async fn get_health(
    query: web::Query<HealthQuery>
) -> impl Responder {
    HttpResponse::Ok().json(Health::now(query.into_inner().echo, None))
}

pub async fn get_health_with_path(
    path_echo: web::Path<String>,
    query: web::Query<HealthQuery>
) -> impl Responder {
    HttpResponse::Ok().json(Health::now(query.into_inner().echo, Some(path_echo.into_inner())))
}

// ----------------------------- TESTS --------------------------------

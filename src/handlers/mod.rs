pub mod contacts;
pub mod health;

use actix_web::web;

use crate::error::AppError;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies and query strings get the same `{"error": ...}` shape as everything else.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
    );
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
    );

    cfg.route("/health", web::get().to(health::health));

    // Literal segments are registered before `/{id}` so they are never parsed as ids.
    cfg.service(
        web::scope("/contact")
            .route("", web::get().to(contacts::get_contacts))
            .route("", web::post().to(contacts::create_contact))
            .route("/search-by-name", web::get().to(contacts::search_by_name))
            .route("/search-all", web::get().to(contacts::search_all))
            .route("/paginated", web::get().to(contacts::get_paginated))
            .route("/bulk-upload", web::post().to(contacts::bulk_upload))
            .route("/delete-all", web::delete().to(contacts::delete_all_contacts))
            .route("/{id}", web::get().to(contacts::get_contact))
            .route("/{id}", web::put().to(contacts::update_contact))
            .route("/{id}", web::delete().to(contacts::delete_contact)),
    );
}

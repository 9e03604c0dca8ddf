use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::contacts as contact_db;
use crate::error::{AppError, Result};
use crate::models::contact::ContactInput;
use crate::models::{NameSearchQuery, PaginationQuery, SearchAllQuery};

/// GET /contact — list every contact ordered by id.
pub async fn get_contacts(db: web::Data<DatabaseConnection>) -> Result<HttpResponse> {
    let contacts = contact_db::get_all_contacts(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(contacts))
}

/// GET /contact/{id}
pub async fn get_contact(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    match contact_db::get_contact_by_id(db.get_ref(), id).await? {
        Some(contact) => Ok(HttpResponse::Ok().json(contact)),
        None => Err(AppError::not_found(format!("Contact {id} not found"))),
    }
}

/// GET /contact/search-by-name?name=...
pub async fn search_by_name(
    db: web::Data<DatabaseConnection>,
    query: web::Query<NameSearchQuery>,
) -> Result<HttpResponse> {
    let contacts = contact_db::search_by_name(db.get_ref(), &query.name).await?;
    tracing::debug!(matches = contacts.len(), "name search");
    Ok(HttpResponse::Ok().json(contacts))
}

/// GET /contact/search-all?query=...
pub async fn search_all(
    db: web::Data<DatabaseConnection>,
    query: web::Query<SearchAllQuery>,
) -> Result<HttpResponse> {
    let contacts = contact_db::search_all(db.get_ref(), &query.query).await?;
    tracing::debug!(matches = contacts.len(), "cross-field search");
    Ok(HttpResponse::Ok().json(contacts))
}

/// GET /contact/paginated?pageNumber=1&pageSize=10
pub async fn get_paginated(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse> {
    let request = query.into_inner().into_request()?;
    let page = contact_db::get_paginated(db.get_ref(), &request).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /contact — create a contact; the id is assigned by the database.
pub async fn create_contact(
    db: web::Data<DatabaseConnection>,
    body: web::Json<ContactInput>,
) -> Result<HttpResponse> {
    let input = body.into_inner();
    input.validate()?;
    let contact = contact_db::insert_contact(db.get_ref(), input).await?;
    Ok(HttpResponse::Created().json(contact))
}

/// PUT /contact/{id} — replace every field of an existing contact.
pub async fn update_contact(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<ContactInput>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner();
    input.validate()?;
    match contact_db::update_contact(db.get_ref(), id, input).await? {
        Some(contact) => Ok(HttpResponse::Ok().json(contact)),
        None => Err(AppError::not_found(format!("Contact {id} not found"))),
    }
}

/// DELETE /contact/{id}
pub async fn delete_contact(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    if contact_db::delete_contact(db.get_ref(), id).await? {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Contact {id} deleted"),
        })))
    } else {
        Err(AppError::not_found(format!("Contact {id} not found")))
    }
}

/// DELETE /contact/delete-all
pub async fn delete_all_contacts(db: web::Data<DatabaseConnection>) -> Result<HttpResponse> {
    let deleted = contact_db::delete_all_contacts(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted })))
}

/// POST /contact/bulk-upload — all-or-nothing insert of an array of contacts.
pub async fn bulk_upload(
    db: web::Data<DatabaseConnection>,
    body: web::Json<Vec<ContactInput>>,
) -> Result<HttpResponse> {
    let inputs = body.into_inner();
    for (index, input) in inputs.iter().enumerate() {
        if let Err(AppError::Validation(reason)) = input.validate() {
            return Err(AppError::validation(format!(
                "contact at index {index}: {reason}"
            )));
        }
    }

    let contacts = contact_db::bulk_insert(db.get_ref(), inputs).await?;
    Ok(HttpResponse::Created().json(contacts))
}

use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::*;

use super::repository;
use crate::models::contact::{self, ContactInput};
use crate::models::page::{Page, PageRequest};

/// Columns matched by [`search_all`]; birthday is a date and never text-searched.
const SEARCHABLE_COLUMNS: [contact::Column; 4] = [
    contact::Column::Name,
    contact::Column::Gender,
    contact::Column::Address,
    contact::Column::ContactNum,
];

/// Fetch all contacts, ordered by id.
pub async fn get_all_contacts(db: &DatabaseConnection) -> Result<Vec<contact::Model>, DbErr> {
    repository::get_all::<contact::Entity, _>(db).await
}

/// Fetch a single contact by ID.
pub async fn get_contact_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<contact::Model>, DbErr> {
    repository::get_by_id::<contact::Entity, _>(db, id).await
}

/// Insert a new contact and return it with its assigned id.
pub async fn insert_contact(
    db: &DatabaseConnection,
    input: ContactInput,
) -> Result<contact::Model, DbErr> {
    let id = repository::insert(db, input.clone().into_new_active_model()).await?;
    tracing::info!(contact_id = id, "contact created");
    Ok(input.into_model(id))
}

/// Replace every field of contact `id`. `None` when the contact does not exist.
pub async fn update_contact(
    db: &DatabaseConnection,
    id: i32,
    input: ContactInput,
) -> Result<Option<contact::Model>, DbErr> {
    let updated = repository::update(db, input.clone().into_replacement(id)).await?;
    if updated {
        tracing::info!(contact_id = id, "contact updated");
    }
    Ok(updated.then(|| input.into_model(id)))
}

/// Delete a contact by ID.
pub async fn delete_contact(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let deleted = repository::delete::<contact::Entity, _>(db, id).await?;
    if deleted {
        tracing::info!(contact_id = id, "contact deleted");
    }
    Ok(deleted)
}

/// Delete every contact, returning how many were removed.
pub async fn delete_all_contacts(db: &DatabaseConnection) -> Result<u64, DbErr> {
    let deleted = repository::delete_all::<contact::Entity, _>(db).await?;
    tracing::info!(deleted, "all contacts deleted");
    Ok(deleted)
}

/// Case-insensitive substring search on the name only.
pub async fn search_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Vec<contact::Model>, DbErr> {
    name_search(name).all(db).await
}

/// Case-insensitive substring search across name, gender, address and phone number.
pub async fn search_all(db: &DatabaseConnection, query: &str) -> Result<Vec<contact::Model>, DbErr> {
    cross_field_search(query).all(db).await
}

/// One page of contacts ordered by id, with the total count of the table.
pub async fn get_paginated(
    db: &DatabaseConnection,
    request: &PageRequest,
) -> Result<Page<contact::Model>, DbErr> {
    repository::get_page::<contact::Entity, _>(db, request).await
}

/// Insert all contacts in one transaction. Nothing is stored if any insert fails.
pub async fn bulk_insert(
    db: &DatabaseConnection,
    inputs: Vec<ContactInput>,
) -> Result<Vec<contact::Model>, DbErr> {
    let models: Vec<contact::ActiveModel> = inputs
        .iter()
        .cloned()
        .map(ContactInput::into_new_active_model)
        .collect();

    let ids = repository::insert_all(db, models).await?;
    tracing::info!(count = ids.len(), "contacts bulk inserted");

    Ok(inputs
        .into_iter()
        .zip(ids)
        .map(|(input, id)| input.into_model(id))
        .collect())
}

pub fn name_search(name: &str) -> Select<contact::Entity> {
    let pattern = contains_pattern(name);
    repository::ordered::<contact::Entity>()
        .filter(contains_ignore_case(contact::Column::Name, &pattern))
}

pub fn cross_field_search(query: &str) -> Select<contact::Entity> {
    let pattern = contains_pattern(query);
    let condition = SEARCHABLE_COLUMNS
        .iter()
        .fold(Condition::any(), |condition, column| {
            condition.add(contains_ignore_case(*column, &pattern))
        });
    repository::ordered::<contact::Entity>().filter(condition)
}

/// `%text%` with LIKE wildcards in `text` escaped by a backslash.
pub fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// `col ILIKE pattern`; case folding happens in the database for both sides.
fn contains_ignore_case(column: contact::Column, pattern: &str) -> SimpleExpr {
    Expr::col((contact::Entity, column)).ilike(LikeExpr::new(pattern).escape('\\'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_wraps_text_unchanged() {
        assert_eq!(contains_pattern("John"), "%John%");
        assert_eq!(contains_pattern("ÉLODIE"), "%ÉLODIE%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn pattern_escapes_like_wildcards() {
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}

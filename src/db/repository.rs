//! Data-access routines shared by every SeaORM entity.
//!
//! Table name and column mapping come from the entity type; every statement is
//! produced by the query builder with bound parameters. Functions take any
//! `ConnectionTrait`, so they run against the pool or inside an open transaction.

use sea_orm::*;

use crate::models::page::{Page, PageRequest};

pub type PrimaryKeyValue<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// `SELECT` over the whole table, ordered by primary key ascending.
pub fn ordered<E: EntityTrait>() -> Select<E> {
    E::PrimaryKey::iter().fold(E::find(), |select, key| {
        select.order_by_asc(key.into_column())
    })
}

/// Fetch every row.
pub async fn get_all<E, C>(db: &C) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    ordered::<E>().all(db).await
}

/// Fetch a single row by primary key.
pub async fn get_by_id<E, C>(db: &C, id: PrimaryKeyValue<E>) -> Result<Option<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    E::find_by_id(id).one(db).await
}

/// Insert a row and return the key the database assigned to it.
pub async fn insert<A, C>(db: &C, model: A) -> Result<PrimaryKeyValue<A::Entity>, DbErr>
where
    A: ActiveModelTrait + Send + 'static,
    C: ConnectionTrait,
{
    let result = <A::Entity as EntityTrait>::insert(model).exec(db).await?;
    Ok(result.last_insert_id)
}

/// Insert every model inside one transaction; either all rows land or none do.
///
/// Keys are returned in input order.
pub async fn insert_all<A, C>(
    db: &C,
    models: Vec<A>,
) -> Result<Vec<PrimaryKeyValue<A::Entity>>, DbErr>
where
    A: ActiveModelTrait + Send + 'static,
    C: TransactionTrait,
{
    if models.is_empty() {
        return Ok(Vec::new());
    }

    // An uncommitted transaction rolls back when dropped, so `?` below undoes earlier rows.
    let txn = db.begin().await?;
    let mut ids = Vec::with_capacity(models.len());
    for model in models {
        ids.push(insert(&txn, model).await?);
    }
    txn.commit().await?;

    Ok(ids)
}

/// Overwrite the set columns of the row identified by the model's primary key.
///
/// Returns `false` when no row has that key.
pub async fn update<A, C>(db: &C, model: A) -> Result<bool, DbErr>
where
    A: ActiveModelTrait + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    match <A::Entity as EntityTrait>::update(model).exec(db).await {
        Ok(_) => Ok(true),
        Err(DbErr::RecordNotUpdated) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Delete a row by primary key; `false` when nothing matched.
pub async fn delete<E, C>(db: &C, id: PrimaryKeyValue<E>) -> Result<bool, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let result = E::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Delete every row and return how many were removed.
pub async fn delete_all<E, C>(db: &C) -> Result<u64, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let result = E::delete_many().exec(db).await?;
    Ok(result.rows_affected)
}

/// Count every row in the table.
pub async fn count<E, C>(db: &C) -> Result<u64, DbErr>
where
    E: EntityTrait,
    E::Model: Sync + 'static,
    C: ConnectionTrait,
{
    E::find().count(db).await
}

/// One slice of the table in primary key order.
pub async fn fetch_page<E, C>(db: &C, offset: u64, limit: u64) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    ordered::<E>().offset(offset).limit(limit).all(db).await
}

/// Count and slice under one read-only snapshot so the total matches the page.
pub async fn get_page<E, C>(db: &C, request: &PageRequest) -> Result<Page<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: Sync + 'static,
    C: TransactionTrait,
{
    let txn = db
        .begin_with_config(
            Some(IsolationLevel::RepeatableRead),
            Some(AccessMode::ReadOnly),
        )
        .await?;

    let total_count = count::<E, _>(&txn).await?;
    // Pages past the end are empty; skip the slice.
    let items = if request.offset() < total_count {
        fetch_page::<E, _>(&txn, request.offset(), request.limit()).await?
    } else {
        Vec::new()
    };
    txn.commit().await?;

    let entity = E::default();
    tracing::debug!(
        table = entity.table_name(),
        page = request.page_number(),
        page_size = request.page_size(),
        total_count,
        returned = items.len(),
        "fetched page"
    );

    Ok(Page::new(items, total_count, request))
}

//! Test database setup and management
#![allow(dead_code)]

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

/// Fresh in-memory SQLite database with every table created.
/// Each call returns an isolated database, so tests need no cleanup.
pub async fn setup_test_database() -> Result<DatabaseConnection, DbErr> {
    civic_survey::db::init_db_with("sqlite::memory:", 1).await
}

/// Fresh database loaded with the built-in catalog.
pub async fn setup_seeded_database() -> Result<DatabaseConnection, DbErr> {
    let db = setup_test_database().await?;
    civic_survey::seed::ensure_seed_data(&db).await?;
    Ok(db)
}

/// Row count of any table.
pub async fn count_rows<E>(db: &DatabaseConnection, _entity: E) -> u64
where
    E: EntityTrait,
    E::Model: Sync,
{
    E::find()
        .count(db)
        .await
        .expect("Failed to count rows")
}

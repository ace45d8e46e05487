//! Database connection lifecycle and schema bootstrap.
//!
//! The connection is built once at startup with [`init_db`], handed to the
//! web layer as `web::Data<DatabaseConnection>`, and released with
//! [`close_db`] when the server stops.

use crate::orm::{answers, politicians, projects, questions};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};

/// Connect to the database and create any missing tables.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    init_db_with(database_url, crate::app_config::database().max_connections).await
}

/// Connect with an explicit pool size.
pub async fn init_db_with(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    // Every pooled connection to an in-memory SQLite database would open its own empty database.
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    } else {
        options.max_connections(max_connections);
    }
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    create_schema(&db).await?;

    log::info!("Database ready ({:?})", db.get_database_backend());
    Ok(db)
}

/// Close the pool. Pending queries finish before the call returns.
pub async fn close_db(db: DatabaseConnection) -> Result<(), DbErr> {
    db.close().await
}

/// Create tables for every entity if they do not exist yet.
/// Parents are created before the tables referencing them.
pub async fn create_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    create_table(db, politicians::Entity).await?;
    create_table(db, projects::Entity).await?;
    create_table(db, questions::Entity).await?;
    create_table(db, answers::Entity).await?;
    Ok(())
}

async fn create_table<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

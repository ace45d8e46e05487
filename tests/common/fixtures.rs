//! Test fixtures for creating test data
#![allow(dead_code)]
#![allow(clippy::needless_update)]

use civic_survey::orm::{politicians, projects};
use sea_orm::{entity::*, ActiveValue::Set, DatabaseConnection, DbErr};

/// Create a politician with a project for each given title.
pub async fn create_test_politician(
    db: &DatabaseConnection,
    name: &str,
    role: &str,
    project_titles: &[&str],
) -> Result<politicians::Model, DbErr> {
    let politician = politicians::ActiveModel {
        name: Set(name.to_string()),
        party: Set("Partido de Prueba".to_string()),
        role: Set(role.to_string()),
        photo: Set("test.png".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for title in project_titles {
        projects::ActiveModel {
            politician_id: Set(politician.id),
            title: Set(title.to_string()),
            description: Set(format!("Descripción de {}", title)),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(politician)
}

/// Build a form body from field/value pairs.
pub fn form(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

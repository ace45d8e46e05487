//! Integration tests for the startup catalog

mod common;

use civic_survey::orm::{politicians, projects};
use civic_survey::seed::{ensure_seed_data, seed_catalog, SeedPolitician, SeedProject, CATALOG};
use common::database::*;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};

#[actix_rt::test]
async fn test_seed_loads_catalog() {
    let db = setup_test_database()
        .await
        .expect("Failed to connect to test database");

    let report = ensure_seed_data(&db).await.expect("Seeding failed");

    let expected_projects: usize = CATALOG.iter().map(|p| p.projects.len()).sum();
    assert_eq!(report.politicians, CATALOG.len());
    assert_eq!(report.projects, expected_projects);
    assert_eq!(
        count_rows(&db, politicians::Entity).await,
        CATALOG.len() as u64
    );
    assert_eq!(
        count_rows(&db, projects::Entity).await,
        expected_projects as u64
    );
}

#[actix_rt::test]
async fn test_seed_is_idempotent() {
    let db = setup_test_database()
        .await
        .expect("Failed to connect to test database");

    ensure_seed_data(&db).await.expect("First seeding failed");
    let politicians_once = count_rows(&db, politicians::Entity).await;
    let projects_once = count_rows(&db, projects::Entity).await;

    let report = ensure_seed_data(&db).await.expect("Second seeding failed");

    assert_eq!(report.politicians, 0);
    assert_eq!(report.projects, 0);
    assert_eq!(count_rows(&db, politicians::Entity).await, politicians_once);
    assert_eq!(count_rows(&db, projects::Entity).await, projects_once);
}

#[actix_rt::test]
async fn test_projects_belong_to_their_politician() {
    let db = setup_seeded_database()
        .await
        .expect("Failed to prepare test database");

    let pena = politicians::Entity::find()
        .filter(politicians::Column::Name.eq("Santiago Peña Palacios"))
        .one(&db)
        .await
        .expect("Query failed")
        .expect("Catalogued politician missing");

    assert_eq!(pena.role, "Presidente");
    assert_eq!(pena.photo, "pena.png");

    let projects = pena
        .find_related(projects::Entity)
        .order_by_asc(projects::Column::Id)
        .all(&db)
        .await
        .expect("Query failed");

    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].title, "Hospital de Itauguá");
    assert_eq!(projects.iter().filter(|p| p.is_broken_promise()).count(), 2);
}

#[actix_rt::test]
async fn test_existing_politician_is_not_duplicated() {
    let db = setup_test_database()
        .await
        .expect("Failed to connect to test database");

    static FIRST: &[SeedPolitician] = &[SeedPolitician {
        name: "Ana Prueba",
        party: "Partido A",
        role: "Senadora",
        photo: "ana.png",
        projects: &[SeedProject {
            title: "Ley uno",
            description: "Primera ley",
        }],
    }];
    static SECOND: &[SeedPolitician] = &[
        SeedPolitician {
            name: "Ana Prueba",
            party: "Partido B",
            role: "Senadora",
            photo: "ana.png",
            projects: &[SeedProject {
                title: "Ley dos",
                description: "Segunda ley",
            }],
        },
        SeedPolitician {
            name: "Beto Prueba",
            party: "Partido B",
            role: "Diputado",
            photo: "beto.png",
            projects: &[],
        },
    ];

    seed_catalog(&db, FIRST).await.expect("Seeding failed");
    let report = seed_catalog(&db, SECOND).await.expect("Seeding failed");

    assert_eq!(report.politicians, 1);
    assert_eq!(report.projects, 0);
    assert_eq!(count_rows(&db, politicians::Entity).await, 2);
    assert_eq!(count_rows(&db, projects::Entity).await, 1);

    let ana = politicians::Entity::find()
        .filter(politicians::Column::Name.eq("Ana Prueba"))
        .one(&db)
        .await
        .expect("Query failed")
        .expect("Seeded politician missing");
    assert_eq!(ana.party, "Partido A");
}

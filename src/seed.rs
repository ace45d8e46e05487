//! Startup catalog of politicians and their projects.

use crate::orm::{politicians, projects};
use sea_orm::{
    entity::*, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};

pub struct SeedProject {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct SeedPolitician {
    pub name: &'static str,
    pub party: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
    pub projects: &'static [SeedProject],
}

/// Rows created by a seeding pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub politicians: usize,
    pub projects: usize,
}

macro_rules! project {
    ($title:expr, $description:expr) => {
        SeedProject {
            title: $title,
            description: $description,
        }
    };
}

pub static CATALOG: &[SeedPolitician] = &[
    SeedPolitician {
        name: "Fernando Armindo Lugo Méndez",
        party: "Frente Guasú",
        role: "Expresidente",
        photo: "lugo.png",
        projects: &[
            project!("Impuesto a la soja", "Propuso nuevos impuestos a la exportación de soja para mejorar la distribución de la tierra."),
            project!("Reforma agraria", "Prometió una reforma agraria para mejorar la distribución de la tierra en Paraguay, pero enfrentó bloqueos parlamentarios y no avanzó."),
            project!("Lucha contra la corrupción", "Se propuso luchar contra el clientelismo y la corrupción en el gobierno."),
            project!("Promesa incumplida: Reforma agraria", "Compromiso central de su gobierno que no prosperó por oposición legislativa y fue truncado por su destitución en 2012."),
        ],
    },
    SeedPolitician {
        name: "Santiago Peña Palacios",
        party: "Partido Colorado – Honor Colorado",
        role: "Presidente",
        photo: "pena.png",
        projects: &[
            project!("Hospital de Itauguá", "Proyecto para convertir el Hospital Nacional en un centro de referencia internacional."),
            project!("Promesa incumplida: 500.000 nuevos puestos de trabajo", "Comprometió crear medio millón de empleos en su primer año, pero el desempleo aumentó."),
            project!("Promesa incumplida: Política exterior efectiva – cobro a Argentina por energía", "Prometió gestionar cobros por energía de Itaipú, pero no logró concretar los pagos."),
        ],
    },
    SeedPolitician {
        name: "Silvio Adalberto Ovelar Benítez",
        party: "Partido Colorado",
        role: "Senador",
        photo: "silvio.png",
        projects: &[
            project!("Letrina Cero", "Plan para reemplazar letrinas por baños sexados en escuelas, con ampliación presupuestaria para el MEC."),
            project!("PGN 2026", "Lideró el estudio del PGN 2026 priorizando salud y educación."),
            project!("Prevención de violencia adolescente", "Proyecto para prevenir la violencia adolescente con talleres y campañas."),
            project!("Promesa incumplida: Planillerismo y falta de respuestas institucionales", "Fue criticado por justificar casos de planillerismo en instituciones públicas sin respuestas efectivas."),
        ],
    },
    SeedPolitician {
        name: "Esperanza Martínez Lleida de Portillo",
        party: "Frente Guasú",
        role: "Senadora",
        photo: "esperanza.png",
        projects: &[
            project!("Ley de etiquetado OGM", "Obliga a identificar productos con organismos genéticamente modificados."),
            project!("Protección a periodistas", "Establece medidas para proteger a periodistas y defensores de derechos humanos."),
            project!("Prohibición de cianuro en minería", "Elimina el uso de cianuro en la minería para cuidar el ambiente."),
            project!("Promesa incumplida: Discursos frente a la realidad social", "Criticó al gobierno por promesas sociales incumplidas y falta de políticas efectivas en salud y bienestar."),
        ],
    },
    SeedPolitician {
        name: "Basilio 'Bachi' Núñez",
        party: "Partido Colorado – Honor Colorado",
        role: "Senador",
        photo: "basilio.png",
        projects: &[
            project!("Control del espacio aéreo", "Permitir el derribo o control firme de aeronaves ilícitas."),
            project!("Regulación de IA en Paraguay", "Propuesta para un marco legal de privacidad y transparencia en IA."),
            project!("Protección de Datos Personales", "Busca asegurar derechos ciudadanos en la nueva norma de datos personales."),
            project!("Promesa incumplida: Más viajes que cumplimiento", "Se le critica por priorizar viajes y exposición mediática sobre resultados legislativos concretos."),
        ],
    },
    SeedPolitician {
        name: "Raúl Latorre",
        party: "Partido Colorado – Honor Colorado",
        role: "Diputado",
        photo: "raul.png",
        projects: &[
            project!("Hambre Cero", "Programa que beneficia a más de un millón de niños en edad escolar."),
            project!("DNIT", "Creación de la Dirección Nacional de Ingresos Tributarios para mejorar recaudación."),
            project!("Modernización de defensa", "Impulsó la modernización de defensa nacional con radares y aviones Super Tucano."),
            project!("Promesa incumplida: Creación de empleo real", "Prometió generar trabajo y desarrollo, pero fue criticado por nepotismo y falta de resultados visibles."),
        ],
    },
    SeedPolitician {
        name: "Daniel Centurión",
        party: "Partido Colorado – Fuerza Republicana",
        role: "Diputado",
        photo: "daniel.png",
        projects: &[
            project!("Reforma del JEM", "Fortalece la independencia judicial en el Jurado de Enjuiciamiento de Magistrados."),
            project!("Ley de compensación económica", "Compensa a Asunción por su condición de capital mejorando infraestructura."),
            project!("Aumento de penas por corrupción", "Hasta 25 años para funcionarios en delitos graves."),
            project!("Promesa incumplida: Transparencia y rendición", "Prometió rendir cuentas en su gestión, pero no presentó resultados concretos ni informes públicos."),
        ],
    },
    SeedPolitician {
        name: "Mauricio Espínola",
        party: "Partido Colorado – Fuerza Republicana",
        role: "Diputado",
        photo: "mauricio.png",
        projects: &[
            project!("PRONARA", "Programa Nacional de Reproducción Asistida de acceso gratuito."),
            project!("Derechos humanos y jóvenes detenidos", "Promueve respeto a las libertades civiles."),
            project!("Fiscalización de fondos binacionales", "Promueve transparencia en Itaipú y Yacyretá."),
            project!("Promesa incumplida: Salud sin avances visibles", "Se le critica por falta de resultados en sus propuestas de salud pública y promesas no concretadas."),
        ],
    },
];

/// Load the built-in catalog. Politicians already present by name are left
/// untouched, so repeated runs insert nothing.
pub async fn ensure_seed_data(db: &DatabaseConnection) -> Result<SeedReport, DbErr> {
    let report = seed_catalog(db, CATALOG).await?;
    log::info!(
        "Seed catalog loaded: {} politicians and {} projects inserted",
        report.politicians,
        report.projects
    );
    Ok(report)
}

/// Insert every politician of `catalog` missing by name, together with their
/// projects, in a single transaction.
pub async fn seed_catalog(
    db: &DatabaseConnection,
    catalog: &[SeedPolitician],
) -> Result<SeedReport, DbErr> {
    let txn = db.begin().await?;
    let mut report = SeedReport::default();

    for entry in catalog {
        let existing = politicians::Entity::find()
            .filter(politicians::Column::Name.eq(entry.name))
            .one(&txn)
            .await?;
        if existing.is_some() {
            continue;
        }

        let politician = politicians::ActiveModel {
            name: Set(entry.name.to_owned()),
            party: Set(entry.party.to_owned()),
            role: Set(entry.role.to_owned()),
            photo: Set(entry.photo.to_owned()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        report.politicians += 1;

        if entry.projects.is_empty() {
            continue;
        }

        let rows = entry.projects.iter().map(|p| projects::ActiveModel {
            politician_id: Set(politician.id),
            title: Set(p.title.to_owned()),
            description: Set(p.description.to_owned()),
            ..Default::default()
        });
        projects::Entity::insert_many(rows).exec(&txn).await?;
        report.projects += entry.projects.len();
    }

    txn.commit().await?;
    Ok(report)
}

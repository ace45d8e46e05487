//! Politician lookups and role listings.

use crate::error::SurveyError;
use crate::orm::{politicians, projects};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Role listings offered by the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleFilter {
    President,
    Deputy,
    Senator,
}

impl RoleFilter {
    pub const ALL: [RoleFilter; 3] = [RoleFilter::President, RoleFilter::Deputy, RoleFilter::Senator];

    /// Lowercase substring searched for in a politician's role.
    /// Matches gendered and "ex-" forms too (Senadora, Expresidente).
    pub fn needle(self) -> &'static str {
        match self {
            RoleFilter::President => "presidente",
            RoleFilter::Deputy => "diputado",
            RoleFilter::Senator => "senador",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            RoleFilter::President => "presidentes",
            RoleFilter::Deputy => "diputados",
            RoleFilter::Senator => "senadores",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            RoleFilter::President => "Presidentes",
            RoleFilter::Deputy => "Diputados",
            RoleFilter::Senator => "Senadores",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            RoleFilter::President => "/presidents",
            RoleFilter::Deputy => "/deputies",
            RoleFilter::Senator => "/senators",
        }
    }
}

/// A politician with every project attributed to them.
#[derive(Clone, Debug)]
pub struct PoliticianWithProjects {
    pub politician: politicians::Model,
    pub projects: Vec<projects::Model>,
}

impl From<(politicians::Model, Vec<projects::Model>)> for PoliticianWithProjects {
    fn from((politician, projects): (politicians::Model, Vec<projects::Model>)) -> Self {
        Self {
            politician,
            projects,
        }
    }
}

/// Fetch a politician or fail with not-found.
pub async fn find_politician<C: ConnectionTrait>(
    db: &C,
    politician_id: i32,
) -> Result<politicians::Model, SurveyError> {
    politicians::Entity::find_by_id(politician_id)
        .one(db)
        .await?
        .ok_or(SurveyError::PoliticianNotFound(politician_id))
}

/// First politician by primary key, if any.
pub async fn first_politician<C: ConnectionTrait>(
    db: &C,
) -> Result<Option<politicians::Model>, DbErr> {
    politicians::Entity::find()
        .order_by_asc(politicians::Column::Id)
        .one(db)
        .await
}

/// Politicians whose role contains `role` (case-insensitive), with their
/// projects, in primary key order. `None` returns everyone.
///
/// The role is matched as plain text after Unicode lowercasing on both sides.
/// SQL `LIKE` would treat `%` and `_` as wildcards and SQLite's `lower()` only
/// folds ASCII, so the comparison happens here rather than in the query.
pub async fn find_by_role<C: ConnectionTrait>(
    db: &C,
    role: Option<&str>,
) -> Result<Vec<PoliticianWithProjects>, DbErr> {
    let rows = politicians::Entity::find()
        .find_with_related(projects::Entity)
        .order_by_asc(politicians::Column::Id)
        .order_by_asc(projects::Column::Id)
        .all(db)
        .await?;

    let needle = role.map(str::to_lowercase);

    Ok(rows
        .into_iter()
        .map(PoliticianWithProjects::from)
        .filter(|listed| match &needle {
            Some(needle) => listed.politician.holds_role(needle),
            None => true,
        })
        .collect())
}

/// List politicians for the public listing pages.
/// An empty result is reported as not-found.
pub async fn list_politicians<C: ConnectionTrait>(
    db: &C,
    filter: Option<RoleFilter>,
) -> Result<Vec<PoliticianWithProjects>, SurveyError> {
    let listed = find_by_role(db, filter.map(RoleFilter::needle)).await?;

    if listed.is_empty() {
        return Err(match filter {
            Some(filter) => SurveyError::NoPoliticiansWithRole(filter),
            None => SurveyError::NoPoliticians,
        });
    }

    Ok(listed)
}

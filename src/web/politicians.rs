//! Politician listings: everyone, or a single role.

use crate::error::SurveyError;
use crate::politicians::{list_politicians, PoliticianWithProjects, RoleFilter};
use actix_session::Session;
use actix_web::{get, web, HttpResponse, Responder};
use askama_actix::{Template, TemplateToResponse};
use sea_orm::DatabaseConnection;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_all_politicians);

    for filter in RoleFilter::ALL {
        conf.route(
            filter.path(),
            web::get().to(move |db: web::Data<DatabaseConnection>, session: Session| {
                render_listing(db, session, Some(filter))
            }),
        );
    }
}

#[derive(Template)]
#[template(path = "politicians.html")]
pub struct PoliticiansTemplate {
    pub site: crate::app_config::SiteConfig,
    pub messages: Vec<String>,
    pub heading: &'static str,
    pub politicians: Vec<PoliticianWithProjects>,
}

#[get("/list")]
pub async fn view_all_politicians(
    db: web::Data<DatabaseConnection>,
    session: Session,
) -> Result<impl Responder, SurveyError> {
    render_listing(db, session, None).await
}

async fn render_listing(
    db: web::Data<DatabaseConnection>,
    session: Session,
    filter: Option<RoleFilter>,
) -> Result<HttpResponse, SurveyError> {
    let politicians = list_politicians(db.get_ref(), filter).await?;

    Ok(PoliticiansTemplate {
        site: crate::app_config::site(),
        messages: crate::flash::take_flashes(&session),
        heading: filter.map(RoleFilter::heading).unwrap_or("Políticos"),
        politicians,
    }
    .to_response())
}

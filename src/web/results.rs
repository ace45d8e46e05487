//! Survey results per politician

use crate::error::SurveyError;
use crate::orm::politicians;
use crate::politicians::find_politician;
use crate::results::{tally_politician, QuestionTally};
use actix_session::Session;
use actix_web::{get, web, Responder};
use askama_actix::{Template, TemplateToResponse};
use sea_orm::DatabaseConnection;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_results);
}

#[get("/results/{politician_id}")]
pub async fn view_results(
    db: web::Data<DatabaseConnection>,
    session: Session,
    path: web::Path<i32>,
) -> Result<impl Responder, SurveyError> {
    #[derive(Template)]
    #[template(path = "results.html")]
    pub struct ResultsTemplate {
        pub site: crate::app_config::SiteConfig,
        pub messages: Vec<String>,
        pub politician: politicians::Model,
        pub results: Vec<QuestionTally>,
        /// Same records as `results`, serialized for the chart script.
        pub chart_data: String,
    }

    let db = db.get_ref();
    let politician = find_politician(db, path.into_inner()).await?;
    let results = tally_politician(db, &politician).await?;

    // Embedded in a <script> element, so a closing tag must not appear verbatim.
    let chart_data = serde_json::to_string(&results)
        .map_err(|e| SurveyError::Internal(format!("couldn't serialize results: {}", e)))?
        .replace("</", "<\\/");

    Ok(ResultsTemplate {
        site: crate::app_config::site(),
        messages: crate::flash::take_flashes(&session),
        politician,
        results,
        chart_data,
    }
    .to_response())
}

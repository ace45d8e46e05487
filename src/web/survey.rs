//! Survey form and answer submission endpoints

use crate::constants::SURVEY_SAVED_MESSAGE;
use crate::error::SurveyError;
use crate::flash::{push_flash, take_flashes};
use crate::orm::{politicians, questions};
use crate::politicians::{find_politician, first_politician};
use crate::survey::{ensure_questions, load_questions, opinion_options, submit_survey, SurveySubmission};
use actix_session::Session;
use actix_web::http::header;
use actix_web::{get, post, route, web, HttpResponse, Responder};
use askama_actix::{Template, TemplateToResponse};
use sea_orm::DatabaseConnection;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_first_survey)
        .service(view_survey)
        .service(submit_survey_form);
}

#[derive(Template)]
#[template(path = "survey.html")]
pub struct SurveyTemplate {
    pub site: crate::app_config::SiteConfig,
    pub messages: Vec<String>,
    pub politician: politicians::Model,
    pub questions: Vec<questions::Model>,
    pub options: Vec<(i32, String)>,
}

/// Send the respondent to the survey of the first politician.
#[route("/survey", method = "GET", method = "POST")]
pub async fn view_first_survey(
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, SurveyError> {
    let politician = first_politician(db.get_ref())
        .await?
        .ok_or(SurveyError::NoPoliticians)?;

    Ok(HttpResponse::Found()
        .append_header((header::LOCATION, politician.survey_url()))
        .finish())
}

#[get("/survey/{politician_id}")]
pub async fn view_survey(
    db: web::Data<DatabaseConnection>,
    session: Session,
    path: web::Path<i32>,
) -> Result<impl Responder, SurveyError> {
    let db = db.get_ref();
    let politician = find_politician(db, path.into_inner()).await?;

    ensure_questions(db).await?;
    let questions = load_questions(db).await?;

    Ok(SurveyTemplate {
        site: crate::app_config::site(),
        messages: take_flashes(&session),
        politician,
        questions,
        options: opinion_options(),
    }
    .to_response())
}

#[post("/survey/{politician_id}")]
pub async fn submit_survey_form(
    db: web::Data<DatabaseConnection>,
    session: Session,
    path: web::Path<i32>,
    form: web::Form<Vec<(String, String)>>,
) -> Result<impl Responder, SurveyError> {
    let submission = SurveySubmission::new(form.into_inner());
    let target = submission.redirect_target();

    submit_survey(db.get_ref(), path.into_inner(), &submission).await?;
    push_flash(&session, SURVEY_SAVED_MESSAGE)?;

    Ok(HttpResponse::SeeOther()
        .append_header((header::LOCATION, target))
        .finish())
}

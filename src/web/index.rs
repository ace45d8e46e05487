//! Home and institutional pages.

use actix_session::Session;
use actix_web::{get, Responder};
use askama_actix::{Template, TemplateToResponse};

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_index).service(view_about);
}

#[get("/")]
pub async fn view_index(session: Session) -> impl Responder {
    #[derive(Template)]
    #[template(path = "index.html")]
    pub struct IndexTemplate {
        pub site: crate::app_config::SiteConfig,
        pub messages: Vec<String>,
    }

    IndexTemplate {
        site: crate::app_config::site(),
        messages: crate::flash::take_flashes(&session),
    }
    .to_response()
}

#[get("/about")]
pub async fn view_about(session: Session) -> impl Responder {
    #[derive(Template)]
    #[template(path = "about.html")]
    pub struct AboutTemplate {
        pub site: crate::app_config::SiteConfig,
        pub messages: Vec<String>,
    }

    AboutTemplate {
        site: crate::app_config::site(),
        messages: crate::flash::take_flashes(&session),
    }
    .to_response()
}

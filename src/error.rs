//! Errors surfaced by survey operations and their HTTP rendering.

use crate::politicians::RoleFilter;
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;

/// Survey operation errors.
#[derive(Debug)]
pub enum SurveyError {
    /// No politician has the requested id.
    PoliticianNotFound(i32),
    /// The store holds no politicians at all.
    NoPoliticians,
    /// No politician matches a role listing.
    NoPoliticiansWithRole(RoleFilter),
    /// A submitted option is not an integer.
    InvalidOption { field: String, value: String },
    /// A submitted option is an integer outside the offered options.
    OptionOutOfRange { field: String, value: i32 },
    /// Session or rendering failure unrelated to storage.
    Internal(String),
    /// Storage failure.
    Database(DbErr),
}

impl std::fmt::Display for SurveyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurveyError::PoliticianNotFound(id) => {
                write!(f, "No existe el político solicitado ({}).", id)
            }
            SurveyError::NoPoliticians => write!(f, "No hay políticos cargados"),
            SurveyError::NoPoliticiansWithRole(filter) => {
                write!(f, "No hay {} cargados", filter.plural())
            }
            SurveyError::InvalidOption { field, value } => {
                write!(f, "Respuesta inválida en {}: \"{}\" no es una opción.", field, value)
            }
            SurveyError::OptionOutOfRange { field, value } => write!(
                f,
                "Respuesta inválida en {}: la opción {} no existe (1-{}).",
                field,
                value,
                crate::constants::OPINION_OPTION_COUNT
            ),
            SurveyError::Internal(msg) => write!(f, "Internal error: {}", msg),
            SurveyError::Database(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for SurveyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurveyError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DbErr> for SurveyError {
    fn from(e: DbErr) -> Self {
        SurveyError::Database(e)
    }
}

impl SurveyError {
    pub fn is_not_found(&self) -> bool {
        self.status_code() == StatusCode::NOT_FOUND
    }
}

impl ResponseError for SurveyError {
    fn status_code(&self) -> StatusCode {
        match self {
            SurveyError::PoliticianNotFound(_)
            | SurveyError::NoPoliticians
            | SurveyError::NoPoliticiansWithRole(_) => StatusCode::NOT_FOUND,
            SurveyError::InvalidOption { .. } | SurveyError::OptionOutOfRange { .. } => {
                StatusCode::BAD_REQUEST
            }
            SurveyError::Internal(_) | SurveyError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            SurveyError::Internal(_) | SurveyError::Database(_) => {
                log::error!("{}", self);
                "Error interno del servidor.".to_owned()
            }
            _ => self.to_string(),
        };

        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(format!("<h2>{}</h2>", escape_html(&message)))
    }
}

/// Submitted values end up in error messages, so they are escaped before
/// being placed in the inline response.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

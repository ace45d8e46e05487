//! Application-wide constants
//!
//! This module contains constants used throughout the application.

/// Number of opinion options offered for every question.
/// Options are numbered from 1 through this value.
pub const OPINION_OPTION_COUNT: i32 = 4;

/// Prefix of form fields carrying an answer, followed by the question ordinal.
pub const ANSWER_FIELD_PREFIX: &str = "preg";

/// Form field naming where to send the respondent after a submission.
pub const REDIRECT_FIELD: &str = "redirect_url";

/// Where respondents land after submitting when no redirect was requested.
pub const DEFAULT_REDIRECT_PATH: &str = "/list";

/// Confirmation queued for the next page after a successful submission.
pub const SURVEY_SAVED_MESSAGE: &str = "Encuesta guardada correctamente.";

/// Catalogued projects with this title prefix are promises that were not kept.
pub const BROKEN_PROMISE_PREFIX: &str = "Promesa incumplida";

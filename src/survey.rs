//! Survey questions and answer submission.

use crate::constants::{ANSWER_FIELD_PREFIX, DEFAULT_REDIRECT_PATH, OPINION_OPTION_COUNT, REDIRECT_FIELD};
use crate::error::SurveyError;
use crate::orm::{answers, questions};
use crate::politicians::find_politician;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, TransactionTrait,
};

/// The canonical survey, in order. A question's ordinal is its 1-based
/// position in this list.
pub const QUESTIONS: [&str; 7] = [
    "¿Cumple con sus promesas?",
    "¿Nivel de transparencia?",
    "¿Usa correctamente los recursos?",
    "¿Volverías a votarlo?",
    "¿Compromiso con el bienestar ciudadano?",
    "¿Rinde cuentas ante la ciudadanía?",
    "¿Palabra que lo describe mejor?",
];

pub fn field_name_for(ordinal: i32) -> String {
    format!("{}{}", ANSWER_FIELD_PREFIX, ordinal)
}

/// Label shown for an opinion option.
pub fn option_label(option: i32) -> String {
    format!("Opción {}", option)
}

/// Option values paired with their labels, in option order.
pub fn opinion_options() -> Vec<(i32, String)> {
    (1..=OPINION_OPTION_COUNT)
        .map(|option| (option, option_label(option)))
        .collect()
}

/// Create the canonical questions unless all of them already exist.
///
/// Rows are keyed by ordinal and conflicting inserts are skipped, so
/// concurrent first views leave exactly one row per question.
pub async fn ensure_questions<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let existing = questions::Entity::find().count(db).await?;
    if existing >= QUESTIONS.len() as u64 {
        return Ok(());
    }

    let rows = QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, text)| questions::ActiveModel {
            ordinal: Set(i as i32 + 1),
            text: Set((*text).to_owned()),
            ..Default::default()
        });

    let inserted = questions::Entity::insert_many(rows)
        .on_conflict(
            OnConflict::column(questions::Column::Ordinal)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    log::info!("Created {} survey questions", inserted);
    Ok(())
}

/// All questions in canonical order.
pub async fn load_questions<C: ConnectionTrait>(db: &C) -> Result<Vec<questions::Model>, DbErr> {
    questions::Entity::find()
        .order_by_asc(questions::Column::Ordinal)
        .all(db)
        .await
}

/// Raw form fields of a survey submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurveySubmission {
    fields: Vec<(String, String)>,
}

impl SurveySubmission {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value of a field. Blank values count as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Where to send the respondent afterwards. Only local paths are
    /// honoured; anything else falls back to the listing.
    pub fn redirect_target(&self) -> String {
        match self.field(REDIRECT_FIELD) {
            Some(target) if is_local_path(target) => target.to_owned(),
            _ => DEFAULT_REDIRECT_PATH.to_owned(),
        }
    }

    /// Pair each answered question with its parsed option.
    /// Unanswered questions are skipped; any malformed value rejects the
    /// whole submission.
    pub fn parse_answers(
        &self,
        questions: &[questions::Model],
    ) -> Result<Vec<ParsedAnswer>, SurveyError> {
        let mut parsed = Vec::with_capacity(questions.len());

        for question in questions {
            let field = question.field_name();
            let raw = match self.field(&field) {
                Some(raw) => raw,
                None => continue,
            };

            let option = raw.parse::<i32>().map_err(|_| SurveyError::InvalidOption {
                field: field.clone(),
                value: raw.to_owned(),
            })?;

            if !(1..=OPINION_OPTION_COUNT).contains(&option) {
                return Err(SurveyError::OptionOutOfRange {
                    field,
                    value: option,
                });
            }

            parsed.push(ParsedAnswer {
                question_id: question.id,
                option,
            });
        }

        Ok(parsed)
    }
}

/// Browsers drop tabs and newlines from URLs, so control characters are
/// refused outright; they could also turn `/\t/host` into `//host`.
fn is_local_path(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(char::is_control)
}

/// A validated answer ready to be stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedAnswer {
    pub question_id: i32,
    pub option: i32,
}

/// Store answers for a politician as one unit of work.
pub async fn record_answers(
    db: &DatabaseConnection,
    politician_id: i32,
    parsed: &[ParsedAnswer],
) -> Result<usize, DbErr> {
    if parsed.is_empty() {
        return Ok(0);
    }

    let now = chrono::Utc::now().naive_utc();
    let rows = parsed.iter().map(|answer| answers::ActiveModel {
        politician_id: Set(politician_id),
        question_id: Set(answer.question_id),
        option_value: Set(answer.option),
        created_at: Set(now),
        ..Default::default()
    });

    let txn = db.begin().await?;
    answers::Entity::insert_many(rows).exec(&txn).await?;
    txn.commit().await?;

    Ok(parsed.len())
}

/// Validate and store a survey submission for a politician.
/// Returns the number of answers stored.
pub async fn submit_survey(
    db: &DatabaseConnection,
    politician_id: i32,
    submission: &SurveySubmission,
) -> Result<usize, SurveyError> {
    let politician = find_politician(db, politician_id).await?;

    ensure_questions(db).await?;
    let questions = load_questions(db).await?;
    let parsed = submission.parse_answers(&questions)?;

    let stored = record_answers(db, politician.id, &parsed).await?;
    log::debug!(
        "Stored {} answers for politician {} ({})",
        stored,
        politician.id,
        politician.name
    );

    Ok(stored)
}

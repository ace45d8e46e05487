//! Per-politician answer tallies, shaped for charts.

use crate::constants::OPINION_OPTION_COUNT;
use crate::error::SurveyError;
use crate::orm::{answers, politicians, questions};
use crate::politicians::find_politician;
use crate::survey::{load_questions, option_label};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
};
use serde::Serialize;
use std::collections::HashMap;

/// Answer counts for one question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionTally {
    pub question: String,
    pub labels: Vec<String>,
    pub counts: Vec<i64>,
}

impl QuestionTally {
    pub fn total(&self) -> i64 {
        self.counts.iter().sum()
    }
}

#[derive(Debug, FromQueryResult)]
struct OptionCount {
    question_id: i32,
    option_value: i32,
    total: i64,
}

/// Count answers per question and option for a politician.
/// Records follow canonical question order; options without answers read zero.
pub async fn compute_results<C: ConnectionTrait>(
    db: &C,
    politician_id: i32,
) -> Result<Vec<QuestionTally>, SurveyError> {
    let politician = find_politician(db, politician_id).await?;
    Ok(tally_politician(db, &politician).await?)
}

/// Tallies for a politician that has already been looked up.
pub async fn tally_politician<C: ConnectionTrait>(
    db: &C,
    politician: &politicians::Model,
) -> Result<Vec<QuestionTally>, DbErr> {
    let questions = load_questions(db).await?;

    let counts = answers::Entity::find()
        .select_only()
        .column(answers::Column::QuestionId)
        .column(answers::Column::OptionValue)
        .column_as(Expr::col(answers::Column::Id).count(), "total")
        .filter(answers::Column::PoliticianId.eq(politician.id))
        .group_by(answers::Column::QuestionId)
        .group_by(answers::Column::OptionValue)
        .into_model::<OptionCount>()
        .all(db)
        .await?;

    let observed: HashMap<(i32, i32), i64> = counts
        .into_iter()
        .map(|c| ((c.question_id, c.option_value), c.total))
        .collect();

    Ok(tally(&questions, &observed))
}

fn tally(questions: &[questions::Model], observed: &HashMap<(i32, i32), i64>) -> Vec<QuestionTally> {
    questions
        .iter()
        .map(|question| {
            let options = 1..=OPINION_OPTION_COUNT;
            QuestionTally {
                question: question.text.clone(),
                labels: options.clone().map(option_label).collect(),
                counts: options
                    .map(|option| {
                        observed
                            .get(&(question.id, option))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<questions::Model> {
        vec![
            questions::Model {
                id: 5,
                ordinal: 1,
                text: "Primera".to_owned(),
            },
            questions::Model {
                id: 6,
                ordinal: 2,
                text: "Segunda".to_owned(),
            },
        ]
    }

    #[test]
    fn test_unanswered_options_read_zero() {
        let tallies = tally(&questions(), &HashMap::new());
        assert_eq!(tallies.len(), 2);
        for t in &tallies {
            assert_eq!(t.counts, vec![0, 0, 0, 0]);
            assert_eq!(t.labels, vec!["Opción 1", "Opción 2", "Opción 3", "Opción 4"]);
        }
    }

    #[test]
    fn test_counts_land_on_their_question_and_option() {
        let observed = HashMap::from([((5, 3), 2), ((6, 1), 7), ((6, 4), 1)]);
        let tallies = tally(&questions(), &observed);
        assert_eq!(tallies[0].question, "Primera");
        assert_eq!(tallies[0].counts, vec![0, 0, 2, 0]);
        assert_eq!(tallies[1].counts, vec![7, 0, 0, 1]);
        assert_eq!(tallies[1].total(), 8);
    }

    #[test]
    fn test_unknown_options_are_ignored() {
        let observed = HashMap::from([((5, 9), 4)]);
        let tallies = tally(&questions(), &observed);
        assert_eq!(tallies[0].counts, vec![0, 0, 0, 0]);
    }
}

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::questionnaire::{Dimension, Question, QuestionKind, Questionnaire, LIKERT_MAX};
use super::result::AssessmentResult;

/// Raw answer value: an option index for likert/choice/scenario items, the
/// selected value for sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answer(pub u32);

impl From<u32> for Answer {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Answers keyed by question id; persisted as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: BTreeMap<String, Answer>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store an answer, replacing any earlier answer to the same question.
    pub fn record(&mut self, question: &Question, answer: Answer) -> Result<(), ResponseError> {
        validate_answer(question, answer)?;
        self.answers.insert(question.id.clone(), answer);
        Ok(())
    }

    /// Record an answer by question id, looking the question up in the questionnaire.
    pub fn record_by_id(
        &mut self,
        questionnaire: &Questionnaire,
        question_id: &str,
        answer: Answer,
    ) -> Result<(), ResponseError> {
        let question = questionnaire
            .find(question_id)
            .ok_or_else(|| ResponseError::UnknownQuestion(question_id.to_string()))?;
        self.record(question, answer)
    }

    pub fn clear(&mut self, question_id: &str) -> Option<Answer> {
        self.answers.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<Answer> {
        self.answers.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Answer)> {
        self.answers.iter().map(|(id, answer)| (id.as_str(), *answer))
    }

    /// Rebuild a response set from an untrusted id→value mapping, validating
    /// every entry against the questionnaire.
    pub fn from_map(
        questionnaire: &Questionnaire,
        raw: BTreeMap<String, u32>,
    ) -> Result<Self, ResponseError> {
        let mut responses = Self::new();
        for (question_id, value) in raw {
            responses.record_by_id(questionnaire, &question_id, Answer(value))?;
        }
        Ok(responses)
    }
}

/// Inclusive range of answers a question accepts.
pub fn answer_range(question: &Question) -> Result<RangeInclusive<u32>, ResponseError> {
    match question.kind {
        QuestionKind::Likert => Ok(0..=LIKERT_MAX),
        QuestionKind::Slider => {
            let (min, max) = (question.slider_min(), question.slider_max());
            if min > max {
                return Err(ResponseError::InvertedRange {
                    question_id: question.id.clone(),
                    min,
                    max,
                });
            }
            Ok(min..=max)
        }
        QuestionKind::MultipleChoice | QuestionKind::Scenario | QuestionKind::Ranking => {
            if question.options.is_empty() {
                return Err(ResponseError::NoOptions(question.id.clone()));
            }
            Ok(0..=question.options.len() as u32 - 1)
        }
    }
}

fn validate_answer(question: &Question, answer: Answer) -> Result<(), ResponseError> {
    let range = answer_range(question)?;
    if !range.contains(&answer.0) {
        return Err(ResponseError::OutOfRange {
            question_id: question.id.clone(),
            value: answer.0,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// Rejection raised when an answer cannot be recorded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("answer {value} for question '{question_id}' is outside {min}..={max}")]
    OutOfRange {
        question_id: String,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("slider '{question_id}' has min {min} above max {max}")]
    InvertedRange {
        question_id: String,
        min: u32,
        max: u32,
    },
    #[error("question '{0}' has no selectable options")]
    NoOptions(String),
    #[error("assessment has no questions")]
    EmptyQuestionnaire,
}

/// Result of advancing the session cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved(usize),
    Completed,
}

/// Wizard-style walk over a questionnaire: one cursor, one response set.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    questionnaire: Questionnaire,
    responses: ResponseSet,
    cursor: usize,
    started_at: DateTime<Utc>,
}

impl AssessmentSession {
    pub fn new(questionnaire: Questionnaire, started_at: DateTime<Utc>) -> Self {
        Self {
            questionnaire,
            responses: ResponseSet::new(),
            cursor: 0,
            started_at,
        }
    }

    pub fn with_responses(mut self, responses: ResponseSet) -> Self {
        self.responses = responses;
        self
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn current(&self) -> Option<&Question> {
        self.questionnaire.get(self.cursor)
    }

    pub fn current_dimension(&self) -> Option<Dimension> {
        self.current().map(|question| question.dimension)
    }

    /// Answer the question under the cursor.
    pub fn answer(&mut self, answer: Answer) -> Result<(), ResponseError> {
        let question = self
            .questionnaire
            .get(self.cursor)
            .ok_or(ResponseError::EmptyQuestionnaire)?;
        self.responses.record(question, answer)
    }

    pub fn next(&mut self) -> Navigation {
        if self.cursor + 1 < self.questionnaire.len() {
            self.cursor += 1;
            Navigation::Moved(self.cursor)
        } else {
            Navigation::Completed
        }
    }

    pub fn previous(&mut self) -> usize {
        self.cursor = self.cursor.saturating_sub(1);
        self.cursor
    }

    /// Position-based progress through the questionnaire, 0–100.
    pub fn progress(&self) -> f64 {
        if self.questionnaire.is_empty() {
            return 0.0;
        }
        (self.cursor + 1) as f64 / self.questionnaire.len() as f64 * 100.0
    }

    /// Share of answered questions per dimension, 0–100.
    pub fn dimension_progress(&self) -> BTreeMap<Dimension, f64> {
        Dimension::ordered()
            .into_iter()
            .map(|dimension| {
                let mut total = 0usize;
                let mut answered = 0usize;
                for question in self.questionnaire.for_dimension(dimension) {
                    total += 1;
                    if self.responses.contains(&question.id) {
                        answered += 1;
                    }
                }
                let share = if total == 0 {
                    0.0
                } else {
                    answered as f64 / total as f64 * 100.0
                };
                (dimension, share)
            })
            .collect()
    }

    /// Score the session and build the result record.
    pub fn complete(&self, completed_at: DateTime<Utc>) -> AssessmentResult {
        AssessmentResult::build(
            &self.questionnaire,
            &self.responses,
            self.started_at,
            completed_at,
        )
    }
}

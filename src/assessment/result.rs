use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::PersonalityProfile;
use super::questionnaire::Questionnaire;
use super::responses::ResponseSet;
use super::scoring::{score_dimensions, DimensionScores};

/// Completed assessment as persisted and returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub completed_at: DateTime<Utc>,
    pub time_taken_minutes: u32,
    pub dimension_scores: DimensionScores,
    /// Mirror of `dimension_scores` for readers of the older record layout.
    #[serde(default)]
    pub raw_scores: DimensionScores,
    pub personality_profile: PersonalityProfile,
    pub answers: ResponseSet,
    pub overall_score: u8,
}

impl AssessmentResult {
    pub fn build(
        questionnaire: &Questionnaire,
        responses: &ResponseSet,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let dimension_scores = score_dimensions(questionnaire, responses);
        Self::from_scores(dimension_scores, responses.clone(), started_at, completed_at)
    }

    pub fn from_scores(
        dimension_scores: DimensionScores,
        answers: ResponseSet,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            completed_at,
            time_taken_minutes: minutes_between(started_at, completed_at),
            dimension_scores,
            raw_scores: dimension_scores,
            personality_profile: PersonalityProfile::synthesize(&dimension_scores),
            answers,
            overall_score: dimension_scores.overall(),
        }
    }
}

/// Whole minutes between two instants, rounded; clock skew yields 0.
fn minutes_between(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> u32 {
    let seconds = (completed_at - started_at).num_seconds().max(0);
    u32::try_from((seconds + 30) / 60).unwrap_or(u32::MAX)
}

//! Orchestrates a finished assessment: trait analysis, career matching, skill
//! gaps and persistence of the outcome.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assessment::{AssessmentResult, AssessmentSession, DimensionScores};
use crate::careers::{
    analyze_skill_gaps, CareerCatalog, CareerMatcher, CareerRecommendation, SkillGap,
    TraitProfile,
};
use crate::learning::{Course, Learner, LearningCatalog, LearningError};
use crate::profile::UserProfile;
use crate::storage::{KeyValueStore, StoreError, UserDataStore};

/// Confidence reported by engines that do not estimate their own.
pub const DEFAULT_CONFIDENCE: f64 = 0.87;

/// Turns dimension scores into a full trait profile.
pub trait AssessmentEngine: Send + Sync {
    fn analyze(
        &self,
        scores: &DimensionScores,
        profile: &UserProfile,
    ) -> Result<TraitProfile, EngineError>;

    /// How far the engine trusts its own analysis, in `0.0..=1.0`.
    fn confidence(&self) -> f64 {
        DEFAULT_CONFIDENCE
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("assessment engine unavailable: {0}")]
    Unavailable(String),
    #[error("assessment engine rejected the input: {0}")]
    Rejected(String),
}

/// Deterministic engine deriving traits straight from the dimension scores.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalAssessmentEngine;

impl LocalAssessmentEngine {
    pub fn derive(&self, scores: &DimensionScores, profile: &UserProfile) -> TraitProfile {
        TraitProfile::from_dimensions(scores, &profile.skills)
    }
}

impl AssessmentEngine for LocalAssessmentEngine {
    fn analyze(
        &self,
        scores: &DimensionScores,
        profile: &UserProfile,
    ) -> Result<TraitProfile, EngineError> {
        Ok(self.derive(scores, profile))
    }
}

/// Which engine produced the traits behind a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    Engine,
    Fallback,
}

impl ReportSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Engine => "engine",
            Self::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorReport {
    pub result: AssessmentResult,
    pub traits: TraitProfile,
    pub recommendations: Vec<CareerRecommendation>,
    /// Gaps against the best-matching career; empty when nothing matched.
    pub skill_gaps: Vec<SkillGap>,
    /// Mean of the six aptitude scores.
    pub cognitive_score: f64,
    pub confidence: f64,
    pub source: ReportSource,
}

impl AdvisorReport {
    pub fn top_match(&self) -> Option<&CareerRecommendation> {
        self.recommendations.first()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Learning(#[from] LearningError),
}

pub struct AdvisorService<S, E> {
    store: UserDataStore<Arc<S>>,
    engine: Arc<E>,
    fallback: LocalAssessmentEngine,
    matcher: CareerMatcher,
}

impl<S, E> AdvisorService<S, E>
where
    S: KeyValueStore + 'static,
    E: AssessmentEngine + 'static,
{
    pub fn new(store: Arc<S>, engine: Arc<E>, catalog: CareerCatalog) -> Self {
        Self {
            store: UserDataStore::new(store),
            engine,
            fallback: LocalAssessmentEngine,
            matcher: CareerMatcher::new(catalog),
        }
    }

    pub fn store(&self) -> &UserDataStore<Arc<S>> {
        &self.store
    }

    /// Score the session, match careers and persist the outcome.
    pub fn complete_assessment(
        &self,
        session: &AssessmentSession,
        profile: &UserProfile,
        now: DateTime<Utc>,
    ) -> Result<AdvisorReport, AdvisorError> {
        let result = session.complete(now);

        let (traits, confidence, source) =
            match self.engine.analyze(&result.dimension_scores, profile) {
                Ok(traits) => (traits, self.engine.confidence(), ReportSource::Engine),
                Err(err) => {
                    warn!(error = %err, "assessment engine failed; using local analysis");
                    (
                        self.fallback.derive(&result.dimension_scores, profile),
                        self.fallback.confidence(),
                        ReportSource::Fallback,
                    )
                }
            };
        let cognitive_score = traits.aptitude.cognitive();

        let recommendations = self.matcher.recommend(&traits);
        let skill_gaps = recommendations
            .first()
            .and_then(|top| self.matcher.catalog().find(&top.title))
            .map(|career| analyze_skill_gaps(&career.required_skills, &traits.skills.levels()))
            .unwrap_or_default();

        self.store.save_profile(profile)?;
        self.store.save_assessment(&result)?;
        self.store.save_recommendations(&recommendations)?;
        self.store.save_skill_gaps(&skill_gaps)?;

        info!(
            overall = result.overall_score,
            top_match = recommendations.first().map(|r| r.title.as_str()).unwrap_or("none"),
            source = source.label(),
            "assessment completed"
        );

        Ok(AdvisorReport {
            result,
            traits,
            recommendations,
            skill_gaps,
            cognitive_score,
            confidence,
            source,
        })
    }

    /// Courses for the skill gaps saved by the last completed assessment.
    pub fn recommended_courses<L: LearningCatalog + ?Sized>(
        &self,
        learning: &L,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Course>, AdvisorError> {
        let gaps = self.store.skill_gaps()?;
        let learner = self
            .store
            .profile()?
            .map(|profile| Learner::from(&profile))
            .unwrap_or_default();
        Ok(learning.personalized_courses(&gaps, &learner, as_of)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{Answer, Navigation, QuestionKind, Questionnaire};
    use crate::learning::SimulatedCourseCatalog;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    struct OfflineEngine;

    impl AssessmentEngine for OfflineEngine {
        fn analyze(
            &self,
            _scores: &DimensionScores,
            _profile: &UserProfile,
        ) -> Result<TraitProfile, EngineError> {
            Err(EngineError::Unavailable("network down".to_string()))
        }

        fn confidence(&self) -> f64 {
            0.5
        }
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 2, 10, minute, 0)
            .single()
            .expect("valid time")
    }

    fn answered_session() -> AssessmentSession {
        let mut session = AssessmentSession::new(Questionnaire::standard(), at(0));
        loop {
            let value = match session.current() {
                Some(question) if question.kind == QuestionKind::Slider => question.slider_min(),
                _ => 0,
            };
            session.answer(Answer(value)).expect("lowest answer is valid");
            if matches!(session.next(), Navigation::Completed) {
                break;
            }
        }
        session
    }

    #[test]
    fn local_engine_report_is_persisted() {
        let store = Arc::new(MemoryStore::new());
        let service = AdvisorService::new(
            store.clone(),
            Arc::new(LocalAssessmentEngine),
            CareerCatalog::standard(),
        );
        let profile = UserProfile::new("Ravi", "Chennai, India");

        let report = service
            .complete_assessment(&answered_session(), &profile, at(14))
            .expect("report");
        assert_eq!(report.source, ReportSource::Engine);
        assert_eq!(report.result.time_taken_minutes, 14);
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(report.confidence, DEFAULT_CONFIDENCE);
        assert_eq!(report.cognitive_score, report.traits.aptitude.cognitive());

        let saved = UserDataStore::new(store);
        assert_eq!(saved.assessment().expect("assessment"), Some(report.result.clone()));
        assert_eq!(
            saved.recommendations().expect("recommendations"),
            report.recommendations
        );
        assert_eq!(saved.skill_gaps().expect("gaps"), report.skill_gaps);
    }

    #[test]
    fn engine_failure_falls_back_visibly() {
        let service = AdvisorService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(OfflineEngine),
            CareerCatalog::extended(),
        );
        let profile = UserProfile::default();
        let report = service
            .complete_assessment(&answered_session(), &profile, at(5))
            .expect("fallback report");
        assert_eq!(report.source, ReportSource::Fallback);

        let expected = LocalAssessmentEngine.derive(&report.result.dimension_scores, &profile);
        assert_eq!(report.traits, expected);
        assert_eq!(report.confidence, LocalAssessmentEngine.confidence());
        assert!(report.top_match().is_some());
    }

    #[test]
    fn courses_follow_saved_gaps() {
        let service = AdvisorService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(LocalAssessmentEngine),
            CareerCatalog::standard(),
        );
        let catalog = SimulatedCourseCatalog::default();

        let before = service
            .recommended_courses(&catalog, at(0))
            .expect("courses");
        assert!(before.is_empty());

        let report = service
            .complete_assessment(&answered_session(), &UserProfile::default(), at(9))
            .expect("report");
        assert!(!report.skill_gaps.is_empty());
        let courses = service
            .recommended_courses(&catalog, at(10))
            .expect("courses");
        let top_gap = &report.skill_gaps[0].skill;
        assert!(courses
            .iter()
            .any(|course| course.skills.iter().any(|skill| skill == top_gap)));
    }
}

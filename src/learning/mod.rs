//! Learning-resource collaborator: course recommendations, learning paths and
//! provider comparison, driven by skill gaps.

mod simulated;

pub use simulated::SimulatedCourseCatalog;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::careers::SkillGap;
use crate::profile::{ExperienceLevel, UserProfile};

pub const MAX_RECOMMENDATIONS: usize = 20;

/// Source of course recommendations for a set of skill gaps.
pub trait LearningCatalog: Send + Sync {
    fn personalized_courses(
        &self,
        gaps: &[SkillGap],
        learner: &Learner,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Course>, LearningError>;
    fn learning_path(
        &self,
        gaps: &[SkillGap],
        career_goal: &str,
        timeframe: &str,
        as_of: DateTime<Utc>,
    ) -> Result<LearningPath, LearningError>;
    fn provider_comparison(&self, skill: &str) -> Result<Vec<ProviderSummary>, LearningError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LearningError {
    #[error("career goal must not be empty")]
    EmptyGoal,
    #[error("course catalog unavailable: {0}")]
    Unavailable(String),
}

/// The parts of a user profile that influence course choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Learner {
    #[serde(default)]
    pub experience: Option<ExperienceLevel>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Learner {
    pub fn new(experience: Option<ExperienceLevel>, location: Option<String>) -> Self {
        Self {
            experience,
            location,
        }
    }

    pub fn is_in_india(&self) -> bool {
        self.location
            .as_deref()
            .map(|location| location.contains("India"))
            .unwrap_or(false)
    }

    pub fn is_early_career(&self) -> bool {
        self.experience
            .map(ExperienceLevel::is_early_career)
            .unwrap_or(false)
    }
}

impl From<&UserProfile> for Learner {
    fn from(profile: &UserProfile) -> Self {
        let location = profile.location.trim();
        Self {
            experience: Some(profile.experience),
            location: (!location.is_empty()).then(|| location.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Intensive,
}

impl CourseLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Intensive => "Intensive",
        }
    }

    /// Level suited to a gap, judged by where the learner currently stands.
    pub fn for_gap(gap: &SkillGap) -> Self {
        if gap.current < 30 {
            Self::Beginner
        } else if gap.current < 70 {
            Self::Intermediate
        } else {
            Self::Advanced
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceKind {
    Free,
    Paid,
    Subscription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoursePrice {
    pub amount: f64,
    pub currency: String,
    pub kind: PriceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Video,
    Reading,
    Assignment,
    Project,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseModule {
    pub title: String,
    pub duration: String,
    pub topics: Vec<String>,
    pub kind: ModuleKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructorInfo {
    pub name: String,
    pub credentials: Vec<String>,
    pub rating: f64,
    pub experience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionData {
    pub rate: u8,
    pub average_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_placement_rate: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_increase: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseReview {
    pub rating: u8,
    pub comment: String,
    pub helpful: u32,
    pub date: NaiveDate,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationType {
    Completion,
    Verified,
    Professional,
    University,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub url: String,
    pub rating: f64,
    pub students: u32,
    pub duration: String,
    pub level: CourseLevel,
    pub price: CoursePrice,
    pub skills: Vec<String>,
    pub description: String,
    pub syllabus: Vec<CourseModule>,
    pub instructor: InstructorInfo,
    pub completion: CompletionData,
    pub reviews: Vec<CourseReview>,
    pub relevance_score: f64,
    pub personalized_reason: String,
    pub certification_type: CertificationType,
    pub prerequisites: Vec<String>,
    pub outcomes: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathMilestone {
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiData {
    pub time_to_complete: String,
    pub avg_salary_increase: u8,
    pub job_placement_rate: u8,
    pub payback_period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: CourseLevel,
    pub courses: Vec<Course>,
    pub milestones: Vec<PathMilestone>,
    pub skills_gained: Vec<String>,
    pub career_outcomes: Vec<String>,
    pub roi: RoiData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    University,
    Platform,
    Bootcamp,
    Government,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSummary {
    pub name: String,
    pub kind: ProviderKind,
    pub rating: f64,
    pub accreditation: Vec<String>,
    pub specializations: Vec<String>,
    pub pricing_model: String,
    pub support_level: String,
}

/// How well a course level suits the learner's experience: 1 for a direct match, else 0.5.
pub fn level_match(level: CourseLevel, experience: Option<ExperienceLevel>) -> f64 {
    match (experience, level) {
        (Some(ExperienceLevel::None), CourseLevel::Beginner)
        | (Some(ExperienceLevel::Junior), CourseLevel::Intermediate)
        | (Some(ExperienceLevel::MidLevel), CourseLevel::Advanced) => 1.0,
        _ => 0.5,
    }
}

pub fn price_score(price: &CoursePrice) -> f64 {
    if price.kind == PriceKind::Free {
        1.0
    } else if price.amount < 100.0 {
        0.8
    } else if price.amount < 500.0 {
        0.6
    } else {
        0.4
    }
}

/// Gap coverage dominates, then rating, level fit and price.
pub fn ranking_score(course: &Course, gaps: &[SkillGap], learner: &Learner) -> f64 {
    let covered = gaps
        .iter()
        .filter(|gap| course.skills.iter().any(|skill| skill == &gap.skill))
        .count() as f64;

    covered * 40.0
        + course.rating * 6.0
        + level_match(course.level, learner.experience) * 20.0
        + price_score(&course.price) * 10.0
}

/// Stable sort by ranking score, best first.
pub fn rank_courses(courses: Vec<Course>, gaps: &[SkillGap], learner: &Learner) -> Vec<Course> {
    let mut scored: Vec<(f64, Course)> = courses
        .into_iter()
        .map(|course| (ranking_score(&course, gaps, learner), course))
        .collect();
    scored.sort_by(|left, right| right.0.total_cmp(&left.0));
    scored.into_iter().map(|(_, course)| course).collect()
}

pub fn relevance_score(gap: &SkillGap, learner: &Learner) -> f64 {
    let gap_size = f64::from(gap.gap());
    let mut score = 70.0 + (gap_size / 2.0).min(20.0);
    if learner.experience == Some(ExperienceLevel::None) && gap.current < 50 {
        score += 10.0;
    }
    score.min(100.0)
}

/// Difficulty of a path from the mean current level; no gaps means a beginner path.
pub fn path_difficulty(gaps: &[SkillGap]) -> CourseLevel {
    if gaps.is_empty() {
        return CourseLevel::Beginner;
    }
    let total: f64 = gaps.iter().map(|gap| f64::from(gap.current)).sum();
    let average = total / gaps.len() as f64;
    if average < 40.0 {
        CourseLevel::Beginner
    } else if average < 70.0 {
        CourseLevel::Intermediate
    } else {
        CourseLevel::Advanced
    }
}

/// Beginner courses first, then by relevance, best first.
pub fn order_for_path(mut courses: Vec<Course>) -> Vec<Course> {
    courses.sort_by(|left, right| {
        let left_beginner = left.level == CourseLevel::Beginner;
        let right_beginner = right.level == CourseLevel::Beginner;
        right_beginner
            .cmp(&left_beginner)
            .then_with(|| right.relevance_score.total_cmp(&left.relevance_score))
    });
    courses
}

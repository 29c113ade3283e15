//! Career matching: trait derivation, the candidate catalog, ranking and skill gaps.

pub mod catalog;
pub mod matcher;
pub mod skills;
pub mod traits;

pub use catalog::{
    CareerCandidate, CareerCatalog, CatalogKind, FitBlend, SkillRequirement, TraitSignal,
    WeightedSignal,
};
pub use matcher::{CareerMatcher, CareerRecommendation, FitScore};
pub use skills::{analyze_skill_gaps, GapPriority, SkillGap};
pub use traits::{
    AptitudeScores, BigFive, HollandScores, InterestProfile, SkillAssessment, TraitProfile,
    WorkStyleScores,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{CareerCandidate, CareerCatalog};
use super::traits::TraitProfile;

pub const PERSONALITY_WEIGHT: f64 = 0.30;
pub const SKILLS_WEIGHT: f64 = 0.30;
pub const INTERESTS_WEIGHT: f64 = 0.25;
pub const APTITUDE_WEIGHT: f64 = 0.15;

/// Per-axis fit of one career, each 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitScore {
    pub personality: f64,
    pub skills: f64,
    pub interests: f64,
    pub aptitude: f64,
}

impl FitScore {
    /// Weighted match percentage, rounded and clamped to 0–100.
    pub fn match_percentage(&self) -> u8 {
        let weighted = self.personality * PERSONALITY_WEIGHT
            + self.skills * SKILLS_WEIGHT
            + self.interests * INTERESTS_WEIGHT
            + self.aptitude * APTITUDE_WEIGHT;
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub title: String,
    pub match_percentage: u8,
    pub fit_score: FitScore,
    pub reasoning: Vec<String>,
    pub growth_potential: f64,
}

/// Scores every catalog candidate against a trait profile and ranks them.
#[derive(Debug, Clone, Default)]
pub struct CareerMatcher {
    catalog: CareerCatalog,
}

impl CareerMatcher {
    pub fn new(catalog: CareerCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    pub fn recommend(&self, traits: &TraitProfile) -> Vec<CareerRecommendation> {
        let recommendations = self
            .catalog
            .candidates()
            .iter()
            .map(|candidate| evaluate(candidate, traits))
            .collect();
        let ranked = rank(recommendations);
        debug!(
            candidates = ranked.len(),
            top = ranked.first().map(|rec| rec.title.as_str()).unwrap_or("none"),
            "career candidates ranked"
        );
        ranked
    }
}

pub fn evaluate(candidate: &CareerCandidate, traits: &TraitProfile) -> CareerRecommendation {
    let fit_score = FitScore {
        personality: candidate.personality.evaluate(traits),
        skills: candidate.skills.evaluate(traits),
        interests: candidate.interests.evaluate(traits),
        aptitude: candidate.aptitude.evaluate(traits),
    };

    CareerRecommendation {
        title: candidate.title.clone(),
        match_percentage: fit_score.match_percentage(),
        reasoning: reasoning(&candidate.title, &fit_score, traits),
        growth_potential: candidate.growth_potential,
        fit_score,
    }
}

/// Descending by match; equal matches keep their incoming order.
pub fn rank(mut recommendations: Vec<CareerRecommendation>) -> Vec<CareerRecommendation> {
    recommendations.sort_by(|left, right| right.match_percentage.cmp(&left.match_percentage));
    recommendations
}

fn reasoning(title: &str, fit: &FitScore, traits: &TraitProfile) -> Vec<String> {
    let mut reasons = Vec::new();
    if fit.personality > 75.0 {
        reasons.push(format!(
            "Your personality profile shows strong alignment with {title} requirements"
        ));
    }
    if fit.aptitude > 80.0 {
        reasons.push(format!(
            "Exceptional aptitude scores in areas critical for {title}"
        ));
    }
    if traits.work_style.analytical > 70.0 && title.contains("Data") {
        reasons.push("High analytical thinking capability matches data-driven roles".to_string());
    }
    if traits.big_five.openness > 70.0 {
        reasons.push("High openness to experience supports learning new technologies".to_string());
    }
    reasons
}

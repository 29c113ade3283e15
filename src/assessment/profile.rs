use serde::{Deserialize, Serialize};

use super::questionnaire::Dimension;
use super::scoring::DimensionScores;

/// Overall working style, picked by the first rule that matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkStyle {
    #[serde(rename = "Collaborative Leader")]
    CollaborativeLeader,
    #[serde(rename = "Analytical Strategist")]
    AnalyticalStrategist,
    #[serde(rename = "Independent Innovator")]
    IndependentInnovator,
    #[serde(rename = "Balanced Professional")]
    BalancedProfessional,
}

impl WorkStyle {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CollaborativeLeader => "Collaborative Leader",
            Self::AnalyticalStrategist => "Analytical Strategist",
            Self::IndependentInnovator => "Independent Innovator",
            Self::BalancedProfessional => "Balanced Professional",
        }
    }

    pub fn classify(scores: &DimensionScores) -> Self {
        if scores.personality > 60 && scores.eq > 60 {
            Self::CollaborativeLeader
        } else if scores.aptitude > 70 && scores.orientation > 60 {
            Self::AnalyticalStrategist
        } else if scores.interest > 70 && scores.personality < 50 {
            Self::IndependentInnovator
        } else {
            Self::BalancedProfessional
        }
    }
}

/// Qualitative summary derived from dimension scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub strengths: Vec<String>,
    pub work_style: WorkStyle,
    pub career_fit: Vec<String>,
    pub development_areas: Vec<String>,
    pub insights: Vec<String>,
}

impl PersonalityProfile {
    pub fn synthesize(scores: &DimensionScores) -> Self {
        Self {
            strengths: strengths(scores),
            work_style: WorkStyle::classify(scores),
            career_fit: career_fit(scores),
            development_areas: development_areas(scores),
            insights: insights(scores),
        }
    }
}

const fn strength_label(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Orientation => "Strategic Planning",
        Dimension::Interest => "Intrinsic Motivation",
        Dimension::Personality => "Team Collaboration",
        Dimension::Aptitude => "Problem Solving",
        Dimension::Eq => "Emotional Intelligence",
    }
}

fn strengths(scores: &DimensionScores) -> Vec<String> {
    Dimension::ordered()
        .into_iter()
        .filter(|dimension| scores.get(*dimension) > 70)
        .map(|dimension| strength_label(dimension).to_string())
        .collect()
}

fn career_fit(scores: &DimensionScores) -> Vec<String> {
    let rules: [(bool, &str); 4] = [
        (
            scores.aptitude > 70 && scores.orientation > 60,
            "Technical Roles",
        ),
        (
            scores.eq > 70 && scores.personality > 60,
            "Leadership Positions",
        ),
        (scores.interest > 70, "Creative Fields"),
        (scores.orientation > 70, "Project Management"),
    ];
    collect_matching(&rules)
}

fn development_areas(scores: &DimensionScores) -> Vec<String> {
    let rules: [(bool, &str); 4] = [
        (scores.eq < 60, "Emotional Intelligence"),
        (scores.personality < 50, "Team Collaboration"),
        (scores.orientation < 50, "Strategic Planning"),
        (scores.aptitude < 60, "Analytical Skills"),
    ];
    collect_matching(&rules)
}

fn insights(scores: &DimensionScores) -> Vec<String> {
    let rules: [(bool, &str); 6] = [
        (
            scores.orientation > 75,
            "You prefer structured, methodical approaches to work and learning.",
        ),
        (
            scores.orientation < 40,
            "You thrive in flexible, adaptive environments with room for creativity.",
        ),
        (
            scores.personality > 70,
            "You're energized by social interactions and collaborative environments.",
        ),
        (
            scores.personality < 40,
            "You work best in quiet, focused environments with minimal distractions.",
        ),
        (
            scores.eq > 80,
            "You have strong emotional intelligence and interpersonal skills.",
        ),
        (
            scores.aptitude > 75,
            "You demonstrate high cognitive ability and quick learning capacity.",
        ),
    ];
    collect_matching(&rules)
}

fn collect_matching(rules: &[(bool, &str)]) -> Vec<String> {
    rules
        .iter()
        .filter(|(matched, _)| *matched)
        .map(|(_, label)| label.to_string())
        .collect()
}

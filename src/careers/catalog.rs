use serde::{Deserialize, Serialize};

use super::traits::{lookup, TraitProfile};

/// A single number read off a [`TraitProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum TraitSignal {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
    Leadership,
    Teamwork,
    Independence,
    Creativity,
    Analytical,
    Logical,
    Numerical,
    Verbal,
    Spatial,
    Mechanical,
    Abstract,
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
    /// Named skill from a skill group, with the level assumed when it was never assessed.
    TechnicalSkill { skill: String, default: f64 },
    SoftSkill { skill: String, default: f64 },
    IndustrySkill { skill: String, default: f64 },
    EmergingSkill { skill: String, default: f64 },
}

impl TraitSignal {
    pub fn technical(skill: &str, default: f64) -> Self {
        Self::TechnicalSkill {
            skill: skill.to_string(),
            default,
        }
    }

    pub fn soft(skill: &str, default: f64) -> Self {
        Self::SoftSkill {
            skill: skill.to_string(),
            default,
        }
    }

    pub fn industry(skill: &str, default: f64) -> Self {
        Self::IndustrySkill {
            skill: skill.to_string(),
            default,
        }
    }

    pub fn emerging(skill: &str, default: f64) -> Self {
        Self::EmergingSkill {
            skill: skill.to_string(),
            default,
        }
    }

    pub fn read(&self, traits: &TraitProfile) -> f64 {
        let big_five = &traits.big_five;
        let style = &traits.work_style;
        let aptitude = &traits.aptitude;
        let holland = &traits.interests.holland;
        let skills = &traits.skills;

        match self {
            Self::Openness => big_five.openness,
            Self::Conscientiousness => big_five.conscientiousness,
            Self::Extraversion => big_five.extraversion,
            Self::Agreeableness => big_five.agreeableness,
            Self::Neuroticism => big_five.neuroticism,
            Self::Leadership => style.leadership,
            Self::Teamwork => style.teamwork,
            Self::Independence => style.independence,
            Self::Creativity => style.creativity,
            Self::Analytical => style.analytical,
            Self::Logical => aptitude.logical,
            Self::Numerical => aptitude.numerical,
            Self::Verbal => aptitude.verbal,
            Self::Spatial => aptitude.spatial,
            Self::Mechanical => aptitude.mechanical,
            Self::Abstract => aptitude.abstract_reasoning,
            Self::Realistic => holland.realistic,
            Self::Investigative => holland.investigative,
            Self::Artistic => holland.artistic,
            Self::Social => holland.social,
            Self::Enterprising => holland.enterprising,
            Self::Conventional => holland.conventional,
            Self::TechnicalSkill { skill, default } => {
                lookup(&skills.technical, skill).unwrap_or(*default)
            }
            Self::SoftSkill { skill, default } => lookup(&skills.soft, skill).unwrap_or(*default),
            Self::IndustrySkill { skill, default } => {
                lookup(&skills.industry, skill).unwrap_or(*default)
            }
            Self::EmergingSkill { skill, default } => {
                lookup(&skills.emerging, skill).unwrap_or(*default)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSignal {
    pub weight: f64,
    #[serde(flatten)]
    pub signal: TraitSignal,
}

/// Linear combination of trait signals; weights are expected to sum to 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FitBlend(pub Vec<WeightedSignal>);

impl FitBlend {
    pub fn single(signal: TraitSignal) -> Self {
        Self(vec![WeightedSignal {
            weight: 1.0,
            signal,
        }])
    }

    pub fn mean(signals: [TraitSignal; 2]) -> Self {
        Self::weighted(signals.map(|signal| (0.5, signal)))
    }

    pub fn weighted<const N: usize>(parts: [(f64, TraitSignal); N]) -> Self {
        Self(
            parts
                .into_iter()
                .map(|(weight, signal)| WeightedSignal { weight, signal })
                .collect(),
        )
    }

    pub fn evaluate(&self, traits: &TraitProfile) -> f64 {
        self.0
            .iter()
            .map(|part| part.weight * part.signal.read(traits))
            .sum::<f64>()
            .clamp(0.0, 100.0)
    }
}

/// Minimum proficiency a career expects in one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill: String,
    pub level: u8,
}

impl SkillRequirement {
    pub fn new(skill: &str, level: u8) -> Self {
        Self {
            skill: skill.to_string(),
            level: level.min(100),
        }
    }
}

/// A career the matcher can recommend, with the blends used to score fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerCandidate {
    pub title: String,
    pub growth_potential: f64,
    pub personality: FitBlend,
    pub skills: FitBlend,
    pub interests: FitBlend,
    pub aptitude: FitBlend,
    #[serde(default)]
    pub required_skills: Vec<SkillRequirement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    #[default]
    Standard,
    Extended,
}

impl CatalogKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
        }
    }
}

impl std::str::FromStr for CatalogKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            other => Err(format!(
                "unknown catalog '{other}' (expected standard or extended)"
            )),
        }
    }
}

/// Ordered candidate list; order decides ties in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerCatalog {
    candidates: Vec<CareerCandidate>,
}

impl CareerCatalog {
    pub fn new(candidates: Vec<CareerCandidate>) -> Self {
        Self { candidates }
    }

    pub fn of_kind(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Standard => Self::standard(),
            CatalogKind::Extended => Self::extended(),
        }
    }

    pub fn standard() -> Self {
        Self::new(vec![data_scientist(), software_engineer(), product_manager()])
    }

    pub fn extended() -> Self {
        let mut catalog = Self::standard();
        catalog.candidates.extend([
            machine_learning_engineer(),
            ux_designer(),
            devops_engineer(),
        ]);
        catalog
    }

    pub fn candidates(&self) -> &[CareerCandidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn find(&self, title: &str) -> Option<&CareerCandidate> {
        self.candidates
            .iter()
            .find(|candidate| candidate.title.eq_ignore_ascii_case(title))
    }
}

impl Default for CareerCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn data_scientist() -> CareerCandidate {
    CareerCandidate {
        title: "Data Scientist".to_string(),
        growth_potential: 85.0,
        personality: FitBlend::mean([TraitSignal::Openness, TraitSignal::Analytical]),
        skills: FitBlend::weighted([
            (0.4, TraitSignal::technical("Python", 60.0)),
            (0.6, TraitSignal::industry("Data Science", 60.0)),
        ]),
        interests: FitBlend::single(TraitSignal::Investigative),
        aptitude: FitBlend::mean([TraitSignal::Logical, TraitSignal::Numerical]),
        required_skills: vec![
            SkillRequirement::new("Python", 85),
            SkillRequirement::new("Machine Learning", 80),
            SkillRequirement::new("SQL", 75),
            SkillRequirement::new("Statistics", 80),
            SkillRequirement::new("R", 70),
        ],
    }
}

fn software_engineer() -> CareerCandidate {
    CareerCandidate {
        title: "Software Engineer".to_string(),
        growth_potential: 82.0,
        personality: FitBlend::mean([TraitSignal::Analytical, TraitSignal::Independence]),
        skills: FitBlend::weighted([
            (0.5, TraitSignal::technical("JavaScript", 50.0)),
            (0.5, TraitSignal::industry("Technology", 65.0)),
        ]),
        interests: FitBlend::mean([TraitSignal::Investigative, TraitSignal::Realistic]),
        aptitude: FitBlend::mean([TraitSignal::Logical, TraitSignal::Abstract]),
        required_skills: vec![
            SkillRequirement::new("JavaScript", 80),
            SkillRequirement::new("Data Structures", 75),
            SkillRequirement::new("System Design", 70),
            SkillRequirement::new("Git", 70),
        ],
    }
}

fn product_manager() -> CareerCandidate {
    CareerCandidate {
        title: "Product Manager".to_string(),
        growth_potential: 78.0,
        personality: FitBlend::mean([TraitSignal::Leadership, TraitSignal::Extraversion]),
        skills: FitBlend::single(TraitSignal::industry("Business Analysis", 60.0)),
        interests: FitBlend::mean([TraitSignal::Enterprising, TraitSignal::Social]),
        aptitude: FitBlend::mean([TraitSignal::Logical, TraitSignal::Verbal]),
        required_skills: vec![
            SkillRequirement::new("Strategic Thinking", 80),
            SkillRequirement::new("Communication", 85),
            SkillRequirement::new("Data Analysis", 70),
            SkillRequirement::new("Project Management", 75),
        ],
    }
}

fn machine_learning_engineer() -> CareerCandidate {
    CareerCandidate {
        title: "Machine Learning Engineer".to_string(),
        growth_potential: 90.0,
        personality: FitBlend::mean([TraitSignal::Analytical, TraitSignal::Openness]),
        skills: FitBlend::weighted([
            (0.5, TraitSignal::technical("Python", 55.0)),
            (0.5, TraitSignal::emerging("AI/Machine Learning", 55.0)),
        ]),
        interests: FitBlend::single(TraitSignal::Investigative),
        aptitude: FitBlend::weighted([
            (0.4, TraitSignal::Logical),
            (0.3, TraitSignal::Numerical),
            (0.3, TraitSignal::Abstract),
        ]),
        required_skills: vec![
            SkillRequirement::new("Python", 85),
            SkillRequirement::new("Machine Learning", 85),
            SkillRequirement::new("Deep Learning", 75),
            SkillRequirement::new("MLOps", 70),
        ],
    }
}

fn ux_designer() -> CareerCandidate {
    CareerCandidate {
        title: "UX Designer".to_string(),
        growth_potential: 76.0,
        personality: FitBlend::weighted([
            (0.6, TraitSignal::Creativity),
            (0.4, TraitSignal::Agreeableness),
        ]),
        skills: FitBlend::weighted([
            (0.5, TraitSignal::technical("Figma", 50.0)),
            (0.5, TraitSignal::soft("Communication", 70.0)),
        ]),
        interests: FitBlend::weighted([
            (0.7, TraitSignal::Artistic),
            (0.3, TraitSignal::Social),
        ]),
        aptitude: FitBlend::weighted([(0.6, TraitSignal::Spatial), (0.4, TraitSignal::Verbal)]),
        required_skills: vec![
            SkillRequirement::new("Figma", 80),
            SkillRequirement::new("User Research", 75),
            SkillRequirement::new("Prototyping", 75),
            SkillRequirement::new("Communication", 75),
        ],
    }
}

fn devops_engineer() -> CareerCandidate {
    CareerCandidate {
        title: "DevOps Engineer".to_string(),
        growth_potential: 80.0,
        personality: FitBlend::mean([TraitSignal::Analytical, TraitSignal::Conscientiousness]),
        skills: FitBlend::weighted([
            (0.5, TraitSignal::emerging("Cloud Computing", 55.0)),
            (0.5, TraitSignal::industry("Technology", 65.0)),
        ]),
        interests: FitBlend::weighted([
            (0.6, TraitSignal::Realistic),
            (0.4, TraitSignal::Conventional),
        ]),
        aptitude: FitBlend::mean([TraitSignal::Logical, TraitSignal::Mechanical]),
        required_skills: vec![
            SkillRequirement::new("Linux", 80),
            SkillRequirement::new("Cloud Computing", 80),
            SkillRequirement::new("CI/CD", 75),
            SkillRequirement::new("Kubernetes", 70),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_lists_three_careers_in_order() {
        let titles: Vec<_> = CareerCatalog::standard()
            .candidates()
            .iter()
            .map(|candidate| candidate.title.clone())
            .collect();
        assert_eq!(
            titles,
            vec!["Data Scientist", "Software Engineer", "Product Manager"]
        );
    }

    #[test]
    fn extended_catalog_appends_after_standard() {
        let extended = CareerCatalog::extended();
        assert_eq!(extended.len(), 6);
        assert_eq!(extended.candidates()[0].title, "Data Scientist");
        assert!(extended.find("ux designer").is_some());
    }

    #[test]
    fn every_blend_sums_to_one() {
        for candidate in CareerCatalog::extended().candidates() {
            for blend in [
                &candidate.personality,
                &candidate.skills,
                &candidate.interests,
                &candidate.aptitude,
            ] {
                let total: f64 = blend.0.iter().map(|part| part.weight).sum();
                assert!(
                    (total - 1.0).abs() < 1e-9,
                    "{} blend sums to {total}",
                    candidate.title
                );
            }
        }
    }

    #[test]
    fn catalog_kind_parses_case_insensitively() {
        assert_eq!("Extended".parse::<CatalogKind>(), Ok(CatalogKind::Extended));
        assert!("huge".parse::<CatalogKind>().is_err());
    }

    #[test]
    fn signals_serialize_with_tag() {
        let json = serde_json::to_value(TraitSignal::industry("Technology", 65.0))
            .expect("serializes");
        assert_eq!(json["signal"], "industry_skill");
        assert_eq!(json["skill"], "Technology");
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assessment::DimensionScores;

/// Big Five personality factors, each 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BigFive {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl BigFive {
    /// Maps the five assessment dimensions onto personality factors.
    pub fn from_dimensions(scores: &DimensionScores) -> Self {
        let interest = f64::from(scores.interest);
        let aptitude = f64::from(scores.aptitude);
        let eq = f64::from(scores.eq);
        Self {
            openness: 0.6 * interest + 0.4 * aptitude,
            conscientiousness: f64::from(scores.orientation),
            extraversion: f64::from(scores.personality),
            agreeableness: eq,
            neuroticism: 100.0 - eq,
        }
    }

    pub fn preferred_environments(&self) -> Vec<String> {
        let rules = [
            (self.extraversion > 60.0, "Collaborative"),
            (self.openness > 70.0, "Innovative"),
            (self.conscientiousness > 75.0, "Structured"),
            (self.agreeableness > 70.0, "Supportive"),
        ];
        rules
            .into_iter()
            .filter(|(matched, _)| *matched)
            .map(|(_, label)| label.to_string())
            .collect()
    }
}

/// Behavioural tendencies blended from the Big Five.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkStyleScores {
    pub leadership: f64,
    pub teamwork: f64,
    pub independence: f64,
    pub creativity: f64,
    pub analytical: f64,
}

impl WorkStyleScores {
    pub fn from_big_five(big_five: &BigFive) -> Self {
        let BigFive {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            ..
        } = *big_five;
        Self {
            leadership: extraversion * 0.7 + conscientiousness * 0.3,
            teamwork: agreeableness * 0.8 + extraversion * 0.2,
            independence: (100.0 - extraversion) * 0.6 + conscientiousness * 0.4,
            creativity: openness * 0.8 + (100.0 - conscientiousness) * 0.2,
            analytical: conscientiousness * 0.6 + openness * 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AptitudeScores {
    pub logical: f64,
    pub numerical: f64,
    pub verbal: f64,
    pub spatial: f64,
    pub mechanical: f64,
    #[serde(rename = "abstract")]
    pub abstract_reasoning: f64,
}

impl AptitudeScores {
    pub fn from_dimensions(scores: &DimensionScores) -> Self {
        let aptitude = f64::from(scores.aptitude);
        let orientation = f64::from(scores.orientation);
        let interest = f64::from(scores.interest);
        let eq = f64::from(scores.eq);
        Self {
            logical: aptitude,
            numerical: 0.8 * aptitude + 0.2 * orientation,
            verbal: 0.6 * aptitude + 0.4 * eq,
            spatial: 0.7 * aptitude + 0.3 * interest,
            mechanical: 0.5 * aptitude + 0.5 * orientation,
            abstract_reasoning: 0.6 * aptitude + 0.4 * interest,
        }
    }

    /// Overall cognitive score: the mean of the six aptitudes.
    pub fn cognitive(&self) -> f64 {
        let total = self.logical
            + self.numerical
            + self.verbal
            + self.spatial
            + self.mechanical
            + self.abstract_reasoning;
        total / 6.0
    }
}

/// Holland (RIASEC) interest codes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HollandScores {
    pub realistic: f64,
    pub investigative: f64,
    pub artistic: f64,
    pub social: f64,
    pub enterprising: f64,
    pub conventional: f64,
}

impl HollandScores {
    pub fn from_dimensions(scores: &DimensionScores) -> Self {
        let orientation = f64::from(scores.orientation);
        let interest = f64::from(scores.interest);
        let personality = f64::from(scores.personality);
        let aptitude = f64::from(scores.aptitude);
        let eq = f64::from(scores.eq);
        Self {
            realistic: 0.5 * orientation + 0.5 * aptitude,
            investigative: 0.6 * interest + 0.4 * aptitude,
            artistic: 0.7 * interest + 0.3 * (100.0 - orientation),
            social: 0.6 * eq + 0.4 * personality,
            enterprising: 0.6 * personality + 0.4 * orientation,
            conventional: orientation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestProfile {
    pub holland: HollandScores,
    pub sectors: BTreeMap<String, f64>,
    pub activities: BTreeMap<String, f64>,
}

impl InterestProfile {
    pub fn from_holland(holland: HollandScores) -> Self {
        let h = holland;
        let sectors = scored([
            ("Technology", h.investigative * 0.8 + h.realistic * 0.2),
            ("Healthcare", h.social * 0.6 + h.investigative * 0.4),
            ("Finance", h.conventional * 0.7 + h.enterprising * 0.3),
            ("Education", h.social * 0.8 + h.artistic * 0.2),
            ("Creative Arts", h.artistic * 0.9 + h.enterprising * 0.1),
            ("Business", h.enterprising * 0.7 + h.conventional * 0.3),
        ]);
        let activities = scored([
            ("Problem Solving", h.investigative),
            ("Data Analysis", h.investigative * 0.8 + h.conventional * 0.2),
            ("Leadership", h.enterprising * 0.8 + h.social * 0.2),
            ("Creative Work", h.artistic),
            ("Helping Others", h.social),
            ("Building/Making", h.realistic),
        ]);
        Self {
            holland,
            sectors,
            activities,
        }
    }
}

/// Skill levels (0–100) grouped the way recommendations consume them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub technical: BTreeMap<String, f64>,
    pub soft: BTreeMap<String, f64>,
    pub industry: BTreeMap<String, f64>,
    pub emerging: BTreeMap<String, f64>,
}

impl SkillAssessment {
    pub fn from_dimensions(scores: &DimensionScores, user_skills: &[String]) -> Self {
        let orientation = f64::from(scores.orientation);
        let interest = f64::from(scores.interest);
        let personality = f64::from(scores.personality);
        let aptitude = f64::from(scores.aptitude);
        let eq = f64::from(scores.eq);

        let technical_level = 0.5 * aptitude + 0.5 * interest;
        let technical = user_skills
            .iter()
            .map(|skill| skill.trim())
            .filter(|skill| !skill.is_empty())
            .map(|skill| (skill.to_string(), technical_level))
            .collect();

        Self {
            technical,
            soft: scored([
                ("Communication", 0.5 * personality + 0.5 * eq),
                ("Problem Solving", aptitude),
                ("Critical Thinking", 0.7 * aptitude + 0.3 * orientation),
                ("Teamwork", 0.5 * personality + 0.5 * eq),
                ("Adaptability", 0.5 * interest + 0.5 * (100.0 - orientation)),
                ("Leadership", 0.6 * personality + 0.4 * orientation),
            ]),
            industry: scored([
                ("Technology", 0.6 * aptitude + 0.4 * interest),
                ("Data Science", 0.7 * aptitude + 0.3 * orientation),
                ("Project Management", 0.7 * orientation + 0.3 * personality),
                ("Business Analysis", 0.5 * aptitude + 0.5 * orientation),
            ]),
            emerging: scored([
                ("AI/Machine Learning", 0.6 * aptitude + 0.4 * interest),
                ("Cloud Computing", 0.5 * aptitude + 0.5 * orientation),
                ("Blockchain", 0.6 * interest + 0.4 * aptitude),
                ("IoT", 0.5 * aptitude + 0.5 * interest),
                ("Cybersecurity", 0.6 * orientation + 0.4 * aptitude),
            ]),
        }
    }

    /// Level of a named skill, searching every group case-insensitively.
    pub fn level(&self, skill: &str) -> Option<f64> {
        [&self.technical, &self.soft, &self.industry, &self.emerging]
            .into_iter()
            .find_map(|group| lookup(group, skill))
    }

    /// All known skill levels in one map; technical entries win on name clashes.
    pub fn levels(&self) -> BTreeMap<String, f64> {
        let mut merged = BTreeMap::new();
        for group in [&self.emerging, &self.industry, &self.soft, &self.technical] {
            for (skill, level) in group {
                merged.insert(skill.clone(), *level);
            }
        }
        merged
    }
}

pub(crate) fn lookup(group: &BTreeMap<String, f64>, skill: &str) -> Option<f64> {
    group.get(skill).copied().or_else(|| {
        group
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(skill))
            .map(|(_, level)| *level)
    })
}

fn scored<const N: usize>(entries: [(&str, f64); N]) -> BTreeMap<String, f64> {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.clamp(0.0, 100.0)))
        .collect()
}

/// Everything the career matcher reads about a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitProfile {
    pub big_five: BigFive,
    pub work_style: WorkStyleScores,
    pub preferred_environments: Vec<String>,
    pub aptitude: AptitudeScores,
    pub interests: InterestProfile,
    pub skills: SkillAssessment,
}

impl TraitProfile {
    /// Derive a trait profile deterministically from assessment results.
    pub fn from_dimensions(scores: &DimensionScores, user_skills: &[String]) -> Self {
        Self::assemble(
            BigFive::from_dimensions(scores),
            AptitudeScores::from_dimensions(scores),
            HollandScores::from_dimensions(scores),
            SkillAssessment::from_dimensions(scores, user_skills),
        )
    }

    /// Fill in the derived sections from the four measured ones.
    pub fn assemble(
        big_five: BigFive,
        aptitude: AptitudeScores,
        holland: HollandScores,
        skills: SkillAssessment,
    ) -> Self {
        Self {
            work_style: WorkStyleScores::from_big_five(&big_five),
            preferred_environments: big_five.preferred_environments(),
            big_five,
            aptitude,
            interests: InterestProfile::from_holland(holland),
            skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    fn sample_scores() -> DimensionScores {
        DimensionScores {
            orientation: 80,
            interest: 70,
            personality: 50,
            aptitude: 90,
            eq: 60,
        }
    }

    #[test]
    fn big_five_follows_dimension_mapping() {
        let big_five = BigFive::from_dimensions(&sample_scores());
        assert!(close(big_five.openness, 78.0));
        assert!(close(big_five.conscientiousness, 80.0));
        assert!(close(big_five.extraversion, 50.0));
        assert!(close(big_five.agreeableness, 60.0));
        assert!(close(big_five.neuroticism, 40.0));
    }

    #[test]
    fn work_style_blends_big_five() {
        let big_five = BigFive {
            openness: 80.0,
            conscientiousness: 90.0,
            extraversion: 60.0,
            agreeableness: 75.0,
            neuroticism: 30.0,
        };
        let style = WorkStyleScores::from_big_five(&big_five);
        assert!(close(style.leadership, 69.0));
        assert!(close(style.teamwork, 72.0));
        assert!(close(style.independence, 60.0));
        assert!(close(style.creativity, 66.0));
        assert!(close(style.analytical, 86.0));
        assert_eq!(
            big_five.preferred_environments(),
            vec!["Innovative", "Structured", "Supportive"]
        );
    }

    #[test]
    fn sectors_and_activities_follow_holland_codes() {
        let holland = HollandScores {
            realistic: 50.0,
            investigative: 90.0,
            artistic: 40.0,
            social: 70.0,
            enterprising: 60.0,
            conventional: 55.0,
        };
        let interests = InterestProfile::from_holland(holland);
        assert!(close(interests.sectors["Technology"], 82.0));
        assert!(close(interests.sectors["Healthcare"], 78.0));
        assert!(close(interests.activities["Data Analysis"], 83.0));
        assert!(close(interests.activities["Building/Making"], 50.0));
    }

    #[test]
    fn user_skills_become_technical_entries() {
        let skills = vec!["Python".to_string(), "  ".to_string(), "SQL".to_string()];
        let profile = TraitProfile::from_dimensions(&sample_scores(), &skills);
        assert_eq!(profile.skills.technical.len(), 2);
        assert!(close(profile.skills.level("python").unwrap_or_default(), 80.0));
        assert!(close(
            profile.skills.level("Data Science").unwrap_or_default(),
            87.0
        ));
        assert!(profile.skills.level("Rust").is_none());
    }

    #[test]
    fn aptitude_serializes_abstract_key() {
        let aptitude = AptitudeScores::from_dimensions(&sample_scores());
        let json = serde_json::to_value(aptitude).expect("serializes");
        assert!(json.get("abstract").is_some());
    }

    #[test]
    fn cognitive_score_averages_aptitudes() {
        // 90 + 88 + 78 + 84 + 85 + 82 = 507
        let aptitude = AptitudeScores::from_dimensions(&sample_scores());
        assert!(close(aptitude.cognitive(), 84.5));
    }
}

use serde::{Deserialize, Serialize};

/// Years of professional experience, as bucketed during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    #[serde(rename = "0")]
    None,
    #[serde(rename = "1-2")]
    Junior,
    #[serde(rename = "3-5")]
    MidLevel,
    #[serde(rename = "5-10")]
    Senior,
    #[serde(rename = "10+")]
    Veteran,
}

impl ExperienceLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::None,
            Self::Junior,
            Self::MidLevel,
            Self::Senior,
            Self::Veteran,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Junior => "1-2",
            Self::MidLevel => "3-5",
            Self::Senior => "5-10",
            Self::Veteran => "10+",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No experience",
            Self::Junior => "1-2 years",
            Self::MidLevel => "3-5 years",
            Self::Senior => "5-10 years",
            Self::Veteran => "10+ years",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|level| level.code() == value)
    }

    /// True for learners still early enough to benefit from intensive programs.
    pub const fn is_early_career(self) -> bool {
        matches!(self, Self::None | Self::Junior)
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            format!("unknown experience level '{value}' (expected 0, 1-2, 3-5, 5-10 or 10+)")
        })
    }
}

/// Onboarding details collected before the assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub education: String,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f32>,
    #[serde(default)]
    pub experience: ExperienceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_expectation: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ..Self::default()
        }
    }

    /// Returns `true` when the skill was added.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        push_unique(&mut self.skills, skill)
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        remove_exact(&mut self.skills, skill)
    }

    /// Returns `true` when the interest was added.
    pub fn add_interest(&mut self, interest: &str) -> bool {
        push_unique(&mut self.interests, interest)
    }

    pub fn remove_interest(&mut self, interest: &str) -> bool {
        remove_exact(&mut self.interests, interest)
    }

    /// Names of required onboarding fields that are still blank.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.education.trim().is_empty() {
            missing.push("education");
        }
        if self.field.trim().is_empty() {
            missing.push("field");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required_fields().is_empty()
    }
}

fn push_unique(items: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || items.iter().any(|existing| existing == value) {
        return false;
    }
    items.push(value.to_string());
    true
}

fn remove_exact(items: &mut Vec<String>, value: &str) -> bool {
    let before = items.len();
    items.retain(|existing| existing != value);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_skill_trims_and_ignores_blanks_and_duplicates() {
        let mut profile = UserProfile::new("Asha", "Pune, India");
        assert!(profile.add_skill("  Python "));
        assert!(!profile.add_skill("Python"));
        assert!(!profile.add_skill("   "));
        assert!(profile.add_skill("SQL"));
        assert_eq!(profile.skills, vec!["Python", "SQL"]);

        assert!(profile.remove_skill("Python"));
        assert!(!profile.remove_skill("Python"));
        assert_eq!(profile.skills, vec!["SQL"]);
    }

    #[test]
    fn interests_follow_the_same_rules() {
        let mut profile = UserProfile::default();
        assert!(profile.add_interest("Design"));
        assert!(!profile.add_interest(" Design"));
        assert_eq!(profile.interests.len(), 1);
    }

    #[test]
    fn required_fields_are_reported() {
        let mut profile = UserProfile::new("Asha", "");
        assert_eq!(
            profile.missing_required_fields(),
            vec!["age", "location", "education", "field"]
        );
        profile.age = Some(24);
        profile.location = "Austin, TX".to_string();
        profile.education = "Bachelor's".to_string();
        profile.field = "Statistics".to_string();
        assert!(profile.is_complete());
    }

    #[test]
    fn experience_uses_bucket_codes_on_the_wire() {
        let json = serde_json::to_string(&ExperienceLevel::Junior).expect("serializes");
        assert_eq!(json, "\"1-2\"");
        let parsed: ExperienceLevel = serde_json::from_str("\"10+\"").expect("parses");
        assert_eq!(parsed, ExperienceLevel::Veteran);
        assert_eq!("3-5".parse::<ExperienceLevel>(), Ok(ExperienceLevel::MidLevel));
        assert!("7".parse::<ExperienceLevel>().is_err());
    }
}

use serde::{Deserialize, Serialize};

/// One of the five psychometric axes questions are bucketed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Orientation,
    Interest,
    Personality,
    Aptitude,
    Eq,
}

impl Dimension {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Orientation,
            Self::Interest,
            Self::Personality,
            Self::Aptitude,
            Self::Eq,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Orientation => "orientation",
            Self::Interest => "interest",
            Self::Personality => "personality",
            Self::Aptitude => "aptitude",
            Self::Eq => "eq",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Orientation => "Orientation Style",
            Self::Interest => "Career Interests",
            Self::Personality => "Personality Traits",
            Self::Aptitude => "Cognitive Aptitude",
            Self::Eq => "Emotional Intelligence",
        }
    }
}

/// Answer format of a question; decides how a raw answer converts to points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Likert,
    MultipleChoice,
    Scenario,
    Slider,
    Ranking,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Likert => "Likert",
            Self::MultipleChoice => "Multiple choice",
            Self::Scenario => "Scenario",
            Self::Slider => "Slider",
            Self::Ranking => "Ranking",
        }
    }
}

pub const LIKERT_MAX: u32 = 4;
pub const SLIDER_DEFAULT_MIN: u32 = 1;
pub const SLIDER_DEFAULT_MAX: u32 = 10;

const LIKERT_OPTIONS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Immutable questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: String,
    pub dimension: Dimension,
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl Question {
    pub fn likert(id: &str, dimension: Dimension, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            category: dimension.label().to_string(),
            dimension,
            kind: QuestionKind::Likert,
            prompt: prompt.to_string(),
            situation: None,
            options: LIKERT_OPTIONS.iter().map(|label| label.to_string()).collect(),
            min: None,
            max: None,
            labels: Vec::new(),
        }
    }

    pub fn multiple_choice(id: &str, dimension: Dimension, prompt: &str, options: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            category: dimension.label().to_string(),
            dimension,
            kind: QuestionKind::MultipleChoice,
            prompt: prompt.to_string(),
            situation: None,
            options: options.iter().map(|option| option.to_string()).collect(),
            min: None,
            max: None,
            labels: Vec::new(),
        }
    }

    pub fn scenario(
        id: &str,
        dimension: Dimension,
        prompt: &str,
        situation: &str,
        responses: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            category: dimension.label().to_string(),
            dimension,
            kind: QuestionKind::Scenario,
            prompt: prompt.to_string(),
            situation: Some(situation.to_string()),
            options: responses.iter().map(|option| option.to_string()).collect(),
            min: None,
            max: None,
            labels: Vec::new(),
        }
    }

    pub fn slider(
        id: &str,
        dimension: Dimension,
        prompt: &str,
        range: (u32, u32),
        labels: (&str, &str),
    ) -> Self {
        Self {
            id: id.to_string(),
            category: dimension.label().to_string(),
            dimension,
            kind: QuestionKind::Slider,
            prompt: prompt.to_string(),
            situation: None,
            options: Vec::new(),
            min: Some(range.0),
            max: Some(range.1),
            labels: vec![labels.0.to_string(), labels.1.to_string()],
        }
    }

    pub fn slider_min(&self) -> u32 {
        self.min.unwrap_or(SLIDER_DEFAULT_MIN)
    }

    pub fn slider_max(&self) -> u32 {
        self.max.unwrap_or(SLIDER_DEFAULT_MAX)
    }
}

/// Ordered list of questions presented during one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The five-dimension psychometric questionnaire, three items per dimension.
    pub fn standard() -> Self {
        use Dimension::{Aptitude, Interest, Orientation, Personality};

        let questions = vec![
            Question::likert(
                "o1",
                Orientation,
                "I prefer working on tasks that have clear, structured guidelines.",
            ),
            Question::scenario(
                "o3",
                Orientation,
                "You're given a complex problem to solve at work:",
                "Your manager assigns you a project with unclear requirements and a tight deadline.",
                &[
                    "Ask for clarification and create a structured approach",
                    "Start working immediately and adjust based on feedback",
                    "Break it down into smaller, manageable tasks",
                    "Collaborate with colleagues to brainstorm solutions",
                ],
            ),
            Question::multiple_choice(
                "o6",
                Orientation,
                "In group projects, my natural role is:",
                &["Planner", "Executor", "Innovator", "Coordinator"],
            ),
            Question::likert(
                "i2",
                Interest,
                "I enjoy working with cutting-edge technology and innovation.",
            ),
            Question::multiple_choice(
                "i3",
                Interest,
                "In your ideal work environment, you would be:",
                &[
                    "Working independently on focused tasks",
                    "Collaborating with diverse teams",
                    "Leading projects and making strategic decisions",
                    "Mentoring and developing others",
                ],
            ),
            Question::scenario(
                "i5",
                Interest,
                "You have free time on the weekend. You'd rather:",
                "It's the weekend and you have no urgent tasks.",
                &[
                    "Work on a creative hobby (art, music, design)",
                    "Read about science/technology",
                    "Volunteer for a social cause",
                    "Plan and organize a community event",
                ],
            ),
            Question::likert(
                "p1",
                Personality,
                "I feel energized when working in groups and social settings.",
            ),
            Question::scenario(
                "p3",
                Personality,
                "At a team meeting, you typically:",
                "You're in a brainstorming session with conflicting ideas.",
                &[
                    "Listen and synthesize different viewpoints",
                    "Contribute your own ideas actively",
                    "Ask probing questions",
                    "Focus on practical implementation",
                ],
            ),
            Question::multiple_choice(
                "p5",
                Personality,
                "Which trait describes you best?",
                &["Organized", "Creative", "Analytical", "Empathetic"],
            ),
            Question::multiple_choice(
                "a1",
                Aptitude,
                "If the pattern is 2, 6, 18, 54, what comes next?",
                &["108", "162", "216", "324"],
            ),
            Question::likert(
                "a2",
                Aptitude,
                "I can quickly identify logical inconsistencies in arguments.",
            ),
            Question::slider(
                "a5",
                Aptitude,
                "Rate your numerical problem-solving skills.",
                (1, 10),
                ("Low", "High"),
            ),
            Question::likert(
                "e1",
                Dimension::Eq,
                "I can easily recognize and understand others' emotions.",
            ),
            Question::scenario(
                "e2",
                Dimension::Eq,
                "A colleague seems upset after a meeting. You:",
                "You notice a team member looking distressed after receiving feedback.",
                &[
                    "Offer private support",
                    "Give them space and check later",
                    "Suggest speaking with the manager",
                    "Share a similar experience to relate",
                ],
            ),
            Question::slider(
                "e10",
                Dimension::Eq,
                "How empathetic are you towards others?",
                (1, 10),
                ("Low empathy", "High empathy"),
            ),
        ];

        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn for_dimension(&self, dimension: Dimension) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.dimension == dimension)
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_questionnaire_covers_every_dimension_evenly() {
        let questionnaire = Questionnaire::standard();
        assert_eq!(questionnaire.len(), 15);
        for dimension in Dimension::ordered() {
            assert_eq!(questionnaire.for_dimension(dimension).count(), 3);
        }
    }

    #[test]
    fn question_ids_are_unique() {
        let questionnaire = Questionnaire::standard();
        let ids: HashSet<_> = questionnaire
            .questions()
            .iter()
            .map(|question| question.id.as_str())
            .collect();
        assert_eq!(ids.len(), questionnaire.len());
    }

    #[test]
    fn sliders_default_to_one_through_ten() {
        let mut question = Question::slider("s", Dimension::Eq, "?", (1, 10), ("lo", "hi"));
        question.min = None;
        question.max = None;
        assert_eq!(question.slider_min(), 1);
        assert_eq!(question.slider_max(), 10);
    }

    #[test]
    fn dimension_serializes_with_short_keys() {
        let json = serde_json::to_string(&Dimension::Eq).expect("serializes");
        assert_eq!(json, "\"eq\"");
        let kind = serde_json::to_string(&QuestionKind::MultipleChoice).expect("serializes");
        assert_eq!(kind, "\"multiple-choice\"");
    }
}

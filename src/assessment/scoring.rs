use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::questionnaire::{Dimension, Question, QuestionKind, Questionnaire, LIKERT_MAX};
use super::responses::{Answer, ResponseSet};

/// Percentage score (0–100) per dimension. Always covers all five dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionScores {
    pub orientation: u8,
    pub interest: u8,
    pub personality: u8,
    pub aptitude: u8,
    pub eq: u8,
}

impl DimensionScores {
    pub const fn zero() -> Self {
        Self {
            orientation: 0,
            interest: 0,
            personality: 0,
            aptitude: 0,
            eq: 0,
        }
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Orientation => self.orientation,
            Dimension::Interest => self.interest,
            Dimension::Personality => self.personality,
            Dimension::Aptitude => self.aptitude,
            Dimension::Eq => self.eq,
        }
    }

    pub fn set(&mut self, dimension: Dimension, score: u8) {
        let slot = match dimension {
            Dimension::Orientation => &mut self.orientation,
            Dimension::Interest => &mut self.interest,
            Dimension::Personality => &mut self.personality,
            Dimension::Aptitude => &mut self.aptitude,
            Dimension::Eq => &mut self.eq,
        };
        *slot = score.min(100);
    }

    /// Mean over the five dimensions, rounded.
    pub fn overall(&self) -> u8 {
        let total: u64 = Dimension::ordered()
            .into_iter()
            .map(|dimension| u64::from(self.get(dimension)))
            .sum();
        round_ratio(total, 5) as u8
    }

    pub fn to_map(&self) -> BTreeMap<Dimension, u8> {
        Dimension::ordered()
            .into_iter()
            .map(|dimension| (dimension, self.get(dimension)))
            .collect()
    }
}

impl Default for DimensionScores {
    fn default() -> Self {
        Self::zero()
    }
}

/// Points earned and points possible for a single answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionPoints {
    pub earned: u32,
    pub possible: u32,
}

/// Convert a raw answer into points. Ranking items carry no point rule and
/// yield `None`, which callers treat like an unanswered question.
pub fn question_points(question: &Question, answer: Answer) -> Option<QuestionPoints> {
    let raw = answer.0;
    let (earned, possible) = match question.kind {
        QuestionKind::Likert => (raw, LIKERT_MAX),
        QuestionKind::Slider => (raw, question.slider_max()),
        QuestionKind::MultipleChoice | QuestionKind::Scenario => (choice_points(raw), LIKERT_MAX),
        QuestionKind::Ranking => return None,
    };

    Some(QuestionPoints {
        earned: earned.min(possible),
        possible,
    })
}

/// Earlier-listed options score higher: 4, 3, 2, then 1 for everything after.
pub const fn choice_points(index: u32) -> u32 {
    match index {
        0 => 4,
        1 => 3,
        2 => 2,
        _ => 1,
    }
}

/// Score every dimension from the full response set.
pub fn score_dimensions(questionnaire: &Questionnaire, responses: &ResponseSet) -> DimensionScores {
    let mut scores = DimensionScores::zero();

    for dimension in Dimension::ordered() {
        let mut earned = 0u64;
        let mut possible = 0u64;

        for question in questionnaire.for_dimension(dimension) {
            let Some(answer) = responses.get(&question.id) else {
                continue;
            };
            if let Some(points) = question_points(question, answer) {
                earned += u64::from(points.earned);
                possible += u64::from(points.possible);
            }
        }

        let percentage = if possible == 0 {
            0
        } else {
            round_ratio(earned * 100, possible)
        };
        scores.set(dimension, percentage.min(100) as u8);
    }

    scores
}

/// `numerator / denominator` rounded half up, in exact integer arithmetic.
fn round_ratio(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(
        questionnaire: &Questionnaire,
        dimension: Dimension,
        value: u32,
    ) -> ResponseSet {
        let mut responses = ResponseSet::new();
        for question in questionnaire.for_dimension(dimension) {
            responses
                .record(question, Answer(value))
                .expect("value valid for every kind");
        }
        responses
    }

    #[test]
    fn empty_responses_score_zero_everywhere() {
        let scores = score_dimensions(&Questionnaire::standard(), &ResponseSet::new());
        assert_eq!(scores, DimensionScores::zero());
        assert_eq!(scores.overall(), 0);
    }

    #[test]
    fn likert_single_question_scales_to_percent() {
        let questionnaire = Questionnaire::new(vec![Question::likert(
            "q",
            Dimension::Interest,
            "?",
        )]);
        for (value, expected) in [(0, 0), (1, 25), (2, 50), (3, 75), (4, 100)] {
            let mut responses = ResponseSet::new();
            responses
                .record_by_id(&questionnaire, "q", Answer(value))
                .expect("valid likert");
            let scores = score_dimensions(&questionnaire, &responses);
            assert_eq!(scores.interest, expected, "likert {value}");
        }
    }

    #[test]
    fn choice_points_favor_earlier_options() {
        assert_eq!(choice_points(0), 4);
        assert_eq!(choice_points(1), 3);
        assert_eq!(choice_points(2), 2);
        assert_eq!(choice_points(3), 1);
        assert_eq!(choice_points(9), 1);
    }

    #[test]
    fn mixed_dimension_uses_per_kind_maxima() {
        // o1 likert 3/4, o3 scenario idx 1 -> 3/4, o6 choice idx 3 -> 1/4 => 7/12 = 58.3
        let questionnaire = Questionnaire::standard();
        let mut responses = ResponseSet::new();
        responses.record_by_id(&questionnaire, "o1", Answer(3)).expect("valid");
        responses.record_by_id(&questionnaire, "o3", Answer(1)).expect("valid");
        responses.record_by_id(&questionnaire, "o6", Answer(3)).expect("valid");

        let scores = score_dimensions(&questionnaire, &responses);
        assert_eq!(scores.orientation, 58);
    }

    #[test]
    fn slider_contributes_declared_maximum() {
        // a5 slider 5/10 plus a2 likert 4/4 => 9/14 = 64.3
        let questionnaire = Questionnaire::standard();
        let mut responses = ResponseSet::new();
        responses.record_by_id(&questionnaire, "a5", Answer(5)).expect("valid");
        responses.record_by_id(&questionnaire, "a2", Answer(4)).expect("valid");

        let scores = score_dimensions(&questionnaire, &responses);
        assert_eq!(scores.aptitude, 64);
    }

    #[test]
    fn unanswered_questions_do_not_dilute_the_score() {
        let questionnaire = Questionnaire::standard();
        let mut responses = ResponseSet::new();
        responses.record_by_id(&questionnaire, "e1", Answer(4)).expect("valid");

        let scores = score_dimensions(&questionnaire, &responses);
        assert_eq!(scores.eq, 100);
    }

    #[test]
    fn halves_round_up() {
        // 1 point of 8 possible = 12.5%
        let questionnaire = Questionnaire::new(vec![
            Question::likert("a", Dimension::Eq, "?"),
            Question::likert("b", Dimension::Eq, "?"),
        ]);
        let mut responses = ResponseSet::new();
        responses.record_by_id(&questionnaire, "a", Answer(1)).expect("valid");
        responses.record_by_id(&questionnaire, "b", Answer(0)).expect("valid");

        assert_eq!(score_dimensions(&questionnaire, &responses).eq, 13);
    }

    #[test]
    fn wide_slider_scales_do_not_overflow() {
        let questionnaire = Questionnaire::new(vec![
            Question::slider("wide", Dimension::Aptitude, "?", (1, 50_000_000), ("lo", "hi")),
            Question::slider("wider", Dimension::Aptitude, "?", (1, u32::MAX), ("lo", "hi")),
        ]);
        let mut responses = ResponseSet::new();
        responses
            .record_by_id(&questionnaire, "wide", Answer(50_000_000))
            .expect("valid");
        responses
            .record_by_id(&questionnaire, "wider", Answer(u32::MAX / 2))
            .expect("valid");

        // 50M + ~2.15G of 50M + ~4.29G possible => 50.6%
        let scores = score_dimensions(&questionnaire, &responses);
        assert_eq!(scores.aptitude, 51);
    }

    #[test]
    fn ranking_items_are_skipped() {
        let mut ranking = Question::multiple_choice("r", Dimension::Interest, "?", &["a", "b"]);
        ranking.kind = QuestionKind::Ranking;
        let questionnaire = Questionnaire::new(vec![ranking]);
        let mut responses = ResponseSet::new();
        responses.record_by_id(&questionnaire, "r", Answer(0)).expect("valid");

        assert_eq!(score_dimensions(&questionnaire, &responses).interest, 0);
    }

    #[test]
    fn all_first_options_max_out_a_dimension() {
        let questionnaire = Questionnaire::standard();
        let responses = answer_all(&questionnaire, Dimension::Personality, 0);
        // likert 0/4 + scenario 4/4 + choice 4/4 => 8/12
        assert_eq!(score_dimensions(&questionnaire, &responses).personality, 67);
    }
}

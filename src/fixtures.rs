//! Seeded generators for demo data and tests. The same seed always yields the
//! same profiles, so demo output and assertions are reproducible.

use std::collections::BTreeMap;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assessment::{answer_range, Answer, Questionnaire, ResponseError, ResponseSet};
use crate::careers::{AptitudeScores, BigFive, HollandScores, SkillAssessment, TraitProfile};

pub const DEFAULT_SEED: u64 = 42;

pub struct TraitFixtures {
    rng: StdRng,
}

impl TraitFixtures {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample(&mut self, range: Range<f64>) -> f64 {
        self.rng.gen_range(range)
    }

    fn sample_map(&mut self, entries: &[(&str, Range<f64>)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(name, range)| (name.to_string(), self.sample(range.clone())))
            .collect()
    }

    pub fn big_five(&mut self) -> BigFive {
        BigFive {
            openness: self.sample(60.0..90.0),
            conscientiousness: self.sample(70.0..95.0),
            extraversion: self.sample(50.0..90.0),
            agreeableness: self.sample(70.0..90.0),
            neuroticism: self.sample(20.0..50.0),
        }
    }

    pub fn aptitude(&mut self) -> AptitudeScores {
        AptitudeScores {
            logical: self.sample(75.0..95.0),
            numerical: self.sample(70.0..95.0),
            verbal: self.sample(65.0..95.0),
            spatial: self.sample(60.0..95.0),
            mechanical: self.sample(50.0..90.0),
            abstract_reasoning: self.sample(70.0..95.0),
        }
    }

    pub fn holland(&mut self) -> HollandScores {
        HollandScores {
            realistic: self.sample(40.0..70.0),
            investigative: self.sample(70.0..95.0),
            artistic: self.sample(45.0..80.0),
            social: self.sample(60.0..90.0),
            enterprising: self.sample(50.0..90.0),
            conventional: self.sample(45.0..70.0),
        }
    }

    pub fn skills(&mut self, user_skills: &[String]) -> SkillAssessment {
        let mut technical = BTreeMap::new();
        for skill in user_skills {
            let skill = skill.trim();
            if !skill.is_empty() {
                let level = self.sample(60.0..90.0);
                technical.insert(skill.to_string(), level);
            }
        }

        SkillAssessment {
            technical,
            soft: self.sample_map(&[
                ("Communication", 75.0..95.0),
                ("Problem Solving", 70.0..95.0),
                ("Critical Thinking", 65.0..95.0),
                ("Teamwork", 80.0..95.0),
                ("Adaptability", 70.0..95.0),
                ("Leadership", 60.0..95.0),
            ]),
            industry: self.sample_map(&[
                ("Technology", 65.0..95.0),
                ("Data Science", 50.0..90.0),
                ("Project Management", 70.0..95.0),
                ("Business Analysis", 60.0..90.0),
            ]),
            emerging: self.sample_map(&[
                ("AI/Machine Learning", 40.0..90.0),
                ("Cloud Computing", 50.0..90.0),
                ("Blockchain", 20.0..80.0),
                ("IoT", 30.0..85.0),
                ("Cybersecurity", 45.0..90.0),
            ]),
        }
    }

    pub fn trait_profile(&mut self, user_skills: &[String]) -> TraitProfile {
        let big_five = self.big_five();
        let aptitude = self.aptitude();
        let holland = self.holland();
        let skills = self.skills(user_skills);
        TraitProfile::assemble(big_five, aptitude, holland, skills)
    }

    /// A valid answer for every question in the questionnaire. Fails on a
    /// question that accepts no answer at all.
    pub fn responses(
        &mut self,
        questionnaire: &Questionnaire,
    ) -> Result<ResponseSet, ResponseError> {
        let mut responses = ResponseSet::new();
        for question in questionnaire.questions() {
            let value = self.rng.gen_range(answer_range(question)?);
            responses.record(question, Answer(value))?;
        }
        Ok(responses)
    }
}

impl Default for TraitFixtures {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

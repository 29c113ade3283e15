//! Psychometric assessment: questionnaire, answer collection, dimension
//! scoring and profile synthesis.

pub mod import;
pub mod profile;
pub mod questionnaire;
pub mod responses;
pub mod result;
pub mod scoring;

pub use import::{AnswerImportError, AnswerImporter};
pub use profile::{PersonalityProfile, WorkStyle};
pub use questionnaire::{Dimension, Question, QuestionKind, Questionnaire};
pub use responses::{answer_range, Answer, AssessmentSession, Navigation, ResponseError, ResponseSet};
pub use result::AssessmentResult;
pub use scoring::{score_dimensions, DimensionScores};

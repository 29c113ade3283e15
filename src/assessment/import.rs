use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::questionnaire::Questionnaire;
use super::responses::{Answer, ResponseError, ResponseSet};

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    Response(ResponseError),
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer file: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer CSV data: {}", err),
            AnswerImportError::Json(err) => write!(f, "invalid answer JSON data: {}", err),
            AnswerImportError::Response(err) => write!(f, "answer rejected: {}", err),
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::Json(err) => Some(err),
            AnswerImportError::Response(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for AnswerImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<ResponseError> for AnswerImportError {
    fn from(err: ResponseError) -> Self {
        Self::Response(err)
    }
}

/// Loads saved answers from a `{ question_id: value }` JSON object or a
/// two-column CSV export (`question_id,answer`).
pub struct AnswerImporter;

impl AnswerImporter {
    /// Picks the format from the file extension; anything other than `.csv` is read as JSON.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        questionnaire: &Questionnaire,
    ) -> Result<ResponseSet, AnswerImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Self::from_csv_reader(file, questionnaire)
        } else {
            Self::from_json_reader(file, questionnaire)
        }
    }

    /// `null` answers are treated as unanswered, like blank CSV cells.
    pub fn from_json_reader<R: Read>(
        reader: R,
        questionnaire: &Questionnaire,
    ) -> Result<ResponseSet, AnswerImportError> {
        let raw: BTreeMap<String, Option<u32>> = serde_json::from_reader(reader)?;
        let answered = raw
            .into_iter()
            .filter_map(|(question_id, value)| value.map(|value| (question_id, value)))
            .collect();
        Ok(ResponseSet::from_map(questionnaire, answered)?)
    }

    /// Rows with a blank answer are treated as unanswered.
    pub fn from_csv_reader<R: Read>(
        reader: R,
        questionnaire: &Questionnaire,
    ) -> Result<ResponseSet, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut responses = ResponseSet::new();

        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record?;
            let Some(value) = row.answer else {
                continue;
            };
            responses.record_by_id(questionnaire, &row.question_id, Answer(value))?;
        }

        Ok(responses)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(alias = "Question ID", alias = "question")]
    question_id: String,
    #[serde(alias = "Answer", default, deserialize_with = "empty_string_as_none")]
    answer: Option<u32>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

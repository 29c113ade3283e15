use std::io::Write;

use career_ai::assessment::{
    Answer, AnswerImporter, AssessmentSession, Dimension, Navigation, Questionnaire, ResponseSet,
    WorkStyle,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn started() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .expect("valid start time")
}

#[test]
fn orientation_only_answers_produce_balanced_professional() {
    let questionnaire = Questionnaire::standard();
    let mut session = AssessmentSession::new(questionnaire, started());

    // o1 likert max, then the first option of the o3 scenario and o6 choice
    for value in [4, 0, 0] {
        session.answer(Answer(value)).expect("answer accepted");
        assert!(matches!(session.next(), Navigation::Moved(_)));
    }
    assert_eq!(session.current_dimension(), Some(Dimension::Interest));

    let result = session.complete(started() + Duration::minutes(7));
    let scores = result.dimension_scores;
    assert_eq!(scores.orientation, 100);
    assert_eq!(scores.interest, 0);
    assert_eq!(scores.personality, 0);
    assert_eq!(scores.aptitude, 0);
    assert_eq!(scores.eq, 0);
    assert_eq!(result.overall_score, 20);
    assert_eq!(result.time_taken_minutes, 7);
    assert_eq!(
        result.personality_profile.work_style,
        WorkStyle::BalancedProfessional
    );
    assert_eq!(result.raw_scores, result.dimension_scores);
}

#[test]
fn csv_export_feeds_a_complete_session() {
    let questionnaire = Questionnaire::standard();
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp csv");
    writeln!(file, "Question ID,Answer").expect("header");
    writeln!(file, "o1, 4").expect("row");
    writeln!(file, "a5,10").expect("row");
    writeln!(file, "e10,").expect("blank row");
    file.flush().expect("flush");

    let responses = AnswerImporter::from_path(file.path(), &questionnaire).expect("import");
    assert_eq!(responses.len(), 2);
    assert!(!responses.contains("e10"));

    let session = AssessmentSession::new(questionnaire, started()).with_responses(responses);
    let result = session.complete(started());
    assert_eq!(result.dimension_scores.orientation, 100);
    assert_eq!(result.dimension_scores.aptitude, 100);
    assert_eq!(result.overall_score, 40);
}

#[test]
fn result_serializes_answers_as_flat_object() {
    let questionnaire = Questionnaire::standard();
    let mut responses = ResponseSet::new();
    responses
        .record_by_id(&questionnaire, "p1", Answer(3))
        .expect("p1 accepted");

    let result = AssessmentSession::new(questionnaire, started())
        .with_responses(responses)
        .complete(started() + Duration::seconds(89));
    let json = serde_json::to_value(&result).expect("serialize");

    assert_eq!(json["answers"], serde_json::json!({ "p1": 3 }));
    assert_eq!(json["completed_at"], "2025-03-01T09:01:29Z");
    assert_eq!(json["time_taken_minutes"], 1);
    assert_eq!(json["dimension_scores"]["personality"], 75);
    assert_eq!(json["personality_profile"]["work_style"], "Balanced Professional");
}

#[test]
fn progress_tracks_cursor_and_dimensions() {
    let mut session = AssessmentSession::new(Questionnaire::standard(), started());
    assert!((session.progress() - 100.0 / 15.0).abs() < 1e-9);

    session.answer(Answer(2)).expect("likert accepted");
    let by_dimension = session.dimension_progress();
    assert!((by_dimension[&Dimension::Orientation] - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(by_dimension[&Dimension::Eq], 0.0);

    assert_eq!(session.previous(), 0);
    for _ in 0..20 {
        session.next();
    }
    assert_eq!(session.cursor(), 14);
    assert!((session.progress() - 100.0).abs() < 1e-9);
}

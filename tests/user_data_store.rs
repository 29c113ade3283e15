use std::fs;

use career_ai::careers::SkillGap;
use career_ai::profile::{ExperienceLevel, UserProfile};
use career_ai::storage::{
    FileStore, KeyValueStore, StoreError, Theme, UserDataStore, PROFILE_KEY, SKILL_GAPS_KEY,
};
use serde_json::json;

#[test]
fn file_store_persists_one_document_per_key() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path().join("nested");
    let store = UserDataStore::new(FileStore::new(&root));

    let mut profile = UserProfile::new("Meera", "Pune, India");
    profile.experience = ExperienceLevel::Junior;
    profile.add_interest("Design");
    store.save_profile(&profile).expect("save profile");
    store
        .save_skill_gaps(&[SkillGap::new("Figma", 20, 80)])
        .expect("save gaps");

    assert!(root.join("careerAI_profile.json").is_file());
    assert!(root.join("careerAI_skillGaps.json").is_file());

    let reopened = UserDataStore::new(FileStore::new(&root));
    assert_eq!(reopened.profile().expect("profile"), Some(profile));
    let gaps = reopened.skill_gaps().expect("gaps");
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].gap(), 60);
}

#[test]
fn empty_directory_reads_as_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = UserDataStore::new(FileStore::new(dir.path().join("missing")));
    assert!(store.profile().expect("profile").is_none());
    assert!(store.assessment().expect("assessment").is_none());
    assert!(store.recommendations().expect("recommendations").is_empty());
    assert_eq!(store.language().expect("language"), "en");
    assert_eq!(store.theme().expect("theme"), Theme::Light);
    store.clear().expect("clearing nothing succeeds");
}

#[test]
fn corrupt_documents_are_treated_as_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("careerAI_profile.json"), "{ not json").expect("write");
    fs::write(
        dir.path().join("careerAI_skillGaps.json"),
        r#"[{"skill": 12}]"#,
    )
    .expect("write");

    let files = FileStore::new(dir.path());
    match files.load(PROFILE_KEY) {
        Err(StoreError::Corrupt { key, .. }) => assert_eq!(key, PROFILE_KEY),
        other => panic!("expected corrupt document, got {other:?}"),
    }

    let store = UserDataStore::new(files);
    assert!(store.profile().expect("profile").is_none());
    assert!(store.skill_gaps().expect("gaps").is_empty());

    store
        .inner()
        .save(SKILL_GAPS_KEY, json!([]))
        .expect("overwrite");
    assert!(store.skill_gaps().expect("gaps").is_empty());
}

#[test]
fn preferences_survive_reopen_and_clear_removes_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = UserDataStore::new(FileStore::new(dir.path()));
    store.set_language("ta").expect("language");
    store.set_theme(Theme::Dark).expect("theme");

    let reopened = UserDataStore::new(FileStore::new(dir.path()));
    assert_eq!(reopened.language().expect("language"), "ta");
    assert_eq!(reopened.theme().expect("theme"), Theme::Dark);

    reopened.clear().expect("clear");
    let remaining = fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(remaining, 0);
}

//! Shared fixtures for drill-core integration tests.

#![allow(dead_code)]

use drill_core::{
    Declension, ExerciseKind, Gender, ManualTime, ReviewMode, RngSource, Session, SessionConfig,
    WordRecord,
};

/// Create a word record with the given fields.
pub fn word(
    id: u32,
    headword: &str,
    genitive: &str,
    declension: Declension,
    gender: Gender,
    translation: &str,
) -> WordRecord {
    WordRecord {
        id,
        headword: headword.to_string(),
        genitive: genitive.to_string(),
        declension,
        gender,
        translation: translation.to_string(),
        alternate_meanings: vec![],
    }
}

/// Five first- and second-declension nouns.
pub fn five_words() -> Vec<WordRecord> {
    vec![
        word(1, "puella", "puellae", Declension::First, Gender::Feminine, "girl"),
        word(2, "agricola", "agricolae", Declension::First, Gender::Masculine, "farmer"),
        word(3, "servus", "servī", Declension::Second, Gender::Masculine, "slave"),
        word(4, "bellum", "bellī", Declension::Second, Gender::Neuter, "war"),
        word(5, "rēx", "rēgis", Declension::Third, Gender::Masculine, "king"),
    ]
}

/// A one-minute multiple-choice session that skips review, with a manual clock.
pub fn one_minute_session(words: Vec<WordRecord>) -> (Session, ManualTime) {
    let time = ManualTime::default();
    let config = SessionConfig::new(1, vec![ExerciseKind::TranslationChoice])
        .with_review(ReviewMode::Skip);
    let session = Session::new(words, config, RngSource::seeded(2024), time.clone())
        .expect("valid session");
    (session, time)
}

/// Tick until the session reports expiry, at most `limit` times.
pub fn run_clock_out(session: &mut Session, limit: u32) -> Option<drill_core::SessionReport> {
    for _ in 0..limit {
        if let Some(report) = session.tick() {
            return Some(report);
        }
    }
    None
}

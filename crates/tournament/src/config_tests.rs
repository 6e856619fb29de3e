use super::*;
use swiss_core::TieBreak;

#[test]
fn test_empty_settings_use_defaults() {
    let settings = TournamentSettings::from_toml("").unwrap();
    assert_eq!(settings, TournamentSettings::default());
    assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(settings.pairing.tie_break, TieBreak::Registration);
}

#[test]
fn test_full_settings() {
    let settings = TournamentSettings::from_toml(
        r#"
        database_url = "sqlite://club-night.db"
        log_filter = "debug"

        [pairing]
        tie_break = "fewer-matches"
        "#,
    )
    .unwrap();

    assert_eq!(settings.database_url, "sqlite://club-night.db");
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.pairing.tie_break, TieBreak::FewerMatches);
}

#[test]
fn test_unknown_tie_break_rejected() {
    let err = TournamentSettings::from_toml("[pairing]\ntie_break = \"coin-flip\"\n").unwrap_err();
    assert!(matches!(err, TournamentError::Config(_)));
}

#[test]
fn test_load_missing_file() {
    let err = TournamentSettings::load(Path::new("/nonexistent/tournament.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_resolve_explicit_path() {
    let path = std::env::temp_dir().join(format!("swiss-settings-{}.toml", std::process::id()));
    std::fs::write(&path, "log_filter = \"warn\"\n").unwrap();

    let settings = TournamentSettings::resolve(Some(&path)).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(settings.log_filter, "warn");
    assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
}

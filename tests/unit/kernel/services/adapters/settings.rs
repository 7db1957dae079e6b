use super::*;

#[test]
fn settings_path_ends_with_app_settings_file() {
    let path = get_settings_path().unwrap();
    assert!(path.ends_with(format!("{APP_NAME}/{SETTINGS_FILE}")));
}

#[test]
fn load_settings_from_reads_partial_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(SETTINGS_FILE);
    std::fs::write(&path, r#"{"dashboardTitle": "Home"}"#).unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.dashboard_title.as_deref(), Some("Home"));
    assert_eq!(settings.resolve_timeout_ms, None);
}

#[test]
fn load_settings_from_ignores_malformed_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(SETTINGS_FILE);
    std::fs::write(&path, "{ not json").unwrap();

    assert!(load_settings_from(&path).is_none());
}

#[test]
fn load_settings_from_missing_file_is_none() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(load_settings_from(&tmp.path().join("absent.json")).is_none());
}

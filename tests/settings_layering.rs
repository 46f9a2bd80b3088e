use library_catalog::configs::load_settings_from;
use std::fs;

#[test]
fn file_settings_are_overridden_by_environment() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("test.json"),
        r#"{"catalog": {"seed_file": "books.json"}, "logger": {"dir": "logs", "level": "INFO"}}"#,
    ).unwrap();

    let settings = load_settings_from(dir.path(), "test").unwrap();
    assert_eq!(settings.catalog().seed_file(), Some("books.json"));
    assert_eq!(settings.logger().dir(), Some("logs"));
    assert_eq!(settings.logger().level(), Some("INFO"));

    // 이 파일에서 환경 변수를 바꾸는 테스트는 이것 하나뿐이다.
    unsafe { std::env::set_var("CATALOG_LOGGER__LEVEL", "ERROR") };

    let settings = load_settings_from(dir.path(), "test").unwrap();
    assert_eq!(settings.catalog().seed_file(), Some("books.json"));
    assert_eq!(settings.logger().level(), Some("ERROR"));

    let settings = load_settings_from(dir.path(), "missing").unwrap();
    assert_eq!(settings.catalog().seed_file(), None);
    assert_eq!(settings.logger().level(), Some("ERROR"));

    unsafe { std::env::remove_var("CATALOG_LOGGER__LEVEL") };
}

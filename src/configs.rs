use serde::Deserialize;
use std::env;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

pub mod logging;

/// 프로그램 설정 중 발생한 에러 열거
#[derive(Debug)]
pub enum Error {
    /// 설정 파일 혹은 환경 변수를 읽는 중 에러가 발생함
    LoadFailed(String),

    /// 로깅 설정 값이 올바르지 않음
    InvalidLogging(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::LoadFailed(s) => write!(f, "Failed to load settings: {}", s),
            Error::InvalidLogging(s) => write!(f, "Invalid logging settings: {}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::LoadFailed(e.to_string())
    }
}

/// 카탈로그 설정
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// 초기 도서 목록을 담은 JSON 파일 경로로 설정 되지 않을 시 데모 서가를 사용한다.
    seed_file: Option<String>,
}

impl CatalogSettings {
    pub fn seed_file(&self) -> Option<&str> {
        self.seed_file.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    catalog: CatalogSettings,

    #[serde(default)]
    logger: logging::Config,
}

impl Settings {
    pub fn catalog(&self) -> &CatalogSettings {
        &self.catalog
    }

    pub fn logger(&self) -> &logging::Config {
        &self.logger
    }
}

/// 실행 환경에 따라 .env 파일을 로드한다.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

/// `config/{RUN_MODE}.json` 파일과 `CATALOG_` 으로 시작하는 환경 변수를 합쳐 설정을 읽는다.
/// 파일은 없어도 되며 환경 변수의 값이 파일의 값보다 우선한다.
///
/// 환경 변수의 중첩 키는 `__`로 구분한다. (예: `CATALOG_LOGGER__LEVEL=INFO`)
pub fn load_settings() -> Result<Settings, Error> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    load_settings_from(Path::new("config"), &run_mode)
}

/// 설정 디렉토리의 `{run_mode}.json` 파일과 `CATALOG_` 환경 변수로 설정을 읽는다.
pub fn load_settings_from(dir: &Path, run_mode: &str) -> Result<Settings, Error> {
    let file = dir.join(format!("{}.json", run_mode));
    let config = config::Config::builder()
        .add_source(config::File::from(file).required(false))
        .add_source(
            config::Environment::with_prefix("CATALOG")
                .prefix_separator("_")
                .separator("__")
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

/// 프로그램에서 사용할 로깅 옵션을 설정한다.
///
/// 파일 로깅을 사용할 경우 반환된 [`WorkerGuard`]가 살아 있는 동안에만 로그가 파일에 기록 된다.
pub fn set_global_logging_config(settings: &Settings) -> Result<Option<WorkerGuard>, Error> {
    logging::set_global_logging_config(settings.logger())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_use_demo_shelf() {
        let settings = Settings::default();

        assert_eq!(settings.catalog().seed_file(), None);
        assert_eq!(settings.logger().dir(), None);
    }

    #[test]
    fn settings_deserialize_from_source() {
        let config = config::Config::builder()
            .add_source(config::File::from_str(
                r#"{"catalog": {"seed_file": "books.json"}, "logger": {"level": "INFO"}}"#,
                config::FileFormat::Json,
            ))
            .build()
            .unwrap();
        let settings: Settings = config.try_deserialize().unwrap();

        assert_eq!(settings.catalog().seed_file(), Some("books.json"));
        assert_eq!(settings.logger().level(), Some("INFO"));
    }
}

use crate::configs::Error;
use serde::Deserialize;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;

const DEFAULT_FILE_NAME: &str = "library-catalog";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// 로그 파일을 저장할 디렉토리로 설정 되지 않을 시 파일 로깅을 하지 않고 stderr에만 로그를 출력한다.
    dir: Option<String>,

    /// 로그 파일 이름의 접두어, 설정하지 않을시 `library-catalog`로 설정 된다.
    name: Option<String>,

    /// 최대 로그 파일 개수로 로그 파일이 설정한 개수보다 커질 경우 기존의 로그파일들은 삭제 된다.
    /// 설정 되지 않을 시 로그 파일은 삭제 되지 않는다.
    keep: Option<usize>,

    /// 출력할 로그의 레벨로 지정된 로그 레벨 이상만 로깅된다.
    /// 설정하지 않을시 기본값은 WARN으로 설정 된다.
    ///
    /// 이 값은 [`tracing::Level`]로 변환 됨으로 자세한 사항은 해당 파일을 확인
    level: Option<String>,

    /// 로깅 파일이 분리 되는 기간으로 .log 파일 하나 당 설정된 기간 동안 로그가 기록 된다.
    /// 설정 되지 않을시 기본값은 DAILY로 설정된다.
    ///
    /// 이 값은 [`rolling::Rotation`]으로 변환 됨으로 자세한 사항은 해당 파일을 확인
    rotation: Option<String>,
}

impl Config {
    pub fn dir(&self) -> Option<&str> {
        self.dir.as_deref()
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }
}

pub fn set_global_logging_config(c: &Config) -> Result<Option<WorkerGuard>, Error> {
    let level = match &c.level {
        Some(level) => parse_level(level)?,
        None => tracing::Level::WARN,
    };

    let Some(dir) = &c.dir else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(level)
            .try_init()
            .map_err(|e| Error::InvalidLogging(e.to_string()))?;
        return Ok(None);
    };

    let rotation = match &c.rotation {
        Some(rotation) => parse_rotation(rotation)?,
        None => rolling::Rotation::DAILY,
    };

    let mut file_appender = rolling::RollingFileAppender::builder()
        .filename_prefix(c.name.as_deref().unwrap_or(DEFAULT_FILE_NAME))
        .filename_suffix("log")
        .rotation(rotation);

    if let Some(keep) = c.keep {
        file_appender = file_appender.max_log_files(keep);
    }

    let file_appender = file_appender.build(dir)
        .map_err(|e| Error::InvalidLogging(e.to_string()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let writer = std::io::stderr.and(non_blocking);

    tracing_subscriber::fmt()
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_span_list(true)
        .with_timer(LocalTime::new(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]")))
        .with_writer(writer)
        .with_max_level(level)
        .try_init()
        .map_err(|e| Error::InvalidLogging(e.to_string()))?;

    Ok(Some(guard))
}

fn parse_rotation(s: &str) -> Result<rolling::Rotation, Error> {
    match s {
        "DAILY" => Ok(rolling::Rotation::DAILY),
        "HOURLY" => Ok(rolling::Rotation::HOURLY),
        "MINUTELY" => Ok(rolling::Rotation::MINUTELY),
        "NEVER" => Ok(rolling::Rotation::NEVER),
        _ => Err(Error::InvalidLogging(format!(
            "rotation must be one of DAILY, HOURLY, MINUTELY, NEVER (got {})", s
        ))),
    }
}

fn parse_level(l: &str) -> Result<tracing::Level, Error> {
    match l {
        "TRACE" => Ok(tracing::Level::TRACE),
        "DEBUG" => Ok(tracing::Level::DEBUG),
        "INFO" => Ok(tracing::Level::INFO),
        "WARN" => Ok(tracing::Level::WARN),
        "ERROR" => Ok(tracing::Level::ERROR),
        _ => Err(Error::InvalidLogging(format!(
            "level must be one of TRACE, DEBUG, INFO, WARN, ERROR (got {})", l
        ))),
    }
}

use serde::Deserialize;
use std::env;
use std::fmt;
use std::fmt::{Display, Formatter};
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug)]
pub enum LoggingError {
    InvalidRotation(String),
    InvalidLevel(String),
    AppenderFailed(String),
    InitFailed(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::InvalidRotation(s) => write!(f, "rotation must be one of DAILY, HOURLY, MINUTELY, NEVER: {}", s),
            LoggingError::InvalidLevel(s) => write!(f, "level must be one of TRACE, DEBUG, INFO, WARN, ERROR: {}", s),
            LoggingError::AppenderFailed(s) => write!(f, "failed to create log file appender: {}", s),
            LoggingError::InitFailed(s) => write!(f, "failed to install subscriber: {}", s),
        }
    }
}

impl std::error::Error for LoggingError {}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    dir: String,
    name: String,

    /// 최대 로그 파일 개수로 로그 파일이 설정한 개수보다 커질 경우 기존의 로그파일들은 삭제 된다.
    /// 설정 되지 않을 시 로그 파일은 삭제 되지 않는다.
    keep: Option<usize>,

    /// 파일에 기록할 로그의 레벨로 지정된 로그 레벨 이상만 로깅된다.
    /// 설정하지 않을시 기본값은 DEBUG로 설정 된다.
    ///
    /// 이 값은 [`tracing::Level`]로 변환 됨으로 자세한 사항은 해당 파일을 확인
    level: Option<String>,

    /// 로깅 파일이 분리 되는 기간으로 .log 파일 하나 당 설정된 기간 동안 로그가 기록 된다.
    /// 설정 되지 않을시 기본값은 DAILY로 설정된다.
    rotation: Option<String>,
}

impl Config {
    /// `LOGGER_DIR`, `LOGGER_FILE_NAME`이 모두 설정된 경우에만 환경 변수로 로깅 설정을 만든다.
    pub fn from_env() -> Option<Self> {
        let dir = env::var("LOGGER_DIR").ok()?;
        let name = env::var("LOGGER_FILE_NAME").ok()?;

        Some(Self {
            dir,
            name,
            keep: env::var("LOGGER_KEEP").ok().and_then(|v| v.parse::<usize>().ok()),
            level: env::var("LOGGER_LEVEL").ok(),
            rotation: env::var("LOGGER_ROTATION").ok(),
        })
    }

    pub fn dir(&self) -> &str {
        &self.dir
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 로깅을 설정하는 실행 프로그램
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    Console,
    Window,
}

impl Frontend {
    /// 로그 파일 설정이 없을 때 stderr에 출력할 최대 레벨
    ///
    /// 콘솔 프로그램은 터미널이 곧 사용자 화면이라 ERROR만 출력한다.
    /// 네트워크 오류처럼 화면에 따로 안내되는 실패는 WARN 이하로 기록된다.
    pub fn fallback_level(self) -> LevelFilter {
        match self {
            Frontend::Console => LevelFilter::ERROR,
            Frontend::Window => LevelFilter::WARN,
        }
    }
}

/// 로그 파일 설정이 없을 때 사용하는 색상 없는 한 줄 형식의 subscriber
pub fn fallback_subscriber<W>(level: LevelFilter, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_writer(writer)
        .with_max_level(level)
        .finish()
}

/// 전역 로깅 설정을 한다.
///
/// # Description
/// 로깅 설정이 있으면 JSON 형식으로 롤링 로그 파일에 기록하고,
/// 없으면 [`Frontend::fallback_level`] 이상만 stderr에 출력한다.
///
/// # Returns
/// 파일 로깅을 사용하는 경우 [`WorkerGuard`]를 반환하며, 프로그램이 끝날 때까지 유지해야 로그가 유실되지 않는다.
pub fn init(config: Option<&Config>, frontend: Frontend) -> Result<Option<WorkerGuard>, LoggingError> {
    let Some(c) = config else {
        fallback_subscriber(frontend.fallback_level(), std::io::stderr)
            .try_init()
            .map_err(|e| LoggingError::InitFailed(e.to_string()))?;
        return Ok(None);
    };

    let rotation = match &c.rotation {
        Some(rotation) => parse_rotation(rotation)?,
        None => rolling::Rotation::DAILY,
    };
    let level = match &c.level {
        Some(level) => parse_level(level)?,
        None => tracing::Level::DEBUG,
    };

    let mut file_appender = rolling::RollingFileAppender::builder()
        .filename_prefix(c.name.clone())
        .filename_suffix("log")
        .rotation(rotation);

    if let Some(keep) = c.keep {
        file_appender = file_appender.max_log_files(keep);
    }

    let file_appender = file_appender.build(c.dir.clone())
        .map_err(|e| LoggingError::AppenderFailed(e.to_string()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_span_list(true)
        .with_timer(LocalTime::new(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]")))
        .with_writer(non_blocking)
        .with_max_level(level)
        .try_init()
        .map_err(|e| LoggingError::InitFailed(e.to_string()))?;

    Ok(Some(guard))
}

fn parse_rotation(s: &str) -> Result<rolling::Rotation, LoggingError> {
    match s.to_uppercase().as_str() {
        "DAILY" => Ok(rolling::Rotation::DAILY),
        "HOURLY" => Ok(rolling::Rotation::HOURLY),
        "MINUTELY" => Ok(rolling::Rotation::MINUTELY),
        "NEVER" => Ok(rolling::Rotation::NEVER),
        _ => Err(LoggingError::InvalidRotation(s.to_owned())),
    }
}

fn parse_level(l: &str) -> Result<tracing::Level, LoggingError> {
    match l.to_uppercase().as_str() {
        "TRACE" => Ok(tracing::Level::TRACE),
        "DEBUG" => Ok(tracing::Level::DEBUG),
        "INFO" => Ok(tracing::Level::INFO),
        "WARN" => Ok(tracing::Level::WARN),
        "ERROR" => Ok(tracing::Level::ERROR),
        _ => Err(LoggingError::InvalidLevel(l.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_names_are_case_insensitive() {
        assert_eq!(parse_rotation("daily").unwrap(), rolling::Rotation::DAILY);
        assert_eq!(parse_rotation("HOURLY").unwrap(), rolling::Rotation::HOURLY);
        assert_eq!(parse_rotation("Never").unwrap(), rolling::Rotation::NEVER);
        assert!(matches!(parse_rotation("weekly"), Err(LoggingError::InvalidRotation(_))));
    }

    #[test]
    fn level_names_are_parsed() {
        assert_eq!(parse_level("info").unwrap(), tracing::Level::INFO);
        assert_eq!(parse_level("ERROR").unwrap(), tracing::Level::ERROR);
        assert!(matches!(parse_level("loud"), Err(LoggingError::InvalidLevel(_))));
    }

    #[test]
    fn console_fallback_drops_warnings() {
        let console = Frontend::Console.fallback_level();

        assert_eq!(console, LevelFilter::ERROR);
        assert!(LevelFilter::WARN > console);
        assert!(LevelFilter::INFO > console);
    }

    #[test]
    fn window_fallback_keeps_warnings() {
        assert_eq!(Frontend::Window.fallback_level(), LevelFilter::WARN);
        assert!(Frontend::Window.fallback_level() > Frontend::Console.fallback_level());
    }
}

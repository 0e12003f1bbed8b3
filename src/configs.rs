use crate::provider::google::{DEFAULT_TIMEOUT_SECONDS, GOOGLE_BOOKS_ENDPOINT};
use crate::provider::thumbnail::DEFAULT_THUMBNAIL_TIMEOUT_SECONDS;
use crate::render::{CONSOLE_AUTHOR_PLACEHOLDER, DEFAULT_DESCRIPTION_LIMIT, WINDOW_AUTHOR_PLACEHOLDER};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub mod logging;

/// 설정 파일을 찾을 디렉토리
pub const CONFIG_DIR: &str = "config";
/// 환경 변수로 설정을 덮어쓸 때 사용하는 접두사
pub const ENV_PREFIX: &str = "BOOK_FINDER";

/// 설정 파일 또는 환경 변수를 읽지 못함
#[derive(Debug)]
pub enum ConfigError {
    LoadFailed(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed(s) => write!(f, "Failed to load configuration: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

/// 검색 API 호출 설정
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    endpoint: String,
    timeout_secs: u64,

    /// 썸네일 이미지 요청 타임아웃으로 윈도우 프로그램에서만 사용된다.
    thumbnail_timeout_secs: u64,
}

impl SearchConfig {
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn thumbnail_timeout_secs(&self) -> u64 {
        self.thumbnail_timeout_secs
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: GOOGLE_BOOKS_ENDPOINT.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECONDS,
            thumbnail_timeout_secs: DEFAULT_THUMBNAIL_TIMEOUT_SECONDS,
        }
    }
}

/// 결과 표시 설정
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    console_author_placeholder: String,
    window_author_placeholder: String,
    description_limit: usize,
}

impl RenderConfig {
    pub fn console_author_placeholder(&self) -> &str {
        &self.console_author_placeholder
    }

    pub fn window_author_placeholder(&self) -> &str {
        &self.window_author_placeholder
    }

    pub fn description_limit(&self) -> usize {
        self.description_limit
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            console_author_placeholder: CONSOLE_AUTHOR_PLACEHOLDER.to_owned(),
            window_author_placeholder: WINDOW_AUTHOR_PLACEHOLDER.to_owned(),
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    search: SearchConfig,
    render: RenderConfig,
    logger: Option<logging::Config>,
}

impl AppConfig {
    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// 설정 파일의 `logger` 항목, 없으면 `LOGGER_*` 환경 변수로 만든 로깅 설정
    pub fn logger(&self) -> Option<logging::Config> {
        self.logger.clone().or_else(logging::Config::from_env)
    }
}

/// 실행 환경에 따라 .env 파일을 로드한다.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

/// `RUN_MODE`(기본값 development)에 해당하는 설정을 읽는다.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    load_config_from(Path::new(CONFIG_DIR), &run_mode)
}

/// 기본값, `{dir}/{run_mode}.json`, `BOOK_FINDER_` 환경 변수 순으로 설정을 합친다.
/// 설정 파일은 없어도 된다.
///
/// # Example
/// 환경 변수 `BOOK_FINDER_SEARCH__TIMEOUT_SECS=3`은 `search.timeout_secs`를 3으로 덮어쓴다.
pub fn load_config_from(dir: &Path, run_mode: &str) -> Result<AppConfig, ConfigError> {
    let file = dir.join(format!("{}.json", run_mode));

    let config = config::Config::builder()
        .set_default("search.endpoint", GOOGLE_BOOKS_ENDPOINT)?
        .set_default("search.timeout_secs", DEFAULT_TIMEOUT_SECONDS as i64)?
        .set_default("search.thumbnail_timeout_secs", DEFAULT_THUMBNAIL_TIMEOUT_SECONDS as i64)?
        .set_default("render.console_author_placeholder", CONSOLE_AUTHOR_PLACEHOLDER)?
        .set_default("render.window_author_placeholder", WINDOW_AUTHOR_PLACEHOLDER)?
        .set_default("render.description_limit", DEFAULT_DESCRIPTION_LIMIT as i64)?
        .add_source(config::File::from(file).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

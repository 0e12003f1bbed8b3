use crate::configs::SearchConfig;
use reqwest::blocking;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// 썸네일 요청의 기본 타임아웃 시간(초)
pub const DEFAULT_THUMBNAIL_TIMEOUT_SECONDS: u64 = 5;

/// 썸네일 이미지 로딩 중 발생한 에러 열거
///
/// 카드 하나의 이미지만 생략될 뿐 검색 결과 전체에는 영향을 주지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageLoadError {
    ClientBuildFailed(String),
    RequestFailed(String),
    UnsuccessfulStatus(u16),
    BodyReadFailed(String),
    DecodeFailed(String),
}

impl Display for ImageLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::ClientBuildFailed(s) => write!(f, "failed to build image http client: {}", s),
            ImageLoadError::RequestFailed(s) => write!(f, "image request failed: {}", s),
            ImageLoadError::UnsuccessfulStatus(status) => write!(f, "image request returned HTTP status {}", status),
            ImageLoadError::BodyReadFailed(s) => write!(f, "failed to read image body: {}", s),
            ImageLoadError::DecodeFailed(s) => write!(f, "failed to decode image: {}", s),
        }
    }
}

impl std::error::Error for ImageLoadError {}

/// 썸네일 이미지 바이트를 가져오는 트레이트
pub trait ThumbnailSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageLoadError>;
}

/// HTTP로 썸네일을 내려받는 기본 구현
pub struct Fetcher {
    http: blocking::Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self, ImageLoadError> {
        let http = blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ImageLoadError::ClientBuildFailed(e.to_string()))?;

        Ok(Self { http })
    }

    pub fn with_config(config: &SearchConfig) -> Result<Self, ImageLoadError> {
        Self::new(Duration::from_secs(config.thumbnail_timeout_secs()))
    }
}

impl ThumbnailSource for Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageLoadError> {
        let response = self.http.get(url)
            .send()
            .map_err(|err| ImageLoadError::RequestFailed(err.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageLoadError::UnsuccessfulStatus(response.status().as_u16()));
        }

        response.bytes()
            .map(|bytes| bytes.to_vec())
            .map_err(|err| ImageLoadError::BodyReadFailed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn client_build_failure_names_its_cause() {
        let err = ImageLoadError::ClientBuildFailed("no TLS backend".to_string());

        assert_eq!(err.to_string(), "failed to build image http client: no TLS backend");
        assert_ne!(err, ImageLoadError::RequestFailed("no TLS backend".to_string()));
    }

    #[test]
    fn unreachable_host_is_request_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = Fetcher::new(Duration::from_secs(2)).unwrap();
        let result = fetcher.fetch(&format!("http://{}/thumb.jpg", addr));

        assert!(matches!(result, Err(ImageLoadError::RequestFailed(_))));
    }
}

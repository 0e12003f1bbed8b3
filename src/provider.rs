use crate::item::SearchResult;
use crate::query::SearchQuery;
use std::fmt;
use std::fmt::{Display, Formatter};

pub mod google;
pub mod thumbnail;

/// 도서 검색 API 호출 중 발생한 에러 열거
///
/// 어떤 경우든 사용자에게는 네트워크 에러로 안내되며 프로그램은 계속 사용할 수 있다.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    InvalidBaseUrl,
    ClientBuildFailed(String),
    RequestFailed(String),
    UnsuccessfulStatus(u16),
    ResponseTextExtractionFailed(String),
    ResponseParseFailed(String),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidBaseUrl => write!(f, "invalid search endpoint"),
            ClientError::ClientBuildFailed(s) => write!(f, "failed to build http client: {}", s),
            ClientError::RequestFailed(s) => write!(f, "{}", s),
            ClientError::UnsuccessfulStatus(status) => write!(f, "HTTP status {}", status),
            ClientError::ResponseTextExtractionFailed(s) => write!(f, "failed to read response: {}", s),
            ClientError::ResponseParseFailed(s) => write!(f, "failed to parse response: {}", s),
        }
    }
}

impl std::error::Error for ClientError {}

/// 도서 검색 API 클라이언트 트레이트
///
/// # Description
/// 요청 1회당 정확히 한번의 HTTP 호출만 수행하며 재시도, 페이징, 인증을 하지 않는다.
/// 구현체는 상태를 가지지 않아 여러번, 여러 스레드에서 호출해도 안전해야 한다.
pub trait Client {

    /// 검증된 검색 요청으로 도서를 검색한다.
    ///
    /// # Returns
    /// - `Ok(SearchResult::Found)`: 한 건 이상 검색됨
    /// - `Ok(SearchResult::Empty)`: 정상 응답이지만 검색 결과가 없음
    /// - `Err(ClientError)`: 연결 실패, 타임아웃, 2xx가 아닌 응답, 응답 파싱 실패
    fn search(&self, query: &SearchQuery) -> Result<SearchResult, ClientError>;
}

use crate::configs::SearchConfig;
use crate::item::{Book, SearchResult};
use crate::provider;
use crate::provider::ClientError;
use crate::query::SearchQuery;
use reqwest::{blocking, Url};
use serde::Deserialize;
use serde_with::{serde_as, VecSkipError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// 구글 도서 검색 API 엔드포인트 URL
pub const GOOGLE_BOOKS_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";
/// API 요청의 기본 타임아웃 시간(초)
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// 구글 도서 검색 API 응답
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct VolumesResponse {
    /// 전체 검색 결과 수
    #[serde(rename = "totalItems")]
    pub total_items: Option<i64>,
    /// 도서 아이템 목록, 검색 결과가 없으면 생략된다.
    /// 형식이 맞지 않는 아이템은 건너뛴다.
    #[serde_as(as = "Option<VecSkipError<_>>")]
    pub items: Option<Vec<VolumeItem>>,
}

#[derive(Debug, Deserialize)]
pub struct VolumeItem {
    pub kind: Option<String>,
    pub id: Option<String>,
    pub etag: Option<String>,
    #[serde(rename = "selfLink")]
    pub self_link: Option<String>,
    #[serde(rename = "volumeInfo")]
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Deserialize)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
    #[serde(rename = "publishedDate")]
    pub published_date: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "imageLinks")]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
pub struct ImageLinks {
    #[serde(rename = "smallThumbnail")]
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
}

impl VolumeItem {
    fn into_book(self) -> Book {
        let mut builder = Book::builder();

        if let Some(kind) = self.kind {
            builder = builder.kind(kind);
        }
        if let Some(id) = self.id {
            builder = builder.id(id);
        }
        if let Some(etag) = self.etag {
            builder = builder.etag(etag);
        }
        if let Some(self_link) = self.self_link {
            builder = builder.self_link(self_link);
        }

        if let Some(info) = self.volume_info {
            if let Some(title) = info.title {
                builder = builder.title(title);
            }
            if let Some(authors) = info.authors {
                builder = builder.authors(authors);
            }
            if let Some(publisher) = info.publisher {
                builder = builder.publisher(publisher);
            }
            if let Some(date) = info.published_date {
                builder = builder.published_date(date);
            }
            if let Some(description) = info.description {
                builder = builder.description(description);
            }
            if let Some(links) = info.image_links {
                if let Some(small) = links.small_thumbnail {
                    builder = builder.small_thumbnail(small);
                }
                if let Some(thumbnail) = links.thumbnail {
                    builder = builder.thumbnail(thumbnail);
                }
            }
        }

        builder.build()
    }
}

impl VolumesResponse {
    pub fn into_result(self) -> SearchResult {
        let books = self.items
            .unwrap_or_default()
            .into_iter()
            .map(VolumeItem::into_book)
            .collect();

        SearchResult::from_books(books)
    }
}

/// 응답 본문을 [`VolumesResponse`]로 파싱한다.
pub fn parse_volumes(text: &str) -> Result<VolumesResponse, ClientError> {
    serde_json::from_str::<VolumesResponse>(text)
        .map_err(|err| ClientError::ResponseParseFailed(err.to_string()))
}

/// 응답 본문을 파싱하여 검색 결과로 변환한다.
pub fn parse_response(text: &str) -> Result<SearchResult, ClientError> {
    parse_volumes(text).map(VolumesResponse::into_result)
}

/// 구글 도서 검색 API 클라이언트
pub struct Client {
    http: blocking::Client,
    endpoint: Url,
}

impl Client {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|_| ClientError::InvalidBaseUrl)?;
        let http = blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::ClientBuildFailed(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn with_config(config: &SearchConfig) -> Result<Self, ClientError> {
        Self::new(config.endpoint(), Duration::from_secs(config.timeout_secs()))
    }

}

impl provider::Client for Client {
    fn search(&self, query: &SearchQuery) -> Result<SearchResult, ClientError> {
        let url = build_search_url(&self.endpoint, query);
        debug!(url = %url, "Searching books");

        let response = self.http.get(url)
            .send()
            .map_err(|err| {
                warn!(term = query.term(), error = %err, "Book search request failed");
                ClientError::RequestFailed(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(term = query.term(), status = status.as_u16(), "Book search returned an error status");
            return Err(ClientError::UnsuccessfulStatus(status.as_u16()));
        }

        let text = response.text()
            .map_err(|err| ClientError::ResponseTextExtractionFailed(err.to_string()))?;

        let volumes = parse_volumes(&text)?;
        let total = volumes.total_items.unwrap_or_default();
        let result = volumes.into_result();
        info!(term = query.term(), limit = query.limit(), count = result.len(), total, "Book search completed");

        Ok(result)
    }
}

/// 검색어와 결과 개수를 쿼리 파라미터로 붙인 요청 URL을 만든다.
/// 검색어는 `application/x-www-form-urlencoded` 규칙으로 인코딩 된다.
pub fn build_search_url(endpoint: &Url, query: &SearchQuery) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("q", query.term())
        .append_pair("maxResults", &query.limit().to_string());
    url
}

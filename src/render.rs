use crate::configs::RenderConfig;
use crate::item::Book;

pub mod card;
pub mod console;

/// 값이 없는 필드에 표시할 기본 문구
pub const NOT_AVAILABLE: &str = "N/A";
/// 설명이 없는 도서에 표시할 문구
pub const NO_DESCRIPTION: &str = "No description available.";
/// 썸네일 주소가 없는 도서에 표시할 문구
pub const NO_IMAGE: &str = "No Image";
/// 화면에 표시할 설명의 최대 글자 수
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 200;

/// 콘솔 출력에서 저자가 없을 때 사용할 문구
pub const CONSOLE_AUTHOR_PLACEHOLDER: &str = "N/A";
/// 윈도우 카드에서 저자가 없을 때 사용할 문구
pub const WINDOW_AUTHOR_PLACEHOLDER: &str = "Unknown Author";

/// 렌더러별 표시 옵션
///
/// # Description
/// 콘솔과 윈도우는 저자 대체 문구가 서로 다르며 이 차이는 의도된 것이므로 통일하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    author_placeholder: String,
    description_limit: usize,
}

impl RenderOptions {
    pub fn new<S: Into<String>>(author_placeholder: S, description_limit: usize) -> Self {
        Self {
            author_placeholder: author_placeholder.into(),
            description_limit,
        }
    }

    pub fn console() -> Self {
        Self::new(CONSOLE_AUTHOR_PLACEHOLDER, DEFAULT_DESCRIPTION_LIMIT)
    }

    pub fn window() -> Self {
        Self::new(WINDOW_AUTHOR_PLACEHOLDER, DEFAULT_DESCRIPTION_LIMIT)
    }

    pub fn console_with_config(config: &RenderConfig) -> Self {
        Self::new(config.console_author_placeholder(), config.description_limit())
    }

    pub fn window_with_config(config: &RenderConfig) -> Self {
        Self::new(config.window_author_placeholder(), config.description_limit())
    }

    pub fn author_placeholder(&self) -> &str {
        &self.author_placeholder
    }

    pub fn description_limit(&self) -> usize {
        self.description_limit
    }

    /// 저자 목록을 `, `로 이어 붙이며, 저자 정보가 없으면 대체 문구를 사용한다.
    pub fn authors_text(&self, book: &Book) -> String {
        match book.authors() {
            Some(authors) => authors.join(", "),
            None => self.author_placeholder.clone(),
        }
    }

    /// 표시용으로 잘라낸 설명을 반환한다. 원본 [`Book`]은 변경되지 않는다.
    pub fn description_text<'a>(&self, book: &'a Book) -> &'a str {
        truncate(book.description().unwrap_or(NO_DESCRIPTION), self.description_limit)
    }
}

/// 문자열의 앞에서부터 `limit`개의 문자(char)만 남긴다.
/// 바이트가 아닌 유니코드 스칼라 값 단위로 자르므로 멀티바이트 문자가 깨지지 않는다.
///
/// # Example
/// ```
/// use book_finder::render::truncate;
///
/// assert_eq!(truncate("안녕하세요", 2), "안녕");
/// assert_eq!(truncate("abc", 10), "abc");
/// ```
pub fn truncate(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

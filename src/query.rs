use std::fmt;
use std::fmt::{Display, Formatter};

/// 검색어 검증 중 발생한 에러 열거
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// 검색어가 비어 있거나 공백으로만 이루어짐
    EmptyQuery,

    /// 검색 결과 개수가 올바르지 않음
    InvalidLimit(InvalidLimit),
}

/// 검색 결과 개수가 거부된 이유
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidLimit {
    /// 정수로 변환할 수 없는 입력
    NotANumber(String),

    /// 0 이하의 값
    NotPositive(i64),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::EmptyQuery => write!(f, "Book name cannot be empty!"),
            QueryError::InvalidLimit(InvalidLimit::NotANumber(_)) => write!(f, "Invalid input! Please enter a number."),
            QueryError::InvalidLimit(InvalidLimit::NotPositive(_)) => write!(f, "Please enter a positive number."),
        }
    }
}

impl std::error::Error for QueryError {}

/// 검증이 완료된 검색 요청
///
/// # Description
/// 사용자 입력을 [`SearchQuery::parse`]로 검증한 경우에만 생성되며,
/// 검색어는 앞뒤 공백이 제거된 상태로 저장된다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    limit: u32,
}

impl SearchQuery {

    /// 검색어와 검색 결과 개수 입력을 검증하여 검색 요청을 만든다.
    ///
    /// # Parameter
    /// - `term`: 사용자가 입력한 검색어
    /// - `limit`: 사용자가 입력한 검색 결과 개수 (문자열 그대로)
    ///
    /// # Returns
    /// - 검색어가 비어 있으면 [`QueryError::EmptyQuery`]
    /// - 개수가 정수가 아니거나 0 이하이면 [`QueryError::InvalidLimit`]
    ///
    /// # Example
    /// ```
    /// use book_finder::query::SearchQuery;
    ///
    /// let query = SearchQuery::parse("  rust  ", "5").unwrap();
    /// assert_eq!(query.term(), "rust");
    /// assert_eq!(query.limit(), 5);
    /// ```
    pub fn parse(term: &str, limit: &str) -> Result<Self, QueryError> {
        let term = validate_term(term)?;
        let limit = validate_limit(limit)?;

        Ok(Self { term, limit })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

/// 검색어의 앞뒤 공백을 제거하고 비어 있는지 검사한다.
pub fn validate_term(term: &str) -> Result<String, QueryError> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Err(QueryError::EmptyQuery);
    }
    Ok(trimmed.to_owned())
}

/// 검색 결과 개수를 양의 정수로 변환한다.
/// `u32` 범위를 넘는 값은 숫자가 아닌 입력으로 취급한다.
pub fn validate_limit(limit: &str) -> Result<u32, QueryError> {
    let raw = limit.trim();
    let parsed = raw.parse::<i64>()
        .map_err(|_| QueryError::InvalidLimit(InvalidLimit::NotANumber(raw.to_owned())))?;

    if parsed <= 0 {
        return Err(QueryError::InvalidLimit(InvalidLimit::NotPositive(parsed)));
    }

    u32::try_from(parsed)
        .map_err(|_| QueryError::InvalidLimit(InvalidLimit::NotANumber(raw.to_owned())))
}

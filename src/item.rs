/// 검색 API 응답 아이템 하나를 읽기 전용으로 투영한 도서 정보
///
/// # Description
/// 원본 데이터의 모든 필드는 생략될 수 있으며 생략된 값은 `None`으로 보관된다.
/// 화면에 표시할 대체 값은 렌더러가 결정한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    title: Option<String>,
    authors: Option<Vec<String>>,
    publisher: Option<String>,
    published_date: Option<String>,
    description: Option<String>,
    small_thumbnail: Option<String>,
    thumbnail: Option<String>,
    kind: Option<String>,
    id: Option<String>,
    etag: Option<String>,
    self_link: Option<String>,
}

impl Book {
    pub fn builder() -> BookBuilder {
        BookBuilder::new()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn authors(&self) -> Option<&[String]> {
        self.authors.as_deref()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn published_date(&self) -> Option<&str> {
        self.published_date.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn small_thumbnail(&self) -> Option<&str> {
        self.small_thumbnail.as_deref()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    pub fn self_link(&self) -> Option<&str> {
        self.self_link.as_deref()
    }

    /// 카드에 표시할 썸네일 주소로, `thumbnail`이 없으면 `small_thumbnail`을 사용한다.
    pub fn preferred_thumbnail(&self) -> Option<&str> {
        self.thumbnail().or_else(|| self.small_thumbnail())
    }
}

#[derive(Debug, Default)]
pub struct BookBuilder {
    book: Book,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.book.title = Some(title.into());
        self
    }

    pub fn authors(mut self, authors: Vec<String>) -> Self {
        self.book.authors = Some(authors);
        self
    }

    pub fn publisher<S: Into<String>>(mut self, publisher: S) -> Self {
        self.book.publisher = Some(publisher.into());
        self
    }

    pub fn published_date<S: Into<String>>(mut self, published_date: S) -> Self {
        self.book.published_date = Some(published_date.into());
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.book.description = Some(description.into());
        self
    }

    pub fn small_thumbnail<S: Into<String>>(mut self, url: S) -> Self {
        self.book.small_thumbnail = Some(url.into());
        self
    }

    pub fn thumbnail<S: Into<String>>(mut self, url: S) -> Self {
        self.book.thumbnail = Some(url.into());
        self
    }

    pub fn kind<S: Into<String>>(mut self, kind: S) -> Self {
        self.book.kind = Some(kind.into());
        self
    }

    pub fn id<S: Into<String>>(mut self, id: S) -> Self {
        self.book.id = Some(id.into());
        self
    }

    pub fn etag<S: Into<String>>(mut self, etag: S) -> Self {
        self.book.etag = Some(etag.into());
        self
    }

    pub fn self_link<S: Into<String>>(mut self, self_link: S) -> Self {
        self.book.self_link = Some(self_link.into());
        self
    }

    pub fn build(self) -> Book {
        self.book
    }
}

/// 검색 요청 1회의 결과
///
/// 전송 실패는 이 타입이 아니라 [`crate::provider::ClientError`]로 표현된다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// 한 건 이상의 도서가 API 응답 순서대로 담긴 결과
    Found(Vec<Book>),

    /// 정상 응답이지만 검색된 도서가 없음
    Empty,
}

impl SearchResult {

    /// 도서 목록으로 결과를 만든다. 목록이 비어 있으면 [`SearchResult::Empty`]가 된다.
    pub fn from_books(books: Vec<Book>) -> Self {
        if books.is_empty() {
            SearchResult::Empty
        } else {
            SearchResult::Found(books)
        }
    }

    pub fn books(&self) -> &[Book] {
        match self {
            SearchResult::Found(books) => books,
            SearchResult::Empty => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.books().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchResult::Empty)
    }
}

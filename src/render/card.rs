use crate::item::{Book, SearchResult};
use crate::provider::thumbnail::ImageLoadError;
use crate::render::{or_not_available, RenderOptions};

/// 윈도우 목록에 표시할 도서 카드
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub published_date: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
}

impl Card {
    pub fn from_book(book: &Book, options: &RenderOptions) -> Self {
        Self {
            title: or_not_available(book.title()).to_owned(),
            authors: options.authors_text(book),
            publisher: or_not_available(book.publisher()).to_owned(),
            published_date: or_not_available(book.published_date()).to_owned(),
            description: options.description_text(book).to_owned(),
            thumbnail_url: book.preferred_thumbnail().map(str::to_owned),
        }
    }
}

/// 검색 결과를 응답 순서대로 카드 목록으로 변환한다. 결과가 없으면 빈 목록을 반환한다.
pub fn cards(result: &SearchResult, options: &RenderOptions) -> Vec<Card> {
    result.books()
        .iter()
        .map(|book| Card::from_book(book, options))
        .collect()
}

/// 디코딩 된 썸네일 이미지 (RGBA8)
#[derive(Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Thumbnail({}x{})", self.width, self.height)
    }
}

/// 내려받은 이미지 바이트를 RGBA 픽셀로 디코딩한다.
pub fn decode_thumbnail(bytes: &[u8]) -> Result<Thumbnail, ImageLoadError> {
    let image = image::load_from_memory(bytes)
        .map_err(|err| ImageLoadError::DecodeFailed(err.to_string()))?;
    let rgba = image.to_rgba8();

    Ok(Thumbnail {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn cards_follow_result_order_with_window_placeholder() {
        let result = SearchResult::Found(vec![
            Book::builder().title("One").build(),
            Book::builder()
                .title("Two")
                .authors(vec!["A".to_string(), "B".to_string()])
                .thumbnail("http://img/two")
                .build(),
        ]);

        let cards = cards(&result, &RenderOptions::window());

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "One");
        assert_eq!(cards[0].authors, "Unknown Author");
        assert_eq!(cards[0].publisher, "N/A");
        assert_eq!(cards[0].published_date, "N/A");
        assert_eq!(cards[0].description, "No description available.");
        assert_eq!(cards[0].thumbnail_url, None);
        assert_eq!(cards[1].title, "Two");
        assert_eq!(cards[1].authors, "A, B");
        assert_eq!(cards[1].thumbnail_url.as_deref(), Some("http://img/two"));
    }

    #[test]
    fn empty_result_has_no_cards() {
        assert!(cards(&SearchResult::Empty, &RenderOptions::window()).is_empty());
    }

    #[test]
    fn card_description_is_truncated() {
        let book = Book::builder().description("z".repeat(500)).build();
        let card = Card::from_book(&book, &RenderOptions::window());

        assert_eq!(card.description.chars().count(), 200);
        assert_eq!(book.description().map(str::len), Some(500));
    }

    #[test]
    fn decode_png_thumbnail() {
        let mut bytes = Vec::new();
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .unwrap();

        let thumbnail = decode_thumbnail(&bytes).unwrap();

        assert_eq!(thumbnail.width, 3);
        assert_eq!(thumbnail.height, 2);
        assert_eq!(thumbnail.rgba.len(), 3 * 2 * 4);
        assert_eq!(&thumbnail.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn decode_garbage_fails() {
        let result = decode_thumbnail(b"definitely not an image");
        assert!(matches!(result, Err(ImageLoadError::DecodeFailed(_))));
    }
}

use crate::item::{Book, SearchResult};
use crate::render::{or_not_available, RenderOptions, NO_IMAGE};
use std::io;
use std::io::Write;

const HEAVY_RULE: &str = "============================================================";
const LIGHT_RULE: &str = "------------------------------------------------------------";

/// 검색 결과를 콘솔 출력 형식으로 쓴다.
///
/// # Description
/// 도서는 API 응답 순서 그대로 1번부터 번호를 붙여 출력한다.
/// 결과가 없으면 헤더 다음에 안내 문구 한 줄만 출력하고 끝낸다.
pub fn render<W: Write>(result: &SearchResult, options: &RenderOptions, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n📚 ====== Books ======\n")?;

    let books = match result {
        SearchResult::Empty => {
            writeln!(out, "⚠️ No books found. Try another title.")?;
            return Ok(());
        }
        SearchResult::Found(books) => books,
    };

    for (index, book) in books.iter().enumerate() {
        render_book(index + 1, book, options, out)?;
    }

    writeln!(out, "\n✅ All book details displayed successfully!")
}

fn render_book<W: Write>(number: usize, book: &Book, options: &RenderOptions, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n📘 Book {}", number)?;
    writeln!(out, "{}", HEAVY_RULE)?;

    writeln!(out, "📖 Title: {}", or_not_available(book.title()))?;
    writeln!(out, "👨‍💻 Author(s): {}", options.authors_text(book))?;
    writeln!(out, "🏢 Publisher: {}", or_not_available(book.publisher()))?;
    writeln!(out, "📅 Published Date: {}", or_not_available(book.published_date()))?;
    writeln!(out, "📝 Description: {}...", options.description_text(book))?;
    writeln!(out, "🖼️ Small Thumbnail: {}", book.small_thumbnail().unwrap_or(NO_IMAGE))?;
    writeln!(out, "📘 Thumbnail: {}", book.thumbnail().unwrap_or(NO_IMAGE))?;

    writeln!(out, "\n📂 Additional Information")?;
    writeln!(out, "{}", LIGHT_RULE)?;
    writeln!(out, "📚 Kind: {}", or_not_available(book.kind()))?;
    writeln!(out, "🆔 ID: {}", or_not_available(book.id()))?;
    writeln!(out, "🔖 ETag: {}", or_not_available(book.etag()))?;
    writeln!(out, "🔗 Self Link: {}", or_not_available(book.self_link()))?;
    writeln!(out, "{}", HEAVY_RULE)
}

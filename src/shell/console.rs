use crate::provider::Client;
use crate::query::{validate_term, QueryError, SearchQuery};
use crate::render;
use crate::render::RenderOptions;
use std::io;
use std::io::{BufRead, Write};
use tracing::{info, warn};

const BANNER_RULE: &str = "============================================================";

/// 터미널 화면을 지운다.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\x1B[2J\x1B[1;1H")?;
    out.flush()
}

/// 검색어와 검색 결과 개수를 차례로 입력 받아 검증한다.
///
/// 검색어가 비어 있으면 개수를 묻지 않고 바로 [`QueryError::EmptyQuery`]를 반환한다.
pub fn read_query<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Result<SearchQuery, QueryError>> {
    let term = prompt(input, out, "\n🔎 Enter the book name to search: ")?;
    if let Err(err) = validate_term(&term) {
        return Ok(Err(err));
    }

    let limit = prompt(input, out, "📘 Enter how many books you want to see: ")?;
    Ok(SearchQuery::parse(&term, &limit))
}

/// 한 줄을 읽는다. UTF-8이 아닌 바이트는 대체 문자로 바뀌어 검증 단계로 넘어간다.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    Ok(String::from_utf8_lossy(&line).into_owned())
}

/// 콘솔 검색을 한번 실행한다.
///
/// # Description
/// 환영 문구 출력, 검색어 입력, 검색, 결과 출력 순으로 한번만 실행하고 끝난다.
/// 입력 오류와 네트워크 오류는 메시지로 출력될 뿐 에러로 반환되지 않으며,
/// 반환되는 에러는 입출력 스트림 자체의 실패뿐이다.
pub fn run<R, W, C>(input: &mut R, out: &mut W, client: &C, options: &RenderOptions) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    C: Client + ?Sized,
{
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "📚 Welcome to Real-Time Book Finder 📚")?;
    writeln!(out, "{}", BANNER_RULE)?;

    let query = match read_query(input, out)? {
        Ok(query) => query,
        Err(err) => {
            info!(reason = %err, "Rejected search input");
            writeln!(out, " {}", err)?;
            return Ok(());
        }
    };

    writeln!(out, "\n⏳ Fetching book data... Please wait...\n")?;
    out.flush()?;

    match client.search(&query) {
        Ok(result) => render::console::render(&result, options, out)?,
        Err(err) => {
            warn!(term = query.term(), error = %err, "No data received from the API");
            writeln!(out, "\n Network Error: {}", err)?;
            writeln!(out, "⚠️ No data received from the API.")?;
        }
    }

    out.flush()
}

use book_finder::configs::logging::{self, Frontend};
use book_finder::item::SearchResult;
use book_finder::provider::google;
use book_finder::provider::{Client, ClientError};
use book_finder::query::SearchQuery;
use book_finder::render::RenderOptions;
use book_finder::shell::console;
use std::io::{BufRead, BufReader, Cursor, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

/// 로그 출력을 모아두는 writer
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// 로그 파일 설정이 없는 상태에서 콘솔 검색을 실행하고 화면 출력과 로그 출력을 돌려준다.
fn run_console_with_fallback_logs(frontend: Frontend, client: &google::Client) -> (String, String) {
    let logs = LogBuffer::default();
    let subscriber = logging::fallback_subscriber(frontend.fallback_level(), logs.clone());

    let mut input = Cursor::new(b"rust\n5\n".to_vec());
    let mut out = Vec::new();
    tracing::subscriber::with_default(subscriber, || {
        console::run(&mut input, &mut out, client, &RenderOptions::console()).unwrap();
    });

    (String::from_utf8(out).unwrap(), logs.text())
}

/// 요청 하나에 정해진 응답을 돌려주는 로컬 HTTP 서버를 띄운다.
/// 핸들은 서버가 받은 요청 라인을 반환한다.
fn serve_once(status: &'static str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_owned();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            let read = reader.read_line(&mut header).unwrap();
            if read == 0 || header == "\r\n" {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request_line
    });

    (format!("http://{}/books/v1/volumes", addr), handle)
}

/// 아무도 듣고 있지 않은 로컬 주소
fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/books/v1/volumes", addr)
}

fn client(endpoint: &str) -> google::Client {
    google::Client::new(endpoint, Duration::from_secs(5)).unwrap()
}

#[test]
fn found_items_keep_response_order() {
    let body = r#"{"totalItems": 3, "items": [
        {"id": "1", "volumeInfo": {"title": "Dune"}},
        {"id": "2", "volumeInfo": {"title": "Dune Messiah", "authors": ["Frank Herbert"]}},
        {"id": "3"}
    ]}"#;
    let (endpoint, server) = serve_once("200 OK", body);

    let query = SearchQuery::parse("dune messiah", "3").unwrap();
    let result = client(&endpoint).search(&query).unwrap();

    let request_line = server.join().unwrap();
    assert!(
        request_line.starts_with("GET /books/v1/volumes?q=dune+messiah&maxResults=3 HTTP/1.1"),
        "unexpected request line {:?}", request_line
    );

    let ids: Vec<_> = result.books().iter().map(|b| b.id().unwrap().to_owned()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(result.books()[1].authors().unwrap(), &["Frank Herbert".to_string()]);
    assert_eq!(result.books()[2].title(), None);
}

#[test]
fn missing_items_is_empty_result() {
    let (endpoint, server) = serve_once("200 OK", r#"{"kind": "books#volumes", "totalItems": 0}"#);

    let query = SearchQuery::parse("qwertyuiop", "5").unwrap();
    let result = client(&endpoint).search(&query).unwrap();
    server.join().unwrap();

    assert_eq!(result, SearchResult::Empty);
}

#[test]
fn error_status_is_network_error() {
    let (endpoint, server) = serve_once("500 Internal Server Error", r#"{"error": "boom"}"#);

    let query = SearchQuery::parse("rust", "5").unwrap();
    let result = client(&endpoint).search(&query);
    server.join().unwrap();

    assert_eq!(result, Err(ClientError::UnsuccessfulStatus(500)));
}

#[test]
fn invalid_body_is_parse_error() {
    let (endpoint, server) = serve_once("200 OK", "<html>not json</html>");

    let query = SearchQuery::parse("rust", "5").unwrap();
    let result = client(&endpoint).search(&query);
    server.join().unwrap();

    assert!(matches!(result, Err(ClientError::ResponseParseFailed(_))));
}

#[test]
fn connection_refused_is_request_failure() {
    let query = SearchQuery::parse("rust", "5").unwrap();
    let result = client(&refused_endpoint()).search(&query);

    assert!(matches!(result, Err(ClientError::RequestFailed(_))));
}

#[test]
fn console_reports_connection_refused_and_returns() {
    let client = client(&refused_endpoint());
    let mut input = Cursor::new(b"rust\n5\n".to_vec());
    let mut out = Vec::new();

    console::run(&mut input, &mut out, &client, &RenderOptions::console()).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\n Network Error: "));
    assert!(text.contains("⚠️ No data received from the API."));
}

#[test]
fn console_renders_served_books() {
    let body = r#"{"items": [
        {"kind": "books#volume", "id": "x1", "volumeInfo": {"title": "Neuromancer", "publisher": "Ace"}}
    ]}"#;
    let (endpoint, server) = serve_once("200 OK", body);
    let client = client(&endpoint);
    let mut input = Cursor::new(b"neuromancer\n1\n".to_vec());
    let mut out = Vec::new();

    console::run(&mut input, &mut out, &client, &RenderOptions::console()).unwrap();
    server.join().unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("📘 Book 1"));
    assert!(text.contains("📖 Title: Neuromancer"));
    assert!(text.contains("🏢 Publisher: Ace"));
    assert!(text.contains("👨‍💻 Author(s): N/A"));
    assert!(text.contains("🆔 ID: x1"));
    assert!(!text.contains("📘 Book 2"));
}

#[test]
fn console_fallback_logging_stays_quiet_on_network_error() {
    let client = client(&refused_endpoint());
    let (text, logs) = run_console_with_fallback_logs(Frontend::Console, &client);

    assert!(text.contains("\n Network Error: "));
    assert!(logs.is_empty(), "console fallback wrote {:?}", logs);
}

#[test]
fn window_fallback_logging_records_network_error() {
    let client = client(&refused_endpoint());
    let (_, logs) = run_console_with_fallback_logs(Frontend::Window, &client);

    assert!(logs.contains("Book search request failed"), "window fallback wrote {:?}", logs);
    assert!(!logs.contains("\x1b["));
}


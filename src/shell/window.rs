use crate::item::SearchResult;
use crate::provider::thumbnail::ThumbnailSource;
use crate::provider::{Client, ClientError};
use crate::query::SearchQuery;
use crate::render::card::{cards, decode_thumbnail, Card, Thumbnail};
use crate::render::RenderOptions;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error, info, warn};

pub mod view;

/// 검색 중 상태 문구
pub const STATUS_SEARCHING: &str = "Searching...";
/// 이미 검색 중일 때 다시 검색을 누른 경우의 상태 문구
pub const STATUS_BUSY: &str = "A search is already in progress...";
/// 검색 결과가 없을 때의 상태 문구
pub const STATUS_NO_RESULTS: &str = "No books found. Try another title.";

pub type SharedClient = Arc<dyn Client + Send + Sync>;
pub type SharedThumbnailSource = Arc<dyn ThumbnailSource + Send + Sync>;

/// 목록에 표시되는 카드와 디코딩 된 썸네일
#[derive(Debug, Clone)]
pub struct CardView {
    pub card: Card,
    pub thumbnail: Option<Thumbnail>,
}

/// 백그라운드 검색 한번의 결과
#[derive(Debug)]
pub enum SearchOutcome {
    Found(Vec<CardView>),
    Empty,
    Failed(ClientError),
}

/// 작업 스레드가 화면 스레드로 보내는 메시지
///
/// `id`로 어떤 검색 요청의 결과인지 구분하여 이전 요청의 결과는 버린다.
#[derive(Debug)]
pub struct WorkerMessage {
    id: u64,
    outcome: SearchOutcome,
}

/// 윈도우 프로그램의 화면 상태
///
/// # Description
/// 입력 필드, 상태 문구, 카드 목록을 보관한다. 모든 상태 변경은 화면 스레드에서만 일어나며,
/// 작업 스레드는 결과를 채널로 보내기만 한다.
/// 검색은 창 하나당 동시에 하나만 실행 된다.
pub struct WindowState {
    pub term: String,
    pub limit: String,
    status: String,
    cards: Vec<CardView>,

    /// 진행 중인 검색 요청 아이디, `None`이면 대기 상태
    in_flight: Option<u64>,
    next_id: u64,

    /// 카드 목록이 바뀔 때마다 증가하며, 화면은 이 값으로 텍스처를 다시 만들지 판단한다.
    revision: u64,

    client: SharedClient,
    thumbnails: SharedThumbnailSource,
    options: RenderOptions,
    sender: Sender<WorkerMessage>,
    receiver: Receiver<WorkerMessage>,
}

impl WindowState {
    pub fn new(client: SharedClient, thumbnails: SharedThumbnailSource, options: RenderOptions) -> Self {
        let (sender, receiver) = channel();

        Self {
            term: String::new(),
            limit: String::new(),
            status: String::new(),
            cards: Vec::new(),
            in_flight: None,
            next_id: 0,
            revision: 0,
            client,
            thumbnails,
            options,
            sender,
            receiver,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// 입력값을 검증하고 백그라운드 스레드에서 검색을 시작한다.
    ///
    /// # Parameter
    /// - `notify`: 작업 스레드가 결과를 보낸 뒤 호출되며 화면 갱신을 요청하는데 사용한다.
    ///
    /// # Returns
    /// 작업 스레드를 시작한 경우 `true`, 입력 오류이거나 이미 검색 중이면 `false`
    pub fn search<F>(&mut self, notify: F) -> bool
    where
        F: Fn() + Send + 'static,
    {
        if self.in_flight.is_some() {
            self.status = STATUS_BUSY.to_owned();
            return false;
        }

        let query = match SearchQuery::parse(&self.term, &self.limit) {
            Ok(query) => query,
            Err(err) => {
                info!(reason = %err, "Rejected search input");
                self.status = err.to_string();
                return false;
            }
        };

        self.next_id += 1;
        let id = self.next_id;

        let client = Arc::clone(&self.client);
        let thumbnails = Arc::clone(&self.thumbnails);
        let options = self.options.clone();
        let sender = self.sender.clone();

        let spawned = thread::Builder::new()
            .name(format!("book-search-{}", id))
            .spawn(move || {
                let outcome = run_search(client.as_ref(), thumbnails.as_ref(), &query, &options);
                if sender.send(WorkerMessage { id, outcome }).is_err() {
                    debug!(id, "Window closed before search finished");
                }
                notify();
            });

        match spawned {
            Ok(_) => {
                debug!(id, "Search worker started");
                self.in_flight = Some(id);
                self.status = STATUS_SEARCHING.to_owned();
                true
            }
            Err(err) => {
                error!(error = %err, "Failed to start search worker");
                self.status = format!("Failed to start search: {}", err);
                false
            }
        }
    }

    /// 입력 필드, 상태 문구, 카드를 모두 초기화한다.
    /// 진행 중인 검색은 중단되지 않지만 그 결과는 도착해도 버려진다.
    pub fn clear(&mut self) {
        self.term.clear();
        self.limit.clear();
        self.status.clear();
        self.in_flight = None;
        self.clear_cards();
    }

    /// 작업 스레드가 보낸 결과를 모두 꺼내 반영한다. 화면 스레드에서 매 프레임 호출된다.
    ///
    /// # Returns
    /// 꺼낸 메시지 수 (버려진 메시지 포함)
    pub fn poll(&mut self) -> usize {
        let mut received = 0;
        while let Ok(message) = self.receiver.try_recv() {
            received += 1;
            self.apply(message);
        }
        received
    }

    fn apply(&mut self, message: WorkerMessage) {
        if self.in_flight != Some(message.id) {
            debug!(id = message.id, "Discarding stale search result");
            return;
        }

        self.in_flight = None;
        self.status.clear();
        self.clear_cards();

        match message.outcome {
            SearchOutcome::Found(cards) => {
                self.status = format!("Found {} book(s)", cards.len());
                self.cards = cards;
            }
            SearchOutcome::Empty => {
                self.status = STATUS_NO_RESULTS.to_owned();
            }
            SearchOutcome::Failed(err) => {
                self.status = format!("Network Error: {}", err);
            }
        }
    }

    fn clear_cards(&mut self) {
        self.cards.clear();
        self.revision += 1;
    }
}

/// 작업 스레드에서 검색과 썸네일 로딩을 수행한다.
/// 썸네일 로딩 실패는 해당 카드의 이미지만 생략한다.
fn run_search(
    client: &(dyn Client + Send + Sync),
    thumbnails: &(dyn ThumbnailSource + Send + Sync),
    query: &SearchQuery,
    options: &RenderOptions,
) -> SearchOutcome {
    let result = match client.search(query) {
        Ok(result) => result,
        Err(err) => return SearchOutcome::Failed(err),
    };

    if let SearchResult::Empty = result {
        return SearchOutcome::Empty;
    }

    let views = cards(&result, options)
        .into_iter()
        .map(|card| {
            let thumbnail = card.thumbnail_url.as_deref().and_then(|url| {
                thumbnails.fetch(url)
                    .and_then(|bytes| decode_thumbnail(&bytes))
                    .map_err(|err| warn!(url, error = %err, "Failed to load thumbnail"))
                    .ok()
            });
            CardView { card, thumbnail }
        })
        .collect();

    SearchOutcome::Found(views)
}

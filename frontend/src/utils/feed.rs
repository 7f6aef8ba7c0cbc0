use std::future::Future;

use gloo::net::http::Request;
use leptos::*;

use super::error::{Context, Error, ErrorKind, Result};
use crate::{config::frontend_config, contest::ContestSummary};

/// The only failure text users ever see, causes go to the log
pub const LOAD_FAILED: &str =
    "Failed to load contests. Please try again later.";

/// Anything that can produce the full contest list
pub trait ContestSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<ContestSummary>>>;
}

/// `GET {api_server}/api/contests`
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpContestSource;

impl ContestSource for HttpContestSource {
    async fn fetch(&self) -> Result<Vec<ContestSummary>> {
        let url = frontend_config().await.contests_url();
        let resp = Request::get(&url)
            .send()
            .await
            .context(format!("GET {url}"))?;
        ensure_success(resp.status(), &url)?;
        let body = resp.text().await.context("read response body")?;
        parse_contests(&body)
    }
}

fn ensure_success(status: u16, url: &str) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        status => Err(Error::new(ErrorKind::Http(status), format!("GET {url}"))),
    }
}

/// Whole body or nothing, a single bad entry fails the list
pub fn parse_contests(body: &str) -> Result<Vec<ContestSummary>> {
    serde_json::from_str(body).context("parse contest list")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<ContestSummary>),
    Failed(String),
}

/// Handed out by [`FeedLoader::begin`], identifies one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Fetch lifecycle of the contest list
///
/// Every [`begin`](FeedLoader::begin) issues a new [`Ticket`]. Only the result
/// for the most recently issued ticket is applied, so when retries overlap a
/// slow response from an older request cannot overwrite a newer one.
#[derive(Debug, Default)]
pub struct FeedLoader {
    state: FetchState,
    issued: u64,
}

impl FeedLoader {
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.state = FetchState::Loading;
        Ticket(self.issued)
    }

    /// Apply the outcome of a request, return `false` if it was stale
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<ContestSummary>>,
    ) -> bool {
        if ticket.0 != self.issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                "drop stale contest response"
            );
            return false;
        }
        self.state = match result {
            Ok(list) => FetchState::Loaded(list),
            Err(err) => {
                tracing::error!(%err, "failed to fetch contests");
                FetchState::Failed(LOAD_FAILED.to_owned())
            }
        };
        true
    }

    pub async fn load<S: ContestSource>(&mut self, source: &S) {
        let ticket = self.begin();
        let result = source.fetch().await;
        self.resolve(ticket, result);
    }
}

/// What the contest grid should show, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedView<'a> {
    Spinner,
    Failure(&'a str),
    Empty,
    Grid(&'a [ContestSummary]),
}

impl<'a> FeedView<'a> {
    pub fn of(state: &'a FetchState) -> Self {
        match state {
            FetchState::Idle | FetchState::Loading => FeedView::Spinner,
            FetchState::Failed(msg) => FeedView::Failure(msg),
            FetchState::Loaded(list) if list.is_empty() => FeedView::Empty,
            FetchState::Loaded(list) => FeedView::Grid(list),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ContestFeed {
    loader: RwSignal<FeedLoader>,
    reload: Callback<()>,
}

impl ContestFeed {
    /// Start over from `Loading`, from any state
    pub fn reload(&self) {
        self.reload.call(());
    }

    pub fn with_view<T>(&self, f: impl FnOnce(FeedView<'_>) -> T) -> T {
        self.loader.with(|loader| f(FeedView::of(loader.state())))
    }
}

/// Create a feed that loads once after mount
pub fn create_contest_feed<S>(source: S) -> ContestFeed
where
    S: ContestSource + Clone + 'static,
{
    let loader = create_rw_signal(FeedLoader::default());
    let reload = Callback::new(move |()| {
        let Some(ticket) = loader.try_update(FeedLoader::begin) else {
            return;
        };
        let source = source.clone();
        spawn_local(async move {
            let result = source.fetch().await;
            // page may be gone by now
            loader.try_update(move |loader| loader.resolve(ticket, result));
        });
    });
    create_effect(move |_| reload.call(()));
    ContestFeed { loader, reload }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};

    use super::*;
    use crate::contest::ContestStatus;

    fn contest(id: i64, status: &str) -> ContestSummary {
        ContestSummary {
            id,
            title: format!("Round {id}"),
            description: "".to_owned(),
            status: status.into(),
            total_problems: 5,
            total_participants: 42,
        }
    }

    /// replays responses in order, counting calls
    struct Scripted {
        responses: RefCell<VecDeque<Result<Vec<ContestSummary>>>>,
        calls: RefCell<usize>,
    }

    impl Scripted {
        fn new(
            responses: impl IntoIterator<Item = Result<Vec<ContestSummary>>>,
        ) -> Self {
            Self {
                responses: RefCell::new(responses.into_iter().collect()),
                calls: RefCell::new(0),
            }
        }
    }

    impl ContestSource for Scripted {
        async fn fetch(&self) -> Result<Vec<ContestSummary>> {
            *self.calls.borrow_mut() += 1;
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("no response left")
        }
    }

    fn http(status: u16) -> Result<Vec<ContestSummary>> {
        Err(Error::new(ErrorKind::Http(status), "GET /api/contests"))
    }

    #[tokio::test]
    async fn loaded_keeps_order() {
        let list = vec![
            contest(3, "ENDED"),
            contest(1, "ONGOING"),
            contest(2, "UPCOMING"),
        ];
        let source = Scripted::new([Ok(list.clone())]);
        let mut loader = FeedLoader::default();
        loader.load(&source).await;
        assert_eq!(loader.state(), &FetchState::Loaded(list));
    }

    #[tokio::test]
    async fn any_http_failure_is_generic() {
        for status in [301, 400, 401, 404, 500, 503] {
            let source = Scripted::new([http(status)]);
            let mut loader = FeedLoader::default();
            loader.load(&source).await;
            assert_eq!(
                loader.state(),
                &FetchState::Failed(LOAD_FAILED.to_owned())
            );
        }
    }

    #[tokio::test]
    async fn transport_and_parse_failure_is_generic() {
        let network = Err(Error::new(ErrorKind::Network, "connection reset"));
        let malformed = parse_contests("[{\"id\": 1}]");
        assert!(malformed.is_err());
        let source = Scripted::new([network, malformed]);
        let mut loader = FeedLoader::default();
        for _ in 0..2 {
            loader.load(&source).await;
            assert_eq!(
                FeedView::of(loader.state()),
                FeedView::Failure(LOAD_FAILED)
            );
        }
    }

    #[tokio::test]
    async fn retry_after_server_error() {
        let source = Scripted::new([http(500), Ok(vec![contest(9, "ONGOING")])]);
        let mut loader = FeedLoader::default();
        loader.load(&source).await;
        assert!(matches!(FeedView::of(loader.state()), FeedView::Failure(_)));

        loader.load(&source).await;
        assert_eq!(*source.calls.borrow(), 2);
        assert_eq!(
            FeedView::of(loader.state()),
            FeedView::Grid(&[contest(9, "ONGOING")])
        );
    }

    #[tokio::test]
    async fn repeated_load_matches_single_load() {
        let last = vec![contest(1, "UPCOMING")];
        let source =
            Scripted::new([Ok(vec![]), http(502), Ok(last.clone())]);
        let mut repeated = FeedLoader::default();
        for _ in 0..3 {
            repeated.load(&source).await;
        }

        let mut once = FeedLoader::default();
        once.load(&Scripted::new([Ok(last)])).await;
        assert_eq!(repeated.state(), once.state());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut loader = FeedLoader::default();
        let first = loader.begin();
        let second = loader.begin();
        assert!(loader.resolve(second, Ok(vec![contest(2, "ONGOING")])));
        assert!(!loader.resolve(first, http(500)));
        assert_eq!(
            loader.state(),
            &FetchState::Loaded(vec![contest(2, "ONGOING")])
        );
    }

    #[test]
    fn pending_until_latest_resolves() {
        let mut loader = FeedLoader::default();
        let first = loader.begin();
        let _second = loader.begin();
        assert!(!loader.resolve(first, Ok(vec![])));
        assert_eq!(loader.state(), &FetchState::Loading);
    }

    #[test]
    fn view_priority() {
        assert_eq!(FeedView::of(&FetchState::Idle), FeedView::Spinner);
        assert_eq!(FeedView::of(&FetchState::Loading), FeedView::Spinner);
        assert_eq!(
            FeedView::of(&FetchState::Failed("x".into())),
            FeedView::Failure("x")
        );
        assert_eq!(FeedView::of(&FetchState::Loaded(vec![])), FeedView::Empty);
    }

    #[test]
    fn empty_list_is_not_failure() {
        let list = parse_contests("[]").unwrap();
        let mut loader = FeedLoader::default();
        let ticket = loader.begin();
        loader.resolve(ticket, Ok(list));
        assert_eq!(FeedView::of(loader.state()), FeedView::Empty);
    }

    #[test]
    fn single_upcoming_contest() {
        let body = r#"[{"id":12,"title":"Spring Cup","description":"",
            "status":"UPCOMING","totalProblems":6,"totalParticipants":0}]"#;
        let state = FetchState::Loaded(parse_contests(body).unwrap());
        let FeedView::Grid(cards) = FeedView::of(&state) else {
            panic!("expect grid");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].status, ContestStatus::Upcoming);
        assert_eq!(cards[0].status.to_string(), "UPCOMING");
    }

    #[test]
    fn status_range() {
        assert!(ensure_success(200, "/api/contests").is_ok());
        assert!(ensure_success(204, "/api/contests").is_ok());
        for status in [199, 304, 404, 500] {
            let err = ensure_success(status, "/api/contests").unwrap_err();
            assert_eq!(err.kind, ErrorKind::Http(status));
        }
    }

    /// shared handle, the feed clones its source per request
    #[derive(Clone)]
    struct Shared(Rc<Scripted>);

    impl ContestSource for Shared {
        async fn fetch(&self) -> Result<Vec<ContestSummary>> {
            self.0.fetch().await
        }
    }

    #[test]
    fn feed_fetches_on_mount_and_reload() {
        let runtime = create_runtime();
        let scripted =
            Rc::new(Scripted::new([http(500), Ok(vec![contest(4, "ONGOING")])]));

        let feed = create_contest_feed(Shared(scripted.clone()));
        assert_eq!(*scripted.calls.borrow(), 1);
        assert!(feed.with_view(|view| matches!(view, FeedView::Failure(_))));

        feed.reload();
        assert_eq!(*scripted.calls.borrow(), 2);
        feed.with_view(|view| {
            assert_eq!(view, FeedView::Grid(&[contest(4, "ONGOING")]))
        });
        runtime.dispose();
    }
}

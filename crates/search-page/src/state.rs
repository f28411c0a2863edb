use podcast_api::{PodcastItem, PodcastQuery};
use tracing::debug;

#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug, Default, PartialOrd, Ord)]
pub struct RequestSeq(u64);

impl RequestSeq {
    fn next(self) -> Self {
        RequestSeq(self.0 + 1)
    }
}

impl std::fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Error(String),
}

/// What happens to the visible results when a fetch fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaleDataPolicy {
    #[default]
    Keep,
    Clear,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub page: u32,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            text: String::new(),
            page: 1,
        }
    }
}

#[derive(Debug)]
pub enum Action {
    /// Page was shown for the first time.
    Mount,
    SetQueryText(String),
    SetPage(u32),
    Submit,
    GoNext,
    GoPrevious,
    /// Fetch the given page with the current text, leaving `Query.page` as is.
    FetchPage(u32),
    DebounceElapsed,
    FetchSucceeded {
        seq: RequestSeq,
        items: Vec<PodcastItem>,
    },
    FetchFailed {
        seq: RequestSeq,
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: RequestSeq,
    pub query: PodcastQuery,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    ArmDebounce,
    Fetch(FetchRequest),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    query: Query,
    results: Option<Vec<PodcastItem>>,
    status: FetchStatus,
    error: Option<String>,
    is_last_page: bool,
    latest_seq: RequestSeq,
    page_size: u32,
    stale_data_policy: StaleDataPolicy,
}

impl PageState {
    pub fn new(page_size: u32, stale_data_policy: StaleDataPolicy) -> Self {
        Self {
            query: Query::default(),
            results: None,
            status: FetchStatus::Idle,
            error: None,
            is_last_page: false,
            latest_seq: RequestSeq::default(),
            page_size: page_size.max(1),
            stale_data_policy,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Items of the last successful fetch, `None` until a response arrived.
    pub fn results(&self) -> Option<&[PodcastItem]> {
        self.results.as_deref()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// The error notice. Survives new requests until a fetch succeeds.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn is_last_page(&self) -> bool {
        self.is_last_page
    }

    pub fn latest_seq(&self) -> RequestSeq {
        self.latest_seq
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn can_go_previous(&self) -> bool {
        self.query.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_last_page && self.query.page < u32::MAX
    }

    pub fn reduce(&mut self, action: Action) -> Effect {
        match action {
            Action::Mount => Effect::ArmDebounce,
            Action::SetQueryText(text) => {
                if text == self.query.text {
                    return Effect::None;
                }
                self.query.text = text;
                Effect::ArmDebounce
            }
            Action::SetPage(page) => {
                let page = page.max(1);
                if page == self.query.page {
                    return Effect::None;
                }
                self.query.page = page;
                Effect::ArmDebounce
            }
            Action::Submit => self.start_fetch(self.query.page),
            Action::GoNext => {
                if self.is_last_page {
                    return Effect::None;
                }
                let Some(page) = self.query.page.checked_add(1) else {
                    return Effect::None;
                };
                self.query.page = page;
                self.start_fetch(page)
            }
            Action::GoPrevious => {
                if self.query.page <= 1 {
                    return Effect::None;
                }
                self.query.page -= 1;
                self.start_fetch(self.query.page)
            }
            Action::FetchPage(page) => self.start_fetch(page.max(1)),
            Action::DebounceElapsed => self.start_fetch(self.query.page),
            Action::FetchSucceeded { seq, items } => {
                if seq != self.latest_seq {
                    debug!(%seq, latest = %self.latest_seq, "Discarding outdated response");
                    return Effect::None;
                }
                self.is_last_page = items.len() < self.page_size as usize;
                self.results = Some(items);
                self.error = None;
                self.status = FetchStatus::Idle;
                Effect::None
            }
            Action::FetchFailed { seq, message } => {
                if seq != self.latest_seq {
                    debug!(%seq, latest = %self.latest_seq, "Discarding outdated failure");
                    return Effect::None;
                }
                if self.stale_data_policy == StaleDataPolicy::Clear {
                    self.results = None;
                }
                self.error = Some(message.clone());
                self.status = FetchStatus::Error(message);
                Effect::None
            }
        }
    }

    fn start_fetch(&mut self, page: u32) -> Effect {
        self.latest_seq = self.latest_seq.next();
        self.status = FetchStatus::Loading;

        Effect::Fetch(FetchRequest {
            seq: self.latest_seq,
            query: PodcastQuery::new(page, self.page_size, &self.query.text),
        })
    }
}

use crate::config::SearchPageConfig;
use crate::debounce::{DebounceTicket, Debouncer};
use crate::state::{Action, Effect, FetchRequest, PageState};
use podcast_api::PodcastCatalog;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

struct Shared {
    state: PageState,
    debouncer: Debouncer,
}

struct Inner {
    catalog: Arc<dyn PodcastCatalog>,
    shared: Mutex<Shared>,
    updates: watch::Sender<PageState>,
}

/// Drives one search page: every user action goes through the
/// [`PageState`] reducer, and the resulting effects (debounce arming,
/// fetching) are carried out here.
///
/// All methods that can schedule work must be called from within a tokio
/// runtime.
#[derive(Clone)]
pub struct SearchPageController {
    inner: Arc<Inner>,
}

impl SearchPageController {
    pub fn new(catalog: Arc<dyn PodcastCatalog>, config: &SearchPageConfig) -> Self {
        Self::with_state(
            catalog,
            PageState::new(config.page_size, config.stale_data_policy()),
            config.debounce(),
        )
    }

    pub fn with_state(catalog: Arc<dyn PodcastCatalog>, state: PageState, debounce: Duration) -> Self {
        let (updates, _) = watch::channel(state.clone());

        Self {
            inner: Arc::new(Inner {
                catalog,
                shared: Mutex::new(Shared {
                    state,
                    debouncer: Debouncer::new(debounce),
                }),
                updates,
            }),
        }
    }

    /// Schedules the initial load of the first page.
    pub fn mount(&self) {
        self.inner.dispatch(Action::Mount);
    }

    pub fn set_query_text(&self, text: impl Into<String>) {
        self.inner.dispatch(Action::SetQueryText(text.into()));
    }

    pub fn set_page(&self, page: u32) {
        self.inner.dispatch(Action::SetPage(page));
    }

    pub fn submit(&self) {
        self.inner.dispatch(Action::Submit);
    }

    pub fn go_next(&self) {
        self.inner.dispatch(Action::GoNext);
    }

    pub fn go_previous(&self) {
        self.inner.dispatch(Action::GoPrevious);
    }

    pub fn fetch_results(&self, page: u32) {
        self.inner.dispatch(Action::FetchPage(page));
    }

    pub fn state(&self) -> PageState {
        self.inner.lock().state.clone()
    }

    /// Receives a snapshot after every dispatched action.
    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        self.inner.updates.subscribe()
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn dispatch(self: &Arc<Self>, action: Action) {
        let effect = {
            let mut shared = self.lock();
            let effect = shared.state.reduce(action);

            match effect {
                Effect::ArmDebounce => {
                    let inner = Arc::clone(self);
                    shared
                        .debouncer
                        .arm(move |ticket| async move { inner.debounce_elapsed(ticket) });
                }
                Effect::Fetch(_) => {
                    if shared.debouncer.cancel() {
                        debug!("Pending debounced fetch replaced by immediate fetch");
                    }
                }
                Effect::None => {}
            }

            self.updates.send_replace(shared.state.clone());

            effect
        };

        if let Effect::Fetch(request) = effect {
            self.spawn_fetch(request);
        }
    }

    fn debounce_elapsed(self: &Arc<Self>, ticket: DebounceTicket) {
        let effect = {
            let mut shared = self.lock();
            if !shared.debouncer.complete(ticket) {
                return;
            }
            let effect = shared.state.reduce(Action::DebounceElapsed);
            self.updates.send_replace(shared.state.clone());
            effect
        };

        if let Effect::Fetch(request) = effect {
            self.spawn_fetch(request);
        }
    }

    fn spawn_fetch(self: &Arc<Self>, request: FetchRequest) {
        let FetchRequest { seq, query } = request;

        debug!(%seq, ?query, "Fetching podcasts");

        tokio::spawn({
            let inner = Arc::clone(self);

            async move {
                let action = match inner.catalog.fetch_podcasts(&query).await {
                    Ok(page) => Action::FetchSucceeded {
                        seq,
                        items: page.items,
                    },
                    Err(error) => {
                        warn!(?error, %seq, "Podcast search failed");
                        Action::FetchFailed {
                            seq,
                            message: error.to_string(),
                        }
                    }
                };

                inner.dispatch(action);
            }
        });
    }
}

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt, Shared};
use crate::errors::{MarketplaceError, MarketplaceResult};
use crate::structs::query_options::QueryOptions;
use crate::structs::query_result::QueryResult;

type SharedFetch<T> = Shared<BoxFuture<'static, MarketplaceResult<Arc<T>>>>;

struct Settled<T> {
    data: Arc<T>,
    updated_at: DateTime<Utc>,
    fetched: Instant,
}

impl<T> Clone for Settled<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            updated_at: self.updated_at,
            fetched: self.fetched,
        }
    }
}

impl<T> Settled<T> {
    fn now(data: Arc<T>) -> Self {
        Self {
            data,
            updated_at: Utc::now(),
            fetched: Instant::now(),
        }
    }

    fn is_stale(&self, stale_time: Option<Duration>) -> bool {
        stale_time.is_some_and(|stale_time| self.fetched.elapsed() >= stale_time)
    }

    fn to_result(&self) -> QueryResult<T> {
        QueryResult::success(Arc::clone(&self.data), self.updated_at)
    }
}

enum QueryState<T> {
    Fetching {
        generation: u64,
        fetch: SharedFetch<T>,
        previous: Option<Settled<T>>,
    },
    Success(Settled<T>),
    Failure(MarketplaceError),
}

/// Keyed cache of asynchronous reads.
///
/// Each key is fetched at most once while its data is fresh; observers that
/// arrive while a fetch is in flight share it. Data is handed out as `Arc<T>`
/// so repeated observations of the same entry are pointer-equal.
pub struct QueryCache<T> {
    entries: Arc<DashMap<String, QueryState<T>>>,
    generation: Arc<AtomicU64>,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl<T: Send + Sync + 'static> QueryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-blocking read. Starts a background fetch when the entry is missing
    /// or stale and returns whatever is available right now.
    ///
    /// `fetcher` is only called when a fetch starts, and only builds the
    /// future; it must not touch this cache.
    pub fn observe<F, Fut>(&self, key: &str, fetcher: F, options: &QueryOptions<T>) -> QueryResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = MarketplaceResult<T>> + Send + 'static,
    {
        self.observe_inner(key, fetcher, options).0
    }

    /// Like [`observe`](Self::observe) but waits for an in-flight fetch and
    /// returns the settled snapshot.
    pub async fn fetch<F, Fut>(&self, key: &str, fetcher: F, options: &QueryOptions<T>) -> QueryResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = MarketplaceResult<T>> + Send + 'static,
    {
        let (snapshot, in_flight) = self.observe_inner(key, fetcher, options);
        let Some((generation, fetch)) = in_flight else {
            return snapshot;
        };

        let result = fetch.await;
        Self::settle(&self.entries, key, generation, result.clone());

        match self.current(key, options) {
            Some(current) if !current.is_pending() => current,
            _ => match result {
                Ok(data) => QueryResult::success(data, Utc::now()),
                Err(error) => QueryResult::failure(error),
            },
        }
    }

    /// Settled data for `key`, without starting a fetch.
    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        self.entries.get(key).and_then(|state| match &*state {
            QueryState::Success(settled) => Some(Arc::clone(&settled.data)),
            QueryState::Fetching { previous, .. } => previous.as_ref().map(|settled| Arc::clone(&settled.data)),
            QueryState::Failure(_) => None,
        })
    }

    /// The error of a failed entry, if that is how `key` settled.
    pub fn error(&self, key: &str) -> Option<MarketplaceError> {
        self.entries.get(key).and_then(|state| match &*state {
            QueryState::Failure(error) => Some(error.clone()),
            _ => None,
        })
    }

    /// Drops the entry; the next observation fetches again. A fetch already
    /// in flight for the old entry is discarded when it settles.
    pub fn invalidate(&self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            log::debug!("🗑️ Invalidated query '{key}'");
        }
        removed
    }

    fn observe_inner<F, Fut>(
        &self,
        key: &str,
        fetcher: F,
        options: &QueryOptions<T>,
    ) -> (QueryResult<T>, Option<(u64, SharedFetch<T>)>)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = MarketplaceResult<T>> + Send + 'static,
    {
        if !options.enabled {
            return (QueryResult::idle(), None);
        }

        let (generation, fetch, previous) = match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                let previous = match occupied.get() {
                    QueryState::Success(settled) if !settled.is_stale(options.stale_time) => {
                        return (settled.to_result(), None);
                    }
                    QueryState::Success(settled) => Some(settled.clone()),
                    QueryState::Failure(error) => {
                        return (QueryResult::failure(error.clone()), None);
                    }
                    QueryState::Fetching { generation, fetch, previous } => {
                        let snapshot = Self::in_flight_snapshot(previous.as_ref(), options);
                        return (snapshot, Some((*generation, fetch.clone())));
                    }
                };

                log::debug!("♻️ Query '{key}' is stale, refetching {}", options.resource);
                let (generation, fetch) = self.begin(fetcher);
                occupied.insert(QueryState::Fetching {
                    generation,
                    fetch: fetch.clone(),
                    previous: previous.clone(),
                });
                (generation, fetch, previous)
            }
            Entry::Vacant(vacant) => {
                log::debug!("🌐 Fetching {} for query '{key}'", options.resource);
                let (generation, fetch) = self.begin(fetcher);
                vacant.insert(QueryState::Fetching {
                    generation,
                    fetch: fetch.clone(),
                    previous: None,
                });
                (generation, fetch, None)
            }
        };

        self.drive(key, generation, fetch.clone());

        let snapshot = Self::in_flight_snapshot(previous.as_ref(), options);
        (snapshot, Some((generation, fetch)))
    }

    fn begin<F, Fut>(&self, fetcher: F) -> (u64, SharedFetch<T>)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = MarketplaceResult<T>> + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let fetch = fetcher().map(|result| result.map(Arc::new)).boxed().shared();
        (generation, fetch)
    }

    /// Polls the fetch on the ambient tokio runtime so it completes even if
    /// nobody awaits it. Without a runtime the fetch only progresses through
    /// [`fetch`](Self::fetch).
    fn drive(&self, key: &str, generation: u64, fetch: SharedFetch<T>) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            log::debug!("No runtime to drive query '{key}' in the background");
            return;
        };

        let entries = Arc::clone(&self.entries);
        let key = key.to_string();
        handle.spawn(async move {
            let result = fetch.await;
            Self::settle(&entries, &key, generation, result);
        });
    }

    fn settle(
        entries: &DashMap<String, QueryState<T>>,
        key: &str,
        generation: u64,
        result: MarketplaceResult<Arc<T>>,
    ) {
        let Some(mut state) = entries.get_mut(key) else {
            return;
        };
        if !matches!(&*state, QueryState::Fetching { generation: current, .. } if *current == generation) {
            return;
        }

        *state = match result {
            Ok(data) => {
                log::debug!("✅ Query '{key}' resolved");
                QueryState::Success(Settled::now(data))
            }
            Err(error) => {
                log::warn!("⚠️ Query '{key}' failed: {error}");
                QueryState::Failure(error)
            }
        };
    }

    fn current(&self, key: &str, options: &QueryOptions<T>) -> Option<QueryResult<T>> {
        self.entries.get(key).map(|state| match &*state {
            QueryState::Success(settled) => settled.to_result(),
            QueryState::Failure(error) => QueryResult::failure(error.clone()),
            QueryState::Fetching { previous, .. } => Self::in_flight_snapshot(previous.as_ref(), options),
        })
    }

    fn in_flight_snapshot(previous: Option<&Settled<T>>, options: &QueryOptions<T>) -> QueryResult<T> {
        previous.map_or_else(
            || QueryResult::pending(options.placeholder_data.clone()),
            Settled::to_result,
        )
    }
}

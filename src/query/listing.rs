//! Reusable paginated listing query.
//!
//! A `ListingQuery` owns the parameters of one listing (page, size, sort,
//! search and filters), fetches pages through a [`ListingReader`] and the
//! shared [`QueryCache`], and only ever exposes data whose parameters match
//! the current ones. Parameter setters never fetch; the next
//! [`ListingQuery::refresh`] fetches the latest parameters once, so a burst
//! of changes coalesces into a single request.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use crate::domain::entity::Resource;
use crate::domain::listing::{ListingQueryState, ListingResponse, PageLimit, SortOrder};
use crate::query::cache::QueryCache;
use crate::query::key::QueryKey;
use crate::repository::ListingReader;

/// Initial parameters of a listing query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingOptions {
    pub page: u32,
    pub limit: PageLimit,
    pub sort_order: SortOrder,
    pub enabled: bool,
}

impl ListingOptions {
    pub fn new(page: u32, limit: PageLimit, sort_order: SortOrder) -> Self {
        Self {
            page,
            limit,
            sort_order,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self::new(1, PageLimit::default(), SortOrder::default())
    }
}

/// What a call to [`ListingQuery::refresh`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A response for the current parameters was applied.
    Applied,
    /// Data for the current parameters was already held; nothing fetched.
    Current,
    /// A fetch for the current parameters is already running.
    InFlight,
    /// The query is disabled; nothing fetched, held data kept.
    Disabled,
    /// The parameters changed while the request was running; the response
    /// was cached under its own key but not applied.
    Discarded,
    /// The fetch for the current parameters failed.
    Failed,
}

/// Point-in-time view of a listing query, ready for a template.
#[derive(Clone, Debug, Serialize)]
pub struct ListingSnapshot<T> {
    pub data: Option<ListingResponse<T>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub sort_order: SortOrder,
    pub search_term: String,
    pub filters: BTreeMap<String, String>,
}

struct Inner<T> {
    params: ListingQueryState,
    enabled: bool,
    data: Option<(QueryKey, ListingResponse<T>)>,
    error: Option<(QueryKey, String)>,
    in_flight: Option<QueryKey>,
}

pub struct ListingQuery<T: Resource> {
    reader: Arc<dyn ListingReader<T>>,
    cache: Arc<QueryCache>,
    inner: Mutex<Inner<T>>,
}

impl<T: Resource> ListingQuery<T> {
    pub fn new(
        reader: Arc<dyn ListingReader<T>>,
        cache: Arc<QueryCache>,
        options: ListingOptions,
    ) -> Self {
        Self {
            reader,
            cache,
            inner: Mutex::new(Inner {
                params: ListingQueryState::new(options.page, options.limit, options.sort_order),
                enabled: options.enabled,
                data: None,
                error: None,
                in_flight: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn current_key(inner: &Inner<T>) -> QueryKey {
        QueryKey::listing(T::KIND, &inner.params)
    }

    /// Cache key of the current parameters.
    pub fn key(&self) -> QueryKey {
        Self::current_key(&self.lock())
    }

    pub fn params(&self) -> ListingQueryState {
        self.lock().params.clone()
    }

    /// The response for the current parameters, if one has arrived.
    pub fn data(&self) -> Option<ListingResponse<T>> {
        let inner = self.lock();
        let key = Self::current_key(&inner);
        inner
            .data
            .as_ref()
            .filter(|(data_key, _)| *data_key == key)
            .map(|(_, data)| data.clone())
    }

    /// The failure of the last fetch for the current parameters.
    pub fn error(&self) -> Option<String> {
        let inner = self.lock();
        let key = Self::current_key(&inner);
        inner
            .error
            .as_ref()
            .filter(|(error_key, _)| *error_key == key)
            .map(|(_, message)| message.clone())
    }

    /// True while an enabled query has neither data nor an error for its
    /// current parameters.
    pub fn is_loading(&self) -> bool {
        self.lock().enabled && self.data().is_none() && self.error().is_none()
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.lock().enabled = enabled;
    }

    pub fn page(&self) -> u32 {
        self.lock().params.page()
    }

    pub fn set_page(&self, page: u32) {
        self.lock().params.set_page(page);
    }

    pub fn limit(&self) -> PageLimit {
        self.lock().params.limit()
    }

    /// Changing the page size starts over at the first page.
    pub fn set_limit(&self, limit: PageLimit) {
        let mut inner = self.lock();
        if inner.params.limit() != limit {
            inner.params.set_limit(limit);
            inner.params.set_page(1);
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        self.lock().params.sort_order()
    }

    pub fn set_sort_order(&self, sort_order: SortOrder) {
        self.lock().params.set_sort_order(sort_order);
    }

    pub fn search_term(&self) -> String {
        self.lock().params.search_term().to_string()
    }

    /// A new search starts over at the first page.
    pub fn set_search_term(&self, search_term: &str) {
        let mut inner = self.lock();
        if inner.params.search_term() != search_term.trim() {
            inner.params.set_search_term(search_term);
            inner.params.set_page(1);
        }
    }

    pub fn filters(&self) -> BTreeMap<String, String> {
        self.lock().params.filters().clone()
    }

    /// Replaces all filters and starts over at the first page.
    pub fn set_filters(&self, filters: BTreeMap<String, String>) {
        let mut inner = self.lock();
        let before = inner.params.filters().clone();
        inner.params.set_filters(filters);
        if *inner.params.filters() != before {
            inner.params.set_page(1);
        }
    }

    /// Sets or clears one filter and starts over at the first page.
    pub fn set_filter(&self, name: &str, value: &str) {
        let mut inner = self.lock();
        if inner.params.filter(name).unwrap_or("") != value.trim() {
            inner.params.set_filter(name, value);
            inner.params.set_page(1);
        }
    }

    /// Drops the cached page for the current parameters so the next
    /// refresh goes to the backend.
    pub fn invalidate(&self) {
        let mut inner = self.lock();
        let key = Self::current_key(&inner);
        self.cache.invalidate(&key);
        if inner.data.as_ref().is_some_and(|(data_key, _)| *data_key == key) {
            inner.data = None;
        }
    }

    /// Fetches the page for the current parameters unless it is already
    /// held, already being fetched, or the query is disabled.
    pub async fn refresh(&self) -> RefreshOutcome {
        let (key, params) = {
            let mut inner = self.lock();
            if !inner.enabled {
                return RefreshOutcome::Disabled;
            }
            let key = Self::current_key(&inner);
            if inner.data.as_ref().is_some_and(|(data_key, _)| *data_key == key) {
                return RefreshOutcome::Current;
            }
            if inner.in_flight.as_ref() == Some(&key) {
                return RefreshOutcome::InFlight;
            }
            inner.in_flight = Some(key.clone());
            (key, inner.params.clone())
        };

        let reader = Arc::clone(&self.reader);
        let result = self
            .cache
            .fetch(&key, move || async move { reader.list_records(&params).await })
            .await;

        let mut inner = self.lock();
        if inner.in_flight.as_ref() == Some(&key) {
            inner.in_flight = None;
        }
        if Self::current_key(&inner) != key {
            log::debug!("Discarding response for superseded query {key}");
            return RefreshOutcome::Discarded;
        }

        match result {
            Ok(listing) => {
                inner.error = None;
                inner.data = Some((key, listing));
                RefreshOutcome::Applied
            }
            Err(err) => {
                log::error!("Failed to load {key}: {err}");
                inner.error = Some((key, err.to_string()));
                RefreshOutcome::Failed
            }
        }
    }

    pub fn snapshot(&self) -> ListingSnapshot<T> {
        let data = self.data();
        let error = self.error();
        let inner = self.lock();
        ListingSnapshot {
            is_loading: inner.enabled && data.is_none() && error.is_none(),
            data,
            error,
            page: inner.params.page(),
            limit: inner.params.limit().get(),
            sort_order: inner.params.sort_order(),
            search_term: inner.params.search_term().to_string(),
            filters: inner.params.filters().clone(),
        }
    }
}

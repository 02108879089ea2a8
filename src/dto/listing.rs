//! Query-string parsing and the data handed to the listing template.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::components::nav::TabView;
use crate::components::table::TableView;
use crate::components::tags::Chip;
use crate::domain::entity::EntityKind;
use crate::domain::listing::{ListingQueryState, PageLimit, SortOrder};
use crate::pagination::Pager;

/// Listing parameters read from the page URL.
///
/// Unknown or malformed values fall back to their defaults instead of
/// failing the request, so hand-edited URLs still render a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingParams {
    pub page: u32,
    pub limit: PageLimit,
    pub sort_order: SortOrder,
    pub search_term: String,
    pub filters: BTreeMap<String, String>,
}

impl Default for ListingParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageLimit::default(),
            sort_order: SortOrder::default(),
            search_term: String::new(),
            filters: BTreeMap::new(),
        }
    }
}

impl ListingParams {
    /// Parses a raw query string. Keys other than the paging ones are kept
    /// as filters only when listed in `filter_params`.
    pub fn from_query(query: &str, filter_params: &[&str]) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => {
                    params.page = value.parse::<u32>().unwrap_or(1).max(1);
                }
                "limit" => {
                    params.limit = value
                        .parse::<u32>()
                        .ok()
                        .and_then(|limit| PageLimit::try_from(limit).ok())
                        .unwrap_or_default();
                }
                "sortOrder" => {
                    params.sort_order = value.parse().unwrap_or_default();
                }
                "searchTerm" => {
                    params.search_term = value.trim().to_string();
                }
                name if filter_params.contains(&name) => {
                    let value = value.trim();
                    if !value.is_empty() {
                        params.filters.insert(name.to_string(), value.to_string());
                    }
                }
                _ => {}
            }
        }
        params
    }

    pub fn to_state(&self) -> ListingQueryState {
        let mut state = ListingQueryState::new(self.page, self.limit, self.sort_order)
            .with_search_term(&self.search_term);
        state.set_filters(self.filters.clone());
        state
    }
}

/// Console URL showing `kind` with the given parameters.
pub fn listing_href(kind: EntityKind, state: &ListingQueryState) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(state.query_pairs())
        .finish();
    format!("{}?{}", kind.list_path(), query)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagFilterView {
    pub param: &'static str,
    pub label: &'static str,
    pub chips: Vec<Chip>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LimitOption {
    pub value: u32,
    pub href: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortToggle {
    pub current: SortOrder,
    pub label: &'static str,
    pub href: String,
}

/// Everything `listing/index.html` renders.
#[derive(Clone, Debug, Serialize)]
pub struct ListingPageData {
    pub kind: EntityKind,
    pub heading: &'static str,
    pub list_href: String,
    pub new_href: String,
    pub tabs: Vec<TabView>,
    pub table: TableView,
    pub filters: Vec<TagFilterView>,
    pub pager: Pager,
    pub limits: Vec<LimitOption>,
    pub sort: SortToggle,
    pub search_term: String,
    /// Active filters, repeated as hidden inputs of the search form.
    pub hidden_filters: Vec<(String, String)>,
    pub total: u64,
    pub error: Option<String>,
    pub empty_message: Option<String>,
}

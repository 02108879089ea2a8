//! Paginated listing request/response pair shared by every "list X" page.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Direction of the server-side sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// The opposite direction, used by the sort toggle link.
    pub const fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(TypeConstraintError::UnknownVariant {
                kind: "SortOrder",
                value: value.to_string(),
            }),
        }
    }
}

/// Page sizes offered by the listing pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageLimit {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageLimit {
    pub const ALL: [PageLimit; 4] = [
        PageLimit::Ten,
        PageLimit::Twenty,
        PageLimit::Fifty,
        PageLimit::Hundred,
    ];

    pub const fn get(self) -> u32 {
        match self {
            PageLimit::Ten => 10,
            PageLimit::Twenty => 20,
            PageLimit::Fifty => 50,
            PageLimit::Hundred => 100,
        }
    }

    /// Largest supported page, used where a dropdown needs every option.
    pub const fn max() -> Self {
        PageLimit::Hundred
    }
}

impl TryFrom<u32> for PageLimit {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageLimit::ALL
            .into_iter()
            .find(|limit| limit.get() == value)
            .ok_or(TypeConstraintError::InvalidPageLimit(value))
    }
}

impl From<PageLimit> for u32 {
    fn from(value: PageLimit) -> Self {
        value.get()
    }
}

impl Display for PageLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Parameters of a single listing request.
///
/// Filters live in a `BTreeMap` so equal states always produce identical
/// query strings and cache keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListingQueryState {
    page: u32,
    limit: PageLimit,
    sort_order: SortOrder,
    search_term: String,
    filters: BTreeMap<String, String>,
}

impl Default for ListingQueryState {
    fn default() -> Self {
        Self::new(1, PageLimit::default(), SortOrder::default())
    }
}

impl ListingQueryState {
    pub fn new(page: u32, limit: PageLimit, sort_order: SortOrder) -> Self {
        Self {
            page: page.max(1),
            limit,
            sort_order,
            search_term: String::new(),
            filters: BTreeMap::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> PageLimit {
        self.limit
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_limit(&mut self, limit: PageLimit) {
        self.limit = limit;
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
    }

    pub fn set_search_term(&mut self, search_term: &str) {
        self.search_term = search_term.trim().to_string();
    }

    /// Sets or clears (on an empty value) a single filter.
    pub fn set_filter(&mut self, name: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.filters.remove(name);
        } else {
            self.filters.insert(name.to_string(), value.to_string());
        }
    }

    pub fn set_filters(&mut self, filters: BTreeMap<String, String>) {
        self.filters.clear();
        for (name, value) in filters {
            self.set_filter(&name, &value);
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.set_page(page);
        self
    }

    pub fn with_search_term(mut self, search_term: &str) -> Self {
        self.set_search_term(search_term);
        self
    }

    pub fn with_filter(mut self, name: &str, value: &str) -> Self {
        self.set_filter(name, value);
        self
    }

    /// Query-string pairs in the order the backend documents them.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            ("sortOrder".to_string(), self.sort_order.to_string()),
        ];
        if !self.search_term.is_empty() {
            pairs.push(("searchTerm".to_string(), self.search_term.clone()));
        }
        pairs.extend(
            self.filters
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        pairs
    }
}

/// One page of a listing as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_number_of_pages: u32,
}

/// Number of pages needed to show `total` records `limit` at a time.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}

impl<T> ListingResponse<T> {
    /// An empty page, well-formed for any requested page number.
    pub fn empty(page: u32, limit: u32) -> Self {
        Self {
            list: Vec::new(),
            page: page.max(1),
            limit,
            total: 0,
            total_number_of_pages: 0,
        }
    }

    /// Fills echo fields the backend left out and recomputes the page count
    /// from `total` and `limit`.
    pub fn normalized(mut self, requested: &ListingQueryState) -> Self {
        if self.page == 0 {
            self.page = requested.page();
        }
        if self.limit == 0 {
            self.limit = requested.limit().get();
        }
        self.total_number_of_pages = total_pages(self.total, self.limit);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> ListingResponse<U>
    where
        F: FnMut(T) -> U,
    {
        ListingResponse {
            list: self.list.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_number_of_pages: self.total_number_of_pages,
        }
    }
}

/// Status flag of the response envelope; the backend sends either a
/// boolean or a short string such as `"success"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeStatus {
    Flag(bool),
    Text(String),
}

impl Default for EnvelopeStatus {
    fn default() -> Self {
        EnvelopeStatus::Flag(true)
    }
}

impl EnvelopeStatus {
    pub fn is_success(&self) -> bool {
        match self {
            EnvelopeStatus::Flag(flag) => *flag,
            EnvelopeStatus::Text(text) => {
                matches!(text.to_ascii_lowercase().as_str(), "success" | "ok" | "true")
            }
        }
    }
}

/// `{ status, statusCode, result }` wrapper every API response uses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: EnvelopeStatus,
    #[serde(default)]
    pub status_code: u16,
    pub result: T,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn page_count_is_ceiling_of_total_over_limit() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 100), 1);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn page_is_never_below_one() {
        let mut state = ListingQueryState::new(0, PageLimit::Ten, SortOrder::Asc);
        assert_eq!(state.page(), 1);
        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn page_limit_accepts_only_known_sizes() {
        assert_eq!(PageLimit::try_from(50), Ok(PageLimit::Fifty));
        assert_eq!(
            PageLimit::try_from(15),
            Err(TypeConstraintError::InvalidPageLimit(15))
        );
    }

    #[test]
    fn sort_order_parses_case_insensitively() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn query_pairs_skip_empty_search_and_filters() {
        let state = ListingQueryState::new(2, PageLimit::Twenty, SortOrder::Asc)
            .with_search_term("   ")
            .with_filter("status", "")
            .with_filter("category", "bikes");

        assert_eq!(
            state.query_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("limit".to_string(), "20".to_string()),
                ("sortOrder".to_string(), "ASC".to_string()),
                ("category".to_string(), "bikes".to_string()),
            ]
        );
    }

    #[test]
    fn equal_states_are_equal_regardless_of_filter_order() {
        let a = ListingQueryState::default()
            .with_filter("a", "1")
            .with_filter("b", "2");
        let b = ListingQueryState::default()
            .with_filter("b", "2")
            .with_filter("a", "1");
        assert_eq!(a, b);
        assert_eq!(a.query_pairs(), b.query_pairs());
    }

    #[test]
    fn envelope_decodes_listing_and_normalizes_page_count() {
        let payload = json!({
            "status": "success",
            "statusCode": 200,
            "result": {
                "list": [1, 2, 3, 4, 5],
                "page": 3,
                "limit": 10,
                "total": 25,
                "totalNumberOfPages": 0
            }
        });

        let envelope: Envelope<ListingResponse<u32>> = serde_json::from_value(payload).unwrap();
        assert!(envelope.status.is_success());
        assert_eq!(envelope.status_code, 200);

        let state = ListingQueryState::default().with_page(3);
        let listing = envelope.result.normalized(&state);
        assert_eq!(listing.total_number_of_pages, 3);
        assert_eq!(listing.list.len(), 5);
        assert!(listing.list.len() as u32 <= listing.limit);
    }

    #[test]
    fn missing_echo_fields_are_filled_from_the_request() {
        let listing: ListingResponse<u32> =
            serde_json::from_value(json!({ "list": [], "total": 25 })).unwrap();
        let state = ListingQueryState::new(4, PageLimit::Ten, SortOrder::Desc);
        let listing = listing.normalized(&state);

        assert_eq!(listing.page, 4);
        assert_eq!(listing.limit, 10);
        assert_eq!(listing.total_number_of_pages, 3);
        assert!(listing.is_empty());
    }

    #[test]
    fn boolean_status_is_accepted() {
        let envelope: Envelope<u32> =
            serde_json::from_value(json!({ "status": false, "statusCode": 500, "result": 0 }))
                .unwrap();
        assert!(!envelope.status.is_success());
    }
}

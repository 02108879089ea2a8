//! Loads one listing page through a [`ListingQuery`] and shapes it for the
//! template.

use std::sync::Arc;

use crate::components::table::render_table;
use crate::components::tags::TagSelector;
use crate::domain::listing::{ListingQueryState, PageLimit, SortOrder};
use crate::dto::listing::{
    LimitOption, ListingPageData, ListingParams, SortToggle, TagFilterView, listing_href,
};
use crate::pagination::Pager;
use crate::query::{ListingOptions, ListingQuery, ListingSnapshot, QueryCache, RefreshOutcome};
use crate::repository::ListingReader;
use crate::views::sections::section_tabs;
use crate::views::{ListingView, empty_message};

/// Reads the listing parameters of `T` from a raw query string, keeping
/// only the filters its chip rows offer.
pub fn listing_params<T: ListingView>(query: &str) -> ListingParams {
    let filters = T::tag_filters();
    let names: Vec<&str> = filters.iter().map(|filter| filter.param).collect();
    ListingParams::from_query(query, &names)
}

/// Runs the listing query for `params` and renders the page data.
pub async fn load_listing_page<T: ListingView>(
    reader: Arc<dyn ListingReader<T>>,
    cache: Arc<QueryCache>,
    params: &ListingParams,
) -> ListingPageData {
    let query = ListingQuery::new(
        reader,
        cache,
        ListingOptions::new(1, params.limit, params.sort_order),
    );
    query.set_search_term(&params.search_term);
    query.set_filters(params.filters.clone());
    query.set_page(params.page);

    if query.refresh().await == RefreshOutcome::Failed {
        log::warn!("Rendering {} listing without data", T::KIND);
    }

    build_listing_page(&query.snapshot(), &query.params())
}

fn sort_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "Oldest first",
        SortOrder::Desc => "Newest first",
    }
}

/// Page data for a listing in whatever state `snapshot` captured.
pub fn build_listing_page<T: ListingView>(
    snapshot: &ListingSnapshot<T>,
    state: &ListingQueryState,
) -> ListingPageData {
    let kind = T::KIND;
    let list_path = kind.list_path();

    let (records, total, total_pages) = match &snapshot.data {
        Some(data) => (data.list.as_slice(), data.total, data.total_number_of_pages),
        None => (&[][..], 0, 0),
    };

    let table = render_table(&T::columns(), records, snapshot.is_loading);

    let error = snapshot.error.as_ref().map(|_| {
        format!(
            "Failed to load {}. Please try again later.",
            kind.plural().to_lowercase()
        )
    });
    let empty_message = snapshot
        .data
        .as_ref()
        .is_some_and(|data| data.list.is_empty())
        .then(|| empty_message(kind));

    let pager = Pager::new(state.page(), total_pages, |page| {
        listing_href(kind, &state.clone().with_page(page))
    });

    let filters = T::tag_filters()
        .into_iter()
        .map(|filter| {
            let param = filter.param;
            let selected = state.filter(param).unwrap_or_default();
            let chips = TagSelector::new(filter.options).chips(selected, |value| {
                listing_href(kind, &state.clone().with_filter(param, value).with_page(1))
            });
            TagFilterView {
                param,
                label: filter.label,
                chips,
            }
        })
        .collect();

    let limits = PageLimit::ALL
        .into_iter()
        .map(|limit| {
            let mut next = state.clone().with_page(1);
            next.set_limit(limit);
            LimitOption {
                value: limit.get(),
                href: listing_href(kind, &next),
                active: limit == state.limit(),
            }
        })
        .collect();

    let mut toggled = state.clone();
    toggled.set_sort_order(state.sort_order().toggled());
    let sort = SortToggle {
        current: state.sort_order(),
        label: sort_label(state.sort_order()),
        href: listing_href(kind, &toggled),
    };

    ListingPageData {
        kind,
        heading: kind.plural(),
        new_href: kind.new_path(),
        tabs: section_tabs(kind, &list_path),
        list_href: list_path,
        table,
        filters,
        pager,
        limits,
        sort,
        search_term: state.search_term().to_string(),
        hidden_filters: state
            .filters()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
        total,
        error,
        empty_message,
    }
}

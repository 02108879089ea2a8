use serde::Serialize;

/// Page numbers to show in a pager, `None` standing for a gap.
///
/// Keeps `left_edge` pages at the start, `left_current` before and
/// `right_current` after the current page, and `right_edge` at the end.
fn get_pages(
    total_pages: u32,
    current_page: u32,
    left_edge: u32,
    left_current: u32,
    right_current: u32,
    right_edge: u32,
) -> Vec<Option<u32>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let current_page = current_page.min(last_page.saturating_add(1));
    let mut pages = Vec::new();

    let left_end = left_edge.saturating_add(1).min(last_page.saturating_add(1));
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page.saturating_add(1));

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// `None` renders as an ellipsis.
    pub number: Option<u32>,
    pub href: Option<String>,
    pub active: bool,
}

/// Pager of a listing page with ready-made links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
    pub pages: Vec<PageLink>,
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl Pager {
    pub fn new<H>(current_page: u32, total_pages: u32, href: H) -> Self
    where
        H: Fn(u32) -> String,
    {
        let current_page = current_page.max(1);

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2)
            .into_iter()
            .map(|number| PageLink {
                number,
                href: number.map(&href),
                active: number == Some(current_page),
            })
            .collect();

        let previous = (current_page > 1).then(|| href(current_page - 1));
        let next = (current_page < total_pages).then(|| href(current_page + 1));

        Self {
            page: current_page,
            total_pages,
            pages,
            previous,
            next,
        }
    }
}

//! Page window helpers for the table browser.

use serde::Serialize;

/// Page numbers to show around `current_page`; `None` marks a gap.
fn page_links(
    total_pages: usize,
    current_page: usize,
    edge: usize,
    around_current: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + edge).min(total_pages + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(around_current));
    let mid_end = current_page
        .saturating_add(around_current)
        .saturating_add(1)
        .min(total_pages + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=total_pages).map(Some));

    pages
}

/// One page of items plus what a pager needs to render.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, per_page: usize, total: usize) -> Self {
        let page = current_page.max(1);
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };

        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
            pages: page_links(total_pages, page.min(total_pages.max(1)), 2, 2),
        }
    }
}

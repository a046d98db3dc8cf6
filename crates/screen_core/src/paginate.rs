use serde::Serialize;

/// One page of a list plus the totals the table header and pager render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub page: u32,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: u32,
}

/// Slice `items` for a 1-based `page`. An out-of-range page (including 0)
/// yields an empty slice, never an error; `total_pages` is 0 for an empty
/// list, the transiently reachable zero-page state.
pub fn paginate<T>(items: &[T], page_size: usize, page: u32) -> PageView<'_, T> {
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size) as u32;

    let slice = match (page as usize).checked_sub(1) {
        Some(zero_based) => {
            let start = zero_based.saturating_mul(page_size);
            if start >= total_count {
                &items[..0]
            } else {
                let end = start.saturating_add(page_size).min(total_count);
                &items[start..end]
            }
        }
        None => &items[..0],
    };

    PageView {
        items: slice,
        page,
        page_size,
        total_count,
        total_pages,
    }
}

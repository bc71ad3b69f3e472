//! Pagination math

/// Pages shown on each side of the current one
pub const STRIP_RADIUS: u32 = 4;

pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX)
}

/// 1-based first and last row numbers of `page`; `(0, 0)` for an empty list
pub fn visible_range(page: u32, per_page: u32, total: u64) -> (u64, u64) {
    if total == 0 {
        return (0, 0);
    }
    let page = u64::from(page.max(1));
    let per_page = u64::from(per_page);
    let first = (page - 1) * per_page + 1;
    let last = (page * per_page).min(total);
    (first, last)
}

/// Page that still contains the first visible row after a page-size change
pub fn page_after_resize(old_page: u32, old_per_page: u32, new_per_page: u32) -> u32 {
    if new_per_page == 0 {
        return 1;
    }
    let first_row = u64::from(old_page.max(1) - 1) * u64::from(old_per_page) + 1;
    let page = first_row.div_ceil(u64::from(new_per_page));
    u32::try_from(page).unwrap_or(u32::MAX).max(1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStrip {
    pub before: Vec<u32>,
    pub current: u32,
    pub after: Vec<u32>,
    pub last: u32,
    pub first_enabled: bool,
    pub last_enabled: bool,
}

pub fn page_strip(page: u32, total_pages: u32) -> PageStrip {
    let low = page.saturating_sub(STRIP_RADIUS).max(1);
    let high = page.saturating_add(STRIP_RADIUS).min(total_pages);
    PageStrip {
        before: (low..page).collect(),
        current: page,
        after: (page.saturating_add(1)..=high).collect(),
        last: total_pages,
        first_enabled: page > 1,
        last_enabled: page < total_pages,
    }
}

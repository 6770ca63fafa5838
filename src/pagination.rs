/// One slot in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

const MAX_VISIBLE_PAGES: u32 = 5;

/// Compute the page-number strip for the current position. Empty when
/// there is a single page or none; otherwise the first page, a clamped
/// 3-wide window around the current page, and the last page, with
/// ellipses covering the gaps.
pub fn visible_pages(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut items = Vec::new();

    if total_pages <= MAX_VISIBLE_PAGES {
        for page in 1..=total_pages {
            items.push(PageItem::Page(page));
        }
        return items;
    }

    items.push(PageItem::Page(1));

    let (start, end) = if current_page <= 3 {
        (2, 3.min(total_pages - 1))
    } else if current_page >= total_pages - 2 {
        ((total_pages - 2).max(2), total_pages - 1)
    } else {
        (current_page - 1, current_page + 1)
    };

    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in start..=end {
        items.push(PageItem::Page(page));
    }
    if end < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Page(total_pages));
    items
}

pub fn has_previous(current_page: u32) -> bool {
    current_page > 1
}

pub fn has_next(current_page: u32, total_pages: u32) -> bool {
    current_page < total_pages
}

/// 1-based "showing X to Y of Z" bounds for the current page.
pub fn page_bounds(current_page: u32, limit: u32, total_results: u64) -> (u64, u64) {
    let start = u64::from(current_page.saturating_sub(1)) * u64::from(limit) + 1;
    let end = (u64::from(current_page) * u64::from(limit)).min(total_results);
    (start, end)
}

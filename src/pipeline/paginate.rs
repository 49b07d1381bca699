//! Paginate stage.

/// Number of pages for a filtered row count, floored to 1.
///
/// Zero filtered rows still present as one (empty) page, so the pager
/// never displays "page 1 of 0".
pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page size is validated at construction");
    filtered_count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested 1-based page into `[1, total_pages]`.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.max(1).min(total_pages.max(1))
}

/// The page-sized window of rows for a (pre-clamped) page.
pub fn paginate<'a, R>(rows: Vec<&'a R>, page: usize, page_size: usize) -> Vec<&'a R> {
    let start = (page.max(1) - 1).saturating_mul(page_size);
    rows.into_iter().skip(start).take(page_size).collect()
}

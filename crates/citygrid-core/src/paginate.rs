// crates/citygrid-core/src/paginate.rs
use crate::error::{CityError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Number of pages needed for `len` rows; never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Index range of page `page` (1-based) within a sequence of `len` rows.
///
/// Pages past the end yield an empty range.
pub fn page_bounds(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Navigation actions offered by the table footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nav {
    First,
    Previous,
    Next,
    Last,
}

/// Current page (1-based) and page size of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    page: usize,
    page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(CityError::InvalidPageSize);
        }
        Ok(PageState { page: 1, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(CityError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.page = 1;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Applies a navigation action over `len` rows, clamped to
    /// `[1, total_pages]`. Returns `false` when nothing moved.
    pub fn navigate(&mut self, nav: Nav, len: usize) -> bool {
        let last = total_pages(len, self.page_size);
        let target = match nav {
            Nav::First => 1,
            Nav::Previous => self.page.saturating_sub(1),
            Nav::Next => self.page.saturating_add(1),
            Nav::Last => last,
        };
        self.goto(target, len)
    }

    /// Jumps to `page`, clamped to `[1, total_pages]`.
    pub fn goto(&mut self, page: usize, len: usize) -> bool {
        let clamped = page.clamp(1, total_pages(len, self.page_size));
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }
}

/// One visible page plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    /// Length of the full (unpaged) sequence.
    pub total: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Slices page `page` (1-based) of `page_size` rows out of `seq`.
///
/// # Errors
/// [`CityError::InvalidPageIndex`] for page 0 and
/// [`CityError::InvalidPageSize`] for a zero page size.
pub fn paginate<T: Clone>(seq: &[T], page: usize, page_size: usize) -> Result<Page<T>> {
    if page == 0 {
        return Err(CityError::InvalidPageIndex(page));
    }
    if page_size == 0 {
        return Err(CityError::InvalidPageSize);
    }
    let total_pages = total_pages(seq.len(), page_size);
    let rows = seq[page_bounds(seq.len(), page, page_size)].to_vec();
    Ok(Page {
        rows,
        page,
        page_size,
        total: seq.len(),
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
    })
}

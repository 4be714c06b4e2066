//! Page envelope around filtered listings

use crate::error::Result;
use crate::store::{Page, PageRequest};
use crate::validate;
use serde::{Deserialize, Serialize};

/// One page of results as returned to callers
///
/// `page_number` echoes the requested 1-based page; `count_page` is the
/// total number of pages for the filter, independent of the page asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse<T> {
    pub page_number: usize,
    pub count_page: usize,
    pub content: Vec<T>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationAssembler;

impl PaginationAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Validate a 1-based `(page_size, number_page)` pair and convert it to a store window
    pub fn request(&self, page_size: usize, number_page: usize) -> Result<PageRequest> {
        validate::page_request(page_size, number_page)?;
        Ok(PageRequest::new(number_page - 1, page_size))
    }

    pub fn assemble<T, U>(
        &self,
        number_page: usize,
        page: Page<T>,
        project: impl FnMut(T) -> U,
    ) -> PaginationResponse<U> {
        let page = page.map(project);
        PaginationResponse {
            page_number: number_page,
            count_page: page.total_pages,
            content: page.rows,
        }
    }
}

// 3.0: cursor pagination. remote collections arrive in pages of at most
// PAGE_SIZE rows keyed by a skip offset. drain them into one ordered Vec.
//
// termination rule: a full page means more rows may exist, a short page ends
// the walk. when the collection size is an exact multiple of the page size
// this costs one extra request that returns zero rows. accepted overhead.

use crate::config::PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// One page of a remote collection, echoing the skip it was requested at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub requested_skip: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, requested_skip: usize) -> Self {
        Self {
            items,
            requested_skip,
        }
    }
}

/// Drain a paged collection at the standard page size.
pub fn fetch_all<T, E, F>(fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(usize) -> Result<Page<T>, E>,
{
    fetch_all_paged(PAGE_SIZE, fetch_page)
}

/// Drain a paged collection at an explicit page size.
///
/// An explicit loop rather than recursion: the number of pages is unbounded
/// and must not grow the stack. Any page failure aborts the whole walk, so
/// callers see either the complete sequence or an error, never a partial one.
pub fn fetch_all_paged<T, E, F>(page_size: usize, mut fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(usize) -> Result<Page<T>, E>,
{
    debug_assert!(page_size > 0, "page size must be positive");

    let mut all = Vec::new();
    let mut skip = 0;
    loop {
        let page = fetch_page(skip)?;
        debug_assert_eq!(page.requested_skip, skip, "backend echoed wrong skip");
        let len = page.items.len();
        all.extend(page.items);
        if len < page_size {
            return Ok(all);
        }
        skip += page_size;
    }
}

//! Count/offset/window pagination engine
//!
//! Every list query runs through [`paginate`]: a count of all rows matching
//! the fragment, then the windowed query, then the uniform envelope. The two
//! statements execute sequentially on the same pool; under concurrent
//! writers the count and the window may observe different snapshots, an
//! accepted limitation of the read path.

use serde::Serialize;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::FromRow;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::query::bind;
use crate::query::fragment::SqlFragment;

/// Requested page window, validated at construction
///
/// Threaded explicitly into [`paginate`]; there is no instance-held
/// pagination state anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-indexed page number
    pub page: i64,
    /// Rows per page
    pub page_size: i64,
}

impl PageRequest {
    /// Page used when the `page` parameter is absent
    pub const DEFAULT_PAGE: i64 = 1;
    /// Page size used when the `page_size` parameter is absent
    pub const DEFAULT_PAGE_SIZE: i64 = 5;
    /// Largest accepted page size
    pub const MAX_PAGE_SIZE: i64 = 100;

    /// Parse `page` and `page_size` from the raw query map
    ///
    /// Non-integer values are rejected as `InvalidFormat`, integers outside
    /// the accepted range as `OutOfRange`. Values are never silently
    /// clamped.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self> {
        let page = match params.get("page") {
            Some(raw) => parse_integer_param("page", raw)?,
            None => Self::DEFAULT_PAGE,
        };
        if page < 1 {
            return Err(Error::OutOfRange {
                param: "page".to_string(),
                expected: "at least 1".to_string(),
            });
        }

        let page_size = match params.get("page_size") {
            Some(raw) => parse_integer_param("page_size", raw)?,
            None => Self::DEFAULT_PAGE_SIZE,
        };
        if !(1..=Self::MAX_PAGE_SIZE).contains(&page_size) {
            return Err(Error::OutOfRange {
                param: "page_size".to_string(),
                expected: format!("an integer between 1 and {}", Self::MAX_PAGE_SIZE),
            });
        }

        Ok(Self { page, page_size })
    }

    /// Rows skipped before this page's window
    ///
    /// Deliberately not clamped to the row count: an out-of-range page
    /// returns an empty window with intact metadata.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

fn parse_integer_param(param: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| Error::InvalidFormat {
        field: param.to_string(),
        expected: "an integer".to_string(),
    })
}

/// One page of results plus its pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    /// The requested page number
    pub current_page: i64,
    /// The requested page size
    pub page_size: i64,
    /// Total pages at this page size (0 when nothing matched)
    pub total_pages: i64,
    /// Total rows matching the query, window ignored
    pub total_records: i64,
    /// The rows of this page, at most `page_size` of them
    pub data: Vec<T>,
}

/// Execute the fragment as one bounded page
///
/// Counts the rows matching the fragment (full-query evaluation over the
/// filtered statement), appends the window clause after any ORDER BY, and
/// executes the windowed query. Either a complete envelope is returned or
/// the first fault aborts the whole cycle.
pub async fn paginate<T>(
    pool: &SqlitePool,
    fragment: SqlFragment,
    page: PageRequest,
) -> Result<PageResult<T>>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let count_sql = format!("SELECT COUNT(*) FROM ({}) AS matched", fragment.sql());
    let total_records = bind::fetch_scalar(pool, &count_sql, fragment.params()).await?;

    let mut windowed = fragment;
    windowed.push_sql(" LIMIT :limit OFFSET :offset");
    windowed.push_param("limit", page.page_size)?;
    windowed.push_param("offset", page.offset())?;

    let data = bind::fetch_all(pool, windowed.sql(), windowed.params()).await?;

    Ok(PageResult {
        current_page: page.page,
        page_size: page.page_size,
        total_pages: total_pages(total_records, page.page_size),
        total_records,
        data,
    })
}

fn total_pages(total_records: i64, page_size: i64) -> i64 {
    if total_records == 0 {
        0
    } else {
        (total_records + page_size - 1) / page_size
    }
}

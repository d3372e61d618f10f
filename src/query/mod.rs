//! Query construction, filtering, and pagination
//!
//! This module is the generic data-access core shared by every resource:
//!
//! - [`fragment`] — an in-progress SQL statement plus its named bind
//!   parameters, built incrementally by AND-composing predicate clauses.
//! - [`filter`] — validation of raw query-string filter values and their
//!   translation into predicate clauses, driven by declarative per-resource
//!   tables.
//! - [`paginate`] — the count/offset/window engine producing a uniform
//!   [`paginate::PageResult`] envelope.
//! - [`bind`] — the execution adapter binding named parameters to the
//!   underlying statement.
//!
//! Filter values only ever travel through the parameter map; the SQL text
//! receives nothing but whitelist-translated column and direction tokens.

pub mod bind;
pub mod filter;
pub mod fragment;
pub mod paginate;

pub use bind::{fetch_all, fetch_optional, fetch_scalar};
pub use filter::{
    apply_filters, apply_sort, validate_id, FilterKind, FilterSpec, IdPattern, SortDirection,
    SortSpec,
};
pub use fragment::{ParamValue, SqlFragment};
pub use paginate::{paginate, PageRequest, PageResult};

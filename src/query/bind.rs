//! Statement execution with named parameter binding
//!
//! Fragments carry parameters as a named mapping; the SQLite driver binds
//! positionally. This adapter bridges the two: it scans `:name` placeholders
//! in first-occurrence order, rewrites each to `?`, and emits the bind list.
//! The rewrite is also where the placeholder/parameter correspondence is
//! enforced — a placeholder with no parameter, or a parameter never
//! referenced, aborts with a binding error instead of executing a
//! partially-bound statement.

use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::FromRow;
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::query::fragment::ParamValue;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":[A-Za-z_][A-Za-z0-9_]*").expect("placeholder pattern"));

/// Rewrite named placeholders to positional ones and order the bind values
///
/// Parameterless SQL passes through untouched (direct execution). Repeated
/// use of one placeholder is one logical parameter bound at each occurrence.
fn prepare(sql: &str, params: &[(String, ParamValue)]) -> Result<(String, Vec<ParamValue>)> {
    if params.is_empty() && !PLACEHOLDER.is_match(sql) {
        return Ok((sql.to_string(), Vec::new()));
    }

    let mut rewritten = String::with_capacity(sql.len());
    let mut values = Vec::new();
    let mut referenced: HashSet<&str> = HashSet::new();
    let mut tail = 0;

    for placeholder in PLACEHOLDER.find_iter(sql) {
        let name = &sql[placeholder.start() + 1..placeholder.end()];
        let value = params
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value)
            .ok_or_else(|| {
                Error::Binding(format!("placeholder `:{name}` has no bind parameter"))
            })?;

        rewritten.push_str(&sql[tail..placeholder.start()]);
        rewritten.push('?');
        values.push(value.clone());
        referenced.insert(name);
        tail = placeholder.end();
    }
    rewritten.push_str(&sql[tail..]);

    if let Some((name, _)) = params
        .iter()
        .find(|(param, _)| !referenced.contains(param.as_str()))
    {
        return Err(Error::Binding(format!(
            "bind parameter `{name}` is never referenced"
        )));
    }

    Ok((rewritten, values))
}

/// Fetch every row of the statement, decoded into `T`
pub async fn fetch_all<T>(
    pool: &SqlitePool,
    sql: &str,
    params: &[(String, ParamValue)],
) -> Result<Vec<T>>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let (sql, values) = prepare(sql, params)?;
    let mut query = sqlx::query_as::<_, T>(&sql);
    for value in &values {
        query = match value {
            ParamValue::Text(text) => query.bind(text.as_str()),
            ParamValue::Int(int) => query.bind(*int),
        };
    }
    Ok(query.fetch_all(pool).await?)
}

/// Fetch at most one row of the statement, decoded into `T`
pub async fn fetch_optional<T>(
    pool: &SqlitePool,
    sql: &str,
    params: &[(String, ParamValue)],
) -> Result<Option<T>>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let (sql, values) = prepare(sql, params)?;
    let mut query = sqlx::query_as::<_, T>(&sql);
    for value in &values {
        query = match value {
            ParamValue::Text(text) => query.bind(text.as_str()),
            ParamValue::Int(int) => query.bind(*int),
        };
    }
    Ok(query.fetch_optional(pool).await?)
}

/// Fetch a single integer scalar, such as a row count
pub async fn fetch_scalar(
    pool: &SqlitePool,
    sql: &str,
    params: &[(String, ParamValue)],
) -> Result<i64> {
    let (sql, values) = prepare(sql, params)?;
    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for value in &values {
        query = match value {
            ParamValue::Text(text) => query.bind(text.as_str()),
            ParamValue::Int(int) => query.bind(*int),
        };
    }
    Ok(query.fetch_one(pool).await?)
}

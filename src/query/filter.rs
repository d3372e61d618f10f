//! Filter validation and predicate construction
//!
//! Each resource declares a table of [`FilterSpec`] entries mapping public
//! query-string keys to match kinds. [`apply_filters`] walks that table in
//! declaration order, validates the raw value for every filter present, and
//! appends exactly one predicate per filter. Keys absent from the table are
//! ignored; validation failures abort before any query executes.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::query::fragment::SqlFragment;

/// Fixed-width identifier shapes, one per entity table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPattern {
    /// Team ids: `T-NN`
    Team,
    /// Player ids: `P-NNNNN` or `P-NNNNNN`
    Player,
    /// Tournament ids: `WC-YYYY`
    Tournament,
    /// Match ids: `M-YYYY-NN`
    Match,
    /// Stadium ids: `S-NNN`
    Stadium,
}

impl IdPattern {
    fn regex(self) -> &'static Regex {
        match self {
            Self::Team => {
                static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^T-\d{2}$").expect("team id pattern"));
                &RE
            }
            Self::Player => {
                static RE: Lazy<Regex> =
                    Lazy::new(|| Regex::new(r"^P-\d{5,6}$").expect("player id pattern"));
                &RE
            }
            Self::Tournament => {
                static RE: Lazy<Regex> =
                    Lazy::new(|| Regex::new(r"^WC-\d{4}$").expect("tournament id pattern"));
                &RE
            }
            Self::Match => {
                static RE: Lazy<Regex> =
                    Lazy::new(|| Regex::new(r"^M-\d{4}-\d{2}$").expect("match id pattern"));
                &RE
            }
            Self::Stadium => {
                static RE: Lazy<Regex> =
                    Lazy::new(|| Regex::new(r"^S-\d{3}$").expect("stadium id pattern"));
                &RE
            }
        }
    }

    /// Human-readable shape hint used in error messages
    pub fn shape(self) -> &'static str {
        match self {
            Self::Team => "a team id of the form T-NN",
            Self::Player => "a player id of the form P-NNNNN or P-NNNNNN",
            Self::Tournament => "a tournament id of the form WC-YYYY",
            Self::Match => "a match id of the form M-YYYY-NN",
            Self::Stadium => "a stadium id of the form S-NNN",
        }
    }
}

/// How a filter value is validated and matched against its column
///
/// Every variant appends one predicate clause. Parameterized kinds push
/// exactly one named parameter; [`FilterKind::Flag`] translates the value
/// through a whitelist into a fixed flag predicate instead.
#[derive(Debug, Clone, Copy)]
pub enum FilterKind {
    /// Equality on a validated identifier; the clause references `:{key}`
    /// and may name several columns (e.g. home or away team)
    Id(IdPattern, &'static str),
    /// Prefix match (`LIKE value%`) on the named column
    Prefix(&'static str),
    /// Substring match (`LIKE %value%`) on the named column
    Substring(&'static str),
    /// Calendar date lower bound (`>=`) on the named column
    OnOrAfter(&'static str),
    /// Calendar date upper bound (`<=`) on the named column
    OnOrBefore(&'static str),
    /// Strict integer lower bound (`>`) on the named column
    GreaterThan(&'static str),
    /// Case-insensitive membership in a whitelist; the canonical member is
    /// bound against the named column
    OneOf(&'static str, &'static [&'static str]),
    /// Whitelist translation to a fixed flag predicate carrying no bind
    /// parameter; each accepted value asserts exactly one flag column
    Flag(&'static [(&'static str, &'static str)]),
}

/// One entry in a resource's declarative filter table
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    /// Public query-string key
    pub key: &'static str,
    /// Validation and match behavior
    pub kind: FilterKind,
}

/// Direction for ordering results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Sort in ascending order
    #[default]
    Ascending,
    /// Sort in descending order
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ASC"),
            Self::Descending => write!(f, "DESC"),
        }
    }
}

/// A resource's sort whitelist: public field name to column, plus the
/// column used when `sort_by` is absent or unrecognized
#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    /// Accepted public sort fields and the columns they translate to
    pub allowed: &'static [(&'static str, &'static str)],
    /// Column used when no accepted field is requested
    pub default_column: &'static str,
}

/// Validate every recognized filter present in `raw` and append its
/// predicate to the fragment, in the table's declaration order
pub fn apply_filters(
    fragment: &mut SqlFragment,
    specs: &[FilterSpec],
    raw: &HashMap<String, String>,
) -> Result<()> {
    for spec in specs {
        let Some(value) = raw.get(spec.key) else {
            continue;
        };
        apply_one(fragment, spec, value)?;
    }
    Ok(())
}

fn apply_one(fragment: &mut SqlFragment, spec: &FilterSpec, raw: &str) -> Result<()> {
    match spec.kind {
        FilterKind::Id(pattern, clause) => {
            let id = validate_id(pattern, spec.key, raw)?;
            fragment.push_predicate(clause, spec.key, id)?;
        }
        FilterKind::Prefix(column) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(());
            }
            fragment.push_predicate(
                &like_clause(column, spec.key),
                spec.key,
                format!("{}%", escape_like(trimmed)),
            )?;
        }
        FilterKind::Substring(column) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(());
            }
            fragment.push_predicate(
                &like_clause(column, spec.key),
                spec.key,
                format!("%{}%", escape_like(trimmed)),
            )?;
        }
        FilterKind::OnOrAfter(column) => {
            let date = validate_date(spec.key, raw)?;
            fragment.push_predicate(&format!("{} >= :{}", column, spec.key), spec.key, date)?;
        }
        FilterKind::OnOrBefore(column) => {
            let date = validate_date(spec.key, raw)?;
            fragment.push_predicate(&format!("{} <= :{}", column, spec.key), spec.key, date)?;
        }
        FilterKind::GreaterThan(column) => {
            let value = validate_integer(spec.key, raw)?;
            fragment.push_predicate(&format!("{} > :{}", column, spec.key), spec.key, value)?;
        }
        FilterKind::OneOf(column, allowed) => {
            let canonical = validate_membership(spec.key, raw, allowed)?;
            fragment.push_predicate(&format!("{} = :{}", column, spec.key), spec.key, canonical)?;
        }
        FilterKind::Flag(entries) => {
            let trimmed = raw.trim();
            let clause = entries
                .iter()
                .find(|(value, _)| value.eq_ignore_ascii_case(trimmed))
                .map(|(_, clause)| *clause)
                .ok_or_else(|| Error::InvalidValue {
                    field: spec.key.to_string(),
                    allowed: entries
                        .iter()
                        .map(|(value, _)| *value)
                        .collect::<Vec<_>>()
                        .join(", "),
                })?;
            fragment.push_predicate_sql(clause);
        }
    }
    Ok(())
}

/// Translate sort parameters through the whitelist and append ORDER BY
///
/// An unrecognized `sort_by` falls back to the resource default column; an
/// unrecognized `sort_order` falls back to ascending. Sorting never fails
/// and never lets a caller-supplied token reach the SQL text.
pub fn apply_sort(
    fragment: &mut SqlFragment,
    spec: &SortSpec,
    sort_by: Option<&str>,
    sort_order: Option<&str>,
) {
    let column = sort_by
        .map(str::trim)
        .and_then(|name| {
            spec.allowed
                .iter()
                .find(|(public, _)| public.eq_ignore_ascii_case(name))
        })
        .map(|(_, column)| *column)
        .unwrap_or(spec.default_column);

    let direction = match sort_order.map(str::trim) {
        Some(order) if order.eq_ignore_ascii_case("desc") => SortDirection::Descending,
        _ => SortDirection::Ascending,
    };

    fragment.push_sql(&format!(" ORDER BY {} {}", column, direction));
}

/// Validate an identifier against the resource's pattern
///
/// Returns the trimmed id on success; `InvalidFormat` naming the field and
/// the expected shape otherwise.
pub fn validate_id(pattern: IdPattern, field: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if pattern.regex().is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(Error::InvalidFormat {
            field: field.to_string(),
            expected: pattern.shape().to_string(),
        })
    }
}

/// Validate a strict `YYYY-MM-DD` calendar date
///
/// The parsed date is re-formatted and compared byte-for-byte with the
/// input, so calendar-invalid values ("2024-02-30") and leniently parseable
/// ones ("2024-2-3") are both rejected.
fn validate_date(field: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let invalid = || Error::InvalidFormat {
        field: field.to_string(),
        expected: "a YYYY-MM-DD calendar date".to_string(),
    };

    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())?;
    if parsed.format("%Y-%m-%d").to_string() != trimmed {
        return Err(invalid());
    }
    Ok(trimmed.to_string())
}

fn validate_integer(field: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| Error::InvalidFormat {
        field: field.to_string(),
        expected: "an integer".to_string(),
    })
}

fn validate_membership(
    field: &str,
    raw: &str,
    allowed: &'static [&'static str],
) -> Result<&'static str> {
    let trimmed = raw.trim();
    allowed
        .iter()
        .find(|member| member.eq_ignore_ascii_case(trimmed))
        .copied()
        .ok_or_else(|| Error::InvalidValue {
            field: field.to_string(),
            allowed: allowed.join(", "),
        })
}

fn like_clause(column: &str, key: &str) -> String {
    format!("{} LIKE :{} ESCAPE '\\'", column, key)
}

/// Escape LIKE wildcards so filter values match literally
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

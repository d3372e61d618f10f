//! Incrementally built SQL fragments with named bind parameters

use crate::error::{Error, Result};

/// A scalar value bound into a query
///
/// Integer values are bound with explicit integer typing; everything else is
/// bound as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// String value
    Text(String),
    /// 64-bit integer value
    Int(i64),
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// An in-progress SQL statement and its associated bind parameters
///
/// A fragment starts from a base statement ending in an always-true predicate
/// (`WHERE 1 = 1`) so that every appended predicate composes uniformly with
/// `AND`. Parameter names are unique within a fragment; every `:name`
/// placeholder in the SQL text must have exactly one entry here and vice
/// versa, checked at bind time.
///
/// A fragment is exclusively owned by one request and never shared.
#[derive(Debug, Clone)]
pub struct SqlFragment {
    sql: String,
    params: Vec<(String, ParamValue)>,
}

impl SqlFragment {
    /// Create a fragment from a base statement
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            sql: base.into(),
            params: Vec::new(),
        }
    }

    /// The SQL text accumulated so far
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bind parameters accumulated so far, in insertion order
    pub fn params(&self) -> &[(String, ParamValue)] {
        &self.params
    }

    /// AND-append a predicate clause together with its bind parameter
    ///
    /// The clause must reference the parameter as `:name`. Fails if `name` is
    /// already bound; parameter names are unique per fragment.
    pub fn push_predicate(
        &mut self,
        clause: &str,
        name: &str,
        value: impl Into<ParamValue>,
    ) -> Result<()> {
        self.sql.push_str(" AND ");
        self.sql.push_str(clause);
        self.push_param(name, value)
    }

    /// AND-append a predicate clause that carries no bind parameter
    ///
    /// Only for clauses made entirely of whitelist-translated tokens, such as
    /// a position flag column asserted `= 1`. Never pass caller-supplied
    /// values through here.
    pub fn push_predicate_sql(&mut self, clause: &str) {
        self.sql.push_str(" AND ");
        self.sql.push_str(clause);
    }

    /// Append raw SQL text, such as an ORDER BY or window clause
    ///
    /// The same whitelist-only rule as [`Self::push_predicate_sql`] applies.
    pub fn push_sql(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Register a bind parameter without touching the SQL text
    ///
    /// Used for window parameters whose placeholders arrive via
    /// [`Self::push_sql`]. Fails on a duplicate name.
    pub fn push_param(&mut self, name: &str, value: impl Into<ParamValue>) -> Result<()> {
        if self.params.iter().any(|(existing, _)| existing == name) {
            return Err(Error::Binding(format!(
                "bind parameter `{name}` registered twice"
            )));
        }
        self.params.push((name.to_string(), value.into()));
        Ok(())
    }
}

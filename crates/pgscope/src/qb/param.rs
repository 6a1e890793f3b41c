//! Bound values carried by conditions until the statement is rendered.

use std::fmt;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// One bound value.
///
/// Shared behind an `Arc` so a scoped builder can be cloned and reused as a
/// base for several queries.
#[derive(Clone)]
pub struct Param(Arc<dyn ToSql + Send + Sync>);

impl Param {
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    fn as_sql_arg(&self) -> &(dyn ToSql + Sync) {
        &*self.0
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Param({:?})", self.0)
    }
}

/// The second argument of `COALESCE(column, fallback)`.
#[derive(Clone, Debug)]
pub enum Fallback {
    /// Sent as its own `$n` parameter, placed before the compared value.
    Bound(Param),
    /// SQL text such as `NOW()` or another column, embedded unchanged.
    Literal(String),
}

impl Fallback {
    pub fn value<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Fallback::Bound(Param::new(value))
    }

    /// Embed `sql` verbatim.
    ///
    /// # Warning
    /// The text is not escaped or validated. Only pass SQL you wrote yourself.
    pub fn raw(sql: impl Into<String>) -> Self {
        Fallback::Literal(sql.into())
    }
}

/// Values collected while rendering, in `$1, $2, ...` order.
#[derive(Clone, Debug, Default)]
pub struct ParamList(Vec<Param>);

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `param` and return the placeholder number it was given.
    pub fn bind(&mut self, param: &Param) -> usize {
        self.0.push(param.clone());
        self.0.len()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.0.iter()
    }

    /// Borrow the values in the shape `tokio_postgres` expects.
    pub fn as_args(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.0.iter().map(Param::as_sql_arg).collect()
    }
}

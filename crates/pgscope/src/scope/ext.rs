use crate::qb::{Boolean, CmpOp, Fallback};
use crate::scope::{ColumnSpec, WhereTarget};
use tokio_postgres::types::ToSql;

/// Scope methods available on every [`WhereTarget`].
///
/// Each method appends at most one condition (joined with AND unless stated
/// otherwise) and returns the builder for chaining.
pub trait ScopeExt: WhereTarget + Sized {
    /// Match `value` exactly, or match `''`/NULL when `value` is empty.
    ///
    /// With a batch spec (`[("a", ""), ("b", "x")]`) each pair is applied in
    /// order and `value` is unused. Nothing is added for a value equal to
    /// `ignore`.
    fn or_empty_or_null(
        mut self,
        columns: impl Into<ColumnSpec>,
        value: &str,
        ignore: Option<&str>,
    ) -> Self {
        let exprs = self
            .conditions()
            .empty_or_null_all(columns.into(), value, ignore);
        for expr in exprs {
            self.push_where(Boolean::And, expr);
        }
        self
    }

    /// The delimited-list column contains `value` as one of its entries.
    fn in_delimited_list(mut self, column: &str, value: &str) -> Self {
        let expr = self.conditions().in_delimited_list(column, value);
        self.push_where(Boolean::And, expr);
        self
    }

    /// The delimited-list column does not contain `value` as an entry.
    fn not_in_delimited_list(mut self, column: &str, value: &str) -> Self {
        let expr = self.conditions().not_in_delimited_list(column, value);
        self.push_where(Boolean::And, expr);
        self
    }

    /// column LIKE 'value%'
    fn starts_with(mut self, column: &str, value: &str) -> Self {
        let expr = self.conditions().starts_with(column, value);
        self.push_where(Boolean::And, expr);
        self
    }

    /// column NOT LIKE 'value%'
    fn not_starts_with(mut self, column: &str, value: &str) -> Self {
        let expr = self.conditions().not_starts_with(column, value);
        self.push_where(Boolean::And, expr);
        self
    }

    /// column LIKE '%value'
    fn ends_with(mut self, column: &str, value: &str) -> Self {
        let expr = self.conditions().ends_with(column, value);
        self.push_where(Boolean::And, expr);
        self
    }

    /// column NOT LIKE '%value'
    fn not_ends_with(mut self, column: &str, value: &str) -> Self {
        let expr = self.conditions().not_ends_with(column, value);
        self.push_where(Boolean::And, expr);
        self
    }

    /// column LIKE '%value%'
    fn contains(mut self, column: &str, value: &str) -> Self {
        let expr = self.conditions().contains(column, value);
        self.push_where(Boolean::And, expr);
        self
    }

    /// column NOT LIKE '%value%'
    fn not_contains(mut self, column: &str, value: &str) -> Self {
        let expr = self.conditions().not_contains(column, value);
        self.push_where(Boolean::And, expr);
        self
    }

    /// AND COALESCE(column, fallback) op value
    fn with_null_fallback<T: ToSql + Send + Sync + 'static>(
        mut self,
        column: &str,
        fallback: Fallback,
        op: CmpOp,
        value: T,
    ) -> Self {
        let expr = self.conditions().null_fallback(column, fallback, op, value);
        self.push_where(Boolean::And, expr);
        self
    }

    /// OR COALESCE(column, fallback) op value
    fn or_with_null_fallback<T: ToSql + Send + Sync + 'static>(
        mut self,
        column: &str,
        fallback: Fallback,
        op: CmpOp,
        value: T,
    ) -> Self {
        let expr = self.conditions().null_fallback(column, fallback, op, value);
        self.push_where(Boolean::Or, expr);
        self
    }

    /// AND COALESCE(column, fallback) = value
    fn with_null_fallback_eq<T: ToSql + Send + Sync + 'static>(
        self,
        column: &str,
        fallback: Fallback,
        value: T,
    ) -> Self {
        self.with_null_fallback(column, fallback, CmpOp::Eq, value)
    }

    // ========== Optional value methods ==========

    /// [`starts_with`](Self::starts_with) if `value` is Some.
    fn starts_with_opt(self, column: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.starts_with(column, v),
            None => self,
        }
    }

    /// [`ends_with`](Self::ends_with) if `value` is Some.
    fn ends_with_opt(self, column: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.ends_with(column, v),
            None => self,
        }
    }

    /// [`contains`](Self::contains) if `value` is Some.
    fn contains_opt(self, column: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.contains(column, v),
            None => self,
        }
    }

    /// [`in_delimited_list`](Self::in_delimited_list) if `value` is Some.
    fn in_delimited_list_opt(self, column: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.in_delimited_list(column, v),
            None => self,
        }
    }
}

impl<T: WhereTarget> ScopeExt for T {}

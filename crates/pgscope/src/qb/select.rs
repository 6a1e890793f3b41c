//! The SELECT statement the scopes are applied to.

use crate::client::GenericClient;
use crate::config::ScopeConfig;
use crate::error::{ScopeError, ScopeResult};
use crate::qb::expr::{Boolean, Expr, ExprGroup};
use crate::qb::param::{Param, ParamList};
use crate::scope::{ConditionBuilder, WhereTarget};
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

/// `SELECT <columns> FROM <source> [WHERE ...]`
///
/// `source` is embedded as written, so it may be a table, an alias or a
/// subquery such as `(VALUES ...) AS t(tags)`.
#[derive(Clone, Debug)]
pub struct SelectQb {
    source: String,
    columns: String,
    filters: ExprGroup,
    /// First `where_raw` misuse, reported by [`validate`](Self::validate).
    invalid: Option<String>,
}

impl SelectQb {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            columns: "*".to_string(),
            filters: ExprGroup::new(),
            invalid: None,
        }
    }

    /// Replace the default `*` column list.
    pub fn columns(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    /// Delimiter and case sensitivity for scopes added after this call.
    pub fn scope_config(mut self, config: ScopeConfig) -> Self {
        let conditions = ConditionBuilder::new(config);
        self.filters = std::mem::take(&mut self.filters).with_conditions(conditions);
        self
    }

    pub fn and_where(mut self, expr: Expr) -> Self {
        self.filters.push(Boolean::And, expr);
        self
    }

    pub fn or_where(mut self, expr: Expr) -> Self {
        self.filters.push(Boolean::Or, expr);
        self
    }

    /// AND a parenthesised block built by `f`.
    ///
    /// The block starts with this query's scope configuration:
    ///
    /// ```ignore
    /// qb.where_nested(|g| g.contains("title", "rust").or_empty_or_null("subtitle", "", None))
    /// ```
    pub fn where_nested(mut self, f: impl FnOnce(ExprGroup) -> ExprGroup) -> Self {
        let block = f(self.filters.nested());
        self.filters.push(Boolean::And, block.into_expr());
        self
    }

    /// AND a SQL fragment whose `?` marks are bound to `values` in order.
    ///
    /// A mark/value count mismatch drops the fragment and makes
    /// [`validate`](Self::validate) fail.
    pub fn where_raw<T: ToSql + Send + Sync + 'static>(
        mut self,
        sql: &str,
        values: Vec<T>,
    ) -> Self {
        let marks = sql.matches('?').count();
        if marks != values.len() {
            if self.invalid.is_none() {
                let given = values.len();
                self.invalid = Some(format!("`{sql}` has {marks} `?` but {given} values"));
            }
            return self;
        }
        let params = values.into_iter().map(Param::new).collect();
        self.filters.push(Boolean::And, Expr::template(sql, params));
        self
    }

    /// Number of conditions at the top level of the WHERE clause.
    pub fn where_len(&self) -> usize {
        self.filters.len()
    }

    pub fn validate(&self) -> ScopeResult<()> {
        match &self.invalid {
            Some(msg) => Err(ScopeError::validation(msg.clone())),
            None => Ok(()),
        }
    }

    fn render(&self, columns: &str) -> (String, ParamList) {
        let mut params = ParamList::new();
        let mut sql = format!("SELECT {columns} FROM {}", self.source);
        let filter = self.filters.render(&mut params);
        if !filter.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&filter);
        }
        (sql, params)
    }

    pub fn build(&self) -> (String, ParamList) {
        self.render(&self.columns)
    }

    pub fn to_sql(&self) -> String {
        self.build().0
    }

    pub fn to_count_sql(&self) -> String {
        self.render("COUNT(*)").0
    }

    /// Run the query and return every row.
    pub async fn fetch_all(&self, conn: &impl GenericClient) -> ScopeResult<Vec<Row>> {
        self.validate()?;
        let (sql, params) = self.build();
        log_statement(&sql, &params);
        conn.query(&sql, &params.as_args()).await
    }

    /// Run `SELECT COUNT(*)` with the same conditions.
    pub async fn count(&self, conn: &impl GenericClient) -> ScopeResult<i64> {
        self.validate()?;
        let (sql, params) = self.render("COUNT(*)");
        log_statement(&sql, &params);
        let row = conn.query_one(&sql, &params.as_args()).await?;
        Ok(row.try_get(0)?)
    }
}

impl WhereTarget for SelectQb {
    fn push_where(&mut self, boolean: Boolean, expr: Expr) {
        self.filters.push(boolean, expr);
    }

    fn conditions(&self) -> ConditionBuilder {
        self.filters.conditions()
    }
}

#[cfg(feature = "tracing")]
fn log_statement(sql: &str, params: &ParamList) {
    tracing::debug!(sql, params = params.len(), "running scoped select");
}

#[cfg(not(feature = "tracing"))]
fn log_statement(_sql: &str, _params: &ParamList) {}

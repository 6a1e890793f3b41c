//! Condition construction shared by every [`ScopeExt`](crate::ScopeExt) method.

use crate::config::ScopeConfig;
use crate::ident::quote_ident_segments;
use crate::qb::{Boolean, CmpOp, Expr, Fallback};
use crate::scope::ColumnSpec;
use tokio_postgres::types::ToSql;

/// Produces the [`Expr`] for each scope operation.
///
/// Values are always bound as parameters. The only text spliced into SQL is
/// the column (quoted when it is a plain identifier) and, for the delimited
/// list helpers, the configured delimiter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionBuilder {
    config: ScopeConfig,
}

impl ConditionBuilder {
    pub fn new(config: ScopeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    fn like_op(&self, negated: bool) -> CmpOp {
        match (self.config.case_insensitive, negated) {
            (false, false) => CmpOp::Like,
            (false, true) => CmpOp::NotLike,
            (true, false) => CmpOp::Ilike,
            (true, true) => CmpOp::NotIlike,
        }
    }

    fn pattern(&self, column: &str, pattern: String, negated: bool) -> Expr {
        Expr::compare(column, self.like_op(negated), pattern)
    }

    // ==================== Empty-or-null ====================

    /// `column = value`, or `(column = '' OR column IS NULL)` when `value` is empty.
    pub fn empty_or_null(&self, column: &str, value: &str) -> Expr {
        if value.is_empty() {
            Expr::Group(vec![
                (Boolean::And, Expr::eq(column, String::new())),
                (Boolean::Or, Expr::is_null(column)),
            ])
        } else {
            Expr::eq(column, value.to_string())
        }
    }

    /// Expand a single or batch column spec into empty-or-null conditions.
    ///
    /// For a batch, `value` is unused and each pair supplies its own value.
    /// Pairs whose value equals `ignore` produce nothing.
    pub fn empty_or_null_all(
        &self,
        columns: ColumnSpec,
        value: &str,
        ignore: Option<&str>,
    ) -> Vec<Expr> {
        let skip = |v: &str| ignore.is_some_and(|i| i == v);
        match columns {
            ColumnSpec::Single(column) => {
                if skip(value) {
                    Vec::new()
                } else {
                    vec![self.empty_or_null(&column, value)]
                }
            }
            ColumnSpec::Batch(pairs) => pairs
                .iter()
                .filter(|(_, v)| !skip(v.as_str()))
                .map(|(column, v)| self.empty_or_null(column, v))
                .collect(),
        }
    }

    // ==================== Delimited lists ====================

    /// The column wrapped in delimiters: `(',' || "tags" || ',')`.
    fn delimited_column(&self, column: &str) -> String {
        let delimiter = sql_char_literal(self.config.delimiter);
        format!("({delimiter} || {} || {delimiter})", quote_ident_segments(column))
    }

    fn delimited(&self, column: &str, value: &str, negated: bool) -> Expr {
        let d = self.config.delimiter;
        Expr::compare(
            self.delimited_column(column),
            self.like_op(negated),
            format!("%{d}{value}{d}%"),
        )
    }

    /// `column` (a delimited list such as `a,b,c`) contains `value` as an entry.
    pub fn in_delimited_list(&self, column: &str, value: &str) -> Expr {
        self.delimited(column, value, false)
    }

    /// `column` (a delimited list) does not contain `value` as an entry.
    pub fn not_in_delimited_list(&self, column: &str, value: &str) -> Expr {
        self.delimited(column, value, true)
    }

    // ==================== Pattern matching ====================

    pub fn starts_with(&self, column: &str, value: &str) -> Expr {
        self.pattern(column, format!("{value}%"), false)
    }

    pub fn not_starts_with(&self, column: &str, value: &str) -> Expr {
        self.pattern(column, format!("{value}%"), true)
    }

    pub fn ends_with(&self, column: &str, value: &str) -> Expr {
        self.pattern(column, format!("%{value}"), false)
    }

    pub fn not_ends_with(&self, column: &str, value: &str) -> Expr {
        self.pattern(column, format!("%{value}"), true)
    }

    pub fn contains(&self, column: &str, value: &str) -> Expr {
        self.pattern(column, format!("%{value}%"), false)
    }

    pub fn not_contains(&self, column: &str, value: &str) -> Expr {
        self.pattern(column, format!("%{value}%"), true)
    }

    // ==================== Null fallback ====================

    /// `COALESCE(column, fallback) op value`.
    pub fn null_fallback<T: ToSql + Send + Sync + 'static>(
        &self,
        column: &str,
        fallback: Fallback,
        op: CmpOp,
        value: T,
    ) -> Expr {
        Expr::coalesce(column, fallback, op, value)
    }
}

/// Render `c` as a SQL string literal.
fn sql_char_literal(c: char) -> String {
    if c == '\'' {
        "''''".to_string()
    } else {
        format!("'{c}'")
    }
}

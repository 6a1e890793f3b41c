//! Condition nodes and the connective-aware list a WHERE clause is made of.
//!
//! Rendering walks the nodes in order and numbers `$n` placeholders as values
//! are bound, so the parameter list always lines up with the SQL text.

use crate::error::ScopeError;
use crate::qb::param::{Fallback, Param, ParamList};
use crate::scope::ConditionBuilder;
use std::str::FromStr;
use tokio_postgres::types::ToSql;

/// How a condition attaches to the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boolean {
    And,
    Or,
}

impl Boolean {
    fn keyword(self) -> &'static str {
        match self {
            Boolean::And => " AND ",
            Boolean::Or => " OR ",
        }
    }
}

/// Comparison operator between a column (or expression) and a bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    NotLike,
    Ilike,
    NotIlike,
}

impl CmpOp {
    pub fn as_sql(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "!=",
            CmpOp::Gt => ">",
            CmpOp::Gte => ">=",
            CmpOp::Lt => "<",
            CmpOp::Lte => "<=",
            CmpOp::Like => "LIKE",
            CmpOp::NotLike => "NOT LIKE",
            CmpOp::Ilike => "ILIKE",
            CmpOp::NotIlike => "NOT ILIKE",
        }
    }
}

/// Accepts the SQL spelling. Keywords ignore case and inner whitespace;
/// `<>` is read as `!=`.
impl FromStr for CmpOp {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<String> = s.split_whitespace().map(str::to_ascii_uppercase).collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        Ok(match words.as_slice() {
            ["="] => CmpOp::Eq,
            ["!="] | ["<>"] => CmpOp::Ne,
            [">"] => CmpOp::Gt,
            [">="] => CmpOp::Gte,
            ["<"] => CmpOp::Lt,
            ["<="] => CmpOp::Lte,
            ["LIKE"] => CmpOp::Like,
            ["NOT", "LIKE"] => CmpOp::NotLike,
            ["ILIKE"] => CmpOp::Ilike,
            ["NOT", "ILIKE"] => CmpOp::NotIlike,
            _ => return Err(ScopeError::validation(format!("unknown operator `{s}`"))),
        })
    }
}

/// A single WHERE condition.
#[derive(Clone, Debug)]
pub enum Expr {
    /// `column op $n`. The column is any SQL expression, embedded as given.
    Compare {
        column: String,
        op: CmpOp,
        value: Param,
    },
    /// `column IS NULL` / `column IS NOT NULL`
    NullCheck { column: String, negated: bool },
    /// `COALESCE(column, fallback) op $n`
    Coalesce {
        column: String,
        fallback: Fallback,
        op: CmpOp,
        value: Param,
    },
    /// SQL text whose `?` marks are replaced by `$n` for `params`, in order.
    Template { sql: String, params: Vec<Param> },
    /// Parenthesised conditions with their own connectives.
    Group(Vec<(Boolean, Expr)>),
}

impl Expr {
    pub fn compare<T: ToSql + Send + Sync + 'static>(
        column: impl Into<String>,
        op: CmpOp,
        value: T,
    ) -> Self {
        Expr::Compare {
            column: column.into(),
            op,
            value: Param::new(value),
        }
    }

    pub fn eq<T: ToSql + Send + Sync + 'static>(column: impl Into<String>, value: T) -> Self {
        Self::compare(column, CmpOp::Eq, value)
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        Expr::NullCheck {
            column: column.into(),
            negated: false,
        }
    }

    pub fn is_not_null(column: impl Into<String>) -> Self {
        Expr::NullCheck {
            column: column.into(),
            negated: true,
        }
    }

    pub fn coalesce<T: ToSql + Send + Sync + 'static>(
        column: impl Into<String>,
        fallback: Fallback,
        op: CmpOp,
        value: T,
    ) -> Self {
        Expr::Coalesce {
            column: column.into(),
            fallback,
            op,
            value: Param::new(value),
        }
    }

    pub fn template(sql: impl Into<String>, params: Vec<Param>) -> Self {
        Expr::Template {
            sql: sql.into(),
            params,
        }
    }

    /// Render into SQL text, binding values onto `params`.
    ///
    /// An empty group renders as the empty string.
    pub fn render(&self, params: &mut ParamList) -> String {
        match self {
            Expr::Compare { column, op, value } => {
                format!("{column} {} ${}", op.as_sql(), params.bind(value))
            }
            Expr::NullCheck { column, negated } => {
                let not = if *negated { " NOT" } else { "" };
                format!("{column} IS{not} NULL")
            }
            Expr::Coalesce {
                column,
                fallback,
                op,
                value,
            } => {
                let fallback = match fallback {
                    Fallback::Bound(p) => format!("${}", params.bind(p)),
                    Fallback::Literal(sql) => sql.clone(),
                };
                let n = params.bind(value);
                format!("COALESCE({column}, {fallback}) {} ${n}", op.as_sql())
            }
            Expr::Template { sql, params: values } => {
                let mut values = values.iter();
                let mut out = String::with_capacity(sql.len());
                for ch in sql.chars() {
                    let bound = if ch == '?' { values.next() } else { None };
                    match bound {
                        Some(p) => out.push_str(&format!("${}", params.bind(p))),
                        None => out.push(ch),
                    }
                }
                out
            }
            Expr::Group(items) => match render_items(items, params) {
                sql if sql.is_empty() => sql,
                sql => format!("({sql})"),
            },
        }
    }
}

/// Join rendered items with their connectives. The first item's connective is
/// not emitted and empty items are dropped.
fn render_items(items: &[(Boolean, Expr)], params: &mut ParamList) -> String {
    let mut sql = String::new();
    for (boolean, expr) in items {
        let part = expr.render(params);
        if part.is_empty() {
            continue;
        }
        if !sql.is_empty() {
            sql.push_str(boolean.keyword());
        }
        sql.push_str(&part);
    }
    sql
}

/// Ordered WHERE conditions plus the [`ConditionBuilder`] scope helpers on
/// this group should use.
#[derive(Clone, Debug, Default)]
pub struct ExprGroup {
    items: Vec<(Boolean, Expr)>,
    conditions: ConditionBuilder,
}

impl ExprGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conditions(mut self, conditions: ConditionBuilder) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn conditions(&self) -> ConditionBuilder {
        self.conditions
    }

    /// An empty group with the same condition builder, for `( ... )` blocks.
    pub fn nested(&self) -> Self {
        Self::new().with_conditions(self.conditions)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, boolean: Boolean, expr: Expr) {
        self.items.push((boolean, expr));
    }

    /// Render without the `WHERE` keyword, continuing `params` numbering.
    pub fn render(&self, params: &mut ParamList) -> String {
        render_items(&self.items, params)
    }

    pub fn build(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        let sql = self.render(&mut params);
        (sql, params)
    }

    pub fn into_expr(self) -> Expr {
        Expr::Group(self.items)
    }
}

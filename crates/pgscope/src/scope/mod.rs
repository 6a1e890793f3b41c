//! Chainable WHERE-clause scopes.
//!
//! [`WhereTarget`] is what a query builder must provide (append an expression
//! with a connective). [`ScopeExt`] is implemented for every `WhereTarget` and
//! adds the scope methods:
//!
//! ```ignore
//! use pgscope::prelude::*;
//!
//! let qb = pgscope::qb::select("posts")
//!     .starts_with("title", "Rust")
//!     .in_delimited_list("tags", "async")
//!     .or_empty_or_null("subtitle", "", None)
//!     .with_null_fallback("score", Fallback::value(0i32), CmpOp::Gte, 10i32);
//! ```
//!
//! [`ConditionBuilder`] exposes the same operations as plain constructors
//! returning [`Expr`], for callers that assemble conditions themselves.

mod column;
mod condition;
mod ext;

pub use column::ColumnSpec;
pub use condition::ConditionBuilder;
pub use ext::ScopeExt;

use crate::qb::{Boolean, Expr, ExprGroup};

/// A query builder that accepts WHERE conditions.
pub trait WhereTarget {
    /// Append `expr`, joined to the existing conditions with `boolean`.
    fn push_where(&mut self, boolean: Boolean, expr: Expr);

    /// The condition builder scope helpers should use for this target.
    fn conditions(&self) -> ConditionBuilder {
        ConditionBuilder::default()
    }
}

impl WhereTarget for ExprGroup {
    fn push_where(&mut self, boolean: Boolean, expr: Expr) {
        self.push(boolean, expr);
    }

    fn conditions(&self) -> ConditionBuilder {
        ExprGroup::conditions(self)
    }
}

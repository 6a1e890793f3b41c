//! Minimal PostgreSQL host for the scopes: a condition tree, bound
//! parameters and one SELECT statement.
//!
//! ```ignore
//! use pgscope::prelude::*;
//!
//! let recent = qb::select("posts")
//!     .contains("title", "tokio")
//!     .with_null_fallback("archived", Fallback::value(false), CmpOp::Eq, false)
//!     .fetch_all(&client)
//!     .await?;
//! ```

mod expr;
mod param;
mod select;

pub use expr::{Boolean, CmpOp, Expr, ExprGroup};
pub use param::{Fallback, Param, ParamList};
pub use select::SelectQb;

/// Start a SELECT over a table or any FROM expression.
pub fn select(source: &str) -> SelectQb {
    SelectQb::new(source)
}

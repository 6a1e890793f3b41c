//! # pgscope
//!
//! Chainable WHERE-clause scopes for PostgreSQL query builders.
//!
//! ## Features
//!
//! - **Pattern scopes**: `starts_with`, `ends_with`, `contains` and their negations
//! - **Delimited lists**: match one entry of a `a,b,c` text column
//! - **Null fallback**: compare `COALESCE(column, fallback)` against a value
//! - **Empty-or-null**: treat `''` and NULL alike, for one column or a batch
//! - **Bound values**: every value is sent as a `$n` parameter
//! - **Runs anywhere**: `SelectQb` executes on a client, a transaction or a pooled client
//!
//! ## Usage
//!
//! ```ignore
//! use pgscope::prelude::*;
//!
//! let rows = qb::select("posts")
//!     .and_where(Expr::eq("status", "published"))
//!     .starts_with("title", "Rust")
//!     .in_delimited_list("tags", "async")
//!     .or_empty_or_null("subtitle", "", None)
//!     .with_null_fallback("score", Fallback::value(0i32), CmpOp::Gte, 10i32)
//!     .fetch_all(&client)
//!     .await?;
//! ```
//!
//! Any builder implementing [`WhereTarget`] gets the scope methods through
//! [`ScopeExt`].

pub mod client;
pub mod config;
pub mod error;
pub mod ident;
pub mod prelude;
pub mod qb;
pub mod scope;

pub use client::GenericClient;
pub use config::ScopeConfig;
pub use error::{ScopeError, ScopeResult};
pub use ident::{is_plain_ident, quote_ident_segments};
pub use scope::{ColumnSpec, ConditionBuilder, ScopeExt, WhereTarget};

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{create_pool, create_pool_with_config};

pub use qb::{Boolean, CmpOp, Expr, ExprGroup, Fallback, Param, ParamList, SelectQb, select};

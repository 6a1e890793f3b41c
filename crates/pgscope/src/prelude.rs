//! Convenient imports for typical `pgscope` usage.
//!
//! ```ignore
//! use pgscope::prelude::*;
//! ```

pub use crate::{GenericClient, ScopeConfig, ScopeError, ScopeResult, qb};

pub use crate::{CmpOp, ColumnSpec, Expr, Fallback, ScopeExt, WhereTarget};

#[cfg(feature = "pool")]
pub use crate::{create_pool, create_pool_with_config};

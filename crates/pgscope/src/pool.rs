//! Connection pools whose clients run scoped queries directly.

use crate::error::{ScopeError, ScopeResult};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use tokio_postgres::NoTls;

/// A `NoTls` pool of up to 16 connections.
///
/// ```ignore
/// let pool = pgscope::create_pool(&database_url)?;
/// let client = pool.get().await?;
/// let n = pgscope::select("posts").contains("title", "rust").count(&client).await?;
/// ```
pub fn create_pool(database_url: &str) -> ScopeResult<Pool> {
    create_pool_with_config(database_url, 16)
}

/// A `NoTls` pool of up to `max_size` connections. Nothing connects until the
/// first `get()`.
pub fn create_pool_with_config(database_url: &str, max_size: usize) -> ScopeResult<Pool> {
    let config = database_url
        .parse::<tokio_postgres::Config>()
        .map_err(|e| ScopeError::Connection(e.to_string()))?;
    let manager = Manager::from_config(
        config,
        NoTls,
        ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        },
    );
    Pool::builder(manager)
        .max_size(max_size)
        .build()
        .map_err(|e| ScopeError::Pool(e.to_string()))
}

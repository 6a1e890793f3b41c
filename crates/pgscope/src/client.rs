//! The connection capability `SelectQb` executes on.

use crate::error::{ScopeError, ScopeResult};
use std::future::Future;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

type Args<'a> = &'a [&'a (dyn ToSql + Sync)];

/// Anything that can run a parameterised query: a client, a transaction, or
/// (with the `pool` feature) their pooled counterparts.
pub trait GenericClient: Send + Sync {
    fn query(
        &self,
        sql: &str,
        args: Args<'_>,
    ) -> impl Future<Output = ScopeResult<Vec<Row>>> + Send;

    /// First row of the result; [`ScopeError::NotFound`] when there is none.
    fn query_one(
        &self,
        sql: &str,
        args: Args<'_>,
    ) -> impl Future<Output = ScopeResult<Row>> + Send {
        async move {
            let mut rows = self.query(sql, args).await?.into_iter();
            rows.next().ok_or_else(|| ScopeError::NotFound(format!("no row returned by `{sql}`")))
        }
    }
}

macro_rules! delegate_to_tokio_postgres {
    ($($client:ty),+ $(,)?) => {$(
        impl GenericClient for $client {
            async fn query(&self, sql: &str, args: Args<'_>) -> ScopeResult<Vec<Row>> {
                Ok(<$client>::query(self, sql, args).await?)
            }
        }
    )+};
}

delegate_to_tokio_postgres!(tokio_postgres::Client, tokio_postgres::Transaction<'_>);

// Pooled types deref to the tokio_postgres ones above.
#[cfg(feature = "pool")]
macro_rules! delegate_through_deref {
    ($($client:ty),+ $(,)?) => {$(
        impl GenericClient for $client {
            async fn query(&self, sql: &str, args: Args<'_>) -> ScopeResult<Vec<Row>> {
                GenericClient::query(&**self, sql, args).await
            }
        }
    )+};
}

#[cfg(feature = "pool")]
delegate_through_deref!(
    deadpool_postgres::Client,
    deadpool_postgres::ClientWrapper,
    deadpool_postgres::Transaction<'_>,
);

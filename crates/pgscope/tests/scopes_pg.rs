//! Scope helpers checked against a live PostgreSQL.
//!
//! Skipped unless `DATABASE_URL` is set (a `.env` file is honoured).

use pgscope::{CmpOp, Expr, Fallback, ScopeExt, ScopeResult, SelectQb, select};
use tokio_postgres::{Client, NoTls};

const TAGS: &str = "(VALUES ('a,b,c'), ('b'), ('x,y'), (''), (NULL)) AS t(tags)";

async fn connect(test: &str) -> ScopeResult<Option<Client>> {
    dotenvy::dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("DATABASE_URL is not set; skipping {test}");
            return Ok(None);
        }
    };

    let (client, connection) = tokio_postgres::connect(&database_url, NoTls).await?;
    tokio::spawn(async move {
        let _ = connection.await;
    });
    Ok(Some(client))
}

fn tags() -> SelectQb {
    select(TAGS)
}

async fn non_null_rows(client: &Client) -> ScopeResult<i64> {
    tags()
        .and_where(Expr::is_not_null("tags"))
        .count(client)
        .await
}

#[tokio::test]
async fn starts_with_is_complement_of_not_starts_with() -> ScopeResult<()> {
    let Some(client) = connect("starts_with_is_complement_of_not_starts_with").await? else {
        return Ok(());
    };

    for prefix in ["a", "b", "x,", "z"] {
        let hit = tags().starts_with("tags", prefix).count(&client).await?;
        let miss = tags().not_starts_with("tags", prefix).count(&client).await?;
        assert_eq!(hit + miss, non_null_rows(&client).await?, "prefix {prefix:?}");
    }

    assert_eq!(tags().starts_with("tags", "a").count(&client).await?, 1);
    Ok(())
}

#[tokio::test]
async fn contains_is_complement_of_not_contains() -> ScopeResult<()> {
    let Some(client) = connect("contains_is_complement_of_not_contains").await? else {
        return Ok(());
    };

    for needle in ["b", ",", "y", "q"] {
        let hit = tags().contains("tags", needle).count(&client).await?;
        let miss = tags().not_contains("tags", needle).count(&client).await?;
        assert_eq!(hit + miss, non_null_rows(&client).await?, "needle {needle:?}");
    }

    assert_eq!(tags().ends_with("tags", "c").count(&client).await?, 1);
    assert_eq!(tags().not_ends_with("tags", "c").count(&client).await?, 3);
    Ok(())
}

#[tokio::test]
async fn in_delimited_list_is_complement_of_not_in() -> ScopeResult<()> {
    let Some(client) = connect("in_delimited_list_is_complement_of_not_in").await? else {
        return Ok(());
    };

    for entry in ["a", "b", "y", "a,b", "q"] {
        let hit = tags().in_delimited_list("tags", entry).count(&client).await?;
        let miss = tags()
            .not_in_delimited_list("tags", entry)
            .count(&client)
            .await?;
        assert_eq!(hit + miss, non_null_rows(&client).await?, "entry {entry:?}");
    }

    // 'a,b,c' and 'b' both list `b`; 'x,y' does not match the partial `x,`.
    let listed = tags().in_delimited_list("tags", "b").count(&client).await?;
    assert_eq!(listed, 2);
    let partial = tags().in_delimited_list("tags", "x,").count(&client).await?;
    assert_eq!(partial, 0);
    Ok(())
}

#[tokio::test]
async fn empty_or_null_matches_empty_and_null_only() -> ScopeResult<()> {
    let Some(client) = connect("empty_or_null_matches_empty_and_null_only").await? else {
        return Ok(());
    };

    let empty = tags()
        .or_empty_or_null("tags", "", None)
        .count(&client)
        .await?;
    assert_eq!(empty, 2);

    let exact = tags()
        .or_empty_or_null("tags", "b", None)
        .count(&client)
        .await?;
    assert_eq!(exact, 1);

    let ignored = tags()
        .or_empty_or_null("tags", "", Some(""))
        .count(&client)
        .await?;
    assert_eq!(ignored, 5);
    Ok(())
}

#[tokio::test]
async fn null_fallback_against_postgres() -> ScopeResult<()> {
    let Some(client) = connect("null_fallback_against_postgres").await? else {
        return Ok(());
    };

    let scores = "(VALUES (1), (5), (NULL::int)) AS t(score)";
    let bound = select(scores)
        .with_null_fallback("score", Fallback::value(0i32), CmpOp::Lt, 2i32)
        .count(&client)
        .await?;
    assert_eq!(bound, 2);

    let literal = select(scores)
        .with_null_fallback("score", Fallback::raw("10"), CmpOp::Gte, 5i32)
        .count(&client)
        .await?;
    assert_eq!(literal, 2);
    Ok(())
}

#[cfg(feature = "pool")]
#[tokio::test]
async fn timestamp_fallback_on_pooled_transaction() -> ScopeResult<()> {
    use chrono::{Duration, Utc};

    dotenvy::dotenv().ok();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL is not set; skipping timestamp_fallback_on_pooled_transaction");
        return Ok(());
    };

    let pool = pgscope::create_pool(&database_url)?;
    let mut client = pool.get().await?;
    let tx = client.transaction().await?;

    let now = Utc::now();
    let sessions = "(VALUES \
        (now() - interval '1 day'), \
        (now() + interval '1 day'), \
        (NULL::timestamptz)) AS s(expires_at)";

    // A NULL expiry falls back to the epoch, so it counts as expired.
    let expired = select(sessions)
        .with_null_fallback("expires_at", Fallback::raw("'epoch'::timestamptz"), CmpOp::Lt, now)
        .count(&tx)
        .await?;
    assert_eq!(expired, 2);

    // A bound fallback far in the future keeps NULL rows alive.
    let alive = select(sessions)
        .with_null_fallback(
            "expires_at",
            Fallback::value(now + Duration::days(365)),
            CmpOp::Gte,
            now,
        )
        .count(&tx)
        .await?;
    assert_eq!(alive, 2);

    tx.rollback().await?;
    Ok(())
}

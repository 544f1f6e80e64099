use async_trait::async_trait;
use pagevisits_application::ports::UrlRegistry;
use pagevisits_domain::{CanonicalUrl, DomainError, PageUrl};
use sqlx::{SqliteConnection, SqlitePool};
use std::sync::Arc;
use tracing::{error, instrument};

use super::timestamps::{format_timestamp, now_stored, parse_timestamp};

type UrlRow = (i64, String, String);

/// Lookup-or-create inside an open transaction. The insert is a no-op when the
/// URL exists, so the loser of a concurrent first insert reads the winner's row.
pub(crate) async fn resolve_or_create_in(
    conn: &mut SqliteConnection,
    url: &str,
) -> Result<i64, sqlx::Error> {
    let now = format_timestamp(now_stored());

    sqlx::query("INSERT INTO urls (url, created_at) VALUES (?, ?) ON CONFLICT(url) DO NOTHING")
        .bind(url)
        .bind(&now)
        .execute(&mut *conn)
        .await?;

    sqlx::query_scalar::<_, i64>("SELECT id FROM urls WHERE url = ?")
        .bind(url)
        .fetch_one(&mut *conn)
        .await
}

pub struct SqliteUrlRegistry {
    write_pool: SqlitePool,
    read_pool: SqlitePool,
}

impl SqliteUrlRegistry {
    pub fn new(write_pool: SqlitePool, read_pool: SqlitePool) -> Self {
        Self {
            write_pool,
            read_pool,
        }
    }

    fn row_to_page_url(row: UrlRow) -> Result<PageUrl, DomainError> {
        let (id, url, created_at) = row;
        Ok(PageUrl {
            id,
            url: Arc::from(url.as_str()),
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl UrlRegistry for SqliteUrlRegistry {
    #[instrument(skip(self))]
    async fn resolve_or_create(&self, url: &CanonicalUrl) -> Result<i64, DomainError> {
        let mut tx = self.write_pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin URL resolve transaction");
            DomainError::Storage(e.to_string())
        })?;

        let id = resolve_or_create_in(&mut *tx, url.as_str())
            .await
            .map_err(|e| {
                error!(error = %e, url = %url, "Failed to resolve URL");
                DomainError::Storage(e.to_string())
            })?;

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit URL resolve transaction");
            DomainError::Storage(e.to_string())
        })?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find(&self, url: &CanonicalUrl) -> Result<Option<PageUrl>, DomainError> {
        let row = sqlx::query_as::<_, UrlRow>("SELECT id, url, created_at FROM urls WHERE url = ?")
            .bind(url.as_str())
            .fetch_optional(&self.read_pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query URL");
                DomainError::Storage(e.to_string())
            })?;

        row.map(Self::row_to_page_url).transpose()
    }
}

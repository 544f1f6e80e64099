use pagevisits_domain::{CanonicalUrl, DomainError, PageRequest, Visit, VisitMetrics};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

use super::helpers::{row_to_visit, VisitRow, VISIT_COLUMNS};

#[instrument(skip(pool))]
pub(super) async fn query_by_url(
    pool: &SqlitePool,
    url: &CanonicalUrl,
    page: PageRequest,
) -> Result<(Vec<Visit>, u64), DomainError> {
    let total = count_by_url(pool, url).await?;
    if total == 0 {
        return Ok((Vec::new(), 0));
    }

    let sql = format!(
        "SELECT {}
         FROM visits v
         JOIN urls u ON u.id = v.url_id
         WHERE u.url = ?
         ORDER BY v.visited_at DESC, v.id DESC
         LIMIT ? OFFSET ?",
        VISIT_COLUMNS
    );

    let rows = sqlx::query_as::<_, VisitRow>(&sql)
        .bind(url.as_str())
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query visit history");
            DomainError::Storage(e.to_string())
        })?;

    let items = rows
        .into_iter()
        .map(row_to_visit)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(returned = items.len(), total, "Visit history fetched");
    Ok((items, total))
}

#[instrument(skip(pool))]
pub(super) async fn latest_by_url(
    pool: &SqlitePool,
    url: &CanonicalUrl,
) -> Result<Option<Visit>, DomainError> {
    let sql = format!(
        "SELECT {}
         FROM visits v
         JOIN urls u ON u.id = v.url_id
         WHERE u.url = ?
         ORDER BY v.visited_at DESC, v.id DESC
         LIMIT 1",
        VISIT_COLUMNS
    );

    let row = sqlx::query_as::<_, VisitRow>(&sql)
        .bind(url.as_str())
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query latest visit");
            DomainError::Storage(e.to_string())
        })?;

    row.map(row_to_visit).transpose()
}

#[instrument(skip(pool))]
pub(super) async fn metrics_by_url(
    pool: &SqlitePool,
    url: &CanonicalUrl,
) -> Result<VisitMetrics, DomainError> {
    let total_visits = count_by_url(pool, url).await?;
    Ok(VisitMetrics { total_visits })
}

async fn count_by_url(pool: &SqlitePool, url: &CanonicalUrl) -> Result<u64, DomainError> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM visits v JOIN urls u ON u.id = v.url_id WHERE u.url = ?",
    )
    .bind(url.as_str())
    .fetch_one(pool)
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to count visits");
        DomainError::Storage(e.to_string())
    })?;

    Ok(count.max(0) as u64)
}

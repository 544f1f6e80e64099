use pagevisits_domain::{DomainError, NewVisit, Visit};
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;
use tracing::{debug, error, instrument};

use crate::repositories::timestamps::{format_timestamp, now_stored, stored_precision};
use crate::repositories::url_registry::resolve_or_create_in;

async fn insert_row(
    conn: &mut SqliteConnection,
    url_id: i64,
    visit: &NewVisit,
    visited_at: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO visits (url_id, title, description, visited_at, link_count, word_count, image_count)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
    )
    .bind(url_id)
    .bind(visit.title.as_deref())
    .bind(visit.description.as_deref())
    .bind(visited_at)
    .bind(i64::from(visit.counts.link_count))
    .bind(i64::from(visit.counts.word_count))
    .bind(i64::from(visit.counts.image_count))
    .fetch_one(conn)
    .await
}

#[instrument(skip(pool, visit), fields(url = %visit.url))]
pub(super) async fn insert_one(
    pool: &SqlitePool,
    url_id: i64,
    visit: &NewVisit,
) -> Result<Visit, DomainError> {
    let visited_at = visit.visited_at.map_or_else(now_stored, stored_precision);

    let mut conn = pool.acquire().await.map_err(|e| {
        error!(error = %e, "Failed to acquire connection for visit insert");
        DomainError::Storage(e.to_string())
    })?;

    let id = insert_row(&mut *conn, url_id, visit, &format_timestamp(visited_at))
        .await
        .map_err(|e| {
            error!(error = %e, url_id, "Failed to insert visit");
            DomainError::Storage(e.to_string())
        })?;

    Ok(Visit {
        id,
        url_id,
        url: visit.url.as_arc(),
        title: visit.title.clone(),
        description: visit.description.clone(),
        visited_at,
        counts: visit.counts,
    })
}

#[instrument(skip(pool, visits), fields(batch_size = visits.len()))]
pub(super) async fn insert_batch(pool: &SqlitePool, visits: &[NewVisit]) -> Result<u64, DomainError> {
    if visits.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await.map_err(|e| {
        error!(error = %e, "Failed to begin transaction for visit batch");
        DomainError::Storage(e.to_string())
    })?;

    let mut url_ids: HashMap<&str, i64> = HashMap::new();
    let mut resolved = Vec::with_capacity(visits.len());
    for visit in visits {
        let url = visit.url.as_str();
        let id = match url_ids.get(url).copied() {
            Some(id) => id,
            None => {
                let id = resolve_or_create_in(&mut *tx, url).await.map_err(|e| {
                    error!(error = %e, url, "Failed to resolve URL in visit batch");
                    DomainError::Storage(e.to_string())
                })?;
                url_ids.insert(url, id);
                id
            }
        };
        resolved.push(id);
    }
    debug!(distinct_urls = url_ids.len(), "Resolved batch URLs");

    let now = now_stored();
    let mut created = 0u64;
    for (index, (visit, url_id)) in visits.iter().zip(resolved).enumerate() {
        let visited_at = format_timestamp(visit.visited_at.map_or(now, stored_precision));
        insert_row(&mut *tx, url_id, visit, &visited_at)
            .await
            .map_err(|e| {
                error!(error = %e, index, "Failed to insert visit in batch, rolling back");
                DomainError::Storage(e.to_string())
            })?;
        created += 1;
    }

    tx.commit().await.map_err(|e| {
        error!(error = %e, "Failed to commit visit batch");
        DomainError::Storage(e.to_string())
    })?;

    Ok(created)
}

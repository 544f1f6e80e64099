use pagevisits_domain::{DomainError, PageCounts, Visit};
use std::sync::Arc;

use crate::repositories::timestamps::parse_timestamp;

pub(super) type VisitRow = (
    i64,
    i64,
    String,
    Option<String>,
    Option<String>,
    String,
    i64,
    i64,
    i64,
);

pub(super) const VISIT_COLUMNS: &str = "v.id, v.url_id, u.url, v.title, v.description, v.visited_at,
                v.link_count, v.word_count, v.image_count";

pub(super) fn row_to_visit(row: VisitRow) -> Result<Visit, DomainError> {
    let (id, url_id, url, title, description, visited_at, link_count, word_count, image_count) =
        row;

    Ok(Visit {
        id,
        url_id,
        url: Arc::from(url.as_str()),
        title: title.map(|s| Arc::from(s.as_str())),
        description: description.map(|s| Arc::from(s.as_str())),
        visited_at: parse_timestamp(&visited_at)?,
        counts: PageCounts::new(
            count_from_column(link_count),
            count_from_column(word_count),
            count_from_column(image_count),
        ),
    })
}

// CHECK constraints keep stored counts within u32.
fn count_from_column(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

use std::sync::Arc;

use crate::errors::ValidationErrors;
use crate::page_url::CanonicalUrl;
use crate::sanitize::sanitize_optional;
use crate::visit::{
    NewVisit, PageCounts, VisitSubmission, MAX_DESCRIPTION_LENGTH, MAX_IMAGE_COUNT,
    MAX_LINK_COUNT, MAX_TITLE_LENGTH, MAX_WORD_COUNT,
};

impl VisitSubmission {
    /// Canonicalizes the URL, sanitizes the text fields and bounds-checks the
    /// counts. Every violated field is reported, not only the first one.
    pub fn normalize(&self) -> Result<NewVisit, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let url = match CanonicalUrl::parse(&self.url) {
            Ok(url) => Some(url),
            Err(url_errors) => {
                for v in url_errors.violations() {
                    errors.push(v.field.clone(), v.code, v.message.clone());
                }
                None
            }
        };

        let title = bounded_text(&mut errors, "title", self.title.as_deref(), MAX_TITLE_LENGTH);
        let description = bounded_text(
            &mut errors,
            "description",
            self.description.as_deref(),
            MAX_DESCRIPTION_LENGTH,
        );

        let link_count = bounded_count(&mut errors, "link_count", self.link_count, MAX_LINK_COUNT);
        let word_count = bounded_count(&mut errors, "word_count", self.word_count, MAX_WORD_COUNT);
        let image_count =
            bounded_count(&mut errors, "image_count", self.image_count, MAX_IMAGE_COUNT);

        match url {
            Some(url) if errors.is_empty() => Ok(NewVisit {
                url,
                title,
                description,
                counts: PageCounts::new(link_count, word_count, image_count),
                visited_at: None,
            }),
            _ => Err(errors),
        }
    }
}

fn bounded_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: Option<&str>,
    max_chars: usize,
) -> Option<Arc<str>> {
    let sanitized = sanitize_optional(raw)?;
    if sanitized.chars().count() > max_chars {
        errors.push(
            field,
            "too_long",
            format!("{} cannot exceed {} characters", field, max_chars),
        );
        return None;
    }
    Some(Arc::from(sanitized))
}

fn bounded_count(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: Option<i64>,
    max: i64,
) -> u32 {
    let value = raw.unwrap_or(0);
    if value < 0 {
        errors.push(field, "negative", format!("{} must be greater than or equal to 0", field));
        return 0;
    }
    if value > max {
        errors.push(
            field,
            "too_large",
            format!("{} must be less than or equal to {}", field, max),
        );
        return 0;
    }
    // max bounds all fit in u32
    value as u32
}

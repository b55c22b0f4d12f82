// src/application/queries/slugs/active.rs
use super::SlugQueryService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::cache::PrefetchedSlugCache,
    },
    domain::seo::{LanguageId, UrlRecordRepository},
};

pub struct GetActiveSlugQuery {
    pub entity_id: i64,
    pub entity_name: String,
    pub language_id: Option<i32>,
}

impl SlugQueryService {
    pub async fn get_active_slug(
        &self,
        query: GetActiveSlugQuery,
        prefetch: Option<&dyn PrefetchedSlugCache>,
    ) -> ApplicationResult<String> {
        let language_id = query
            .language_id
            .map(LanguageId::new)
            .transpose()?
            .unwrap_or(LanguageId::NEUTRAL);

        lookup_active_slug(
            self.repo.as_ref(),
            prefetch,
            query.entity_id,
            &query.entity_name,
            language_id,
        )
        .await
    }
}

/// Prefetched slug if available, otherwise a direct store read. The result of
/// the direct read is not cached.
pub(crate) async fn lookup_active_slug(
    repo: &dyn UrlRecordRepository,
    prefetch: Option<&dyn PrefetchedSlugCache>,
    entity_id: i64,
    entity_name: &str,
    language_id: LanguageId,
) -> ApplicationResult<String> {
    if entity_name.trim().is_empty() {
        return Err(ApplicationError::validation("entity name cannot be empty"));
    }

    if let Some(slug) =
        prefetch.and_then(|cache| cache.try_get_active_slug(entity_id, entity_name, language_id))
    {
        return Ok(slug);
    }

    let record = repo.find_active(entity_id, entity_name, language_id).await?;
    Ok(record.map(|r| r.slug).unwrap_or_default())
}

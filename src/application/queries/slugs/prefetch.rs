// src/application/queries/slugs/prefetch.rs
use super::SlugQueryService;
use crate::{
    application::{error::ApplicationResult, ports::cache::PrefetchedSlugCache},
    domain::seo::LanguageId,
};

pub struct PrefetchUrlRecordsQuery {
    pub entity_name: String,
    pub entity_ids: Vec<i64>,
    pub language_id: Option<i32>,
}

impl SlugQueryService {
    /// Loads the active slugs of many entities in one query and stores them in
    /// `cache`. Entities without an active slug are cached as empty so later
    /// lookups do not fall through to the store. Returns the number of records
    /// loaded.
    pub async fn prefetch_url_records(
        &self,
        query: PrefetchUrlRecordsQuery,
        cache: &dyn PrefetchedSlugCache,
    ) -> ApplicationResult<usize> {
        let language_id = query
            .language_id
            .map(LanguageId::new)
            .transpose()?
            .unwrap_or(LanguageId::NEUTRAL);
        if query.entity_ids.is_empty() {
            return Ok(0);
        }

        let records = self
            .repo
            .find_active_for_entities(&query.entity_name, &query.entity_ids, language_id)
            .await?;

        for id in &query.entity_ids {
            let slug = records
                .iter()
                .find(|r| r.entity_id == *id)
                .map(|r| r.slug.clone())
                .unwrap_or_default();
            cache.store(*id, &query.entity_name, language_id, slug);
        }

        tracing::debug!(
            entity = %query.entity_name,
            requested = query.entity_ids.len(),
            loaded = records.len(),
            "prefetched url records"
        );
        Ok(records.len())
    }
}

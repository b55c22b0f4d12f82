// src/domain/seo/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::seo::collection::{UrlRecordChangeSet, UrlRecordCollection};
use crate::domain::seo::entity::UrlRecord;
use crate::domain::seo::value_objects::{LanguageId, slug_key};
use async_trait::async_trait;

#[async_trait]
pub trait UrlRecordRepository: Send + Sync {
    /// All records whose slug matches one of `slugs`, compared case-insensitively.
    async fn find_by_slugs(&self, slugs: &[String]) -> DomainResult<Vec<UrlRecord>>;

    async fn find_active(
        &self,
        entity_id: i64,
        entity_name: &str,
        language_id: LanguageId,
    ) -> DomainResult<Option<UrlRecord>>;

    async fn find_active_for_entities(
        &self,
        entity_name: &str,
        entity_ids: &[i64],
        language_id: LanguageId,
    ) -> DomainResult<Vec<UrlRecord>>;

    /// Records of `entity_name` in any of `language_ids`. An empty `entity_ids`
    /// slice means all entities of that type.
    async fn load_scoped(
        &self,
        entity_name: &str,
        language_ids: &[LanguageId],
        entity_ids: &[i64],
    ) -> DomainResult<UrlRecordCollection>;

    /// Persists every change atomically and returns the number of affected rows.
    async fn save_all(&self, changes: UrlRecordChangeSet) -> DomainResult<u64>;

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Vec<UrlRecord>> {
        self.find_by_slugs(&[slug_key(slug)]).await
    }
}

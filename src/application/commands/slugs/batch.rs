// src/application/commands/slugs/batch.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    application::{
        cancel::CancellationSignal,
        error::{ApplicationError, ApplicationResult},
        ports::cache::PrefetchedSlugCache,
        queries::slugs::lookup_active_slug,
    },
    domain::seo::{
        LanguageId, SlugCandidate, SlugHints, SlugUniquenessResolver, UrlRecord,
        UrlRecordChangeSet, UrlRecordRepository, value_objects::slug_key,
    },
};

/// Collects slug assignments and validates and persists them in one go.
///
/// Store round-trips per commit: one slug lookup for the whole batch, one
/// resolver query per conflicting slug, one collection load per entity type
/// and one save. A scope is owned by a single caller.
///
/// Two candidates proposing the same slug that is not stored yet are not
/// checked against each other; the unique index on `url_records` rejects the
/// save in that case and the batch stays staged.
pub struct UrlBatchScope {
    repo: Arc<dyn UrlRecordRepository>,
    resolver: Arc<SlugUniquenessResolver>,
    prefetch: Option<Arc<dyn PrefetchedSlugCache>>,
    hints: SlugHints,
    batch: Vec<SlugCandidate>,
}

impl UrlBatchScope {
    pub(super) fn new(
        repo: Arc<dyn UrlRecordRepository>,
        resolver: Arc<SlugUniquenessResolver>,
        hints: SlugHints,
    ) -> Self {
        Self {
            repo,
            resolver,
            prefetch: None,
            hints,
            batch: Vec::new(),
        }
    }

    /// Serves `get_active_slug` from `cache` and refreshes the cached slug of
    /// every entity written by a successful commit.
    pub fn with_prefetch(mut self, cache: Arc<dyn PrefetchedSlugCache>) -> Self {
        self.prefetch = Some(cache);
        self
    }

    pub fn stage(&mut self, candidates: impl IntoIterator<Item = SlugCandidate>) {
        self.batch.extend(candidates);
    }

    /// Registers a slug that must be treated as taken (or as self) even though
    /// it is not stored.
    pub fn add_hint(&mut self, record: UrlRecord) {
        self.hints.insert(record);
    }

    pub fn pending_len(&self) -> usize {
        self.batch.len()
    }

    pub async fn get_active_slug(
        &self,
        entity_id: i64,
        entity_name: &str,
        language_id: LanguageId,
    ) -> ApplicationResult<String> {
        lookup_active_slug(
            self.repo.as_ref(),
            self.prefetch.as_deref(),
            entity_id,
            entity_name,
            language_id,
        )
        .await
    }

    pub async fn commit(&mut self) -> ApplicationResult<u64> {
        self.commit_with_cancel(CancellationSignal::never()).await
    }

    /// Validates and saves the staged batch. The batch is cleared only after a
    /// successful save; on error or cancellation it stays staged for a retry.
    pub async fn commit_with_cancel(&mut self, mut cancel: CancellationSignal) -> ApplicationResult<u64> {
        if self.batch.is_empty() {
            return Ok(0);
        }
        if cancel.is_cancelled() {
            return Err(ApplicationError::Cancelled);
        }

        let staged = self.batch.len();
        let (affected, applied) = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!(staged, "slug batch commit cancelled");
                return Err(ApplicationError::Cancelled);
            }
            result = self.persist_batch() => result?,
        };

        self.batch.clear();
        self.refresh_prefetched(&applied);
        tracing::debug!(staged, affected, "slug batch committed");
        Ok(affected)
    }

    async fn persist_batch(&self) -> ApplicationResult<(u64, Vec<SlugCandidate>)> {
        let validated = self.validate_pending().await?;

        let mut changes = UrlRecordChangeSet::default();
        for (entity_name, slugs) in group_by_entity_name(&validated) {
            let language_ids = distinct(slugs.iter().map(|s| s.effective_language()));
            let entity_ids = distinct(
                slugs
                    .iter()
                    .filter_map(|s| s.source.as_ref().map(|e| e.id))
                    .filter(|id| *id > 0),
            );

            let mut collection = self
                .repo
                .load_scoped(&entity_name, &language_ids, &entity_ids)
                .await?;
            for slug in slugs {
                collection.apply(slug)?;
            }
            changes.extend(collection.into_changes());
        }

        if changes.is_empty() {
            return Ok((0, validated));
        }
        let affected = self.repo.save_all(changes).await?;
        Ok((affected, validated))
    }

    /// Applied candidates are in batch order, so the last one per entity and
    /// language is the slug left active.
    fn refresh_prefetched(&self, applied: &[SlugCandidate]) {
        let Some(cache) = self.prefetch.as_deref() else {
            return;
        };
        for candidate in applied {
            if let Some(source) = candidate.source.as_ref() {
                cache.store(
                    source.id,
                    &source.name,
                    candidate.effective_language(),
                    candidate.slug.clone(),
                );
            }
        }
    }

    /// Validates the staged batch without persisting it. Candidates without an
    /// owner or slug are dropped; order is preserved.
    pub async fn validate_pending(&self) -> ApplicationResult<Vec<SlugCandidate>> {
        let applicable: Vec<&SlugCandidate> =
            self.batch.iter().filter(|c| c.is_applicable()).collect();

        // first occurrence of a slug decides the carried-over lookup result
        let mut lookup: HashMap<String, Option<UrlRecord>> = HashMap::new();
        let mut keys = Vec::new();
        for candidate in applicable.iter().filter(|c| !c.was_validated) {
            let key = slug_key(&candidate.slug);
            if !lookup.contains_key(&key) {
                lookup.insert(key.clone(), candidate.found.clone());
                keys.push(key);
            }
        }

        if !keys.is_empty() {
            let found = self.repo.find_by_slugs(&keys).await?;
            tracing::debug!(distinct = keys.len(), found = found.len(), "looked up staged slugs");
            for record in found {
                lookup.insert(slug_key(&record.slug), Some(record));
            }
        }
        for (key, record) in self.hints.iter() {
            lookup.insert(key.clone(), Some(record.clone()));
        }

        let mut validated = Vec::with_capacity(applicable.len());
        for candidate in applicable {
            validated.push(self.validate_candidate(candidate, &lookup).await?);
        }
        Ok(validated)
    }

    async fn validate_candidate(
        &self,
        candidate: &SlugCandidate,
        lookup: &HashMap<String, Option<UrlRecord>>,
    ) -> ApplicationResult<SlugCandidate> {
        if candidate.was_validated {
            return Ok(candidate.clone());
        }
        let Some(source) = candidate.source.as_ref() else {
            return Ok(candidate.clone());
        };

        let found = lookup.get(&slug_key(&candidate.slug)).cloned().flatten();
        match found {
            Some(record) if record.is_self_for(source, candidate.effective_language()) => {
                Ok(candidate.validated_self(record))
            }
            Some(_) => Ok(self.resolver.resolve(candidate.clone(), &self.hints).await?),
            None if self.resolver.is_reserved(&candidate.slug)
                || self.resolver.exceeds_max_length(&candidate.slug) =>
            {
                Ok(self.resolver.resolve(candidate.clone(), &self.hints).await?)
            }
            None => Ok(candidate.validated_free()),
        }
    }
}

fn group_by_entity_name(candidates: &[SlugCandidate]) -> Vec<(String, Vec<&SlugCandidate>)> {
    let mut groups: Vec<(String, Vec<&SlugCandidate>)> = Vec::new();
    for candidate in candidates {
        let Some(name) = candidate.source.as_ref().map(|s| s.name.clone()) else {
            continue;
        };
        match groups.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            Some((_, group)) => group.push(candidate),
            None => groups.push((name, vec![candidate])),
        }
    }
    groups
}

fn distinct<T: PartialEq>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

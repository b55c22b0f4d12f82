use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::seo::candidate::SlugCandidate;
use crate::domain::seo::entity::{ReservedSlugs, SlugHints, UrlRecord};
use crate::domain::seo::repository::UrlRecordRepository;
use crate::domain::seo::value_objects::{EntityRef, LanguageId};

pub const DEFAULT_MAX_SLUG_LENGTH: usize = 400;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Domain service turning a conflicting slug into a free one by appending a
/// numeric suffix (`shoes`, `shoes-2`, `shoes-3`, ...).
pub struct SlugUniquenessResolver {
    repo: Arc<dyn UrlRecordRepository>,
    generator: Arc<dyn SlugGenerator>,
    reserved: ReservedSlugs,
    max_length: usize,
    max_attempts: u32,
}

enum Attempt {
    Taken,
    Free(Option<UrlRecord>),
}

impl SlugUniquenessResolver {
    pub fn new(
        repo: Arc<dyn UrlRecordRepository>,
        generator: Arc<dyn SlugGenerator>,
        reserved: ReservedSlugs,
    ) -> Self {
        Self {
            repo,
            generator,
            reserved,
            max_length: DEFAULT_MAX_SLUG_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// `max_length` is raised when needed so the longest suffix still leaves
    /// at least one character of the base slug.
    pub fn with_limits(mut self, max_length: usize, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.max_length = max_length.max(suffix_width(self.max_attempts) + 1);
        self
    }

    pub fn is_reserved(&self, slug: &str) -> bool {
        self.reserved.contains(slug)
    }

    pub fn exceeds_max_length(&self, slug: &str) -> bool {
        slug.chars().count() > self.max_length
    }

    pub async fn resolve(
        &self,
        candidate: SlugCandidate,
        hints: &SlugHints,
    ) -> DomainResult<SlugCandidate> {
        let source = candidate
            .source
            .clone()
            .ok_or_else(|| DomainError::validation("slug candidate has no source entity"))?;
        let language_id = candidate.effective_language();
        let base = self.base_slug(&source, &candidate.slug);

        for attempt in 1..=self.max_attempts {
            let slug = if attempt == 1 {
                base.clone()
            } else {
                let suffix = format!("-{attempt}");
                let stem = truncate(&base, self.max_length.saturating_sub(suffix.len()));
                format!("{stem}{suffix}")
            };

            match self.check(&slug, &source, language_id, hints).await? {
                Attempt::Free(found) => {
                    if attempt > 1 {
                        tracing::debug!(entity = %source, %slug, attempt, "disambiguated slug");
                    }
                    return Ok(candidate.into_resolved(slug, found));
                }
                Attempt::Taken => continue,
            }
        }

        Err(DomainError::Conflict(format!(
            "no free slug derived from '{base}' after {} attempts",
            self.max_attempts
        )))
    }

    fn base_slug(&self, source: &EntityRef, proposed: &str) -> String {
        let slug = self.generator.slugify(proposed);
        let slug = if slug.is_empty() {
            self.generator
                .slugify(&format!("{}-{}", source.name, source.id))
        } else {
            slug
        };
        truncate(&slug, self.max_length)
    }

    async fn check(
        &self,
        slug: &str,
        source: &EntityRef,
        language_id: LanguageId,
        hints: &SlugHints,
    ) -> DomainResult<Attempt> {
        if self.reserved.contains(slug) {
            return Ok(Attempt::Taken);
        }

        if let Some(hint) = hints.get(slug) {
            return Ok(if hint.is_self_for(source, language_id) {
                Attempt::Free(Some(hint.clone()))
            } else {
                Attempt::Taken
            });
        }

        let records = self.repo.find_by_slug(slug).await?;
        if records.iter().any(|r| !r.is_self_for(source, language_id)) {
            return Ok(Attempt::Taken);
        }
        Ok(Attempt::Free(records.into_iter().next()))
    }
}

fn suffix_width(max_attempts: u32) -> usize {
    format!("-{max_attempts}").len()
}

fn truncate(slug: &str, max_chars: usize) -> String {
    let cut: String = slug.chars().take(max_chars).collect();
    cut.trim_end_matches('-').to_string()
}

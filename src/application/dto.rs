// src/application/dto.rs
use std::collections::BTreeMap;

use crate::domain::seo::SlugCandidate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SlugCandidateDto {
    pub entity_id: Option<i64>,
    pub entity_name: Option<String>,
    pub slug: String,
    pub language_id: i32,
    pub was_validated: bool,
    pub found_is_self: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_record_id: Option<i64>,
}

impl From<SlugCandidate> for SlugCandidateDto {
    fn from(candidate: SlugCandidate) -> Self {
        Self {
            language_id: candidate.effective_language().into(),
            entity_id: candidate.source.as_ref().map(|s| s.id),
            entity_name: candidate.source.map(|s| s.name),
            slug: candidate.slug,
            was_validated: candidate.was_validated,
            found_is_self: candidate.found_is_self,
            found_record_id: candidate.found.map(|r| r.id.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActiveSlugDto {
    pub entity_id: i64,
    pub entity_name: String,
    pub language_id: i32,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchCommitDto {
    pub staged: usize,
    pub affected: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppliedSlugDto {
    #[serde(flatten)]
    pub candidate: SlugCandidateDto,
    pub affected: u64,
}

/// Active slugs loaded for one request; entities without a slug map to `""`.
#[derive(Debug, Clone, Serialize)]
pub struct PrefetchedSlugsDto {
    pub loaded: usize,
    pub slugs: BTreeMap<i64, String>,
}

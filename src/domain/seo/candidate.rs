// src/domain/seo/candidate.rs
use crate::domain::seo::entity::UrlRecord;
use crate::domain::seo::value_objects::{EntityRef, LanguageId};

/// A proposed slug assignment and the outcome of validating it.
///
/// Validation never mutates a candidate; every step produces a new value so a
/// batch can be retried from the untouched staged input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCandidate {
    pub source: Option<EntityRef>,
    pub slug: String,
    pub language_id: Option<LanguageId>,
    pub was_validated: bool,
    pub found: Option<UrlRecord>,
    pub found_is_self: bool,
}

impl SlugCandidate {
    pub fn new(source: EntityRef, slug: impl Into<String>, language_id: Option<LanguageId>) -> Self {
        Self {
            source: Some(source),
            slug: slug.into(),
            language_id,
            was_validated: false,
            found: None,
            found_is_self: false,
        }
    }

    pub fn effective_language(&self) -> LanguageId {
        self.language_id.unwrap_or(LanguageId::NEUTRAL)
    }

    /// Candidates without an owner or without slug text are skipped by validation.
    pub fn is_applicable(&self) -> bool {
        self.source.is_some() && !self.slug.trim().is_empty()
    }

    /// Carries a record found by an earlier lookup into the batch validator.
    pub fn with_found(self, found: Option<UrlRecord>) -> Self {
        Self { found, ..self }
    }

    pub fn validated_free(&self) -> Self {
        Self {
            was_validated: true,
            found: None,
            found_is_self: false,
            ..self.clone()
        }
    }

    pub fn validated_self(&self, found: UrlRecord) -> Self {
        Self {
            was_validated: true,
            found: Some(found),
            found_is_self: true,
            ..self.clone()
        }
    }

    pub fn into_resolved(self, slug: String, found: Option<UrlRecord>) -> Self {
        let found_is_self = found.is_some();
        Self {
            slug,
            was_validated: true,
            found,
            found_is_self,
            ..self
        }
    }
}

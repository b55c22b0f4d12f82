// src/domain/seo/collection.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::seo::candidate::SlugCandidate;
use crate::domain::seo::entity::{NewUrlRecord, UrlRecord};
use crate::domain::seo::value_objects::{LanguageId, UrlRecordId, slugs_equal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlRecordChange {
    Insert(NewUrlRecord),
    SetActive { id: UrlRecordId, is_active: bool },
}

/// Staged writes waiting for a single atomic save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlRecordChangeSet {
    changes: Vec<UrlRecordChange>,
}

impl UrlRecordChangeSet {
    pub fn extend(&mut self, changes: impl IntoIterator<Item = UrlRecordChange>) {
        self.changes.extend(changes);
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl IntoIterator for UrlRecordChangeSet {
    type Item = UrlRecordChange;
    type IntoIter = std::vec::IntoIter<UrlRecordChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

#[derive(Debug, Clone)]
enum Entry {
    Stored { record: UrlRecord, was_active: bool },
    Pending(NewUrlRecord),
}

impl Entry {
    fn entity_id(&self) -> i64 {
        match self {
            Entry::Stored { record, .. } => record.entity_id,
            Entry::Pending(new) => new.entity_id,
        }
    }

    fn language_id(&self) -> LanguageId {
        match self {
            Entry::Stored { record, .. } => record.language_id,
            Entry::Pending(new) => new.language_id,
        }
    }

    fn slug(&self) -> &str {
        match self {
            Entry::Stored { record, .. } => &record.slug,
            Entry::Pending(new) => &new.slug,
        }
    }

    fn is_active(&self) -> bool {
        match self {
            Entry::Stored { record, .. } => record.is_active,
            Entry::Pending(new) => new.is_active,
        }
    }

    fn set_active(&mut self, active: bool) {
        match self {
            Entry::Stored { record, .. } => record.is_active = active,
            Entry::Pending(new) => new.is_active = active,
        }
    }
}

/// Url records of one entity type, loaded for a set of languages and entity
/// ids. Edits are tracked in memory and turned into a change set on demand.
#[derive(Debug, Clone)]
pub struct UrlRecordCollection {
    entity_name: String,
    entries: Vec<Entry>,
}

impl UrlRecordCollection {
    pub fn new(entity_name: impl Into<String>, records: Vec<UrlRecord>) -> Self {
        Self {
            entity_name: entity_name.into(),
            entries: records
                .into_iter()
                .map(|record| Entry::Stored {
                    was_active: record.is_active,
                    record,
                })
                .collect(),
        }
    }

    pub fn active_slug(&self, entity_id: i64, language_id: LanguageId) -> Option<&str> {
        self.position_active(entity_id, language_id)
            .map(|idx| self.entries[idx].slug())
    }

    fn position_active(&self, entity_id: i64, language_id: LanguageId) -> Option<usize> {
        self.entries.iter().position(|e| {
            e.is_active() && e.entity_id() == entity_id && e.language_id() == language_id
        })
    }

    fn position_inactive(&self, entity_id: i64, language_id: LanguageId, slug: &str) -> Option<usize> {
        self.entries.iter().position(|e| {
            !e.is_active()
                && e.entity_id() == entity_id
                && e.language_id() == language_id
                && slugs_equal(e.slug(), slug)
        })
    }

    /// Inserts or reactivates the candidate's slug so it becomes the single
    /// active slug of its entity and language. Nothing is persisted here.
    pub fn apply(&mut self, candidate: &SlugCandidate) -> DomainResult<()> {
        if !candidate.was_validated {
            return Err(DomainError::validation(format!(
                "slug '{}' must be validated before it is applied",
                candidate.slug
            )));
        }
        let Some(source) = candidate.source.as_ref() else {
            return Ok(());
        };
        if candidate.slug.trim().is_empty() {
            return Ok(());
        }
        if !source.name.eq_ignore_ascii_case(&self.entity_name) {
            return Err(DomainError::validation(format!(
                "{source} cannot be applied to the {} collection",
                self.entity_name
            )));
        }

        let language_id = candidate.effective_language();
        if let Some(active) = self.position_active(source.id, language_id) {
            if slugs_equal(self.entries[active].slug(), &candidate.slug) {
                return Ok(());
            }
            self.entries[active].set_active(false);
        }

        match self.position_inactive(source.id, language_id, &candidate.slug) {
            Some(idx) => self.entries[idx].set_active(true),
            None => self.entries.push(Entry::Pending(NewUrlRecord {
                entity_id: source.id,
                entity_name: source.name.clone(),
                slug: candidate.slug.clone(),
                language_id,
                is_active: true,
            })),
        }
        Ok(())
    }

    /// Net changes since load. A flag flipped back to its loaded value is not a change.
    pub fn into_changes(self) -> Vec<UrlRecordChange> {
        self.entries
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Stored { record, was_active } if record.is_active != was_active => {
                    Some(UrlRecordChange::SetActive {
                        id: record.id,
                        is_active: record.is_active,
                    })
                }
                Entry::Stored { .. } => None,
                Entry::Pending(new) => Some(UrlRecordChange::Insert(new)),
            })
            .collect()
    }
}

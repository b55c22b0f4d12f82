// src/domain/seo/entity.rs
use crate::domain::seo::value_objects::{EntityRef, LanguageId, UrlRecordId};
use std::collections::{HashMap, HashSet};

/// A persisted slug assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: UrlRecordId,
    pub entity_id: i64,
    pub entity_name: String,
    pub slug: String,
    pub language_id: LanguageId,
    pub is_active: bool,
}

impl UrlRecord {
    /// A record is "self" for a candidate when it already belongs to the same
    /// entity in the same language.
    pub fn is_self_for(&self, source: &EntityRef, language_id: LanguageId) -> bool {
        source.same_entity(self.entity_id, &self.entity_name) && self.language_id == language_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub entity_id: i64,
    pub entity_name: String,
    pub slug: String,
    pub language_id: LanguageId,
    pub is_active: bool,
}

/// Slugs that may never be assigned to an entity as-is.
#[derive(Debug, Clone, Default)]
pub struct ReservedSlugs(HashSet<String>);

impl ReservedSlugs {
    pub fn new<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            slugs
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.0.contains(&slug.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Extra slug lookups supplied by the caller, e.g. slugs handed out earlier in
/// the same import run that are not stored yet. Keys are case-insensitive and
/// a hint always wins over a stored record with the same slug.
#[derive(Debug, Clone, Default)]
pub struct SlugHints(HashMap<String, UrlRecord>);

impl SlugHints {
    pub fn insert(&mut self, record: UrlRecord) {
        self.0.insert(record.slug.to_lowercase(), record);
    }

    pub fn get(&self, slug: &str) -> Option<&UrlRecord> {
        self.0.get(&slug.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &UrlRecord)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entity_id: i64, name: &str, slug: &str, language: i32) -> UrlRecord {
        UrlRecord {
            id: UrlRecordId::new(1).unwrap(),
            entity_id,
            entity_name: name.into(),
            slug: slug.into(),
            language_id: LanguageId::new(language).unwrap(),
            is_active: true,
        }
    }

    #[test]
    fn self_match_requires_entity_and_language() {
        let rec = record(1, "Product", "red-shoes", 0);
        let product = EntityRef::new(1, "product").unwrap();
        assert!(rec.is_self_for(&product, LanguageId::NEUTRAL));
        assert!(!rec.is_self_for(&product, LanguageId::new(2).unwrap()));
        assert!(!rec.is_self_for(&EntityRef::new(2, "Product").unwrap(), LanguageId::NEUTRAL));
    }

    #[test]
    fn reserved_slugs_ignore_case_and_blanks() {
        let reserved = ReservedSlugs::new(["Admin", " cart ", ""]);
        assert_eq!(reserved.len(), 2);
        assert!(reserved.contains("admin"));
        assert!(reserved.contains("CART"));
        assert!(!reserved.contains("shoes"));
    }

    #[test]
    fn hints_are_keyed_case_insensitively() {
        let mut hints = SlugHints::default();
        hints.insert(record(3, "Category", "Hats", 0));
        assert_eq!(hints.get("hats").map(|r| r.entity_id), Some(3));
    }
}

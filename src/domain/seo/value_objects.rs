use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LanguageId(i32);

impl LanguageId {
    /// Language-neutral records apply to every storefront language.
    pub const NEUTRAL: LanguageId = LanguageId(0);

    pub fn new(id: i32) -> DomainResult<Self> {
        if id < 0 {
            Err(DomainError::validation("language id cannot be negative"))
        } else {
            Ok(Self(id))
        }
    }

    pub fn is_neutral(self) -> bool {
        self.0 == 0
    }
}

impl From<LanguageId> for i32 {
    fn from(value: LanguageId) -> Self {
        value.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UrlRecordId(i64);

impl UrlRecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("url record id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UrlRecordId> for i64 {
    fn from(value: UrlRecordId) -> Self {
        value.0
    }
}

/// The `(Id, EntityName)` pair identifying the owner of a slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
    pub name: String,
}

impl EntityRef {
    pub fn new(id: i64, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("entity name cannot be empty"));
        }
        Ok(Self { id, name })
    }

    pub fn same_entity(&self, entity_id: i64, entity_name: &str) -> bool {
        self.id == entity_id && self.name.eq_ignore_ascii_case(entity_name)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

/// Case-insensitive lookup key for slug text.
pub fn slug_key(slug: &str) -> String {
    slug.to_lowercase()
}

pub fn slugs_equal(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

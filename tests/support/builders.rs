// tests/support/builders.rs
use storefront_seo::domain::seo::{EntityRef, LanguageId, SlugCandidate, UrlRecord, UrlRecordId};

pub struct UrlRecordBuilder {
    id: i64,
    entity_id: i64,
    entity_name: String,
    slug: String,
    language_id: i32,
    is_active: bool,
}

impl UrlRecordBuilder {
    pub fn new(id: i64, slug: impl Into<String>) -> Self {
        Self {
            id,
            entity_id: 1,
            entity_name: "Product".into(),
            slug: slug.into(),
            language_id: 0,
            is_active: true,
        }
    }

    pub fn entity(mut self, entity_name: impl Into<String>, entity_id: i64) -> Self {
        self.entity_name = entity_name.into();
        self.entity_id = entity_id;
        self
    }

    pub fn language(mut self, language_id: i32) -> Self {
        self.language_id = language_id;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> UrlRecord {
        UrlRecord {
            id: UrlRecordId::new(self.id).expect("valid record id"),
            entity_id: self.entity_id,
            entity_name: self.entity_name,
            slug: self.slug,
            language_id: LanguageId::new(self.language_id).expect("valid language id"),
            is_active: self.is_active,
        }
    }
}

pub fn record(id: i64, entity_name: &str, entity_id: i64, slug: &str) -> UrlRecord {
    UrlRecordBuilder::new(id, slug)
        .entity(entity_name, entity_id)
        .build()
}

pub fn candidate(entity_name: &str, entity_id: i64, slug: &str) -> SlugCandidate {
    SlugCandidate::new(
        EntityRef::new(entity_id, entity_name).expect("valid entity"),
        slug,
        None,
    )
}

pub fn candidate_in(entity_name: &str, entity_id: i64, slug: &str, language_id: i32) -> SlugCandidate {
    SlugCandidate::new(
        EntityRef::new(entity_id, entity_name).expect("valid entity"),
        slug,
        Some(LanguageId::new(language_id).expect("valid language id")),
    )
}

// src/infrastructure/cache.rs
use crate::application::ports::cache::PrefetchedSlugCache;
use crate::domain::seo::LanguageId;
use std::collections::HashMap;
use std::sync::RwLock;

type Key = (String, i64, LanguageId);

/// Prefetch cache owned by a single request or batch scope.
#[derive(Default)]
pub struct InMemoryPrefetchCache {
    entries: RwLock<HashMap<Key, String>>,
}

impl InMemoryPrefetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

}

fn key(entity_id: i64, entity_name: &str, language_id: LanguageId) -> Key {
    (entity_name.to_lowercase(), entity_id, language_id)
}

impl PrefetchedSlugCache for InMemoryPrefetchCache {
    fn try_get_active_slug(
        &self,
        entity_id: i64,
        entity_name: &str,
        language_id: LanguageId,
    ) -> Option<String> {
        let map = self.entries.read().ok()?;
        map.get(&key(entity_id, entity_name, language_id)).cloned()
    }

    fn store(&self, entity_id: i64, entity_name: &str, language_id: LanguageId, slug: String) {
        match self.entries.write() {
            Ok(mut map) => {
                map.insert(key(entity_id, entity_name, language_id), slug);
            }
            Err(_) => tracing::warn!("prefetch cache lock poisoned; entry dropped"),
        }
    }
}

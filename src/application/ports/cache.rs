use crate::domain::seo::LanguageId;

/// Active slugs loaded ahead of rendering a page of entities.
///
/// A cache belongs to one request or batch scope and is handed to the calls
/// that may use it. Scopes that write slugs overwrite the entries they touch.
pub trait PrefetchedSlugCache: Send + Sync {
    /// `Some` on a hit. A hit may carry an empty slug when the entity is known
    /// to have no active slug.
    fn try_get_active_slug(
        &self,
        entity_id: i64,
        entity_name: &str,
        language_id: LanguageId,
    ) -> Option<String>;

    fn store(&self, entity_id: i64, entity_name: &str, language_id: LanguageId, slug: String);
}

// src/application/commands/slugs/apply.rs
use std::sync::Arc;

use super::{UrlService, ValidateSlugCommand};
use crate::{
    application::{error::ApplicationResult, ports::cache::PrefetchedSlugCache},
    domain::seo::SlugCandidate,
};

pub struct ApplySlugCommand {
    pub entity_id: i64,
    pub entity_name: String,
    pub slug: String,
    pub language_id: Option<i32>,
}

impl UrlService {
    /// Validates and persists a single slug, returning the assigned candidate and
    /// the number of affected records. A supplied prefetch cache is updated with
    /// the new active slug.
    pub async fn apply_slug(
        &self,
        command: ApplySlugCommand,
        prefetch: Option<Arc<dyn PrefetchedSlugCache>>,
    ) -> ApplicationResult<(SlugCandidate, u64)> {
        let validated = self
            .validate_slug(ValidateSlugCommand {
                entity_id: command.entity_id,
                entity_name: command.entity_name,
                slug: command.slug,
                language_id: command.language_id,
            })
            .await?;

        let mut scope = self.create_batch_scope();
        if let Some(cache) = prefetch {
            scope = scope.with_prefetch(cache);
        }
        scope.stage([validated.clone()]);
        let affected = scope.commit().await?;
        Ok((validated, affected))
    }
}

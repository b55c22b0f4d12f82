// src/application/commands/slugs/validate.rs
use super::{UrlService, candidate_from_parts};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::seo::SlugCandidate,
};

pub struct ValidateSlugCommand {
    pub entity_id: i64,
    pub entity_name: String,
    pub slug: String,
    pub language_id: Option<i32>,
}

impl UrlService {
    /// Runs the proposal through the uniqueness resolver, honouring the service's
    /// hints, without persisting anything.
    pub async fn validate_slug(&self, command: ValidateSlugCommand) -> ApplicationResult<SlugCandidate> {
        let candidate = candidate_from_parts(
            command.entity_id,
            command.entity_name,
            command.slug,
            command.language_id,
        )?;
        if !candidate.is_applicable() {
            return Err(ApplicationError::validation("slug cannot be empty"));
        }

        Ok(self.resolver.resolve(candidate, &self.hints).await?)
    }
}

// src/application/commands/slugs/mod.rs
mod apply;
mod batch;
mod service;
mod validate;

pub use apply::ApplySlugCommand;
pub use batch::UrlBatchScope;
pub use service::UrlService;
pub use validate::ValidateSlugCommand;

use crate::{
    application::error::ApplicationResult,
    domain::seo::{EntityRef, LanguageId, SlugCandidate},
};

pub(crate) fn candidate_from_parts(
    entity_id: i64,
    entity_name: String,
    slug: String,
    language_id: Option<i32>,
) -> ApplicationResult<SlugCandidate> {
    let source = EntityRef::new(entity_id, entity_name)?;
    let language_id = language_id.map(LanguageId::new).transpose()?;
    Ok(SlugCandidate::new(source, slug, language_id))
}

// src/application/queries/slugs/mod.rs
mod active;
mod prefetch;
mod service;

pub use active::GetActiveSlugQuery;
pub(crate) use active::lookup_active_slug;
pub use prefetch::PrefetchUrlRecordsQuery;
pub use service::SlugQueryService;

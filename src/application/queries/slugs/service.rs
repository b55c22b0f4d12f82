use std::sync::Arc;

use crate::domain::seo::UrlRecordRepository;

/// Read side of slug management. Prefetch caches are supplied per call.
pub struct SlugQueryService {
    pub(super) repo: Arc<dyn UrlRecordRepository>,
}

impl SlugQueryService {
    pub fn new(repo: Arc<dyn UrlRecordRepository>) -> Self {
        Self { repo }
    }
}

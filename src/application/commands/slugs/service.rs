use std::sync::Arc;

use super::batch::UrlBatchScope;
use crate::domain::seo::{SlugHints, SlugUniquenessResolver, UrlRecordRepository};

/// Write side of slug management: validation, single assignment and batches.
///
/// Hints given at construction apply to single validations and seed every
/// batch scope.
pub struct UrlService {
    pub(super) repo: Arc<dyn UrlRecordRepository>,
    pub(super) resolver: Arc<SlugUniquenessResolver>,
    pub(super) hints: SlugHints,
}

impl UrlService {
    pub fn new(repo: Arc<dyn UrlRecordRepository>, resolver: Arc<SlugUniquenessResolver>) -> Self {
        Self {
            repo,
            resolver,
            hints: SlugHints::default(),
        }
    }

    pub fn with_hints(mut self, hints: SlugHints) -> Self {
        self.hints = hints;
        self
    }

    pub fn create_batch_scope(&self) -> UrlBatchScope {
        UrlBatchScope::new(
            Arc::clone(&self.repo),
            Arc::clone(&self.resolver),
            self.hints.clone(),
        )
    }
}

// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::slugs::{UrlBatchScope, UrlService},
        ports::SlugGeneratorPort,
        queries::slugs::SlugQueryService,
    },
    domain::seo::{
        ReservedSlugs, SlugHints, SlugUniquenessResolver, UrlRecordRepository,
        services::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_SLUG_LENGTH},
    },
};

/// Tunables of slug assignment.
#[derive(Debug, Clone)]
pub struct SlugSettings {
    pub reserved: ReservedSlugs,
    pub hints: SlugHints,
    pub max_length: usize,
    pub max_attempts: u32,
}

impl Default for SlugSettings {
    fn default() -> Self {
        Self {
            reserved: ReservedSlugs::default(),
            hints: SlugHints::default(),
            max_length: DEFAULT_MAX_SLUG_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

pub struct ApplicationServices {
    pub slug_commands: Arc<UrlService>,
    pub slug_queries: Arc<SlugQueryService>,
}

impl ApplicationServices {
    pub fn new(
        url_record_repo: Arc<dyn UrlRecordRepository>,
        slugger: Arc<SlugGeneratorPort>,
        settings: SlugSettings,
    ) -> Self {
        let resolver = Arc::new(
            SlugUniquenessResolver::new(Arc::clone(&url_record_repo), slugger, settings.reserved)
                .with_limits(settings.max_length, settings.max_attempts),
        );

        let slug_commands = Arc::new(
            UrlService::new(Arc::clone(&url_record_repo), resolver).with_hints(settings.hints),
        );
        let slug_queries = Arc::new(SlugQueryService::new(url_record_repo));

        Self {
            slug_commands,
            slug_queries,
        }
    }

    pub fn batch_scope(&self) -> UrlBatchScope {
        self.slug_commands.create_batch_scope()
    }
}

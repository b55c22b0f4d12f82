// src/presentation/http/controllers/slugs.rs
use crate::application::{
    commands::slugs::{ApplySlugCommand, ValidateSlugCommand},
    dto::{ActiveSlugDto, AppliedSlugDto, BatchCommitDto, PrefetchedSlugsDto, SlugCandidateDto},
    error::ApplicationError,
    ports::cache::PrefetchedSlugCache,
    queries::slugs::{GetActiveSlugQuery, PrefetchUrlRecordsQuery},
};
use crate::domain::seo::LanguageId;
use crate::infrastructure::cache::InMemoryPrefetchCache;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LanguageParams {
    #[serde(default)]
    pub language_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct SlugAssignmentRequest {
    pub entity_name: String,
    pub entity_id: i64,
    pub slug: String,
    #[serde(default)]
    pub language_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AssignSlugRequest {
    pub slug: String,
    #[serde(default)]
    pub language_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub assignments: Vec<SlugAssignmentRequest>,
}

#[derive(Debug, Deserialize)]
pub struct PrefetchRequest {
    pub entity_name: String,
    pub entity_ids: Vec<i64>,
    #[serde(default)]
    pub language_id: Option<i32>,
}

pub async fn get_active_slug(
    Extension(state): Extension<HttpState>,
    Path((entity_name, entity_id)): Path<(String, i64)>,
    Query(params): Query<LanguageParams>,
) -> HttpResult<Json<ActiveSlugDto>> {
    let slug = state
        .services
        .slug_queries
        .get_active_slug(
            GetActiveSlugQuery {
                entity_id,
                entity_name: entity_name.clone(),
                language_id: params.language_id,
            },
            None,
        )
        .await
        .into_http()?;

    Ok(Json(ActiveSlugDto {
        entity_id,
        entity_name,
        language_id: params.language_id.unwrap_or(0),
        slug,
    }))
}

pub async fn validate_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SlugAssignmentRequest>,
) -> HttpResult<Json<SlugCandidateDto>> {
    let validated = state
        .services
        .slug_commands
        .validate_slug(ValidateSlugCommand {
            entity_id: payload.entity_id,
            entity_name: payload.entity_name,
            slug: payload.slug,
            language_id: payload.language_id,
        })
        .await
        .into_http()?;
    Ok(Json(validated.into()))
}

pub async fn assign_slug(
    Extension(state): Extension<HttpState>,
    Path((entity_name, entity_id)): Path<(String, i64)>,
    Json(payload): Json<AssignSlugRequest>,
) -> HttpResult<Json<AppliedSlugDto>> {
    let (candidate, affected) = state
        .services
        .slug_commands
        .apply_slug(
            ApplySlugCommand {
                entity_id,
                entity_name,
                slug: payload.slug,
                language_id: payload.language_id,
            },
            None,
        )
        .await
        .into_http()?;

    Ok(Json(AppliedSlugDto {
        candidate: candidate.into(),
        affected,
    }))
}

pub async fn commit_batch(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<BatchRequest>,
) -> HttpResult<Json<BatchCommitDto>> {
    let mut candidates = Vec::with_capacity(payload.assignments.len());
    for assignment in payload.assignments {
        let candidate = crate::application::commands::slugs::candidate_from_parts(
            assignment.entity_id,
            assignment.entity_name,
            assignment.slug,
            assignment.language_id,
        )
        .into_http()?;
        candidates.push(candidate);
    }

    let staged = candidates.len();
    let mut scope = state.services.batch_scope();
    scope.stage(candidates);
    let affected = scope.commit().await.into_http()?;

    Ok(Json(BatchCommitDto { staged, affected }))
}

/// Prefetches into a cache that lives for this request and returns its contents.
pub async fn prefetch(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<PrefetchRequest>,
) -> HttpResult<Json<PrefetchedSlugsDto>> {
    let language_id = LanguageId::new(payload.language_id.unwrap_or(0))
        .map_err(ApplicationError::from)
        .into_http()?;
    let cache = InMemoryPrefetchCache::new();
    let entity_ids = payload.entity_ids.clone();
    let loaded = state
        .services
        .slug_queries
        .prefetch_url_records(
            PrefetchUrlRecordsQuery {
                entity_name: payload.entity_name.clone(),
                entity_ids: payload.entity_ids,
                language_id: Some(language_id.into()),
            },
            &cache,
        )
        .await
        .into_http()?;

    let slugs = entity_ids
        .into_iter()
        .filter_map(|id| {
            cache
                .try_get_active_slug(id, &payload.entity_name, language_id)
                .map(|slug| (id, slug))
        })
        .collect();

    Ok(Json(PrefetchedSlugsDto { loaded, slugs }))
}

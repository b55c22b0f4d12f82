// src/infrastructure/repositories/postgres_url_record.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::seo::{
    LanguageId, UrlRecord, UrlRecordChange, UrlRecordChangeSet, UrlRecordCollection, UrlRecordId,
    UrlRecordRepository,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const SELECT_COLUMNS: &str =
    "SELECT id, entity_id, entity_name, slug, language_id, is_active FROM url_records";

#[derive(Clone)]
pub struct PostgresUrlRecordRepository {
    pool: PgPool,
}

impl PostgresUrlRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UrlRecordRow {
    id: i64,
    entity_id: i64,
    entity_name: String,
    slug: String,
    language_id: i32,
    is_active: bool,
}

impl TryFrom<UrlRecordRow> for UrlRecord {
    type Error = DomainError;

    fn try_from(row: UrlRecordRow) -> Result<Self, Self::Error> {
        Ok(UrlRecord {
            id: UrlRecordId::new(row.id)?,
            entity_id: row.entity_id,
            entity_name: row.entity_name,
            slug: row.slug,
            language_id: LanguageId::new(row.language_id)?,
            is_active: row.is_active,
        })
    }
}

fn into_records(rows: Vec<UrlRecordRow>) -> DomainResult<Vec<UrlRecord>> {
    rows.into_iter().map(UrlRecord::try_from).collect()
}

fn language_values(ids: &[LanguageId]) -> Vec<i32> {
    ids.iter().map(|id| i32::from(*id)).collect()
}

#[async_trait]
impl UrlRecordRepository for PostgresUrlRecordRepository {
    async fn find_by_slugs(&self, slugs: &[String]) -> DomainResult<Vec<UrlRecord>> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }
        let keys: Vec<String> = slugs.iter().map(|s| s.to_lowercase()).collect();

        let rows = sqlx::query_as::<_, UrlRecordRow>(&format!(
            "{SELECT_COLUMNS} WHERE lower(slug) = ANY($1) ORDER BY id"
        ))
        .bind(keys)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_records(rows)
    }

    async fn find_active(
        &self,
        entity_id: i64,
        entity_name: &str,
        language_id: LanguageId,
    ) -> DomainResult<Option<UrlRecord>> {
        let row = sqlx::query_as::<_, UrlRecordRow>(&format!(
            "{SELECT_COLUMNS}
             WHERE entity_id = $1 AND lower(entity_name) = lower($2) AND language_id = $3 AND is_active
             ORDER BY id DESC
             LIMIT 1"
        ))
        .bind(entity_id)
        .bind(entity_name)
        .bind(i32::from(language_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(UrlRecord::try_from).transpose()
    }

    async fn find_active_for_entities(
        &self,
        entity_name: &str,
        entity_ids: &[i64],
        language_id: LanguageId,
    ) -> DomainResult<Vec<UrlRecord>> {
        if entity_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, UrlRecordRow>(&format!(
            "{SELECT_COLUMNS}
             WHERE lower(entity_name) = lower($1) AND entity_id = ANY($2) AND language_id = $3 AND is_active
             ORDER BY id"
        ))
        .bind(entity_name)
        .bind(entity_ids.to_vec())
        .bind(i32::from(language_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_records(rows)
    }

    async fn load_scoped(
        &self,
        entity_name: &str,
        language_ids: &[LanguageId],
        entity_ids: &[i64],
    ) -> DomainResult<UrlRecordCollection> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_COLUMNS);
        builder.push(" WHERE lower(entity_name) = lower(");
        builder.push_bind(entity_name.to_string());
        builder.push(")");

        if !language_ids.is_empty() {
            builder.push(" AND language_id = ANY(");
            builder.push_bind(language_values(language_ids));
            builder.push(")");
        }
        if !entity_ids.is_empty() {
            builder.push(" AND entity_id = ANY(");
            builder.push_bind(entity_ids.to_vec());
            builder.push(")");
        }
        builder.push(" ORDER BY id");

        let rows = builder
            .build_query_as::<UrlRecordRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(UrlRecordCollection::new(entity_name, into_records(rows)?))
    }

    async fn save_all(&self, changes: UrlRecordChangeSet) -> DomainResult<u64> {
        if changes.is_empty() {
            return Ok(0);
        }

        // dropping the transaction without commit rolls everything back
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let mut affected = 0u64;

        for change in changes {
            let result = match change {
                UrlRecordChange::Insert(new) => sqlx::query(
                    "INSERT INTO url_records (entity_id, entity_name, slug, language_id, is_active)
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(new.entity_id)
                .bind(new.entity_name)
                .bind(new.slug)
                .bind(i32::from(new.language_id))
                .bind(new.is_active)
                .execute(&mut *tx)
                .await,
                UrlRecordChange::SetActive { id, is_active } => {
                    sqlx::query("UPDATE url_records SET is_active = $1 WHERE id = $2")
                        .bind(is_active)
                        .bind(i64::from(id))
                        .execute(&mut *tx)
                        .await
                }
            };
            affected += result.map_err(map_sqlx)?.rows_affected();
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(affected)
    }
}

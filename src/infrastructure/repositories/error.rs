use crate::domain::errors::DomainError;

const CNT_URL_RECORD_SLUG: &str = "url_records_slug_key";
const CNT_URL_RECORD_LANGUAGE_CHECK: &str = "url_records_language_id_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_URL_RECORD_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_URL_RECORD_LANGUAGE_CHECK => {
                        DomainError::Validation("language id cannot be negative".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

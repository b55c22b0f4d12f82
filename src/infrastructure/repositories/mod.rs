// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_url_record;

pub use error::map_sqlx;
pub use postgres_url_record::PostgresUrlRecordRepository;

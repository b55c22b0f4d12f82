pub mod candidate;
pub mod collection;
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use candidate::SlugCandidate;
pub use collection::{UrlRecordChange, UrlRecordChangeSet, UrlRecordCollection};
pub use entity::{NewUrlRecord, ReservedSlugs, SlugHints, UrlRecord};
pub use repository::UrlRecordRepository;
pub use services::SlugUniquenessResolver;
pub use value_objects::{EntityRef, LanguageId, UrlRecordId};

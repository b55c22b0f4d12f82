pub mod errors;
pub mod seo;

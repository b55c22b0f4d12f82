// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lower-case, URL-safe form of `input`; may be empty.
    fn slugify(&self, input: &str) -> String;
}

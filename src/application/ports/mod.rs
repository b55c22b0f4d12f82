pub mod cache;
pub mod util;

pub type SlugGeneratorPort = dyn util::SlugGenerator;

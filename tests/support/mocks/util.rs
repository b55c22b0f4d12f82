// tests/support/mocks/util.rs

/// 入力をそのまま返すスラグ生成器
#[derive(Clone)]
pub struct DummySlug;

impl storefront_seo::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.trim().to_string()
    }
}

// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod url_records;
pub mod util;

// URL レコードリポジトリ
pub use url_records::InMemoryUrlRecordRepo;

// ユーティリティ関連
pub use util::DummySlug;

//! # LocalAuth 共有ユーティリティ
//!
//! このクレートは、LocalAuth の各クレートで使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（core, endpoint）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - Web フレームワーク（axum）には依存しない

pub mod error_response;
pub mod observability;

pub use error_response::ErrorResponse;

//! # LocalAuth エンドポイント層
//!
//! 認証コアのエラーを HTTP 向けのエラーレスポンスに変換する。
//!
//! ## モジュール構成
//!
//! - `error`: HTTP ステータス付きのエラー値 [`ClientFacingError`]
//! - `logger`: ログ出力能力 [`ErrorLogger`] と tracing 実装
//! - `mapper`: エラー分類からエラーレスポンスへの変換
//! - `state`: 依存性注入された [`AuthManager`](localauth_core::AuthManager) の保持と呼び出し
//!
//! ## 使用例
//!
//! ```rust
//! use localauth_core::ErrorType;
//! use localauth_endpoint::{TracingLogger, mapper};
//!
//! let error = mapper::map_classified_error(
//!     "user missing",
//!     "AUTH-404",
//!     &ErrorType::NotFound,
//!     None,
//!     &TracingLogger,
//!     None,
//! );
//! assert_eq!(error.status().as_u16(), 404);
//! assert_eq!(error.payload().message, "Not Found");
//! ```

pub mod error;
pub mod logger;
pub mod mapper;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::ClientFacingError;
pub use localauth_shared::observability;
pub use logger::{ErrorLogger, TracingLogger};
pub use state::EndpointState;

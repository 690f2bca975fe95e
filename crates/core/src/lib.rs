//! # LocalAuth コア
//!
//! 認証 API の中核が公開する型を定義する。
//!
//! - [`error`]: 認証コアが報告するエラー（クライアントエラー / サーバーエラー）
//! - [`manager`]: 認証処理を担う [`AuthManager`] トレイト
//!
//! 認証処理そのものの実装はこのクレートの外側にある。
//! endpoint 層は [`AuthManager`] を依存性注入で受け取り、
//! 返されたエラーを HTTP レスポンスに変換する。

pub mod error;
pub mod manager;

pub use error::{AuthApiError, AuthClientError, AuthServerError, ErrorType};
pub use manager::{AuthManager, AuthnRequest, AuthnResponse};

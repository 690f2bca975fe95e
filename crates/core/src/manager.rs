//! # AuthManager
//!
//! 認証処理を担うコラボレータのトレイト定義。
//!
//! 実装は認証コア側が提供し、endpoint 層はコンストラクタ引数として受け取る。
//! 実行コンテキストからの暗黙的な取得は行わない。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AuthApiError;

/// 認証リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthnRequest {
   pub username: String,
   pub password: String,
}

/// 認証レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthnResponse {
   pub token: String,
}

/// 認証マネージャトレイト
#[async_trait]
pub trait AuthManager: Send + Sync {
   /// 認証を実行する
   ///
   /// ## 戻り値
   ///
   /// - `Ok(AuthnResponse)`: 認証成功
   /// - `Err(AuthApiError::Client)`: 入力不備・対象不在など
   /// - `Err(AuthApiError::Server)`: コア内部の障害
   async fn authenticate(&self, request: &AuthnRequest) -> Result<AuthnResponse, AuthApiError>;
}

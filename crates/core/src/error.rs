//! # 認証コアエラー定義
//!
//! 認証コアが endpoint 層に報告するエラーを表現する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Client` + `ErrorType::NotFound` | 404 Not Found | 対象が存在しない |
//! | `Client` + `ErrorType::NotAcceptable` | 406 Not Acceptable | 受け付けられない要求 |
//! | `Client` + その他の `ErrorType` | 400 Bad Request | 入力不備・未知の分類 |
//! | `Server` | 500 Internal Server Error | コア内部の障害 |
//!
//! HTTP レスポンスへの変換そのものは endpoint クレートが担う。

use std::str::FromStr;

use localauth_shared::error_response::Properties;
use thiserror::Error;

/// クライアントエラーの分類
///
/// 認証コアは分類名を `SCREAMING_SNAKE_CASE` の文字列で報告する。
/// 未知の分類名は [`Other`](ErrorType::Other) に保持され、endpoint 層では
/// Bad Request として扱われる。
///
/// 将来の分類追加に備えて `#[non_exhaustive]` とし、
/// 利用側の `match` に既定のアームを強制する。
#[derive(Debug, Clone, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorType {
   /// 不正なリクエスト
   BadRequest,
   /// 受け付けられないリクエスト
   NotAcceptable,
   /// 対象が見つからない
   NotFound,
   /// 未知の分類（元の分類名を保持する）
   #[strum(disabled)]
   Other(String),
}

impl ErrorType {
   /// 分類名を返す
   pub fn as_str(&self) -> &str {
      match self {
         Self::BadRequest => "BAD_REQUEST",
         Self::NotAcceptable => "NOT_ACCEPTABLE",
         Self::NotFound => "NOT_FOUND",
         Self::Other(name) => name,
      }
   }

   /// 分類名から変換する
   ///
   /// `Other` はパース対象外のため、既知の名前以外はすべてここで `Other` に保持する。
   pub fn from_name(name: &str) -> Self {
      Self::from_str(name).unwrap_or_else(|_| Self::Other(name.to_string()))
   }
}

/// クライアント起因のエラー
///
/// `code` / `description` / `properties` はそのままエラーレスポンスに載る。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {description}")]
pub struct AuthClientError {
   pub code:        String,
   pub description: String,
   pub error_type:  ErrorType,
   pub properties:  Option<Properties>,
}

impl AuthClientError {
   pub fn new(
      code: impl Into<String>,
      description: impl Into<String>,
      error_type: ErrorType,
   ) -> Self {
      Self {
         code: code.into(),
         description: description.into(),
         error_type,
         properties: None,
      }
   }

   /// 追加の診断情報を付与する
   pub fn with_properties(mut self, properties: Properties) -> Self {
      self.properties = Some(properties);
      self
   }
}

/// サーバー起因のエラー
///
/// `message` と `source` はログにのみ出力され、レスポンスには含まれない。
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AuthServerError {
   pub code:    String,
   pub message: String,
   #[source]
   pub source:  Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AuthServerError {
   pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
      Self {
         code:    code.into(),
         message: message.into(),
         source:  None,
      }
   }

   /// 原因となったエラーを付与する
   pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
      self.source = Some(Box::new(source));
      self
   }
}

/// 認証コアが返すエラー
#[derive(Debug, Error)]
pub enum AuthApiError {
   /// クライアントエラー
   #[error(transparent)]
   Client(#[from] AuthClientError),

   /// サーバーエラー
   #[error(transparent)]
   Server(#[from] AuthServerError),
}

impl AuthApiError {
   /// エラーコードを返す
   pub fn code(&self) -> &str {
      match self {
         Self::Client(e) => &e.code,
         Self::Server(e) => &e.code,
      }
   }
}

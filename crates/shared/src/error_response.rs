//! # エラーレスポンス
//!
//! 認証 API が返却するエラーボディの構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は endpoint クレートの責務（shared に axum 依存を入れない）
//! - `message` はカテゴリごとの固定値。呼び出し元が指定できるのは `code` / `description` /
//!   `properties` のみ
//!
//! ## ワイヤ形式
//!
//! ```json
//! { "code": "AUTH-404", "message": "Not Found", "description": "user missing", "properties": null }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 400 Bad Request の固定メッセージ
pub const STATUS_BAD_REQUEST_MESSAGE: &str = "Bad Request";

/// 406 Not Acceptable の固定メッセージ
pub const STATUS_NOT_ACCEPTABLE_MESSAGE: &str = "Not Acceptable";

/// 404 Not Found の固定メッセージ
pub const STATUS_NOT_FOUND_MESSAGE: &str = "Not Found";

/// 500 Internal Server Error の固定メッセージ
pub const STATUS_INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// 追加の診断情報（キー・値ともに文字列）
pub type Properties = HashMap<String, String>;

/// エラーレスポンス
///
/// エラー発生ごとに生成され、レスポンスボディにシリアライズされた後は破棄される。
/// `properties` が `None` の場合は JSON 上 `null` として出力する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub code:        String,
   pub message:     String,
   pub description: String,
   pub properties:  Option<Properties>,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   pub fn new(
      code: impl Into<String>,
      message: impl Into<String>,
      description: impl Into<String>,
      properties: Option<Properties>,
   ) -> Self {
      Self {
         code: code.into(),
         message: message.into(),
         description: description.into(),
         properties,
      }
   }

   /// 400 Bad Request
   pub fn bad_request(
      code: impl Into<String>,
      description: impl Into<String>,
      properties: Option<Properties>,
   ) -> Self {
      Self::new(code, STATUS_BAD_REQUEST_MESSAGE, description, properties)
   }

   /// 406 Not Acceptable
   pub fn not_acceptable(
      code: impl Into<String>,
      description: impl Into<String>,
      properties: Option<Properties>,
   ) -> Self {
      Self::new(code, STATUS_NOT_ACCEPTABLE_MESSAGE, description, properties)
   }

   /// 404 Not Found
   pub fn not_found(
      code: impl Into<String>,
      description: impl Into<String>,
      properties: Option<Properties>,
   ) -> Self {
      Self::new(code, STATUS_NOT_FOUND_MESSAGE, description, properties)
   }

   /// 500 Internal Server Error
   ///
   /// description も固定値（内部情報を漏らさないため）。properties は常に `None`。
   pub fn internal_error(code: impl Into<String>) -> Self {
      Self::new(
         code,
         STATUS_INTERNAL_SERVER_ERROR_MESSAGE,
         STATUS_INTERNAL_SERVER_ERROR_MESSAGE,
         None,
      )
   }
}

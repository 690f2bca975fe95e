//! # エラーレスポンスマッパー
//!
//! 認証コアのエラー分類を、固定メッセージ付きの [`ErrorResponse`] と
//! HTTP ステータス付きの [`ClientFacingError`] に変換する。
//!
//! ## 分類と出力
//!
//! | 分類 | ステータス | message | ログ |
//! |------|-----------|---------|------|
//! | `NOT_FOUND` | 404 | `Not Found` | DEBUG（有効時のみ） |
//! | `NOT_ACCEPTABLE` | 406 | `Not Acceptable` | DEBUG（有効時のみ） |
//! | `BAD_REQUEST`・その他すべて | 400 | `Bad Request` | DEBUG（有効時のみ） |
//! | 内部エラー | 500 | `Internal server error` | ERROR（常時） |
//!
//! `message` は分類だけで決まり、呼び出し元の入力からは決まらない。
//! `code` / `description` / `properties` は入力をそのまま載せる（検証は呼び出し元の責務）。
//! 原因エラーはログにのみ使い、レスポンスには含めない。
//!
//! どの関数も自身は失敗しない。

use localauth_core::{AuthApiError, ErrorType};
use localauth_shared::{
   ErrorResponse,
   error_response::{
      Properties,
      STATUS_BAD_REQUEST_MESSAGE,
      STATUS_INTERNAL_SERVER_ERROR_MESSAGE,
      STATUS_NOT_ACCEPTABLE_MESSAGE,
      STATUS_NOT_FOUND_MESSAGE,
   },
};

use crate::{
   error::ClientFacingError,
   logger::{Cause, ErrorLogger},
};

/// エラー分類に応じたクライアントエラーを生成する
///
/// `NOT_ACCEPTABLE` と `NOT_FOUND` 以外の分類（`BAD_REQUEST`、未知の分類名、
/// 今後追加される分類）はすべて Bad Request になる。
pub fn map_classified_error(
   description: impl Into<String>,
   code: impl Into<String>,
   error_type: &ErrorType,
   properties: Option<Properties>,
   logger: &dyn ErrorLogger,
   cause: Cause<'_>,
) -> ClientFacingError {
   match error_type {
      ErrorType::NotAcceptable => {
         not_acceptable_error(description, code, properties, logger, cause)
      }
      ErrorType::NotFound => not_found_error(description, code, properties, logger, cause),
      // BAD_REQUEST も未知の分類もここに来る
      _ => bad_request_error(description, code, properties, logger, cause),
   }
}

/// 400 Bad Request を生成する
pub fn bad_request_error(
   description: impl Into<String>,
   code: impl Into<String>,
   properties: Option<Properties>,
   logger: &dyn ErrorLogger,
   cause: Cause<'_>,
) -> ClientFacingError {
   let payload = ErrorResponse::bad_request(code, description, properties);
   log_debug(STATUS_BAD_REQUEST_MESSAGE, logger, cause);
   ClientFacingError::BadRequest(payload)
}

/// 406 Not Acceptable を生成する
pub fn not_acceptable_error(
   description: impl Into<String>,
   code: impl Into<String>,
   properties: Option<Properties>,
   logger: &dyn ErrorLogger,
   cause: Cause<'_>,
) -> ClientFacingError {
   let payload = ErrorResponse::not_acceptable(code, description, properties);
   log_debug(STATUS_NOT_ACCEPTABLE_MESSAGE, logger, cause);
   ClientFacingError::NotAcceptable(payload)
}

/// 404 Not Found を生成する
pub fn not_found_error(
   description: impl Into<String>,
   code: impl Into<String>,
   properties: Option<Properties>,
   logger: &dyn ErrorLogger,
   cause: Cause<'_>,
) -> ClientFacingError {
   let payload = ErrorResponse::not_found(code, description, properties);
   log_debug(STATUS_NOT_FOUND_MESSAGE, logger, cause);
   ClientFacingError::NotFound(payload)
}

/// 500 Internal Server Error を生成する
///
/// description は固定値で、properties は持たない。
/// DEBUG の有効・無効にかかわらず ERROR レベルで必ず出力する。
pub fn internal_server_error(
   code: impl Into<String>,
   logger: &dyn ErrorLogger,
   cause: Cause<'_>,
) -> ClientFacingError {
   let payload = ErrorResponse::internal_error(code);
   log_error(logger, cause);
   ClientFacingError::InternalServerError(payload)
}

/// 認証コアのエラーをクライアントエラーに変換する
///
/// クライアントエラーは自身の分類・コード・説明・診断情報で、
/// サーバーエラーはコードのみで変換する。どちらもエラー自体を原因としてログに渡す。
pub fn map_auth_error(error: &AuthApiError, logger: &dyn ErrorLogger) -> ClientFacingError {
   let code = error.code();
   match error {
      AuthApiError::Client(client) => map_classified_error(
         client.description.as_str(),
         code,
         &client.error_type,
         client.properties.clone(),
         logger,
         Some(error),
      ),
      AuthApiError::Server(_) => internal_server_error(code, logger, Some(error)),
   }
}

fn log_debug(message: &str, logger: &dyn ErrorLogger, cause: Cause<'_>) {
   if logger.is_debug_enabled() {
      logger.debug(message, cause);
   }
}

/// 原因エラーのメッセージで出力する（原因がなければ固定メッセージ）
fn log_error(logger: &dyn ErrorLogger, cause: Cause<'_>) {
   let message = cause.map_or_else(
      || STATUS_INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
      |cause| cause.to_string(),
   );
   logger.error(&message, cause);
}

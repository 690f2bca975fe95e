//! # ログ出力能力
//!
//! エラー変換時のログ出力を抽象化する [`ErrorLogger`] と、
//! `tracing` に委譲する実装 [`TracingLogger`] を提供する。
//!
//! クライアントエラーは DEBUG（開発者向け、有効時のみ）、
//! 内部エラーは ERROR（運用者向け、常時）で出力する。
//! レベルの使い分けは [`mapper`](crate::mapper) が決める。

use std::error::Error;

/// ログに添える原因エラー
pub type Cause<'a> = Option<&'a (dyn Error + 'static)>;

/// エラーログの出力先
///
/// スレッド安全性は実装側の責務とする。
pub trait ErrorLogger: Send + Sync {
   /// DEBUG レベルが有効か
   fn is_debug_enabled(&self) -> bool;

   /// DEBUG レベルで出力する
   fn debug(&self, message: &str, cause: Cause<'_>);

   /// ERROR レベルで出力する
   fn error(&self, message: &str, cause: Cause<'_>);
}

/// `tracing` に委譲するロガー
///
/// 原因エラーは `error.message`（Display）と `error.detail`（Debug）の
/// 構造化フィールドとして出力する。
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ErrorLogger for TracingLogger {
   fn is_debug_enabled(&self) -> bool {
      tracing::enabled!(tracing::Level::DEBUG)
   }

   fn debug(&self, message: &str, cause: Cause<'_>) {
      match cause {
         Some(cause) => tracing::debug!(
            error.message = %cause,
            error.detail = ?cause,
            "{message}"
         ),
         None => tracing::debug!("{message}"),
      }
   }

   fn error(&self, message: &str, cause: Cause<'_>) {
      match cause {
         Some(cause) => tracing::error!(
            error.message = %cause,
            error.detail = ?cause,
            "{message}"
         ),
         None => tracing::error!("{message}"),
      }
   }
}

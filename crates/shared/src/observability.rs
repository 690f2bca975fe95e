//! # Observability 基盤
//!
//! 認証 API のログ設定とトレーシング初期化を提供する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `LOG_FORMAT` | No | `json` / `pretty`（未設定・不正値は `pretty`） |
//! | `LOCALAUTH_SERVICE_NAME` | No | ログに付与するサービス名（デフォルト: `local-auth-api`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,localauth=debug`） |
//!
//! サービス名は [`app_span`] のスパンフィールド `service` として、
//! スパン内で出力されるすべてのイベントに付与される。

use std::env;

/// サービス名のデフォルト値
pub const DEFAULT_SERVICE_NAME: &str = "local-auth-api";

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,localauth=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
   /// JSON 形式（本番環境向け）
   Json,
   /// 人間が読みやすい形式（開発環境向け）
   #[default]
   Pretty,
}

/// トレーシング設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
   /// `app` スパンの `service` フィールドに出力するサービス名
   pub service_name: String,
   /// ログ出力形式
   pub log_format:   LogFormat,
}

impl TracingConfig {
   pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
      Self {
         service_name: service_name.into(),
         log_format,
      }
   }

   /// 環境変数から設定を読み取る
   pub fn from_env() -> Self {
      Self::from_lookup(|key| env::var(key).ok())
   }

   /// 任意の参照関数から設定を読み取る
   ///
   /// 空文字列のサービス名は未設定として扱う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
      let service_name = lookup("LOCALAUTH_SERVICE_NAME")
         .filter(|name| !name.is_empty())
         .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
      let log_format = lookup("LOG_FORMAT")
         .and_then(|value| value.parse().ok())
         .unwrap_or_default();

      Self::new(service_name, log_format)
   }
}

/// サービス名を持つ `app` スパンを作成する
///
/// 呼び出し元は `entered()` したガードをプロセスの寿命の間保持する。
#[cfg(feature = "observability")]
pub fn app_span(config: &TracingConfig) -> tracing::Span {
   tracing::info_span!("app", service = %config.service_name)
}

/// グローバル subscriber を初期化する
///
/// 既に設定済みの場合はエラーを返す。
#[cfg(feature = "observability")]
pub fn init_tracing(
   config: &TracingConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
   use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let fmt_layer = match config.log_format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
   };

   tracing_subscriber::registry()
      .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
      .with(fmt_layer)
      .try_init()
}

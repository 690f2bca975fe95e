//! # エンドポイント共有状態
//!
//! [`AuthManager`] とロガーをコンストラクタで受け取り保持する。
//! ハンドラはこの状態経由でコラボレータを呼び出し、
//! 返されたエラーを [`map_auth_error`] で HTTP 向けのエラーに変換する。

use std::sync::Arc;

use localauth_core::{AuthManager, AuthnRequest, AuthnResponse};

use crate::{error::ClientFacingError, logger::ErrorLogger, mapper::map_auth_error};

/// エンドポイントの共有状態
#[derive(Clone)]
pub struct EndpointState {
   auth_manager: Arc<dyn AuthManager>,
   logger:       Arc<dyn ErrorLogger>,
}

impl EndpointState {
   /// 新しい状態を作成する
   pub fn new(auth_manager: Arc<dyn AuthManager>, logger: Arc<dyn ErrorLogger>) -> Self {
      Self {
         auth_manager,
         logger,
      }
   }

   /// 注入された認証マネージャを返す
   pub fn auth_manager(&self) -> &Arc<dyn AuthManager> {
      &self.auth_manager
   }

   /// 注入されたロガーを返す
   pub fn logger(&self) -> &dyn ErrorLogger {
      self.logger.as_ref()
   }

   /// 認証を実行する
   ///
   /// 認証コアのエラーはクライアントに返せる形へ変換済みで返す。
   pub async fn authenticate(
      &self,
      request: &AuthnRequest,
   ) -> Result<AuthnResponse, ClientFacingError> {
      self.auth_manager
         .authenticate(request)
         .await
         .map_err(|e| map_auth_error(&e, self.logger()))
   }
}

//! # エンドポイント層エラー定義
//!
//! HTTP ステータスとエラーレスポンスを運ぶエラー値と、
//! HTTP レスポンスへの変換を定義する。
//!
//! 生成は [`mapper`](crate::mapper) の各関数が担う。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use localauth_shared::ErrorResponse;
use thiserror::Error;

/// クライアントに返すエラー
///
/// バリアントが HTTP ステータスを決め、保持する [`ErrorResponse`] がボディになる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientFacingError {
   /// 400 Bad Request
   #[error("{}", .0.message)]
   BadRequest(ErrorResponse),

   /// 406 Not Acceptable
   #[error("{}", .0.message)]
   NotAcceptable(ErrorResponse),

   /// 404 Not Found
   #[error("{}", .0.message)]
   NotFound(ErrorResponse),

   /// 500 Internal Server Error
   #[error("{}", .0.message)]
   InternalServerError(ErrorResponse),
}

impl ClientFacingError {
   /// HTTP ステータスを返す
   pub fn status(&self) -> StatusCode {
      match self {
         Self::BadRequest(_) => StatusCode::BAD_REQUEST,
         Self::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
         Self::NotFound(_) => StatusCode::NOT_FOUND,
         Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
      }
   }

   /// エラーレスポンスを参照する
   pub fn payload(&self) -> &ErrorResponse {
      match self {
         Self::BadRequest(payload)
         | Self::NotAcceptable(payload)
         | Self::NotFound(payload)
         | Self::InternalServerError(payload) => payload,
      }
   }

   /// エラーレスポンスを取り出す
   pub fn into_payload(self) -> ErrorResponse {
      match self {
         Self::BadRequest(payload)
         | Self::NotAcceptable(payload)
         | Self::NotFound(payload)
         | Self::InternalServerError(payload) => payload,
      }
   }
}

impl IntoResponse for ClientFacingError {
   fn into_response(self) -> Response {
      let status = self.status();
      (status, Json(self.into_payload())).into_response()
   }
}

#[cfg(test)]
mod tests {
   use axum::body::Body;
   use localauth_shared::error_response::Properties;
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   async fn response_body(response: axum::http::Response<Body>) -> serde_json::Value {
      let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      serde_json::from_slice(&bytes).unwrap()
   }

   #[rstest]
   #[case(ClientFacingError::BadRequest(ErrorResponse::bad_request("c", "d", None)), 400)]
   #[case(ClientFacingError::NotAcceptable(ErrorResponse::not_acceptable("c", "d", None)), 406)]
   #[case(ClientFacingError::NotFound(ErrorResponse::not_found("c", "d", None)), 404)]
   #[case(ClientFacingError::InternalServerError(ErrorResponse::internal_error("c")), 500)]
   fn test_バリアントごとのstatusが正しい(#[case] error: ClientFacingError, #[case] expected: u16) {
      assert_eq!(error.status().as_u16(), expected);
   }

   #[test]
   fn test_displayは固定messageを返す() {
      let error = ClientFacingError::NotFound(ErrorResponse::not_found(
         "AUTH-404",
         "user missing",
         None,
      ));

      assert_eq!(error.to_string(), "Not Found");
   }

   #[test]
   fn test_into_payloadで保持したエラーレスポンスを取り出せる() {
      let payload = ErrorResponse::not_acceptable("AUTH-406", "unsupported", None);
      let error = ClientFacingError::NotAcceptable(payload.clone());

      assert_eq!(error.payload(), &payload);
      assert_eq!(error.into_payload(), payload);
   }

   #[tokio::test]
   async fn test_into_responseでステータスとjsonボディが設定される() {
      let properties = Properties::from([("userId".to_string(), "42".to_string())]);
      let error = ClientFacingError::NotFound(ErrorResponse::not_found(
         "AUTH-404",
         "user missing",
         Some(properties),
      ));

      let response = error.into_response();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
      assert_eq!(
         response_body(response).await,
         serde_json::json!({
            "code": "AUTH-404",
            "message": "Not Found",
            "description": "user missing",
            "properties": { "userId": "42" },
         })
      );
   }

   #[tokio::test]
   async fn test_内部エラーのレスポンスはpropertiesがnullになる() {
      let error = ClientFacingError::InternalServerError(ErrorResponse::internal_error("AUTH-500"));

      let response = error.into_response();

      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(
         response_body(response).await,
         serde_json::json!({
            "code": "AUTH-500",
            "message": "Internal server error",
            "description": "Internal server error",
            "properties": null,
         })
      );
   }
}

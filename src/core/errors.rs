//! # Application Error Handling System
//!
//! 사용자 레지스트리 서비스 전역에서 사용하는 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 서비스/리포지토리에서 발생한 에러가 그대로 HTTP 응답으로 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 | 사용 시나리오 |
//! |----------|-------------|-----------|---------------|
//! | `InvalidData` | 400 Bad Request | 메시지 (text/plain) | 사용자 검증 규칙 위반 |
//! | `ValidationError` | 400 Bad Request | JSON | 해석할 수 없는 요청 본문/경로 |
//! | `RecordNotFound` | 404 Not Found | JSON | 저장소에서 삭제할 레코드 없음 |
//! | `ConflictError` | 409 Conflict | JSON | 저장소 유니크 제약 위반 |
//! | `DatabaseError` | 500 Internal Server Error | JSON | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | JSON | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn remove(store: &dyn UserStore, id: i64) -> AppResult<()> {
//!     // 없는 id이면 AppError::RecordNotFound(404)
//!     store.delete(id).await?;
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 실패를 포괄하는 열거형입니다.
///
/// ### 비즈니스 계층
/// - `InvalidData`: 사용자 검증 규칙 위반. 클라이언트가 입력을 고쳐 다시 요청하면 해결됩니다.
///
/// ### 저장소 계층
/// - `ConflictError`: 저장소 수준 유니크 제약 위반
/// - `RecordNotFound`: 존재하지 않는 id 삭제 시도
/// - `DatabaseError`: 드라이버/서버 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// 사용자 데이터 검증 실패
    ///
    /// 메시지는 어떤 규칙이 위반되었는지 사람이 읽을 수 있는 형태로 담고 있으며,
    /// 클라이언트에게 그대로(plain text) 전달됩니다.
    ///
    /// ```rust,ignore
    /// return Err(AppError::InvalidData("User name is mandatory".to_string()));
    /// ```
    #[error("{0}")]
    InvalidData(String),

    /// 요청 형식 에러 (400 Bad Request)
    ///
    /// JSON 본문을 해석할 수 없거나 경로 파라미터가 잘못된 경우입니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 저장소의 유니크 인덱스가 쓰기를 거부했을 때 발생합니다.
    /// 서비스 계층은 이 에러를 `InvalidData`로 변환하므로
    /// 정상적인 경로에서는 클라이언트에게 노출되지 않습니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 삭제 대상 레코드가 저장소에 없음 (404 Not Found)
    #[error("No user entity with id {0} exists")]
    RecordNotFound(i64),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// ```rust,ignore
    /// collection.insert_one(&document).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidData(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::RecordNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// `InvalidData`는 위반 메시지만 plain text로 내려주고,
    /// 나머지 에러는 `{"error": "..."}` 형식의 JSON으로 응답합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        match self {
            AppError::InvalidData(message) => HttpResponse::build(status)
                .content_type(ContentType::plaintext())
                .body(message.clone()),
            _ => HttpResponse::build(status).json(serde_json::json!({
                "error": self.to_string()
            })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let state = self.state.write().context("인메모리 저장소 잠금 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[actix_web::test]
    async fn test_invalid_data_is_plain_text_bad_request() {
        let error = AppError::InvalidData("User name is mandatory".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response
            .headers()
            .get(actix_web::http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(body.as_ref(), b"User name is mandatory");
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("malformed json".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_record_not_found_error_response() {
        let error = AppError::RecordNotFound(150);
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_record_not_found_message_names_the_id() {
        assert_eq!(
            AppError::RecordNotFound(150).to_string(),
            "No user entity with id 150 exists"
        );
    }

    #[test]
    fn test_conflict_and_server_errors() {
        assert_eq!(
            AppError::ConflictError("phone".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::DatabaseError("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::InternalError("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}

//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 소셜 로그인 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 에러를
//! 일관된 JSON 응답(`{"error": "..."}`)으로 변환합니다.
//!
//! 프로필 정규화와 `/api/me` 판정 로직은 에러를 만들지 않습니다.
//! 이 타입은 OAuth 로그인 플로우, 세션 저장소, 설정 로딩에서만 사용됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! fn provider_from_path(raw: &str) -> AppResult<SocialProvider> {
//!     SocialProvider::from_str(raw)
//!         .map_err(|_| AppError::UnsupportedProvider(raw.to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 세션 저장소(Redis) 에러 (500 Internal Server Error)
    #[error("Session store error: {0}")]
    SessionStoreError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 지원하지 않는 OAuth 프로바이더 (400 Bad Request)
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 프로바이더 통신 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 필수 설정 누락 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::UnsupportedProvider(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::SessionStoreError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("code is required".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unsupported_provider_response() {
        let error = AppError::UnsupportedProvider("twitter".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Unsupported provider: twitter");
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("state mismatch".to_string());
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_external_service_error_response() {
        let error = AppError::ExternalServiceError("token endpoint returned 500".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        for error in [
            AppError::SessionStoreError("connection refused".to_string()),
            AppError::ConfigurationError("GITHUB_CLIENT_ID".to_string()),
        ] {
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

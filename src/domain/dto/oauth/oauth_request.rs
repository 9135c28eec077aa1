//! OAuth 콜백 요청 DTO
//!
//! 프로바이더가 redirect_uri 로 돌려보내는 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 사용자가 동의를 거부하면 `code`/`state` 없이 `error` 만 전달되므로
/// 두 필드는 기본값을 허용하고, 검증은 에러 확인 이후에 수행합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "State가 필요합니다"))]
    pub state: String,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_callback_deserializes_without_code() {
        let query: OAuthCallbackQuery =
            parse_query("error=access_denied&error_description=user+denied");
        assert_eq!(query.error.as_deref(), Some("access_denied"));
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_complete_callback_validates() {
        let query: OAuthCallbackQuery = parse_query("code=abc&state=xyz");
        assert!(query.validate().is_ok());
        assert!(query.error.is_none());
    }

    fn parse_query(raw: &str) -> OAuthCallbackQuery {
        actix_web::web::Query::<OAuthCallbackQuery>::from_query(raw)
            .unwrap()
            .into_inner()
    }
}

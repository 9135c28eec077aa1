//! OAuth 응답 DTO 모듈
//!
//! Authorization Code Grant 플로우에서 사용하는 응답 DTO 들입니다.

use serde::{Deserialize, Serialize};

/// 프로바이더 토큰 엔드포인트 응답
///
/// Google, GitHub, Kakao 의 공통 필드만 매핑합니다.
/// GitHub 은 `expires_in` 을 내려주지 않을 수 있어 선택 필드입니다.
#[derive(Debug, Deserialize)]
pub struct OAuthTokenResponse {
    /// 프로바이더 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (대부분 "Bearer", GitHub 은 "bearer")
    pub token_type: Option<String>,
    /// 토큰 만료 시간 (초 단위)
    pub expires_in: Option<i64>,
    /// 리프레시 토큰 (선택사항)
    pub refresh_token: Option<String>,
    /// 부여된 권한 범위
    pub scope: Option<String>,
    /// OIDC ID 토큰 (Google)
    pub id_token: Option<String>,
}

/// 토큰 엔드포인트가 200 으로 내려주는 에러 응답 (GitHub)
#[derive(Debug, Deserialize)]
pub struct OAuthErrorResponse {
    pub error: String,
    pub error_description: Option<String>,
}

/// OAuth 로그인 URL 응답
///
/// SPA 클라이언트가 직접 리다이렉트할 수 있도록 제공되는 응답입니다.
#[derive(Debug, Serialize)]
pub struct OAuthLoginUrlResponse {
    /// 프로바이더 인증 페이지 전체 URL
    pub login_url: String,

    /// CSRF 방지용 state 파라미터
    pub state: String,
}

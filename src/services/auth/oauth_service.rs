//! # OAuth 2.0 소셜 로그인 서비스
//!
//! Google / GitHub / Kakao 의 Authorization Code Grant 플로우를 처리하고,
//! 로그인 시점에 프로바이더 attribute 를 [`CanonicalProfile`](crate::domain::models::profile::CanonicalProfile)
//! 로 정규화하여 인증 주체에 붙여둡니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! 브라우저                          우리 서버                              프로바이더
//!    │ GET /oauth2/authorization/kakao │                                      │
//!    ├────────────────────────────────►│ 익명 세션 + state 발급               │
//!    │ 302 Location: authorize?...     │                                      │
//!    │◄────────────────────────────────┤                                      │
//!    │ 사용자 동의 ──────────────────────────────────────────────────────────►│
//!    │ GET /login/oauth2/code/kakao?code&state ◄──────────────────────────────┤
//!    ├────────────────────────────────►│ state 검증                           │
//!    │                                 │ POST token_uri (code → access token) ─►│
//!    │                                 │ GET user_info_uri (bearer) ──────────►│
//!    │                                 │ normalize → Principal → 새 세션       │
//!    │ 302 Location: / (새 세션 쿠키)   │                                      │
//!    │◄────────────────────────────────┤                                      │
//! ```
//!
//! ## 보안 고려사항
//!
//! - **State 매개변수**: 세션에 저장된 1회용 값과 비교, `OAUTH_STATE_TTL_MINUTES` 후 만료
//! - **세션 ID 교체**: 로그인 완료 시 새 세션 ID 발급
//! - **에러 정보 제한**: 프로바이더 응답 본문은 로그에만 남김

use std::sync::Arc;
use std::time::Duration;
use once_cell::sync::Lazy;
use reqwest::header::ACCEPT;
use singleton_macro::service;
use crate::config::{OAuthConfig, OAuthRegistration, SocialProvider};
use crate::domain::dto::oauth::{OAuthErrorResponse, OAuthLoginUrlResponse, OAuthTokenResponse};
use crate::domain::models::auth::Principal;
use crate::domain::models::profile::RawAttributes;
use crate::domain::models::session::SessionRecord;
use crate::errors::errors::{AppError, AppResult};
use crate::services::auth::session_service::{verify_pending_authorization, SessionService};
use crate::services::profile::normalize;

/// 프로바이더 API 호출용 공유 HTTP 클라이언트
///
/// GitHub API 는 User-Agent 헤더가 없으면 403 을 반환합니다.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(OAuthConfig::http_timeout_seconds()))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            log::error!("HTTP 클라이언트 생성 실패, 기본 클라이언트 사용: {}", e);
            reqwest::Client::new()
        })
});

#[service(name = "oauth")]
pub struct OAuthService {
    session_service: Arc<SessionService>,
}

impl OAuthService {
    /// 프로바이더 로그인 URL 을 생성합니다.
    ///
    /// 현재 세션(없으면 새 익명 세션)에 state 를 저장하고, 쿠키로 내려줄 세션과
    /// 리다이렉트 URL 을 함께 반환합니다.
    pub async fn login_url(
        &self,
        provider: SocialProvider,
        current_session_id: Option<&str>,
    ) -> AppResult<(SessionRecord, OAuthLoginUrlResponse)> {
        let registration = OAuthRegistration::for_provider(provider)?;

        let mut record = self.session_service.start_anonymous(current_session_id).await?;
        let pending = self
            .session_service
            .issue_pending_authorization(&mut record, provider)
            .await?;

        let login_url = build_authorization_url(&registration, &pending.state);
        log::debug!("{} 로그인 URL 생성 - 세션: {}", provider, record.session_id);

        Ok((record, OAuthLoginUrlResponse { login_url, state: pending.state }))
    }

    /// Authorization Code 로 로그인을 완료하고 인증된 새 세션을 반환합니다.
    ///
    /// # 처리 단계
    ///
    /// 1. 세션에 저장된 state 검증 (1회용)
    /// 2. Authorization Code → Access Token 교환
    /// 3. user-info 조회
    /// 4. 프로필 정규화 후 인증 주체 생성
    /// 5. 세션 ID 교체
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - state 검증 실패, 잘못된 code, name attribute 누락
    /// * `AppError::ExternalServiceError` - 프로바이더 통신 오류
    /// * `AppError::ConfigurationError` - 프로바이더 설정 누락
    pub async fn authenticate_with_code(
        &self,
        provider: SocialProvider,
        code: &str,
        state: &str,
        current_session_id: Option<&str>,
    ) -> AppResult<SessionRecord> {
        // 1. State 검증
        let (record, pending) = self
            .session_service
            .take_pending_authorization(current_session_id)
            .await?;
        verify_pending_authorization(&pending, provider, state)?;

        let registration = OAuthRegistration::for_provider(provider)?;

        // 2. Authorization code로 액세스 토큰 교환
        let token = self.exchange_code_for_token(&registration, code).await?;

        // 3. 액세스 토큰으로 사용자 정보 조회
        let attributes = self.fetch_user_attributes(&registration, &token.access_token).await?;

        // 4. 프로필 정규화
        let principal = build_principal(provider, attributes)?;

        // 5. 세션 교체
        self.session_service
            .establish(principal, Some(&record.session_id))
            .await
    }

    async fn exchange_code_for_token(
        &self,
        registration: &OAuthRegistration,
        code: &str,
    ) -> AppResult<OAuthTokenResponse> {
        let params = token_request_params(registration, code);

        let response = HTTP_CLIENT
            .post(&registration.token_uri)
            .header(ACCEPT, "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 요청 실패: {}", registration.provider, e)))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            log::warn!("{} 토큰 교환 실패 ({}): {}", registration.provider, status, body);
            return Err(if status.is_client_error() {
                AppError::AuthenticationError(format!("{} 토큰 교환이 거부되었습니다", registration.provider))
            } else {
                AppError::ExternalServiceError(format!("{} 토큰 교환 실패: {}", registration.provider, status))
            });
        }

        parse_token_response(registration.provider, &body)
    }

    async fn fetch_user_attributes(
        &self,
        registration: &OAuthRegistration,
        access_token: &str,
    ) -> AppResult<RawAttributes> {
        let response = HTTP_CLIENT
            .get(&registration.user_info_uri)
            .bearer_auth(access_token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 사용자 정보 요청 실패: {}", registration.provider, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("{} 사용자 정보 조회 실패 ({}): {}", registration.provider, status, error_text);
            return Err(AppError::ExternalServiceError(format!(
                "{} 사용자 정보 조회 실패: {}",
                registration.provider, status
            )));
        }

        response
            .json::<RawAttributes>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 사용자 정보 파싱 실패: {}", registration.provider, e)))
    }
}

/// 프로바이더 인증 페이지 URL 을 만듭니다. 모든 파라미터는 URL 인코딩됩니다.
pub fn build_authorization_url(registration: &OAuthRegistration, state: &str) -> String {
    let params = [
        ("client_id", registration.client_id.clone()),
        ("redirect_uri", registration.redirect_uri.clone()),
        ("scope", registration.scope()),
        ("response_type", "code".to_string()),
        ("state", state.to_string()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if registration.auth_uri.contains('?') { '&' } else { '?' };
    format!("{}{}{}", registration.auth_uri, separator, query_string)
}

/// 토큰 엔드포인트에 보낼 form 파라미터. client secret 이 없으면 (Kakao) 생략합니다.
fn token_request_params(registration: &OAuthRegistration, code: &str) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("grant_type", "authorization_code".to_string()),
        ("code", code.to_string()),
        ("client_id", registration.client_id.clone()),
        ("redirect_uri", registration.redirect_uri.clone()),
    ];

    if let Some(secret) = &registration.client_secret {
        params.push(("client_secret", secret.clone()));
    }

    params
}

/// 토큰 응답 본문을 해석합니다.
///
/// GitHub 은 잘못된 code 에도 200 과 `{"error": ...}` 본문을 돌려주므로 따로 처리합니다.
fn parse_token_response(provider: SocialProvider, body: &str) -> AppResult<OAuthTokenResponse> {
    if let Ok(token) = serde_json::from_str::<OAuthTokenResponse>(body) {
        return Ok(token);
    }

    match serde_json::from_str::<OAuthErrorResponse>(body) {
        Ok(error) => {
            log::warn!("{} 토큰 교환 에러: {} {:?}", provider, error.error, error.error_description);
            Err(AppError::AuthenticationError(
                error.error_description.unwrap_or(error.error),
            ))
        }
        Err(e) => Err(AppError::ExternalServiceError(format!("{} 토큰 응답 파싱 실패: {}", provider, e))),
    }
}

/// user-info attribute 로 인증 주체를 만듭니다. 정규화된 프로필을 함께 보관합니다.
pub fn build_principal(provider: SocialProvider, attributes: RawAttributes) -> AppResult<Principal> {
    let profile = normalize(provider.as_str(), &attributes);

    Principal::new(
        Some(provider.as_str().to_string()),
        provider.name_attribute_key(),
        attributes,
        Some(profile),
    )
}

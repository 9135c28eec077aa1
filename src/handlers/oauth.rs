//! # OAuth 2.0 소셜 로그인 핸들러
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | GET | `/oauth2/authorization/{provider}` | 프로바이더 로그인 페이지로 302 리다이렉트 |
//! | GET | `/oauth2/authorization/{provider}/url` | 로그인 URL 을 JSON 으로 반환 (SPA 용) |
//! | GET | `/login/oauth2/code/{provider}` | 프로바이더 콜백, 로그인 완료 후 302 리다이렉트 |
//!
//! `{provider}` 는 `google`, `github`, `kakao` 중 하나이며 대소문자를 구분하지 않습니다.

use actix_web::http::header::LOCATION;
use actix_web::{get, web, HttpResponse};
use validator::Validate;
use crate::config::{OAuthConfig, SocialProvider};
use crate::domain::dto::oauth::OAuthCallbackQuery;
use crate::domain::models::auth::CurrentSession;
use crate::errors::errors::{AppError, AppResult};
use crate::handlers::session_cookie::session_cookie;
use crate::services::auth::OAuthService;

/// 경로의 provider 를 해석합니다.
fn parse_provider(provider: &str) -> AppResult<SocialProvider> {
    SocialProvider::from_str(provider).map_err(AppError::UnsupportedProvider)
}

/// 프로바이더 로그인 페이지로 리다이렉트합니다.
///
/// 세션이 없으면 익명 세션을 만들어 쿠키로 내려줍니다.
#[get("/{provider}")]
pub async fn authorize(
    path: web::Path<String>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&path)?;

    let oauth_service = OAuthService::instance();
    let (record, url_response) = oauth_service.login_url(provider, session.0.as_deref()).await?;

    Ok(HttpResponse::Found()
        .cookie(session_cookie(&record.session_id))
        .insert_header((LOCATION, url_response.login_url))
        .finish())
}

/// 로그인 URL 을 JSON 으로 반환합니다.
///
/// # Response
///
/// ```json
/// {"login_url": "https://kauth.kakao.com/oauth/authorize?client_id=...", "state": "..."}
/// ```
#[get("/{provider}/url")]
pub async fn authorization_url(
    path: web::Path<String>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&path)?;

    let oauth_service = OAuthService::instance();
    let (record, url_response) = oauth_service.login_url(provider, session.0.as_deref()).await?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&record.session_id))
        .json(url_response))
}

/// 프로바이더 콜백을 처리합니다.
///
/// 로그인이 완료되면 새 세션 쿠키를 발급하고 `LOGIN_SUCCESS_URL` 로 리다이렉트합니다.
#[get("/{provider}")]
pub async fn oauth_callback(
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&path)?;

    // 에러 체크 (사용자가 거부했거나 에러 발생)
    if let Some(error) = &query.error {
        let error_msg = query.error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("{} OAuth 에러: {} - {}", provider, error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    // 유효성 검사
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let oauth_service = OAuthService::instance();
    let record = oauth_service
        .authenticate_with_code(provider, &query.code, &query.state, session.0.as_deref())
        .await?;

    log::info!("{} OAuth 로그인 성공 - 세션: {}", provider, record.session_id);

    Ok(HttpResponse::Found()
        .cookie(session_cookie(&record.session_id))
        .insert_header((LOCATION, OAuthConfig::login_success_url()))
        .finish())
}

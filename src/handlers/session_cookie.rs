//! 세션 쿠키 생성
//!
//! 세션 ID 쿠키는 항상 `HttpOnly`, `SameSite=Lax`, `Path=/` 로 발급합니다.
//! `Secure` 는 `SESSION_COOKIE_SECURE` (기본: prod 환경에서만) 를 따릅니다.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use crate::config::SessionConfig;

/// 세션 ID 를 담은 쿠키
pub fn session_cookie(session_id: &str) -> Cookie<'static> {
    build_cookie(SessionConfig::cookie_name(), session_id.to_string(), SessionConfig::cookie_secure())
}

/// 브라우저에서 세션 쿠키를 지우기 위한 만료 쿠키
pub fn expired_session_cookie() -> Cookie<'static> {
    let mut cookie = build_cookie(SessionConfig::cookie_name(), String::new(), SessionConfig::cookie_secure());
    cookie.set_max_age(Duration::ZERO);
    cookie
}

fn build_cookie(name: String, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .finish()
}

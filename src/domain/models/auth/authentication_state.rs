use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use super::principal::Principal;

/// 현재 요청의 인증 상태
///
/// 세션 미들웨어가 요청마다 계산하여 Request Extensions 에 넣어두며,
/// 핸들러는 이 값을 명시적인 인자로 받습니다.
///
/// `AnonymousSession` 은 세션은 존재하지만 로그인은 완료되지 않은 상태
/// (예: OAuth 리다이렉트 직후)이며, 항상 비로그인과 동일하게 취급해야 합니다.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthenticationState {
    /// 세션 쿠키가 없거나 세션이 만료/삭제됨
    #[default]
    NoAuthentication,

    /// 세션은 있으나 인증 주체가 없음
    AnonymousSession,

    /// 로그인 완료된 세션
    AuthenticatedSession(Principal),
}

/// 세션 미들웨어가 확인한 현재 세션 ID
///
/// 쿠키 값이 실제 저장소에 존재하는 세션일 때만 `Some` 입니다.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurrentSession(pub Option<String>);

impl FromRequest for AuthenticationState {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    /// 미들웨어를 거치지 않은 요청은 비로그인으로 간주합니다.
    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let state = req
            .extensions()
            .get::<AuthenticationState>()
            .cloned()
            .unwrap_or_default();
        ready(Ok(state))
    }
}

impl FromRequest for CurrentSession {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let session = req.extensions().get::<CurrentSession>().cloned().unwrap_or_default();
        ready(Ok(session))
    }
}

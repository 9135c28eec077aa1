//! SessionMiddleware 의 세션 조회 로직
use std::rc::Rc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::{AuthenticationState, CurrentSession};
use crate::errors::errors::AppResult;
use crate::services::auth::SessionService;

/// 세션 ID 로 인증 상태를 조회하는 함수
pub type SessionLookup =
    fn(String) -> LocalBoxFuture<'static, AppResult<(AuthenticationState, CurrentSession)>>;

/// 실제 세션 조회를 수행하는 서비스
pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
    pub cookie_name: Rc<str>,
    pub lookup: SessionLookup,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let cookie_name = self.cookie_name.clone();
        let lookup = self.lookup;

        Box::pin(async move {
            let session_id = req.cookie(&cookie_name).map(|c| c.value().to_string());

            let (state, current) = match session_id {
                Some(session_id) => settle_lookup(lookup(session_id).await),
                None => (AuthenticationState::NoAuthentication, CurrentSession(None)),
            };

            log::debug!(
                "{} {} - 인증 상태: {}",
                req.method(),
                req.path(),
                describe(&state)
            );

            req.extensions_mut().insert(state);
            req.extensions_mut().insert(current);

            service.call(req).await
        })
    }
}

/// Redis 세션 저장소 조회. 기본 [`SessionLookup`] 입니다.
pub fn redis_lookup(
    session_id: String,
) -> LocalBoxFuture<'static, AppResult<(AuthenticationState, CurrentSession)>> {
    Box::pin(async move {
        let (state, record) = SessionService::instance().load_state(&session_id).await?;
        Ok((state, CurrentSession(record.map(|r| r.session_id))))
    })
}

/// 조회 결과를 요청에 넣을 값으로 바꿉니다.
///
/// 저장소 장애는 요청을 실패시키지 않고 비로그인으로 처리합니다.
fn settle_lookup(
    result: AppResult<(AuthenticationState, CurrentSession)>,
) -> (AuthenticationState, CurrentSession) {
    match result {
        Ok(resolved) => resolved,
        Err(err) => {
            log::error!("세션 조회 실패, 비로그인으로 처리: {}", err);
            (AuthenticationState::NoAuthentication, CurrentSession(None))
        }
    }
}

fn describe(state: &AuthenticationState) -> &'static str {
    match state {
        AuthenticationState::NoAuthentication => "none",
        AuthenticationState::AnonymousSession => "anonymous",
        AuthenticationState::AuthenticatedSession(_) => "authenticated",
    }
}

//! 세션 쿠키 기반 인증 상태 미들웨어
//!
//! 요청마다 세션 쿠키를 읽어 [`AuthenticationState`](crate::domain::models::auth::AuthenticationState)
//! 를 계산하고 Request Extensions 에 저장합니다. 요청을 거부하지는 않습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::config::SessionConfig;
use crate::middlewares::session_inner::{redis_lookup, SessionMiddlewareService};
pub use crate::middlewares::session_inner::SessionLookup;

/// 세션 미들웨어
pub struct SessionMiddleware {
    /// 세션 ID 를 담은 쿠키 이름
    cookie_name: String,

    /// 세션 조회 함수 (기본값: Redis)
    lookup: SessionLookup,
}

impl SessionMiddleware {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            lookup: redis_lookup,
        }
    }

    /// 세션 저장소 대신 주어진 함수로 세션을 조회합니다.
    pub fn with_lookup(mut self, lookup: SessionLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// `SESSION_COOKIE_NAME` 설정을 사용하는 미들웨어
    pub fn from_env() -> Self {
        Self::new(SessionConfig::cookie_name())
    }
}

impl Default for SessionMiddleware {
    fn default() -> Self {
        Self::from_env()
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            cookie_name: Rc::from(self.cookie_name.as_str()),
            lookup: self.lookup,
        }))
    }
}

//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 세션 미들웨어 (SessionMiddleware)
//! - 세션 쿠키 추출 및 Redis 세션 조회
//! - `AuthenticationState`, `CurrentSession` 을 request extension 에 저장
//! - 요청을 거부하지 않음 (세션 저장소 장애 시 비로그인으로 진행)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::SessionMiddleware;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(SessionMiddleware::from_env())
//!         .configure(configure_all_routes)
//! })
//! ```
//!
//! 핸들러는 인증 상태를 인자로 받습니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! pub async fn current_identity(state: AuthenticationState) -> HttpResponse {
//!     HttpResponse::Ok().json(resolve(&state))
//! }
//! ```

pub mod session_middleware;
mod session_inner;

// 미들웨어 재export
pub use session_middleware::{SessionLookup, SessionMiddleware};

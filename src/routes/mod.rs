//! API 라우트 설정 모듈
//!
//! 세션 조회 API, 소셜 로그인 엔드포인트와 헬스체크를 등록합니다.
//!
//! # Routes
//!
//! | 경로 | 설명 |
//! |------|------|
//! | `GET /health` | 헬스체크 |
//! | `GET /api/me` | 현재 사용자 (항상 200) |
//! | `POST /api/logout` | 로그아웃 (항상 204) |
//! | `GET /oauth2/authorization/{provider}` | 소셜 로그인 시작 |
//! | `GET /oauth2/authorization/{provider}/url` | 소셜 로그인 URL (JSON) |
//! | `GET /login/oauth2/code/{provider}` | 소셜 로그인 콜백 |
//!
//! 모든 라우트는 공개되어 있으며, 인증 상태는 `SessionMiddleware` 가 계산합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .wrap(SessionMiddleware::from_env())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_identity_routes(cfg);
    configure_oauth_routes(cfg);
}

/// 현재 사용자 / 로그아웃 라우트
///
/// ```bash
/// curl -b "SESSION=..." http://localhost:8080/api/me
/// curl -X POST -b "SESSION=..." http://localhost:8080/api/logout
/// ```
fn configure_identity_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::identity::current_identity)
            .service(handlers::identity::logout)
    );
}

/// 소셜 로그인 라우트
fn configure_oauth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/oauth2/authorization")
            .service(handlers::oauth::authorization_url)
            .service(handlers::oauth::authorize)
    );

    cfg.service(
        web::scope("/login/oauth2/code")
            .service(handlers::oauth::oauth_callback)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "social_login_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "session_store": "Redis",
///     "providers": ["google", "github", "kakao"],
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    let providers: Vec<&str> = crate::config::SocialProvider::ALL.iter().map(|p| p.as_str()).collect();

    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "session_store": "Redis",
            "providers": providers,
            "dependency_injection": "Singleton Macro"
        }
    }))
}

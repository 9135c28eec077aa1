//! 현재 사용자 식별 / 로그아웃 핸들러
//!
//! `/api/me` 는 인증 여부와 관계없이 항상 200 을 반환합니다.
//! 비로그인 사용자에게 401 대신 `authenticated: false` 를 돌려주어
//! 프론트엔드가 별도의 에러 처리 없이 로그인 여부를 판단할 수 있게 합니다.

use actix_web::{get, post, HttpResponse};
use crate::domain::models::auth::{AuthenticationState, CurrentSession};
use crate::handlers::session_cookie::expired_session_cookie;
use crate::services::auth::SessionService;
use crate::services::identity::resolve;

/// 현재 요청의 사용자 정보
///
/// # Response
///
/// ```json
/// {"authenticated": true, "provider": "kakao", "id": "12345", "name": "neko", "email": null}
/// ```
#[get("/me")]
pub async fn current_identity(state: AuthenticationState) -> HttpResponse {
    HttpResponse::Ok().json(resolve(&state))
}

/// 현재 세션을 삭제하고 세션 쿠키를 만료시킵니다.
///
/// 세션이 없어도 204 를 반환합니다.
#[post("/logout")]
pub async fn logout(session: CurrentSession) -> HttpResponse {
    if let CurrentSession(Some(session_id)) = session {
        if let Err(e) = SessionService::instance().invalidate(&session_id).await {
            log::error!("로그아웃 중 세션 삭제 실패: {}", e);
        }
    }

    HttpResponse::NoContent()
        .cookie(expired_session_cookie())
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Service;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpMessage};
    use serde_json::{json, Value};
    use crate::domain::models::auth::Principal;
    use crate::services::profile::normalize;

    async fn call_me(state: Option<AuthenticationState>) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .wrap_fn(move |req, srv| {
                    if let Some(state) = &state {
                        req.extensions_mut().insert(state.clone());
                    }
                    srv.call(req)
                })
                .service(web::scope("/api").service(current_identity)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/me").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    fn github_principal() -> Principal {
        let attributes = json!({"id": 583231, "login": "octocat", "name": null, "email": "octo@github.com"})
            .as_object()
            .cloned()
            .unwrap();
        let profile = normalize("github", &attributes);
        Principal::new(Some("github".to_string()), "id", attributes, Some(profile)).unwrap()
    }

    #[actix_web::test]
    async fn test_me_without_session() {
        let (status, body) = call_me(None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"authenticated": false, "provider": null, "id": null, "name": null, "email": null})
        );
    }

    #[actix_web::test]
    async fn test_me_with_anonymous_session() {
        let (status, body) = call_me(Some(AuthenticationState::AnonymousSession)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["authenticated"], json!(false));
        assert_eq!(body["provider"], Value::Null);
    }

    #[actix_web::test]
    async fn test_me_with_authenticated_session() {
        let state = AuthenticationState::AuthenticatedSession(github_principal());
        let (status, body) = call_me(Some(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "authenticated": true,
                "provider": "github",
                "id": "583231",
                "name": "octocat",
                "email": "octo@github.com"
            })
        );
    }

    #[actix_web::test]
    async fn test_logout_without_session_returns_no_content() {
        let app = test::init_service(App::new().service(web::scope("/api").service(logout))).await;

        let req = test::TestRequest::post().uri("/api/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == crate::config::SessionConfig::cookie_name())
            .unwrap();
        assert_eq!(cookie.value(), "");
    }
}

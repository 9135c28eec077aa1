//! # Session Identity Resolver
//!
//! 현재 요청의 [`AuthenticationState`] 를 `/api/me` 응답으로 변환합니다.
//!
//! ## 판정 규칙
//!
//! ```text
//! NoAuthentication ────────────────► anonymous
//! AnonymousSession ────────────────► anonymous   (세션만 있고 로그인 안 됨)
//! AuthenticatedSession(principal)
//!     ├─ principal.profile 있음 ───► authenticated (로그인 시 정규화된 값 그대로)
//!     └─ profile 없음 ─────────────► authenticated (id/name/email 범용 키로 추출)
//! ```
//!
//! 분류가 애매한 경우는 항상 anonymous 쪽으로 처리합니다.

use crate::domain::dto::identity::IdentityResponse;
use crate::domain::models::auth::{AuthenticationState, Principal};
use crate::domain::models::profile::{attribute_text, CanonicalProfile};
use crate::services::profile::UNKNOWN;

/// 인증 상태를 응답으로 변환합니다. 실패하지 않으며 부수효과가 없습니다.
pub fn resolve(state: &AuthenticationState) -> IdentityResponse {
    match state {
        AuthenticationState::NoAuthentication | AuthenticationState::AnonymousSession => {
            IdentityResponse::anonymous()
        }
        AuthenticationState::AuthenticatedSession(principal) => match &principal.profile {
            Some(profile) => IdentityResponse::of(profile),
            None => {
                log::warn!(
                    "정규화된 프로필이 없는 인증 주체 - 범용 attribute 로 대체 (provider: {:?})",
                    principal.registration_id
                );
                IdentityResponse::of(&fallback_profile(principal))
            }
        },
    }
}

/// 로그인 시 정규화 단계를 거치지 않은 주체에서 최소 정보만 추출합니다.
fn fallback_profile(principal: &Principal) -> CanonicalProfile {
    let attributes = &principal.attributes;

    CanonicalProfile::new(
        principal.registration_id.as_deref().unwrap_or(UNKNOWN),
        attribute_text(attributes, "id").unwrap_or_else(|| UNKNOWN.to_string()),
        attribute_text(attributes, "name").unwrap_or_else(|| UNKNOWN.to_string()),
        attribute_text(attributes, "email"),
        attributes.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::profile::RawAttributes;
    use crate::services::profile::normalize;
    use serde_json::{json, Value};

    fn attrs(value: Value) -> RawAttributes {
        value.as_object().cloned().unwrap()
    }

    fn github_principal() -> Principal {
        let attributes = attrs(json!({"id": 1, "name": "tester", "email": "t@test.com"}));
        let profile = normalize("github", &attributes);
        Principal::new(
            Some("github".to_string()),
            "id",
            attributes,
            Some(profile),
        )
        .unwrap()
    }

    #[test]
    fn test_no_authentication_is_anonymous() {
        assert_eq!(resolve(&AuthenticationState::NoAuthentication), IdentityResponse::anonymous());
    }

    #[test]
    fn test_anonymous_session_is_anonymous() {
        let response = resolve(&AuthenticationState::AnonymousSession);
        assert_eq!(response, IdentityResponse::anonymous());
        assert!(!response.authenticated);
        assert!(response.provider.is_none() && response.id.is_none());
    }

    #[test]
    fn test_authenticated_session_projects_profile() {
        let response = resolve(&AuthenticationState::AuthenticatedSession(github_principal()));

        assert_eq!(
            response,
            IdentityResponse {
                authenticated: true,
                provider: Some("github".to_string()),
                id: Some("1".to_string()),
                name: Some("tester".to_string()),
                email: Some("t@test.com".to_string()),
            }
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let state = AuthenticationState::AuthenticatedSession(github_principal());
        let first = serde_json::to_vec(&resolve(&state)).unwrap();
        let second = serde_json::to_vec(&resolve(&state)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_principal_without_profile_uses_generic_keys() {
        let principal = Principal::new(
            Some("kakao".to_string()),
            "id",
            attrs(json!({"id": 42, "properties": {"nickname": "neko"}})),
            None,
        )
        .unwrap();

        let response = resolve(&AuthenticationState::AuthenticatedSession(principal));
        assert!(response.authenticated);
        assert_eq!(response.provider.as_deref(), Some("kakao"));
        assert_eq!(response.id.as_deref(), Some("42"));
        assert_eq!(response.name.as_deref(), Some("unknown"));
        assert_eq!(response.email, None);
    }

    #[test]
    fn test_fallback_without_registration_id() {
        let principal = Principal::new(None, "sub", attrs(json!({"sub": "abc"})), None).unwrap();

        let response = resolve(&AuthenticationState::AuthenticatedSession(principal));
        assert_eq!(response.provider.as_deref(), Some("unknown"));
        assert_eq!(response.id.as_deref(), Some("unknown"));
        assert_eq!(response.name.as_deref(), Some("unknown"));
    }
}

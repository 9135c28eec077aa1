//! # Social Profile Normalizer
//!
//! 프로바이더마다 다른 user-info 응답 구조를 하나의 [`CanonicalProfile`] 로 변환합니다.
//! 순수 함수이며 실패하지 않습니다. 필드가 없으면 기본값(`"unknown"`, `null`)으로 대체합니다.
//!
//! ## 프로바이더별 추출 규칙
//!
//! | Provider | id | name | email |
//! |----------|----|------|-------|
//! | google | `sub` | `name` → "unknown" | `email` |
//! | github | `id` | `name` → `login` → "unknown" | `email` |
//! | kakao | `id` | `properties.nickname` → "unknown" | `kakao_account.email` |
//! | 그 외 | "unknown" | "unknown" | null |
//!
//! registration id 는 대소문자를 구분합니다. `"GitHub"` 은 그 외 프로바이더로 취급됩니다.
//!
//! 숫자 id 는 문자열로 변환해서 저장합니다. id 는 불투명 토큰이므로 연산에 쓰이지 않습니다.

use crate::config::SocialProvider;
use crate::domain::models::profile::{attribute_text, nested_attribute_text, CanonicalProfile, RawAttributes};

/// 기본 표시 이름 / 알 수 없는 식별자
pub const UNKNOWN: &str = "unknown";

/// 프로바이더 attribute 를 정규화된 프로필로 변환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let attributes = json!({"id": 1, "name": "tester", "email": "t@test.com"});
/// let profile = normalize("github", attributes.as_object().unwrap());
/// assert_eq!(profile.id, "1");
/// ```
pub fn normalize(provider_id: &str, attributes: &RawAttributes) -> CanonicalProfile {
    match SocialProvider::from_registration_id(provider_id) {
        Some(provider) => normalize_known(provider, attributes),
        None => {
            log::debug!("알 수 없는 프로바이더 '{}' - 기본 프로필 사용", provider_id);
            CanonicalProfile::new(provider_id, UNKNOWN, UNKNOWN, None, attributes.clone())
        }
    }
}

fn normalize_known(provider: SocialProvider, attributes: &RawAttributes) -> CanonicalProfile {
    let (id, name, email) = match provider {
        SocialProvider::Google => (
            attribute_text(attributes, "sub"),
            attribute_text(attributes, "name"),
            attribute_text(attributes, "email"),
        ),
        SocialProvider::GitHub => (
            attribute_text(attributes, "id"),
            attribute_text(attributes, "name").or_else(|| attribute_text(attributes, "login")),
            attribute_text(attributes, "email"),
        ),
        // Kakao: 닉네임과 이메일이 중첩 객체 안에 있다
        SocialProvider::Kakao => (
            attribute_text(attributes, "id"),
            nested_attribute_text(attributes, "properties", "nickname"),
            nested_attribute_text(attributes, "kakao_account", "email"),
        ),
    };

    CanonicalProfile::new(
        provider.as_str(),
        id.unwrap_or_default(),
        name.unwrap_or_else(|| UNKNOWN.to_string()),
        email,
        attributes.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn attrs(value: Value) -> RawAttributes {
        value.as_object().cloned().unwrap()
    }

    fn expected(provider: &str, id: &str, name: &str, email: Option<&str>) -> CanonicalProfile {
        CanonicalProfile::new(provider, id, name, email.map(str::to_string), RawAttributes::new())
    }

    #[test]
    fn test_github_profile() {
        let attributes = attrs(json!({"id": 1, "name": "tester", "email": "t@test.com"}));
        let profile = normalize("github", &attributes);

        assert_eq!(profile, expected("github", "1", "tester", Some("t@test.com")));
        assert_eq!(profile.raw_attributes, attributes);
    }

    #[test]
    fn test_github_falls_back_to_login() {
        let profile = normalize("github", &attrs(json!({"id": 3, "login": "octo"})));
        assert_eq!(profile, expected("github", "3", "octo", None));

        // GitHub 은 이름을 설정하지 않은 사용자에게 "name": null 을 내려준다
        let profile = normalize("github", &attrs(json!({"id": 3, "name": null, "login": "octo"})));
        assert_eq!(profile.name, "octo");
    }

    #[test]
    fn test_github_without_name_or_login() {
        let profile = normalize("github", &attrs(json!({"id": 5})));
        assert_eq!(profile, expected("github", "5", "unknown", None));
    }

    #[test]
    fn test_google_profile() {
        let attributes = attrs(json!({"sub": "10769150350006150715113082367", "name": "Jane", "email": "jane@gmail.com"}));
        let profile = normalize("google", &attributes);

        assert_eq!(profile, expected("google", "10769150350006150715113082367", "Jane", Some("jane@gmail.com")));
        assert_eq!(profile.raw_attributes, attributes);
    }

    #[test]
    fn test_google_missing_fields() {
        let profile = normalize("google", &attrs(json!({"sub": "abc"})));
        assert_eq!(profile, expected("google", "abc", "unknown", None));

        let profile = normalize("google", &attrs(json!({})));
        assert_eq!(profile.id, "");
    }

    #[test]
    fn test_kakao_nested_profile() {
        let attributes = attrs(json!({
            "id": 42,
            "properties": {"nickname": "neko"},
            "kakao_account": {"email": "n@x.com"}
        }));
        let profile = normalize("kakao", &attributes);

        assert_eq!(profile, expected("kakao", "42", "neko", Some("n@x.com")));
        assert_eq!(profile.raw_attributes, attributes);
    }

    #[test]
    fn test_kakao_missing_nested_containers() {
        let profile = normalize("kakao", &attrs(json!({"id": 7})));
        assert_eq!(profile, expected("kakao", "7", "unknown", None));
    }

    #[test]
    fn test_kakao_non_object_containers_read_as_empty() {
        let attributes = attrs(json!({
            "id": 8,
            "properties": "nickname",
            "kakao_account": {"email": null}
        }));
        let profile = normalize("kakao", &attributes);
        assert_eq!(profile, expected("kakao", "8", "unknown", None));
    }

    #[test]
    fn test_unknown_provider() {
        let profile = normalize("twitter", &attrs(json!({"id": 99, "name": "tw", "email": "tw@x.com"})));
        assert_eq!(profile, expected("twitter", "unknown", "unknown", None));
    }

    #[test]
    fn test_mixed_case_provider_is_unknown() {
        let profile = normalize("GitHub", &attrs(json!({"id": 1, "login": "octo"})));
        assert_eq!(profile, expected("GitHub", "unknown", "unknown", None));

        let profile = normalize("KAKAO", &attrs(json!({"id": 7, "properties": {"nickname": "neko"}})));
        assert_eq!(profile, expected("KAKAO", "unknown", "unknown", None));
    }

    #[test]
    fn test_large_numeric_id_keeps_all_digits() {
        let profile = normalize("kakao", &attrs(json!({"id": 3_123_456_789_u64})));
        assert_eq!(profile.id, "3123456789");
    }
}

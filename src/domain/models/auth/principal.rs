use serde::{Deserialize, Serialize};
use crate::domain::models::profile::{value_text, CanonicalProfile, RawAttributes};
use crate::errors::errors::{AppError, AppResult};

/// 세션에 보관되는 인증 주체
///
/// OAuth2 로그인 성공 시 한 번 만들어지며, 로그인 시점에 정규화된
/// [`CanonicalProfile`] 을 함께 보관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    /// 로그인에 사용된 registration id (`google` / `github` / `kakao`)
    pub registration_id: Option<String>,

    /// 주체 이름으로 사용하는 attribute 키 (`sub` 또는 `id`)
    pub name_attribute_key: String,

    /// 프로바이더 원본 attributes
    pub attributes: RawAttributes,

    /// 로그인 시점에 정규화된 프로필
    pub profile: Option<CanonicalProfile>,
}

impl Principal {
    /// 인증 주체를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - `name_attribute_key` 값이 attributes 최상위에 없거나 null 인 경우
    pub fn new(
        registration_id: Option<String>,
        name_attribute_key: impl Into<String>,
        attributes: RawAttributes,
        profile: Option<CanonicalProfile>,
    ) -> AppResult<Self> {
        let name_attribute_key = name_attribute_key.into();

        if attributes.get(&name_attribute_key).and_then(value_text).is_none() {
            return Err(AppError::AuthenticationError(format!(
                "user-info 응답에 '{}' 속성이 없습니다",
                name_attribute_key
            )));
        }

        Ok(Self {
            registration_id,
            name_attribute_key,
            attributes,
            profile,
        })
    }

    /// 주체 이름 (name attribute 값의 문자열 표현)
    pub fn name(&self) -> String {
        self.attributes
            .get(&self.name_attribute_key)
            .and_then(value_text)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: serde_json::Value) -> RawAttributes {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_principal_requires_name_attribute() {
        let result = Principal::new(
            Some("github".to_string()),
            "id",
            attrs(json!({"login": "octo"})),
            None,
        );
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));

        let null_id = Principal::new(None, "id", attrs(json!({"id": null})), None);
        assert!(null_id.is_err());
    }

    #[test]
    fn test_principal_name_coerces_numeric_id() {
        let principal = Principal::new(
            Some("kakao".to_string()),
            "id",
            attrs(json!({"id": 42})),
            None,
        )
        .unwrap();

        assert_eq!(principal.name(), "42");
    }
}

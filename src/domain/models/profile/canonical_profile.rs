use serde::{Deserialize, Serialize};
use super::raw_attributes::RawAttributes;

/// 프로바이더에 무관한 정규화된 사용자 프로필
///
/// 로그인 1회당 한 번 만들어지고 세션이 끝날 때까지 변경되지 않습니다.
/// `raw_attributes` 는 디버깅용 원본으로만 보관하며 동등성 비교에서 제외됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalProfile {
    /// `google` / `github` / `kakao`, 또는 알 수 없는 registration id 원문
    pub provider: String,
    /// 프로바이더 범위에서 고유한 사용자 식별자
    pub id: String,
    /// 표시 이름
    pub name: String,
    /// 이메일(없을 수도 있음)
    pub email: Option<String>,
    /// 원본 attributes
    #[serde(default)]
    pub raw_attributes: RawAttributes,
}

impl CanonicalProfile {
    pub fn new(
        provider: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
        email: Option<String>,
        raw_attributes: RawAttributes,
    ) -> Self {
        Self {
            provider: provider.into(),
            id: id.into(),
            name: name.into(),
            email,
            raw_attributes,
        }
    }
}

impl PartialEq for CanonicalProfile {
    fn eq(&self, other: &Self) -> bool {
        self.provider == other.provider
            && self.id == other.id
            && self.name == other.name
            && self.email == other.email
    }
}

impl Eq for CanonicalProfile {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equality_ignores_raw_attributes() {
        let a = CanonicalProfile::new("github", "1", "tester", None, RawAttributes::new());
        let raw = json!({"id": 1, "login": "tester"}).as_object().cloned().unwrap();
        let b = CanonicalProfile::new("github", "1", "tester", None, raw);

        assert_eq!(a, b);
        assert_ne!(a, CanonicalProfile::new("github", "2", "tester", None, RawAttributes::new()));
    }

    #[test]
    fn test_session_serialization_keeps_raw_attributes() {
        let raw = json!({"sub": "abc"}).as_object().cloned().unwrap();
        let profile = CanonicalProfile::new("google", "abc", "unknown", None, raw);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["raw_attributes"]["sub"], "abc");
        assert_eq!(json["email"], serde_json::Value::Null);
    }
}

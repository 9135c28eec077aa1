//! 프로바이더 user-info 응답 attribute 읽기 도우미
//!
//! 프로바이더마다 같은 필드를 문자열, 숫자, null 등 서로 다른 타입으로 내려주므로
//! 모든 읽기는 [`attribute_text`] 를 거쳐 명시적으로 문자열로 변환합니다.

use serde_json::{Map, Value};

/// 프로바이더가 내려준 원본 attribute 맵 (읽기 전용 입력)
pub type RawAttributes = Map<String, Value>;

/// 값 하나를 문자열로 변환합니다.
///
/// * 문자열 → 그대로
/// * 숫자 → 10진 문자열 (`42` → `"42"`)
/// * 불리언 → `"true"` / `"false"`
/// * null, 배열, 객체 → 값 없음
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `key` 에 해당하는 attribute 를 문자열로 읽습니다.
pub fn attribute_text(attributes: &RawAttributes, key: &str) -> Option<String> {
    attributes.get(key).and_then(value_text)
}

/// 중첩 객체 attribute 를 읽습니다. 없거나 객체가 아니면 `None`.
pub fn nested_attributes<'a>(attributes: &'a RawAttributes, key: &str) -> Option<&'a RawAttributes> {
    attributes.get(key).and_then(Value::as_object)
}

/// `container.key` 경로의 값을 문자열로 읽습니다. 컨테이너가 없으면 빈 객체로 취급합니다.
pub fn nested_attribute_text(attributes: &RawAttributes, container: &str, key: &str) -> Option<String> {
    nested_attributes(attributes, container).and_then(|nested| attribute_text(nested, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> RawAttributes {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_value_text_coercion() {
        assert_eq!(value_text(&json!("abc")), Some("abc".to_string()));
        assert_eq!(value_text(&json!(42)), Some("42".to_string()));
        assert_eq!(value_text(&json!(1234567890123_u64)), Some("1234567890123".to_string()));
        assert_eq!(value_text(&json!(true)), Some("true".to_string()));
        assert_eq!(value_text(&json!(null)), None);
        assert_eq!(value_text(&json!([1, 2])), None);
        assert_eq!(value_text(&json!({"a": 1})), None);
    }

    #[test]
    fn test_nested_attribute_text() {
        let attributes = attrs(json!({
            "properties": {"nickname": "neko"},
            "kakao_account": "not-an-object"
        }));

        assert_eq!(nested_attribute_text(&attributes, "properties", "nickname"), Some("neko".to_string()));
        assert_eq!(nested_attribute_text(&attributes, "properties", "missing"), None);
        assert_eq!(nested_attribute_text(&attributes, "kakao_account", "email"), None);
        assert_eq!(nested_attribute_text(&attributes, "absent", "email"), None);
    }
}

use serde::{Deserialize, Serialize};
use crate::domain::models::profile::CanonicalProfile;

/// `/api/me` 응답
///
/// 화면에서 쓰기 쉽도록 다섯 개 키를 항상 내려주며,
/// `authenticated` 가 `false` 이면 나머지는 모두 `null` 입니다.
///
/// ```json
/// {"authenticated": false, "provider": null, "id": null, "name": null, "email": null}
/// {"authenticated": true, "provider": "github", "id": "1", "name": "tester", "email": "t@test.com"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub authenticated: bool,
    pub provider: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl IdentityResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            provider: None,
            id: None,
            name: None,
            email: None,
        }
    }

    pub fn of(profile: &CanonicalProfile) -> Self {
        Self {
            authenticated: true,
            provider: Some(profile.provider.clone()),
            id: Some(profile.id.clone()),
            name: Some(profile.name.clone()),
            email: profile.email.clone(),
        }
    }
}

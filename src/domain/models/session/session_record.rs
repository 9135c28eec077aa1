use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::config::SocialProvider;
use crate::domain::models::auth::{AuthenticationState, Principal};

/// 진행 중인 OAuth 로그인 요청
///
/// 로그인 리다이렉트 시 발급한 state 를 콜백이 돌아올 때까지 보관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingAuthorization {
    pub provider: SocialProvider,
    pub state: String,
    pub issued_at: i64,
}

impl PendingAuthorization {
    pub fn issue(provider: SocialProvider) -> Self {
        Self {
            provider,
            state: Uuid::new_v4().simple().to_string(),
            issued_at: Utc::now().timestamp(),
        }
    }

    /// `ttl_minutes` 가 지났는지 확인합니다. TTL 은 최소 1분입니다.
    pub fn is_expired_at(&self, now: i64, ttl_minutes: i64) -> bool {
        now.saturating_sub(self.issued_at) > ttl_minutes.max(1).saturating_mul(60)
    }
}

/// Redis 에 저장되는 서버 측 세션
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub principal: Option<Principal>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pending_authorization: Option<PendingAuthorization>,

    pub created_at: i64,
    pub last_accessed_at: i64,
}

impl SessionRecord {
    /// 인증 주체가 없는 새 익명 세션
    pub fn anonymous() -> Self {
        let now = Utc::now().timestamp();
        Self {
            session_id: Uuid::new_v4().to_string(),
            principal: None,
            pending_authorization: None,
            created_at: now,
            last_accessed_at: now,
        }
    }

    /// 로그인 완료된 새 세션
    pub fn authenticated(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
            ..Self::anonymous()
        }
    }

    /// 세션 내용을 요청별 인증 상태로 분류합니다.
    pub fn authentication_state(&self) -> AuthenticationState {
        match &self.principal {
            Some(principal) => AuthenticationState::AuthenticatedSession(principal.clone()),
            None => AuthenticationState::AnonymousSession,
        }
    }

    pub fn touch(&mut self) {
        self.last_accessed_at = Utc::now().timestamp();
    }
}

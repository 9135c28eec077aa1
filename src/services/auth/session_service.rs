//! # Session Service
//!
//! 로그인 세션의 생명주기를 관리합니다.
//!
//! ```text
//!  (쿠키 없음) ── start_anonymous ──► 익명 세션 + PendingAuthorization
//!                                            │ OAuth 콜백 성공
//!                                            ▼
//!                              establish (새 세션 ID 발급, 이전 세션 삭제)
//!                                            │
//!                                            ▼
//!                                     인증된 세션 ── invalidate ──► (삭제)
//! ```
//!
//! 로그인 완료 시 세션 ID 를 새로 발급하여 세션 고정(session fixation) 공격을 막습니다.

use std::sync::Arc;
use chrono::Utc;
use singleton_macro::service;
use crate::config::{OAuthConfig, SocialProvider};
use crate::domain::models::auth::{AuthenticationState, Principal};
use crate::domain::models::session::{PendingAuthorization, SessionRecord};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::sessions::SessionRepository;

#[service(name = "session")]
pub struct SessionService {
    session_repo: Arc<SessionRepository>,
}

impl SessionService {
    /// 세션 ID 로 현재 인증 상태를 판정합니다.
    ///
    /// * 세션 없음/만료 → `NoAuthentication`
    /// * 인증 주체 없는 세션 → `AnonymousSession`
    /// * 인증 주체 있는 세션 → `AuthenticatedSession`
    ///
    /// 조회된 세션은 마지막 접근 시각과 만료 시간을 갱신합니다.
    pub async fn load_state(&self, session_id: &str) -> AppResult<(AuthenticationState, Option<SessionRecord>)> {
        match self.session_repo.find(session_id).await? {
            Some(mut record) => {
                record.touch();
                self.session_repo.save(&record).await?;
                Ok((record.authentication_state(), Some(record)))
            }
            None => Ok((AuthenticationState::NoAuthentication, None)),
        }
    }

    /// 현재 세션을 그대로 쓰거나 새 익명 세션을 만듭니다.
    pub async fn start_anonymous(&self, existing_session_id: Option<&str>) -> AppResult<SessionRecord> {
        if let Some(session_id) = existing_session_id {
            if let Some(record) = self.session_repo.find(session_id).await? {
                return Ok(record);
            }
        }

        let record = SessionRecord::anonymous();
        self.session_repo.save(&record).await?;
        log::debug!("익명 세션 생성: {}", record.session_id);
        Ok(record)
    }

    /// 로그인 리다이렉트 직전에 state 를 발급하여 세션에 저장합니다.
    pub async fn issue_pending_authorization(
        &self,
        record: &mut SessionRecord,
        provider: SocialProvider,
    ) -> AppResult<PendingAuthorization> {
        let pending = PendingAuthorization::issue(provider);
        record.pending_authorization = Some(pending.clone());
        self.session_repo.save(record).await?;
        Ok(pending)
    }

    /// 세션에 저장된 state 를 꺼내고 지웁니다 (1회용).
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 세션이 없거나 진행 중인 로그인이 없는 경우
    pub async fn take_pending_authorization(&self, session_id: Option<&str>) -> AppResult<(SessionRecord, PendingAuthorization)> {
        let session_id = session_id
            .ok_or_else(|| AppError::AuthenticationError("로그인 세션이 없습니다".to_string()))?;

        let mut record = self
            .session_repo
            .find(session_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("로그인 세션이 만료되었습니다".to_string()))?;

        let pending = record
            .pending_authorization
            .take()
            .ok_or_else(|| AppError::AuthenticationError("진행 중인 OAuth 로그인이 없습니다".to_string()))?;

        self.session_repo.save(&record).await?;
        Ok((record, pending))
    }

    /// 로그인 완료된 주체로 새 세션을 만들고 이전 세션을 삭제합니다.
    pub async fn establish(&self, principal: Principal, previous_session_id: Option<&str>) -> AppResult<SessionRecord> {
        if let Some(previous) = previous_session_id {
            self.session_repo.delete(previous).await?;
        }

        let record = SessionRecord::authenticated(principal);
        self.session_repo.save(&record).await?;

        log::info!(
            "로그인 세션 생성 - provider: {:?}, 사용자: {}",
            record.principal.as_ref().and_then(|p| p.registration_id.clone()),
            record.principal.as_ref().map(Principal::name).unwrap_or_default()
        );
        Ok(record)
    }

    /// 세션을 삭제합니다. 세션이 없어도 에러가 아닙니다.
    pub async fn invalidate(&self, session_id: &str) -> AppResult<()> {
        self.session_repo.delete(session_id).await?;
        log::info!("세션 무효화: {}", session_id);
        Ok(())
    }
}

/// 콜백으로 돌아온 state 가 발급한 값과 일치하고 아직 유효한지 확인합니다.
///
/// # Errors
///
/// * `AppError::AuthenticationError` - 프로바이더 불일치, state 불일치, 만료
pub fn verify_pending_authorization(
    pending: &PendingAuthorization,
    provider: SocialProvider,
    state: &str,
) -> AppResult<()> {
    if pending.provider != provider {
        return Err(AppError::AuthenticationError(format!(
            "OAuth 프로바이더가 일치하지 않습니다 (요청: {}, 콜백: {})",
            pending.provider, provider
        )));
    }

    if pending.state != state {
        return Err(AppError::AuthenticationError("유효하지 않은 OAuth state".to_string()));
    }

    if pending.is_expired_at(Utc::now().timestamp(), OAuthConfig::state_ttl_minutes()) {
        return Err(AppError::AuthenticationError("OAuth state 가 만료되었습니다".to_string()));
    }

    Ok(())
}

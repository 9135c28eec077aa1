use std::sync::Arc;
use singleton_macro::repository;
use crate::caching::redis::RedisClient;
use crate::config::SessionConfig;
use crate::core::registry::Repository;
use crate::domain::models::session::SessionRecord;
use crate::errors::errors::AppResult;

/// Redis 키 접두사
const SESSION_KEY_PREFIX: &str = "session:";

/// 서버 측 세션 저장소
///
/// 세션 하나를 `session:{id}` 키에 JSON 으로 저장하며, 저장할 때마다
/// `SESSION_TTL_MINUTES` 로 만료 시간을 갱신합니다 (sliding expiration).
#[repository(name = "session", collection = "sessions")]
pub struct SessionRepository {
    redis: Arc<RedisClient>,
}

impl SessionRepository {
    pub async fn find(&self, session_id: &str) -> AppResult<Option<SessionRecord>> {
        if !is_valid_session_id(session_id) {
            log::debug!("형식이 잘못된 세션 ID 무시");
            return Ok(None);
        }

        match self.redis.get::<SessionRecord>(&session_key(session_id)).await {
            Ok(record) => Ok(record),
            // 역직렬화 실패는 손상된 세션으로 보고 삭제한다
            Err(e) if e.kind() == redis::ErrorKind::TypeError => {
                log::warn!("손상된 세션 데이터 삭제 - 세션: {}, 에러: {}", session_id, e);
                self.delete(session_id).await?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn save(&self, record: &SessionRecord) -> AppResult<()> {
        self.redis
            .set_with_expiry(&session_key(&record.session_id), record, SessionConfig::ttl_seconds())
            .await?;
        Ok(())
    }

    pub async fn delete(&self, session_id: &str) -> AppResult<()> {
        self.redis.del(&session_key(session_id)).await?;
        Ok(())
    }
}

fn session_key(session_id: &str) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, session_id)
}

/// 세션 ID 는 UUID 형식만 허용합니다. 임의 쿠키 값으로 Redis 키를 만들지 않기 위함입니다.
fn is_valid_session_id(session_id: &str) -> bool {
    uuid::Uuid::parse_str(session_id).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_format() {
        assert_eq!(
            session_key("0f8fad5b-d9cb-469f-a165-70867728950e"),
            "session:0f8fad5b-d9cb-469f-a165-70867728950e"
        );
    }

    #[test]
    fn test_session_id_validation() {
        assert!(is_valid_session_id(&uuid::Uuid::new_v4().to_string()));
        assert!(!is_valid_session_id(""));
        assert!(!is_valid_session_id("*"));
        assert!(!is_valid_session_id("session:abc"));
    }
}

//! 세션 저장소 모듈
//!
//! Redis 를 사용해서 로그인 세션을 보관합니다.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::sessions::SessionRepository;
//!
//! let session_repo = SessionRepository::instance();
//! let record = session_repo.find(&session_id).await?;
//! ```

pub mod session_repository;

pub use session_repository::*;

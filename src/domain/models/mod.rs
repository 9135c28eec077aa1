//! # Domain Models Module
//!
//! 소셜 로그인 도메인의 값 객체들을 정의합니다.
//! 모든 모델은 생성 후 변경되지 않으며, DB에 영속화되지 않고
//! 세션 수명 동안만 Redis 에 보관됩니다.
//!
//! ## 구성
//!
//! - [`profile`] - `CanonicalProfile`, 원본 attribute 읽기 도우미
//! - [`auth`] - `Principal`, `AuthenticationState`
//! - [`session`] - `SessionRecord`, `PendingAuthorization`
//!
//! ```text
//! 프로바이더 user-info (RawAttributes)
//!          │ normalize
//!          ▼
//!   CanonicalProfile ──► Principal.profile ──► SessionRecord.principal
//!                                                   │ 요청마다
//!                                                   ▼
//!                                          AuthenticationState ──► IdentityResponse
//! ```

pub mod auth;
pub mod profile;
pub mod session;

pub use auth::*;
pub use profile::*;
pub use session::*;

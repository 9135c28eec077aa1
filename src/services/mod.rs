//! 비즈니스 로직 계층
//!
//! - [`profile`] - 프로바이더 attribute 정규화 (순수 함수)
//! - [`identity`] - `/api/me` 인증 상태 판정 (순수 함수)
//! - [`auth`] - `#[service]` 싱글톤: OAuth 로그인 플로우, 세션 관리

pub mod auth;
pub mod identity;
pub mod profile;

//! 인증 서비스 모듈
//!
//! - [`oauth_service`] - 프로바이더 로그인 플로우
//! - [`session_service`] - 로그인 세션 생명주기

pub mod oauth_service;
pub mod session_service;

pub use oauth_service::*;
pub use session_service::*;

//! # Data Transfer Objects
//!
//! HTTP 경계를 넘나드는 요청/응답 구조체들입니다.
//!
//! - [`identity`] - `/api/me` 응답
//! - [`oauth`] - OAuth 콜백 쿼리, 토큰 엔드포인트 응답, 로그인 URL 응답

pub mod identity;
pub mod oauth;

pub use identity::*;
pub use oauth::*;

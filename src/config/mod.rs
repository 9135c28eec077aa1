//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리하는 모듈입니다.
//! Spring Boot의 `application.yml` 중 `spring.security.oauth2.client` 와
//! `server.*` 영역에 해당합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인드 주소, CORS
//! - [`auth_config`] - OAuth 프로바이더 등록 정보, 세션 쿠키, state 수명
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{OAuthRegistration, ServerConfig, SessionConfig, SocialProvider};
//!
//! let registration = OAuthRegistration::for_provider(SocialProvider::Kakao)?;
//! let cookie = SessionConfig::cookie_name();
//! let bind = ServerConfig::bind_address();
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 `main` 에서 `PROFILE` 값에 따라 로드됩니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

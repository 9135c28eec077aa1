//! 소셜 로그인 세션 서비스 백엔드
//!
//! Google / GitHub / Kakao OAuth 2.0 로그인을 처리하고, 프로바이더마다 다른
//! user-info 응답을 하나의 정규화된 프로필로 변환하여 세션에 보관합니다.
//! 프론트엔드는 `GET /api/me` 하나로 로그인 여부와 사용자 정보를 확인합니다.
//!
//! # Features
//!
//! - **OAuth 2.0**: Google, GitHub, Kakao 소셜 로그인
//! - **프로필 정규화**: 프로바이더 attribute → `{provider, id, name, email}`
//! - **세션 기반 인증**: Redis 세션 + HttpOnly 쿠키, 로그인 시 세션 ID 교체
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← 세션 쿠키 → AuthenticationState
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← OAuth 플로우, 정규화, 판정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 세션 저장소
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │      Redis      │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_login_backend::services::profile::normalize;
//! use social_login_backend::services::identity::resolve;
//!
//! let profile = normalize("kakao", &attributes);
//! let response = resolve(&state);
//! ```

pub mod core;
pub mod config;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

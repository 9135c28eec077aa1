//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser / SPA
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP (세션 쿠키)
//! ┌─────────────────────▼───────────────────────┐
//!   SessionMiddleware - AuthenticationState 계산
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - OAuth 플로우, 세션, 정규화/판정        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - Redis 세션 저장소                 ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`identity`**: 현재 사용자 조회 (`GET /api/me`), 로그아웃 (`POST /api/logout`)
//! - **`oauth`**: 소셜 로그인 시작 / 콜백
//! - **`session_cookie`**: 세션 쿠키 생성 헬퍼
//!
//! 인증 상태는 `HttpRequest` 를 직접 뒤지지 않고 추출자(`AuthenticationState`,
//! `CurrentSession`)로 받습니다.

pub mod identity;
pub mod oauth;
pub mod session_cookie;

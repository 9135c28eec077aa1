//! # Domain Layer
//!
//! 소셜 로그인 도메인의 모델과 DTO 를 정의합니다.
//! 사용자 정보는 DB에 저장하지 않으며, 세션이 살아 있는 동안만 유지됩니다.

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;

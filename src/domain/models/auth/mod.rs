//! 인증 주체와 요청별 인증 상태 모델

pub mod authentication_state;
pub mod principal;

pub use authentication_state::*;
pub use principal::*;

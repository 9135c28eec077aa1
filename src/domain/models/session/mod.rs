//! 서버 측 세션 모델

pub mod session_record;

pub use session_record::*;

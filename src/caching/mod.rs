//! 세션 저장소 캐시 계층

pub mod redis;

//! 정규화된 소셜 프로필 모델

pub mod canonical_profile;
pub mod raw_attributes;

pub use canonical_profile::*;
pub use raw_attributes::*;

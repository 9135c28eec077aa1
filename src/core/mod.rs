//! # Core Module
//!
//! 싱글톤 의존성 주입 레지스트리를 제공합니다.

pub mod registry;

pub use registry::*;

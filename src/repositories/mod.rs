//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! 사용자 정보는 영속화하지 않으므로 저장소는 Redis 세션 하나뿐입니다.

pub mod sessions;

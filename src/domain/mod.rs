//! 도메인 계층 모듈
//!
//! - [`entities`] - 저장소에 영속화되는 엔티티 (`User`)
//! - [`dto`] - HTTP 요청/응답 데이터 구조

pub mod entities;
pub mod dto;

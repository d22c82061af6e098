//! 사용자 관리 서비스 모듈
//!
//! 사용자 검증(이름 필수, 전화번호 유일성)과 저장소 중개를 담당합니다.

pub mod user_service;

pub use user_service::UserService;

//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 공백 검사와 정규화
//! - [`display_terminal`] - 부트스트랩 진행 상황 출력

pub mod string_utils;
pub mod display_terminal;

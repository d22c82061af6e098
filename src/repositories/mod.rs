//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`users::UserStore`] trait에만 의존하며,
//! 실행 시 MongoDB 또는 인메모리 구현체가 주입됩니다.

pub mod users;

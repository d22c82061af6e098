//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 요청/응답 매핑             ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService - 검증, 유일성 검사               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserStore - MongoDB / 인메모리                ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<UserService>`로 서비스를 주입받고,
//! 에러는 `AppError`의 `ResponseError` 구현에 맡깁니다.

pub mod users;

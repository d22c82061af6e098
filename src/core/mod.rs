//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 기능을 제공합니다.
//!
//! - [`errors`] - `AppError` 에러 타입과 HTTP 응답 매핑

pub mod errors;

pub use errors::*;

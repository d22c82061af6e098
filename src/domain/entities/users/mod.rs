//! Users Entity Module
//!
//! 사용자 엔티티와 검증 메시지 상수를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new("Jane", Some(" 123 ")).normalize_phone();
//! assert_eq!(user.phone_key(), Some("123"));
//! ```

pub mod user;

pub use user::*;

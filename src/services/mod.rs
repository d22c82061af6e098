//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(store);
//! ```

pub mod users;

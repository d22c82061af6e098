//! 사용자 API DTO
//!
//! - [`UserRequest`] - `POST /users`, `PUT /users` 요청 본문
//! - [`UserResponse`] - 모든 사용자 응답의 직렬화 형태

pub mod user_request;
pub mod user_response;

pub use user_request::UserRequest;
pub use user_response::UserResponse;

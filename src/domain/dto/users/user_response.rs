use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// `phone`은 값이 없어도 `null`로 항상 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Option<i64>,
    pub name: String,
    pub phone: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, phone } = user;
        Self { id, name, phone }
    }
}

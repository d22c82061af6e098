//! 사용자 생성/수정 요청 DTO
//!
//! 모든 필드가 선택 항목입니다. `name`이 빠지거나 `null`이어도
//! JSON 해석 단계에서 거부하지 않고, 서비스 검증에서
//! "User name is mandatory"로 거부되도록 빈 문자열로 변환합니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// `POST /users`, `PUT /users` 요청 본문
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<UserRequest> for User {
    fn from(request: UserRequest) -> Self {
        Self {
            id: request.id,
            name: request.name.unwrap_or_default(),
            phone: request.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let request: UserRequest = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        assert_eq!(request.id, None);
        assert_eq!(request.name.as_deref(), Some("Jane"));
        assert_eq!(request.phone, None);
    }

    #[test]
    fn test_null_name_becomes_empty_candidate() {
        let request: UserRequest =
            serde_json::from_str(r#"{"id":3,"name":null,"phone":" 55 "}"#).unwrap();
        let user = User::from(request);

        assert_eq!(user.id, Some(3));
        assert_eq!(user.name, "");
        assert_eq!(user.phone.as_deref(), Some(" 55 "));
    }
}

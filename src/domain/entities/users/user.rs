//! User Entity Implementation
//!
//! 레지스트리가 관리하는 유일한 엔티티인 사용자 모델입니다.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::utils::string_utils::{clean_optional_string, is_blank, trim_optional};

/// 이름 누락 시 검증 메시지
pub const USER_NAME_MANDATORY: &str = "User name is mandatory";

/// 전화번호 중복 시 검증 메시지
pub const USER_PHONE_EXISTS: &str = "User with such phone already exists";

/// 사용자 엔티티
///
/// - `id`: 저장소가 최초 저장 시 할당합니다. 저장 전에는 `None`입니다.
/// - `name`: 공백을 제거했을 때 비어 있으면 안 됩니다.
/// - `phone`: 선택 항목. 저장 전 앞뒤 공백이 제거되며,
///   비어 있지 않은 값은 전체 사용자 사이에서 유일해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Validate)]
pub struct User {
    pub id: Option<i64>,
    #[validate(custom(function = "validate_name_present"))]
    pub name: String,
    pub phone: Option<String>,
}

impl User {
    /// 아직 저장되지 않은 사용자를 생성합니다.
    pub fn new(name: impl Into<String>, phone: Option<&str>) -> Self {
        Self {
            id: None,
            name: name.into(),
            phone: phone.map(str::to_string),
        }
    }

    /// id를 지정한 사본을 반환합니다.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// 전화번호의 앞뒤 공백을 제거합니다. 없는 값은 그대로 둡니다.
    pub fn normalize_phone(mut self) -> Self {
        self.phone = trim_optional(self.phone);
        self
    }

    /// 유일성 비교에 쓰이는 정규화된 전화번호.
    ///
    /// 공백만 있거나 값이 없으면 `None`이며, 이런 사용자끼리는 충돌하지 않습니다.
    pub fn phone_key(&self) -> Option<&str> {
        clean_optional_string(self.phone.as_deref())
    }

    /// 필드 단위 규칙을 검사하고, 위반 시 첫 번째 메시지를 반환합니다.
    pub fn field_violation(&self) -> Option<String> {
        self.validate().err().map(|errors| first_message(&errors))
    }
}

fn validate_name_present(name: &str) -> Result<(), ValidationError> {
    if is_blank(Some(name)) {
        return Err(ValidationError::new("name_mandatory")
            .with_message(Cow::Borrowed(USER_NAME_MANDATORY)));
    }
    Ok(())
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

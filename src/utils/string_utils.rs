//! # 문자열 유틸리티
//!
//! 사용자 필드 검증과 정규화에 쓰이는 문자열 헬퍼입니다.

/// 값이 없거나 공백 문자만으로 이루어져 있는지 확인합니다.
///
/// ```rust,ignore
/// assert!(is_blank(None));
/// assert!(is_blank(Some(" \t")));
/// assert!(!is_blank(Some("Jane")));
/// ```
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

/// 앞뒤 공백을 제거합니다. 값이 없으면 그대로 `None`을 유지합니다.
///
/// 빈 문자열은 빈 문자열로 남습니다. 저장 형태를 바꾸는 정규화이므로
/// 의미 있는 값인지 여부는 [`clean_optional_string`]으로 판단합니다.
pub fn trim_optional(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string())
}

/// 앞뒤 공백을 제거하고, 비어 있으면 `None`을 반환합니다.
pub fn clean_optional_string(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

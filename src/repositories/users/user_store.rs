//! # 사용자 저장소 포트
//!
//! 서비스 계층이 의존하는 유일한 영속성 인터페이스입니다.
//! 저장소 구현은 검증을 하지 않으며, 규칙 검사는 모두 `UserService`의 몫입니다.
//!
//! ## 구현체
//!
//! | 구현체 | 용도 |
//! |--------|------|
//! | [`UserRepository`](super::user_repo::UserRepository) | MongoDB `users` 컬렉션 |
//! | [`InMemoryUserStore`](super::memory_store::InMemoryUserStore) | 테스트, `STORE_BACKEND=memory` |
//!
//! ## 공통 계약
//!
//! - `save`: `id`가 없으면 새 id를 할당해 삽입하고, 있으면 해당 id로 덮어씁니다(없으면 삽입).
//! - `find_by_name_prefix`: 대소문자를 무시한 접두사 일치.
//! - `find_by_phone`: 정규화된 전화번호의 정확한 일치.
//! - `delete`: 레코드가 없으면 `AppError::RecordNotFound`.
//! - 비어 있지 않은 전화번호가 다른 사용자와 겹치는 쓰기는 `AppError::ConflictError`로 거부합니다.

use async_trait::async_trait;

use crate::config::StoreBackend;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

/// 사용자 영속성 인터페이스
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이 저장소가 구현하는 백엔드 종류 (로그, 헬스 체크용)
    fn backend(&self) -> StoreBackend;

    /// 삽입 또는 id 기준 갱신. 저장된 사용자를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// 저장 순서대로 모든 사용자를 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    async fn find_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<User>>;

    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<User>>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// 이름이 접두사로 시작하는지 대소문자 구분 없이 비교합니다.
pub fn name_matches_prefix(name: &str, prefix: &str) -> bool {
    name.to_lowercase().starts_with(&prefix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_prefix() {
        assert!(name_matches_prefix("Courteney Cox", "court"));
        assert!(name_matches_prefix("Matthew Perry", "maTtHew PeRRy"));
        assert!(name_matches_prefix("Anything", ""));
        assert!(!name_matches_prefix("Jennifer Aniston", "nife"));
        assert!(!name_matches_prefix("Jane", "Janet"));
    }
}

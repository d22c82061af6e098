//! # 인메모리 사용자 저장소
//!
//! 프로세스 메모리에 사용자를 보관하는 `UserStore` 구현체입니다.
//! 테스트와 `STORE_BACKEND=memory` 실행에 사용됩니다.
//!
//! 모든 쓰기는 하나의 쓰기 잠금 안에서 수행되므로
//! 전화번호 유일성 검사와 저장이 원자적으로 이루어집니다.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::config::StoreBackend;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::User;
use crate::repositories::users::user_store::{name_matches_prefix, UserStore};

#[derive(Debug, Default)]
struct MemoryState {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

/// `RwLock<BTreeMap>` 기반 사용자 저장소
///
/// id는 1부터 단조 증가하며 삭제된 id는 재사용하지 않습니다.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: RwLock<MemoryState>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

const LOCK_FAILED: &str = "인메모리 저장소 잠금 실패";

#[async_trait]
impl UserStore for InMemoryUserStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut state = self.state.write().context(LOCK_FAILED)?;

        if let Some(phone) = user.phone_key() {
            let taken = state
                .users
                .values()
                .any(|existing| existing.id != user.id && existing.phone_key() == Some(phone));
            if taken {
                return Err(AppError::ConflictError(format!(
                    "phone '{}' is already stored",
                    phone
                )));
            }
        }

        let id = match user.id {
            Some(id) => {
                state.last_id = state.last_id.max(id);
                id
            }
            None => {
                let next = state.last_id.checked_add(1).ok_or_else(|| {
                    AppError::InternalError("사용할 수 있는 사용자 id가 없습니다".to_string())
                })?;
                state.last_id = next;
                next
            }
        };
        user.id = Some(id);
        state.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let state = self.state.read().context(LOCK_FAILED)?;
        Ok(state.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let state = self.state.read().context(LOCK_FAILED)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<User>> {
        let state = self.state.read().context(LOCK_FAILED)?;
        Ok(state
            .users
            .values()
            .filter(|user| name_matches_prefix(&user.name, prefix))
            .cloned()
            .collect())
    }

    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<User>> {
        let state = self.state.read().context(LOCK_FAILED)?;
        Ok(state
            .users
            .values()
            .find(|user| user.phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut state = self.state.write().context(LOCK_FAILED)?;
        state
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::RecordNotFound(id))
    }
}

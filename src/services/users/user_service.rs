//! # 사용자 관리 서비스 구현
//!
//! 사용자 불변식을 지키고 모든 저장소 접근을 중개하는 핵심 비즈니스 로직입니다.
//!
//! ## 검증 규칙 (생성과 수정에 동일하게 적용)
//!
//! 1. `name`이 비어 있거나 공백뿐이면 → `InvalidData("User name is mandatory")`
//! 2. 공백 제거 후 `phone`이 비어 있지 않으면 같은 번호의 기존 사용자를 조회합니다.
//!    다른 id(또는 후보에 아직 id가 없음)의 사용자가 있으면
//!    → `InvalidData("User with such phone already exists")`
//!
//! ## 동시성
//!
//! 조회 후 저장 방식의 중복 검사는 원자적이지 않습니다. 두 요청이 동시에
//! 검사를 통과하면 저장소의 유니크 제약이 하나를 거부하며,
//! 이 `ConflictError`도 같은 `InvalidData` 메시지로 변환됩니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{User, USER_PHONE_EXISTS};
use crate::repositories::users::user_store::UserStore;
use crate::utils::string_utils::clean_optional_string;

/// 사용자 관리 서비스
///
/// 상태를 갖지 않으며 `Arc<dyn UserStore>`에만 의존합니다.
///
/// ```rust,ignore
/// let service = UserService::new(Arc::new(InMemoryUserStore::new()));
/// let jane = service.create(User::new("Jane", Some("123"))).await?;
/// assert_eq!(service.find_by_id(jane.id.unwrap()).await?, Some(jane));
/// ```
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 사용 중인 저장소 이름
    pub fn backend_name(&self) -> &'static str {
        self.store.backend().as_str()
    }

    /// 새 사용자를 생성합니다.
    ///
    /// 클라이언트가 보낸 `id`는 버리고 저장소가 새 id를 할당합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidData` - 이름 누락 또는 전화번호 중복
    /// * 저장소 에러는 그대로 전달됩니다.
    pub async fn create(&self, candidate: User) -> AppResult<User> {
        self.validate_user(&candidate).await?;

        let mut user = candidate.normalize_phone();
        if let Some(discarded) = user.id.take() {
            log::debug!("생성 요청의 id {} 무시", discarded);
        }

        let created = self.store.save(user).await.map_err(conflict_as_invalid)?;
        log::info!("사용자 생성: id={:?}", created.id);
        Ok(created)
    }

    /// 기존 사용자를 통째로 교체합니다.
    ///
    /// 대상의 존재 여부는 호출자(HTTP 핸들러)가 먼저 확인합니다.
    /// 전화번호 중복 검사에서 자기 자신의 레코드는 제외됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidData` - `id` 누락 또는 양수가 아닌 `id`, 이름 누락, 전화번호 중복
    pub async fn update(&self, candidate: User) -> AppResult<User> {
        match candidate.id {
            None => {
                return Err(AppError::InvalidData("User id is mandatory for update".to_string()));
            }
            Some(id) if id <= 0 => {
                return Err(AppError::InvalidData(format!("User id {} is out of range", id)));
            }
            Some(_) => {}
        }
        self.validate_user(&candidate).await?;

        let updated = self
            .store
            .save(candidate.normalize_phone())
            .await
            .map_err(conflict_as_invalid)?;
        log::info!("사용자 수정: id={:?}", updated.id);
        Ok(updated)
    }

    /// 사용자를 삭제합니다.
    ///
    /// 존재 여부를 미리 검사하지 않으며, 없는 id이면 저장소 에러
    /// (`AppError::RecordNotFound`)가 그대로 전달됩니다.
    pub async fn remove(&self, id: i64) -> AppResult<()> {
        self.store.delete(id).await?;
        log::info!("사용자 삭제: id={}", id);
        Ok(())
    }

    /// 저장소 순서대로 모든 사용자를 반환합니다.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.store.find_all().await
    }

    /// id로 사용자를 조회합니다. 없으면 `Ok(None)`입니다.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        log::debug!("사용자 조회: id={}", id);
        self.store.find_by_id(id).await
    }

    /// 이름이 `prefix`로 시작하는(대소문자 무시) 사용자를 반환합니다.
    pub async fn find_by_name(&self, prefix: &str) -> AppResult<Vec<User>> {
        log::debug!("사용자 이름 검색: prefix={}", prefix);
        self.store.find_by_name_prefix(prefix).await
    }

    /// 공백 제거 후 정확히 일치하는 전화번호의 사용자를 반환합니다.
    ///
    /// 빈 전화번호는 어떤 사용자도 식별하지 않으므로 `Ok(None)`입니다.
    pub async fn find_by_phone(&self, phone: &str) -> AppResult<Option<User>> {
        match clean_optional_string(Some(phone)) {
            Some(phone) => self.store.find_by_phone(phone).await,
            None => Ok(None),
        }
    }

    async fn validate_user(&self, candidate: &User) -> AppResult<()> {
        if let Some(message) = candidate.field_violation() {
            log::warn!("사용자 검증 실패: {}", message);
            return Err(AppError::InvalidData(message));
        }

        if let Some(phone) = candidate.phone_key() {
            if let Some(found) = self.store.find_by_phone(phone).await? {
                if candidate.id.is_none() || found.id != candidate.id {
                    log::warn!("사용자 검증 실패: 전화번호 {} 중복", phone);
                    return Err(AppError::InvalidData(USER_PHONE_EXISTS.to_string()));
                }
            }
        }

        Ok(())
    }
}

/// 저장소 유니크 제약 위반을 검증 실패로 변환합니다.
fn conflict_as_invalid(error: AppError) -> AppError {
    match error {
        AppError::ConflictError(detail) => {
            log::warn!("저장소가 전화번호 중복을 거부: {}", detail);
            AppError::InvalidData(USER_PHONE_EXISTS.to_string())
        }
        other => other,
    }
}

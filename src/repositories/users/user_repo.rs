//! # 사용자 리포지토리 구현 (MongoDB)
//!
//! `users` 컬렉션을 사용하는 `UserStore` 구현체입니다.
//!
//! ## 컬렉션 구조
//!
//! ```text
//! users     { _id: <i64>, name: <string>, phone: <string | null> }
//! counters  { _id: "users", seq: <i64> }
//! ```
//!
//! - **정수 id**: `counters` 문서를 `$inc`로 원자적으로 증가시켜 할당합니다.
//! - **인덱스**: `phone_unique` - 비어 있지 않은 문자열 `phone`에 대한 부분 유니크 인덱스
//! - **중복 키**: 쓰기 에러 코드 11000은 `AppError::ConflictError`로 변환합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReplaceOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};

use crate::config::StoreBackend;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::repositories::users::user_store::UserStore;

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// `users` 컬렉션에 저장되는 문서 형태
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: i64,
    name: String,
    #[serde(default)]
    phone: Option<String>,
}

impl UserDocument {
    fn from_user(id: i64, user: &User) -> Self {
        Self {
            id,
            name: user.name.clone(),
            phone: user.phone.clone(),
        }
    }
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        Self {
            id: Some(document.id),
            name: document.name,
            phone: document.phone,
        }
    }
}

/// MongoDB 사용자 리포지토리
///
/// ```rust,ignore
/// let repo = UserRepository::new(database);
/// repo.create_indexes().await?;
///
/// let saved = repo.save(User::new("Jane", Some("123"))).await?;
/// let found = repo.find_by_id(saved.id.unwrap()).await?;
/// ```
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.db.get_database().collection::<UserDocument>(USERS_COLLECTION)
    }

    fn counters(&self) -> Collection<Document> {
        self.db.get_database().collection::<Document>(COUNTERS_COLLECTION)
    }

    /// 다음 사용자 id를 할당합니다.
    ///
    /// 카운터 문서가 없으면 upsert로 생성되며 첫 id는 1입니다.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters()
            .find_one_and_update(
                doc! { "_id": USERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("id 카운터 문서를 읽을 수 없습니다".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("id 카운터 형식 오류: {}", e)))
    }

    /// 사용자 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. **phone_unique** - `phone`이 비어 있지 않은 문자열인 문서에만 적용되는
    ///    부분 유니크 인덱스. 동시에 같은 번호로 생성 요청이 들어와도
    ///    둘 중 하나만 저장됩니다.
    /// 2. **name_asc** - 이름 접두사 검색용 인덱스
    ///
    /// 이미 중복된 전화번호가 저장되어 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let phone_index = IndexModel::builder()
            .keys(doc! { "phone": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("phone_unique".to_string())
                    .partial_filter_expression(doc! {
                        "phone": { "$type": "string", "$gt": "" }
                    })
                    .build(),
            )
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().name("name_asc".to_string()).build())
            .build();

        self.collection()
            .create_indexes([phone_index, name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("📇 users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

/// 중복 키(11000) 쓰기 에러인지 확인합니다.
fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_write_error(error: MongoError, user: &User) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError(format!(
            "phone '{}' is already stored",
            user.phone.as_deref().unwrap_or_default()
        ))
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

/// 대소문자를 무시하는 접두사 검색 필터
fn name_prefix_filter(prefix: &str) -> Document {
    doc! {
        "name": {
            "$regex": format!("^{}", regex::escape(prefix)),
            "$options": "i",
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    fn backend(&self) -> StoreBackend {
        StoreBackend::MongoDb
    }

    async fn save(&self, user: User) -> AppResult<User> {
        match user.id {
            None => {
                let id = self.next_id().await?;
                let document = UserDocument::from_user(id, &user);
                self.collection()
                    .insert_one(&document)
                    .await
                    .map_err(|e| map_write_error(e, &user))?;
                Ok(User::from(document))
            }
            Some(id) => {
                let document = UserDocument::from_user(id, &user);
                let options = ReplaceOptions::builder().upsert(true).build();
                self.collection()
                    .replace_one(doc! { "_id": id }, &document)
                    .with_options(options)
                    .await
                    .map_err(|e| map_write_error(e, &user))?;
                Ok(User::from(document))
            }
        }
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        let documents: Vec<UserDocument> = self
            .collection()
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let document = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(document.map(User::from))
    }

    async fn find_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<User>> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        let documents: Vec<UserDocument> = self
            .collection()
            .find(name_prefix_filter(prefix))
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<User>> {
        let document = self
            .collection()
            .find_one(doc! { "phone": phone })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(document.map(User::from))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::RecordNotFound(id));
        }
        Ok(())
    }
}

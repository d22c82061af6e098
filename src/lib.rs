//! 사용자 레지스트리 서비스
//!
//! 단일 "User" 리소스(id, 이름, 전화번호)에 대한 CRUD REST API를 제공합니다.
//! 이름 필수 검사와 전화번호 유일성 보장이 핵심 비즈니스 로직입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /users, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답, 상태 코드 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserService   │ ← 검증, 전화번호 유일성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    UserStore    │ ← MongoDB 또는 인메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_registry_service::repositories::users::InMemoryUserStore;
//! use user_registry_service::services::users::UserService;
//! use user_registry_service::domain::entities::users::User;
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! let jane = service.create(User::new("Jane", Some("123"))).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;

//! 사용자 데이터 액세스 계층
//!
//! - [`user_store`] - 저장소 인터페이스 (`UserStore`)
//! - [`user_repo`] - MongoDB 구현체 (`UserRepository`)
//! - [`memory_store`] - 인메모리 구현체 (`InMemoryUserStore`)

pub mod user_store;
pub mod user_repo;
pub mod memory_store;

pub use memory_store::InMemoryUserStore;
pub use user_repo::UserRepository;
pub use user_store::UserStore;

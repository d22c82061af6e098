//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 로드한 뒤 읽어들입니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export HTTP_WORKERS="4"
//!
//! # 저장소
//! export STORE_BACKEND="mongodb"     # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_registry_dev"
//!
//! # Rate limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;

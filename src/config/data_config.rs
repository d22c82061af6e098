//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, MongoDB 연결, 저장소 백엔드 선택,
//! 요청 속도 제한 설정을 환경 변수에서 읽어옵니다.

use std::env;
use std::str::FromStr;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. (대소문자 무관)
    ///
    /// 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 숫자형 환경 변수를 파싱합니다.
///
/// 값이 없거나 파싱에 실패하면 기본값을 사용하며, 실패한 경우 에러 로그를 남깁니다.
fn parse_or_default<T>(key: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}

fn env_numeric<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    parse_or_default(key, env::var(key).ok().as_deref(), default)
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (`PORT`, 기본값: 8080)
    pub fn port() -> u16 {
        env_numeric("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소 (`HOST`, 기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수 (`HTTP_WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        env_numeric("HTTP_WORKERS", 4)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI (`MONGODB_URI`)
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름 (`DATABASE_NAME`)
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_registry_dev".to_string())
    }
}

/// 사용자 저장소 백엔드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB `users` 컬렉션
    MongoDb,
    /// 프로세스 메모리 (재시작 시 데이터 소실)
    Memory,
}

impl StoreBackend {
    /// `STORE_BACKEND` 환경 변수에서 백엔드를 결정합니다. (기본값: MongoDB)
    pub fn current() -> Self {
        Self::from_name(env::var("STORE_BACKEND").ok().as_deref())
    }

    /// 백엔드 이름을 해석합니다. 알 수 없는 값은 MongoDB로 취급합니다.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("memory") | Some("in-memory") | Some("inmemory") => StoreBackend::Memory,
            Some("mongodb") | Some("mongo") | None => StoreBackend::MongoDb,
            Some(other) => {
                log::warn!("알 수 없는 STORE_BACKEND '{}', mongodb 사용", other);
                StoreBackend::MongoDb
            }
        }
    }

    /// 헬스 체크 등에 노출되는 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::MongoDb => "MongoDB",
            StoreBackend::Memory => "in-memory",
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        )
    }

    fn from_values(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        Self {
            per_second: parse_or_default("RATE_LIMIT_PER_SECOND", per_second, 100),
            burst_size: parse_or_default("RATE_LIMIT_BURST_SIZE", burst_size, 200),
        }
    }
}

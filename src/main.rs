//! 사용자 레지스트리 서비스 메인 애플리케이션
//!
//! 환경 설정을 로드하고 저장소(MongoDB 또는 인메모리)를 준비한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use user_registry_service::config::{Environment, RateLimitConfig, ServerConfig, StoreBackend};
use user_registry_service::core::errors::AppResult;
use user_registry_service::db::Database;
use user_registry_service::repositories::users::{InMemoryUserStore, UserRepository, UserStore};
use user_registry_service::routes::configure_all_routes;
use user_registry_service::services::users::UserService;
use user_registry_service::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start,
    print_sub_task,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    print_boxed_title("🚀 USER REGISTRY SERVICE");
    info!("🌍 실행 환경: {:?}", Environment::current());

    let backend = StoreBackend::current();
    info!("🗄 저장소 백엔드: {}", backend.as_str());
    let service = bootstrap(backend).await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    start_http_server(service).await
}

/// 저장소와 서비스를 생성합니다.
async fn bootstrap(backend: StoreBackend) -> AppResult<Arc<UserService>> {
    print_step_start(1, "Preparing user store");
    let store = initialize_store(backend).await?;
    print_sub_task(store.backend().as_str(), "✓ Ready");
    print_step_complete(1, "User store prepared");

    print_step_start(2, "Creating services");
    let service = Arc::new(UserService::new(store));
    print_sub_task("UserService", "✓ Created");
    print_step_complete(2, "Services created");

    Ok(service)
}

/// 설정된 백엔드에 맞는 `UserStore`를 만듭니다.
///
/// MongoDB의 경우 연결을 확인하고 `phone_unique` 인덱스를 생성합니다.
async fn initialize_store(backend: StoreBackend) -> AppResult<Arc<dyn UserStore>> {
    match backend {
        StoreBackend::Memory => {
            info!("🧠 인메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(Database::new().await?);
            let repository = UserRepository::new(database);
            repository.create_indexes().await?;
            Ok(Arc::new(repository))
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다.
///
/// Rate limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(service: Arc<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    print_final_summary(service.backend_name(), &bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let service_data = web::Data::from(service);

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service_data.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다.
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 eprintln으로 남깁니다.
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv::dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 생략: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다.
///
/// `RUST_LOG`가 없으면 "info,actix_web=info"를 사용합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

//! # Route Configuration
//!
//! 애플리케이션의 모든 HTTP 라우트와 추출기(extractor) 설정을 등록합니다.
//!
//! ```text
//! GET    /health
//! GET    /users
//! GET    /users/{id}
//! GET    /users/name/{prefix}
//! POST   /users
//! PUT    /users
//! DELETE /users/{id}
//! ```

use actix_web::{error::InternalError, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;
use crate::services::users::UserService;

/// 모든 라우트를 등록합니다.
///
/// `UserService`는 호출자가 `app_data(web::Data<UserService>)`로 주입해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(path_config());
    cfg.service(health_check);
    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::find_all)
            .service(handlers::users::find_by_name)
            .service(handlers::users::find_by_id)
            .service(handlers::users::create)
            .service(handlers::users::update)
            .service(handlers::users::remove),
    );
}

/// JSON 본문 해석 실패를 `AppError::ValidationError`(400)로 변환합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let app_error = AppError::ValidationError(err.to_string());
        log::debug!("요청 본문 해석 실패: {}", err);
        InternalError::from_response(err, actix_web::ResponseError::error_response(&app_error))
            .into()
    })
}

/// 경로 파라미터 해석 실패(예: 숫자가 아닌 id)를 400으로 변환합니다.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let app_error = AppError::ValidationError(err.to_string());
        InternalError::from_response(err, actix_web::ResponseError::error_response(&app_error))
            .into()
    })
}

#[actix_web::get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_registry_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": service.backend_name(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test as actix_test, App};
    use serde_json::Value;

    use super::*;
    use crate::repositories::users::InMemoryUserStore;

    #[actix_web::test]
    async fn test_health_check_reports_store() {
        let service = UserService::new(Arc::new(InMemoryUserStore::new()));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_all_routes),
        )
        .await;

        let request = actix_test::TestRequest::get().uri("/health").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "in-memory");
    }
}

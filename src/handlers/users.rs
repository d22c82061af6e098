//! # 사용자 HTTP 핸들러
//!
//! `/users` 리소스의 요청을 `UserService` 호출로 변환하고,
//! 결과를 상태 코드와 JSON 응답으로 돌려줍니다.
//!
//! | Method | Path | 성공 | 실패 |
//! |--------|------|------|------|
//! | GET | `/users` | 200, 목록 | - |
//! | GET | `/users/{id}` | 200, 사용자 | 404 (빈 본문) |
//! | GET | `/users/name/{prefix}` | 200, 목록 | - |
//! | POST | `/users` | 200, 생성된 사용자 | 400 검증 메시지 |
//! | PUT | `/users` | 200, 수정된 사용자 | 400 (id 없음) / 404 / 400 검증 메시지 |
//! | DELETE | `/users/{id}` | 200, 삭제 전 사용자 | 404 (빈 본문) |

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::{UserRequest, UserResponse};
use crate::domain::entities::users::User;
use crate::services::users::UserService;

fn to_responses(users: Vec<User>) -> Vec<UserResponse> {
    users.into_iter().map(UserResponse::from).collect()
}

/// 전체 사용자 목록
#[get("")]
pub async fn find_all(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.find_all().await?;
    Ok(HttpResponse::Ok().json(to_responses(users)))
}

/// id로 사용자 조회. 없으면 빈 본문의 404를 반환합니다.
#[get("/{id}")]
pub async fn find_by_id(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = match service.find_by_id(id.into_inner()).await? {
        Some(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        None => HttpResponse::NotFound().finish(),
    };
    Ok(response)
}

/// 이름 접두사 검색. 일치하는 사용자가 없어도 200과 빈 목록을 반환합니다.
#[get("/name/{prefix}")]
pub async fn find_by_name(
    service: web::Data<UserService>,
    prefix: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let users = service.find_by_name(&prefix).await?;
    Ok(HttpResponse::Ok().json(to_responses(users)))
}

/// 사용자 생성
#[post("")]
pub async fn create(
    service: web::Data<UserService>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.create(User::from(payload.into_inner())).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(created)))
}

/// 사용자 수정
///
/// id가 없으면 400, 대상이 없으면 404를 반환하며 두 경우 모두
/// 요청 본문을 그대로 돌려줍니다. 대상이 있으면 서비스 검증을 거쳐 저장합니다.
#[put("")]
pub async fn update(
    service: web::Data<UserService>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let candidate = User::from(payload.into_inner());

    let Some(id) = candidate.id else {
        return Ok(HttpResponse::BadRequest().json(UserResponse::from(candidate)));
    };

    if service.find_by_id(id).await?.is_none() {
        log::debug!("수정 대상 없음: id={}", id);
        return Ok(HttpResponse::NotFound().json(UserResponse::from(candidate)));
    }

    let updated = service.update(candidate).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

/// 사용자 삭제. 삭제 직전의 사용자 정보를 반환합니다.
#[delete("/{id}")]
pub async fn remove(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    match service.find_by_id(id).await? {
        Some(user) => {
            service.remove(id).await?;
            Ok(HttpResponse::Ok().json(UserResponse::from(user)))
        }
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    use crate::repositories::users::InMemoryUserStore;
    use crate::routes::configure_all_routes;
    use crate::services::users::UserService;

    fn user_service() -> UserService {
        UserService::new(Arc::new(InMemoryUserStore::new()))
    }

    macro_rules! test_app {
        ($service:expr) => {
            actix_test::init_service(
                App::new()
                    .app_data(actix_web::web::Data::new($service))
                    .wrap(actix_web::middleware::NormalizePath::trim())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    async fn seed(service: &UserService, name: &str, phone: Option<&str>) -> i64 {
        service
            .create(crate::domain::entities::users::User::new(name, phone))
            .await
            .unwrap()
            .id
            .unwrap()
    }

    #[actix_web::test]
    async fn test_find_all_returns_users() {
        let service = user_service();
        let jane = seed(&service, "Jane", None).await;
        let other = seed(&service, "Jane", Some("19")).await;
        let app = test_app!(service);

        let request = actix_test::TestRequest::get().uri("/users").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(
            body,
            json!([
                { "id": jane, "name": "Jane", "phone": null },
                { "id": other, "name": "Jane", "phone": "19" }
            ])
        );
    }

    #[actix_web::test]
    async fn test_find_all_empty() {
        let app = test_app!(user_service());

        let request = actix_test::TestRequest::get().uri("/users").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_find_by_id() {
        let service = user_service();
        let id = seed(&service, "Jane", None).await;
        let app = test_app!(service);

        let request = actix_test::TestRequest::get().uri(&format!("/users/{}", id)).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["id"], json!(id));
        assert_eq!(body["name"], json!("Jane"));

        let request = actix_test::TestRequest::get().uri("/users/404").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(actix_test::read_body(response).await.is_empty());
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = test_app!(user_service());

        let request = actix_test::TestRequest::get().uri("/users/abc").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_find_by_name() {
        let service = user_service();
        let id = seed(&service, "Jane", None).await;
        let app = test_app!(service);

        let request = actix_test::TestRequest::get().uri("/users/name/ja").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(body, json!([{ "id": id, "name": "Jane", "phone": null }]));

        let request = actix_test::TestRequest::get().uri("/users/name/Bob").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_create_with_trailing_slash() {
        let app = test_app!(user_service());

        let request = actix_test::TestRequest::post()
            .uri("/users/")
            .set_json(json!({ "id": 15, "name": "Jane", "phone": " 123 " }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["name"], json!("Jane"));
        assert_eq!(body["phone"], json!("123"));
        assert!(body["id"].is_i64());
        assert_ne!(body["id"], json!(15));
    }

    #[actix_web::test]
    async fn test_create_invalid_data_returns_message() {
        let service = user_service();
        seed(&service, "A", Some("999")).await;
        let app = test_app!(service);

        let request = actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "B", "phone": "999" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        assert_eq!(body.as_ref(), b"User with such phone already exists");

        let request = actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "phone": "1000" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        assert_eq!(body.as_ref(), b"User name is mandatory");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test_app!(user_service());

        let request = actix_test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_update_existing_user() {
        let service = user_service();
        let id = seed(&service, "Jane", Some("123")).await;
        let app = test_app!(service);

        let request = actix_test::TestRequest::put()
            .uri("/users/")
            .set_json(json!({ "id": id, "name": "Janet", "phone": "123" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "id": id, "name": "Janet", "phone": "123" }));
    }

    #[actix_web::test]
    async fn test_update_without_id_or_unknown_id() {
        let app = test_app!(user_service());

        let request = actix_test::TestRequest::put()
            .uri("/users")
            .set_json(json!({ "name": "Jane" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "id": null, "name": "Jane", "phone": null }));

        let request = actix_test::TestRequest::put()
            .uri("/users")
            .set_json(json!({ "id": 15, "name": "Jane" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_invalid_data() {
        let service = user_service();
        seed(&service, "Owner", Some("2233")).await;
        let id = seed(&service, "Other", Some("4455")).await;
        let app = test_app!(service);

        let request = actix_test::TestRequest::put()
            .uri("/users")
            .set_json(json!({ "id": id, "name": "Other", "phone": "2233" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        assert_eq!(body.as_ref(), b"User with such phone already exists");
    }

    #[actix_web::test]
    async fn test_delete() {
        let service = user_service();
        let id = seed(&service, "Jane", None).await;
        let app = test_app!(service);

        let request = actix_test::TestRequest::delete().uri(&format!("/users/{}", id)).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "id": id, "name": "Jane", "phone": null }));

        let request = actix_test::TestRequest::delete().uri(&format!("/users/{}", id)).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

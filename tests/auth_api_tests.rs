mod test_utils;

use portfolio_catalog_api::auth::jwt::JwtService;
use reqwest::StatusCode;
use serde_json::Value;
use test_utils::*;

#[actix_rt::test]
async fn login_returns_bearer_token() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.api_url("/admin/login"))
        .json(&serde_json::json!({
            "username": TEST_ADMIN_USERNAME,
            "password": TEST_ADMIN_PASSWORD,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["expires_in"], 15 * 60);
}

#[actix_rt::test]
async fn wrong_password_and_unknown_user_fail_identically() {
    let app = TestApp::spawn().await;

    let wrong_password = app.client
        .post(app.api_url("/admin/login"))
        .json(&serde_json::json!({
            "username": TEST_ADMIN_USERNAME,
            "password": "not-the-password",
        }))
        .send()
        .await
        .unwrap();

    let unknown_user = app.client
        .post(app.api_url("/admin/login"))
        .json(&serde_json::json!({
            "username": "nobody",
            "password": TEST_ADMIN_PASSWORD,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    // Same status, same body: the response must not reveal which half failed.
    let body_a = wrong_password.text().await.unwrap();
    let body_b = unknown_user.text().await.unwrap();
    assert_eq!(body_a, body_b);
}

#[actix_rt::test]
async fn login_with_empty_credentials_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.api_url("/admin/login"))
        .json(&serde_json::json!({"username": "", "password": ""}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn admin_routes_require_a_token() {
    let app = TestApp::spawn().await;

    let response = app.client
        .get(app.api_url("/admin/projects"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Missing credentials");
}

#[actix_rt::test]
async fn malformed_token_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.client
        .get(app.api_url("/admin/projects"))
        .bearer_auth("definitely-not-a-jwt")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid token");
}

#[actix_rt::test]
async fn expired_token_is_rejected() {
    let app = TestApp::spawn().await;

    // Same signing secret, but an expiry far enough in the past to clear
    // the decoder's leeway.
    let mut expired_config = test_config();
    expired_config.jwt_expiration_minutes = -5;
    let token = JwtService::new(&expired_config)
        .create_jwt(TEST_ADMIN_USERNAME)
        .unwrap();

    let response = app.client
        .get(app.api_url("/admin/projects"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Token has expired");
}

#[actix_rt::test]
async fn valid_token_grants_admin_access() {
    let app = TestApp::spawn().await;
    let token = app.login_admin().await;

    let response = app.client
        .get(app.api_url("/admin/projects"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn health_endpoint_is_admin_gated() {
    let app = TestApp::spawn().await;

    let unauthenticated = app.client
        .get(app.api_url("/admin/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);

    let token = app.login_admin().await;
    let response = app.client
        .get(app.api_url("/admin/health"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["catalog"]["projects"].is_u64());
}

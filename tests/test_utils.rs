#![allow(dead_code)]

use actix_web::{
    middleware::NormalizePath,
    web,
    App, HttpServer
};
use portfolio_catalog_api::{
    entities::project::{NewProjectRequest, Project, ProjectCategory},
    entities::token::LoginResponse,
    middlewares::auth::AuthMiddleware,
    routes::configure_routes,
    seed::seed_initial_data,
    settings::{AppConfig, AppEnvironment},
    AppState,
};
use reqwest::Client;
use std::{net::TcpListener, sync::Arc, time::Duration};

pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "CorrectHorse9!";

#[derive(Clone)]
pub struct TestApp {
    pub state: Arc<AppState>,
    pub address: String,
    pub client: Client,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = test_config();

        let state = Arc::new(AppState::new(&config));

        seed_initial_data(&state, &config)
            .await
            .expect("Failed to seed test state");

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state_clone = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::from(state_clone.clone()))
                .wrap(NormalizePath::trim())
                .wrap(AuthMiddleware)
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(format!("{}/", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            state,
            address,
            client,
            config,
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.address, path)
    }

    pub async fn login_admin(&self) -> String {
        let response = self.client
            .post(self.api_url("/admin/login"))
            .json(&serde_json::json!({
                "username": TEST_ADMIN_USERNAME,
                "password": TEST_ADMIN_PASSWORD,
            }))
            .send()
            .await
            .expect("Failed to send login request");

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            panic!("Login failed ({}): {}", status, body);
        }

        let login: LoginResponse = response.json().await.expect("Failed to parse login response");
        login.access_token
    }

    pub async fn create_project(&self, token: &str, request: &NewProjectRequest) -> Project {
        let response = self.client
            .post(self.api_url("/admin/projects"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .expect("Failed to send create request");

        let status = response.status();
        if status != reqwest::StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            panic!("Create project failed ({}): {}", status, body);
        }

        response.json().await.expect("Failed to parse created project")
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio Catalog API Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        cors_allowed_origins: vec!["*".to_string()],
        jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs512_1234567890".to_string(),
        jwt_expiration_minutes: 15,
        admin_username: TEST_ADMIN_USERNAME.to_string(),
        admin_password: TEST_ADMIN_PASSWORD.to_string(),
        seed_demo_data: false,
    }
}

pub fn sample_project() -> NewProjectRequest {
    NewProjectRequest {
        title: "Inventory Dashboard".to_string(),
        description: "Stock tracking with live charts".to_string(),
        category: ProjectCategory::WebSystem,
        technologies: vec!["React".to_string(), "Node.js".to_string()],
        image: Some("https://example.com/dashboard.png".to_string()),
        demo_link: Some("https://demo.example.com".to_string()),
        github_link: None,
        featured: false,
    }
}

pub fn sample_android_project() -> NewProjectRequest {
    NewProjectRequest {
        title: "Fitness Tracker".to_string(),
        description: "Workout logging with offline sync".to_string(),
        category: ProjectCategory::AndroidApp,
        technologies: vec!["Kotlin".to_string(), "Room".to_string()],
        image: None,
        demo_link: None,
        github_link: Some("https://github.com/example/fitness".to_string()),
        featured: true,
    }
}

mod test_utils;

use portfolio_catalog_api::repositories::project::ProjectRepository;
use portfolio_catalog_api::seed::seed_initial_data;
use portfolio_catalog_api::AppState;
use test_utils::test_config;

#[actix_rt::test]
async fn seeding_is_idempotent() {
    let mut config = test_config();
    config.seed_demo_data = true;

    let state = AppState::new(&config);

    seed_initial_data(&state, &config).await.unwrap();
    assert_eq!(state.projects_handler.project_repo.count_projects().await.unwrap(), 3);

    // Second run: no duplicate admin, no re-inserted demo rows.
    seed_initial_data(&state, &config).await.unwrap();
    assert_eq!(state.projects_handler.project_repo.count_projects().await.unwrap(), 3);

    let login = state.auth_handler
        .login(portfolio_catalog_api::entities::admin::AdminLoginRequest {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        })
        .await
        .unwrap();
    assert!(!login.access_token.is_empty());
}

#[actix_rt::test]
async fn demo_data_is_skipped_for_a_non_empty_catalog() {
    let mut config = test_config();
    config.seed_demo_data = false;

    let state = AppState::new(&config);
    seed_initial_data(&state, &config).await.unwrap();
    assert_eq!(state.projects_handler.project_repo.count_projects().await.unwrap(), 0);

    let request = test_utils::sample_project();
    state.projects_handler.create_project(request).await.unwrap();

    config.seed_demo_data = true;
    seed_initial_data(&state, &config).await.unwrap();

    // Catalog was not empty, so the three demo rows stay out.
    assert_eq!(state.projects_handler.project_repo.count_projects().await.unwrap(), 1);
}

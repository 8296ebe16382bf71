use crate::entities::project::{NewProjectRequest, ProjectCategory};
use crate::errors::AppError;
use crate::repositories::project::ProjectRepository;
use crate::settings::AppConfig;
use crate::AppState;

/// Startup seeding: make sure the configured admin identity exists, and
/// populate an empty catalog with demo projects when enabled. Safe to run
/// on every boot.
pub async fn seed_initial_data(state: &AppState, config: &AppConfig) -> Result<(), AppError> {
    let created = state.auth_handler
        .ensure_admin(&config.admin_username, &config.admin_password)
        .await?;

    if created {
        tracing::info!(username = %config.admin_username, "Admin account created");
    } else {
        tracing::debug!(username = %config.admin_username, "Admin account already present");
    }

    if config.seed_demo_data {
        seed_demo_projects(state).await?;
    }

    Ok(())
}

async fn seed_demo_projects(state: &AppState) -> Result<(), AppError> {
    if state.projects_handler.project_repo.count_projects().await? > 0 {
        return Ok(());
    }

    // Inserted through the validated use-case path, not raw repository writes.
    for request in demo_projects() {
        state.projects_handler.create_project(request).await?;
    }

    tracing::info!("Demo projects seeded");
    Ok(())
}

fn demo_projects() -> Vec<NewProjectRequest> {
    vec![
        NewProjectRequest {
            title: "Smart Content Management System".to_string(),
            description: "Full content management platform with an advanced admin panel and complete data control".to_string(),
            category: ProjectCategory::WebSystem,
            technologies: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
                "Express".to_string(),
            ],
            image: Some("https://placehold.co/600x400".to_string()),
            demo_link: None,
            github_link: None,
            featured: true,
        },
        NewProjectRequest {
            title: "E-commerce Mobile App".to_string(),
            description: "Android e-commerce application with secure payments and a streamlined shopping flow".to_string(),
            category: ProjectCategory::AndroidApp,
            technologies: vec![
                "Java".to_string(),
                "Firebase".to_string(),
                "SQLite".to_string(),
                "Android Studio".to_string(),
            ],
            image: Some("https://placehold.co/600x400".to_string()),
            demo_link: None,
            github_link: None,
            featured: true,
        },
        NewProjectRequest {
            title: "E-learning Platform".to_string(),
            description: "Interactive learning platform with student and teacher management and progress tracking".to_string(),
            category: ProjectCategory::WebSystem,
            technologies: vec![
                "Vue.js".to_string(),
                "Laravel".to_string(),
                "MySQL".to_string(),
                "WebRTC".to_string(),
            ],
            image: Some("https://placehold.co/600x400".to_string()),
            demo_link: None,
            github_link: None,
            featured: false,
        },
    ]
}

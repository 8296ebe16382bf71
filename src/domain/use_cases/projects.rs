use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::project::{NewProjectRequest, Project, ProjectCategory, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectsHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectsHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectsHandler { project_repo }
    }

    /// Validates the input, assigns a fresh id, and stores the record.
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        request.validate()?;

        let project = request.prepare_for_insert();
        self.project_repo.create_project(&project).await?;

        tracing::info!(project_id = %project.id, "Project created");
        Ok(project)
    }

    /// Public listing with optional category and featured filters.
    pub async fn list_public_projects(
        &self,
        category: Option<ProjectCategory>,
        featured: Option<bool>,
    ) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects(category, featured).await
    }

    pub async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects(None, Some(true)).await
    }

    /// Full catalog, admin surface.
    pub async fn list_all_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects(None, None).await
    }

    pub async fn get_project_by_id(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id)?;
        self.project_repo.get_project_by_id(&valid_id).await
            .map_err(not_found_as_project)
    }

    /// Partial update: fields absent from the request retain their prior
    /// value.
    pub async fn update_project(
        &self,
        id: &str,
        request: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        request.validate()?;

        let valid_id = valid_uuid(id)?;
        self.project_repo.update_project(&valid_id, &request).await
            .map_err(not_found_as_project)
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.project_repo.delete_project(&valid_id).await
            .map_err(not_found_as_project)
    }
}

fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::invalid_field("id", "Invalid UUID format"))
}

fn not_found_as_project(e: AppError) -> AppError {
    match e {
        AppError::NotFound(_) => AppError::NotFound("Project not found".to_string()),
        _ => e,
    }
}

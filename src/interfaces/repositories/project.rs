use std::sync::atomic::Ordering;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::{
    entities::project::{Project, ProjectCategory, UpdateProjectRequest},
    errors::AppError,
    repositories::memory::{MemoryProjectRepo, Sequenced},
};

/// The persistence seam for the catalog. A SQL-backed store plugs in here
/// without touching the use cases.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, project: &Project) -> Result<Uuid, AppError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;
    async fn list_projects(
        &self,
        category: Option<ProjectCategory>,
        featured: Option<bool>,
    ) -> Result<Vec<Project>, AppError>;
    async fn update_project(
        &self,
        id: &Uuid,
        update: &UpdateProjectRequest,
    ) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
    async fn count_projects(&self) -> Result<u64, AppError>;
}

impl MemoryProjectRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepo {
    async fn create_project(&self, project: &Project) -> Result<Uuid, AppError> {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        match self.records.entry(project.id) {
            Entry::Occupied(_) => {
                Err(AppError::Conflict("Project with this id already exists".to_string()))
            }
            Entry::Vacant(entry) => {
                entry.insert(Sequenced {
                    seq,
                    record: project.clone(),
                });
                Ok(project.id)
            }
        }
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError> {
        self.records
            .get(id)
            .map(|entry| entry.value().record.clone())
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    async fn list_projects(
        &self,
        category: Option<ProjectCategory>,
        featured: Option<bool>,
    ) -> Result<Vec<Project>, AppError> {
        let mut entries: Vec<(u64, Project)> = self.records
            .iter()
            .filter(|entry| category.map_or(true, |c| entry.value().record.category == c))
            .filter(|entry| featured.map_or(true, |f| entry.value().record.featured == f))
            .map(|entry| (entry.value().seq, entry.value().record.clone()))
            .collect();

        // Newest first; the insertion sequence breaks created_at ties so the
        // order is stable across repeated calls.
        entries.sort_by(|a, b| (b.1.created_at, b.0).cmp(&(a.1.created_at, a.0)));

        Ok(entries.into_iter().map(|(_, project)| project).collect())
    }

    async fn update_project(
        &self,
        id: &Uuid,
        update: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        // Merge under the entry's shard write guard: concurrent updates to
        // the same id serialize, last write wins.
        let mut entry = self.records
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        update.apply(&mut entry.record);
        Ok(entry.record.clone())
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        self.records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    async fn count_projects(&self) -> Result<u64, AppError> {
        Ok(self.records.len() as u64)
    }
}

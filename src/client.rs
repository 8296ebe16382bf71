//! Typed API client plus the admin panel's session controller.
//!
//! `PortfolioClient` covers the public read surface; `AdminSession` holds
//! the bearer token (present = logged in) and drives the admin CRUD
//! operations, never caching records beyond the server's own responses.

use derive_more::Display;
use reqwest::{Response, StatusCode};
use url::Url;
use uuid::Uuid;

use crate::entities::contact::{ContactForm, ContactListResponse, ContactResponse};
use crate::entities::project::{NewProjectRequest, Project, ProjectCategory, UpdateProjectRequest};
use crate::entities::token::LoginResponse;

#[derive(Debug, Display)]
pub enum ClientError {
    #[display("Not logged in")]
    NotLoggedIn,

    #[display("API error ({status}): {detail}")]
    Api { status: StatusCode, detail: String },

    #[display("Transport error: {_0}")]
    Transport(reqwest::Error),
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err)
    }
}

#[derive(Clone)]
pub struct PortfolioClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PortfolioClient {
    pub fn new(base_url: Url) -> Self {
        PortfolioClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    pub async fn list_projects(
        &self,
        category: Option<ProjectCategory>,
        featured: Option<bool>,
    ) -> Result<Vec<Project>, ClientError> {
        let mut request = self.http.get(self.url("/api/projects"));
        if let Some(category) = category {
            request = request.query(&[("category", category.to_string())]);
        }
        if let Some(featured) = featured {
            request = request.query(&[("featured", featured.to_string())]);
        }

        let response = expect_success(request.send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn list_featured(&self) -> Result<Vec<Project>, ClientError> {
        let response = self.http.get(self.url("/api/projects/featured")).send().await?;
        Ok(expect_success(response).await?.json().await?)
    }

    pub async fn get_project(&self, id: Uuid) -> Result<Project, ClientError> {
        let response = self.http
            .get(self.url(&format!("/api/projects/{id}")))
            .send()
            .await?;
        Ok(expect_success(response).await?.json().await?)
    }

    pub async fn submit_contact(&self, form: &ContactForm) -> Result<ContactResponse, ClientError> {
        let response = self.http
            .post(self.url("/api/contact"))
            .json(form)
            .send()
            .await?;
        Ok(expect_success(response).await?.json().await?)
    }
}

/// Two-state session controller: `token` present means logged in. Every
/// mutation returns the server's authoritative record.
pub struct AdminSession {
    client: PortfolioClient,
    token: Option<String>,
}

impl AdminSession {
    pub fn new(base_url: Url) -> Self {
        AdminSession {
            client: PortfolioClient::new(base_url),
            token: None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn public(&self) -> &PortfolioClient {
        &self.client
    }

    /// On success stores the bearer token; on failure the session stays
    /// logged out and the API error is surfaced.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let response = self.client.http
            .post(self.client.url("/api/admin/login"))
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await?;

        let response: LoginResponse = expect_success(response).await?.json().await?;
        self.token = Some(response.access_token);
        Ok(())
    }

    /// Client-side token disposal; the token itself expires naturally.
    pub fn logout(&mut self) {
        self.token = None;
    }

    pub async fn list_all_projects(&self) -> Result<Vec<Project>, ClientError> {
        let token = self.bearer()?;
        let response = self.client.http
            .get(self.client.url("/api/admin/projects"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(expect_success(response).await?.json().await?)
    }

    pub async fn create_project(&self, project: &NewProjectRequest) -> Result<Project, ClientError> {
        let token = self.bearer()?;
        let response = self.client.http
            .post(self.client.url("/api/admin/projects"))
            .bearer_auth(token)
            .json(project)
            .send()
            .await?;
        Ok(expect_success(response).await?.json().await?)
    }

    pub async fn update_project(
        &self,
        id: Uuid,
        update: &UpdateProjectRequest,
    ) -> Result<Project, ClientError> {
        let token = self.bearer()?;
        let response = self.client.http
            .put(self.client.url(&format!("/api/admin/projects/{id}")))
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;
        Ok(expect_success(response).await?.json().await?)
    }

    /// Single-field merge update toggling the public "featured" placement.
    pub async fn set_featured(&self, id: Uuid, featured: bool) -> Result<Project, ClientError> {
        self.update_project(id, &UpdateProjectRequest::set_featured(featured)).await
    }

    pub async fn delete_project(&self, id: Uuid) -> Result<(), ClientError> {
        let token = self.bearer()?;
        let response = self.client.http
            .delete(self.client.url(&format!("/api/admin/projects/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        expect_success(response).await?;
        Ok(())
    }

    pub async fn contact_messages(&self) -> Result<ContactListResponse, ClientError> {
        let token = self.bearer()?;
        let response = self.client.http
            .get(self.client.url("/api/admin/contact-messages"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(expect_success(response).await?.json().await?)
    }

    fn bearer(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::NotLoggedIn)
    }
}

async fn expect_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error")
            .to_string(),
        Err(_) => "Unknown error".to_string(),
    };

    Err(ClientError::Api { status, detail })
}

use crate::{ApiResponse, ClientResult};

use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tt_config::Config;
use tt_core::{
    CoreError, ProjectDto, ProjectRequest, TagDto, TagRequest, TaskDto, TaskRequest, TemplateDto,
    TemplatePatchRequest, TemplateRequest, WorkspaceDto, WorkspaceRequest,
};

/// HTTP client for the TimeTrack REST API
pub struct Client {
    pub base_url: String,
    pub api_key: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL including the version prefix
    ///   (e.g., "https://api.timetrack.io/api/v1")
    /// * `api_key` - Optional key to include in the X-Api-Key header
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api.base_url, config.api.api_key.as_deref())
    }

    /// Build a request with the api key header when one is configured
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        let mut req = self.client.request(method, &url);

        if let Some(ref api_key) = self.api_key {
            req = req.header("X-Api-Key", api_key);
        }

        req
    }

    /// Execute a request and wrap the remote outcome.
    ///
    /// Transport failures and undecodable 2xx bodies are the only `Err`
    /// cases; any status the service actually answered with comes back as
    /// an [`ApiResponse`].
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<ApiResponse<T>> {
        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            debug!("request failed with status {}", status);
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .and_then(|m| m.as_str())
                        .map(String::from)
                })
                .or_else(|| (!body.is_empty()).then(|| body.clone()));
            return Ok(ApiResponse::failure(status, message));
        }

        let data: T = serde_json::from_str(&body)?;
        Ok(ApiResponse::success(status, data))
    }

    // =========================================================================
    // Workspace Operations
    // =========================================================================

    /// List all workspaces visible to the caller
    pub async fn find_all_workspaces(&self) -> ClientResult<ApiResponse<Vec<WorkspaceDto>>> {
        let req = self.request(Method::GET, "/workspaces");
        self.execute(req).await
    }

    /// Create a new workspace
    pub async fn create_workspace(
        &self,
        request: Option<&WorkspaceRequest>,
    ) -> ClientResult<ApiResponse<WorkspaceDto>> {
        let request = request.ok_or_else(|| CoreError::null_argument())?;
        request.validate()?;

        let req = self.request(Method::POST, "/workspaces").json(request);
        self.execute(req).await
    }

    /// Delete a workspace; returns its last known representation
    pub async fn delete_workspace(
        &self,
        workspace_id: &str,
    ) -> ClientResult<ApiResponse<WorkspaceDto>> {
        let req = self.request(Method::DELETE, &format!("/workspaces/{}", workspace_id));
        self.execute(req).await
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List projects in a workspace
    pub async fn find_all_projects(
        &self,
        workspace_id: &str,
    ) -> ClientResult<ApiResponse<Vec<ProjectDto>>> {
        let req = self.request(
            Method::GET,
            &format!("/workspaces/{}/projects", workspace_id),
        );
        self.execute(req).await
    }

    /// Create a new project in a workspace
    pub async fn create_project(
        &self,
        workspace_id: &str,
        request: Option<&ProjectRequest>,
    ) -> ClientResult<ApiResponse<ProjectDto>> {
        let request = request.ok_or_else(|| CoreError::null_argument())?;
        request.validate()?;

        let req = self
            .request(
                Method::POST,
                &format!("/workspaces/{}/projects", workspace_id),
            )
            .json(request);
        self.execute(req).await
    }

    /// Delete a project; returns its last known representation
    pub async fn delete_project(
        &self,
        workspace_id: &str,
        project_id: &str,
    ) -> ClientResult<ApiResponse<ProjectDto>> {
        let req = self.request(
            Method::DELETE,
            &format!("/workspaces/{}/projects/{}", workspace_id, project_id),
        );
        self.execute(req).await
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// List tasks in a project
    pub async fn find_all_tasks(
        &self,
        workspace_id: &str,
        project_id: &str,
    ) -> ClientResult<ApiResponse<Vec<TaskDto>>> {
        let req = self.request(
            Method::GET,
            &format!(
                "/workspaces/{}/projects/{}/tasks",
                workspace_id, project_id
            ),
        );
        self.execute(req).await
    }

    /// Create a new task in a project
    pub async fn create_task(
        &self,
        workspace_id: &str,
        project_id: &str,
        request: Option<&TaskRequest>,
    ) -> ClientResult<ApiResponse<TaskDto>> {
        let request = request.ok_or_else(|| CoreError::null_argument())?;
        request.validate()?;

        let req = self
            .request(
                Method::POST,
                &format!(
                    "/workspaces/{}/projects/{}/tasks",
                    workspace_id, project_id
                ),
            )
            .json(request);
        self.execute(req).await
    }

    // =========================================================================
    // Tag Operations
    // =========================================================================

    /// List tags in a workspace
    pub async fn find_all_tags(&self, workspace_id: &str) -> ClientResult<ApiResponse<Vec<TagDto>>> {
        let req = self.request(Method::GET, &format!("/workspaces/{}/tags", workspace_id));
        self.execute(req).await
    }

    /// Create a new tag in a workspace
    pub async fn create_tag(
        &self,
        workspace_id: &str,
        request: Option<&TagRequest>,
    ) -> ClientResult<ApiResponse<TagDto>> {
        let request = request.ok_or_else(|| CoreError::null_argument())?;
        request.validate()?;

        let req = self
            .request(Method::POST, &format!("/workspaces/{}/tags", workspace_id))
            .json(request);
        self.execute(req).await
    }

    // =========================================================================
    // Template Operations
    // =========================================================================

    /// List all templates in a workspace
    pub async fn find_all_templates(
        &self,
        workspace_id: &str,
    ) -> ClientResult<ApiResponse<Vec<TemplateDto>>> {
        let req = self.request(
            Method::GET,
            &format!("/workspaces/{}/templates", workspace_id),
        );
        self.execute(req).await
    }

    /// Create templates in a workspace.
    ///
    /// The service may materialize several templates from one request, so
    /// the created representations come back as a list. Precondition checks
    /// run in declaration order and the first violation is the one raised.
    pub async fn create_templates(
        &self,
        workspace_id: &str,
        request: Option<&TemplateRequest>,
    ) -> ClientResult<ApiResponse<Vec<TemplateDto>>> {
        let request = request.ok_or_else(|| CoreError::null_argument())?;
        request.validate()?;

        let req = self
            .request(
                Method::POST,
                &format!("/workspaces/{}/templates", workspace_id),
            )
            .json(request);
        self.execute(req).await
    }

    /// Get a single template by id
    pub async fn get_template(
        &self,
        workspace_id: &str,
        template_id: &str,
    ) -> ClientResult<ApiResponse<TemplateDto>> {
        let req = self.request(
            Method::GET,
            &format!("/workspaces/{}/templates/{}", workspace_id, template_id),
        );
        self.execute(req).await
    }

    /// Rename a template. Partial update, name only.
    pub async fn update_template(
        &self,
        workspace_id: &str,
        template_id: &str,
        request: Option<&TemplatePatchRequest>,
    ) -> ClientResult<ApiResponse<TemplateDto>> {
        let request = request.ok_or_else(|| CoreError::null_argument())?;
        request.validate()?;

        let req = self
            .request(
                Method::PATCH,
                &format!("/workspaces/{}/templates/{}", workspace_id, template_id),
            )
            .json(request);
        self.execute(req).await
    }

    /// Delete a template; returns the representation as it existed
    /// immediately before deletion
    pub async fn delete_template(
        &self,
        workspace_id: &str,
        template_id: &str,
    ) -> ClientResult<ApiResponse<TemplateDto>> {
        let req = self.request(
            Method::DELETE,
            &format!("/workspaces/{}/templates/{}", workspace_id, template_id),
        );
        self.execute(req).await
    }
}

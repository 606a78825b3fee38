use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

/// Payload for creating templates in a workspace.
///
/// The service treats every field as nullable on the wire; `validate` is the
/// client-side guard that rejects a payload before it is ever sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_and_tasks: Option<Vec<ProjectsTaskTupleRequest>>,
}

impl TemplateRequest {
    /// Checks required fields in declaration order and reports the first
    /// violation only: `Name`, `ProjectsAndTasks`, then each tuple's
    /// `ProjectId` and `TaskId`.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.is_none() {
            return Err(CoreError::required("Name"));
        }
        let tuples = self
            .projects_and_tasks
            .as_ref()
            .ok_or_else(|| CoreError::required("ProjectsAndTasks"))?;
        for tuple in tuples {
            tuple.validate()?;
        }
        Ok(())
    }
}

/// One project/task pair referenced by a template.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsTaskTupleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl ProjectsTaskTupleRequest {
    pub fn validate(&self) -> CoreResult<()> {
        if self.project_id.is_none() {
            return Err(CoreError::required("ProjectId"));
        }
        if self.task_id.is_none() {
            return Err(CoreError::required("TaskId"));
        }
        Ok(())
    }
}

/// Payload for renaming a template. Partial update, name only.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TemplatePatchRequest {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.is_none() {
            return Err(CoreError::required("Name"));
        }
        Ok(())
    }
}

/// A template as the service reports it. `id` is server-assigned and stable
/// across get/update/delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub projects_and_tasks: Vec<ProjectsTaskTuple>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsTaskTuple {
    pub project_id: String,
    pub task_id: String,
}

use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

/// Payload for creating a project inside a workspace.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Hex color, e.g. "#FFFFFF".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ProjectRequest {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.is_none() {
            return Err(CoreError::required("Name"));
        }
        if self.color.is_none() {
            return Err(CoreError::required("Color"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub color: String,
    pub workspace_id: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

/// Payload for creating a workspace.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl WorkspaceRequest {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.is_none() {
            return Err(CoreError::required("Name"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDto {
    pub id: String,
    pub name: String,
}

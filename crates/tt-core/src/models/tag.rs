use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

/// Payload for creating a tag inside a workspace.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TagRequest {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.is_none() {
            return Err(CoreError::required("Name"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: String,
    pub name: String,
    pub workspace_id: String,
}

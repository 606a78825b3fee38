pub mod error;
pub mod models;

pub use error::{CoreError, Result as CoreResult};
pub use models::project::{ProjectDto, ProjectRequest};
pub use models::tag::{TagDto, TagRequest};
pub use models::task::{TaskDto, TaskRequest};
pub use models::task_status::TaskStatus;
pub use models::template::{
    ProjectsTaskTuple, ProjectsTaskTupleRequest, TemplateDto, TemplatePatchRequest, TemplateRequest,
};
pub use models::workspace::{WorkspaceDto, WorkspaceRequest};

#[cfg(test)]
mod tests;

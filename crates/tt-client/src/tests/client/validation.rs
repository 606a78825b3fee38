//! Precondition checks fail before anything touches the network, so these
//! tests run against an address nothing listens on.

use crate::Client;

use tt_core::{ProjectsTaskTupleRequest, TemplatePatchRequest, TemplateRequest, WorkspaceRequest};

fn offline_client() -> Client {
    Client::new("http://127.0.0.1:1", None)
}

#[tokio::test]
async fn test_create_templates_null_request() {
    let err = offline_client()
        .create_templates("ws1", None)
        .await
        .unwrap_err();
    assert!(err.is_null_argument());
    assert!(err.to_string().contains("Value cannot be null."));
}

#[tokio::test]
async fn test_create_templates_null_name() {
    let request = TemplateRequest {
        name: None,
        ..Default::default()
    };
    let err = offline_client()
        .create_templates("ws1", Some(&request))
        .await
        .unwrap_err();
    assert_eq!(err.parameter(), Some("Name"));
    assert!(
        err.to_string()
            .contains("Argument cannot be null. (Parameter 'Name')")
    );
}

#[tokio::test]
async fn test_create_templates_null_projects_and_tasks() {
    let request = TemplateRequest {
        name: Some("Test name".to_string()),
        projects_and_tasks: None,
    };
    let err = offline_client()
        .create_templates("ws1", Some(&request))
        .await
        .unwrap_err();
    assert_eq!(err.parameter(), Some("ProjectsAndTasks"));
}

#[tokio::test]
async fn test_create_templates_null_project_id() {
    let request = TemplateRequest {
        name: Some("Test name".to_string()),
        projects_and_tasks: Some(vec![ProjectsTaskTupleRequest {
            project_id: None,
            task_id: Some("Test".to_string()),
        }]),
    };
    let err = offline_client()
        .create_templates("ws1", Some(&request))
        .await
        .unwrap_err();
    assert_eq!(err.parameter(), Some("ProjectId"));
}

#[tokio::test]
async fn test_create_templates_null_task_id() {
    let request = TemplateRequest {
        name: Some("Test name".to_string()),
        projects_and_tasks: Some(vec![ProjectsTaskTupleRequest {
            project_id: Some("Test".to_string()),
            task_id: None,
        }]),
    };
    let err = offline_client()
        .create_templates("ws1", Some(&request))
        .await
        .unwrap_err();
    assert_eq!(err.parameter(), Some("TaskId"));
}

#[tokio::test]
async fn test_update_template_null_request() {
    let err = offline_client()
        .update_template("ws1", "", None)
        .await
        .unwrap_err();
    assert!(err.is_null_argument());
}

#[tokio::test]
async fn test_update_template_null_name() {
    let request = TemplatePatchRequest { name: None };
    let err = offline_client()
        .update_template("ws1", "", Some(&request))
        .await
        .unwrap_err();
    assert_eq!(err.parameter(), Some("Name"));
    assert!(
        err.to_string()
            .contains("Argument cannot be null. (Parameter 'Name')")
    );
}

#[tokio::test]
async fn test_create_workspace_null_request() {
    let err = offline_client().create_workspace(None).await.unwrap_err();
    assert!(err.is_null_argument());
}

#[tokio::test]
async fn test_create_workspace_null_name() {
    let request = WorkspaceRequest { name: None };
    let err = offline_client()
        .create_workspace(Some(&request))
        .await
        .unwrap_err();
    assert_eq!(err.parameter(), Some("Name"));
}

#[tokio::test]
async fn test_create_project_null_request() {
    let err = offline_client()
        .create_project("ws1", None)
        .await
        .unwrap_err();
    assert!(err.is_null_argument());
}

#[tokio::test]
async fn test_create_task_null_request() {
    let err = offline_client()
        .create_task("ws1", "p1", None)
        .await
        .unwrap_err();
    assert!(err.is_null_argument());
}

#[tokio::test]
async fn test_create_tag_null_request() {
    let err = offline_client()
        .create_tag("ws1", None)
        .await
        .unwrap_err();
    assert!(err.is_null_argument());
}

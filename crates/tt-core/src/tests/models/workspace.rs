use crate::WorkspaceRequest;

#[test]
fn test_workspace_request_requires_name() {
    let request = WorkspaceRequest { name: None };
    assert_eq!(request.validate().unwrap_err().parameter(), Some("Name"));
}

#[test]
fn test_workspace_request_valid() {
    let request = WorkspaceRequest {
        name: Some("TemplateWorkspace".to_string()),
    };
    assert!(request.validate().is_ok());
}

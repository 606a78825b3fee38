use crate::{CoreError, ProjectsTaskTupleRequest, TemplatePatchRequest, TemplateRequest};

fn valid_request() -> TemplateRequest {
    TemplateRequest {
        name: Some("Test template".to_string()),
        projects_and_tasks: Some(vec![ProjectsTaskTupleRequest {
            project_id: Some("p1".to_string()),
            task_id: Some("t1".to_string()),
        }]),
    }
}

#[test]
fn test_valid_request_passes() {
    assert!(valid_request().validate().is_ok());
}

#[test]
fn test_missing_name_reports_name() {
    let request = TemplateRequest {
        name: None,
        ..valid_request()
    };
    let err = request.validate().unwrap_err();
    assert_eq!(err.parameter(), Some("Name"));
    assert!(
        err.to_string()
            .contains("Argument cannot be null. (Parameter 'Name')")
    );
}

#[test]
fn test_missing_projects_and_tasks_reports_collection() {
    let request = TemplateRequest {
        name: Some("Test name".to_string()),
        projects_and_tasks: None,
    };
    let err = request.validate().unwrap_err();
    assert_eq!(err.parameter(), Some("ProjectsAndTasks"));
}

#[test]
fn test_missing_project_id_reports_project_id() {
    let request = TemplateRequest {
        name: Some("Test name".to_string()),
        projects_and_tasks: Some(vec![ProjectsTaskTupleRequest {
            project_id: None,
            task_id: Some("Test".to_string()),
        }]),
    };
    let err = request.validate().unwrap_err();
    assert_eq!(err.parameter(), Some("ProjectId"));
}

#[test]
fn test_missing_task_id_reports_task_id() {
    let request = TemplateRequest {
        name: Some("Test name".to_string()),
        projects_and_tasks: Some(vec![ProjectsTaskTupleRequest {
            project_id: Some("Test".to_string()),
            task_id: None,
        }]),
    };
    let err = request.validate().unwrap_err();
    assert_eq!(err.parameter(), Some("TaskId"));
}

#[test]
fn test_first_violation_wins() {
    // Both name and collection are absent; only the first field in
    // declaration order is reported.
    let request = TemplateRequest {
        name: None,
        projects_and_tasks: None,
    };
    let err = request.validate().unwrap_err();
    assert_eq!(err.parameter(), Some("Name"));
}

#[test]
fn test_second_tuple_checked_after_first() {
    let request = TemplateRequest {
        name: Some("Test name".to_string()),
        projects_and_tasks: Some(vec![
            ProjectsTaskTupleRequest {
                project_id: Some("p1".to_string()),
                task_id: Some("t1".to_string()),
            },
            ProjectsTaskTupleRequest {
                project_id: None,
                task_id: Some("t2".to_string()),
            },
        ]),
    };
    let err = request.validate().unwrap_err();
    assert_eq!(err.parameter(), Some("ProjectId"));
}

#[test]
fn test_patch_request_missing_name() {
    let request = TemplatePatchRequest { name: None };
    let err = request.validate().unwrap_err();
    assert_eq!(err.parameter(), Some("Name"));
}

#[test]
fn test_null_argument_is_distinct_from_required() {
    let err = CoreError::null_argument();
    assert!(err.parameter().is_none());
    assert!(err.to_string().contains("Value cannot be null."));
}

#[test]
fn test_request_serializes_camel_case() {
    let json = serde_json::to_value(valid_request()).unwrap();
    assert_eq!(json["name"], "Test template");
    assert_eq!(json["projectsAndTasks"][0]["projectId"], "p1");
    assert_eq!(json["projectsAndTasks"][0]["taskId"], "t1");
}

#[test]
fn test_dto_deserializes_camel_case() {
    let dto: crate::TemplateDto = serde_json::from_str(
        r#"{
            "id": "64c777ddd3fcab07cfbb210c",
            "name": "Test template",
            "projectsAndTasks": [{"projectId": "p1", "taskId": "t1"}]
        }"#,
    )
    .unwrap();
    assert_eq!(dto.id, "64c777ddd3fcab07cfbb210c");
    assert_eq!(dto.projects_and_tasks.len(), 1);
    assert_eq!(dto.projects_and_tasks[0].project_id, "p1");
}

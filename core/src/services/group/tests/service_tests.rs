//! Tests for the group creation service over in-memory repositories.

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{GroupRepository, MockGroupRepository, MockUserRepository};
use crate::services::group::{CreateGroupCommand, GroupService};

fn service_with_user(
    user_id: i64,
) -> (
    GroupService<MockUserRepository, MockGroupRepository>,
    Arc<MockGroupRepository>,
) {
    let users = Arc::new(MockUserRepository::with_user(User::new(
        user_id,
        "tester",
        "test@test2.test",
    )));
    let groups = Arc::new(MockGroupRepository::new());
    (GroupService::new(users, Arc::clone(&groups)), groups)
}

fn valid_command(user_id: i64) -> CreateGroupCommand {
    CreateGroupCommand {
        group_name: Some("new test group".to_string()),
        description: Some("new test group description".to_string()),
        user_id: Some(user_id),
    }
}

#[tokio::test]
async fn test_create_group_success() {
    let (service, groups) = service_with_user(1);

    let group = service.create_group(valid_command(1)).await.unwrap();

    assert_eq!(group.group_name, "new test group");
    assert_eq!(group.description, "new test group description");
    assert_eq!(group.user_id, 1);
    assert_eq!(groups.count().await.unwrap(), 1);

    let stored = groups.find_by_id(group.id).await.unwrap().unwrap();
    assert_eq!(stored, group);
}

#[tokio::test]
async fn test_identical_requests_create_distinct_groups() {
    let (service, groups) = service_with_user(1);

    let first = service.create_group(valid_command(1)).await.unwrap();
    let second = service.create_group(valid_command(1)).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(groups.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_unknown_user_rejected() {
    let (service, groups) = service_with_user(1);

    let result = service.create_group(valid_command(142)).await;

    assert!(matches!(result, Err(DomainError::ReferenceNotFound)));
    assert_eq!(groups.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_user_id_rejected() {
    let (service, groups) = service_with_user(1);

    let command = CreateGroupCommand {
        user_id: None,
        ..valid_command(1)
    };
    let result = service.create_group(command).await;

    assert!(matches!(result, Err(DomainError::ReferenceNotFound)));
    assert_eq!(groups.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_validation_failure_writes_nothing() {
    let (service, groups) = service_with_user(1);

    let command = CreateGroupCommand {
        group_name: Some("".to_string()),
        description: Some("".to_string()),
        user_id: Some(1),
    };
    let result = service.create_group(command).await;

    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::EmptyGroupName))
    ));
    assert_eq!(groups.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_validation_precedes_user_lookup() {
    // Unknown owner and short description together: the field rule wins.
    let (service, _groups) = service_with_user(1);

    let command = CreateGroupCommand {
        group_name: Some("test group name".to_string()),
        description: Some("test".to_string()),
        user_id: Some(142),
    };
    let result = service.create_group(command).await;

    assert!(matches!(
        result,
        Err(DomainError::Validation(
            ValidationError::DescriptionTooShort
        ))
    ));
}

#[tokio::test]
async fn test_insert_failure_propagates() {
    let users = Arc::new(MockUserRepository::with_user(User::new(
        1,
        "tester",
        "test@test2.test",
    )));
    let groups = Arc::new(MockGroupRepository::failing());
    let service = GroupService::new(users, groups);

    let result = service.create_group(valid_command(1)).await;

    assert!(matches!(result, Err(DomainError::Database { .. })));
}

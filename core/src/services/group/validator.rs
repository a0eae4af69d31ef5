//! Field validation for the group-creation command.
//!
//! Pure functions, no persistence access. Checks run in a fixed order and
//! short-circuit: a later rule is only evaluated once every earlier rule
//! has passed, so exactly one rule is ever reported for a given payload.

use crate::errors::ValidationError;

use super::service::CreateGroupCommand;

/// Minimum accepted description length, in characters
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Validate the command's fields, independent of any external state
///
/// Order: group name presence, description presence, description length.
/// A missing JSON key and an empty string fail the same way.
pub fn validate_fields(command: &CreateGroupCommand) -> Result<(), ValidationError> {
    match command.group_name.as_deref() {
        None | Some("") => return Err(ValidationError::EmptyGroupName),
        Some(_) => {}
    }

    let description = match command.description.as_deref() {
        None | Some("") => return Err(ValidationError::EmptyDescription),
        Some(description) => description,
    };

    if description.chars().count() < MIN_DESCRIPTION_LENGTH {
        return Err(ValidationError::DescriptionTooShort);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(group_name: Option<&str>, description: Option<&str>) -> CreateGroupCommand {
        CreateGroupCommand {
            group_name: group_name.map(String::from),
            description: description.map(String::from),
            user_id: Some(1),
        }
    }

    #[test]
    fn test_valid_command_passes() {
        let cmd = command(Some("test group name"), Some("test group description"));
        assert!(validate_fields(&cmd).is_ok());
    }

    #[test]
    fn test_missing_group_name() {
        let cmd = command(None, Some("long enough description"));
        assert_eq!(
            validate_fields(&cmd),
            Err(ValidationError::EmptyGroupName)
        );
    }

    #[test]
    fn test_empty_group_name() {
        let cmd = command(Some(""), Some("long enough description"));
        assert_eq!(
            validate_fields(&cmd),
            Err(ValidationError::EmptyGroupName)
        );
    }

    #[test]
    fn test_group_name_reported_before_description() {
        // Both fields invalid: only the first rule in order is reported.
        let cmd = command(None, None);
        assert_eq!(
            validate_fields(&cmd),
            Err(ValidationError::EmptyGroupName)
        );
    }

    #[test]
    fn test_missing_description() {
        let cmd = command(Some("test group name"), None);
        assert_eq!(
            validate_fields(&cmd),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_empty_description_reported_as_empty_not_short() {
        let cmd = command(Some("test group name"), Some(""));
        assert_eq!(
            validate_fields(&cmd),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_short_description() {
        let cmd = command(Some("test group name"), Some("test"));
        assert_eq!(
            validate_fields(&cmd),
            Err(ValidationError::DescriptionTooShort)
        );
    }

    #[test]
    fn test_description_length_boundary() {
        let nine = "a".repeat(9);
        let cmd = command(Some("test group name"), Some(&nine));
        assert_eq!(
            validate_fields(&cmd),
            Err(ValidationError::DescriptionTooShort)
        );

        let ten = "a".repeat(10);
        let cmd = command(Some("test group name"), Some(&ten));
        assert!(validate_fields(&cmd).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Ten two-byte characters pass the ten-character minimum.
        let cmd = command(Some("test group name"), Some("éééééééééé"));
        assert!(validate_fields(&cmd).is_ok());
    }
}

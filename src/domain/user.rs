//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Storage-generated identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Unique email address
    #[schema(example = "jane@example.com")]
    pub email: String,
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// User display name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// User email address
    #[validate(email(message = "email must be an email"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
}

/// User update data transfer object.
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    /// New display name
    #[schema(example = "Jane Smith")]
    pub name: Option<String>,
    /// New email address
    #[validate(email(message = "email must be an email"))]
    #[schema(example = "jane.smith@example.com")]
    pub email: Option<String>,
}

impl UpdateUser {
    /// True when the payload carries no field to apply
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_rejects_malformed_email() {
        let input = CreateUser {
            name: "Jane".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn create_user_accepts_empty_name() {
        let input = CreateUser {
            name: String::new(),
            email: "jane@example.com".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_user_validates_only_present_fields() {
        assert!(UpdateUser::default().validate().is_ok());

        let bad = UpdateUser {
            name: None,
            email: Some("nope".to_string()),
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn update_user_emptiness() {
        assert!(UpdateUser::default().is_empty());
        let named = UpdateUser {
            name: Some("X".to_string()),
            email: None,
        };
        assert!(!named.is_empty());
    }

    #[test]
    fn user_serializes_to_flat_json() {
        let user = User {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "John Doe", "email": "john@example.com"})
        );
    }
}

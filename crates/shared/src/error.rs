//! Error types for Clinic Access

use thiserror::Error;

/// Error returned when a string does not name a known role
#[derive(Debug, Error)]
#[error("Role '{value}' not found. Available roles: {}", available_roles.join(", "))]
pub struct RoleNotFoundError {
    pub value: String,
    pub available_roles: Vec<String>,
}

/// Error returned when a string does not name a known action verb
#[derive(Debug, Error)]
#[error("Action verb '{value}' is not supported. Expected one of: GET, POST, PUT, DELETE, PATCH")]
pub struct UnknownVerbError {
    pub value: String,
}

/// Error returned when a permission table entry fails validation
#[derive(Debug, Error)]
#[error("Invalid route entry #{index} '{path}': {reason}")]
pub struct InvalidRouteError {
    pub index: usize,
    pub path: String,
    pub reason: String,
}

/// General Clinic Access error type
#[derive(Debug, Error)]
pub enum ClinicError {
    #[error(transparent)]
    InvalidRoute(#[from] InvalidRouteError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ClinicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_not_found_message_lists_roles() {
        let err = RoleNotFoundError {
            value: "janitor".to_string(),
            available_roles: vec!["CEO".to_string(), "ADMIN".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "Role 'janitor' not found. Available roles: CEO, ADMIN"
        );
    }

    #[test]
    fn test_invalid_route_message() {
        let err: ClinicError = InvalidRouteError {
            index: 3,
            path: "patient".to_string(),
            reason: "path must start with '/'".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Invalid route entry #3 'patient': path must start with '/'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ClinicError = io.into();

        assert!(matches!(err, ClinicError::Io(_)));
    }
}

use std::fmt;

/// An error response returned from the analysis API.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// An HTTP status value, without the textual description.
    ///
    /// The analysis API omits it on most handlers, in which case the status line is the only source.
    #[serde(default)]
    pub code: Option<u16>,

    /// Description of the error.
    pub message: String,
}

impl ErrorResponse {
    /// Returns `true` if the server reported that the requested policy or version does not exist.
    pub fn is_not_found(&self) -> bool {
        self.code == Some(404)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl std::error::Error for ErrorResponse {}

/// A single field level validation failure found while writing parameters to a request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{name} in {location} is required")]
    Required { name: String, location: String },

    #[error("{name} in {location} must not be empty")]
    Empty { name: String, location: String },

    /// The value does not match a format of the [`crate::http::strfmt::Registry`].
    #[error("{name} in {location} must be of type {format}: {value:?}")]
    Format {
        name: String,
        location: String,
        format: String,
        value: String,
    },
}

impl ValidationError {
    pub fn required(name: &str, location: &str) -> Self {
        Self::Required {
            name: name.to_string(),
            location: location.to_string(),
        }
    }

    pub fn empty(name: &str, location: &str) -> Self {
        Self::Empty {
            name: name.to_string(),
            location: location.to_string(),
        }
    }

    /// The parameter the failure refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::Required { name, .. } | Self::Empty { name, .. } | Self::Format { name, .. } => name,
        }
    }
}

/// Aggregates every validation failure of one request into a single error value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompositeValidationError {
    pub errors: Vec<ValidationError>,
}

impl CompositeValidationError {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<Vec<ValidationError>> for CompositeValidationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl fmt::Display for CompositeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("validation failure list:")?;
        for error in &self.errors {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CompositeValidationError {}

#[derive(serde::Deserialize)]
pub(crate) struct ErrorWrapper {
    pub(crate) error: ErrorResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_display() {
        let composite = CompositeValidationError::new(vec![
            ValidationError::required("id", "query"),
            ValidationError::empty("versionId", "query"),
        ]);
        assert_eq!(
            composite.to_string(),
            "validation failure list:\nid in query is required\nversionId in query must not be empty"
        );
        assert_eq!(composite.errors[1].name(), "versionId");
    }

    #[test]
    fn test_error_response_without_code() {
        let wrapper: ErrorWrapper = serde_json::from_str(r#"{"error":{"message":"policy does not exist"}}"#).unwrap();
        assert_eq!(wrapper.error.code, None);
        assert!(!wrapper.error.is_not_found());
        assert_eq!(wrapper.error.to_string(), "policy does not exist");

        let response: ErrorResponse = serde_json::from_str(r#"{"code":404,"message":"not found"}"#).unwrap();
        assert!(response.is_not_found());
    }
}

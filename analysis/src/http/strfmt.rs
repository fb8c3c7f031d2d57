use std::collections::HashMap;
use std::fmt;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

pub type Validator = fn(&str) -> bool;

/// Named string formats that typed parameters can be checked against.
///
/// Operations receive the registry when writing their parameters. `get policy` has no
/// formatted parameter and passes it through untouched; a parameter that fails its format
/// is reported as [`crate::http::error::ValidationError::Format`].
#[derive(Clone)]
pub struct Registry {
    formats: HashMap<String, Validator>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.add("date-time", |v| OffsetDateTime::parse(v, &Rfc3339).is_ok());
        // hyphens are optional, as for the API schema's uuid format
        registry.add("uuid", |v| Uuid::try_parse(v).is_ok());
        registry
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.formats.keys().collect();
        names.sort();
        f.debug_struct("Registry").field("formats", &names).finish()
    }
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            formats: HashMap::new(),
        }
    }

    /// Registers a format, replacing any validator already registered under the same name.
    pub fn add(&mut self, name: &str, validator: Validator) {
        self.formats.insert(name.to_ascii_lowercase(), validator);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formats.contains_key(&name.to_ascii_lowercase())
    }

    /// Unknown formats never validate.
    pub fn validate(&self, name: &str, value: &str) -> bool {
        self.formats
            .get(&name.to_ascii_lowercase())
            .map(|validator| validator(value))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::strfmt::Registry;

    #[test]
    fn test_default_formats() {
        let registry = Registry::default();
        assert!(registry.contains("uuid"));
        assert!(registry.contains("Date-Time"));
        assert!(!registry.contains("email"));

        assert!(registry.validate("date-time", "2020-03-01T12:30:00Z"));
        assert!(!registry.validate("date-time", "yesterday"));
        assert!(!registry.validate("email", "analyst@runpanther.io"));
    }

    #[test]
    fn test_uuid_forms() {
        let registry = Registry::default();
        assert!(registry.validate("uuid", "6f1b6c1e-9d2f-4d8f-a4a1-3c2b1a0f9e8d"));
        assert!(registry.validate("uuid", "6f1b6c1e9d2f4d8fa4a13c2b1a0f9e8d"));
        assert!(!registry.validate("uuid", "6f1b6c1e-9d2f-4d8f-a4a1"));
        assert!(!registry.validate("uuid", "rule-1"));
    }

    #[test]
    fn test_add_format() {
        let mut registry = Registry::empty();
        assert!(!registry.contains("severity"));
        registry.add("severity", |v| matches!(v, "INFO" | "LOW" | "MEDIUM" | "HIGH" | "CRITICAL"));
        assert!(registry.validate("severity", "HIGH"));
        assert!(!registry.validate("severity", "URGENT"));
    }
}

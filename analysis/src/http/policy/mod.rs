use std::collections::HashMap;

use time::OffsetDateTime;

pub mod get;

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    #[default]
    Info,
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Pass,
    Fail,
    Error,
}

/// A unit test stored alongside a policy.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UnitTest {
    pub name: String,
    pub resource_type: String,
    /// JSON encoded resource the policy is evaluated against.
    pub resource: String,
    pub expected_result: bool,
}

/// A cloud security policy as stored by the analysis API.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// User-specified unique rule/policy ID.
    pub id: String,
    /// The version of the analysis item. Every update creates a new one.
    #[serde(default)]
    pub version_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Python source of the policy.
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub severity: Severity,
    /// Resource types the policy applies to. Empty means all.
    #[serde(default)]
    pub resource_types: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Resource ID patterns the policy ignores.
    #[serde(default)]
    pub suppressions: Vec<String>,
    #[serde(default)]
    pub auto_remediation_id: Option<String>,
    #[serde(default)]
    pub auto_remediation_parameters: HashMap<String, String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub runbook: Option<String>,
    /// Compliance framework mappings, for example `{"CIS": ["1.1"]}`.
    #[serde(default)]
    pub reports: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub tests: Vec<UnitTest>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_modified: Option<OffsetDateTime>,
    #[serde(default)]
    pub last_modified_by: Option<String>,
    #[serde(default)]
    pub compliance_status: Option<ComplianceStatus>,
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::http::policy::{ComplianceStatus, Policy, Severity};

    #[test]
    fn test_deserialize_policy() {
        let json = r#"{
            "id": "AWS.S3.Bucket.Encryption",
            "versionId": "3sJm1tDRc1dXqCPnYyMTTYqkFr1q4X5p",
            "displayName": "S3 Bucket Encryption",
            "body": "def policy(resource):\n    return True\n",
            "enabled": true,
            "severity": "HIGH",
            "resourceTypes": ["AWS.S3.Bucket"],
            "reports": {"CIS": ["2.7"]},
            "tests": [{"name": "encrypted", "resourceType": "AWS.S3.Bucket", "resource": "{}", "expectedResult": true}],
            "createdAt": "2020-01-20T18:24:32Z",
            "complianceStatus": "FAIL"
        }"#;
        let policy: Policy = serde_json::from_str(json).unwrap();
        assert_eq!(policy.id, "AWS.S3.Bucket.Encryption");
        assert_eq!(policy.version_id.as_deref(), Some("3sJm1tDRc1dXqCPnYyMTTYqkFr1q4X5p"));
        assert_eq!(policy.severity, Severity::High);
        assert_eq!(policy.reports["CIS"], vec!["2.7".to_string()]);
        assert!(policy.tests[0].expected_result);
        assert_eq!(policy.created_at, Some(datetime!(2020-01-20 18:24:32 UTC)));
        assert_eq!(policy.last_modified, None);
        assert_eq!(policy.compliance_status, Some(ComplianceStatus::Fail));
        assert!(policy.tags.is_empty());
    }

    #[test]
    fn test_deserialize_minimal_policy() {
        let policy: Policy = serde_json::from_str(r#"{"id": "rule-1"}"#).unwrap();
        assert_eq!(policy.id, "rule-1");
        assert_eq!(policy.severity, Severity::Info);
        assert!(!policy.enabled);
        assert!(policy.version_id.is_none());
    }
}

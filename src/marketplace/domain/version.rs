use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status given to versions created from the CLI
pub const VERSION_STATUS_PENDING: &str = "PENDING";

/// A product version record from `allversions`.
///
/// `status` is informational only; the client never drives it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Version {
    #[serde(rename = "versionnumber", default)]
    pub number: Option<String>,
    #[serde(rename = "versiondetails", default)]
    pub details: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Version {
    /// A new, not yet published version
    pub fn pending(number: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
            details: Some(details.into()),
            status: Some(VERSION_STATUS_PENDING.to_string()),
            extra: Map::new(),
        }
    }

    pub fn number(&self) -> &str {
        self.number.as_deref().unwrap_or_default()
    }

    pub fn details(&self) -> &str {
        self.details.as_deref().unwrap_or_default()
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pending_version() {
        let version = Version::pending("1.2.3", "first release");
        assert_eq!(version.number(), "1.2.3");
        assert_eq!(version.details(), "first release");
        assert_eq!(version.status(), "PENDING");
    }

    #[test]
    fn test_deserialize_keeps_unknown_fields() {
        let json = r#"{"versionnumber":"1.0.0","status":"ACTIVE","createdon":1650000000,"tag":"ga"}"#;
        let version: Version = serde_json::from_str(json).unwrap();
        assert_eq!(version.number(), "1.0.0");
        assert_eq!(version.details(), "");
        assert_eq!(version.extra.get("tag"), Some(&Value::from("ga")));

        let encoded: Value = serde_json::to_value(&version).unwrap();
        assert_eq!(encoded["createdon"], Value::from(1650000000));
    }

    #[test]
    fn test_null_strings_are_written_back_as_null() {
        let document = json!({"versionnumber": "1.0.0", "versiondetails": null, "status": null});
        let version: Version = serde_json::from_value(document.clone()).unwrap();
        assert_eq!(version.details(), "");
        assert_eq!(version.status(), "");

        assert_eq!(serde_json::to_value(&version).unwrap(), document);
    }
}

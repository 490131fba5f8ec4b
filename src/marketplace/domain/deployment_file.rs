use super::nullable;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A deployment file (OVA) attached to one product version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDeploymentFile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "appversion", default)]
    pub app_version: Option<String>,
    #[serde(rename = "hashdigest", default)]
    pub hash_digest: Option<String>,
    #[serde(rename = "hashalgo", default)]
    pub hash_algo: Option<String>,
    /// JSON document describing the files inside the OVA, filled in by the
    /// marketplace once it has processed the upload
    #[serde(rename = "itemjson", default)]
    pub item_json: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parsed form of [`ProductDeploymentFile::item_json`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductItemDetails {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub item_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub files: Vec<ProductItemFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductItemFile {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub size: u64,
}

impl ProductDeploymentFile {
    /// A freshly uploaded file that has not been processed by the marketplace yet
    pub fn uploaded(
        app_version: impl Into<String>,
        url: impl Into<String>,
        hash_digest: impl Into<String>,
        hash_algo: impl Into<String>,
    ) -> Self {
        Self {
            url: Some(url.into()),
            app_version: Some(app_version.into()),
            hash_digest: Some(hash_digest.into()),
            hash_algo: Some(hash_algo.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn app_version(&self) -> &str {
        self.app_version.as_deref().unwrap_or_default()
    }

    /// Parses the embedded item description.
    ///
    /// Returns `Ok(None)` when the marketplace has not produced one yet.
    pub fn item_details(&self) -> serde_json::Result<Option<ProductItemDetails>> {
        match self.item_json.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(item_json) => serde_json::from_str(item_json).map(Some),
        }
    }
}

impl ProductItemDetails {
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|file| file.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_file() {
        let file = ProductDeploymentFile::uploaded(
            "1.2.3",
            "https://storage.example.com/bucket/appliance.ova",
            "da39a3ee5e6b4b0d3255bfef95601890afd80709",
            "SHA1",
        );
        assert!(file.id.is_none());
        assert_eq!(file.app_version(), "1.2.3");
        assert_eq!(file.hash_algo.as_deref(), Some("SHA1"));

        let encoded = serde_json::to_value(&file).unwrap();
        assert_eq!(encoded["id"], Value::Null);
        assert_eq!(encoded["itemjson"], Value::Null);
        assert_eq!(encoded["hashdigest"], "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_item_details() {
        let file = ProductDeploymentFile {
            item_json: Some(
                r#"{"name":"fake-ova","type":"fake.ovf","files":[{"name":"disk1.vmdk","size":1000000},{"name":"fake.ovf","size":100}]}"#
                    .to_string(),
            ),
            ..ProductDeploymentFile::default()
        };

        let details = file.item_details().unwrap().unwrap();
        assert_eq!(details.name, "fake-ova");
        assert_eq!(details.item_type, "fake.ovf");
        assert_eq!(details.files.len(), 2);
        assert_eq!(details.total_size(), 1000100);
    }

    #[test]
    fn test_item_details_missing() {
        let file = ProductDeploymentFile::default();
        assert!(file.item_details().unwrap().is_none());
    }

    #[test]
    fn test_unprocessed_file_round_trips_nulls() {
        let document = serde_json::json!({
            "id": "file-1",
            "name": null,
            "url": "https://storage.example.com/bucket/org/appliance.ova",
            "appversion": "1.2.3",
            "hashdigest": "da39a3ee5e6b4b0d3255bfef95601890afd80709",
            "hashalgo": "SHA1",
            "itemjson": null,
            "status": "INPROGRESS"
        });

        let file: ProductDeploymentFile = serde_json::from_value(document.clone()).unwrap();
        assert!(file.item_details().unwrap().is_none());
        assert_eq!(serde_json::to_value(&file).unwrap(), document);
    }

    #[test]
    fn test_item_details_invalid() {
        let file = ProductDeploymentFile {
            item_json: Some("{not json".to_string()),
            ..ProductDeploymentFile::default()
        };
        assert!(file.item_details().is_err());
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Helm chart repository a chart is published in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A Helm chart attached to one product version through `app_version`.
///
/// `id` is assigned by the marketplace and stays `None` for charts created
/// on the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartVersion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(rename = "appversion", default)]
    pub app_version: Option<String>,
    #[serde(default)]
    pub repo: Option<Repo>,
    #[serde(rename = "helmtarurl", default)]
    pub helm_tar_url: Option<String>,
    #[serde(rename = "tarurl", default)]
    pub tar_url: Option<String>,
    #[serde(rename = "isexternalurl", default)]
    pub is_external_url: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartVersion {
    /// Builds a chart entry for `app_version` that points at an externally hosted tarball
    pub fn external(
        app_version: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        url: impl Into<String>,
        repo: Repo,
    ) -> Self {
        let url = url.into();
        Self {
            id: None,
            name: Some(name.into()),
            version: Some(version.into()),
            app_version: Some(app_version.into()),
            repo: Some(repo),
            helm_tar_url: Some(url.clone()),
            tar_url: Some(url),
            is_external_url: Some(true),
            extra: Map::new(),
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or_default()
    }

    pub fn app_version(&self) -> &str {
        self.app_version.as_deref().unwrap_or_default()
    }

    pub fn tar_url(&self) -> &str {
        self.tar_url.as_deref().unwrap_or_default()
    }

    /// "<repo name> <repo url>", or an empty string when no repository is recorded
    pub fn repository_label(&self) -> String {
        self.repo
            .as_ref()
            .map(|repo| format!("{} {}", repo.name(), repo.url()))
            .unwrap_or_default()
    }
}

impl Repo {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: Some(url.into()),
            extra: Map::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }
}

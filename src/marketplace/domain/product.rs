use super::{ChartVersion, ContainerImageList, ImageTagType, ProductDeploymentFile, Version};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Organisation that publishes a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublisherDetails {
    #[serde(rename = "orgid", default)]
    pub org_id: Option<String>,
    #[serde(rename = "orgdisplayname", default)]
    pub org_display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Product - the marketplace listing aggregate
///
/// Updates are whole-document replacements on the server, so the document is
/// written back exactly as it was read apart from the collection a command
/// changes: fields the client does not model are kept in `extra`, and modelled
/// fields are `Option`s so a `null` from the server is sent back as `null`.
///
/// Each chart, OVA and container image list names the version it belongs to
/// through its `app_version`; the marketplace does not check that the version
/// exists, so callers must check with [`Product::has_version`] first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productid", default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(rename = "displayname", default)]
    pub display_name: Option<String>,
    #[serde(rename = "solutiontype", default)]
    pub solution_type: Option<String>,
    #[serde(rename = "publisherdetails", default)]
    pub publisher_details: Option<PublisherDetails>,
    #[serde(rename = "deploymenttypes", default)]
    pub deployment_types: Option<Vec<String>>,
    #[serde(rename = "allversions", default)]
    pub all_versions: Option<Vec<Version>>,
    #[serde(rename = "chartversions", default)]
    pub chart_versions: Option<Vec<ChartVersion>>,
    #[serde(rename = "dockerlinkversions", default)]
    pub container_image_lists: Option<Vec<ContainerImageList>>,
    #[serde(rename = "productdeploymentfiles", default)]
    pub deployment_files: Option<Vec<ProductDeploymentFile>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(
        product_id: impl Into<String>,
        display_name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            product_id: Some(product_id.into()),
            display_name: Some(display_name.into()),
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn product_id(&self) -> &str {
        self.product_id.as_deref().unwrap_or_default()
    }

    pub fn slug(&self) -> &str {
        self.slug.as_deref().unwrap_or_default()
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or_default()
    }

    pub fn solution_type(&self) -> &str {
        self.solution_type.as_deref().unwrap_or_default()
    }

    pub fn deployment_types(&self) -> &[String] {
        self.deployment_types.as_deref().unwrap_or_default()
    }

    /// All versions in server order
    pub fn versions(&self) -> &[Version] {
        self.all_versions.as_deref().unwrap_or_default()
    }

    pub fn charts(&self) -> &[ChartVersion] {
        self.chart_versions.as_deref().unwrap_or_default()
    }

    pub fn deployment_files(&self) -> &[ProductDeploymentFile] {
        self.deployment_files.as_deref().unwrap_or_default()
    }

    pub fn container_image_lists(&self) -> &[ContainerImageList] {
        self.container_image_lists.as_deref().unwrap_or_default()
    }

    pub fn has_version(&self, number: &str) -> bool {
        self.versions().iter().any(|version| version.number() == number)
    }

    /// Looks a version up by its exact number.
    ///
    /// An empty `number` selects the latest version, which is the last entry
    /// of `all_versions` in server order (not the highest semantic version).
    pub fn get_version(&self, number: &str) -> Option<&Version> {
        if number.is_empty() {
            return self.versions().last();
        }
        self.versions()
            .iter()
            .find(|version| version.number() == number)
    }

    /// Like [`Product::get_version`], but also accepts the keyword `latest`.
    ///
    /// A version literally numbered "latest" is matched before the keyword.
    pub fn resolve_version(&self, requested: &str) -> Option<&Version> {
        self.get_version(requested).or_else(|| {
            if requested.eq_ignore_ascii_case("latest") {
                self.latest_version()
            } else {
                None
            }
        })
    }

    pub fn latest_version(&self) -> Option<&Version> {
        self.get_version("")
    }

    pub fn charts_for_version(&self, number: &str) -> Vec<&ChartVersion> {
        self.charts()
            .iter()
            .filter(|chart| chart.app_version() == number)
            .collect()
    }

    pub fn ovas_for_version(&self, number: &str) -> Vec<&ProductDeploymentFile> {
        self.deployment_files()
            .iter()
            .filter(|file| file.app_version() == number)
            .collect()
    }

    pub fn container_images_for_version(&self, number: &str) -> Vec<&ContainerImageList> {
        self.container_image_lists()
            .iter()
            .filter(|list| list.app_version() == number)
            .collect()
    }

    /// Organisation id of the publisher, used to namespace uploaded files
    pub fn org_id(&self) -> Option<&str> {
        self.publisher_details
            .as_ref()
            .and_then(|details| details.org_id.as_deref())
            .filter(|org_id| !org_id.is_empty())
    }

    /// Records a deployment type; returns `false` if it was already listed
    pub fn add_deployment_type(&mut self, deployment_type: &str) -> bool {
        let deployment_types = self.deployment_types.get_or_insert_with(Vec::new);
        if deployment_types
            .iter()
            .any(|existing| existing == deployment_type)
        {
            return false;
        }
        deployment_types.push(deployment_type.to_string());
        true
    }

    /// Appends a version; returns `false` if a version with that number exists
    pub fn add_version(&mut self, version: Version) -> bool {
        if self.has_version(version.number()) {
            return false;
        }
        self.all_versions.get_or_insert_with(Vec::new).push(version);
        true
    }

    pub fn add_chart(&mut self, chart: ChartVersion) {
        self.chart_versions.get_or_insert_with(Vec::new).push(chart);
    }

    pub fn add_deployment_file(&mut self, file: ProductDeploymentFile) {
        self.deployment_files.get_or_insert_with(Vec::new).push(file);
    }

    /// Adds an image tag to the container image list of `version`.
    ///
    /// The first list for the version is reused; a new one is appended if the
    /// version has none. Returns `false` when the tag was already published.
    pub fn add_container_image(
        &mut self,
        version: &str,
        image_url: &str,
        tag: &str,
        tag_type: ImageTagType,
        deployment_instruction: &str,
    ) -> bool {
        let lists = self.container_image_lists.get_or_insert_with(Vec::new);
        let index = match lists.iter().position(|list| list.app_version() == version) {
            Some(index) => index,
            None => {
                lists.push(ContainerImageList::new(version, deployment_instruction));
                lists.len() - 1
            }
        };

        let list = &mut lists[index];
        if list.deployment_instruction().is_empty() && !deployment_instruction.is_empty() {
            list.deployment_instruction = Some(deployment_instruction.to_string());
        }
        list.add_image_tag(image_url, tag, tag_type)
    }
}

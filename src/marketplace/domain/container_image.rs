use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Container image references published for one product version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerImageList {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "appversion", default)]
    pub app_version: Option<String>,
    #[serde(rename = "deploymentinstruction", default)]
    pub deployment_instruction: Option<String>,
    #[serde(rename = "dockerurls", default)]
    pub images: Option<Vec<ContainerImage>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single image repository and its published tags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "imagetags", default)]
    pub tags: Option<Vec<ImageTag>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageTag {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(rename = "type", default)]
    pub tag_type: Option<String>,
    #[serde(rename = "downloadcount", default)]
    pub download_count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Whether a tag is pinned to one image digest or moves with new pushes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTagType {
    Fixed,
    Floating,
}

impl FromStr for ImageTagType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FIXED" => Ok(ImageTagType::Fixed),
            "FLOATING" => Ok(ImageTagType::Floating),
            _ => Err(format!(
                "Invalid tag type: {}. Please specify 'FIXED' or 'FLOATING'",
                s
            )),
        }
    }
}

impl fmt::Display for ImageTagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageTagType::Fixed => write!(f, "FIXED"),
            ImageTagType::Floating => write!(f, "FLOATING"),
        }
    }
}

impl ContainerImageList {
    pub fn new(app_version: impl Into<String>, deployment_instruction: impl Into<String>) -> Self {
        Self {
            app_version: Some(app_version.into()),
            deployment_instruction: Some(deployment_instruction.into()),
            images: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn app_version(&self) -> &str {
        self.app_version.as_deref().unwrap_or_default()
    }

    pub fn deployment_instruction(&self) -> &str {
        self.deployment_instruction.as_deref().unwrap_or_default()
    }

    pub fn images(&self) -> &[ContainerImage] {
        self.images.as_deref().unwrap_or_default()
    }

    /// Adds `tag` to the image `url`, creating the image entry on first use.
    ///
    /// Returns `false` when the image already carries that tag.
    pub fn add_image_tag(&mut self, url: &str, tag: &str, tag_type: ImageTagType) -> bool {
        let images = self.images.get_or_insert_with(Vec::new);
        let index = match images.iter().position(|image| image.url() == url) {
            Some(index) => index,
            None => {
                images.push(ContainerImage {
                    url: Some(url.to_string()),
                    tags: Some(Vec::new()),
                    extra: Map::new(),
                });
                images.len() - 1
            }
        };

        let tags = images[index].tags.get_or_insert_with(Vec::new);
        if tags.iter().any(|existing| existing.tag() == tag) {
            return false;
        }
        tags.push(ImageTag {
            tag: Some(tag.to_string()),
            tag_type: Some(tag_type.to_string()),
            ..ImageTag::default()
        });
        true
    }
}

impl ContainerImage {
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn tags(&self) -> &[ImageTag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Tags joined for display, in server order
    pub fn tag_list(&self) -> String {
        self.tags()
            .iter()
            .map(ImageTag::tag)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn total_downloads(&self) -> u64 {
        self.tags()
            .iter()
            .map(|tag| tag.download_count.unwrap_or_default())
            .sum()
    }
}

impl ImageTag {
    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or_default()
    }

    pub fn tag_type(&self) -> &str {
        self.tag_type.as_deref().unwrap_or_default()
    }
}

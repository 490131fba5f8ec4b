use crate::marketplace::domain::ImageTagType;
use std::path::PathBuf;

/// Version selector accepted by list commands: an exact number, `latest`, or empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductVersionRef {
    pub slug: String,
    pub version: String,
}

impl ProductVersionRef {
    pub fn new(slug: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            version: version.into(),
        }
    }
}

/// ListProductsRequest - Input for the product listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProductsRequest {
    /// List every visible product instead of only the caller's organisation
    pub all_orgs: bool,
    pub search_term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVersionRequest {
    pub slug: String,
    pub version: String,
    pub details: String,
}

/// CreateChartRequest - An externally hosted Helm chart to attach to a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChartRequest {
    pub target: ProductVersionRef,
    pub chart_name: String,
    pub chart_version: String,
    pub chart_url: String,
    pub repository_name: String,
    pub repository_url: String,
}

/// CreateOvaRequest - A local OVA file to upload and attach to a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOvaRequest {
    pub target: ProductVersionRef,
    pub file: PathBuf,
    /// Object store bucket the file is uploaded into
    pub bucket: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContainerImageRequest {
    pub target: ProductVersionRef,
    pub image_repository: String,
    pub tag: String,
    pub tag_type: ImageTagType,
    pub deployment_instructions: String,
}

/// Domain layer - the marketplace product aggregate and its version-scoped collections
///
/// Everything in here is pure data plus lookup and mutation helpers; no I/O.
mod chart;
mod container_image;
mod deployment_file;
mod product;
mod version;

pub use chart::{ChartVersion, Repo};
pub use container_image::{ContainerImage, ContainerImageList, ImageTag, ImageTagType};
pub use deployment_file::{ProductDeploymentFile, ProductItemDetails, ProductItemFile};
pub use product::{Product, PublisherDetails};
pub use version::Version;

use serde::{Deserialize, Deserializer};

/// Deployment type recorded on products that ship Helm charts
pub const DEPLOYMENT_TYPE_HELM: &str = "HELM";

/// Deployment type recorded on products that ship container image references
pub const DEPLOYMENT_TYPE_DOCKER: &str = "DOCKERLINK";

/// Hash algorithm name the marketplace expects alongside a SHA-1 digest
pub const HASH_ALGO_SHA1: &str = "SHA1";

/// Deserializes JSON `null` as the type's default value.
///
/// Only for documents that are read and never sent back (envelopes, OVA item
/// details). Fields of the product document are `Option`s instead, so a
/// `null` is written back as `null` on update.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

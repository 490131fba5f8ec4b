use super::table::Table;
use crate::marketplace::domain::{ContainerImageList, Product, ProductDeploymentFile};
use crate::ports::outbound::ResourceFormatter;
use crate::shared::error::MarketplaceError;
use crate::shared::Result;

const NOT_AVAILABLE: &str = "N/A";

/// TableFormatter adapter rendering human-readable tables
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    fn empty_collection(product: &Product, version: &str, collection: &str) -> String {
        format!(
            "product \"{}\" {} does not have any {}\n",
            product.slug(), version, collection
        )
    }

    fn versions_table(product: &Product) -> String {
        let mut table = Table::new(&["Number", "Status"]);
        for version in product.versions() {
            table.add_row(vec![version.number().to_string(), version.status().to_string()]);
        }
        table.render()
    }

    fn ova_row(file: &ProductDeploymentFile) -> Result<Vec<String>> {
        let details = file
            .item_details()
            .map_err(|e| MarketplaceError::ParseFailed {
                subject: "the list of OVA files".to_string(),
                details: e.to_string(),
            })?;

        Ok(match details {
            Some(details) => vec![
                details.name.clone(),
                details.total_size().to_string(),
                details.item_type.clone(),
                details.files.len().to_string(),
            ],
            // Not processed by the marketplace yet
            None => vec![
                Self::file_label(file),
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
                "0".to_string(),
            ],
        })
    }

    fn file_label(file: &ProductDeploymentFile) -> String {
        if !file.name().is_empty() {
            return file.name().to_string();
        }
        let url = file.url();
        url.rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(url)
            .to_string()
    }

    fn container_image_list(list: &ContainerImageList, output: &mut String) {
        let mut table = Table::new(&["Image", "Tags", "Downloads"]);
        for image in list.images() {
            table.add_row(vec![
                image.url().to_string(),
                image.tag_list(),
                image.total_downloads().to_string(),
            ]);
        }
        output.push_str(&table.render());
        output.push_str("Deployment instructions:\n");
        output.push_str(list.deployment_instruction());
        output.push('\n');
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceFormatter for TableFormatter {
    fn format_product_list(&self, products: &[Product]) -> Result<String> {
        let mut table = Table::new(&["Slug", "Name", "Type", "Latest Version"]);
        for product in products {
            let latest = product
                .latest_version()
                .map(|version| version.number().to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            table.add_row(vec![
                product.slug().to_string(),
                product.display_name().to_string(),
                product.solution_type().to_string(),
                latest,
            ]);
        }

        let mut output = table.render();
        output.push_str(&format!("Total count: {}\n", products.len()));
        Ok(output)
    }

    fn format_product(&self, product: &Product) -> Result<String> {
        let mut table = Table::new(&["Slug", "Name", "Type"]);
        table.add_row(vec![
            product.slug().to_string(),
            product.display_name().to_string(),
            product.solution_type().to_string(),
        ]);

        let mut output = String::from("Product Details:\n");
        output.push_str(&table.render());
        output.push_str("\nVersions:\n");
        output.push_str(&Self::versions_table(product));
        Ok(output)
    }

    fn format_versions(&self, product: &Product) -> Result<String> {
        Ok(Self::versions_table(product))
    }

    fn format_charts(&self, product: &Product, version: &str) -> Result<String> {
        let charts = product.charts_for_version(version);
        if charts.is_empty() {
            return Ok(Self::empty_collection(product, version, "charts"));
        }

        let mut table = Table::new(&["Id", "Version", "URL", "Repository"]);
        for chart in charts {
            table.add_row(vec![
                chart.id().to_string(),
                chart.version().to_string(),
                chart.tar_url().to_string(),
                chart.repository_label(),
            ]);
        }
        Ok(table.render())
    }

    fn format_ovas(&self, product: &Product, version: &str) -> Result<String> {
        let ovas = product.ovas_for_version(version);
        if ovas.is_empty() {
            return Ok(Self::empty_collection(product, version, "OVAs"));
        }

        let mut table = Table::new(&["Name", "Size", "Type", "Files"]);
        for ova in ovas {
            table.add_row(Self::ova_row(ova)?);
        }
        Ok(table.render())
    }

    fn format_container_images(&self, product: &Product, version: &str) -> Result<String> {
        let lists = product.container_images_for_version(version);
        if lists.iter().all(|list| list.images().is_empty()) {
            return Ok(Self::empty_collection(product, version, "container images"));
        }

        let mut output = String::new();
        for list in lists {
            Self::container_image_list(list, &mut output);
        }
        Ok(output)
    }
}

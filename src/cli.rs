use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use mkpcli::application::dto::OutputFormat;
use mkpcli::marketplace::domain::ImageTagType;

/// List and publish products on the marketplace
#[derive(Parser, Debug)]
#[command(name = "mkpcli")]
#[command(version)]
#[command(about = "List and publish products, charts, OVAs and container images on the marketplace", long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every subcommand
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Output format: table or json
    #[arg(short = 'f', long, global = true, value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to config file (defaults to ./mkpcli.config.yml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Marketplace API host
    #[arg(long, global = true, value_name = "HOST")]
    pub marketplace_host: Option<String>,

    /// API token sent as csp-auth-token
    #[arg(long, global = true, env = "MKPCLI_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Object store bucket for OVA uploads
    #[arg(long, global = true, value_name = "BUCKET")]
    pub storage_bucket: Option<String>,

    /// Object store endpoint URL for OVA uploads
    #[arg(long, global = true, value_name = "URL")]
    pub storage_endpoint: Option<String>,

    /// Only print errors on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List and inspect products
    #[command(subcommand, alias = "product")]
    Products(ProductsCommand),

    /// List and add product versions
    #[command(subcommand, alias = "product-version")]
    ProductVersions(ProductVersionsCommand),

    /// List and add Helm charts
    #[command(subcommand, alias = "chart")]
    Charts(ChartsCommand),

    /// List and upload OVAs
    #[command(subcommand, alias = "ova")]
    Ovas(OvasCommand),

    /// List and add container images
    #[command(subcommand, alias = "container-image")]
    ContainerImages(ContainerImagesCommand),
}

/// Product slug plus an optional version (latest when omitted)
#[derive(ClapArgs, Debug, Clone)]
pub struct VersionSelector {
    /// Product slug
    #[arg(short, long, value_name = "SLUG")]
    pub product: String,

    /// Product version number, or "latest"
    #[arg(short = 'v', long, value_name = "VERSION", default_value = "")]
    pub product_version: String,
}

/// Product slug plus the version an artifact is attached to
#[derive(ClapArgs, Debug, Clone)]
pub struct VersionTarget {
    /// Product slug
    #[arg(short, long, value_name = "SLUG")]
    pub product: String,

    /// Product version number, or "latest"
    #[arg(short = 'v', long, value_name = "VERSION")]
    pub product_version: String,
}

#[derive(Subcommand, Debug)]
pub enum ProductsCommand {
    /// List products
    List {
        /// Include products from every organisation, not only your own
        #[arg(long)]
        all_orgs: bool,

        /// Only list products matching this search term
        #[arg(short, long, value_name = "TERM", default_value = "")]
        search: String,
    },
    /// Show a product and its versions
    Get {
        /// Product slug
        #[arg(short, long, value_name = "SLUG")]
        product: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductVersionsCommand {
    /// List the versions of a product
    List {
        /// Product slug
        #[arg(short, long, value_name = "SLUG")]
        product: String,
    },
    /// Add a new version to a product
    Create {
        /// Product slug
        #[arg(short, long, value_name = "SLUG")]
        product: String,

        /// New version number
        #[arg(short = 'v', long, value_name = "VERSION")]
        product_version: String,

        /// Release notes for the version
        #[arg(long, value_name = "TEXT", default_value = "")]
        details: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChartsCommand {
    /// List the charts of a product version
    List(VersionSelector),
    /// Attach an externally hosted Helm chart to a product version
    Create {
        #[command(flatten)]
        target: VersionTarget,

        #[arg(long, value_name = "NAME")]
        chart_name: String,

        #[arg(long, value_name = "VERSION")]
        chart_version: String,

        /// URL of the chart tarball
        #[arg(long, value_name = "URL")]
        chart_url: String,

        #[arg(long, value_name = "NAME")]
        repository_name: String,

        #[arg(long, value_name = "URL")]
        repository_url: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum OvasCommand {
    /// List the OVAs of a product version
    List(VersionSelector),
    /// Upload an OVA and attach it to a product version
    Create {
        #[command(flatten)]
        target: VersionTarget,

        /// OVA file to upload
        #[arg(long, value_name = "PATH")]
        ova_file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContainerImagesCommand {
    /// List the container images of a product version
    List(VersionSelector),
    /// Attach a container image tag to a product version
    Create {
        #[command(flatten)]
        target: VersionTarget,

        /// Image repository, e.g. docker.io/library/nginx
        #[arg(long, value_name = "URL")]
        image_repository: String,

        #[arg(long, value_name = "TAG")]
        tag: String,

        /// FIXED or FLOATING
        #[arg(long, value_name = "TYPE", default_value = "FIXED")]
        tag_type: ImageTagType,

        #[arg(long, value_name = "TEXT", default_value = "")]
        deployment_instructions: String,
    },
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_products_list() {
        let args = Args::try_parse_from([
            "mkpcli", "products", "list", "--all-orgs", "--search", "tanzu", "-f", "json",
        ])
        .unwrap();

        assert_eq!(args.global.output_format, Some(OutputFormat::Json));
        match args.command {
            Command::Products(ProductsCommand::List { all_orgs, search }) => {
                assert!(all_orgs);
                assert_eq!(search, "tanzu");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_charts_list_without_version() {
        let args =
            Args::try_parse_from(["mkpcli", "charts", "list", "--product", "my-product"]).unwrap();

        match args.command {
            Command::Charts(ChartsCommand::List(selector)) => {
                assert_eq!(selector.product, "my-product");
                assert_eq!(selector.product_version, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_container_image_create() {
        let args = Args::try_parse_from([
            "mkpcli",
            "container-images",
            "create",
            "-p",
            "my-product",
            "-v",
            "1.2.3",
            "--image-repository",
            "docker.io/library/nginx",
            "--tag",
            "latest",
            "--tag-type",
            "floating",
        ])
        .unwrap();

        match args.command {
            Command::ContainerImages(ContainerImagesCommand::Create {
                target, tag_type, ..
            }) => {
                assert_eq!(target.product_version, "1.2.3");
                assert_eq!(tag_type, ImageTagType::Floating);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_create_requires_version() {
        let result = Args::try_parse_from([
            "mkpcli", "ovas", "create", "--product", "my-product", "--ova-file", "a.ova",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_output_format() {
        let result = Args::try_parse_from(["mkpcli", "products", "list", "-f", "markdown"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "mkpcli",
            "products",
            "get",
            "--product",
            "my-product",
            "--marketplace-host",
            "marketplace.example.com",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(
            args.global.marketplace_host.as_deref(),
            Some("marketplace.example.com")
        );
        assert!(args.global.quiet);
    }
}

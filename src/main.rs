mod cli;
mod config;

use cli::{
    Args, ChartsCommand, Command, ContainerImagesCommand, OvasCommand, ProductVersionsCommand,
    ProductsCommand, VersionSelector, VersionTarget,
};
use config::{discover_config, load_config_from_path, Settings};
use mkpcli::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
use mkpcli::adapters::outbound::network::{
    MarketplaceClient, MarketplaceSettings, ObjectStoreUploader, ReqwestTransport,
};
use mkpcli::application::dto::{
    CreateChartRequest, CreateContainerImageRequest, CreateOvaRequest, CreateVersionRequest,
    ListProductsRequest, ProductVersionRef,
};
use mkpcli::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use mkpcli::application::use_cases::{
    ChartsUseCase, ContainerImagesUseCase, OvasUseCase, ProductVersionsUseCase, ProductsUseCase,
};
use mkpcli::ports::outbound::{OutputPresenter, ProgressReporter, ResourceFormatter};
use mkpcli::shared::error::ExitCode;
use mkpcli::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported through the same path
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("  {} {}", "Caused by:".yellow(), err);
            source = err.source();
        }

        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = match args.global.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = Settings::resolve(&args.global, config)?;

    if settings.quiet {
        dispatch(args.command, &settings, QuietProgressReporter::new())
    } else {
        dispatch(args.command, &settings, StderrProgressReporter::new())
    }
}

fn marketplace_client(settings: &Settings) -> Result<MarketplaceClient<ReqwestTransport>> {
    let token = settings.require_api_token()?;
    let transport = ReqwestTransport::new()?;
    let marketplace = MarketplaceSettings::new(&settings.marketplace_host, token)
        .with_max_pages(settings.max_pages);
    Ok(MarketplaceClient::new(transport, marketplace))
}

fn selector_ref(selector: VersionSelector) -> ProductVersionRef {
    ProductVersionRef::new(selector.product, selector.product_version)
}

fn target_ref(target: VersionTarget) -> ProductVersionRef {
    ProductVersionRef::new(target.product, target.product_version)
}

/// Runs one command and renders its result
fn dispatch<PR: ProgressReporter>(command: Command, settings: &Settings, reporter: PR) -> Result<()> {
    let client = marketplace_client(settings)?;
    let formatter = FormatterFactory::create(settings.output_format);

    let rendered = match command {
        Command::Products(command) => {
            let use_case = ProductsUseCase::new(client, reporter);
            match command {
                ProductsCommand::List { all_orgs, search } => {
                    let request = ListProductsRequest {
                        all_orgs,
                        search_term: search,
                    };
                    formatter.format_product_list(&use_case.list(&request)?)?
                }
                ProductsCommand::Get { product } => {
                    formatter.format_product(&use_case.get(&product)?)?
                }
            }
        }
        Command::ProductVersions(command) => {
            let use_case = ProductVersionsUseCase::new(client, reporter);
            match command {
                ProductVersionsCommand::List { product } => {
                    formatter.format_versions(&use_case.list(&product)?)?
                }
                ProductVersionsCommand::Create {
                    product,
                    product_version,
                    details,
                } => {
                    let request = CreateVersionRequest {
                        slug: product,
                        version: product_version,
                        details,
                    };
                    formatter.format_versions(&use_case.create(&request)?)?
                }
            }
        }
        Command::Charts(command) => {
            let use_case = ChartsUseCase::new(client, reporter);
            let response = match command {
                ChartsCommand::List(selector) => use_case.list(&selector_ref(selector))?,
                ChartsCommand::Create {
                    target,
                    chart_name,
                    chart_version,
                    chart_url,
                    repository_name,
                    repository_url,
                } => use_case.create(&CreateChartRequest {
                    target: target_ref(target),
                    chart_name,
                    chart_version,
                    chart_url,
                    repository_name,
                    repository_url,
                })?,
            };
            formatter.format_charts(&response.product, &response.version)?
        }
        Command::Ovas(command) => {
            let use_case = OvasUseCase::new(client, reporter);
            let response = match command {
                OvasCommand::List(selector) => use_case.list(&selector_ref(selector))?,
                OvasCommand::Create { target, ova_file } => {
                    let (bucket, endpoint) = settings.require_storage()?;
                    let uploader =
                        ObjectStoreUploader::new(endpoint, settings.require_api_token()?)?;
                    use_case.create(
                        &uploader,
                        &CreateOvaRequest {
                            target: target_ref(target),
                            file: ova_file,
                            bucket: bucket.to_string(),
                        },
                    )?
                }
            };
            formatter.format_ovas(&response.product, &response.version)?
        }
        Command::ContainerImages(command) => {
            let use_case = ContainerImagesUseCase::new(client, reporter);
            let response = match command {
                ContainerImagesCommand::List(selector) => {
                    use_case.list(&selector_ref(selector))?
                }
                ContainerImagesCommand::Create {
                    target,
                    image_repository,
                    tag,
                    tag_type,
                    deployment_instructions,
                } => use_case.create(&CreateContainerImageRequest {
                    target: target_ref(target),
                    image_repository,
                    tag,
                    tag_type,
                    deployment_instructions,
                })?,
            };
            formatter.format_container_images(&response.product, &response.version)?
        }
    };

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output.clone()));
    presenter.present(&rendered)
}

/// Use cases module: one orchestration per marketplace resource
mod charts;
mod container_images;
mod ovas;
mod product_versions;
mod products;
mod reporting;
mod version_scope;

#[cfg(test)]
mod test_support;

pub use charts::ChartsUseCase;
pub use container_images::ContainerImagesUseCase;
pub use ovas::OvasUseCase;
pub use product_versions::ProductVersionsUseCase;
pub use products::ProductsUseCase;

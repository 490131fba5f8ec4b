/// Network adapters for the marketplace API and artifact storage
mod envelope;
mod marketplace_client;
mod object_store_uploader;
mod reqwest_transport;

pub use envelope::{
    GetProductResponse, GetProductResponsePayload, ListProductParams, ListProductResponse,
    ListProductResponsePayload,
};
pub use marketplace_client::{MarketplaceClient, MarketplaceSettings};
pub use object_store_uploader::ObjectStoreUploader;
pub use reqwest_transport::ReqwestTransport;

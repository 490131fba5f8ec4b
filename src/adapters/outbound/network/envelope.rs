//! Response envelopes shared by the marketplace endpoints.
//!
//! Every answer is wrapped as `{"response": {...}}`; single products come back
//! under `data`, listings under `dataList` with the total in `params.itemsnumber`.

use crate::marketplace::domain::{nullable, Product};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetProductResponse {
    pub response: GetProductResponsePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetProductResponsePayload {
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    #[serde(rename = "statuscode", default, deserialize_with = "nullable")]
    pub status_code: u16,
    pub data: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListProductResponse {
    pub response: ListProductResponsePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListProductResponsePayload {
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    #[serde(rename = "statuscode", default, deserialize_with = "nullable")]
    pub status_code: u16,
    #[serde(rename = "dataList", default, deserialize_with = "nullable")]
    pub products: Vec<Product>,
    #[serde(default, deserialize_with = "nullable")]
    pub params: ListProductParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListProductParams {
    #[serde(rename = "itemsnumber", default, deserialize_with = "nullable")]
    pub product_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Value>,
}

impl GetProductResponse {
    /// Wraps a product the way the marketplace does on a successful answer
    pub fn ok(product: Product) -> Self {
        Self {
            response: GetProductResponsePayload {
                message: String::new(),
                status_code: 200,
                data: product,
            },
        }
    }
}

impl ListProductResponse {
    /// One page of a listing that has `total` products overall
    pub fn page(products: Vec<Product>, total: usize) -> Self {
        Self {
            response: ListProductResponsePayload {
                message: String::new(),
                status_code: 200,
                products,
                params: ListProductParams {
                    product_count: total,
                    pagination: None,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::domain::{ChartVersion, Repo, Version};

    #[test]
    fn test_product_round_trips_through_envelope() {
        let mut product = Product::new("id-1", "My Product", "my-product");
        product.solution_type = Some("HELMCHARTS".to_string());
        product.add_deployment_type("HELM");
        product.add_version(Version::pending("1.2.3", "first"));
        product.add_chart(ChartVersion::external(
            "1.2.3",
            "chart",
            "0.1.0",
            "https://charts.example.com/chart-0.1.0.tgz",
            Repo::new("Example", "https://charts.example.com"),
        ));

        let body = serde_json::to_vec(&GetProductResponse::ok(product.clone())).unwrap();
        let parsed: GetProductResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.response.data, product);
        assert_eq!(parsed.response.status_code, 200);
    }

    #[test]
    fn test_list_envelope_field_names() {
        let json = r#"{
            "response": {
                "message": "ok",
                "statuscode": 200,
                "dataList": [{"slug": "a"}, {"slug": "b"}],
                "params": {"itemsnumber": 42, "pagination": {"page": 1, "pagesize": 20}}
            }
        }"#;

        let parsed: ListProductResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.response.products.len(), 2);
        assert_eq!(parsed.response.params.product_count, 42);
        assert!(parsed.response.params.pagination.is_some());
    }

    #[test]
    fn test_list_envelope_null_list() {
        let json = r#"{"response": {"dataList": null, "params": null}}"#;
        let parsed: ListProductResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.response.products.is_empty());
        assert_eq!(parsed.response.params.product_count, 0);
    }

    #[test]
    fn test_get_envelope_requires_data() {
        let json = r#"{"response": {"message": "ok", "statuscode": 200}}"#;
        assert!(serde_json::from_str::<GetProductResponse>(json).is_err());
    }
}

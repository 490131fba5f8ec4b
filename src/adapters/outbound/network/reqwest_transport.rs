use crate::ports::outbound::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::shared::error::MarketplaceError;
use crate::shared::Result;
use reqwest::blocking::Client;
use std::time::Duration;

/// ReqwestTransport adapter sending marketplace requests over HTTPS
///
/// Uses the blocking reqwest client: every command performs a handful of
/// sequential round trips and nothing runs in the background.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    const TIMEOUT_SECONDS: u64 = 60;

    /// Creates a transport with the default timeout and user agent
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("mkpcli/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();

        // Drain the body on every status so the connection can be reused
        let body = response
            .bytes()
            .map_err(|e| MarketplaceError::ReadFailed {
                subject: format!("the response body from {}", request.url),
                details: e.to_string(),
            })?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

//! CARROT HTTP client
//!
//! A client for the CARROT test-orchestration REST API. Every operation maps
//! onto one HTTP request against `http://{server}/api/v1/...`, and every
//! response — success payload, structured server error, or transport failure
//! — comes back as a single formatted string ready to print.
//!
//! The generic operations on [`CarrotClient`] cover the uniform REST contract
//! (find_by_id, find, create, update, delete, subscriptions, runs, and the
//! pairwise mapping endpoints); the per-entity modules layer typed parameter
//! structs on top of them.
//!
//! # Example
//!
//! ```no_run
//! use carrot_client::{CarrotClient, Verbosity};
//! use carrot_client::pipelines::PipelineQuery;
//!
//! #[tokio::main]
//! async fn main() -> carrot_client::Result<()> {
//!     let client = CarrotClient::new("localhost:8080", Verbosity::Normal);
//!
//!     let response = client
//!         .find_pipelines(PipelineQuery {
//!             name: "Sword of Protection Pipeline".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("{response}");
//!     Ok(())
//! }
//! ```

mod body;
pub mod error;
mod http;
mod params;
pub mod pipelines;
pub mod reports;
mod response;
pub mod results;
pub mod runs;
pub mod sections;
pub mod software;
pub mod software_versions;
pub mod subscriptions;
pub mod templates;
pub mod tests;
mod urls;

pub use error::{ClientError, Result};
pub use params::{ParamValue, Params};
pub use response::Verbosity;

use reqwest::{Client, Method};

use body::RequestBody;

/// HTTP client for the CARROT REST API
///
/// Holds the scheme-less server address (`host:port`), the verbosity the
/// response normalizer uses to gate message detail, and the underlying
/// reqwest client reused across calls.
#[derive(Debug, Clone)]
pub struct CarrotClient {
    server_address: String,
    verbosity: Verbosity,
    http: Client,
}

impl CarrotClient {
    /// Create a new client for the given server address
    ///
    /// # Arguments
    /// * `server_address` - host and optional port, without a scheme
    /// * `verbosity` - logging verbosity, used to gate error-message detail
    pub fn new(server_address: impl Into<String>, verbosity: Verbosity) -> Self {
        Self::with_client(server_address, verbosity, Client::new())
    }

    /// Create a client backed by a preconfigured reqwest client, for callers
    /// that need custom timeouts or TLS settings.
    pub fn with_client(
        server_address: impl Into<String>,
        verbosity: Verbosity,
        http: Client,
    ) -> Self {
        let server_address = server_address.into();
        Self {
            server_address: server_address.trim_end_matches('/').to_string(),
            verbosity,
            http,
        }
    }

    /// The configured server address
    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    // =============================================================================
    // Generic entity operations
    // =============================================================================

    /// `GET /api/v1/{entity}/{id}`
    pub async fn find_by_id(&self, entity: &str, id: &str) -> Result<String> {
        let url = urls::resource(&self.server_address, entity, id);
        self.send(Method::GET, &url, Params::new(), None).await
    }

    /// `GET /api/v1/{entity}` with the non-empty params as query parameters
    pub async fn find(&self, entity: &str, params: Params) -> Result<String> {
        let url = urls::collection(&self.server_address, entity);
        self.send(Method::GET, &url, params.filtered(), None).await
    }

    /// `POST /api/v1/{entity}` with the non-empty params as the body
    pub async fn create(&self, entity: &str, params: Params) -> Result<String> {
        let url = urls::collection(&self.server_address, entity);
        let body = body::build(params.filtered())?;
        self.send(Method::POST, &url, Params::new(), Some(body)).await
    }

    /// `PUT /api/v1/{entity}/{id}` with the non-empty params as the body
    pub async fn update(&self, entity: &str, id: &str, params: Params) -> Result<String> {
        let url = urls::resource(&self.server_address, entity, id);
        let body = body::build(params.filtered())?;
        self.send(Method::PUT, &url, Params::new(), Some(body)).await
    }

    /// `DELETE /api/v1/{entity}/{id}`
    pub async fn delete(&self, entity: &str, id: &str) -> Result<String> {
        let url = urls::resource(&self.server_address, entity, id);
        self.send(Method::DELETE, &url, Params::new(), None).await
    }

    /// `POST /api/v1/{entity}/{id}/subscriptions` with `{"email": ...}`
    pub async fn subscribe(&self, entity: &str, id: &str, email: &str) -> Result<String> {
        let url = urls::subscriptions(&self.server_address, entity, id);
        let body = body::build(Params::new().text("email", email))?;
        self.send(Method::POST, &url, Params::new(), Some(body)).await
    }

    /// `DELETE /api/v1/{entity}/{id}/subscriptions` with the email as a query
    /// parameter
    pub async fn unsubscribe(&self, entity: &str, id: &str, email: &str) -> Result<String> {
        let url = urls::subscriptions(&self.server_address, entity, id);
        let query = Params::new().text("email", email);
        self.send(Method::DELETE, &url, query, None).await
    }

    /// `POST /api/v1/tests/{id}/runs` with the non-empty params as the body
    pub async fn run(&self, test_id: &str, params: Params) -> Result<String> {
        let url = urls::runs(&self.server_address, "tests", test_id);
        let body = body::build(params.filtered())?;
        self.send(Method::POST, &url, Params::new(), Some(body)).await
    }

    /// `GET /api/v1/{entity}/{id}/runs` with the non-empty params as query
    /// parameters
    pub async fn find_runs(&self, entity: &str, id: &str, params: Params) -> Result<String> {
        let url = urls::runs(&self.server_address, entity, id);
        self.send(Method::GET, &url, params.filtered(), None).await
    }

    /// `POST /api/v1/{entity1}/{id1}/{entity2}/{id2}` creating a mapping,
    /// with optional query parameters alongside the JSON body
    pub async fn create_map(
        &self,
        entity1: &str,
        id1: &str,
        entity2: &str,
        id2: &str,
        params: Params,
        query: Params,
    ) -> Result<String> {
        let url = urls::map(&self.server_address, entity1, id1, entity2, id2);
        let body = body::build(params.filtered())?;
        self.send(Method::POST, &url, query, Some(body)).await
    }

    /// `GET /api/v1/{entity1}/{id1}/{entity2}/{id2}`
    pub async fn find_map_by_ids(
        &self,
        entity1: &str,
        id1: &str,
        entity2: &str,
        id2: &str,
    ) -> Result<String> {
        let url = urls::map(&self.server_address, entity1, id1, entity2, id2);
        self.send(Method::GET, &url, Params::new(), None).await
    }

    /// `GET /api/v1/{entity1}/{id1}/{entity2}/{id2}/{name}`
    pub async fn find_map_by_ids_and_name(
        &self,
        entity1: &str,
        id1: &str,
        entity2: &str,
        id2: &str,
        name: &str,
    ) -> Result<String> {
        let url = urls::named_map(&self.server_address, entity1, id1, entity2, id2, name);
        self.send(Method::GET, &url, Params::new(), None).await
    }

    /// `GET /api/v1/{entity1}/{id1}/{entity2}` with the non-empty params as
    /// query parameters
    pub async fn find_maps(
        &self,
        entity1: &str,
        id1: &str,
        entity2: &str,
        params: Params,
    ) -> Result<String> {
        let url = urls::map_collection(&self.server_address, entity1, id1, entity2);
        self.send(Method::GET, &url, params.filtered(), None).await
    }

    /// `DELETE /api/v1/{entity1}/{id1}/{entity2}/{id2}`
    pub async fn delete_map_by_ids(
        &self,
        entity1: &str,
        id1: &str,
        entity2: &str,
        id2: &str,
    ) -> Result<String> {
        let url = urls::map(&self.server_address, entity1, id1, entity2, id2);
        self.send(Method::DELETE, &url, Params::new(), None).await
    }

    /// `DELETE /api/v1/{entity1}/{id1}/{entity2}/{id2}/{name}`
    pub async fn delete_map_by_ids_and_name(
        &self,
        entity1: &str,
        id1: &str,
        entity2: &str,
        id2: &str,
        name: &str,
    ) -> Result<String> {
        let url = urls::named_map(&self.server_address, entity1, id1, entity2, id2, name);
        self.send(Method::DELETE, &url, Params::new(), None).await
    }

    /// Dispatch one request and normalize whatever comes back. Transport
    /// failures are part of the formatted text, never an `Err`.
    async fn send(
        &self,
        method: Method,
        url: &str,
        query: Params,
        body: Option<RequestBody>,
    ) -> Result<String> {
        let query = query.into_query_pairs();
        let outcome = http::dispatch(&self.http, method, url, &query, body).await;
        Ok(response::format_outcome(outcome, self.verbosity))
    }
}

#[cfg(test)]
mod client_tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CarrotClient::new("example.com", Verbosity::Normal);
        assert_eq!(client.server_address(), "example.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = CarrotClient::new("example.com:8080/", Verbosity::Normal);
        assert_eq!(client.server_address(), "example.com:8080");
    }

    #[test]
    fn test_client_with_custom_http_client() {
        let http = Client::new();
        let client = CarrotClient::with_client("example.com", Verbosity::Verbose, http);
        assert_eq!(client.server_address(), "example.com");
    }
}

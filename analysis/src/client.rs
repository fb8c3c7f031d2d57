use std::sync::Arc;

use reqwest_middleware::ClientWithMiddleware;

use crate::http::analysis_client::AnalysisClient;
use crate::http::analysis_policy_client::AnalysisPolicyClient;
use crate::http::policy::get::GetPolicyParams;
use crate::http::policy::Policy;
use crate::http::strfmt::Registry;
use crate::http::Error;

#[derive(Debug)]
pub struct ClientConfig {
    /// Default transport, used unless the operation parameters carry their own.
    pub http: ClientWithMiddleware,
    pub endpoint: String,
    /// Logs every response body.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http: reqwest_middleware::ClientBuilder::new(reqwest::Client::default()).build(),
            endpoint: "http://localhost:8080/v1".to_string(),
            debug: false,
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_http(mut self, http: ClientWithMiddleware) -> Self {
        self.http = http;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[derive(Clone)]
pub struct Client {
    policy_client: AnalysisPolicyClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl Client {
    /// New client
    pub fn new(config: ClientConfig) -> Self {
        let client = Arc::new(AnalysisClient::new(config.endpoint.as_str(), config.http, config.debug));
        Self {
            policy_client: AnalysisPolicyClient::new(client, Arc::new(Registry::default())),
        }
    }

    pub fn policy(&self) -> &AnalysisPolicyClient {
        &self.policy_client
    }

    pub async fn get_policy(&self, params: &GetPolicyParams) -> Result<Policy, Error> {
        self.policy_client.get(params).await
    }
}

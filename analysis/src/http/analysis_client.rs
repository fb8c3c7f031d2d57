use std::future::Future;

use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};
use tokio_util::sync::CancellationToken;

use crate::http::{check_response_status, Error};

const USER_AGENT: &str = concat!("panther-analysis-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    endpoint: String,
    http: Client,
    debug: bool,
}

impl AnalysisClient {
    pub(crate) fn new(endpoint: &str, http: Client, debug: bool) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http,
            debug,
        }
    }

    pub(crate) fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    pub async fn send<T>(&self, builder: RequestBuilder) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.with_headers(builder).send().await?;
        tracing::debug!(status = %response.status(), url = %response.url(), "analysis api responded");
        let response = check_response_status(response).await?;
        if self.debug {
            let text = response.text().await?;
            tracing::info!("{}", text);
            Ok(serde_json::from_str(text.as_str())?)
        } else {
            Ok(response.json().await?)
        }
    }
}

/// Runs `action` until it completes or `cancel` fires.
pub(crate) async fn invoke<T>(
    cancel: Option<&CancellationToken>,
    action: impl Future<Output = Result<T, Error>>,
) -> Result<T, Error> {
    match cancel {
        Some(cancel) => {
            tokio::select! {
                _ = cancel.cancelled() => Err(Error::Cancelled),
                v = action => v
            }
        }
        None => action.await,
    }
}

#[cfg(test)]
mod tests {
    use tokio_util::sync::CancellationToken;

    use crate::http::analysis_client::invoke;
    use crate::http::Error;

    #[tokio::test]
    async fn test_invoke_without_token() {
        let v = invoke(None, async { Ok::<_, Error>(1) }).await.unwrap();
        assert_eq!(v, 1);
    }

    #[tokio::test]
    async fn test_invoke_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = invoke(Some(&cancel), std::future::pending::<Result<(), Error>>()).await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }
}

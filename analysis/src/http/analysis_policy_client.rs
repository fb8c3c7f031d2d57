use std::sync::Arc;

use crate::http::analysis_client::{invoke, AnalysisClient};
use crate::http::policy::get::GetPolicyParams;
use crate::http::policy::Policy;
use crate::http::runtime::HttpRequest;
use crate::http::strfmt::Registry;
use crate::http::Error;

#[derive(Clone)]
pub struct AnalysisPolicyClient {
    inner: Arc<AnalysisClient>,
    formats: Arc<Registry>,
}

impl AnalysisPolicyClient {
    pub(crate) fn new(inner: Arc<AnalysisClient>, formats: Arc<Registry>) -> Self {
        Self { inner, formats }
    }

    /// Gets a policy, at its latest version unless `params` names one.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all, fields(id = params.id())))]
    pub async fn get(&self, params: &GetPolicyParams) -> Result<Policy, Error> {
        let mut request = HttpRequest::get("/policy");
        params.write_to_request(&mut request, &self.formats)?;
        let http = params.http_client().unwrap_or_else(|| self.inner.http());
        let builder = request.build(self.inner.endpoint(), http)?;
        tracing::debug!(method = %request.method(), path = request.path(), "sending get policy");
        invoke(params.cancel(), self.inner.send(builder)).await
    }

    /// Like [`AnalysisPolicyClient::get`], mapping a not found response to `None`.
    pub async fn find(&self, params: &GetPolicyParams) -> Result<Option<Policy>, Error> {
        match self.get(params).await {
            Ok(policy) => Ok(Some(policy)),
            Err(Error::Response(response)) if response.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

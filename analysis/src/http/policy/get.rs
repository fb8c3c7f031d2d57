use std::fmt;
use std::time::Duration;

use reqwest_middleware::ClientWithMiddleware as Client;
use tokio_util::sync::CancellationToken;

use crate::http::error::{CompositeValidationError, ValidationError};
use crate::http::runtime::ClientRequest;
use crate::http::strfmt::Registry;
use crate::http::Error;

/// Timeout applied when none is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How a parameter holding an empty string is written.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EmptyValuePolicy {
    /// The parameter is left out of the request, as if it was never set.
    #[default]
    Omit,
    /// The parameter is reported as a validation error.
    Reject,
}

/// Parameters of the get policy operation.
///
/// `id` is sent as the `id` query parameter when non-empty.
/// `version_id` is sent as `versionId` when present and non-empty; `None` and `Some("")`
/// both produce no parameter unless [`EmptyValuePolicy::Reject`] is selected.
#[derive(Clone)]
pub struct GetPolicyParams {
    /// User-specified unique rule/policy ID.
    id: String,
    /// The version of the analysis to retrieve.
    version_id: Option<String>,
    timeout: Duration,
    cancel: Option<CancellationToken>,
    http_client: Option<Client>,
    empty_values: EmptyValuePolicy,
}

impl Default for GetPolicyParams {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GetPolicyParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetPolicyParams")
            .field("id", &self.id)
            .field("version_id", &self.version_id)
            .field("timeout", &self.timeout)
            .field("cancel", &self.cancel.is_some())
            .field("http_client", &self.http_client.is_some())
            .field("empty_values", &self.empty_values)
            .finish()
    }
}

impl GetPolicyParams {
    /// Creates parameters with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout_value(DEFAULT_TIMEOUT)
    }

    /// Creates parameters with the given timeout.
    pub fn with_timeout_value(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::zero()
        }
    }

    /// Creates parameters bound to a cancellation token. The timeout is left unset.
    pub fn with_cancel_token(cancel: CancellationToken) -> Self {
        Self {
            cancel: Some(cancel),
            ..Self::zero()
        }
    }

    /// Creates parameters that are sent through `client` instead of the default transport.
    /// The timeout is left unset.
    pub fn with_http_client_value(client: Client) -> Self {
        Self {
            http_client: Some(client),
            ..Self::zero()
        }
    }

    fn zero() -> Self {
        Self {
            id: String::new(),
            version_id: None,
            timeout: Duration::ZERO,
            cancel: None,
            http_client: None,
            empty_values: EmptyValuePolicy::Omit,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.set_cancel(cancel);
        self
    }

    pub fn set_cancel(&mut self, cancel: CancellationToken) {
        self.cancel = Some(cancel);
    }

    pub fn cancel(&self) -> Option<&CancellationToken> {
        self.cancel.as_ref()
    }

    pub fn with_http_client(mut self, client: Client) -> Self {
        self.set_http_client(client);
        self
    }

    pub fn set_http_client(&mut self, client: Client) {
        self.http_client = Some(client);
    }

    pub fn http_client(&self) -> Option<&Client> {
        self.http_client.as_ref()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn with_version_id(mut self, version_id: Option<String>) -> Self {
        self.set_version_id(version_id);
        self
    }

    pub fn set_version_id(&mut self, version_id: Option<String>) {
        self.version_id = version_id;
    }

    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    pub fn with_empty_values(mut self, empty_values: EmptyValuePolicy) -> Self {
        self.set_empty_values(empty_values);
        self
    }

    pub fn set_empty_values(&mut self, empty_values: EmptyValuePolicy) {
        self.empty_values = empty_values;
    }

    pub fn empty_values(&self) -> EmptyValuePolicy {
        self.empty_values
    }

    /// Writes these params to `request`.
    ///
    /// A failure to apply the timeout is returned as is, before any query parameter is written.
    pub fn write_to_request<R>(&self, request: &mut R, _registry: &Registry) -> Result<(), Error>
    where
        R: ClientRequest + ?Sized,
    {
        request.set_timeout(self.timeout)?;
        let mut res = vec![];

        if !self.id.is_empty() {
            request.set_query_param("id", &self.id)?;
        } else if self.empty_values == EmptyValuePolicy::Reject {
            res.push(ValidationError::required("id", "query"));
        }

        if let Some(version_id) = &self.version_id {
            if !version_id.is_empty() {
                request.set_query_param("versionId", version_id)?;
            } else if self.empty_values == EmptyValuePolicy::Reject {
                res.push(ValidationError::empty("versionId", "query"));
            }
        }

        if !res.is_empty() {
            return Err(CompositeValidationError::new(res).into());
        }
        Ok(())
    }
}

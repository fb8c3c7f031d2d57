use std::time::Duration;

use reqwest::Response;

pub mod analysis_client;
pub mod analysis_policy_client;
pub mod error;
pub mod policy;
pub mod runtime;
pub mod strfmt;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An error returned from the analysis API.
    #[error(transparent)]
    Response(#[from] error::ErrorResponse),

    /// An error from the underlying HTTP client.
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),

    /// An error from one of the middleware used.
    #[error(transparent)]
    HttpMiddleware(anyhow::Error),

    /// The timeout can not be applied to the request.
    #[error("invalid request timeout: {0:?}")]
    InvalidTimeout(Duration),

    /// The query parameter can not be added to the request.
    #[error("invalid query parameter: {0:?}")]
    InvalidQueryParam(String),

    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    /// One or more parameters failed validation.
    #[error(transparent)]
    Validation(#[from] error::CompositeValidationError),

    /// The response body is not the expected JSON document.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request was cancelled by its cancellation token.
    #[error("operation cancelled")]
    Cancelled,
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(err) => Error::HttpMiddleware(err),
            reqwest_middleware::Error::Reqwest(err) => Error::HttpClient(err),
        }
    }
}

/// Checks whether an HTTP response is successful and returns it, or returns an error.
pub(crate) async fn check_response_status(response: Response) -> Result<Response, Error> {
    // Check the status code, returning the response if it is not an error.
    let error = match response.error_for_status_ref() {
        Ok(_) => return Ok(response),
        Err(error) => error,
    };
    let status = response.status().as_u16();

    // try to extract a response error, falling back to the status error if it can not be parsed.
    let body = match response.text().await {
        Ok(body) => body,
        Err(_) => return Err(Error::HttpClient(error)),
    };
    let parsed = serde_json::from_str::<error::ErrorWrapper>(&body)
        .map(|wrapper| wrapper.error)
        .or_else(|_| serde_json::from_str::<error::ErrorResponse>(&body));
    Err(match parsed {
        Ok(mut response) => {
            response.code.get_or_insert(status);
            Error::Response(response)
        }
        Err(_) => Error::HttpClient(error),
    })
}

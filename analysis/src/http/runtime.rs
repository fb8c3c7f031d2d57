use std::time::Duration;

use reqwest::Method;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};
use url::Url;

use crate::http::Error;

/// Upper bound accepted by [`HttpRequest::set_timeout`].
pub const MAX_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// The request surface operation parameters are written to.
pub trait ClientRequest {
    /// Sets the per request deadline. `Duration::ZERO` leaves the transport defaults in place.
    fn set_timeout(&mut self, timeout: Duration) -> Result<(), Error>;

    /// Sets a single valued query parameter.
    fn set_query_param(&mut self, name: &str, value: &str) -> Result<(), Error>;
}

/// A request under construction, turned into a [`RequestBuilder`] once all parameters are written.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HttpRequest {
    method: Method,
    path: String,
    timeout: Option<Duration>,
    query: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            timeout: None,
            query: vec![],
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Resolves the request against `base_url`, appending the query string.
    pub fn url(&self, base_url: &str) -> Result<Url, Error> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        ))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }

    pub fn build(&self, base_url: &str, client: &Client) -> Result<RequestBuilder, Error> {
        let url = self.url(base_url)?;
        let builder = client.request(self.method.clone(), url);
        Ok(match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        })
    }
}

impl ClientRequest for HttpRequest {
    fn set_timeout(&mut self, timeout: Duration) -> Result<(), Error> {
        if timeout > MAX_TIMEOUT {
            return Err(Error::InvalidTimeout(timeout));
        }
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        Ok(())
    }

    fn set_query_param(&mut self, name: &str, value: &str) -> Result<(), Error> {
        if name.is_empty() {
            return Err(Error::InvalidQueryParam(name.to_string()));
        }
        match self.query.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.query.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::http::runtime::{ClientRequest, HttpRequest, MAX_TIMEOUT};
    use crate::http::Error;

    #[test]
    fn test_set_timeout() {
        let mut request = HttpRequest::get("/policy");
        request.set_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(request.timeout(), Some(Duration::from_secs(5)));

        request.set_timeout(Duration::ZERO).unwrap();
        assert_eq!(request.timeout(), None);

        request.set_timeout(MAX_TIMEOUT).unwrap();
        let err = request.set_timeout(MAX_TIMEOUT + Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeout(_)));
        assert_eq!(request.timeout(), Some(MAX_TIMEOUT));
    }

    #[test]
    fn test_set_query_param_replaces() {
        let mut request = HttpRequest::get("/policy");
        request.set_query_param("id", "a").unwrap();
        request.set_query_param("versionId", "v1").unwrap();
        request.set_query_param("id", "b").unwrap();
        assert_eq!(
            request.query(),
            &[
                ("id".to_string(), "b".to_string()),
                ("versionId".to_string(), "v1".to_string())
            ]
        );
        assert!(matches!(request.set_query_param("", "x"), Err(Error::InvalidQueryParam(_))));
    }

    #[test]
    fn test_url() {
        let mut request = HttpRequest::get("/policy");
        assert_eq!(
            request.url("http://localhost:8080/v1/").unwrap().as_str(),
            "http://localhost:8080/v1/policy"
        );

        request.set_query_param("id", "AWS.S3 Bucket&Encryption").unwrap();
        let url = request.url("http://localhost:8080/v1").unwrap();
        assert_eq!(url.path(), "/v1/policy");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("id".to_string(), "AWS.S3 Bucket&Encryption".to_string())]);

        assert!(matches!(request.url("not a url"), Err(Error::InvalidUrl(_))));
    }
}

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::{without_query, ClientConfig};
use crate::error::Result;

/// Status and body of a finished HTTP request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl ToString) -> Self {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    pub fn ok(body: impl ToString) -> Self {
        HttpResponse::new(StatusCode::OK, body)
    }
}

/// The HTTP calls the salus client needs. [`HttpTransport`] is the real
/// implementation; tests plug in their own.
pub trait Transport {
    /// `GET url` with `query` appended to the query string.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse>;

    /// `POST url` with `form` as `application/x-www-form-urlencoded` body.
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse> {
        (**self).get(url, query)
    }

    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<HttpResponse> {
        (**self).post_form(url, form)
    }
}

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-

/// Blocking [`reqwest`] transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(HttpTransport { client })
    }

    fn finish(method: &str, url: &str, response: reqwest::blocking::Response) -> Result<HttpResponse> {
        let status = response.status();
        debug!(
            "[salus api] {} {} status: {:?} {:?}",
            method,
            without_query(url),
            status,
            status.canonical_reason().unwrap_or_default()
        );
        Ok(HttpResponse {
            status,
            body: response.text()?,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse> {
        let response = self.client.get(url).query(query).send()?;
        Self::finish("GET", url, response)
    }

    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<HttpResponse> {
        let response = self.client.post(url).form(form).send()?;
        Self::finish("POST", url, response)
    }
}

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-

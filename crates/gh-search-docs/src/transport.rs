use std::io::Read;

use tracing::debug;
use ureq::Agent;
use url::Url;

use crate::error::SearchError;

/// Fetches the raw body of a search request.
pub trait SearchTransport {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, SearchError>;
}

/// Blocking HTTP transport.
pub struct HttpTransport {
    agent: Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        // Status codes are checked by hand so 429 can get its own hint
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchTransport for HttpTransport {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, SearchError> {
        debug!("GET {url}");

        let mut response = self
            .agent
            .get(url.as_str())
            .header("Accept", "application/json")
            .call()?;

        let status = response.status();
        debug!("status: {status}");
        if status != 200 {
            return Err(SearchError::Status(status.as_u16()));
        }

        let mut body = Vec::new();
        response
            .body_mut()
            .as_reader()
            .read_to_end(&mut body)
            .map_err(SearchError::ReadBody)?;
        debug!("received {} bytes", body.len());

        Ok(body)
    }
}

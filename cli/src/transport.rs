//! Blocking HTTP transport backed by ureq.

use stratos_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use ureq::tls::TlsConfig;
use ureq::{Agent, RequestBuilder};

use crate::config::StratosConfig;

pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Status codes are returned as data so the core decides what counts as
    /// success.
    pub fn new(config: &StratosConfig) -> Self {
        let mut builder = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout()));
        if config.insecure {
            tracing::warn!("TLS certificate verification is disabled");
            builder = builder.tls_config(TlsConfig::builder().disable_verification(true).build());
        }
        Self {
            agent: builder.build().new_agent(),
        }
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;

        let result = match method {
            HttpMethod::Get => with_headers(self.agent.get(&path), &headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&path), &headers).call(),
            HttpMethod::Post | HttpMethod::Put => {
                let builder = match method {
                    HttpMethod::Post => self.agent.post(&path),
                    _ => self.agent.put(&path),
                };
                let builder = with_headers(builder, &headers);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(map_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(map_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn map_error(error: ureq::Error) -> ApiError {
    match error {
        ureq::Error::ConnectionFailed
        | ureq::Error::HostNotFound
        | ureq::Error::Timeout(_)
        | ureq::Error::Io(_) => ApiError::Connection(error.to_string()),
        ureq::Error::Tls(_) => ApiError::Tls(error.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}

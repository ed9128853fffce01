//! The connection every command handler runs against.

use serde::Serialize;
use stratos_core::{ApiError, HttpRequest, HttpResponse, StratosClient, Transport};

use crate::config::StratosConfig;
use crate::error::CliError;
use crate::transport::UreqTransport;

/// Client plus transport, built once per invocation and passed to handlers.
pub struct Session {
    client: StratosClient,
    transport: Box<dyn Transport>,
}

impl Session {
    pub fn new(client: StratosClient, transport: Box<dyn Transport>) -> Self {
        Self { client, transport }
    }

    pub fn connect(config: &StratosConfig) -> Result<Self, CliError> {
        let credentials = config.credentials()?;
        let client = StratosClient::new(&config.url).with_credentials(credentials);
        Ok(Self::new(client, Box::new(UreqTransport::new(config))))
    }

    pub fn client(&self) -> &StratosClient {
        &self.client
    }

    pub fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!(%method, %path, "sending request");
        let response = self.transport.execute(request)?;
        tracing::debug!(%method, %path, status = response.status, "received response");
        Ok(response)
    }

    /// Build, send and parse in one step.
    pub fn call<T>(
        &self,
        build: impl FnOnce(&StratosClient) -> HttpRequest,
        parse: impl FnOnce(&StratosClient, HttpResponse) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let response = self.send(build(&self.client))?;
        parse(&self.client, response)
    }

    /// Like `call` for operations whose request carries a serialized body.
    pub fn call_with<T>(
        &self,
        build: impl FnOnce(&StratosClient) -> Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&StratosClient, HttpResponse) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let response = self.send(build(&self.client)?)?;
        parse(&self.client, response)
    }
}

/// Serializable summary used by `--format json` for write commands.
#[derive(Debug, Serialize)]
pub struct Outcome<'a> {
    pub action: &'a str,
    pub resource: &'a str,
    pub id: &'a str,
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use stratos_core::{ApiError, Credentials, HttpRequest, HttpResponse, StratosClient, Transport};

    use super::Session;

    #[derive(Default)]
    struct State {
        responses: VecDeque<Result<HttpResponse, ApiError>>,
        requests: Vec<HttpRequest>,
    }

    /// Replays queued responses and records every request it receives.
    #[derive(Clone, Default)]
    pub(crate) struct FakeTransport {
        state: Rc<RefCell<State>>,
    }

    impl FakeTransport {
        pub(crate) fn respond(&self, status: u16, body: &str) -> &Self {
            self.state
                .borrow_mut()
                .responses
                .push_back(Ok(HttpResponse::new(status, body)));
            self
        }

        pub(crate) fn fail(&self, error: ApiError) -> &Self {
            self.state.borrow_mut().responses.push_back(Err(error));
            self
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.state.borrow().requests.clone()
        }

        pub(crate) fn session(&self) -> Session {
            let client = StratosClient::new("https://stratos.test:9443")
                .with_credentials(Credentials::new("admin", "admin"));
            Session::new(client, Box::new(self.clone()))
        }
    }

    impl Transport for FakeTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let mut state = self.state.borrow_mut();
            state.requests.push(request);
            state
                .responses
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no response queued".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use stratos_core::{ApiError, HttpMethod};

    use super::fake::FakeTransport;

    #[test]
    fn call_builds_sends_and_parses() {
        let fake = FakeTransport::default();
        fake.respond(200, r#"{"partition":{"id":"P1"}}"#);
        let session = fake.session();

        let partition = session
            .call(|c| c.build_describe_partition("P1"), |c, r| c.parse_describe_partition(r))
            .unwrap();
        assert_eq!(partition.id, "P1");

        let requests = fake.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].path, "https://stratos.test:9443/api/v4.1/partitions/P1");
        assert_eq!(requests[0].header("authorization"), Some("Basic YWRtaW46YWRtaW4="));
    }

    #[test]
    fn transport_failures_propagate() {
        let fake = FakeTransport::default();
        fake.fail(ApiError::Connection("refused".into()));
        let err = fake
            .session()
            .call(|c| c.build_init(), |c, r| c.parse_init(r))
            .unwrap_err();
        assert!(matches!(err, ApiError::Connection(_)));
    }
}

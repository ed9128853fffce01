use super::{check_status, StratosClient, STATUS_OK};
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

impl StratosClient {
    /// Login check: the server answers 200 once the credentials are valid.
    pub fn build_init(&self) -> HttpRequest {
        self.get(&Endpoint::Init)
    }

    pub fn parse_init(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, STATUS_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::client;
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpResponse};

    #[test]
    fn build_init_targets_init_endpoint() {
        let req = client().build_init();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:9443/api/v4.1/init");
    }

    #[test]
    fn parse_init_reports_bad_credentials() {
        let err = client().parse_init(HttpResponse::new(401, "")).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { status: 401 }));
        assert!(client().parse_init(HttpResponse::new(200, "")).is_ok());
    }
}

use super::{parse_many, parse_one, StratosClient};
use crate::definition::Definition;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::ApplicationDefinition;

impl StratosClient {
    pub fn build_list_applications(&self) -> HttpRequest {
        self.get(&Endpoint::Applications)
    }

    pub fn parse_list_applications(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<ApplicationDefinition>, ApiError> {
        parse_many(response, "applications")
    }

    pub fn build_describe_application(&self, application_id: &str) -> HttpRequest {
        self.get(&Endpoint::Application {
            application_id: application_id.to_string(),
        })
    }

    pub fn parse_describe_application(
        &self,
        response: HttpResponse,
    ) -> Result<ApplicationDefinition, ApiError> {
        parse_one(response, "application")
    }

    pub fn build_deploy_application(
        &self,
        application: &Definition<ApplicationDefinition>,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, &Endpoint::Applications, application)
    }

    pub fn build_undeploy_application(&self, application_id: &str) -> HttpRequest {
        self.delete(&Endpoint::Application {
            application_id: application_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{client, ok};
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpResponse};

    #[test]
    fn describe_application_by_id() {
        let c = client();
        let req = c.build_describe_application("wordpress");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:9443/api/v4.1/applications/wordpress");
        let app = c
            .parse_describe_application(ok(r#"{"applicationId":"wordpress","status":"Active"}"#))
            .unwrap();
        assert_eq!(app.status.as_deref(), Some("Active"));
    }

    #[test]
    fn undeploy_failure_carries_server_message() {
        let err = client()
            .parse_deleted(HttpResponse::new(
                409,
                r#"{"Error":{"errorCode":409,"errorMessage":"Application wordpress is in use"}}"#,
            ))
            .unwrap_err();
        match err {
            ApiError::Api { status, message, .. } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Application wordpress is in use");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

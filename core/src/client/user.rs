use super::{parse_many, StratosClient};
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::UserInfo;

impl StratosClient {
    pub fn build_add_user(&self, user: &UserInfo) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, &Endpoint::Users, user)
    }

    pub fn build_list_users(&self) -> HttpRequest {
        self.get(&Endpoint::Users)
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<UserInfo>, ApiError> {
        parse_many(response, "users")
    }

    pub fn build_delete_user(&self, user_name: &str) -> HttpRequest {
        self.delete(&Endpoint::User {
            user_name: user_name.to_string(),
        })
    }
}

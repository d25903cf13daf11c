use crate::{
    abstract_trait::{auth::AuthServiceTrait, session::DynSessionStore},
    client::{ApiClient, ApiRequest},
    domain::{
        requests::auth::{LoginRequest, RegisterRequest},
        response::user::LoginResponse,
    },
};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
    session: DynSessionStore,
}

impl AuthService {
    pub fn new(client: ApiClient, session: DynSessionStore) -> Self {
        Self { client, session }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        info!("Logging in {email}");

        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self
            .client
            .call_json(ApiRequest::post("/login").json(&body)?)
            .await?;

        self.session.store(&response.token, &response.user).await?;

        info!("Logged in as user {}", response.user.id);
        Ok(response)
    }

    async fn register(&self, input: &RegisterRequest) -> Result<Value, ClientError> {
        info!("Registering {} as {}", input.email, input.role);

        self.client
            .call(ApiRequest::post("/register").json(input)?)
            .await
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.session.clear().await
    }
}

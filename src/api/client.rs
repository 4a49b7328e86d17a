//! reqwest implementation of the CRM backend contract

use super::models::{self, Credentials, Registration};
use super::{
    AnalyticsEntry, ApiError, CrmBackend, Customer, CustomerId, Interaction, LoginGrant,
    NewCustomer, NewInteraction,
};
use crate::config::Config;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

/// HTTP client for the CRM backend
///
/// Holds one pooled `reqwest::Client`; cloning is cheap.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration, connect_timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(concat!("smart-connect/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            &config.api_url,
            Duration::from_secs(config.request_timeout_secs),
            Duration::from_secs(config.connect_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the raw body of a 2xx response
    ///
    /// Non-2xx responses become `ApiError::Status`, carrying the backend's
    /// `message`/`error` field when the body has one.
    async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = request.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::transport)?;

        if !status.is_success() {
            tracing::debug!(endpoint, status = status.as_u16(), "Backend rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: models::error_message(&body),
            });
        }

        tracing::trace!(endpoint, bytes = body.len(), "Backend response received");
        Ok(body.to_vec())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<T, ApiError> {
        let endpoint = format!("GET {path}");
        let request = self.client.get(self.url(path)).bearer_auth(token);
        let body = self.send(&endpoint, request).await?;
        models::decode(&endpoint, &body)
    }

    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        token: Option<&str>,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>, ApiError> {
        let endpoint = format!("POST {path}");
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.send(&endpoint, request).await
    }
}

#[async_trait]
impl CrmBackend for HttpBackend {
    async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, ApiError> {
        let body = self
            .post_json(None, "/login", &Credentials { username, password })
            .await?;
        models::decode("POST /login", &body)
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        role: Option<&str>,
    ) -> Result<(), ApiError> {
        let registration = Registration {
            username,
            password,
            role,
        };
        self.post_json(None, "/register", &registration).await?;
        Ok(())
    }

    async fn list_customers(&self, token: &str) -> Result<Vec<Customer>, ApiError> {
        self.get_json(token, "/customers").await
    }

    async fn get_customer(&self, token: &str, id: CustomerId) -> Result<Customer, ApiError> {
        self.get_json(token, &format!("/customers/{id}")).await
    }

    async fn create_customer(&self, token: &str, customer: &NewCustomer) -> Result<(), ApiError> {
        self.post_json(Some(token), "/customers", customer).await?;
        Ok(())
    }

    async fn list_interactions(
        &self,
        token: &str,
        id: CustomerId,
    ) -> Result<Vec<Interaction>, ApiError> {
        self.get_json(token, &format!("/interactions/{id}")).await
    }

    async fn add_interaction(
        &self,
        token: &str,
        id: CustomerId,
        interaction: &NewInteraction,
    ) -> Result<(), ApiError> {
        self.post_json(Some(token), &format!("/interactions/{id}"), interaction)
            .await?;
        Ok(())
    }

    async fn recommendations(
        &self,
        token: &str,
        id: CustomerId,
    ) -> Result<Vec<String>, ApiError> {
        let path = format!("/recommendations/{id}");
        let endpoint = format!("GET {path}");
        let request = self.client.get(self.url(&path)).bearer_auth(token);
        let body = self.send(&endpoint, request).await?;
        models::decode_recommendations(&endpoint, &body)
    }

    async fn interaction_analytics(&self, token: &str) -> Result<Vec<AnalyticsEntry>, ApiError> {
        self.get_json(token, "/analytics/interactions").await
    }

    async fn send_email(&self, token: &str, id: CustomerId) -> Result<(), ApiError> {
        self.post_json(Some(token), &format!("/send-email/{id}"), &serde_json::json!({}))
            .await?;
        Ok(())
    }
}

// API module - the CRM backend contract
//
// Everything the client knows about the server lives here:
// - models: wire types and the explicit decode step
// - error: ApiError (transport / status / decode)
// - client: HttpBackend, the reqwest implementation of CrmBackend
//
// The store never talks HTTP. It emits commands, the runtime executes them
// against a CrmBackend, and results come back as completions.

mod client;
mod error;
pub mod models;

pub use client::HttpBackend;
pub use error::ApiError;
pub use models::{
    AnalyticsEntry, Customer, CustomerId, Interaction, LoginGrant, NewCustomer, NewInteraction,
};

use async_trait::async_trait;

/// The request/response surface of the CRM backend
///
/// One method per endpoint. Every method except `login` and `register`
/// takes the bearer token issued at login.
#[async_trait]
pub trait CrmBackend: Send + Sync {
    /// `POST /login`
    async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, ApiError>;

    /// `POST /register`
    async fn register(
        &self,
        username: &str,
        password: &str,
        role: Option<&str>,
    ) -> Result<(), ApiError>;

    /// `GET /customers`
    async fn list_customers(&self, token: &str) -> Result<Vec<Customer>, ApiError>;

    /// `GET /customers/{id}`
    async fn get_customer(&self, token: &str, id: CustomerId) -> Result<Customer, ApiError>;

    /// `POST /customers`
    async fn create_customer(&self, token: &str, customer: &NewCustomer) -> Result<(), ApiError>;

    /// `GET /interactions/{id}`
    async fn list_interactions(
        &self,
        token: &str,
        id: CustomerId,
    ) -> Result<Vec<Interaction>, ApiError>;

    /// `POST /interactions/{id}`
    async fn add_interaction(
        &self,
        token: &str,
        id: CustomerId,
        interaction: &NewInteraction,
    ) -> Result<(), ApiError>;

    /// `GET /recommendations/{id}`
    async fn recommendations(&self, token: &str, id: CustomerId)
        -> Result<Vec<String>, ApiError>;

    /// `GET /analytics/interactions`
    async fn interaction_analytics(&self, token: &str) -> Result<Vec<AnalyticsEntry>, ApiError>;

    /// `POST /send-email/{id}`
    async fn send_email(&self, token: &str, id: CustomerId) -> Result<(), ApiError>;
}

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::http::auth::AuthApiClient;
use crate::http::client::ApiClient;
use crate::services::admin::AdminService;
use crate::services::auth::AuthService;
use crate::services::events::EventsService;
use crate::services::orders::OrdersService;
use crate::session::store::SessionStore;
use crate::session::token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

/// The platform client: one session context plus the endpoint services,
/// wired once at application start.
pub struct PlatformClient {
    session: Arc<SessionStore>,
    auth: AuthService,
    events: EventsService,
    orders: OrdersService,
    admin: AdminService,
}

impl PlatformClient {
    /// Creates a new `PlatformClient` from the configuration.
    ///
    /// With `token_file` set, the bearer token persists across restarts
    /// and is restored into the session at construction.
    ///
    /// # Arguments
    ///
    /// * `config` - The client configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `PlatformClient`.
    pub fn new(config: &Config) -> Result<Self> {
        let tokens: Arc<dyn TokenStore> = match &config.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path)),
            None => Arc::new(MemoryTokenStore::default()),
        };

        let session = Arc::new(SessionStore::new(tokens));
        let api = ApiClient::new(config)?;
        let auth_api = AuthApiClient::new(api.clone(), session.clone());

        Ok(Self {
            auth: AuthService::new(api.clone(), session.clone()),
            events: EventsService::new(api),
            orders: OrdersService::new(auth_api.clone()),
            admin: AdminService::new(auth_api),
            session,
        })
    }

    /// The session context shared by all services.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Session lifecycle operations.
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Public event catalog.
    pub fn events(&self) -> &EventsService {
        &self.events
    }

    /// The current user's orders.
    pub fn orders(&self) -> &OrdersService {
        &self.orders
    }

    /// Administration endpoints.
    pub fn admin(&self) -> &AdminService {
        &self.admin
    }
}

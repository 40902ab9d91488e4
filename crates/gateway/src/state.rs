//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::{AuthService, Authenticator};
use storage_service_lib::Storage;

use crate::clients::{Assistant, CannedAssistant};
use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub auth_service: Arc<dyn AuthService>,
    pub assistant: Arc<dyn Assistant>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        storage: Arc<dyn Storage>,
        auth_service: Arc<dyn AuthService>,
        assistant: Arc<dyn Assistant>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            storage,
            auth_service,
            assistant,
            config,
        }
    }

    /// Wire the default services around `storage`.
    pub fn with_storage(storage: Arc<dyn Storage>, config: GatewayConfig) -> Self {
        let auth_service = Arc::new(Authenticator::new(
            storage.clone(),
            config.password_scheme(),
        ));

        Self::new(storage, auth_service, Arc::new(CannedAssistant), config)
    }
}

use crate::config::ServerConfig;
use crate::hub::ClientHub;
use dispatcher::Dispatcher;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Connected client views + displayed notifications
    pub hub: Arc<ClientHub>,

    /// Event dispatcher driving the hub
    pub dispatcher: Arc<Dispatcher<ClientHub>>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> Self {
        let hub = Arc::new(ClientHub::new());
        let dispatcher = Arc::new(Dispatcher::new(hub.clone(), config.dispatcher.clone()));

        Self {
            config: Arc::new(config),
            hub,
            dispatcher,
        }
    }
}

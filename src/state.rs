use axum::extract::FromRef;
use leptos::prelude::LeptosOptions;

use crate::api::proxy::ProxyState;
use crate::config::ServerConfig;

/// Shared state of the SSR server.
#[derive(Clone)]
pub struct ServerState {
    pub leptos_options: LeptosOptions,
    pub config: ServerConfig,
    pub proxy: ProxyState,
}

impl ServerState {
    pub fn new(leptos_options: LeptosOptions, config: ServerConfig) -> Self {
        let proxy = ProxyState::from_config(&config);
        Self {
            leptos_options,
            config,
            proxy,
        }
    }
}

impl FromRef<ServerState> for LeptosOptions {
    fn from_ref(state: &ServerState) -> Self {
        state.leptos_options.clone()
    }
}

impl FromRef<ServerState> for ProxyState {
    fn from_ref(state: &ServerState) -> Self {
        state.proxy.clone()
    }
}
